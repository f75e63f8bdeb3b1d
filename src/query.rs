//! Query normalization and the greeting shortcut.
//!
//! Pure functions, no external calls. The greeting check runs before any
//! retrieval or generation so trivial salutations never cost an API call.

/// Greeting tokens matched against the trimmed, lower-cased query.
const GREETINGS: [&str; 6] = ["hi", "hello", "hey", "สวัสดี", "หวัดดี", "เฮลโล่"];

/// Canned reply for greeting queries.
pub const GREETING_REPLY: &str = "สวัสดีค่ะ 😊 ฉันช่วยตอบคำถามจากเอกสารของคุณได้ ลองถามว่า “Python คืออะไร” หรือ “มีหัวข้ออะไรในเอกสารบ้าง?”";

/// Trims the raw question text. An empty result means the request must be
/// rejected with `ApiError::EmptyQuery` before any further work.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_string()
}

/// Returns the canned greeting when the query equals or starts with a
/// greeting token, otherwise `None`.
pub fn greeting_reply(query: &str) -> Option<&'static str> {
    let qn = query.trim().to_lowercase();
    if qn.is_empty() {
        return None;
    }
    if GREETINGS.iter().any(|g| qn.starts_with(g)) {
        Some(GREETING_REPLY)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize("  what is rust?  \n"), "what is rust?");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn exact_greetings_are_detected() {
        for q in ["hi", "hello", "hey", "สวัสดี", "หวัดดี", "เฮลโล่"] {
            assert_eq!(greeting_reply(q), Some(GREETING_REPLY), "query: {q}");
        }
    }

    #[test]
    fn greeting_detection_is_case_insensitive_and_prefix_based() {
        assert_eq!(greeting_reply("Hello there"), Some(GREETING_REPLY));
        assert_eq!(greeting_reply("  HEY  "), Some(GREETING_REPLY));
        assert_eq!(greeting_reply("สวัสดีครับ"), Some(GREETING_REPLY));
    }

    #[test]
    fn non_greetings_pass_through() {
        assert_eq!(greeting_reply("what is python?"), None);
        assert_eq!(greeting_reply(""), None);
        assert_eq!(greeting_reply("   "), None);
    }
}
