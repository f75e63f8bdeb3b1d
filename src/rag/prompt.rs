//! Prompt templates for grounded and open answering.
//!
//! Pure templating. Which template applies is decided by the engine's mode
//! selection and never re-derived here; retrieved context never enters the
//! open template.

use super::store::RetrievalHit;

/// Phrase the model must emit verbatim when the context cannot answer.
pub const INSUFFICIENT_CONTEXT_REPLY: &str = "ฉันไม่มีข้อมูลเพียงพอที่จะตอบคำถามนี้";

/// Grounded template: answer only from the given context, in Thai,
/// 2-3 sentences.
pub fn grounded_prompt(context: &str, question: &str) -> String {
    format!(
        "คุณเป็นผู้ช่วยที่ให้คำตอบโดยอ้างอิงจาก Context ด้านล่างเท่านั้น\n\
         ถ้า Context ไม่มีคำตอบ ให้ตอบว่า: \"{INSUFFICIENT_CONTEXT_REPLY}\"\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         คำถาม:\n\
         {question}\n\
         \n\
         โปรดตอบเป็นภาษาไทย 2–3 ประโยค\n"
    )
}

/// Open template: general concise Thai answer, short example if useful.
pub fn open_prompt(question: &str) -> String {
    format!(
        "You are a helpful assistant. Explain clearly and concisely.\n\
         \n\
         Question:\n\
         {question}\n\
         \n\
         Answer in Thai, 2–3 sentences, give a short example if useful.\n"
    )
}

/// Joins hit texts by newline, preserving ranked order.
pub fn join_context(hits: &[RetrievalHit]) -> String {
    hits.iter()
        .map(|h| h.document.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rag::store::StoredDocument;

    fn hit(text: &str, similarity: f32) -> RetrievalHit {
        RetrievalHit {
            document: StoredDocument {
                doc_id: uuid::Uuid::new_v4().to_string(),
                text: text.to_string(),
                source: "test".to_string(),
            },
            similarity,
        }
    }

    #[test]
    fn join_context_preserves_ranked_order() {
        let hits = vec![hit("first", 0.4), hit("second", 0.35)];
        assert_eq!(join_context(&hits), "first\nsecond");
    }

    #[test]
    fn grounded_prompt_embeds_context_and_question() {
        let prompt = grounded_prompt("บริบท", "คำถามของฉัน");
        assert!(prompt.contains("Context:\nบริบท"));
        assert!(prompt.contains("คำถาม:\nคำถามของฉัน"));
        assert!(prompt.contains(INSUFFICIENT_CONTEXT_REPLY));
    }

    #[test]
    fn open_prompt_contains_only_the_question() {
        let prompt = open_prompt("what is rust?");
        assert!(prompt.contains("Question:\nwhat is rust?"));
        assert!(!prompt.contains("Context:"));
    }
}
