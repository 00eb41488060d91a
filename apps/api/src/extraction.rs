//! PDF text extraction — the best-effort collaborator feeding the ranker.
//!
//! Extraction never fails: anything that cannot be read yields the sentinel
//! string, which the ranker treats as ordinary (low-scoring) text. Parsing
//! correctness is explicitly not this service's problem.

use tracing::warn;

/// Sentinel returned for documents yielding no extractable text. Scored like
/// any other document — no special-casing downstream.
pub const NO_EXTRACTABLE_TEXT: &str = "(No extractable text)";

/// Extracts text from in-memory PDF bytes. Empty output, garbage bytes, and
/// parser errors all collapse to [`NO_EXTRACTABLE_TEXT`].
pub fn extract_text(name: &str, data: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("'{name}': PDF contained no extractable text");
            NO_EXTRACTABLE_TEXT.to_string()
        }
        Err(e) => {
            warn!("'{name}': PDF text extraction failed: {e}");
            NO_EXTRACTABLE_TEXT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_sentinel() {
        assert_eq!(
            extract_text("bogus.pdf", b"definitely not a pdf"),
            NO_EXTRACTABLE_TEXT
        );
    }

    #[test]
    fn test_empty_bytes_yield_sentinel() {
        assert_eq!(extract_text("empty.pdf", b""), NO_EXTRACTABLE_TEXT);
    }

    #[test]
    fn test_sentinel_tokenizes_like_ordinary_text() {
        // The sentinel flows through the ranker as normal text.
        let tokens = crate::ranking::tokenizer::tokenize(NO_EXTRACTABLE_TEXT, false);
        assert_eq!(tokens, vec!["no", "extractable", "text"]);
    }
}
