use std::panic::{self, AssertUnwindSafe};

/// Extracts text with `pdf-extract`. The parser can panic on malformed
/// input, so panics are turned into errors here.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(format!("Unable to extract text from the PDF document: {e}")),
        Err(_) => Err("PDF parser panicked".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_error() {
        assert!(extract_pdf_text(b"").is_err());
    }

    #[test]
    fn test_not_a_pdf_is_error() {
        assert!(extract_pdf_text(b"plain text pretending to be a pdf").is_err());
    }
}
