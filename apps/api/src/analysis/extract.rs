//! CV text extraction from uploaded PDF bytes.

use crate::errors::AppError;

/// Extracts text from PDF bytes and lower-cases it for keyword matching.
/// Unreadable documents surface as a client error.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Validation(format!("Error extracting text from PDF: {e}")))?;
    Ok(text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_validation_error() {
        let result = extract_text_from_pdf(b"definitely not a pdf");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
