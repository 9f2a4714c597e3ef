use pdf_extract::extract_text_from_mem;

/// Text of every page, in page order. Pages without extractable text contribute nothing.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, String> {
    if !data.starts_with(b"%PDF-") {
        return Err("missing PDF header".to_string());
    }

    // pdf-extract can panic on malformed content streams; keep that inside the adapter.
    let result = std::panic::catch_unwind(|| extract_text_from_mem(data));
    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("PDF parser aborted on malformed content".to_string()),
    }
}
