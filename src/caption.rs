use crate::error::CaptionError;

/// Decode raw caption bytes as UTF-8, before any layout happens. A leading byte-order
/// mark is dropped.
pub fn decode_caption(bytes: &[u8]) -> Result<&str, CaptionError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    Ok(std::str::from_utf8(bytes)?)
}
