use encoding_rs::Encoding;

/// Detect the encoding of raw document bytes, honoring a BOM and the
/// charset declared in the prolog. Falls back to UTF-8 when nothing is
/// detected.
pub(crate) fn detect_encoding(data: &[u8]) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = xhtmlchardet::detect(&mut cursor, None).ok()?;
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        &charsets[0]
    };
    Encoding::for_label(label.as_bytes())
}
