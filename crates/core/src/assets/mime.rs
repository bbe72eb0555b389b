//! MIME type -> file extension lookup.

/// Extension used for any MIME type not in [`MIME_EXTENSIONS`].
pub const FALLBACK_EXTENSION: &str = "bin";

/// Recognised image MIME types and the extension stored on disk.
pub const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/svg+xml", "svg"),
    ("image/avif", "avif"),
    ("image/bmp", "bmp"),
];

/// Derive the on-disk extension for a declared MIME type.
///
/// Matching ignores case and any `;`-separated parameters.
pub fn extension_for_mime(mime_type: &str) -> &'static str {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    MIME_EXTENSIONS
        .iter()
        .find(|(mime, _)| *mime == essence)
        .map(|(_, ext)| *ext)
        .unwrap_or(FALLBACK_EXTENSION)
}
