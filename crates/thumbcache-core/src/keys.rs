//! Key codec for original and resized blobs.
//!
//! The codec is pure and deterministic: the same (size, file name) pair must
//! always produce the same variant key, across processes and time, or cached
//! variants are never found again.
//!
//! Canonical variant scheme, used everywhere: `thumbnail/{size}/{file}`.
//! The original key is the decoded file name, unchanged. Callers must
//! URI-decode the incoming file name exactly once before key construction.

use crate::models::SizeSpec;

/// Prefix for all resized variants within the resized bucket.
pub const VARIANT_PREFIX: &str = "thumbnail";

/// Key of the unmodified source image.
pub fn original_key(file_name: &str) -> &str {
    file_name
}

/// Canonical key of a resized variant: `thumbnail/{size}/{file}`.
pub fn variant_key(size: &SizeSpec, file_name: &str) -> String {
    format!("{}/{}/{}", VARIANT_PREFIX, size, file_name)
}

/// File extension: the substring after the final `.`, if any.
pub fn extension(file_name: &str) -> Option<&str> {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Content type derived from the file extension.
///
/// Extensionless names get `application/octet-stream` rather than a
/// `application/<fullname>` echo of the whole file name.
pub fn content_type(file_name: &str) -> String {
    match extension(file_name) {
        Some(ext) => format!("application/{}", ext),
        None => "application/octet-stream".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_key_is_deterministic() {
        let size = SizeSpec::parse("16x16").unwrap();
        assert_eq!(variant_key(&size, "cat.png"), "thumbnail/16x16/cat.png");
        assert_eq!(
            variant_key(&size, "cat.png"),
            variant_key(&SizeSpec::parse("16x16").unwrap(), "cat.png")
        );
    }

    #[test]
    fn test_variant_key_keeps_embedded_separators() {
        let size = SizeSpec::parse("100x50").unwrap();
        assert_eq!(
            variant_key(&size, "albums/2024/cat.png"),
            "thumbnail/100x50/albums/2024/cat.png"
        );
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("cat.png"), Some("png"));
        assert_eq!(extension("archive.tar.gz"), Some("gz"));
        assert_eq!(extension("noextension"), None);
        assert_eq!(extension("trailingdot."), None);
    }

    #[test]
    fn test_content_type_fallback() {
        assert_eq!(content_type("cat.png"), "application/png");
        assert_eq!(content_type("noextension"), "application/octet-stream");
    }
}
