use crate::error::PipelineError;

/// Extensions the upload form accepts. Anything else is bounced back to
/// the form with a notice before a single byte touches disk.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Lowercased substring after the final `.`, if the name contains one.
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Returns the extension only when it names a supported raster format.
pub fn validated_extension(filename: &str) -> Option<String> {
    extension_of(filename).filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// The original form contract: a `.` somewhere in the name and a
/// supported extension after the last one.
pub fn allowed_file(filename: &str) -> bool {
    validated_extension(filename).is_some()
}

/// Full validation as the pipeline sees it: the accepted extension, or
/// a `Validation` error naming the offending filename.
pub fn validate(filename: &str) -> Result<String, PipelineError> {
    validated_extension(filename)
        .ok_or_else(|| PipelineError::Validation(format!("unsupported filename {filename:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_extensions_case_insensitively() {
        assert!(allowed_file("dog.png"));
        assert!(allowed_file("dog.JPG"));
        assert!(allowed_file("dog.Jpeg"));
        assert!(allowed_file(".png"));
        assert!(allowed_file("archive.tar.jpg"));
    }

    #[test]
    fn rejects_missing_dot_or_unsupported_extension() {
        assert!(!allowed_file("dog"));
        assert!(!allowed_file("dog.gif"));
        assert!(!allowed_file("dog.txt"));
        assert!(!allowed_file("archive.tar.gz"));
        assert!(!allowed_file("photo."));
        assert!(!allowed_file(""));
    }

    #[test]
    fn validate_names_the_offending_file() {
        assert_eq!(validate("cat.png").unwrap(), "png");
        let err = validate("cat.gif").unwrap_err();
        assert!(err.to_string().contains("cat.gif"));
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(validated_extension("cat.PNG").as_deref(), Some("png"));
        assert_eq!(validated_extension("cat.jpeg").as_deref(), Some("jpeg"));
        assert_eq!(validated_extension("cat"), None);
    }
}
