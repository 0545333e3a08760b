// src/error.rs

/// Everything the converter can show in its error banner.
///
/// The `Display` text is exactly what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConverterError {
    #[error("Please enter a valid GitHub repository URL")]
    InvalidUrl,
    #[error("An error occurred while converting the URL")]
    ConversionFailure,
    #[error("Failed to copy to clipboard")]
    ClipboardFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_banner_text() {
        assert_eq!(
            ConverterError::InvalidUrl.to_string(),
            "Please enter a valid GitHub repository URL"
        );
        assert_eq!(
            ConverterError::ConversionFailure.to_string(),
            "An error occurred while converting the URL"
        );
        assert_eq!(
            ConverterError::ClipboardFailure.to_string(),
            "Failed to copy to clipboard"
        );
    }
}
