use thiserror::Error;

/// Errors from material identification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifyError {
    #[error("Invalid description provided")]
    InvalidDescription,

    #[error("Invalid image data provided")]
    InvalidImage,

    #[error("image classifier failed: {0}")]
    Classifier(String),
}

pub type Result<T> = std::result::Result<T, IdentifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            IdentifyError::InvalidDescription.to_string(),
            "Invalid description provided"
        );
        assert_eq!(
            IdentifyError::InvalidImage.to_string(),
            "Invalid image data provided"
        );
        assert!(IdentifyError::Classifier("timeout".into())
            .to_string()
            .contains("timeout"));
    }
}
