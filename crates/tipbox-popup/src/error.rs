#![forbid(unsafe_code)]

//! Errors raised by popup construction and configuration.

use tipbox_widgets::ParseBoxStyleError;

/// Error type for the popup layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupError {
    /// A choice popup was requested with no choices.
    EmptyChoices,
    /// A configuration value could not be parsed.
    InvalidConfig(String),
}

impl std::fmt::Display for PopupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyChoices => write!(f, "choice popup needs at least one choice"),
            Self::InvalidConfig(msg) => write!(f, "invalid popup config: {msg}"),
        }
    }
}

impl std::error::Error for PopupError {}

impl From<ParseBoxStyleError> for PopupError {
    fn from(err: ParseBoxStyleError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipbox_widgets::BoxStyle;

    #[test]
    fn display_messages() {
        assert_eq!(
            PopupError::EmptyChoices.to_string(),
            "choice popup needs at least one choice"
        );
        assert_eq!(
            PopupError::InvalidConfig("nope".into()).to_string(),
            "invalid popup config: nope"
        );
    }

    #[test]
    fn box_style_parse_error_converts() {
        let err: PopupError = "zigzag".parse::<BoxStyle>().unwrap_err().into();
        match err {
            PopupError::InvalidConfig(msg) => assert!(msg.contains("zigzag")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
