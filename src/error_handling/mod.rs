//! Error handling.
//!
//! This module provides:
//! - `UrlError`, the single failure channel of URL validation
//! - `ErrorKind`, the category of a validation failure
//! - Initialization and argument errors for the surrounding tooling

mod types;

// Re-export public API
pub use types::{ArgumentError, ErrorKind, InitializationError, UrlError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kind_as_str_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in ErrorKind::iter() {
            assert!(seen.insert(kind.as_str()), "duplicate label for {kind:?}");
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_port_out_of_range_messages() {
        let zero = UrlError::PortOutOfRange {
            port: 0,
            input: "http://google.com:0".to_string(),
        };
        assert_eq!(
            zero.to_string(),
            "Port must be between 0 - 65535, provided URL: http://google.com:0"
        );

        let negative = UrlError::PortOutOfRange {
            port: -2,
            input: "http://google.com:-2".to_string(),
        };
        assert_eq!(
            negative.to_string(),
            "Invalid port number :-2, provided URL: http://google.com:-2"
        );
    }

    #[test]
    fn test_illegal_character_message_shows_normalized_url() {
        let err = UrlError::IllegalCharacter {
            component: "path",
            index: 18,
            normalized: "http://google.com/\\".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Illegal character in path at index 18: http://google.com/\\"
        );
        assert_eq!(err.kind(), ErrorKind::IllegalCharacter);
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(UrlError::InvalidInput.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            UrlError::DisallowedProtocol {
                input: "ftp://x".into()
            }
            .kind(),
            ErrorKind::DisallowedProtocol
        );
        assert_eq!(
            UrlError::NotUnderRegistrySuffix {
                host: "com".into(),
                input: "com".into()
            }
            .kind(),
            ErrorKind::NotUnderRegistrySuffix
        );
    }

    #[test]
    fn test_argument_error_display() {
        let err = ArgumentError("'max_url_length' must be > 0".to_string());
        assert_eq!(err.to_string(), "'max_url_length' must be > 0");
    }
}
