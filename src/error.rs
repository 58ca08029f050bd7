//! Error types for the wtext library.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for wtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting text runs.
#[derive(Error, Debug)]
pub enum Error {
    /// The document path does not exist or cannot be read.
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document content is not valid UTF-8.
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// Error parsing XML content (XML scan mode only).
    #[error("XML parse error: {0}")]
    XmlParse(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::FileAccess {
            path: PathBuf::from("temp_docx/word/document.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            err.to_string(),
            "cannot read temp_docx/word/document.xml: file not found"
        );

        let err = Error::XmlParse("unexpected end".to_string());
        assert_eq!(err.to_string(), "XML parse error: unexpected end");
    }

    #[test]
    fn test_error_source_is_kept() {
        use std::error::Error as _;

        let utf8_err = String::from_utf8(vec![0xC3, 0x28]).unwrap_err();
        let err = Error::Decoding {
            path: PathBuf::from("doc.xml"),
            source: utf8_err,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("doc.xml is not valid UTF-8"));
    }
}
