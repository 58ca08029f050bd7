//! # wtext
//!
//! Text-run extraction from the main part of an unpacked Word document.
//!
//! Given `word/document.xml` from an already-unzipped `.docx`, wtext collects
//! the content of every `<w:t>` element in document order and joins the runs
//! with a single space.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wtext::{extract, DEFAULT_DOCUMENT_PATH};
//!
//! let text = extract(DEFAULT_DOCUMENT_PATH)?;
//! println!("{}", text);
//! # Ok::<(), wtext::Error>(())
//! ```
//!
//! ## Scan Modes
//!
//! The default [`ScanMode::Literal`] keeps run content verbatim, so `&amp;`
//! stays `&amp;`. [`ScanMode::Xml`] runs a real XML tokenizer and decodes
//! entities, at the cost of rejecting malformed markup.
//!
//! ```
//! use wtext::{extract_str, ExtractOptions, ScanMode};
//!
//! let xml = "<w:t>R&amp;D</w:t><w:t>team</w:t>";
//! assert_eq!(extract_str(xml, &ExtractOptions::default())?, "R&amp;D team");
//!
//! let options = ExtractOptions::new().with_mode(ScanMode::Xml);
//! assert_eq!(extract_str(xml, &options)?, "R&D team");
//! # Ok::<(), wtext::Error>(())
//! ```

pub mod error;
pub mod options;
pub mod scan;
pub mod source;

// Re-exports
pub use error::{Error, Result};
pub use options::{ExtractOptions, ScanMode};
pub use scan::join_runs;
pub use source::DEFAULT_DOCUMENT_PATH;

use std::path::Path;

/// Extract the space-joined text runs of a document part.
///
/// # Example
///
/// ```no_run
/// use wtext::extract;
///
/// let text = extract("temp_docx/word/document.xml")?;
/// println!("{}", text);
/// # Ok::<(), wtext::Error>(())
/// ```
pub fn extract(path: impl AsRef<Path>) -> Result<String> {
    extract_with_options(path, &ExtractOptions::default())
}

/// Extract the text runs of a document part with options.
///
/// # Example
///
/// ```no_run
/// use wtext::{extract_with_options, ExtractOptions, ScanMode};
///
/// let options = ExtractOptions::new()
///     .with_mode(ScanMode::Xml)
///     .with_separator("\n");
///
/// let text = extract_with_options("temp_docx/word/document.xml", &options)?;
/// # Ok::<(), wtext::Error>(())
/// ```
pub fn extract_with_options(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<String> {
    let content = source::read_document(path)?;
    extract_str(&content, options)
}

/// Extract the text runs of in-memory document content.
pub fn extract_str(content: &str, options: &ExtractOptions) -> Result<String> {
    let runs = scan::scan(content, options.mode)?;
    Ok(join_runs(&runs, &options.separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_str_default() {
        let text = extract_str("<w:t>Hello</w:t><w:t>World</w:t>", &ExtractOptions::default());
        assert_eq!(text.unwrap(), "Hello World");
    }

    #[test]
    fn test_extract_str_separator() {
        let options = ExtractOptions::new().with_separator(" | ");
        let text = extract_str("<w:t>a</w:t><w:t>b</w:t>", &options).unwrap();
        assert_eq!(text, "a | b");
    }

    #[test]
    fn test_extract_str_literal_never_fails_on_bad_xml() {
        let text = extract_str("<w:t>x</w:t></w:p></w:p>", &ExtractOptions::default());
        assert_eq!(text.unwrap(), "x");

        let options = ExtractOptions::new().with_mode(ScanMode::Xml);
        assert!(matches!(
            extract_str("<w:t>x</w:t></w:p></w:p>", &options),
            Err(Error::XmlParse(_))
        ));
    }

    #[test]
    fn test_default_path_contract() {
        assert_eq!(DEFAULT_DOCUMENT_PATH, "temp_docx/word/document.xml");
    }
}
