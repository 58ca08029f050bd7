//! Text-run scanning over raw `document.xml` content.
//!
//! Two strategies are provided:
//!
//! - [`text_runs`] is a literal pattern scan. It tolerates malformed markup
//!   around the runs and keeps the inner content byte-for-byte, entities included.
//! - [`text_runs_xml`] tokenizes the content with an XML reader and decodes
//!   entities. Malformed markup is an error.

use crate::error::Result;
use crate::options::ScanMode;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::borrow::{Borrow, Cow};
use std::sync::LazyLock;

/// Qualified name of the WordprocessingML text element.
const TEXT_TAG: &[u8] = b"w:t";

// Opening tag named exactly `w:t` with optional attributes (self-closing tags
// excluded), non-greedy inner content, literal closing tag. Inner content never
// crosses a line break, and a bare `\r` counts as one.
static RE_TEXT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*[^>/])?\s*>([^\r\n]*?)</w:t>").expect("valid text run regex")
});

/// Scan `content` with the given strategy.
pub fn scan(content: &str, mode: ScanMode) -> Result<Vec<Cow<'_, str>>> {
    let runs: Vec<Cow<'_, str>> = match mode {
        ScanMode::Literal => text_runs(content).into_iter().map(Cow::Borrowed).collect(),
        ScanMode::Xml => text_runs_xml(content)?.into_iter().map(Cow::Owned).collect(),
    };
    tracing::debug!(mode = ?mode, runs = runs.len(), "scanned text runs");
    Ok(runs)
}

/// Collect the inner content of every `<w:t ...>...</w:t>` match, in order.
///
/// # Example
///
/// ```
/// use wtext::scan::text_runs;
///
/// let runs = text_runs(r#"<w:r><w:t xml:space="preserve">Hi </w:t></w:r><w:t>there</w:t>"#);
/// assert_eq!(runs, vec!["Hi ", "there"]);
/// ```
pub fn text_runs(content: &str) -> Vec<&str> {
    RE_TEXT_RUN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Collect the decoded text of every `w:t` element using an XML reader.
///
/// Text and CDATA children are concatenated with entities resolved. A
/// self-closing `<w:t/>` yields an empty run.
pub fn text_runs_xml(content: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut runs = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == TEXT_TAG => {
                current = Some(String::new());
            }
            Event::Empty(e) if e.name().as_ref() == TEXT_TAG => {
                runs.push(String::new());
            }
            Event::Text(e) => {
                if let Some(run) = current.as_mut() {
                    run.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(run) = current.as_mut() {
                    run.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) if e.name().as_ref() == TEXT_TAG => {
                if let Some(run) = current.take() {
                    runs.push(run);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(runs)
}

/// Join runs with `separator` between adjacent elements.
///
/// Empty runs still take a slot, so `["A", "", "B"]` joined by a space is
/// `"A  B"`.
pub fn join_runs<S: Borrow<str>>(runs: &[S], separator: &str) -> String {
    runs.join(separator)
}
