//! Reading the unpacked `document.xml` part from disk.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Location of the main document part inside an unpacked `.docx` directory.
pub const DEFAULT_DOCUMENT_PATH: &str = "temp_docx/word/document.xml";

/// UTF-8 byte order mark.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Read a document part into memory as UTF-8 text.
///
/// The whole file is read before returning; the handle is closed when the
/// reader goes out of scope, whether or not the read succeeded.
///
/// # Example
///
/// ```no_run
/// use wtext::source::{read_document, DEFAULT_DOCUMENT_PATH};
///
/// let xml = read_document(DEFAULT_DOCUMENT_PATH)?;
/// println!("{} bytes", xml.len());
/// # Ok::<(), wtext::Error>(())
/// ```
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let access = |source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(access)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(access)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document part");
    decode_utf8(bytes, path)
}

/// Decode raw part bytes as UTF-8, dropping a leading byte order mark.
pub fn decode_utf8(mut bytes: Vec<u8>, path: &Path) -> Result<String> {
    if bytes.starts_with(&UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }

    String::from_utf8(bytes).map_err(|source| Error::Decoding {
        path: path.to_path_buf(),
        source,
    })
}
