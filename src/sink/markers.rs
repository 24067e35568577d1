use super::scan::ScanError;

const INDEX_PREFIX: &str = "Index: ";
const SEPARATOR: &str = "===================================================================";
const OLD_FILE: &str = "--- ";
const NEW_FILE: &str = "+++ ";
const ADDED: &str = "+";
const REMOVED: &str = "-";

// Encodings whose code units below 0x80 are ASCII. Every marker is pure
// ASCII, so under any of these encodings the marker bytes are the ASCII
// bytes of the literals above.
const ASCII_COMPATIBLE: &[&str] = &[
    "ascii",
    "us-ascii",
    "utf-8",
    "utf8",
    "iso-8859-1",
    "latin1",
    "windows-1252",
];

/// The marker strings recognized in a diff stream, fixed at build time.
#[derive(Copy, Clone, Debug)]
pub(crate) struct MarkerSet {
    pub index: &'static str,
    pub separator: &'static str,
    pub old_file: &'static str,
    pub new_file: &'static str,
    pub added: &'static str,
    pub removed: &'static str,
}

impl MarkerSet {
    /// Derive the marker set for a named text encoding.
    ///
    /// Encoding labels are matched case-insensitively. Encodings that are
    /// not ASCII-compatible (UTF-16 and friends) are rejected with
    /// [`ScanError::UnsupportedEncoding`].
    pub fn for_encoding(encoding: &str) -> Result<Self, ScanError> {
        let label = encoding.to_ascii_lowercase();
        if !ASCII_COMPATIBLE.contains(&label.as_str()) {
            return Err(ScanError::UnsupportedEncoding(encoding.to_owned()));
        }

        Ok(Self::default())
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            index: INDEX_PREFIX,
            separator: SEPARATOR,
            old_file: OLD_FILE,
            new_file: NEW_FILE,
            added: ADDED,
            removed: REMOVED,
        }
    }
}
