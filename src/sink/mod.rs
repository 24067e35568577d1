mod markers;
mod scan;


pub use scan::ScanError;

use crate::{buffer::ScanBuffer, stat::DiffStat};
use markers::MarkerSet;
use scan::LineScanner;
use std::io;

const DEFAULT_CAPACITY: usize = 0x1FFF;
const DEFAULT_ENCODING: &str = "utf-8";
const DEFAULT_EOL: &[u8] = b"\n";

/// Count the added and removed lines of a complete diff text
///
/// The text must be a single file's unified diff carrying the SVN-style
/// four-line header.
///
/// ```
/// use diffstat::count_diff;
///
/// let s = "\
/// Index: a.txt
/// ===================================================================
/// --- a.txt (revision 1)
/// +++ a.txt (revision 2)
/// @@ -1,2 +1,3 @@
/// -old
/// +new
/// +extra
///  unchanged
/// ";
///
/// let stat = count_diff(s).unwrap();
/// assert_eq!(stat.added(), 2);
/// assert_eq!(stat.removed(), 1);
/// ```
pub fn count_diff(diff: &str) -> Result<DiffStat, ScanError> {
    count_diff_bytes(diff.as_bytes())
}

/// Count the added and removed lines of a complete non-utf8 diff text
pub fn count_diff_bytes(diff: &[u8]) -> Result<DiffStat, ScanError> {
    let mut sink = StatSink::new();
    sink.write_bytes(diff)?;
    sink.finish()
}

/// A streaming byte sink which tallies the added and removed lines of a
/// single file's unified diff
///
/// Bytes are buffered as written and only interpreted once the buffer
/// would overflow or [`finish`] is called, so writes may split lines (or
/// the markers themselves) at arbitrary boundaries without changing the
/// final counts. A line longer than the buffer grows it rather than
/// failing; data is never dropped.
///
/// The sink expects the stream to open with the four-line SVN diff header
/// (`Index:`, separator, `---`, `+++`). After [`finish`], call [`reset`]
/// to reuse the sink (and its buffer) for the next file's diff.
///
/// ```
/// use diffstat::StatSink;
///
/// let s = "\
/// Index: a.txt
/// ===================================================================
/// --- a.txt (revision 1)
/// +++ a.txt (revision 2)
/// @@ -1,2 +1,3 @@
/// -old
/// +new
/// +extra
///  unchanged
/// ";
///
/// let mut sink = StatSink::new();
/// for chunk in s.as_bytes().chunks(7) {
///     sink.write_bytes(chunk)?;
/// }
///
/// let stat = sink.finish()?;
/// assert_eq!(stat.added(), 2);
/// assert_eq!(stat.removed(), 1);
/// # Ok::<(), diffstat::ScanError>(())
/// ```
///
/// [`finish`]: StatSink::finish
/// [`reset`]: StatSink::reset
#[derive(Debug)]
pub struct StatSink {
    buffer: ScanBuffer,
    scanner: LineScanner,
}

impl StatSink {
    /// Construct a new sink with the default configuration
    ///
    /// See [`SinkOptions::new`] for the defaults; use [`SinkOptions`] to
    /// change them.
    pub fn new() -> Self {
        Self {
            buffer: ScanBuffer::with_capacity(DEFAULT_CAPACITY),
            scanner: LineScanner::new(MarkerSet::default(), DEFAULT_EOL.to_vec()),
        }
    }

    /// Append bytes of diff output, in stream order
    ///
    /// Triggers a parse pass only when the buffered data plus `bytes`
    /// would overflow the buffer. An error is terminal for the current
    /// diff: discard the stream and [`reset`] before feeding the next one.
    ///
    /// [`reset`]: StatSink::reset
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ScanError> {
        if !self.buffer.fits(bytes.len()) {
            // an empty window has no lines to reclaim
            if !self.buffer.unread().is_empty() {
                self.scanner.scan(&mut self.buffer)?;
            }
            self.buffer.compact();
            self.buffer.grow(bytes.len());
        }
        self.buffer.push(bytes);
        Ok(())
    }

    /// Append a single byte of diff output
    pub fn write_byte(&mut self, byte: u8) -> Result<(), ScanError> {
        self.write_bytes(&[byte])
    }

    /// Run a final parse pass over the remaining complete lines and return
    /// the tally
    ///
    /// Trailing bytes not terminated by the EOL sequence are not counted.
    /// The sink's state is left as-is; [`reset`] is required before
    /// feeding another diff.
    ///
    /// [`reset`]: StatSink::reset
    pub fn finish(&mut self) -> Result<DiffStat, ScanError> {
        self.scanner.scan(&mut self.buffer)?;
        Ok(DiffStat::new(self.scanner.added(), self.scanner.removed()))
    }

    /// Reset counters, cursors, and the header state for the next diff
    ///
    /// The buffer allocation and the configured markers and EOL sequence
    /// are kept.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.scanner.reset();
    }
}

impl Default for StatSink {
    fn default() -> Self {
        Self::new()
    }
}

/// `write` never performs partial writes: every call buffers the whole
/// slice (growing the buffer if a parse pass cannot reclaim enough space)
/// or fails. `flush` is a no-op since bytes are only interpreted during
/// parse passes.
impl io::Write for StatSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Struct used to adjust the configuration of a [`StatSink`]
///
/// ```
/// use diffstat::SinkOptions;
///
/// let mut sink = SinkOptions::new()
///     .set_eol(b"\r\n")
///     .set_capacity(1024)
///     .build()
///     .unwrap();
/// sink.write_bytes(b"Index: a.txt\r\n").unwrap();
/// ```
#[derive(Debug)]
pub struct SinkOptions {
    capacity: usize,
    encoding: String,
    eol: Vec<u8>,
}

impl SinkOptions {
    /// Constructs a new `SinkOptions` with default settings
    ///
    /// ## Defaults
    /// * capacity = 8191 bytes
    /// * encoding = "utf-8"
    /// * eol = `b"\n"`
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            encoding: DEFAULT_ENCODING.to_owned(),
            eol: DEFAULT_EOL.to_vec(),
        }
    }

    /// Set the initial capacity of the scan buffer
    ///
    /// The buffer still grows when a single line exceeds it.
    pub fn set_capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Set the text encoding of the diff stream
    ///
    /// Only ASCII-compatible encodings are supported; any other label
    /// makes [`build`] fail with [`ScanError::UnsupportedEncoding`].
    ///
    /// [`build`]: SinkOptions::build
    pub fn set_encoding(&mut self, encoding: &str) -> &mut Self {
        self.encoding = encoding.to_owned();
        self
    }

    /// Set the end-of-line byte sequence delimiting lines of the stream
    ///
    /// Line boundaries are recognized only by exact match of this
    /// sequence.
    pub fn set_eol(&mut self, eol: &[u8]) -> &mut Self {
        self.eol = eol.to_vec();
        self
    }

    /// Build a [`StatSink`] from this configuration
    pub fn build(&self) -> Result<StatSink, ScanError> {
        if self.eol.is_empty() {
            return Err(ScanError::InvalidEol);
        }
        let markers = MarkerSet::for_encoding(&self.encoding)?;

        Ok(StatSink {
            buffer: ScanBuffer::with_capacity(self.capacity),
            scanner: LineScanner::new(markers, self.eol.clone()),
        })
    }
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self::new()
    }
}
