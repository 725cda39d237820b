//! Import and export of digraphs in text formats.
//!
//! Readers and writers only use the public API of [`Digraph`]: a reader creates
//! the graph once the vertex count is known, names vertices through
//! [`Digraph::name_vertex`] and inserts arcs through [`Digraph::add_arc`]. Vertex
//! numbering in the files is translated to [`VertexId`](crate::graph::VertexId)
//! at this boundary.
//!
//! # Supported Formats
//!
//! | Format | Extension | Module |
//! |--------|-----------|--------|
//! | Pajek network | `.net` | [`pajek`] |
//! | Stanford GraphBase | `.gb` | [`gb`] |
//!
//! # Examples
//!
//! ```rust
//! use std::io::Cursor;
//! use digraphs::{graph::Digraph, io::GraphFormat};
//!
//! let digraph = Digraph::from_arcs(2, [(0, 1)])?;
//!
//! let mut buffer = Vec::new();
//! GraphFormat::Pajek.write(&digraph, &mut buffer)?;
//! let restored = GraphFormat::Pajek.read(Cursor::new(buffer))?;
//!
//! assert_eq!(restored.size(), 1);
//! # Ok::<(), digraphs::Error>(())
//! ```

pub mod gb;
pub mod pajek;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{graph::Digraph, Error, Result};

/// File formats understood by [`read_path`] and [`write_path`].
///
/// Parses from and displays as its lowercase name (`pajek`, `gb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GraphFormat {
    /// Pajek `.net` network description
    Pajek,
    /// Stanford GraphBase `.gb` record format
    Gb,
}

impl GraphFormat {
    /// Returns the file extension for this format, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            GraphFormat::Pajek => pajek::FILE_EXTENSION,
            GraphFormat::Gb => gb::FILE_EXTENSION,
        }
    }

    /// Infers the format from the extension of `path`, ignoring ASCII case.
    ///
    /// Returns `None` for a missing or unknown extension.
    ///
    /// ```rust
    /// use digraphs::io::GraphFormat;
    ///
    /// assert_eq!(GraphFormat::from_path("words.NET"), Some(GraphFormat::Pajek));
    /// assert_eq!(GraphFormat::from_path("data/miles.gb"), Some(GraphFormat::Gb));
    /// assert_eq!(GraphFormat::from_path("graph.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        GraphFormat::iter().find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Reads a digraph in this format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`](crate::Error::Malformed) for invalid input and
    /// [`Error::Io`](crate::Error::Io) if reading fails.
    pub fn read<R: BufRead>(self, reader: R) -> Result<Digraph> {
        match self {
            GraphFormat::Pajek => pajek::read_pajek(reader),
            GraphFormat::Gb => gb::read_gb(reader),
        }
    }

    /// Writes `digraph` in this format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if writing fails.
    pub fn write<W: Write>(self, digraph: &Digraph, writer: W) -> Result<()> {
        match self {
            GraphFormat::Pajek => pajek::write_pajek(digraph, writer),
            GraphFormat::Gb => gb::write_gb(digraph, writer),
        }
    }
}

/// Reads the digraph stored in the file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or read,
/// and [`Error::Malformed`](crate::Error::Malformed) for invalid content.
pub fn read_path<P: AsRef<Path>>(path: P, format: GraphFormat) -> Result<Digraph> {
    let file = File::open(path.as_ref())?;
    log::debug!("reading {} graph from {}", format, path.as_ref().display());
    format.read(BufReader::new(file))
}

/// Writes `digraph` to the file at `path`, replacing any existing content.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be created or
/// written.
pub fn write_path<P: AsRef<Path>>(path: P, digraph: &Digraph, format: GraphFormat) -> Result<()> {
    let file = File::create(path.as_ref())?;
    log::debug!("writing {} graph to {}", format, path.as_ref().display());

    let mut writer = BufWriter::new(file);
    format.write(digraph, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Characters no label may contain in any line-oriented format.
pub(crate) const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Fails unless every assigned vertex label of `digraph` is non-empty and free of
/// `forbidden` characters.
///
/// Unnamed vertices are skipped, since writers emit them without a label.
pub(crate) fn check_labels(
    digraph: &Digraph,
    format: GraphFormat,
    forbidden: &[char],
) -> Result<()> {
    for vertex in digraph.vertices().filter(|&v| digraph.is_named(v)) {
        let label = digraph.vertex_name(vertex)?;
        if label.is_empty() || label.contains(forbidden) {
            return Err(Error::UnencodableLabel {
                label: label.into_owned(),
                format,
            });
        }
    }
    Ok(())
}

/// Line source that keeps track of the 1-based number of the last line read.
pub(crate) struct LineReader<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        LineReader {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }

    /// Returns the next line number and line without its terminator, or `None`
    /// at end of input.
    pub(crate) fn next_line(&mut self) -> Result<Option<(usize, &str)>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some((self.line, self.buffer.trim_end_matches(['\n', '\r']))))
    }

    /// Number of the line most recently returned by [`next_line`](Self::next_line).
    pub(crate) fn line(&self) -> usize {
        self.line
    }
}
