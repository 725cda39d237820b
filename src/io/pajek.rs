//! Pajek network format.
//!
//! A Pajek file is split into sections introduced by a line starting with `*`:
//!
//! ```text
//! % comment
//! *network words
//! *vertices 3
//! 1 "feel"
//! 2 "look"
//! 3 "smell"
//! *arcs
//! 1 2
//! 1 3
//! *edges
//! 2 3
//! ```
//!
//! Vertices are numbered from 1 in the file and from 0 in memory. Section names
//! are case-insensitive. Blank lines and lines starting with `%` are skipped.
//! Anything after the name of a vertex, or after the endpoints of an arc, is
//! ignored. Every `*edges` line adds the arc pair `v -> w`, `w -> v`, or a single
//! arc for a loop.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::{
    graph::{Digraph, VertexId},
    io::{check_labels, GraphFormat, LineReader, LINE_BREAKS},
    Error, Result,
};

/// File extension of Pajek network files.
pub const FILE_EXTENSION: &str = "net";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Arcs,
    Edges,
}

/// Reads a digraph from a Pajek network description.
///
/// The identifier is taken from the `*network` line if present. Vertex labels that
/// are already bound to another vertex are skipped with a warning, which leaves
/// the later vertex with its default name.
///
/// # Errors
///
/// Returns [`Error::Malformed`](crate::Error::Malformed) with the offending line
/// for unknown sections, missing or repeated `*vertices` headers, unparsable
/// numbers and vertex numbers outside `1..=n`. I/O failures surface as
/// [`Error::Io`](crate::Error::Io).
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use digraphs::{graph::VertexId, io::pajek::read_pajek};
///
/// let text = "*network words\n*vertices 2\n1 \"feel\"\n2 \"look\"\n*arcs\n1 2\n";
/// let digraph = read_pajek(Cursor::new(text))?;
///
/// assert_eq!(digraph.id(), "words");
/// assert_eq!(digraph.vertex_index("look")?, VertexId::new(1));
/// assert_eq!(digraph.adjacency(VertexId::new(0))?, &[VertexId::new(1)]);
/// # Ok::<(), digraphs::Error>(())
/// ```
pub fn read_pajek<R: BufRead>(reader: R) -> Result<Digraph> {
    let mut lines = LineReader::new(reader);
    let mut section = Section::Preamble;
    let mut network_id: Option<String> = None;
    let mut digraph: Option<Digraph> = None;

    while let Some((line, text)) = lines.next_line()? {
        let text = text.trim();
        if text.is_empty() || text.starts_with('%') {
            continue;
        }

        if let Some(header) = text.strip_prefix('*') {
            let (keyword, rest) = header
                .split_once(char::is_whitespace)
                .unwrap_or((header, ""));
            let rest = rest.trim();

            match keyword.to_ascii_lowercase().as_str() {
                "network" => {
                    if let Some(digraph) = digraph.as_mut() {
                        digraph.set_id(rest);
                    }
                    network_id = Some(rest.to_string());
                    section = Section::Preamble;
                }
                "vertices" => {
                    if digraph.is_some() {
                        return Err(malformed_error!(line, "repeated *vertices section"));
                    }
                    let count = rest.split_whitespace().next().unwrap_or_default();
                    let order: usize = count.parse().map_err(|_| {
                        malformed_error!(line, "invalid vertex count \"{}\"", count)
                    })?;

                    let mut created = Digraph::try_new(order).ok_or_else(|| {
                        malformed_error!(line, "vertex count {} cannot be allocated", order)
                    })?;
                    if let Some(id) = network_id.as_deref() {
                        created.set_id(id);
                    }
                    digraph = Some(created);
                    section = Section::Vertices;
                }
                "arcs" | "edges" => {
                    if digraph.is_none() {
                        return Err(malformed_error!(
                            line,
                            "*{} section before *vertices",
                            keyword
                        ));
                    }
                    section = if keyword.eq_ignore_ascii_case("arcs") {
                        Section::Arcs
                    } else {
                        Section::Edges
                    };
                }
                _ => return Err(malformed_error!(line, "unknown section \"*{}\"", keyword)),
            }
            continue;
        }

        let Some(digraph) = digraph.as_mut() else {
            return Err(malformed_error!(line, "content before *vertices section"));
        };

        match section {
            Section::Preamble => {
                return Err(malformed_error!(line, "content outside of a section"));
            }
            Section::Vertices => read_vertex(digraph, text, line)?,
            Section::Arcs => {
                let (v, w) = read_pair(digraph, text, line)?;
                digraph.add_arc(v, w)?;
            }
            Section::Edges => {
                let (v, w) = read_pair(digraph, text, line)?;
                digraph.add_arc(v, w)?;
                if v != w {
                    digraph.add_arc(w, v)?;
                }
            }
        }
    }

    let digraph = digraph.ok_or_else(|| {
        malformed_error!(lines.line(), "missing *vertices section")
    })?;
    debug!(
        "read pajek network '{}': {} vertices, {} arcs",
        digraph,
        digraph.order(),
        digraph.size()
    );
    Ok(digraph)
}

fn read_vertex(digraph: &mut Digraph, text: &str, line: usize) -> Result<()> {
    let (number, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
    let vertex = parse_vertex(digraph, number, line)?;

    let rest = rest.trim_start();
    let name = if let Some(quoted) = rest.strip_prefix('"') {
        let Some((name, _)) = quoted.split_once('"') else {
            return Err(malformed_error!(line, "unterminated vertex name"));
        };
        name
    } else {
        rest.split_whitespace().next().unwrap_or_default()
    };

    if name.is_empty() {
        return Ok(());
    }
    if !digraph.name_vertex(vertex, name) {
        warn!(
            "line {}: name \"{}\" is already used, {} keeps its default name",
            line, name, vertex
        );
    }
    Ok(())
}

fn read_pair(digraph: &Digraph, text: &str, line: usize) -> Result<(VertexId, VertexId)> {
    let mut tokens = text.split_whitespace();
    let (Some(v), Some(w)) = (tokens.next(), tokens.next()) else {
        return Err(malformed_error!(line, "expected two vertex numbers in \"{}\"", text));
    };
    Ok((
        parse_vertex(digraph, v, line)?,
        parse_vertex(digraph, w, line)?,
    ))
}

/// Translates a 1-based vertex number into a validated [`VertexId`].
fn parse_vertex(digraph: &Digraph, token: &str, line: usize) -> Result<VertexId> {
    let number: usize = token
        .parse()
        .map_err(|_| malformed_error!(line, "invalid vertex number \"{}\"", token))?;
    if number == 0 || number > digraph.order() {
        return Err(malformed_error!(
            line,
            "vertex number {} is outside 1..={}",
            number,
            digraph.order()
        ));
    }
    Ok(VertexId::new(number - 1))
}

/// Writes `digraph` as a Pajek network description.
///
/// Named vertices are listed with their quoted label; unnamed vertices are listed
/// by number only and read back unnamed. Arcs are listed per vertex in insertion
/// order, so reading the output back yields the same adjacency sequences.
///
/// # Errors
///
/// Returns [`Error::UnencodableLabel`](crate::Error::UnencodableLabel) before
/// writing anything if a label is empty or contains a `"` or a line break, or if
/// the identifier contains a line break or surrounding whitespace. Returns
/// [`Error::Io`](crate::Error::Io) if writing fails.
pub fn write_pajek<W: Write>(digraph: &Digraph, mut writer: W) -> Result<()> {
    let id = digraph.id();
    if id.trim() != id || id.contains(LINE_BREAKS) {
        return Err(Error::UnencodableLabel {
            label: id.to_string(),
            format: GraphFormat::Pajek,
        });
    }
    check_labels(digraph, GraphFormat::Pajek, &['"', '\n', '\r'])?;

    writeln!(writer, "*network {id}")?;
    writeln!(writer, "*vertices {}", digraph.order())?;
    for v in digraph.vertices() {
        if digraph.is_named(v) {
            writeln!(writer, "{} \"{}\"", v.index() + 1, digraph.vertex_name(v)?)?;
        } else {
            writeln!(writer, "{}", v.index() + 1)?;
        }
    }

    writeln!(writer, "*arcs")?;
    for v in digraph.vertices() {
        for w in digraph.arcs(v)? {
            writeln!(writer, "{} {}", v.index() + 1, w.index() + 1)?;
        }
    }
    Ok(())
}
