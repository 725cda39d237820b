//! Stanford GraphBase record format.
//!
//! A GraphBase file stores a digraph as two tables of records. Each vertex record
//! points to the first record of its arc chain, and each arc record names its tip
//! and the next arc of the same chain:
//!
//! ```text
//! * GraphBase graph (util_types ZZZZZZZZZZZZZZ,3V,3A)
//! "words"
//! * Vertices
//! "feel",A0
//! "look",0
//! "smell",A2
//! * Arcs
//! V1,A1,1
//! V2,0,1
//! V1,0,1
//! ```
//!
//! Arc labels are `A<k>` for the arc record `k` (0-based) and `0` for the end of a
//! chain. Vertex labels are `V<k>`. An unnamed vertex is written with the empty
//! name `""` and read back unnamed. Lines before the `* GraphBase graph` header
//! are comments. Arc lengths are written as `1` and ignored when reading. Lines
//! starting with `*` after the last arc record, such as a checksum, are ignored.

use std::{
    borrow::Cow,
    io::{BufRead, Write},
};

use log::{debug, warn};

use crate::{
    graph::{Digraph, VertexId},
    io::{check_labels, GraphFormat, LineReader, LINE_BREAKS},
    Error, Result,
};

/// File extension of GraphBase files.
pub const FILE_EXTENSION: &str = "gb";

const GRAPH_MARK: &str = "* GraphBase graph";
const VERTICES_MARK: &str = "* Vertices";
const ARCS_MARK: &str = "* Arcs";

/// Utility field types of a graph without vertex, arc or graph attributes.
const NIL_UTIL_TYPES: &str = "ZZZZZZZZZZZZZZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Comments,
    Graph,
    Vertices,
    Arcs,
    Trailer,
}

#[derive(Debug, Clone, Copy)]
struct ArcRecord {
    tip: VertexId,
    next: Option<usize>,
    line: usize,
}

/// Reads a digraph from its GraphBase record description.
///
/// The arc chains are validated before the graph is built: every arc record must
/// be reached from exactly one vertex, and no chain may loop back on itself. Arcs
/// are then inserted in chain order, which becomes the adjacency order.
///
/// # Errors
///
/// Returns [`Error::Malformed`](crate::Error::Malformed) with the offending line
/// for a broken header, bad labels, record counts that disagree with the header,
/// and dangling, shared or cyclic arc chains. I/O failures surface as
/// [`Error::Io`](crate::Error::Io).
pub fn read_gb<R: BufRead>(reader: R) -> Result<Digraph> {
    let mut lines = LineReader::new(reader);
    let mut section = Section::Comments;
    let mut digraph: Option<Digraph> = None;
    let mut arc_count = 0usize;
    let mut first_arcs: Vec<Option<usize>> = Vec::new();
    let mut records: Vec<ArcRecord> = Vec::new();

    while let Some((line, text)) = lines.next_line()? {
        if section == Section::Comments {
            if text.starts_with(GRAPH_MARK) {
                let (order, arcs) = parse_header(text, line)?;
                let created = Digraph::try_new(order).ok_or_else(|| {
                    malformed_error!(line, "vertex count {} cannot be allocated", order)
                })?;
                digraph = Some(created);
                arc_count = arcs;
                section = Section::Graph;
            }
            continue;
        }

        let Some(digraph) = digraph.as_mut() else {
            continue;
        };

        if text.starts_with(VERTICES_MARK) && section == Section::Graph {
            section = Section::Vertices;
            continue;
        }
        if text.starts_with(ARCS_MARK) && section == Section::Vertices {
            check_count("vertex", first_arcs.len(), digraph.order(), line)?;
            section = Section::Arcs;
            continue;
        }

        match section {
            Section::Graph => {
                let id = unquote(text.trim())
                    .ok_or_else(|| malformed_error!(line, "expected a quoted graph id"))?;
                digraph.set_id(id);
            }
            Section::Vertices => {
                if first_arcs.len() == digraph.order() {
                    return Err(malformed_error!(line, "more vertex records than declared"));
                }
                let (name, first) = text
                    .rsplit_once(',')
                    .ok_or_else(|| malformed_error!(line, "invalid vertex record \"{}\"", text))?;
                let name = unquote(name)
                    .ok_or_else(|| malformed_error!(line, "vertex name must be quoted"))?;
                let vertex = VertexId::new(first_arcs.len());

                first_arcs.push(parse_arc_label(first, arc_count, line)?);
                if !name.is_empty() && !digraph.name_vertex(vertex, name) {
                    warn!(
                        "line {}: name \"{}\" is already used, {} keeps its default name",
                        line, name, vertex
                    );
                }
            }
            Section::Arcs => {
                if records.len() == arc_count {
                    if text.starts_with('*') {
                        section = Section::Trailer;
                        continue;
                    }
                    return Err(malformed_error!(line, "more arc records than declared"));
                }
                records.push(parse_arc_record(text, digraph.order(), arc_count, line)?);
            }
            Section::Comments | Section::Trailer => {}
        }
    }

    let mut digraph =
        digraph.ok_or_else(|| malformed_error!(lines.line(), "missing GraphBase header"))?;
    if matches!(section, Section::Graph | Section::Vertices) {
        return Err(malformed_error!(lines.line(), "missing * Arcs section"));
    }
    check_count("arc", records.len(), arc_count, lines.line())?;

    link_arcs(&mut digraph, &first_arcs, &records)?;

    debug!(
        "read GraphBase graph '{}': {} vertices, {} arcs",
        digraph,
        digraph.order(),
        digraph.size()
    );
    Ok(digraph)
}

/// Follows every chain and inserts its arcs into `digraph`.
fn link_arcs(digraph: &mut Digraph, first_arcs: &[Option<usize>], records: &[ArcRecord]) -> Result<()> {
    let mut linked = vec![false; records.len()];

    for (index, &first) in first_arcs.iter().enumerate() {
        let source = VertexId::new(index);
        let mut current = first;
        while let Some(arc) = current {
            let record = records[arc];
            if linked[arc] {
                return Err(malformed_error!(
                    record.line,
                    "arc A{} is linked more than once",
                    arc
                ));
            }
            linked[arc] = true;
            digraph.add_arc(source, record.tip)?;
            current = record.next;
        }
    }

    if let Some(orphan) = linked.iter().position(|&seen| !seen) {
        return Err(malformed_error!(
            records[orphan].line,
            "arc A{} is not linked from any vertex",
            orphan
        ));
    }
    Ok(())
}

/// Parses `* GraphBase graph (util_types <types>,<n>V,<m>A)`.
fn parse_header(text: &str, line: usize) -> Result<(usize, usize)> {
    let invalid = || malformed_error!(line, "invalid GraphBase header \"{}\"", text);

    let fields = text
        .strip_prefix(GRAPH_MARK)
        .map(str::trim)
        .and_then(|rest| rest.strip_prefix("(util_types "))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let mut fields = fields.split(',');
    let (Some(_util_types), Some(vertices), Some(arcs), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid());
    };

    let order = vertices
        .strip_suffix('V')
        .and_then(|count| count.parse().ok())
        .ok_or_else(invalid)?;
    let size = arcs
        .strip_suffix('A')
        .and_then(|count| count.parse().ok())
        .ok_or_else(invalid)?;
    Ok((order, size))
}

/// Parses `V<tip>,<next>,<length>`.
fn parse_arc_record(text: &str, order: usize, arc_count: usize, line: usize) -> Result<ArcRecord> {
    let mut fields = text.split(',');
    let (Some(tip), Some(next), Some(length)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed_error!(line, "invalid arc record \"{}\"", text));
    };

    let tip = tip
        .trim()
        .strip_prefix('V')
        .and_then(|index| index.parse::<usize>().ok())
        .filter(|&index| index < order)
        .ok_or_else(|| malformed_error!(line, "invalid tip \"{}\"", tip))?;
    let next = parse_arc_label(next, arc_count, line)?;
    if length.trim().parse::<i64>().is_err() {
        return Err(malformed_error!(line, "invalid arc length \"{}\"", length));
    }

    Ok(ArcRecord {
        tip: VertexId::new(tip),
        next,
        line,
    })
}

/// Parses `A<k>` into `Some(k)` and `0` into `None`.
fn parse_arc_label(label: &str, arc_count: usize, line: usize) -> Result<Option<usize>> {
    let label = label.trim();
    if label == "0" {
        return Ok(None);
    }
    label
        .strip_prefix('A')
        .and_then(|index| index.parse::<usize>().ok())
        .filter(|&index| index < arc_count)
        .map(Some)
        .ok_or_else(|| malformed_error!(line, "invalid arc label \"{}\"", label))
}

fn check_count(kind: &str, found: usize, declared: usize, line: usize) -> Result<()> {
    if found == declared {
        Ok(())
    } else {
        Err(malformed_error!(
            line,
            "found {} {} records, header declares {}",
            found,
            kind,
            declared
        ))
    }
}

fn unquote(text: &str) -> Option<&str> {
    text.strip_prefix('"')?.strip_suffix('"')
}

/// Writes `digraph` in GraphBase record format.
///
/// Arc records are numbered per vertex in insertion order, so each chain occupies
/// consecutive records and reading the output back yields the same adjacency
/// sequences. Vertices without a label are written with the empty name.
///
/// # Errors
///
/// Returns [`Error::UnencodableLabel`](crate::Error::UnencodableLabel) before
/// writing anything if a label is empty or contains a line break, or if the
/// identifier contains a line break. Returns [`Error::Io`](crate::Error::Io) if
/// writing fails.
///
/// # Examples
///
/// ```rust
/// use digraphs::{graph::Digraph, io::gb::write_gb};
///
/// let digraph = Digraph::from_arcs(2, [(0, 1), (0, 0)])?;
/// let mut out = Vec::new();
/// write_gb(&digraph, &mut out)?;
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("* GraphBase graph (util_types ZZZZZZZZZZZZZZ,2V,2A)\n"));
/// assert!(text.contains("\"\",A0\n\"\",0\n"));
/// # Ok::<(), digraphs::Error>(())
/// ```
pub fn write_gb<W: Write>(digraph: &Digraph, mut writer: W) -> Result<()> {
    if digraph.id().contains(LINE_BREAKS) {
        return Err(Error::UnencodableLabel {
            label: digraph.id().to_string(),
            format: GraphFormat::Gb,
        });
    }
    check_labels(digraph, GraphFormat::Gb, &LINE_BREAKS)?;

    writeln!(
        writer,
        "{} (util_types {},{}V,{}A)",
        GRAPH_MARK,
        NIL_UTIL_TYPES,
        digraph.order(),
        digraph.size()
    )?;
    writeln!(writer, "\"{}\"", digraph.id())?;

    writeln!(writer, "{VERTICES_MARK}")?;
    let mut next_arc = 0usize;
    for v in digraph.vertices() {
        let degree = digraph.vertex_degree(v)?;
        let name = if digraph.is_named(v) {
            digraph.vertex_name(v)?
        } else {
            Cow::Borrowed("")
        };
        if degree == 0 {
            writeln!(writer, "\"{name}\",0")?;
        } else {
            writeln!(writer, "\"{name}\",A{next_arc}")?;
        }
        next_arc += degree;
    }

    writeln!(writer, "{ARCS_MARK}")?;
    let mut arc = 0usize;
    for v in digraph.vertices() {
        let mut tips = digraph.arcs(v)?.peekable();
        while let Some(tip) = tips.next() {
            arc += 1;
            if tips.peek().is_some() {
                writeln!(writer, "V{},A{},1", tip.index(), arc)?;
            } else {
                writeln!(writer, "V{},0,1", tip.index())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn malformed_line(text: &str) -> usize {
        match read_gb(Cursor::new(text)) {
            Err(Error::Malformed { line, .. }) => line,
            other => panic!("expected a malformed error, got {other:?}"),
        }
    }

    const WORDS: &str = "generated by hand\n\
                         * GraphBase graph (util_types ZZZZZZZZZZZZZZ,3V,3A)\n\
                         \"words\"\n\
                         * Vertices\n\
                         \"feel\",A0\n\
                         \"look\",0\n\
                         \"smell\",A2\n\
                         * Arcs\n\
                         V1,A1,1\n\
                         V2,0,1\n\
                         V1,0,1\n\
                         * Checksum 12345\n";

    #[test]
    fn test_read_records() {
        let digraph = read_gb(Cursor::new(WORDS)).unwrap();

        assert_eq!(digraph.id(), "words");
        assert_eq!(digraph.order(), 3);
        assert_eq!(digraph.size(), 3);
        assert_eq!(digraph.vertex_index("smell").unwrap(), v(2));
        assert_eq!(digraph.adjacency(v(0)).unwrap(), &[v(1), v(2)]);
        assert!(digraph.adjacency(v(1)).unwrap().is_empty());
        assert_eq!(digraph.adjacency(v(2)).unwrap(), &[v(1)]);
    }

    #[test]
    fn test_read_follows_chain_order() {
        // Chain of vertex 0 is A1 -> A0
        let text = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,2V,2A)\n\
                    * Vertices\n\
                    \"a\",A1\n\
                    \"b\",0\n\
                    * Arcs\n\
                    V0,0,1\n\
                    V1,A0,1\n";
        let digraph = read_gb(Cursor::new(text)).unwrap();
        assert_eq!(digraph.id(), "digraph");
        assert_eq!(digraph.adjacency(v(0)).unwrap(), &[v(1), v(0)]);
    }

    #[test]
    fn test_write_matches_layout() {
        let mut digraph = Digraph::from_arcs(3, [(0, 1), (0, 2), (2, 1)]).unwrap();
        digraph.set_id("words");
        digraph.name_vertex(v(0), "feel");
        digraph.name_vertex(v(1), "look");
        digraph.name_vertex(v(2), "smell");

        let mut out = Vec::new();
        write_gb(&digraph, &mut out).unwrap();

        let expected = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,3V,3A)\n\
                        \"words\"\n\
                        * Vertices\n\
                        \"feel\",A0\n\
                        \"look\",0\n\
                        \"smell\",A2\n\
                        * Arcs\n\
                        V1,A1,1\n\
                        V2,0,1\n\
                        V1,0,1\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_read_rejects_broken_chains() {
        let shared = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,2V,1A)\n\
                      * Vertices\n\
                      \"a\",A0\n\
                      \"b\",A0\n\
                      * Arcs\n\
                      V0,0,1\n";
        assert_eq!(malformed_line(shared), 6);

        let cyclic = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,1V,2A)\n\
                      * Vertices\n\
                      \"a\",A0\n\
                      * Arcs\n\
                      V0,A1,1\n\
                      V0,A0,1\n";
        assert_eq!(malformed_line(cyclic), 5);

        let orphan = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,1V,2A)\n\
                      * Vertices\n\
                      \"a\",A0\n\
                      * Arcs\n\
                      V0,0,1\n\
                      V0,0,1\n";
        assert_eq!(malformed_line(orphan), 6);
    }

    #[test]
    fn test_read_rejects_bad_records() {
        let dangling = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,1V,1A)\n\
                        * Vertices\n\
                        \"a\",A3\n";
        assert_eq!(malformed_line(dangling), 3);

        let bad_tip = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,1V,1A)\n\
                       * Vertices\n\
                       \"a\",A0\n\
                       * Arcs\n\
                       V1,0,1\n";
        assert_eq!(malformed_line(bad_tip), 5);

        let bad_header = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,xV,1A)\n";
        assert_eq!(malformed_line(bad_header), 1);

        let missing_vertex = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,2V,0A)\n\
                              * Vertices\n\
                              \"a\",0\n\
                              * Arcs\n";
        assert_eq!(malformed_line(missing_vertex), 4);

        let missing_arc = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,1V,1A)\n\
                           * Vertices\n\
                           \"a\",A0\n\
                           * Arcs\n";
        assert_eq!(malformed_line(missing_arc), 4);
    }

    #[test]
    fn test_read_without_header() {
        assert_eq!(malformed_line("just a comment\n"), 1);
    }

    #[test]
    fn test_read_untrusted_header_counts() {
        let huge_arcs = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,1V,18446744073709551615A)\n";
        assert_eq!(malformed_line(huge_arcs), 1);

        let huge_vertices =
            "comment\n* GraphBase graph (util_types ZZZZZZZZZZZZZZ,18446744073709551615V,0A)\n";
        assert_eq!(malformed_line(huge_vertices), 2);

        let short_arcs = "* GraphBase graph (util_types ZZZZZZZZZZZZZZ,1V,18446744073709551615A)\n\
                          * Vertices\n\
                          \"a\",A0\n\
                          * Arcs\n\
                          V0,0,1\n";
        assert_eq!(malformed_line(short_arcs), 5);
    }

    #[test]
    fn test_unnamed_vertices_stay_unnamed() {
        let mut digraph = Digraph::from_arcs(2, [(0, 1), (1, 0)]).unwrap();
        digraph.name_vertex(v(1), "v0");

        let mut out = Vec::new();
        write_gb(&digraph, &mut out).unwrap();
        let restored = read_gb(Cursor::new(out)).unwrap();

        assert!(!restored.is_named(v(0)));
        assert_eq!(restored.vertex_index("v0").unwrap(), v(1));
        assert_eq!(restored.adjacency(v(1)).unwrap(), &[v(0)]);
    }

    #[test]
    fn test_write_rejects_line_breaks() {
        let mut digraph = Digraph::new(1);
        digraph.name_vertex(v(0), "two\nlines");
        let mut out = Vec::new();
        assert!(matches!(
            write_gb(&digraph, &mut out),
            Err(Error::UnencodableLabel { format: GraphFormat::Gb, .. })
        ));
        assert!(out.is_empty());

        let mut digraph = Digraph::new(1);
        digraph.set_id("words\r");
        assert!(write_gb(&digraph, Vec::new()).is_err());
    }

    #[test]
    fn test_quoted_names_roundtrip() {
        let mut digraph = Digraph::new(2);
        digraph.name_vertex(v(0), "say \"hi\", twice");
        digraph.name_vertex(v(1), "\"");

        let mut out = Vec::new();
        write_gb(&digraph, &mut out).unwrap();
        let restored = read_gb(Cursor::new(out)).unwrap();

        assert_eq!(restored.vertex_name(v(0)).unwrap(), "say \"hi\", twice");
        assert_eq!(restored.vertex_name(v(1)).unwrap(), "\"");
    }
}
