//! Graph loading for the CLI.
//!
//! Graph files are UTF-8 text. Blank lines and anything after `#` are
//! ignored. The first remaining record is the vertex count; every later
//! record is `SRC DST WEIGHT` separated by whitespace.

use std::io::{self, BufRead};

use spanmend_core::{Edge, Graph, GraphError, GraphErrorCode, VertexId, Weight};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a graph description.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading the underlying stream failed.
    #[error("failed to read graph: {source}")]
    Read {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The input held no records at all.
    #[error("graph input is empty; expected a vertex count")]
    MissingVertexCount,
    /// The first record was not a single non-negative integer.
    #[error("line {line}: expected a vertex count, found `{content}`")]
    InvalidVertexCount {
        /// One-based line number.
        line: usize,
        /// The offending record.
        content: String,
    },
    /// An edge record did not have exactly three fields.
    #[error("line {line}: expected `SRC DST WEIGHT`, found `{content}`")]
    MalformedEdge {
        /// One-based line number.
        line: usize,
        /// The offending record.
        content: String,
    },
    /// An edge field was not a valid integer.
    #[error("line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// Which field failed to parse.
        field: &'static str,
        /// The raw field text.
        value: String,
    },
    /// The record was well formed but rejected by the graph model.
    #[error("line {line}: {source}")]
    Graph {
        /// One-based line number.
        line: usize,
        /// Validation failure raised by the core library.
        #[source]
        source: GraphError,
    },
}

impl InputError {
    /// Returns the core graph error code when validation failed.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}

/// Parses a graph description from `reader`.
///
/// # Errors
/// Returns [`InputError`] for unreadable input, a missing or invalid vertex
/// count, malformed edge records, or edges rejected by [`Graph::push_edge`].
///
/// # Examples
/// ```
/// use spanmend_cli::cli::parse_graph;
///
/// let text = "# triangle\n3\n0 1 4\n1 2 2\n2 0 5\n";
/// let graph = parse_graph(text.as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 3);
/// # Ok::<(), spanmend_cli::cli::InputError>(())
/// ```
pub fn parse_graph(reader: impl BufRead) -> Result<Graph, InputError> {
    let mut graph: Option<Graph> = None;
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let raw = line.map_err(|source| InputError::Read { source })?;
        let record = strip_comment(&raw);
        if record.is_empty() {
            continue;
        }

        match graph.as_mut() {
            None => graph = Some(parse_header(line_number, record)?),
            Some(graph) => {
                let edge = parse_edge_record(line_number, record)?;
                graph
                    .push_edge(edge)
                    .map_err(|source| InputError::Graph {
                        line: line_number,
                        source,
                    })?;
            }
        }
    }

    let graph = graph.ok_or(InputError::MissingVertexCount)?;
    debug!(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edges().len(),
        "graph parsed"
    );
    Ok(graph)
}

/// Parses `SRC,DST,WEIGHT` as used by `--edge`.
///
/// # Errors
/// Returns a message suitable for clap when the value is malformed.
pub fn parse_edge_arg(raw: &str) -> Result<Edge, String> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(format!("expected SRC,DST,WEIGHT, found `{raw}`"));
    };
    let source = source
        .parse::<VertexId>()
        .map_err(|err| format!("invalid source `{source}`: {err}"))?;
    let target = target
        .parse::<VertexId>()
        .map_err(|err| format!("invalid target `{target}`: {err}"))?;
    let weight = weight
        .parse::<Weight>()
        .map_err(|err| format!("invalid weight `{weight}`: {err}"))?;
    Ok(Edge::new(source, target, weight))
}

/// Returns the built-in six-vertex sample graph.
///
/// Most edges appear in both directions, so the reversed twin of a tree edge
/// is present as a separate graph edge.
///
/// # Errors
/// Never fails in practice; the error type is the one [`Graph::from_edges`]
/// reports.
pub fn sample_graph() -> Result<Graph, GraphError> {
    const EDGES: [(VertexId, VertexId, Weight); 15] = [
        (0, 1, 4),
        (0, 2, 4),
        (1, 2, 2),
        (1, 0, 4),
        (2, 0, 4),
        (2, 1, 2),
        (2, 3, 3),
        (2, 5, 2),
        (2, 4, 4),
        (3, 2, 3),
        (3, 4, 3),
        (4, 2, 4),
        (4, 3, 3),
        (5, 2, 2),
        (5, 4, 3),
    ];
    Graph::from_edges(
        6,
        EDGES.map(|(source, target, weight)| Edge::new(source, target, weight)),
    )
}

fn strip_comment(raw: &str) -> &str {
    raw.split_once('#').map_or(raw, |(record, _)| record).trim()
}

fn parse_header(line: usize, record: &str) -> Result<Graph, InputError> {
    let vertex_count = record
        .parse::<usize>()
        .map_err(|_| InputError::InvalidVertexCount {
            line,
            content: record.to_owned(),
        })?;
    Graph::new(vertex_count).map_err(|source| InputError::Graph { line, source })
}

fn parse_edge_record(line: usize, record: &str) -> Result<Edge, InputError> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(InputError::MalformedEdge {
            line,
            content: record.to_owned(),
        });
    };
    Ok(Edge::new(
        parse_number(line, "source", source)?,
        parse_number(line, "target", target)?,
        parse_number(line, "weight", weight)?,
    ))
}

fn parse_number<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::InvalidNumber {
        line,
        field,
        value: value.to_owned(),
    })
}
