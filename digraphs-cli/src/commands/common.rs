use std::path::Path;

use anyhow::{anyhow, Context};
use digraphs::{
    graph::{Digraph, VertexId},
    io::GraphFormat,
};

/// Pick the explicit format, or infer it from the file extension.
pub fn resolve_format(path: &Path, explicit: Option<GraphFormat>) -> anyhow::Result<GraphFormat> {
    explicit
        .or_else(|| GraphFormat::from_path(path))
        .ok_or_else(|| {
            anyhow!(
                "cannot infer the graph format of {}; pass it explicitly (pajek or gb)",
                path.display()
            )
        })
}

/// Load a digraph from `path`.
pub fn load_graph(path: &Path, format: Option<GraphFormat>) -> anyhow::Result<Digraph> {
    let format = resolve_format(path, format)?;
    digraphs::io::read_path(path, format)
        .with_context(|| format!("failed to load graph: {}", path.display()))
}

/// Names of `vertices`, as labels or default names.
pub fn vertex_names(
    digraph: &Digraph,
    vertices: impl IntoIterator<Item = VertexId>,
) -> anyhow::Result<Vec<String>> {
    vertices
        .into_iter()
        .map(|v| {
            digraph
                .vertex_name(v)
                .map(|name| name.into_owned())
                .map_err(anyhow::Error::from)
        })
        .collect()
}
