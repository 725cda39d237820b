use std::path::Path;

use anyhow::Context;
use digraphs::io::{write_path, GraphFormat};

use crate::commands::common::{load_graph, resolve_format};

pub fn run(
    input: &Path,
    output: &Path,
    from: Option<GraphFormat>,
    to: Option<GraphFormat>,
) -> anyhow::Result<()> {
    let to = resolve_format(output, to)?;
    let digraph = load_graph(input, from)?;

    write_path(output, &digraph, to)
        .with_context(|| format!("failed to write graph: {}", output.display()))?;

    log::info!(
        "Wrote '{}' ({} vertices, {} arcs) to {} as {}",
        digraph,
        digraph.order(),
        digraph.size(),
        output.display(),
        to
    );
    Ok(())
}
