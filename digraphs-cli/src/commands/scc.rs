use std::path::Path;

use digraphs::{graph::algorithms::KosarajuSharirScc, io::GraphFormat};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, vertex_names},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct SccOutput {
    count: usize,
    largest: usize,
    sizes: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<Vec<Vec<String>>>,
}

pub fn run(
    path: &Path,
    from: Option<GraphFormat>,
    members: bool,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let digraph = load_graph(path, from)?;
    let scc = KosarajuSharirScc::new(&digraph).compute();

    let members = if members {
        Some(
            scc.components()
                .into_iter()
                .map(|component| vertex_names(&digraph, component))
                .collect::<anyhow::Result<Vec<_>>>()?,
        )
    } else {
        None
    };

    let output = SccOutput {
        count: scc.count(),
        largest: scc.largest_component_size(),
        sizes: scc.component_sizes().to_vec(),
        members,
    };

    print_output(&output, opts, |out| {
        println!("Components:   {}", out.count);
        println!("Largest:      {}", out.largest);
        if out.count == 0 {
            return;
        }

        println!();
        match &out.members {
            Some(members) => {
                let mut tw = TabWriter::new(&[
                    ("Component", Align::Right),
                    ("Size", Align::Right),
                    ("Members", Align::Left),
                ])
                .indent("  ");
                for (i, (size, names)) in out.sizes.iter().zip(members).enumerate() {
                    tw.row(vec![i.to_string(), size.to_string(), names.join(" ")]);
                }
                tw.print();
            }
            None => {
                let mut tw = TabWriter::new(&[("Component", Align::Right), ("Size", Align::Right)])
                    .indent("  ");
                for (i, size) in out.sizes.iter().enumerate() {
                    tw.row(vec![i.to_string(), size.to_string()]);
                }
                tw.print();
            }
        }
    })
}
