use std::path::Path;

use digraphs::{io::GraphFormat, Error};
use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_graph, output::print_output};

#[derive(Debug, Serialize)]
pub struct GraphInfo {
    pub id: String,
    pub order: usize,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_degree: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_dev_degree: Option<f64>,
}

pub fn run(path: &Path, from: Option<GraphFormat>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let digraph = load_graph(path, from)?;

    let stats = match digraph.average_degree() {
        Ok(stats) => Some(stats),
        Err(Error::EmptyGraph) => None,
        Err(e) => return Err(e.into()),
    };

    let info = GraphInfo {
        id: digraph.id().to_string(),
        order: digraph.order(),
        size: digraph.size(),
        mean_degree: stats.map(|s| s.mean),
        std_dev_degree: stats.map(|s| s.std_dev),
    };

    print_output(&info, opts, |info| {
        println!("Graph:        {}", info.id);
        println!("Vertices:     {}", info.order);
        println!("Arcs:         {}", info.size);
        match (info.mean_degree, info.std_dev_degree) {
            (Some(mean), Some(std_dev)) => {
                println!("Mean degree:  {mean:.4}");
                println!("Std. dev.:    {std_dev:.4}");
            }
            _ => println!("Mean degree:  n/a"),
        }
    })
}
