use std::path::Path;

use digraphs::{graph::algorithms::DepthFirstOrder, io::GraphFormat};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, vertex_names},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct OrderOutput {
    pre: Vec<String>,
    post: Vec<String>,
    reverse_post: Vec<String>,
}

pub fn run(path: &Path, from: Option<GraphFormat>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let digraph = load_graph(path, from)?;
    let ordering = DepthFirstOrder::new(&digraph).compute();

    let output = OrderOutput {
        pre: vertex_names(&digraph, ordering.pre().iter().copied())?,
        post: vertex_names(&digraph, ordering.post().iter().copied())?,
        reverse_post: vertex_names(&digraph, ordering.reverse_post())?,
    };

    print_output(&output, opts, |out| {
        let mut tw = TabWriter::new(&[
            ("#", Align::Right),
            ("Preorder", Align::Left),
            ("Postorder", Align::Left),
            ("Reverse postorder", Align::Left),
        ]);
        for (i, ((pre, post), reverse_post)) in out
            .pre
            .iter()
            .zip(&out.post)
            .zip(&out.reverse_post)
            .enumerate()
        {
            tw.row(vec![
                i.to_string(),
                pre.clone(),
                post.clone(),
                reverse_post.clone(),
            ]);
        }
        tw.print();
    })
}
