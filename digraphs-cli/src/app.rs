use std::path::PathBuf;

use clap::{Parser, Subcommand};
use digraphs::io::GraphFormat;

/// digraphs - inspect, traverse and convert directed graphs
#[derive(Debug, Parser)]
#[command(name = "digraphs", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display graph overview: identifier, order, size and out-degree statistics.
    Info {
        /// Path to the graph file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Input format: pajek or gb. Inferred from the extension if omitted.
        #[arg(long, value_name = "FORMAT")]
        from: Option<GraphFormat>,
    },

    /// Print the depth-first preorder, postorder and reverse postorder.
    Order {
        /// Path to the graph file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Input format: pajek or gb. Inferred from the extension if omitted.
        #[arg(long, value_name = "FORMAT")]
        from: Option<GraphFormat>,
    },

    /// Summarize the strongly connected components.
    Scc {
        /// Path to the graph file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Input format: pajek or gb. Inferred from the extension if omitted.
        #[arg(long, value_name = "FORMAT")]
        from: Option<GraphFormat>,

        /// List the vertices of every component.
        #[arg(short, long)]
        members: bool,
    },

    /// Convert a graph file from one format to another.
    Convert {
        /// Path to the input graph file.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Path of the file to write.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Input format: pajek or gb. Inferred from the extension if omitted.
        #[arg(long, value_name = "FORMAT")]
        from: Option<GraphFormat>,

        /// Output format: pajek or gb. Inferred from the extension if omitted.
        #[arg(long, value_name = "FORMAT")]
        to: Option<GraphFormat>,
    },
}
