//! Command-line interface for spanning-tree edge replacement.
//!
//! Offers `tree`, `remove`, and `sweep` commands over a graph file or the
//! built-in sample graph.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, GraphArgs, MatchingArg, PlannerArgs, RemovalTarget, RemoveCommand,
    Report, StrategyArg, SweepCommand, TreeCommand, render_report, run_cli,
};
pub use input::{InputError, parse_edge_arg, parse_graph, sample_graph};
