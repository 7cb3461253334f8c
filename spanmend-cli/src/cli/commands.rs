//! Command implementations and argument parsing for the spanmend CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanmend_core::{
    CandidatePolicy, Edge, EdgeMatching, Graph, GraphError, PlannerBuilder, RemovalOutcome,
    ReplacementError, ReplacementPlanner, SpanningForest, SweepStrategy,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, parse_edge_arg, parse_graph, sample_graph};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanmend",
    about = "Build a minimum spanning tree and find replacement edges for removed tree edges."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the minimum spanning tree and its total weight.
    Tree(TreeCommand),
    /// Remove one tree edge and report the replacement.
    Remove(RemoveCommand),
    /// Remove every tree edge in turn and report each replacement.
    Sweep(SweepCommand),
}

/// Graph selection shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct GraphArgs {
    /// Graph file to load; the built-in sample graph is used when omitted.
    pub graph: Option<PathBuf>,
}

/// Planner options shared by the removal commands.
#[derive(Debug, Args, Clone, Default)]
pub struct PlannerArgs {
    /// How a graph edge is matched against tree edges.
    #[arg(long, value_enum, default_value_t = MatchingArg::Exact)]
    pub matching: MatchingArg,

    /// Never pick the removed edge as its own replacement.
    #[arg(long)]
    pub exclude_removed: bool,

    /// How sweeps schedule their removal scenarios.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,
}

/// Options accepted by the `tree` command.
#[derive(Debug, Args, Clone, Default)]
pub struct TreeCommand {
    /// Graph selection.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Options accepted by the `remove` command.
#[derive(Debug, Args, Clone)]
pub struct RemoveCommand {
    /// Graph selection.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Which tree edge to remove.
    #[command(flatten)]
    pub target: RemovalTarget,

    /// Planner options.
    #[command(flatten)]
    pub planner: PlannerArgs,
}

/// Identifies the tree edge to remove, either by position or by value.
///
/// Clap requires exactly one of the two. A target built in code with neither
/// set removes the first tree edge.
#[derive(Debug, Args, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct RemovalTarget {
    /// Zero-based position in the tree's acceptance order.
    #[arg(long)]
    pub index: Option<usize>,

    /// Edge given as `SRC,DST,WEIGHT`.
    #[arg(long, value_parser = parse_edge_arg)]
    pub edge: Option<Edge>,
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone, Default)]
pub struct SweepCommand {
    /// Graph selection.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Planner options.
    #[command(flatten)]
    pub planner: PlannerArgs,
}

/// Edge matching modes exposed on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum MatchingArg {
    /// Compare source, target, and weight including direction.
    #[default]
    Exact,
    /// Ignore direction when comparing edges.
    Undirected,
}

impl From<MatchingArg> for EdgeMatching {
    fn from(value: MatchingArg) -> Self {
        match value {
            MatchingArg::Exact => Self::Exact,
            MatchingArg::Undirected => Self::Undirected,
        }
    }
}

/// Sweep strategies exposed on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    /// Parallel when compiled in, otherwise sequential.
    #[default]
    Auto,
    /// One scenario after another.
    Sequential,
    /// Scenarios on the rayon pool.
    Parallel,
}

impl From<StrategyArg> for SweepStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file could not be parsed.
    #[error("failed to parse `{path}`: {source}")]
    Input {
        /// Path of the graph file.
        path: PathBuf,
        /// Parse failure, including the line number.
        #[source]
        source: InputError,
    },
    /// The built-in sample graph was rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Planning failed in the core library.
    #[error(transparent)]
    Core(#[from] ReplacementError),
}

impl CliError {
    /// Returns the stable core error code behind this failure, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Core(err) => Some(err.code().as_str()),
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Input { source, .. } => match source.graph_code() {
                Some(code) => Some(code.as_str()),
                None => None,
            },
            Self::Io { .. } => None,
        }
    }
}

/// The result of one command, ready to render.
#[derive(Debug, Clone)]
pub enum Report {
    /// Output of `tree`.
    Tree {
        /// The minimum spanning tree or forest.
        tree: SpanningForest,
    },
    /// Output of `remove`.
    Removal {
        /// The tree the edge was removed from.
        tree: SpanningForest,
        /// The removal scenario.
        outcome: RemovalOutcome,
    },
    /// Output of `sweep`.
    Sweep {
        /// The tree every scenario started from.
        tree: SpanningForest,
        /// One scenario per tree edge, in tree order.
        outcomes: Vec<RemovalOutcome>,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or planning fails.
///
/// # Examples
/// ```
/// # use spanmend_cli::cli::{Cli, Command, Report, TreeCommand, run_cli};
/// let cli = Cli {
///     command: Command::Tree(TreeCommand::default()),
/// };
/// let Report::Tree { tree } = run_cli(cli)? else {
///     unreachable!("tree command yields a tree report");
/// };
/// assert_eq!(tree.total_weight(), 14);
/// # Ok::<(), spanmend_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Tree(command) => {
            span.record("command", "tree");
            run_tree(&command)
        }
        Command::Remove(command) => {
            span.record("command", "remove");
            run_remove(&command)
        }
        Command::Sweep(command) => {
            span.record("command", "sweep");
            run_sweep(&command)
        }
    }
}

pub(super) fn run_tree(command: &TreeCommand) -> Result<Report, CliError> {
    let graph = load_graph(command.graph.graph.as_deref())?;
    let tree = ReplacementPlanner::default().spanning_tree(&graph);
    info!(
        tree_edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        "spanning tree built"
    );
    Ok(Report::Tree { tree })
}

#[instrument(
    name = "cli.remove",
    err,
    skip(command),
    fields(index = field::Empty, edge = field::Empty),
)]
pub(super) fn run_remove(command: &RemoveCommand) -> Result<Report, CliError> {
    let graph = load_graph(command.graph.graph.as_deref())?;
    let planner = build_planner(&command.planner)?;
    let tree = planner.spanning_tree(&graph);

    let span = Span::current();
    let outcome = match (command.target.index, command.target.edge) {
        (_, Some(edge)) => {
            span.record("edge", field::display(edge));
            planner.plan_removal(&graph, &tree, &edge)?
        }
        (Some(index), None) => {
            span.record("index", index);
            planner.plan_removal_at(&graph, &tree, index)?
        }
        (None, None) => planner.plan_removal_at(&graph, &tree, 0)?,
    };
    info!(
        removed = %outcome.removed(),
        bridged = outcome.replacement().is_some(),
        "removal planned"
    );
    Ok(Report::Removal { tree, outcome })
}

pub(super) fn run_sweep(command: &SweepCommand) -> Result<Report, CliError> {
    let graph = load_graph(command.graph.graph.as_deref())?;
    let planner = build_planner(&command.planner)?;
    let tree = planner.spanning_tree(&graph);
    let outcomes = planner.sweep(&graph, &tree)?;
    Ok(Report::Sweep { tree, outcomes })
}

pub(super) fn build_planner(args: &PlannerArgs) -> Result<ReplacementPlanner, CliError> {
    let policy = if args.exclude_removed {
        CandidatePolicy::ExcludeRemoved
    } else {
        CandidatePolicy::IncludeRemoved
    };
    Ok(PlannerBuilder::new()
        .with_edge_matching(args.matching.into())
        .with_candidate_policy(policy)
        .with_sweep_strategy(args.strategy.into())
        .build()?)
}

#[instrument(name = "cli.load_graph", err, fields(source = field::Empty))]
pub(super) fn load_graph(path: Option<&Path>) -> Result<Graph, CliError> {
    let span = Span::current();
    let Some(path) = path else {
        span.record("source", "sample");
        return Ok(sample_graph()?);
    };
    span.record("source", field::display(path.display()));

    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(BufReader::new(file)).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `report` to `writer` as plain text.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use spanmend_cli::cli::{Report, render_report};
/// # use spanmend_core::{Edge, Graph, kruskal};
/// let graph = Graph::from_edges(2, [Edge::new(0, 1, 5)])?;
/// let report = Report::Tree { tree: kruskal(&graph) };
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "minimum spanning tree (total weight 5):\n  (0-1: 5)\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Tree { tree } => render_tree(tree, &mut writer),
        Report::Removal { tree, outcome } => render_removal(tree, outcome, &mut writer),
        Report::Sweep { tree, outcomes } => render_sweep(tree, outcomes, &mut writer),
    }
}

fn render_tree(tree: &SpanningForest, writer: &mut impl Write) -> io::Result<()> {
    if tree.is_tree() {
        writeln!(
            writer,
            "minimum spanning tree (total weight {}):",
            tree.total_weight()
        )?;
    } else {
        writeln!(
            writer,
            "minimum spanning forest with {} components (total weight {}):",
            tree.component_count(),
            tree.total_weight()
        )?;
    }
    for edge in tree.edges() {
        writeln!(writer, "  {edge}")?;
    }
    Ok(())
}

fn render_removal(
    tree: &SpanningForest,
    outcome: &RemovalOutcome,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "removed: {}", outcome.removed())?;
    for (index, component) in outcome.partition().components().iter().enumerate() {
        writeln!(
            writer,
            "component {}: {}",
            index + 1,
            join_vertices(component)
        )?;
    }
    match outcome.repaired_tree(tree) {
        Some(repaired) => {
            if let Some(replacement) = outcome.replacement() {
                writeln!(writer, "replacement: {replacement}")?;
            }
            render_tree(&repaired, writer)
        }
        None => writeln!(writer, "replacement: none (no edge reconnects the components)"),
    }
}

fn render_sweep(
    tree: &SpanningForest,
    outcomes: &[RemovalOutcome],
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "original total weight: {}", tree.total_weight())?;
    writeln!(writer, "removed\treplacement\tnew total weight")?;
    for outcome in outcomes {
        match (outcome.replacement(), outcome.repaired_weight(tree)) {
            (Some(replacement), Some(weight)) => {
                writeln!(writer, "{}\t{replacement}\t{weight}", outcome.removed())?;
            }
            _ => writeln!(writer, "{}\tnone\t-", outcome.removed())?,
        }
    }
    Ok(())
}

fn join_vertices(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
