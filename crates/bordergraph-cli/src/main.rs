use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bordergraph_cli::output::OutputFormat;
use bordergraph_cli::terminal::ColorPalette;
use bordergraph_lib::{resolve_dataset_path, RankKey, Session, TraversalKind};

mod commands;

use commands::filter::FilterCommandArgs;
use commands::Presentation;

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore the graph of bordering countries")]
struct Cli {
    /// Dataset CSV file or a directory containing world_coordinates.csv.
    /// Falls back to BORDERGRAPH_DATA, then the platform data directory.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every country in dataset order.
    List,
    /// Find countries whose name contains the given text (case-insensitive).
    Search {
        /// Text to look for.
        needle: String,
    },
    /// Breadth-first traversal from a country.
    Bfs(StartArgs),
    /// Depth-first traversal from a country.
    Dfs(StartArgs),
    /// Shortest path between two countries, weighted by great-circle distance.
    Route {
        /// Starting country name.
        #[arg(long = "from")]
        from: String,
        /// Destination country name.
        #[arg(long = "to")]
        to: String,
    },
    /// Minimum spanning tree over the countries reachable from a root.
    Mst(StartArgs),
    /// Filter countries by population and area, then rank them.
    Filter(FilterArgs),
    /// Print the leading rows of the adjacency matrix.
    Matrix {
        /// Number of rows to print.
        #[arg(long, default_value_t = commands::matrix::DEFAULT_ROWS)]
        rows: usize,
    },
}

#[derive(Args, Debug)]
struct StartArgs {
    /// Country name to start from.
    #[arg(long = "from")]
    from: String,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Minimum population (inclusive).
    #[arg(long)]
    min_population: Option<u64>,
    /// Maximum population (inclusive).
    #[arg(long)]
    max_population: Option<u64>,
    /// Minimum area in km2 (inclusive).
    #[arg(long)]
    min_area: Option<u64>,
    /// Maximum area in km2 (inclusive).
    #[arg(long)]
    max_area: Option<u64>,
    /// Print only this ranking (both are printed by default).
    #[arg(long, value_enum)]
    rank: Option<RankArg>,
    /// Largest first instead of smallest first.
    #[arg(long)]
    descending: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RankArg {
    Population,
    Area,
}

impl From<RankArg> for RankKey {
    fn from(value: RankArg) -> Self {
        match value {
            RankArg::Population => RankKey::Population,
            RankArg::Area => RankKey::Area,
        }
    }
}

impl From<FilterArgs> for FilterCommandArgs {
    fn from(args: FilterArgs) -> Self {
        Self {
            min_population: args.min_population,
            max_population: args.max_population,
            min_area: args.min_area,
            max_area: args.max_area,
            rank: args.rank.map(RankKey::from),
            descending: args.descending,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let presentation = Presentation {
        format: cli.format,
        palette,
    };
    let session = load_session(cli.data_file.as_deref())?;

    match cli.command {
        Command::List => commands::countries::handle_list(&session, presentation),
        Command::Search { needle } => {
            commands::countries::handle_search(&session, &needle, presentation)
        }
        Command::Bfs(args) => commands::traverse::handle_traverse(
            &session,
            &args.from,
            TraversalKind::Bfs,
            presentation,
        ),
        Command::Dfs(args) => commands::traverse::handle_traverse(
            &session,
            &args.from,
            TraversalKind::Dfs,
            presentation,
        ),
        Command::Route { from, to } => {
            commands::route::handle_route(&session, &from, &to, presentation)
        }
        Command::Mst(args) => commands::tree::handle_tree(&session, &args.from, presentation),
        Command::Filter(args) => {
            commands::filter::handle_filter(&session, &args.into(), presentation)
        }
        Command::Matrix { rows } => commands::matrix::handle_matrix(&session, rows, presentation),
    }
}

fn load_session(target: Option<&Path>) -> Result<Session> {
    let dataset_path =
        resolve_dataset_path(target).context("failed to locate the country dataset")?;
    Session::load(&dataset_path)
        .with_context(|| format!("failed to load dataset from {}", dataset_path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_flags_parse() {
        let cli = Cli::try_parse_from([
            "bordergraph",
            "filter",
            "--min-population",
            "5",
            "--rank",
            "area",
            "--descending",
        ])
        .unwrap();
        let Command::Filter(args) = cli.command else {
            panic!("expected filter");
        };
        let args = FilterCommandArgs::from(args);
        assert_eq!(args.min_population, Some(5));
        assert_eq!(args.rank, Some(RankKey::Area));
        assert!(args.descending);
    }
}
