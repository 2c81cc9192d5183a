mod analyze;
mod selfplay;
mod turn;
mod ui;

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use isolation_core::agent::{AgentOptions, SearchMode};
use isolation_core::cell::Cell;
use isolation_core::eval::{Evaluator, Heuristic, LibertySigns};
use isolation_core::perft::perft_root;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicArg {
    PositionalMobility,
    MobilityDifference,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::PositionalMobility => Heuristic::PositionalMobility,
            HeuristicArg::MobilityDifference => Heuristic::MobilityDifference,
        }
    }
}

#[derive(Parser, Debug, Clone)]
struct EngineParams {
    #[arg(long, value_enum, default_value_t = HeuristicArg::PositionalMobility)]
    heuristic: HeuristicArg,

    /// Search a single fixed depth instead of deepening iteratively
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=99))]
    fixed_depth: Option<u32>,

    #[arg(long, default_value = "99", value_parser = clap::value_parser!(u32).range(1..=99))]
    max_depth: u32,

    /// Score a side without liberties as a win for that side
    #[arg(long)]
    legacy_liberty_signs: bool,

    /// Seed for the random opening placements
    #[arg(long)]
    seed: Option<u64>,
}

impl EngineParams {
    fn evaluator(&self) -> Evaluator {
        let liberty_signs = if self.legacy_liberty_signs {
            LibertySigns::Legacy
        } else {
            LibertySigns::Standard
        };
        Evaluator::new(self.heuristic.into(), liberty_signs)
    }

    fn agent_options(&self) -> AgentOptions {
        let mode = match self.fixed_depth {
            Some(depth) => SearchMode::Fixed(depth),
            None => SearchMode::Iterative {
                max_depth: self.max_depth,
            },
        };
        AgentOptions::default()
            .with_evaluator(self.evaluator())
            .with_mode(mode)
            .with_seed(self.seed)
    }
}

#[derive(Parser, Debug)]
#[command(name = "isolation", about = "Knight-move Isolation engine")]
struct Cli {
    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Let the engine play against itself
    Selfplay {
        #[arg(long, default_value = "1")]
        games: u32,

        /// Thinking time per move
        #[arg(long, default_value = "150")]
        time_limit_ms: u64,

        #[command(flatten)]
        engine_params: EngineParams,
    },
    /// Replay moves from the empty board and search the resulting position
    Analyze {
        /// Comma-separated moves, e.g. e5,g5,f7
        #[arg(long, value_delimiter = ',')]
        moves: Vec<Cell>,

        #[arg(long, default_value = "6", value_parser = clap::value_parser!(u32).range(1..=99))]
        depth: u32,

        /// Search without alpha-beta pruning
        #[arg(long)]
        exhaustive: bool,

        #[command(flatten)]
        engine_params: EngineParams,
    },
    /// Count the leaves of the game tree from the empty board
    Perft {
        #[arg(long, default_value = "4")]
        depth: u32,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Cli::parse();
    match args.command {
        SubCommands::Selfplay {
            games,
            time_limit_ms,
            engine_params,
        } => selfplay::run(
            games,
            Duration::from_millis(time_limit_ms),
            engine_params.agent_options(),
        ),
        SubCommands::Analyze {
            moves,
            depth,
            exhaustive,
            engine_params,
        } => analyze::run(&moves, depth, engine_params.evaluator(), exhaustive),
        SubCommands::Perft { depth } => {
            run_perft(depth);
            Ok(())
        }
    }
}

fn run_perft(depth: u32) {
    let start = Instant::now();
    let nodes = perft_root(depth);
    let elapsed = start.elapsed();
    let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!("perft({depth}) = {nodes}  [{elapsed:.2?}, {nps:.0} nodes/s]");
}
