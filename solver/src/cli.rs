use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use maze_search::algorithms::search::Strategy;
use maze_search::problem::Heuristic;

#[derive(Parser, Debug)]
#[command(name = "maze-search")]
#[command(about = "Finds a route through a maze image with BFS, DFS or A*")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Side length in pixels of one grid cell
    #[arg(short, long, value_name = "PX", default_value_t = 12)]
    pub cell_size: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a maze image with one strategy
    Solve {
        /// Maze image; prompted for on stdin when omitted
        image: Option<PathBuf>,

        /// Search strategy
        #[arg(short, long, value_enum, default_value_t = Algorithm::Bfs)]
        algorithm: Algorithm,

        /// Heuristic used by A* (manhattan or euclidean)
        #[arg(long, default_value = "manhattan")]
        heuristic: Heuristic,

        /// Give up after this many node expansions
        #[arg(long)]
        max_expansions: Option<usize>,

        /// Where to write the annotated image (defaults to a timestamped png)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the discretized grid before solving
        #[arg(long)]
        print_grid: bool,

        /// Skip the step-by-step narration
        #[arg(short, long)]
        quiet_steps: bool,
    },

    /// Benchmark mode: run every strategy on the same maze and compare
    Benchmark {
        /// Maze image; prompted for on stdin when omitted
        image: Option<PathBuf>,

        /// Give up after this many node expansions
        #[arg(long)]
        max_expansions: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Breadth-first search (shortest path)
    Bfs,

    /// Depth-first search
    Dfs,

    /// A* with the selected heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,
}

impl Algorithm {
    pub fn strategy(self, heuristic: Heuristic) -> Strategy {
        match self {
            Self::Bfs => Strategy::BreadthFirst,
            Self::Dfs => Strategy::DepthFirst,
            Self::AStar => Strategy::AStar(heuristic),
        }
    }
}
