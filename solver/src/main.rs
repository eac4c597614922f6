mod cli;
mod logging;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use image::RgbImage;
use log::{debug, info, warn};

use cli::{Args, Command};
use logging::Logger;
use maze_search::algorithms::search::{Outcome, SearchLimits, Strategy};
use maze_search::imaging::{Discretizer, render};
use maze_search::maze::{Direction, Grid, Position};
use maze_search::problem::MazeProblem;

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let discretizer = Discretizer::new(args.cell_size)?;

    match args.command {
        Command::Solve {
            image,
            algorithm,
            heuristic,
            max_expansions,
            output,
            print_grid,
            quiet_steps,
        } => {
            let (source, grid) = load_maze(&discretizer, image)?;
            if print_grid {
                print!("{grid}");
            }

            let limits = SearchLimits { max_expansions };
            let strategy = algorithm.strategy(heuristic);
            let (outcome, _) = run_strategy(&grid, strategy, limits)?;

            if let Outcome::Solved(solution) = &outcome {
                if !quiet_steps {
                    print_steps(&solution.path);
                }
                let output = output.unwrap_or_else(default_output_path);
                save_overlay(&source, &solution.path, discretizer.cell_size(), &output)?;
            }
        }
        Command::Benchmark {
            image,
            max_expansions,
        } => {
            let (_, grid) = load_maze(&discretizer, image)?;
            run_benchmark(&grid, SearchLimits { max_expansions })?;
        }
    }

    Ok(())
}

fn load_maze(discretizer: &Discretizer, image: Option<PathBuf>) -> Result<(RgbImage, Grid)> {
    let path = match image {
        Some(path) => path,
        None => prompt_image_path()?,
    };

    info!("reading maze from {}", path.display());
    let source = discretizer.read_image(&path)?;
    let grid = discretizer.discretize(&source)?;
    info!("discretized into {}x{} grid", grid.height(), grid.width());

    Ok((source, grid))
}

fn prompt_image_path() -> Result<PathBuf> {
    print!("path to the maze image (e.g. Test2.bmp): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        eyre::bail!("no image path given");
    }
    Ok(PathBuf::from(trimmed))
}

type TimedOutcome = (Outcome<Position, Direction>, Duration);

fn run_strategy(grid: &Grid, strategy: Strategy, limits: SearchLimits) -> Result<TimedOutcome> {
    let problem = MazeProblem::new(grid)?;

    info!("solving with {}", strategy.name());
    let start = Instant::now();
    let outcome = strategy.search(&problem, limits)?;
    let elapsed = start.elapsed();

    let stats = outcome.stats();
    match &outcome {
        Outcome::Solved(solution) => {
            info!("found a {} step path in {:?}", solution.steps(), elapsed);
        }
        Outcome::Exhausted(_) => {
            warn!("{}", "no solution: the goal is unreachable".red());
        }
        Outcome::Aborted(_) => {
            warn!(
                "{}",
                format!("gave up after {} expansions", stats.expanded).yellow()
            );
        }
    }
    debug!(
        "expanded {}, generated {}, peak frontier {}",
        stats.expanded, stats.generated, stats.max_frontier
    );

    Ok((outcome, elapsed))
}

fn run_benchmark(grid: &Grid, limits: SearchLimits) -> Result<()> {
    info!("benchmarking all strategies");

    let mut results = Vec::new();
    for strategy in Strategy::all() {
        let (outcome, elapsed) = run_strategy(grid, strategy, limits)?;
        results.push((strategy.name(), outcome, elapsed));
    }

    print_benchmark_summary(&results);
    Ok(())
}

fn print_steps(path: &[Position]) {
    println!("{}", "solution found:".green().bold());
    for line in render::narrate(path) {
        println!("  {line}");
    }
}

fn save_overlay(source: &RgbImage, path: &[Position], cell_size: u32, output: &Path) -> Result<()> {
    let drawn = render::draw_solution(source, path, cell_size);
    drawn.save(output)?;
    info!("wrote solution image to {}", output.display());
    Ok(())
}

fn default_output_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("solution-{stamp}.png"))
}

fn print_benchmark_summary(results: &[(&str, Outcome<Position, Direction>, Duration)]) {
    println!("\n{}", "benchmark results:".bold());
    println!(
        "{:<20} {:>8}  {:>10}  {:>12}",
        "algorithm", "steps", "expanded", "time"
    );
    println!("{:-<56}", "");

    for (name, outcome, elapsed) in results {
        let steps = match outcome {
            Outcome::Solved(solution) => solution.steps().to_string(),
            Outcome::Exhausted(_) => "none".to_string(),
            Outcome::Aborted(_) => "aborted".to_string(),
        };
        println!(
            "{:<20} {:>8}  {:>10}  {:>12?}",
            name,
            steps,
            outcome.stats().expanded,
            elapsed
        );
    }

    let solved = || {
        results
            .iter()
            .filter_map(|(name, outcome, elapsed)| Some((name, outcome.solution()?, elapsed)))
    };

    if let Some((name, solution, _)) = solved().min_by_key(|(_, solution, _)| solution.steps()) {
        println!(
            "\n{} {} ({} steps)",
            "best:".green(),
            name,
            solution.steps()
        );
    }

    if let Some((name, _, elapsed)) = solved().min_by_key(|(_, _, elapsed)| **elapsed) {
        println!("{} {} ({:?})", "fastest:".green(), name, elapsed);
    }
}
