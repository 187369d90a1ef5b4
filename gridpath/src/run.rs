//! Command implementations, separated from `main` so they can be driven with
//! in-memory writers.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use gridpath_core::{Grid, Scenario, load_grid, scenario};
use gridpath_search::{AStar, Heuristic, SearchError, SearchResult, bfs_distance};

use crate::cli::{Args, ScenArgs};

/// Search one start/goal pair and write the path length to `out`.
///
/// Search counters go to `err` when `--stats` is given.
pub fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let grid = load_grid(&args.map_file)?;
    let search = AStar::new(&grid, args.start(), args.goal(), args.heuristic)
        .context("invalid start or goal")?;

    let started = Instant::now();
    let result = search.run();
    let elapsed = started.elapsed();
    log::info!(
        "{} -> {} with {}: length {} in {:?}",
        args.start(),
        args.goal(),
        args.heuristic,
        result.length(),
        elapsed
    );

    writeln!(out, "{}", result.length())?;
    if args.print_path {
        for &c in &result.path {
            let (row, col): (usize, usize) = c.into();
            writeln!(out, "{row} {col}")?;
        }
    }
    if args.stats {
        let s = result.stats;
        writeln!(
            err,
            "expanded={} pushed={} stale={} peak_frontier={} elapsed_us={}",
            s.expanded,
            s.pushed,
            s.stale,
            s.peak_frontier,
            elapsed.as_micros()
        )?;
    }
    Ok(())
}

/// Run every scenario of a `.scen` file and write `index<TAB>length` lines,
/// 1-based, in file order.
pub fn run_scenarios(args: &ScenArgs, out: &mut impl Write) -> Result<()> {
    let grid = load_grid(&args.map_file)?;
    let scens = scenario::load(&args.scen_file)?;
    log::info!(
        "{} scenarios, heuristic {}, {} job(s)",
        scens.len(),
        args.heuristic,
        args.jobs
    );

    let results = solve_all(&grid, &scens, args.heuristic, args.jobs.get());

    let mut mismatches = Vec::new();
    for (i, (scen, result)) in scens.iter().zip(results).enumerate() {
        let index = i + 1;
        let result = result.with_context(|| {
            format!("scenario {index}: {} -> {}", scen.start, scen.goal)
        })?;
        writeln!(out, "{index}\t{}", result.length())?;

        if args.verify {
            let truth = bfs_distance(&grid, scen.start, scen.goal).map_or(0, |d| d as usize);
            if truth != result.length() {
                log::error!(
                    "scenario {index}: astar length {} but bfs length {truth}",
                    result.length()
                );
                mismatches.push(index);
            }
        }
    }

    if !mismatches.is_empty() {
        bail!(
            "{} scenario(s) disagree with breadth-first search: {:?}",
            mismatches.len(),
            mismatches
        );
    }
    Ok(())
}

/// Solve `scens` on `jobs` worker threads that all borrow the same grid.
/// Results come back in scenario order.
pub fn solve_all(
    grid: &Grid,
    scens: &[Scenario],
    heuristic: Heuristic,
    jobs: usize,
) -> Vec<Result<SearchResult, SearchError>> {
    let solve = |s: &Scenario| AStar::new(grid, s.start, s.goal, heuristic).map(AStar::run);

    if jobs <= 1 || scens.len() <= 1 {
        return scens.iter().map(solve).collect();
    }

    let chunk = scens.len().div_ceil(jobs);
    std::thread::scope(|scope| {
        let handles: Vec<_> = scens
            .chunks(chunk)
            .map(|part| scope.spawn(move || part.iter().map(solve).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| match h.join() {
                Ok(part) => part,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
