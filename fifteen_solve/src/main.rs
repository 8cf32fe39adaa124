#![doc = include_str!("../README.md")]

use anyhow::{bail, Context, Result};
use clap::Parser;
use cpu_time::ProcessTime;
use fifteen::puzzle_sliding16::state::Board;
use fifteen::solver::{AStarSolver, Solution};
use fifteen::stats::{Limited, SearchAllStats};
use fsum::FSum;
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Finds the shortest solutions of 15-puzzle boards with A* search")]
struct Args {
    /// Board to solve: 16 numbers in row-major order (0 is the blank), separated by whitespace or commas
    board: Vec<String>,

    /// Solve boards from the file, one board per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Ignore the first number of each line of the file (index of the board)
    #[arg(long)]
    skip_first: bool,

    /// Solve the given number of random boards
    #[arg(short, long, default_value_t = 0)]
    random: usize,

    /// Seed of the random boards generator
    #[arg(long, default_value_t = 123)]
    seed: u64,

    /// Number of random moves used to scramble each random board
    #[arg(long, default_value_t = 20)]
    walk: usize,

    /// Give up solving a board after the given number of expansions
    #[arg(short, long)]
    limit: Option<u64>,

    /// Print the moves of each solution
    #[arg(short, long)]
    moves: bool,

    /// Print only the number of moves of each solution
    #[arg(short, long)]
    quiet: bool,
}

/// Result of solving one board.
struct TestStateSolution {
    moves: usize,
    stats: SearchAllStats,
    seconds: f64
}

/// Boards to be solved.
struct Test {
    solver: AStarSolver,
    test_states: Vec<Board>
}

impl Test {
    fn new() -> Self {
        Self { solver: AStarSolver::new(), test_states: Vec::new() }
    }

    /// Returns random solvable board: the goal scrambled by `walk` moves, none of which undoes the previous one.
    fn rand_state(&self, rng: &mut ChaCha8Rng, walk: usize) -> Board {
        let mut state = Board::goal();
        let mut prev_state = state;
        for _ in 0..walk {
            let candidates: Vec<Board> = self.solver.moves.successors(&state).into_iter()
                .filter(|candidate| *candidate != prev_state).collect();
            if let Some(next) = candidates.choose(rng) {
                prev_state = state;
                state = *next;
            }
        }
        state
    }

    fn add_test_state(&mut self, state: Board) {
        self.test_states.push(state);
    }

    fn add_random_test_states(&mut self, rng: &mut ChaCha8Rng, how_many: usize, walk: usize) {
        for _ in 0..how_many { self.add_test_state(self.rand_state(rng, walk)); }
    }

    fn add_test_states_from_lines(&mut self, lines: impl BufRead, skip_first: bool, source: &str) -> Result<()> {
        for (line_nr, line) in lines.lines().enumerate() {
            let line = line.with_context(|| format!("cannot read {}", source))?;
            let mut tokens = line.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty());
            if skip_first { tokens.next(); }
            let tokens: Vec<&str> = tokens.collect();
            if tokens.is_empty() { continue; }
            let state: Board = tokens.join(" ").parse()
                .with_context(|| format!("invalid board in line {} of {}", line_nr + 1, source))?;
            self.add_test_state(state);
        }
        Ok(())
    }

    fn add_test_states_from_file(&mut self, file_name: &PathBuf, skip_first: bool) -> Result<()> {
        let f = File::open(file_name).with_context(|| format!("cannot open {}", file_name.display()))?;
        self.add_test_states_from_lines(BufReader::new(f), skip_first, &file_name.display().to_string())
    }

    fn solve(&self, state: Board, limit: Option<u64>) -> Result<(Solution, TestStateSolution)> {
        let start_moment = ProcessTime::try_now().context("getting process time failed")?;
        let (solution, stats) = match limit {
            Some(limit) => {
                let mut limited = Limited::with_limit(limit);
                let solution = self.solver.solve_stats(state, &mut limited);
                (solution, SearchAllStats::from(&limited))
            }
            None => {
                let mut stats = SearchAllStats::default();
                let solution = self.solver.solve_stats(state, &mut stats);
                (solution, stats)
            }
        };
        let seconds = start_moment.try_elapsed().context("getting process time failed")?.as_secs_f64();
        let solution = solution?;
        let moves = solution.moves();
        Ok((solution, TestStateSolution { moves, stats, seconds }))
    }

    fn run(&self, args: &Args) -> Result<()> {
        let mut solved = Vec::with_capacity(self.test_states.len());
        let mut failed = 0usize;
        for (state_idx, state) in self.test_states.iter().enumerate() {
            match self.solve(*state, args.limit) {
                Ok((solution, result)) => {
                    print_solution(&solution, args);
                    solved.push(result);
                }
                Err(err) => {
                    println!("Cannot solve.");
                    eprintln!("board {}: {:#}", state_idx, err);
                    failed += 1;
                }
            }
        }
        if self.test_states.len() > 1 { print_summary(&solved, failed); }
        if failed != 0 { bail!("{} of {} boards not solved", failed, self.test_states.len()); }
        Ok(())
    }
}

fn print_solution(solution: &Solution, args: &Args) {
    println!("Solution with number of moves: {}", solution.moves());
    if !args.quiet {
        for board in solution.boards() { println!("{}", board); }
    }
    if args.moves {
        for direction in solution.directions() {
            println!("{} {}", direction.short_label(), direction.label());
        }
    }
}

fn print_summary(solved: &[TestStateSolution], failed: usize) {
    println!("{} boards solved, {} not solved.", solved.len(), failed);
    if solved.is_empty() { return; }
    let n = solved.len() as f64;
    let mut total_stats = SearchAllStats::default();
    for s in solved { total_stats += s.stats; }
    let total_moves: usize = solved.iter().map(|s| s.moves).sum();
    let total_seconds = FSum::with_all(solved.iter().map(|s| s.seconds)).value();
    println!("  {:.2} moves/case, {:.0} boards/case expanded, {:.0} boards/case discovered, {:.4} sec/case.",
             total_moves as f64 / n,
             total_stats.expanded as f64 / n,
             total_stats.discovered as f64 / n,
             total_seconds / n);
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut test = Test::new();

    if !args.board.is_empty() {
        let state: Board = args.board.join(" ").parse().context("invalid board")?;
        test.add_test_state(state);
    }
    if let Some(ref file_name) = args.file {
        test.add_test_states_from_file(file_name, args.skip_first)?;
    }
    if args.random != 0 {
        test.add_random_test_states(&mut ChaCha8Rng::seed_from_u64(args.seed), args.random, args.walk);
    }
    if args.board.is_empty() && args.file.is_none() && args.random == 0 {
        test.add_test_states_from_lines(io::stdin().lock(), args.skip_first, "standard input")?;
    }

    test.run(&args)
}
