#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use sparse_life::io::render::{CLEAR_SCREEN, DEFAULT_HALF_WIDTH, MAX_HALF_WIDTH};
use sparse_life::io::{Viewport, format_alive_cells, format_life106, read_seed};
use sparse_life::sparselife::{COORD_MAX, COORD_MIN};
use sparse_life::{Rule, SeedError, SparseLife, SparseLifeConfig};

const RULE_LINE: &str =
    "-----------------------------------------------------------------------";

#[derive(Parser, Debug)]
#[command(name = "sparse-life")]
#[command(about = "Conway's Game of Life on a sparse, wraparound 64-bit plane")]
struct Args {
    /// Generations to run after seeding
    #[arg(long, default_value_t = 10)]
    iterations: u64,

    /// Advance without waiting for <ENTER> between generations
    #[arg(long)]
    no_prompt: bool,

    /// Do not clear the terminal before drawing
    #[arg(long)]
    no_clear: bool,

    /// Threads for rule evaluation (1 = serial)
    #[arg(long)]
    threads: Option<usize>,

    /// Size the rule-evaluation pool from the physical core count
    #[arg(long, conflicts_with = "threads")]
    auto_threads: bool,

    /// Deduplicate the candidate queue each generation
    #[arg(long)]
    dedup_candidates: bool,

    /// Birth/survival rule in B/S notation
    #[arg(long, default_value_t = Rule::conway())]
    rule: Rule,

    /// Half-width of the drawn window around the origin
    #[arg(
        long,
        default_value_t = DEFAULT_HALF_WIDTH,
        value_parser = clap::value_parser!(i64).range(1..=MAX_HALF_WIDTH)
    )]
    half_width: i64,
}

impl Args {
    fn engine_config(&self) -> SparseLifeConfig {
        let mut config = SparseLifeConfig::default().rule(self.rule);
        if let Some(threads) = self.threads {
            config = config.thread_count(threads);
        }
        if self.auto_threads {
            config = config.auto_threads();
        }
        if self.dedup_candidates {
            config = config.dedup_candidates(true);
        }
        config
    }
}

/// `RUST_LOG` overrides the default `warn` filter. Logs go to stderr so
/// stdout only carries the board and listings.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn print_instructions(viewport: &Viewport) {
    println!("{RULE_LINE}");
    println!("Please enter the alive coordinates.");
    println!(
        "Enter one set of coordinates per line using the following format: <x-coordinate> <y-coordinate>"
    );
    println!("The max coordinate value is {COORD_MAX}");
    println!("The min coordinate value is {COORD_MIN}");
    println!("Enter an empty line to stop entering coordinates.");
    println!(
        "Cells whose coordinates are less than {} units from the origin will be displayed graphically.",
        viewport.half_width()
    );
    println!("Example:");
    for line in [
        "0 1",
        "1 2",
        "2 0",
        "2 1",
        "2 2",
        "-2000000000000 -2000000000000",
        "-2000000000001 -2000000000001",
        "<empty line>",
    ] {
        println!("{line}");
    }
    println!("{RULE_LINE}");
}

fn show(engine: &SparseLife, viewport: &Viewport, clear: bool) {
    if clear {
        print!("{CLEAR_SCREEN}");
    }
    print!("{}", viewport.render(engine));
    println!("Alive Cells:");
    print!("{}", format_alive_cells(engine));
}

/// Print the instructions, load the seed from stdin and draw generation 0.
fn start(engine: &mut SparseLife, viewport: &Viewport, clear: bool) -> Result<(), SeedError> {
    println!("Game of Life");
    print_instructions(viewport);

    let seeded = read_seed(io::stdin().lock(), engine)?;
    info!(seeded, population = engine.population(), rule = %engine.rule(), "seed loaded");
    show(engine, viewport, clear);
    Ok(())
}

fn play(args: &Args, engine: &mut SparseLife, viewport: &Viewport) -> io::Result<()> {
    let clear = !args.no_clear;
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut line = String::new();
    for i in 1..=args.iterations {
        println!();
        println!("Hit <ENTER> to run iteration {i}:");
        if !args.no_prompt {
            stdout.flush()?;
            line.clear();
            input.read_line(&mut line)?;
        }
        engine.iterate();
        show(engine, viewport, clear);
    }

    if clear {
        print!("{CLEAR_SCREEN}");
    }
    print!("{}", format_life106(engine));
    println!();
    stdout.flush()
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let mut engine = SparseLife::with_config(args.engine_config());
    let viewport = Viewport::new(args.half_width);

    if let Err(err) = start(&mut engine, &viewport, !args.no_clear) {
        error!("seeding failed: {err}");
        println!("{err}. Terminating program.");
        println!("Unable to start game.");
        return ExitCode::FAILURE;
    }

    match play(&args, &mut engine, &viewport) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("run aborted: {err}");
            println!("{err}. Terminating program.");
            ExitCode::FAILURE
        }
    }
}
