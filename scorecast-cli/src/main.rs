mod reports;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use scorecast_engine::{
    Lineup, LineupSheet, RngBundle, SimulationPlan, run_simulation, simulate_game,
};

#[derive(Debug, Parser)]
#[command(name = "scorecast", version = "0.1.0")]
#[command(about = "Monte Carlo baseball game estimation from season batting lines")]
struct Args {
    /// Visiting team lineup sheet (JSON)
    #[arg(long)]
    away: PathBuf,

    /// Home team lineup sheet (JSON)
    #[arg(long)]
    home: PathBuf,

    /// Number of independent game trials
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,

    /// Seed for the deterministic RNG streams
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the line score of one sample game before the report
    #[arg(long)]
    box_score: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    announce_banner();

    let away = load_lineup(&args.away)?;
    let home = load_lineup(&args.home)?;
    if args.verbose {
        print_lineup(&away);
        print_lineup(&home);
    }

    let plan = SimulationPlan::new(args.iterations, args.seed).sanitize();
    log::info!(
        "simulating {} vs {} over {} trials (seed {})",
        away.name(),
        home.name(),
        plan.iterations,
        plan.seed
    );

    let start_time = Instant::now();
    let summary = run_simulation(&away, &home, plan);
    let duration = start_time.elapsed();

    let mut output_target = OutputTarget::new(args.output.clone())?;
    if args.box_score {
        let sample = simulate_game(&away, &home, &RngBundle::for_trial(plan.seed, 0));
        reports::print_box_score(&mut output_target, &away, &home, &sample)?;
    }
    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, &summary)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, &summary)?,
        _ => reports::generate_console_report(&mut output_target, &summary, duration)?,
    }
    output_target.flush_inner()?;
    Ok(())
}

fn announce_banner() {
    println!("{}", "⚾ Scorecast".bright_cyan().bold());
    println!("{}", "===========".cyan());
}

fn load_lineup(path: &Path) -> Result<Lineup> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let sheet = LineupSheet::from_json(&json)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Lineup::from_sheet(&sheet)
        .with_context(|| format!("invalid lineup in {}", path.display()))
}

fn print_lineup(lineup: &Lineup) {
    println!("{} ({} batters)", lineup.name().bold(), lineup.len());
    for (slot, batter) in lineup.batters().iter().enumerate() {
        println!(
            "  {}. {:20} BA {:.3}  OBP {:.3}  SLG {:.3}",
            slot + 1,
            batter.name(),
            batter.batting_average(),
            batter.on_base(),
            batter.slugging()
        );
    }
    println!();
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
