use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stagger", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Measure a scene and print the placements as JSON.
    Measure(MeasureArgs),
    /// Validate a scene without measuring it.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct MeasureArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Report placements right-to-left regardless of the scene direction.
    #[arg(long, default_value_t = false)]
    rtl: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Measure(args) => cmd_measure(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_scene(path: &Path) -> anyhow::Result<stagger::Scene> {
    let scene = stagger::Scene::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    Ok(scene)
}

fn cmd_measure(args: MeasureArgs) -> anyhow::Result<()> {
    let mut scene = read_scene(&args.in_path)?;
    if args.rtl {
        scene.direction = stagger::LayoutDirection::Rtl;
    }

    let report = scene.report()?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serialize layout report")?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{json}").context("write layout report")?;
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    scene.validate()?;
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}
