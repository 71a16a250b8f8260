use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};

use pleat::{Fold, PRESETS, Pattern, apply_sequential_progress};

#[derive(Parser, Debug)]
#[command(name = "pleat", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in presets.
    Presets,
    /// Build the render tree for a pattern and dump it as JSON.
    Tree(PatternArgs),
    /// Print the crease-pattern segments for a pattern as JSON.
    Creases(PatternArgs),
    /// Write a built-in preset as a pattern JSON file.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct PatternArgs {
    /// Input pattern JSON (pass exactly one of --in / --preset).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Built-in preset key (pass exactly one of --in / --preset).
    #[arg(long)]
    preset: Option<String>,

    /// Paper size in pixels.
    #[arg(long, default_value_t = 300.0)]
    paper: f64,

    /// Playback progress in units of 100 per fold; omit for the fully
    /// folded config view.
    #[arg(long)]
    progress: Option<f64>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Built-in preset key.
    #[arg(long)]
    preset: String,

    /// Output pattern JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Tree(args) => cmd_tree(args),
        Command::Creases(args) => cmd_creases(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn cmd_presets() -> anyhow::Result<()> {
    for preset in PRESETS {
        println!(
            "{:<24} {} ({} folds): {}",
            preset.key,
            preset.name,
            preset.folds.len(),
            preset.description
        );
    }
    Ok(())
}

fn cmd_tree(args: PatternArgs) -> anyhow::Result<()> {
    let folds = load_folds(&args)?;
    let tree = pleat::build_tree(&folds, args.paper);
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn cmd_creases(args: PatternArgs) -> anyhow::Result<()> {
    let folds = load_folds(&args)?;
    let creases = pleat::crease_segments(&folds, args.paper);
    println!("{}", serde_json::to_string_pretty(&creases)?);
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let preset = pleat::preset(&args.preset)
        .with_context(|| format!("unknown preset '{}'", args.preset))?;
    let json = pleat::export_folds(preset.key, &preset.instantiate())?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn load_folds(args: &PatternArgs) -> anyhow::Result<Vec<Fold>> {
    let mut folds = match (&args.in_path, &args.preset) {
        (Some(path), None) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Pattern::from_json(&json)?.instantiate()
        }
        (None, Some(key)) => pleat::preset(key)
            .with_context(|| format!("unknown preset '{key}'"))?
            .instantiate(),
        _ => bail!("pass exactly one of --in or --preset"),
    };

    match args.progress {
        Some(progress) => apply_sequential_progress(&mut folds, progress),
        // Config view: every fold at its target angle.
        None => {
            for fold in &mut folds {
                fold.current_angle = fold.target_angle;
            }
        }
    }
    Ok(folds)
}
