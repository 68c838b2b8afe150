//! Pong runner - plays the C64 game on a simulated machine
//!
//! Usage: pong [OPTIONS]

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use c64::types::Vector;
use clap::Parser;
use log::LevelFilter;
use pong::{Controller, RunConfig, Runner, parse_serve, render_screen};

#[derive(Parser, Debug)]
#[command(name = "pong")]
#[command(version)]
#[command(about = "Play C64 pong headless on a simulated VIC-II", long_about = None)]
struct Args {
    /// Frames to play (50 per second on PAL)
    #[arg(short, long, default_value_t = pong::config::DEFAULT_FRAMES)]
    frames: u64,

    /// Joystick #1 driver
    #[arg(long, value_enum, default_value = "auto")]
    p1: Controller,

    /// Joystick #2 driver
    #[arg(long, value_enum, default_value = "auto")]
    p2: Controller,

    /// Initial ball velocity as dx,dy
    #[arg(long, default_value = "1,1", allow_hyphen_values = true, value_parser = parse_serve)]
    serve: Vector,

    /// Write the final text screen to a file
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = RunConfig {
        frames: args.frames,
        player1: args.p1,
        player2: args.p2,
        serve: args.serve,
        dump: args.dump.clone(),
    };
    config.validate()?;

    let mut runner = Runner::new(&config);
    let summary = runner.run(config.frames);
    let screen = render_screen(runner.machine());

    println!(
        "{} frames: player 1 {} - {} player 2 ({} paddle hits, {} wall bounces)",
        summary.frames, summary.scores.0, summary.scores.1, summary.paddle_hits, summary.wall_bounces
    );

    if let Some(path) = &config.dump {
        fs::write(path, &screen)
            .with_context(|| format!("failed to write screen to {}", path.display()))?;
        if args.verbose {
            eprintln!("Screen written to {}", path.display());
        }
    } else if args.verbose {
        print!("{screen}");
    }

    Ok(())
}
