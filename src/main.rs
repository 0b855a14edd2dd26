use anyhow::Result;
use biotelia_lib::app::{App, RunOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of frames to simulate (0 runs until interrupted)
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Number of simulated visitors
    #[arg(short, long, default_value_t = 4)]
    visitors: usize,

    /// Override the configured random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured target frame rate
    #[arg(long)]
    fps: Option<u64>,

    /// Record every frame's render snapshot as JSON lines
    #[arg(long)]
    record: Option<PathBuf>,

    /// Pace frames in real time and use wall-clock timesteps
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    biotelia_core::init_logging();
    let args = Args::parse();

    let mut config = App::load_config(&args.config);
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(fps) = args.fps {
        config.target_fps = fps;
    }
    config.validate()?;

    let options = RunOptions {
        frames: (args.frames > 0).then_some(args.frames),
        visitors: args.visitors,
        record: args.record,
        realtime: args.realtime,
    };

    let mut app = App::new(config, options)?;
    let summary = app.run()?;

    tracing::info!(
        frames = summary.frames,
        visitor_dances = summary.visitor_dances,
        agent_dances = summary.agent_dances,
        "Headless simulation finished"
    );
    Ok(())
}
