//! Duck-Rabbit Flapper entry point
//!
//! Headless native host: runs the autopilot through the frame loop and
//! reports how it did.

use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use duck_rabbit_flapper::input::InputEvent;
use duck_rabbit_flapper::sim::{Autopilot, GameEvent, GameState, Simulation};
use duck_rabbit_flapper::{FrameLoop, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "duck-rabbit-flapper")]
#[command(about = "Run the Duck-Rabbit Flapper simulation headless under the autopilot")]
struct Cli {
    /// Gap RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to simulate, across as many runs as fit
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// JSON config file; missing fields use the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Duck-Rabbit Flapper (headless) starting with seed {}", seed);

    let mut host = FrameLoop::new(Simulation::new(config, seed)?);
    let mut pilot = Autopilot::default();
    let mut runs = 0u32;
    let mut best = 0u64;

    for _ in 0..cli.frames {
        match host.sim().state() {
            // Title screen: one intent starts a run
            GameState::NotStarted => host.push_input(InputEvent::PointerDown),
            GameState::Running => host.steer(&mut pilot),
            // Restart, then start again on the same tick
            GameState::Ended => {
                host.push_input(InputEvent::PointerDown);
                host.push_input(InputEvent::PointerDown);
            }
        }

        for event in host.tick()? {
            if let GameEvent::Crashed(cause) = event {
                runs += 1;
                best = best.max(host.sim().score());
                log::info!(
                    "Run {} over: {:?}, score {}",
                    runs,
                    cause,
                    host.sim().score()
                );
            }
        }
    }
    best = best.max(host.sim().score());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&host.sim().snapshot())?);
    } else {
        println!("seed:       {seed}");
        println!("frames:     {}", host.ticks());
        println!("crashes:    {runs}");
        println!("best score: {best}");
    }
    Ok(())
}
