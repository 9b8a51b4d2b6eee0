//! Headless Planetoid Simulation
//!
//! Run with: `cargo run --bin planetoid-sim -- --frames 900 --verbose`
//!
//! Replays a scripted input timeline through the full agent pipeline and
//! logs what the agent, camera and billboard do. No window or GPU needed.
//!
//! Script:
//! - 0s: walk forward
//! - 3s: walk forward while strafing right (turns the agent)
//! - 5s: jump while walking
//! - 7s: jump again, then stand still

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use planetoid_engine::{Agent, PlanetoidConfig, ScriptedInput, logging};

/// Run the planetoid agent without a window
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file (missing keys fall back to defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Time step per frame in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    ensure!(
        args.dt.is_finite() && args.dt > 0.0,
        "--dt must be a positive number of seconds, got {}",
        args.dt
    );

    let config = match &args.config {
        Some(path) => PlanetoidConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PlanetoidConfig::default(),
    };

    run(&config, &args)
}

fn run(config: &PlanetoidConfig, args: &Args) -> Result<()> {
    let script = ScriptedInput::demo();
    let mut agent = Agent::spawn(config);
    let frames_per_second = (1.0 / args.dt).round().max(1.0) as u32;

    log::info!(
        "simulating {} frames at dt={:.4}s on a {:.1}m sphere",
        args.frames,
        args.dt,
        config.world.sphere.radius
    );

    let mut jumps = 0u32;
    let mut max_height = 0.0f32;
    let mut distance = 0.0f32;
    let mut last_position = agent.locomotion().position();

    for frame in 0..args.frames {
        let input = script.sample_at(agent.elapsed());
        if input.exit {
            log::info!("exit requested at frame {frame}");
            break;
        }

        let out = agent.frame(args.dt, &input);
        let locomotion = agent.locomotion();

        if out.events.jumped {
            jumps += 1;
        }
        max_height = max_height.max(locomotion.height_above_surface());
        distance += (out.agent_position - last_position).length();
        last_position = out.agent_position;

        ensure!(
            out.agent_position.is_finite() && out.camera.view_matrix().is_finite(),
            "simulation diverged at frame {frame}"
        );

        if (frame + 1) % frames_per_second == 0 {
            log::info!(
                "t={:5.2}s pos=({:7.3}, {:7.3}, {:7.3}) height={:.3} speed={:.3} grounded={}",
                agent.elapsed(),
                out.agent_position.x,
                out.agent_position.y,
                out.agent_position.z,
                locomotion.height_above_surface(),
                locomotion.speed(),
                out.events.grounded,
            );
            log::debug!(
                "  camera=({:.3}, {:.3}, {:.3}) billboard_right=({:.3}, {:.3}, {:.3}) shadow_opacity={:.3}",
                out.camera.position.x,
                out.camera.position.y,
                out.camera.position.z,
                out.billboard_right().x,
                out.billboard_right().y,
                out.billboard_right().z,
                out.shadow.opacity,
            );
        }
    }

    let locomotion = agent.locomotion();
    log::info!(
        "done: {} frames, {:.2}s simulated, {:.2}m travelled, {} jumps, max height {:.3}m, final height {:.3}m",
        agent.frame_count(),
        agent.elapsed(),
        distance,
        jumps,
        max_height,
        locomotion.height_above_surface(),
    );

    Ok(())
}
