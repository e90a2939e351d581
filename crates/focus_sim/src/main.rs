//! Focus simulator
//!
//! Steps the board attachment systems over a scripted scene without a
//! headset and reports what was persisted.

use anyhow::{Context, Result};
use clap::Parser;
use focus_core::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod demo;

#[derive(Parser)]
#[command(name = "focus-sim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run the Focus board attachment systems over a scripted scene", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value = "360")]
    frames: u64,

    /// Frame rate in Hz
    #[arg(long, default_value = "72")]
    rate: f32,

    /// Print the effective config and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => FocusConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FocusConfig::default(),
    };

    if cli.print_config {
        print!("{}", config.to_toml().context("Failed to serialize config")?);
        return Ok(());
    }

    if !(cli.rate.is_finite() && cli.rate > 0.0) {
        anyhow::bail!("--rate must be positive, got {}", cli.rate);
    }

    run(&cli, &config)
}

fn run(cli: &Cli, config: &FocusConfig) -> Result<()> {
    let store = Arc::new(MemoryStore::strict());
    let mut world = World::new();
    let scene = demo::build(&mut world);
    for (_, tool) in world.each::<Tool>() {
        store.register(tool.id);
    }

    let linked = link_to_parent_boards(&mut world, None);
    info!(linked, "project loaded");

    let mut schedule = ScheduleBuilder::new()
        .add(demo::bounds_loader(scene.board_b))
        .add(demo::scripted_grab(scene.note, cli.frames))
        .add(BoardParentingSystem::new(store.clone(), config.attach.clone()))
        .add(PoseSyncSystem::new(store.clone(), config.pose_sync.clone()))
        .build();
    info!(systems = ?schedule.system_names(), "schedule ready");

    let dt = 1.0 / cli.rate;
    let mut parent = current_parent(&world, scene.note);
    for _ in 0..cli.frames {
        schedule.step(&mut world, dt);

        let now = current_parent(&world, scene.note);
        if now != parent {
            info!(
                frame = schedule.frame(),
                from = ?parent.and_then(|e| world.name(e)),
                to = ?now.and_then(|e| world.name(e)),
                "note changed board"
            );
            parent = now;
        }
    }

    info!(
        frames = schedule.frame(),
        elapsed = schedule.elapsed(),
        "simulation finished"
    );

    for (id, record) in store.records() {
        println!(
            "{id} {:?}: parent={} parent_writes={} pose_writes={}",
            record.asset_type,
            record.parent.map_or_else(|| "none".to_string(), |p| p.to_string()),
            record.parent_writes,
            record.pose_writes,
        );
    }

    let label_parent = current_parent(&world, scene.label);
    let note_on_b = parent == Some(scene.board_b);
    info!(note_on_b, label_attached = label_parent.is_some(), board_a = ?scene.board_a, "final state");
    Ok(())
}

fn current_parent(world: &World, entity: Entity) -> Option<Entity> {
    world
        .get::<TransformParent>(entity)
        .and_then(|p| p.live(world))
}
