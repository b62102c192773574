use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use std::time::{Duration, Instant};

use intersection_sim::feed::{RandomFeed, TcpFeed, VehicleFeed};
use intersection_sim::render::LogRenderer;
use intersection_sim::simulation::{
    Enqueue, Renderer, SimConfig, Size, TargetPolicy, World, VEHICLE_SIZE,
};

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Four-way signalized intersection simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of ticks to run in headless mode
    #[arg(long, default_value = "1000")]
    ticks: u64,

    /// Wall-clock period of one tick in milliseconds
    #[arg(long, default_value = "30")]
    tick_ms: u64,

    /// How long each light phase stays green, in milliseconds
    #[arg(long, default_value = "5000")]
    dwell_ms: u64,

    /// Capacity of the ingestion queue and the active set
    #[arg(long, default_value = "100")]
    capacity: usize,

    /// Pixels a vehicle advances per tick
    #[arg(long, default_value = "2")]
    speed: i32,

    /// How destinations are assigned to arriving vehicles
    #[arg(long, value_enum, default_value_t = TargetPolicy::Canonical)]
    policy: TargetPolicy,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Address of a running generator, e.g. 127.0.0.1:8080; without it
    /// vehicles come from an in-process random feed
    #[arg(long)]
    feed: Option<String>,

    /// Ticks between arrivals from the in-process random feed
    #[arg(long, default_value = "20")]
    spawn_every: u32,

    /// Ticks between summary lines in headless mode (0 disables)
    #[arg(long, default_value = "100")]
    report_every: u64,

    /// Ticks between ASCII maps in headless mode (0 disables)
    #[arg(long, default_value = "0")]
    map_every: u64,
}

impl Cli {
    fn sim_config(&self) -> Result<SimConfig> {
        if self.capacity == 0 {
            bail!("--capacity must be at least 1");
        }
        if self.speed <= 0 {
            bail!("--speed must be positive, got {}", self.speed);
        }
        Ok(SimConfig {
            capacity: self.capacity,
            light_dwell: Duration::from_millis(self.dwell_ms),
            tick_period: Duration::from_millis(self.tick_ms),
            speed: self.speed,
            vehicle_size: Size::new(VEHICLE_SIZE, VEHICLE_SIZE),
            policy: self.policy,
            seed: self.seed,
        })
    }

    fn open_feed(&self) -> Result<Box<dyn VehicleFeed>> {
        Ok(match &self.feed {
            Some(addr) => Box::new(TcpFeed::connect(addr.as_str())?),
            None => Box::new(RandomFeed::new(self.spawn_every, self.seed)),
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.sim_config()?;

    if cli.ui {
        return start_ui(&cli, config);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let feed = cli.open_feed()?;
    run_headless(&cli, config, feed);
    Ok(())
}

#[cfg(feature = "ui")]
fn start_ui(cli: &Cli, config: SimConfig) -> Result<()> {
    let feed = cli.open_feed()?;
    run_with_ui(config, feed);
    Ok(())
}

#[cfg(not(feature = "ui"))]
fn start_ui(_cli: &Cli, _config: SimConfig) -> Result<()> {
    bail!("UI feature is not enabled. Rebuild with --features ui");
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli, config: SimConfig, feed: Box<dyn VehicleFeed>) {
    info!("Running intersection simulation in headless mode...");
    info!(
        "Ticks: {}, tick period: {:?}, light dwell: {:?}, capacity: {}",
        cli.ticks, config.tick_period, config.light_dwell, config.capacity
    );

    let tick_period = config.tick_period;
    let mut feed = Some(feed);
    let mut world = World::new(config, Instant::now());
    let mut renderer = LogRenderer::new(cli.report_every, cli.map_every);

    for _ in 0..cli.ticks {
        let polled = feed.as_mut().map(|source| source.poll());
        match polled {
            Some(Ok(records)) => {
                let dropped = records
                    .into_iter()
                    .filter(|&record| matches!(world.arrive(record), Enqueue::Dropped(_)))
                    .count();
                if dropped > 0 {
                    debug!("{} arrivals dropped at the ingestion queue this tick", dropped);
                }
            }
            Some(Err(e)) => {
                error!("Vehicle feed lost: {}; no new vehicles will be admitted", e);
                feed = None;
            }
            None => {}
        }

        world.tick(Instant::now());
        renderer.render(&world.frame());

        if feed.is_none() && !world.can_progress() {
            warn!("Vehicle feed is gone and no vehicle can move; stopping");
            break;
        }

        if !tick_period.is_zero() {
            std::thread::sleep(tick_period);
        }
    }

    world.shutdown();
}

#[cfg(feature = "ui")]
fn run_with_ui(config: SimConfig, feed: Box<dyn VehicleFeed>) {
    use bevy::log::LogPlugin;
    use bevy::prelude::{default, App, DefaultPlugins, Fixed, PluginGroup, Time, Window, WindowPlugin};
    use intersection_sim::simulation::WINDOW_SIZE;
    use intersection_sim::ui::{FeedResource, IntersectionUiPlugin, SimWorldResource};

    println!("Starting Intersection Sim UI...");
    println!();
    println!("Controls:");
    println!("  ESC         - Exit");
    println!();

    let tick_period = config.tick_period.max(Duration::from_millis(1));
    let world = World::new(config, Instant::now());

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,intersection_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Intersection Sim".into(),
                        resolution: (WINDOW_SIZE as u32 * 2, WINDOW_SIZE as u32 * 2).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(Time::<Fixed>::from_duration(tick_period))
        .insert_resource(SimWorldResource(world))
        .insert_resource(FeedResource(Some(feed)))
        .add_plugins(IntersectionUiPlugin)
        .run();
}
