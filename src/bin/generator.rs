//! Vehicle generator: serves random arrival records to one simulator over TCP

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::net::TcpListener;
use std::time::Duration;

use intersection_sim::feed::{encode, random_record, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "generator")]
#[command(about = "Sends random vehicle arrivals to a connected simulator")]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Delay between records in milliseconds
    #[arg(long, default_value = "1000")]
    interval_ms: u64,

    /// Stop after this many records (runs until the simulator leaves otherwise)
    #[arg(long)]
    count: Option<u64>,

    /// Seed for reproducible arrivals
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let listener = TcpListener::bind(("0.0.0.0", cli.port))
        .with_context(|| format!("Failed to bind port {}", cli.port))?;
    info!("Server listening on port {}", cli.port);

    let (mut stream, peer) = listener.accept().context("Failed to accept simulator")?;
    info!("Simulator connected from {}", peer);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let interval = Duration::from_millis(cli.interval_ms);

    let mut sent = 0u64;
    while cli.count.is_none_or(|limit| sent < limit) {
        let record = random_record(&mut rng);
        stream
            .write_all(&encode(&record))
            .context("Send failed")?;
        info!(
            "Data sent to client: Vehicle ID: {} on Road {} Lane {}",
            record.id, record.road, record.lane
        );
        sent += 1;
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }

    info!("Sent {} vehicles, closing", sent);
    Ok(())
}
