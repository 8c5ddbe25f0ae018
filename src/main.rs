use anyhow::Result;
use arkonis_data::Directive;
use arkonis_lib::{init_logging, App, AppConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "arkonis.toml")]
    config: String,

    /// Stop after this many ticks (runs until Ctrl-C otherwise)
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the tick period in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Starting directive (silent_watch, active_defense, protocol_omega, total_recall)
    #[arg(long)]
    directive: Option<Directive>,

    /// Trigger harmonic magnification after this tick
    #[arg(long)]
    magnify_at: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(interval_ms) = args.interval_ms {
        config.simulation.tick_interval_ms = interval_ms;
    }
    tracing::info!(fingerprint = %config.fingerprint(), "Configuration loaded");

    let mut app = App::new(config)?.with_magnify_at(args.magnify_at);
    if let Some(directive) = args.directive {
        app.orchestrator.set_directive(directive);
    }
    app.seed_intel();
    app.shutdown.listen_for_ctrl_c();

    app.run(args.ticks).await?;
    std::process::exit(app.shutdown.exit_code());
}
