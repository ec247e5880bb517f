use clap::Parser;
use rootwalk_application::use_cases::LookupHostsUseCase;
use rootwalk_domain::{CliOverrides, Config, IterationStrategy};
use std::io::Write;
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Resolve names by walking down from the DNS root servers")]
struct Cli {
    /// Names to resolve
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    names: Vec<String>,

    /// Print per-kind lookup status and debug logs to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// How root servers are consulted (sequential, parallel)
    #[arg(long)]
    strategy: Option<IterationStrategy>,

    /// Maximum number of glue referrals followed per query
    #[arg(long, value_name = "N")]
    max_referral_depth: Option<usize>,

    /// Print one JSON object per name
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        query_timeout: cli.timeout,
        strategy: cli.strategy,
        max_referral_depth: cli.max_referral_depth,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config, cli.verbose);

    info!("Starting rootwalk v{}", env!("CARGO_PKG_VERSION"));
    match cli.config.as_deref().map(str::to_string).or_else(Config::get_config_path) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No configuration file, using defaults"),
    }

    let services = di::DnsServices::new(&config);
    let lookup = LookupHostsUseCase::new(services.resolver.clone());

    let reports = lookup.execute(&cli.names).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        if cli.verbose {
            eprint!("{}", output::render_status(report));
        }
        if cli.json {
            writeln!(out, "{}", output::render_json(report)?)?;
        } else {
            write!(out, "{}", output::render_text(&report.records))?;
        }
    }
    out.flush()?;

    let metrics = services.cache.metrics_snapshot();
    info!(
        entries = metrics.total_entries,
        hits = metrics.hits,
        misses = metrics.misses,
        hit_rate = format!("{:.2}", metrics.hit_rate()),
        "Result cache at exit"
    );

    Ok(())
}
