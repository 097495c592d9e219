use clap::Parser;
use navshell::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;

#[derive(Parser)]
#[command(name = "navshell", about = "Sidebar navigation shell with lazily loaded pages")]
struct Args {
    /// Path to open first (unknown paths redirect to the default route)
    #[arg(short, long)]
    route: Option<String>,

    /// Start with the side panel collapsed
    #[arg(long)]
    collapsed: bool,

    /// Simulated lazy-load latency of the built-in pages, in milliseconds
    #[arg(long)]
    load_delay_ms: Option<u64>,

    /// Log level written to navshell.log (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to navshell.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = args.log_level.parse().unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create("navshell.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config().map_err(|e| {
        log::error!("{}", e);
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;

    let cli = CliOverrides {
        route: args.route,
        collapsed: args.collapsed,
        load_delay_ms: args.load_delay_ms,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Route configuration errors are fatal: validate once, before the terminal is taken over
    let table = config::build_route_table(&resolved).map_err(|e| {
        log::error!("Invalid route configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidData, config::ConfigError::from(e))
    })?;

    log::info!(
        "navshell starting with {} routes, default {}",
        table.entries().len(),
        table.default_entry().path
    );

    navshell::tui::run(resolved, table)
}
