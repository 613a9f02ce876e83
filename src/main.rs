use clap::Parser;
use mediq::core::config;
use mediq::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mediq", about = "Terminal client for a medical question-answering service")]
struct Args {
    /// Base URL of the answering service (overrides config file and env)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mediq.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("mediq.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config file, using defaults: {e}");
        config::MediqConfig::default()
    });
    let resolved = config::resolve(&file_config, args.api_url.as_deref());

    log::info!("MedIQ starting up against {}", resolved.api_base_url);

    tui::run(resolved)
}
