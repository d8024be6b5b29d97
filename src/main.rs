use campus_chat::Route;
use campus_chat::core::config::{self, ChatConfig, CliOverrides};
use campus_chat::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "campus-chat", about = "Terminal client for the student information chatbot")]
struct Args {
    /// Base URL of the query service (requests go to <URL>/query)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Screen to open first: "/" (landing) or "/chatbot"
    #[arg(short, long)]
    route: Option<Route>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("campus-chat.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        eprintln!("warning: {e}; using defaults");
        ChatConfig::default()
    });

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            route: args.route,
        },
    );

    log::info!(
        "campus-chat starting: base_url={}, start_route={}",
        resolved.base_url,
        resolved.start_route
    );

    tui::run(resolved)
}
