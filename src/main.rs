use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use nextpay_docs::content;
use nextpay_docs::core::config;
use nextpay_docs::core::registry::PageRegistry;
use nextpay_docs::core::state::App;
use nextpay_docs::tui;

#[derive(Parser)]
#[command(name = "nextpay-docs", about = "Terminal documentation browser for the nextPay platform")]
struct Args {
    /// Page to open at startup (e.g. "FAQs"); unknown names fall back to Home
    #[arg(short, long)]
    page: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("nextpay-docs: {e}; continuing with defaults");
        config::DocsConfig::default()
    });
    let resolved = config::resolve(&file_config, args.page.as_deref(), args.log_file.as_deref());

    // File logger - the terminal itself belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("nextpay-docs starting up");

    // A duplicate page name means the registry cannot uphold its lookup
    // contract; abort bring-up instead of guessing.
    let registry = match PageRegistry::register(content::pages()) {
        Ok(registry) => registry,
        Err(e) => {
            error!("page registration failed: {e}");
            eprintln!("nextpay-docs: page registration failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(registry, resolved.start_page.as_deref());

    match tui::run(app, &resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("terminal error: {e}");
            eprintln!("nextpay-docs: {e}");
            ExitCode::FAILURE
        }
    }
}
