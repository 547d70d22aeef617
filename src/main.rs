//! Entry point: localize the page skeleton and print it as JSON.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use page_i18n::app;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "page-i18n", version, about = "Apply translation bundles to the page")]
struct Args {
    /// Directory holding `i18n.json` and the locale bundles.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Language to use instead of detecting one.
    #[arg(long)]
    lang: Option<String>,

    /// Log diagnostic output.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = app::load_settings(&args.root, args.lang, args.debug);
    let debug = settings.as_ref().map_or(args.debug, |s| s.debug);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).init();

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let Ok(document) = app::localize(&args.root, settings, &app::default_detector()).await else {
        return ExitCode::FAILURE;
    };

    let json = match serde_json::to_string_pretty(&document) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize document");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = writeln!(std::io::stdout().lock(), "{json}") {
        tracing::error!(error = %e, "Failed to write output");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
