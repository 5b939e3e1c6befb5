use clap::{Parser, ValueEnum};
use mediadeck_core::diagnostics::BuildMode;
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum BuildModeArg {
    /// Follow the config file (default: debug builds are development builds).
    Auto,
    Development,
    Production,
}

#[derive(Parser)]
#[command(name = "mediadeck", about = "Terminal content deck with a diagnostics overlay")]
struct Cli {
    /// JSON feed to display (array, or object with `items`/`legacy`).
    #[arg(long)]
    feed: Option<PathBuf>,

    /// Build mode the diagnostics overlay is gated on.
    #[arg(long, value_enum, default_value = "auto")]
    build_mode: BuildModeArg,

    /// Write debug logs to /tmp/mediadeck-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/mediadeck-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("mediadeck debug log started, tail -f /tmp/mediadeck-debug.log");
    }

    let build_mode = match cli.build_mode {
        BuildModeArg::Auto => None,
        BuildModeArg::Development => Some(BuildMode::Development),
        BuildModeArg::Production => Some(BuildMode::Production),
    };

    mediadeck_tui::run(mediadeck_tui::RunOptions {
        feed: cli.feed,
        build_mode,
    })
}
