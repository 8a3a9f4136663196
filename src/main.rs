use clap::Parser;
use gif2sheet::batch::{self, Layout};
use gif2sheet::cli::Args;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        // File logging with specified verbosity level
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("gif2sheet.log"));

        let file = std::fs::File::create(&log_path).expect("Failed to create log file");

        env_logger::Builder::new()
            .filter_level(log_level)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .format_timestamp_millis()
            .init();
    }

    debug!("Command-line args: {:?}", args);

    if let Some(px) = args.frame_size {
        debug!("--frame-size {} is ignored, frame geometry comes from the decode", px);
    }

    let layout = args
        .assets_dir
        .clone()
        .map(Layout::new)
        .unwrap_or_default();
    info!("Player asset dir: {}", layout.player_dir.display());

    println!("Converting player GIF animations to PNG spritesheets...");
    let summary = batch::convert_all(&layout);
    println!(
        "Done: {} converted, {} failed, {} skipped",
        summary.converted, summary.failed, summary.skipped
    );

    // Per-file failures never abort the batch; only a run where every
    // attempted conversion failed exits non-zero.
    if summary.all_failed() {
        warn!("All {} conversion(s) failed", summary.failed);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
