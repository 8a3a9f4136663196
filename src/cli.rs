use clap::Parser;
use std::path::PathBuf;

// Build version with backend info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Decode: image-rs (GIF)\n",
    "Encode: image-rs (PNG)\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// GIF animation to PNG spritesheet batch converter
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Player asset directory holding the run/slide/idle subfolders
    /// (default: assets/characters/player)
    #[arg(value_name = "ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Enable debug logging to file (default: gif2sheet.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Deprecated: fixed frame size hint (geometry now comes from the decoded frames, ignored)
    #[arg(long = "frame-size", value_name = "PX", hide = true)]
    pub frame_size: Option<u32>,
}
