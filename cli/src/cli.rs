use clap::Parser;
use forkwm_core::platform::WindowId;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "forkwm",
    version = forkwm_core::version(),
    about = "ForkWM - a binary split tree tiling layout engine, run headless"
)]
pub struct Args {
    /// Specify custom configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Validate configuration and exit without laying out any windows
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Use default configuration and ignore config files
    #[arg(long = "defaults")]
    pub use_defaults: bool,

    /// Only log info and above
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log everything, including trace output
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of windows to map, with ids 1 to N
    #[arg(short = 'n', long, default_value_t = 3)]
    pub windows: WindowId,

    /// Window ids to unmap after mapping
    #[arg(short, long, value_name = "ID")]
    pub unmap: Vec<WindowId>,

    /// Screen width in pixels
    #[arg(long, default_value_t = 1920.0)]
    pub width: f64,

    /// Screen height in pixels
    #[arg(long, default_value_t = 1080.0)]
    pub height: f64,
}

pub fn parse_args() -> Args {
    Args::parse()
}
