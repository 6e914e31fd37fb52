use forkwm_core::platform::mock::MockDisplay;
use forkwm_core::platform::Rect;
use forkwm_core::{Config, ForkWMResult, WindowManager};
use log::{error, info, warn};

mod cli;
mod logger;

fn main() -> ForkWMResult<()> {
    let args = cli::parse_args();

    if let Err(e) = logger::init_logger(args.quiet, args.verbose) {
        eprintln!("Failed to initialize logger: {e}");
    }
    info!("Starting ForkWM {}", forkwm_core::version());

    let config = load_config(&args)?;
    if args.dry_run {
        info!("Configuration is valid");
        return Ok(());
    }

    let screen = Rect::new(0.0, 0.0, args.width, args.height);
    let mut display = MockDisplay::new();
    let mut wm = WindowManager::new(config, screen);

    for id in 1..=args.windows {
        wm.map_window(&mut display, id)?;
    }
    for &id in &args.unmap {
        if !wm.unmap_window(&mut display, id)? {
            warn!("Window {id} is not mapped");
        }
    }

    if let Some(root) = wm.current_workspace().root() {
        for node in wm.tree().windows(root) {
            let Some(id) = wm.tree().window_id(node) else {
                continue;
            };
            match display.geometry(id) {
                Some(rect) => println!(
                    "window {id}: {}x{} at ({}, {})",
                    rect.width, rect.height, rect.x, rect.y
                ),
                None => error!("Window {id} was never configured"),
            }
        }
    }
    print!("{}", wm.debug_layout()?);

    info!("ForkWM stopped");
    Ok(())
}

fn load_config(args: &cli::Args) -> ForkWMResult<Config> {
    if args.use_defaults {
        info!("Using default configuration");
        return Ok(Config::default());
    }

    let config = Config::load(args.config_path.as_deref(), !args.dry_run)?;
    if let Some(path) = &config.config_path {
        info!("Loaded config from {}", path.display());
    }
    Ok(config)
}
