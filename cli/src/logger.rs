use colored::*;
use forkwm_core::paths;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

// Colors that stay readable when dimmed
const TARGET_COLORS: &[Color] = &[
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

pub struct ForkWMLogger {
    level: LevelFilter,
    log_file: Mutex<Option<File>>,
    target_colors: Mutex<HashMap<String, Color>>,
}

impl ForkWMLogger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let level = if quiet {
            LevelFilter::Info
        } else if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Debug
        };

        Self {
            level,
            log_file: Mutex::new(Self::open_log_file()),
            target_colors: Mutex::new(HashMap::new()),
        }
    }

    fn open_log_file() -> Option<File> {
        let path = paths::log_file_path()?;
        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
        {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to open log file at {}: {e}", path.display());
                None
            }
        }
    }

    fn color_for_target(&self, target: &str) -> Color {
        let Ok(mut colors) = self.target_colors.lock() else {
            return Color::White;
        };
        let next = TARGET_COLORS[colors.len() % TARGET_COLORS.len()];
        *colors.entry(target.to_string()).or_insert(next)
    }

    fn level_tag(level: Level) -> &'static str {
        match level {
            Level::Error => "[E]",
            Level::Warn => "[W]",
            Level::Info => "[I]",
            Level::Debug => "[D]",
            Level::Trace => "[T]",
        }
    }

    fn short_target<'a>(record: &'a Record) -> &'a str {
        record.target().rsplit("::").next().unwrap_or(record.target())
    }

    fn format_log(&self, record: &Record) -> String {
        let tag = Self::level_tag(record.level());
        let target = Self::short_target(record);

        match record.level() {
            Level::Error => format!("{tag} [{target}] {}", record.args())
                .red()
                .bold()
                .to_string(),
            Level::Warn => format!("{tag} [{target}] {}", record.args())
                .yellow()
                .bold()
                .to_string(),
            level => {
                let tag = match level {
                    Level::Info => tag.green().bold(),
                    Level::Debug => tag.blue().bold(),
                    _ => tag.white().bold(),
                };
                let target = target.color(self.color_for_target(target)).dimmed();
                format!("{tag} [{target}] {}", record.args())
            }
        }
    }

    fn format_log_plain(record: &Record) -> String {
        format!(
            "{} [{}] {}",
            Self::level_tag(record.level()),
            Self::short_target(record),
            record.args()
        )
    }
}

impl Log for ForkWMLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("{}", self.format_log(record));

        if let Ok(mut file) = self.log_file.lock() {
            if let Some(file) = file.as_mut() {
                let _ = writeln!(file, "{}", Self::format_log_plain(record));
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.log_file.lock() {
            if let Some(file) = file.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = ForkWMLogger::new(quiet, verbose);
    let level = logger.level;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
