use chrono::Local;
use colored::*;
use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

/// Installs the process-wide logger. Call once, before anything logs.
///
/// `level` comes from the configuration; `RUST_LOG`, when set, takes over.
pub fn init(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .parse_env(Env::default())
        .format(|buf, record| {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                colored_level(record.level()),
                record.args()
            )
        })
        .init();
}

fn colored_level(level: Level) -> ColoredString {
    let name = level.to_string();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.white(),
    }
}

/// Flushes buffered log output before the process exits.
pub fn flush() {
    log::logger().flush();
}
