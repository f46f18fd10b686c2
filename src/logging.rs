use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

/// Installs the global logger, writing to stderr so stdout only carries results.
pub fn init_logger(level: LevelFilter, timestamp: bool) -> Result<(), log::SetLoggerError> {
    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        })
        .try_init()
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
