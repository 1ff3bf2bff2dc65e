use std::io::Write;

use env_logger::{fmt::Color, Builder, Env};
use log::{Level, LevelFilter, SetLoggerError};

/// Environment variable allowing users to override the requested verbosity.
const LOG_ENV_VAR: &str = "MENDEL_LOG";

pub struct Logger;

impl Logger {
    /// Build and register the global logger.
    ///
    /// Records are printed to stderr as `[<timestamp> <level> <target>] <message>`,
    /// with error records additionally carrying the file and line that emitted them.
    /// The `MENDEL_LOG` environment variable takes precedence over `verbosity`.
    ///
    /// # Errors
    /// If a global logger was already registered.
    pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
        let env = Env::default().filter(LOG_ENV_VAR);
        Builder::new()
            .filter_level(Self::level_filter(verbosity))
            .format(|buf, record| {
                let traceback = match record.level() {
                    Level::Error => format!(
                        "(@ {}:{}) ",
                        record.file().unwrap_or("unknown"),
                        record.line().unwrap_or(0)
                    ),
                    _ => String::new(),
                };

                let mut level_style = buf.style();
                level_style
                    .set_color(match record.level() {
                        Level::Error => Color::Red,
                        Level::Warn  => Color::Yellow,
                        Level::Info  => Color::Green,
                        Level::Debug => Color::Blue,
                        Level::Trace => Color::Cyan,
                    })
                    .set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    record.args()
                )
            })
            .parse_env(env)
            .try_init()
    }

    /// Reset the maximum log level after initialization.
    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::level_filter(verbosity));
    }

    fn level_filter(verbosity: u8) -> LevelFilter {
        match verbosity {
            0           => LevelFilter::Error,
            1           => LevelFilter::Warn,
            2           => LevelFilter::Info,
            3           => LevelFilter::Debug,
            4..=u8::MAX => LevelFilter::Trace,
        }
    }
}
