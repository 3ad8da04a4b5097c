use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const PATTERN: &str = "{d(%H:%M:%S)} [{l}] {t} - {m}{n}";

/// Map the number of `-v` flags to a level filter
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn config(level: LevelFilter) -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
}

/// Install the stderr logger. Failures are reported and otherwise ignored.
pub fn init(verbosity: u8) {
    let config = match config(level_for(verbosity)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to build logger config: {e}");
            return;
        }
    };

    if let Err(e) = log4rs::init_config(config) {
        eprintln!("failed to initialize logger: {e}");
    }
}
