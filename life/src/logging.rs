use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Sends log output to stderr so it never mixes with the rendered boards.
/// `RUST_LOG` overrides the level picked from `verbosity`.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("! Couldn't set up logging: {e}");
    }
}
