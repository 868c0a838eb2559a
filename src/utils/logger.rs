//! Log subscriber for the command line tools
//!
//! The library only talks to the `log` facade. Binaries install a
//! `tracing_subscriber` fmt subscriber on stderr, which also receives `log`
//! records through its log bridge.

use log::LevelFilter;
use tracing_subscriber::filter::LevelFilter as SubscriberLevel;

use crate::error::{LocatorError, Result};

/// Install the stderr subscriber with the given maximum level
///
/// # Errors
/// Fails if a global subscriber or logger was already installed in this process
pub fn init_logger(level: LevelFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(subscriber_level(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LocatorError::LoggerInit(e.to_string()))
}

fn subscriber_level(level: LevelFilter) -> SubscriberLevel {
    match level {
        LevelFilter::Off => SubscriberLevel::OFF,
        LevelFilter::Error => SubscriberLevel::ERROR,
        LevelFilter::Warn => SubscriberLevel::WARN,
        LevelFilter::Info => SubscriberLevel::INFO,
        LevelFilter::Debug => SubscriberLevel::DEBUG,
        LevelFilter::Trace => SubscriberLevel::TRACE,
    }
}
