use std::process::ExitCode;

use turtle_engine::logging::{init_logging, LoggingConfig};
use turtle_studio::StudioConfig;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match turtle_studio::run(StudioConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
