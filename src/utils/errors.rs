#![forbid(unsafe_code)]

use thiserror::Error;

/// Error enumerates the startup and configuration errors returned by this
/// application.  A roster lookup miss is not represented here: absence is a
/// normal Option::None outcome at the core layer, translated into a 404
/// response at the HTTP boundary.
#[derive(Error, Debug)]
pub enum Errors {
    /// Input parameter logging.
    #[error("roster_server input parameters:\n{}", .0)]
    InputParms(String),

    /// Logger initialization failed for both the file and fallback configurations.
    #[error("Unable to initialize log4rs logging: {}", .0)]
    Log4rsInitialization(String),

    #[error("Reading application configuration file: {}", .0)]
    ReadingConfigFile(String),

    #[error("Unable to parse TOML file: {}", .0)]
    TOMLParseError(String),
}
