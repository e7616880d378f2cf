use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined.
    /// Check the `.env.example` file for required configuration variables.
    #[error("OAuth not configured. Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),

    /// A built-in Discord endpoint URL failed to parse.
    ///
    /// These are compile-time constants, so this only fires if one of them
    /// is edited into an invalid URL.
    #[error("Invalid Discord endpoint URL: {0}")]
    InvalidEndpoint(&'static str),
}
