use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    /// The session secret is too short to derive a cookie signing key.
    #[error("SESSION_SECRET must be at least 64 bytes of random data")]
    WeakSessionSecret,

    /// A configured URL failed to parse.
    #[error("Invalid URL in configuration value {name}: {reason}")]
    InvalidUrl { name: String, reason: String },
}
