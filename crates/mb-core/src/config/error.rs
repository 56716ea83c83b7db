use thiserror::Error;

/// Failure modes of a configuration load attempt.
///
/// Every variant is recoverable by retry; a failed load never terminates the
/// process.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `config` resource is absent from the bundle.
    #[error("configuration resource not found in the bundle")]
    ResourceNotFound,

    /// The resource exists but its bytes could not be read.
    #[error("configuration resource could not be read")]
    Read(#[source] std::io::Error),

    /// The bytes were read but do not decode into a screen configuration.
    #[error("configuration resource could not be decoded")]
    Decode(#[source] serde_json::Error),
}
