use thiserror::Error;

/// Terminal outcome of argument resolution that is not a usable config.
///
/// `Help` is the successful exit path for `-h`/`--help` (and for an empty
/// argument list, which is treated as a help request); its payload is the
/// full rendered usage text. `Invalid` covers everything a user needs to
/// fix: unknown flags, missing values, and conflicting or missing choices.
#[derive(Debug, Error)]
pub enum UsageError {
    /// Help or version output was requested; payload is the full render.
    #[error("{0}")]
    Help(String),

    /// Malformed, missing, unknown, or mutually conflicting arguments.
    #[error("{0}")]
    Invalid(String),
}

impl UsageError {
    /// Whether this error should exit successfully (help/version request).
    pub fn is_help(&self) -> bool {
        matches!(self, UsageError::Help(_))
    }

    /// The user-facing payload, regardless of variant.
    pub fn message(&self) -> &str {
        match self {
            UsageError::Help(s) | UsageError::Invalid(s) => s,
        }
    }
}
