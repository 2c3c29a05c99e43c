use thiserror::Error;

/// Errors reported by the configuration form before a draft is accepted.
///
/// These are user-correctable and are surfaced inline on the form field;
/// the active configuration is never touched while one is pending.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please enter a URL")]
    MissingUrl,
    #[error("Please enter a valid URL")]
    InvalidUrl,
}
