use thiserror::Error;

/// Errors that can occur while deriving or issuing invoice numbers.
///
/// Formatting itself never fails: blank and digit-less templates have
/// defined fallbacks. Errors only arise from the counter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumberingError {
    /// The backend reported a negative invoice count.
    #[error("invoice count must not be negative, got {0}")]
    NegativeCount(i64),

    /// Advancing the counter would exceed the representable range.
    #[error("invoice count {0} cannot be advanced without overflow")]
    CountOverflow(u64),
}
