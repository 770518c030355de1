use thiserror::Error;

/// Fatal configuration errors. Any of these aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("dice specification is empty")]
    EmptySpec,
    #[error("die group {index} has a count of zero")]
    ZeroCount { index: usize },
    #[error("die group {index} has zero sides")]
    ZeroSides { index: usize },
    #[error("outcome space overflows u64 ({notation})")]
    OutcomeOverflow { notation: String },
    #[error("invalid die notation '{0}', expected NdM (e.g. 3d6)")]
    InvalidNotation(String),
    #[error("missing value for {flag}")]
    MissingFlagValue { flag: String },
}
