use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("amount larger than 8 unsigned bytes")]
    AmountTooLarge,

    #[error("{ticker} supports maximum {decimals} decimals but amount is {amount}")]
    PrecisionExceeded {
        ticker: String,
        decimals: u8,
        amount: Decimal,
    },

    #[error("token amount overflow while summing raw quantities")]
    AmountOverflow,

    #[error("insufficient token balance: have {available} raw units, need {required}")]
    InsufficientTokenBalance { required: u64, available: u64 },

    #[error("insufficient satoshi balance: have {available}, need {required} plus fees")]
    InsufficientCurrencyBalance { required: u64, available: i64 },

    #[error("unknown token {0}")]
    UnknownToken(String),

    #[error("invalid token id: {0}")]
    InvalidTokenId(String),

    #[error("signer error: {0}")]
    Signer(String),

    #[error("commit error: {0}")]
    Commit(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by [`SlpNode`](crate::node::SlpNode) dispatched operations.
#[derive(Debug)]
pub enum NodeError {
    /// A build operation failed.
    Build(Error),
    /// A `spawn_blocking` task failed to join.
    Task(String),
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::Build(e) => write!(f, "build error: {e}"),
            NodeError::Task(e) => write!(f, "task join error: {e}"),
        }
    }
}

impl std::error::Error for NodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NodeError::Build(e) => Some(e),
            NodeError::Task(_) => None,
        }
    }
}

impl From<Error> for NodeError {
    fn from(e: Error) -> Self {
        NodeError::Build(e)
    }
}
