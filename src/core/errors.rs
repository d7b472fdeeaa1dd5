use thiserror::Error;

/// Failures of amount parsing, pool simulation and route search.
/// Inside the route search these abort a single branch, never the
/// whole comparison.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("invalid raw amount: {0}")]
    InvalidAmount(String),

    #[error("amount subtraction would underflow")]
    Underflow,

    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    #[error("insufficient input amount")]
    InsufficientInputAmount,

    #[error("invalid route request: {0}")]
    InvalidRouteRequest(String),
}
