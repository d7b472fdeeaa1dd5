use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, IntoParams, Clone)]
pub struct RateRequest {
    #[schema(example = "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c")]
    pub sellTokenAddress: String,

    #[schema(example = "0xe9e7cea3dedca5984780bafc599bd69add087d56")]
    pub buyTokenAddress: String,

    #[schema(example = "1000000000000000000")]
    pub sellAmount: String,

    #[schema(example = 18)]
    pub sellTokenDecimals: u32,

    #[schema(example = 18)]
    pub buyTokenDecimals: u32,

    #[schema(example = 56)]
    pub chainId: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ExchangeQuote {
    #[schema(example = "pancakeswap")]
    pub dexId: String,

    #[schema(example = "https://pancakeswap.finance")]
    pub dexUrl: String,

    /// Exact decimal output amount, no rounding.
    #[schema(example = "299.670062960710225048")]
    pub outputAmount: String,

    #[schema(example = 18)]
    pub decimal: u32,
}

#[derive(Serialize, ToSchema, Clone)]
pub struct RateResponse {
    pub sellTokenAddress: String,
    pub buyTokenAddress: String,
    pub sellAmount: String,
    pub chainId: u64,
    /// One entry per exchange that had a viable route. Ranking across
    /// exchanges is left to the caller.
    pub quotes: Vec<ExchangeQuote>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CompareConfig {
    pub pairs_endpoint: String,
    pub fee_numerator: u64,
    pub fee_denominator: u64,
    pub max_hops: usize,
    pub max_results: usize,
}
