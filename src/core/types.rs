use num_bigint::BigUint;

/// Token identity: chain id plus contract address. Decimals are carried
/// for rendering but are not part of identity.
#[derive(Clone, Debug)]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub decimals: u32,
}

/// A token quantity in the token's smallest unit, i.e. already scaled by
/// 10^decimals.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenAmount {
    pub token: Token,
    pub raw: BigUint,
}

/// Constant-product pool. Reserves are kept in canonical token order
/// (address-sorted); swaps may flow in either direction.
#[derive(Clone, Debug)]
pub struct Pool {
    pub reserve0: TokenAmount,
    pub reserve1: TokenAmount,
}

/// An ordered, acyclic chain of pools. tokens has one more entry than
/// pools, consecutive pools sharing the hop pivot.
#[derive(Clone, Debug)]
pub struct TradeRoute {
    pub pools: Vec<Pool>,
    pub tokens: Vec<Token>,
}

#[derive(Clone, Debug)]
pub struct Trade {
    pub route: TradeRoute,
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
}

/// Per-swap fee as a fraction, e.g. 1/1000
#[derive(Clone, Debug)]
pub struct SwapFee {
    pub numerator: u64,
    pub denominator: u64,
}

#[derive(Clone, Debug)]
pub struct SearchOptions {
    pub fee: SwapFee,
    pub max_hops: usize,
    pub max_results: usize,
}
