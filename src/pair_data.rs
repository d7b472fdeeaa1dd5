use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct PairsRequest {
    pub srcToken: String,
    pub dstToken: String,
    pub chain: String,
}

#[derive(Deserialize, Debug)]
pub struct PairsResponse {
    pub pairDexes: Option<Vec<ExchangePairs>>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ExchangePairs {
    pub dexName: String,
    pub dexUrl: String,
    pub pairs: Vec<PairEntry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PairEntry {
    pub token0: String,
    pub token1: String,
    pub reserve0: String,
    pub reserve1: String,
    pub decimal0: u32,
    pub decimal1: u32,
}

/// Fetches per-exchange pair snapshots for the requested token pair.
/// A null pairDexes means the chain has no pools for the pair; that is
/// a valid empty snapshot list, not an error.
pub async fn get_exchange_pairs(
    endpoint: &str,
    src_token: &str,
    dst_token: &str,
    chain: &str,
) -> Result<Vec<ExchangePairs>> {
    let client = reqwest::Client::new();
    let response = client
        .post(endpoint)
        .json(&PairsRequest {
            srcToken: src_token.to_string(),
            dstToken: dst_token.to_string(),
            chain: chain.to_string(),
        })
        .send()
        .await
        .context("pair data request failed")?
        .error_for_status()
        .context("pair data service returned an error status")?
        .json::<PairsResponse>()
        .await
        .context("malformed pair data response")?;

    Ok(response.pairDexes.unwrap_or_default())
}
