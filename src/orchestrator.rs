use crate::chains;
use crate::core::errors::SwapError;
use crate::core::trade::best_trade_exact_in;
use crate::core::types::{Pool, SearchOptions, SwapFee, Token, TokenAmount};
use crate::pair_data::{self, ExchangePairs, PairEntry};
use crate::types::{CompareConfig, ExchangeQuote, RateRequest, RateResponse};
use anyhow::{anyhow, ensure, Result};

pub fn validate_request(request: &RateRequest) -> Result<()> {
    if request.buyTokenAddress.trim().is_empty() || request.sellTokenAddress.trim().is_empty() {
        return Err(anyhow!("Buy and Sell Token addresses cannot be empty"));
    }
    if request
        .sellTokenAddress
        .eq_ignore_ascii_case(&request.buyTokenAddress)
    {
        return Err(anyhow!("Buy and Sell Token addresses must differ"));
    }
    if chains::chain_name(request.chainId).is_none() {
        return Err(anyhow!("Unsupported chain id {}", request.chainId));
    }
    if request.sellAmount.trim().is_empty() {
        return Err(anyhow!("Sell Amount is mandatory"));
    }
    Ok(())
}

pub fn search_options(config: &CompareConfig) -> Result<SearchOptions> {
    ensure!(config.fee_denominator > 0, "fee denominator must be positive");
    ensure!(
        config.fee_numerator < config.fee_denominator,
        "fee must be a proper fraction"
    );
    ensure!(config.max_hops >= 1, "max hops must be at least 1");
    Ok(SearchOptions {
        fee: SwapFee {
            numerator: config.fee_numerator,
            denominator: config.fee_denominator,
        },
        max_hops: config.max_hops,
        max_results: config.max_results,
    })
}

/// Fetches pair snapshots for the requested token pair and compares the
/// best achievable output across exchanges.
pub async fn get_rate_comparison(
    config: &CompareConfig,
    request: RateRequest,
) -> Result<RateResponse> {
    validate_request(&request)?;
    let options = search_options(config)?;
    let chain = chains::chain_name(request.chainId)
        .ok_or_else(|| anyhow!("Unsupported chain id {}", request.chainId))?;

    let snapshots = pair_data::get_exchange_pairs(
        &config.pairs_endpoint,
        &request.sellTokenAddress,
        &request.buyTokenAddress,
        chain,
    )
    .await?;

    let amount_in = TokenAmount::from_raw(
        Token::new(
            request.chainId,
            &request.sellTokenAddress,
            request.sellTokenDecimals,
        ),
        &request.sellAmount,
    )
    .map_err(|e| anyhow!("Invalid sell amount: {}", e))?;
    let token_out = Token::new(
        request.chainId,
        &request.buyTokenAddress,
        request.buyTokenDecimals,
    );

    let quotes = compare_exchanges(request.chainId, &amount_in, &token_out, &options, &snapshots);

    Ok(RateResponse {
        sellTokenAddress: request.sellTokenAddress,
        buyTokenAddress: request.buyTokenAddress,
        sellAmount: request.sellAmount,
        chainId: request.chainId,
        quotes,
    })
}

/// Runs the route search once per exchange snapshot. An exchange with no
/// viable route contributes nothing; a broken snapshot is skipped so the
/// remaining exchanges still get compared.
pub fn compare_exchanges(
    chain_id: u64,
    amount_in: &TokenAmount,
    token_out: &Token,
    options: &SearchOptions,
    snapshots: &[ExchangePairs],
) -> Vec<ExchangeQuote> {
    let mut quotes = Vec::new();
    for exchange in snapshots {
        match best_exchange_quote(chain_id, amount_in, token_out, options, exchange) {
            Ok(Some(quote)) => quotes.push(quote),
            Ok(None) => {
                tracing::debug!(exchange = %exchange.dexName, "no route between tokens");
            }
            Err(error) => {
                tracing::warn!(exchange = %exchange.dexName, %error, "skipping exchange");
            }
        }
    }
    quotes
}

fn best_exchange_quote(
    chain_id: u64,
    amount_in: &TokenAmount,
    token_out: &Token,
    options: &SearchOptions,
    exchange: &ExchangePairs,
) -> Result<Option<ExchangeQuote>, SwapError> {
    let pools = build_pools(chain_id, &exchange.pairs)?;
    let trades = best_trade_exact_in(&pools, amount_in, token_out, options)?;

    Ok(trades.first().map(|trade| ExchangeQuote {
        dexId: exchange.dexName.clone(),
        dexUrl: exchange.dexUrl.clone(),
        outputAmount: trade.amount_out.to_exact(),
        decimal: trade.amount_out.token.decimals,
    }))
}

/// Parses one exchange snapshot into validated pools. Validation happens
/// here, once, at the boundary; the search only ever sees usable edges.
/// Pools with an empty reserve are dropped as illiquid.
fn build_pools(chain_id: u64, entries: &[PairEntry]) -> Result<Vec<Pool>, SwapError> {
    let mut pools = Vec::with_capacity(entries.len());
    for entry in entries {
        let token0 = Token::new(chain_id, &entry.token0, entry.decimal0);
        let token1 = Token::new(chain_id, &entry.token1, entry.decimal1);
        let reserve0 = TokenAmount::from_raw(token0, &entry.reserve0)?;
        let reserve1 = TokenAmount::from_raw(token1, &entry.reserve1)?;
        let pool = Pool::new(reserve0, reserve1)?;
        if pool.is_illiquid() {
            continue;
        }
        pools.push(pool);
    }
    Ok(pools)
}
