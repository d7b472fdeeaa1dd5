use super::errors::SwapError;
use super::types::{Pool, SearchOptions, Token, TokenAmount, Trade, TradeRoute};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::HashSet;

impl TradeRoute {
    pub fn hops(&self) -> usize {
        self.pools.len()
    }
}

/// Enumerates multi-hop routes from the input token to `token_out`
/// through `pools` and returns the best trades for the fixed input
/// amount, ranked by output. The list is capped at
/// `options.max_results` and no route is longer than
/// `options.max_hops` pools.
///
/// An empty result means no route connects the two tokens; it is not
/// an error.
pub fn best_trade_exact_in(
    pools: &[Pool],
    amount_in: &TokenAmount,
    token_out: &Token,
    options: &SearchOptions,
) -> Result<Vec<Trade>, SwapError> {
    if amount_in.token == *token_out {
        return Err(SwapError::InvalidRouteRequest(
            "source and destination token are identical".to_string(),
        ));
    }
    if amount_in.raw.is_zero() {
        return Err(SwapError::InsufficientInputAmount);
    }
    if options.max_hops == 0 {
        return Ok(Vec::new());
    }

    let mut best: Vec<Trade> = Vec::new();
    let mut visited: HashSet<Token> = HashSet::new();
    visited.insert(amount_in.token.clone());
    let mut used = vec![false; pools.len()];
    let mut route_pools: Vec<Pool> = Vec::new();
    let mut route_tokens: Vec<Token> = vec![amount_in.token.clone()];

    search(
        pools,
        amount_in,
        amount_in,
        token_out,
        options,
        &mut visited,
        &mut used,
        &mut route_pools,
        &mut route_tokens,
        &mut best,
    );

    Ok(best)
}

#[allow(clippy::too_many_arguments)]
fn search(
    pools: &[Pool],
    original_amount_in: &TokenAmount,
    current_amount: &TokenAmount,
    token_out: &Token,
    options: &SearchOptions,
    visited: &mut HashSet<Token>,
    used: &mut [bool],
    route_pools: &mut Vec<Pool>,
    route_tokens: &mut Vec<Token>,
    best: &mut Vec<Trade>,
) {
    for index in 0..pools.len() {
        let pool = &pools[index];
        // A pool used earlier on this path is never reused; a duplicate
        // pool elsewhere in the set is an independent parallel edge.
        if used[index] || pool.is_illiquid() || !pool.involves(&current_amount.token) {
            continue;
        }
        // The visited set forbids cycles through already-seen tokens.
        let next_token = match pool.other_token(&current_amount.token) {
            Some(token) if !visited.contains(token) => token.clone(),
            _ => continue,
        };
        // A failed simulation kills this branch only; siblings continue.
        let next_amount = match pool.amount_out(current_amount, &options.fee) {
            Ok(amount) => amount,
            Err(_) => continue,
        };

        if next_token == *token_out {
            let mut trade_pools = route_pools.clone();
            trade_pools.push(pool.clone());
            let mut trade_tokens = route_tokens.clone();
            trade_tokens.push(next_token);
            insert_ranked(
                Trade {
                    route: TradeRoute {
                        pools: trade_pools,
                        tokens: trade_tokens,
                    },
                    amount_in: original_amount_in.clone(),
                    amount_out: next_amount,
                },
                best,
                options.max_results,
            );
        } else if route_pools.len() + 1 < options.max_hops {
            used[index] = true;
            visited.insert(next_token.clone());
            route_pools.push(pool.clone());
            route_tokens.push(next_token.clone());

            search(
                pools,
                original_amount_in,
                &next_amount,
                token_out,
                options,
                visited,
                used,
                route_pools,
                route_tokens,
                best,
            );

            route_tokens.pop();
            route_pools.pop();
            visited.remove(&next_token);
            used[index] = false;
        }
    }
}

/// Keeps `best` sorted by descending output, capped at `max_results`.
/// On equal output the shorter route ranks first; a still-equal
/// candidate lands after the trades already found.
fn insert_ranked(candidate: Trade, best: &mut Vec<Trade>, max_results: usize) {
    if max_results == 0 {
        return;
    }
    if best.len() >= max_results {
        // Full list: a candidate whose output does not strictly beat the
        // current worst entry is dropped outright. This is the hard
        // budget that keeps the search bounded on wide pool sets.
        let worst = &best[best.len() - 1];
        if candidate.amount_out.raw <= worst.amount_out.raw {
            return;
        }
    }
    let position = best
        .iter()
        .position(|existing| outranks(&candidate, existing))
        .unwrap_or(best.len());
    best.insert(position, candidate);
    best.truncate(max_results);
}

fn outranks(candidate: &Trade, existing: &Trade) -> bool {
    match candidate.amount_out.raw.cmp(&existing.amount_out.raw) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate.route.hops() < existing.route.hops(),
    }
}
