use super::errors::SwapError;
use super::types::{Pool, SwapFee, Token, TokenAmount};
use num_traits::Zero;

impl Pool {
    /// Builds a pool from two reserves, storing them in canonical token
    /// order so the same two tokens always yield the same layout.
    pub fn new(a: TokenAmount, b: TokenAmount) -> Result<Self, SwapError> {
        if a.token == b.token {
            return Err(SwapError::InvalidRouteRequest(
                "pool requires two distinct tokens".to_string(),
            ));
        }
        if a.token < b.token {
            Ok(Pool {
                reserve0: a,
                reserve1: b,
            })
        } else {
            Ok(Pool {
                reserve0: b,
                reserve1: a,
            })
        }
    }

    pub fn token0(&self) -> &Token {
        &self.reserve0.token
    }

    pub fn token1(&self) -> &Token {
        &self.reserve1.token
    }

    pub fn involves(&self, token: &Token) -> bool {
        self.token0() == token || self.token1() == token
    }

    pub fn other_token(&self, token: &Token) -> Option<&Token> {
        if self.token0() == token {
            Some(self.token1())
        } else if self.token1() == token {
            Some(self.token0())
        } else {
            None
        }
    }

    /// A pool with an empty side cannot price a swap and is excluded
    /// from the route graph.
    pub fn is_illiquid(&self) -> bool {
        self.reserve0.raw.is_zero() || self.reserve1.raw.is_zero()
    }

    /// Constant-product output for a hypothetical input, fee deducted
    /// from the input before the invariant is applied:
    ///
    ///   input_after_fee = amount_in * (fee_den - fee_num)
    ///   numerator       = input_after_fee * reserve_out
    ///   denominator     = reserve_in * fee_den + input_after_fee
    ///   amount_out      = floor(numerator / denominator)
    ///
    /// All intermediate products are BigUint, so nothing can overflow.
    pub fn amount_out(
        &self,
        amount_in: &TokenAmount,
        fee: &SwapFee,
    ) -> Result<TokenAmount, SwapError> {
        if amount_in.raw.is_zero() {
            return Err(SwapError::InsufficientInputAmount);
        }
        let (reserve_in, reserve_out) = if self.token0() == &amount_in.token {
            (&self.reserve0, &self.reserve1)
        } else if self.token1() == &amount_in.token {
            (&self.reserve1, &self.reserve0)
        } else {
            return Err(SwapError::InvalidRouteRequest(
                "input token not in pool".to_string(),
            ));
        };
        if reserve_in.raw.is_zero() || reserve_out.raw.is_zero() {
            return Err(SwapError::InsufficientLiquidity);
        }

        let amount_in_with_fee = &amount_in.raw * (fee.denominator - fee.numerator);
        let numerator = &amount_in_with_fee * &reserve_out.raw;
        let denominator = &reserve_in.raw * fee.denominator + &amount_in_with_fee;
        let out = numerator / denominator;

        // The pool can never pay out its full reserve.
        if out >= reserve_out.raw {
            return Err(SwapError::InsufficientLiquidity);
        }

        Ok(TokenAmount {
            token: reserve_out.token.clone(),
            raw: out,
        })
    }
}
