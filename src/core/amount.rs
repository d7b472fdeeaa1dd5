use super::errors::SwapError;
use super::types::{Token, TokenAmount};
use num_bigint::BigUint;
use num_traits::{CheckedSub, Zero};
use std::cmp::Ordering;
use std::fmt;

impl TokenAmount {
    /// Parses a raw magnitude given as a decimal integer string. The
    /// string must be nothing but digits, so signs, whitespace and
    /// fractional parts are all rejected.
    pub fn from_raw(token: Token, raw: &str) -> Result<Self, SwapError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SwapError::InvalidAmount(raw.to_string()));
        }
        let raw = BigUint::parse_bytes(raw.as_bytes(), 10)
            .ok_or_else(|| SwapError::InvalidAmount(raw.to_string()))?;
        Ok(TokenAmount { token, raw })
    }

    pub fn zero(token: Token) -> Self {
        TokenAmount {
            token,
            raw: BigUint::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Minimal decimal rendering of the raw magnitude scaled down by the
    /// token's decimals. Integer division plus remainder, never floating
    /// point, so no precision is gained or lost.
    pub fn to_exact(&self) -> String {
        let scale = BigUint::from(10u32).pow(self.token.decimals);
        let whole = &self.raw / &scale;
        let frac = &self.raw % &scale;
        if frac.is_zero() {
            return whole.to_string();
        }
        let digits = format!(
            "{:0>width$}",
            frac.to_string(),
            width = self.token.decimals as usize
        );
        format!("{}.{}", whole, digits.trim_end_matches('0'))
    }

    pub fn checked_add(&self, other: &TokenAmount) -> Result<TokenAmount, SwapError> {
        self.require_same_token(other)?;
        Ok(TokenAmount {
            token: self.token.clone(),
            raw: &self.raw + &other.raw,
        })
    }

    pub fn checked_sub(&self, other: &TokenAmount) -> Result<TokenAmount, SwapError> {
        self.require_same_token(other)?;
        let raw = self.raw.checked_sub(&other.raw).ok_or(SwapError::Underflow)?;
        Ok(TokenAmount {
            token: self.token.clone(),
            raw,
        })
    }

    pub fn mul_scalar(&self, factor: u64) -> TokenAmount {
        TokenAmount {
            token: self.token.clone(),
            raw: &self.raw * factor,
        }
    }

    fn require_same_token(&self, other: &TokenAmount) -> Result<(), SwapError> {
        if self.token != other.token {
            return Err(SwapError::InvalidAmount(format!(
                "token mismatch: {} vs {}",
                self.token.address, other.token.address
            )));
        }
        Ok(())
    }
}

// Amounts of different tokens are not comparable.
impl PartialOrd for TokenAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.token == other.token).then(|| self.raw.cmp(&other.raw))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_exact())
    }
}
