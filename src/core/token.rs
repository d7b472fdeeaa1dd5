use super::types::Token;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl Token {
    pub fn new(chain_id: u64, address: &str, decimals: u32) -> Self {
        Token {
            chain_id,
            address: address.to_ascii_lowercase(),
            decimals,
        }
    }
}

// Two tokens are the same iff chain and address match. Addresses are
// compared case-insensitively so unnormalized inputs still key correctly.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        for byte in self.address.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

// Address ordering decides the canonical reserve layout of a pool.
impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.address.bytes().map(|b| b.to_ascii_lowercase());
        let rhs = other.address.bytes().map(|b| b.to_ascii_lowercase());
        lhs.cmp(rhs).then_with(|| self.chain_id.cmp(&other.chain_id))
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
