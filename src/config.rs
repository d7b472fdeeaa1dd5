use crate::types::CompareConfig;
use confy;
use std::error::Error;
use std::path::PathBuf;

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            pairs_endpoint: "https://devapi.arken.finance/rate-compare/get-pairs".to_string(),
            fee_numerator: 1,
            fee_denominator: 1000,
            max_hops: 3,
            max_results: 3,
        }
    }
}

impl CompareConfig {
    // Helper method to load from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self, Box<dyn Error>> {
        let config: Self = confy::load_path(path)?;
        Ok(config)
    }
}
