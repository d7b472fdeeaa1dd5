//! Chain identifier naming. The core only ever sees the numeric id;
//! the pair-data service is addressed by the lowercase chain name.

const CHAINS: [(u64, &str); 6] = [
    (1, "ethereum"),
    (56, "bsc"),
    (137, "polygon"),
    (42161, "arbitrum"),
    (43114, "avalanche"),
    (1313161554, "aurora"),
];

pub fn chain_name(chain_id: u64) -> Option<&'static str> {
    CHAINS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| *name)
}

pub fn chain_id(name: &str) -> Option<u64> {
    CHAINS.iter().find(|(_, n)| *n == name).map(|(id, _)| *id)
}
