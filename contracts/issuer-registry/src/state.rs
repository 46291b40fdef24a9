use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Only sender allowed to mutate issuers
    pub registry_logic: Addr,
    /// May re-point the store at a new registry logic contract
    pub certifier: Addr,
}

#[cw_serde]
pub struct Issuer {
    /// Opaque issuer data
    pub issuer_data: String,
    /// Issuer owner
    pub issuer_owner: Addr,
    /// Status code, see `registry_shared::IssuerStatus`
    pub status: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Issuers indexed by DID
pub const ISSUERS: Map<&str, Issuer> = Map::new("issuers");
