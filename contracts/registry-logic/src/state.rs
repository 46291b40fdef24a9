use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Overrides ownership checks and manages the contract directory
    pub certifier: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Contract directory: component name to live store address
pub const CONTRACTS: Map<&str, Addr> = Map::new("contracts");

/// Issuer status labels by code, seeded at instantiate
pub const ISSUER_STATUSES: Map<u64, String> = Map::new("issuer_statuses");

/// Schema and binding status labels by code, seeded at instantiate
pub const SCHEMA_STATUSES: Map<u64, String> = Map::new("schema_statuses");
