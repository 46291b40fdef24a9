use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Only sender allowed to mutate schemas and bindings
    pub registry_logic: Addr,
    /// May re-point the store at a new registry logic contract
    pub certifier: Addr,
}

#[cw_serde]
pub struct Schema {
    pub schema_data: String,
    /// Creator, fixed at add time
    pub schema_owner: Addr,
    /// Status code, see `registry_shared::SchemaStatus`
    pub status: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Id assigned to the next schema
pub const NEXT_SCHEMA_ID: Item<u64> = Item::new("next_schema_id");

/// Schemas indexed by ID
pub const SCHEMAS: Map<u64, Schema> = Map::new("schemas");

/// Binding status codes indexed by (issuer DID, schema ID)
pub const BINDINGS: Map<(&str, u64), u64> = Map::new("bindings");
