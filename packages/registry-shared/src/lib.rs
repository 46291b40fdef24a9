// Shared types for the DID issuer / schema registry on CosmWasm

pub mod issuer;
pub mod schema;
pub mod status;
pub mod store;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

pub use status::{IssuerStatus, SchemaStatus, NO_STATUS};
pub use store::{IssuerStore, SchemaStore, StoreContract};

/// Directory name of the live issuer store
pub const ISSUER_REGISTRY_CONTRACT: &str = "issuer_registry_contract";

/// Directory name of the live schema store (schemas and bindings)
pub const SCHEMA_REGISTRY_CONTRACT: &str = "schema_registry_contract";

/// Configuration reported by both store contracts
#[cw_serde]
pub struct StoreConfigResponse {
    pub registry_logic: Addr,
    pub certifier: Addr,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct StatusResponse {
    pub status: u64,
}

#[cw_serde]
pub struct ExistsResponse {
    pub exists: bool,
}
