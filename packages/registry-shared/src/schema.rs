//! Message interface of the schema store contract, including the
//! issuer-schema binding ledger.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::{OwnerResponse, StoreConfigResponse};

#[cw_serde]
pub enum SchemaExecuteMsg {
    /// Register a schema under the next sequential id (registry logic only)
    Add {
        schema_data: String,
        schema_owner: String,
        status: u64,
    },
    /// Set the schema status code (registry logic only)
    ChangeStatus { schema_id: u64, status: u64 },
    /// Record or overwrite an issuer-schema binding (registry logic only)
    Bind {
        issuer_did: String,
        schema_id: u64,
        status: u64,
    },
    /// Set the status of an existing binding (registry logic only)
    ChangeBindingStatus {
        issuer_did: String,
        schema_id: u64,
        status: u64,
    },
    /// Point the store at a new registry logic contract (certifier only)
    ChangeLogicContractAddress { new_logic_contract_address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum SchemaQueryMsg {
    #[returns(SchemaResponse)]
    Get { schema_id: u64 },

    #[returns(OwnerResponse)]
    GetOwner { schema_id: u64 },

    /// Never fails; reports `binding_exists: false, status: 0` for unknown pairs
    #[returns(BindingResponse)]
    VerifyBinding { issuer_did: String, schema_id: u64 },

    /// Id the next `Add` will assign
    #[returns(NextSchemaIdResponse)]
    NextSchemaId {},

    /// Schemas bound to an issuer, ordered by schema id
    #[returns(IssuerBindingsResponse)]
    IssuerBindings {
        issuer_did: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(StoreConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct SchemaResponse {
    pub schema_id: u64,
    pub schema_data: String,
    pub schema_owner: Addr,
    pub status: u64,
}

#[cw_serde]
pub struct BindingResponse {
    pub binding_exists: bool,
    pub status: u64,
}

#[cw_serde]
pub struct NextSchemaIdResponse {
    pub next_schema_id: u64,
}

#[cw_serde]
pub struct BindingInfo {
    pub schema_id: u64,
    pub status: u64,
}

#[cw_serde]
pub struct IssuerBindingsResponse {
    pub issuer_did: String,
    pub bindings: Vec<BindingInfo>,
}
