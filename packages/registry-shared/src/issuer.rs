//! Message interface of the issuer store contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::{ExistsResponse, OwnerResponse, StatusResponse, StoreConfigResponse};

#[cw_serde]
pub enum IssuerExecuteMsg {
    /// Register a new issuer (registry logic only)
    Add {
        issuer_did: String,
        issuer_data: String,
        issuer_owner: String,
        status: u64,
    },
    /// Replace the issuer data blob (registry logic only)
    ChangeData {
        issuer_did: String,
        issuer_data: String,
    },
    /// Set the issuer status code (registry logic only)
    ChangeStatus { issuer_did: String, status: u64 },
    /// Transfer issuer ownership (registry logic only)
    ChangeOwner {
        issuer_did: String,
        new_owner: String,
    },
    /// Point the store at a new registry logic contract (certifier only)
    ChangeLogicContractAddress { new_logic_contract_address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum IssuerQueryMsg {
    #[returns(IssuerResponse)]
    Get { issuer_did: String },

    #[returns(OwnerResponse)]
    GetOwner { issuer_did: String },

    #[returns(StatusResponse)]
    GetStatus { issuer_did: String },

    #[returns(ExistsResponse)]
    Exists { issuer_did: String },

    #[returns(StoreConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct IssuerResponse {
    pub issuer_did: String,
    pub issuer_data: String,
    pub issuer_owner: Addr,
    pub status: u64,
}
