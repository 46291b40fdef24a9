use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub certifier: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register or replace a store address in the directory (certifier only)
    UpdateContractAddress {
        contract_name: String,
        address: String,
    },

    /// Create a schema owned by the sender
    AddSchema { schema_data: String },
    SetSchemaActive { schema_id: u64 },
    SetSchemaDeprecated { schema_id: u64 },
    SetSchemaStatus { schema_id: u64, status: u64 },

    /// Create an issuer owned by the sender
    AddIssuer {
        issuer_did: String,
        issuer_data: String,
    },
    SetIssuerData {
        issuer_did: String,
        issuer_data: String,
    },
    SetIssuerActive { issuer_did: String },
    SetIssuerDeprecated { issuer_did: String },
    SetIssuerStatus { issuer_did: String, status: u64 },
    SetIssuerOwner {
        issuer_did: String,
        new_owner: String,
    },

    /// Authorize an issuer to use a schema
    BindIssuerSchema { issuer_did: String, schema_id: u64 },
    SetBindingActive { issuer_did: String, schema_id: u64 },
    SetBindingDeprecated { issuer_did: String, schema_id: u64 },
    SetBindingStatus {
        issuer_did: String,
        schema_id: u64,
        status: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(SchemaView)]
    GetSchema { schema_id: u64 },

    #[returns(IssuerView)]
    GetIssuer { issuer_did: String },

    #[returns(BindingView)]
    VerifyBinding { issuer_did: String, schema_id: u64 },

    #[returns(ContractAddressResponse)]
    ContractAddress { contract_name: String },

    #[returns(ContractsResponse)]
    Contracts {},

    #[returns(StatusCodesResponse)]
    StatusCodes {},

    #[returns(ConfigResponse)]
    Config {},
}

// Response types

#[cw_serde]
pub struct SchemaView {
    pub schema_id: u64,
    pub schema_data: String,
    pub schema_owner: Addr,
    /// Status label, e.g. "active"
    pub status: String,
}

#[cw_serde]
pub struct IssuerView {
    pub issuer_did: String,
    pub issuer_data: String,
    pub issuer_owner: Addr,
    /// Status label, e.g. "in_conflict"
    pub status: String,
}

#[cw_serde]
pub struct BindingView {
    pub binding_exists: bool,
    /// Raw status code, 0 when no binding was recorded
    pub status: u64,
    pub status_label: Option<String>,
}

#[cw_serde]
pub struct ContractAddressResponse {
    pub contract_name: String,
    pub address: Addr,
}

#[cw_serde]
pub struct ContractsResponse {
    pub contracts: Vec<ContractAddressResponse>,
}

#[cw_serde]
pub struct StatusCode {
    pub code: u64,
    pub label: String,
}

#[cw_serde]
pub struct StatusCodesResponse {
    pub issuer_statuses: Vec<StatusCode>,
    pub schema_statuses: Vec<StatusCode>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub certifier: Addr,
}
