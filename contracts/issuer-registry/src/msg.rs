use cosmwasm_schema::cw_serde;

pub use registry_shared::issuer::{
    IssuerExecuteMsg as ExecuteMsg, IssuerQueryMsg as QueryMsg, IssuerResponse,
};
pub use registry_shared::{ExistsResponse, OwnerResponse, StatusResponse, StoreConfigResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub registry_logic: String,
    pub certifier: String,
}
