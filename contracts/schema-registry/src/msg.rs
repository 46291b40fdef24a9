use cosmwasm_schema::cw_serde;

pub use registry_shared::schema::{
    BindingInfo, BindingResponse, IssuerBindingsResponse, NextSchemaIdResponse,
    SchemaExecuteMsg as ExecuteMsg, SchemaQueryMsg as QueryMsg, SchemaResponse,
};
pub use registry_shared::{OwnerResponse, StoreConfigResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub registry_logic: String,
    pub certifier: String,
}
