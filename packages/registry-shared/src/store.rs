//! Typed handles to the store contracts.
//!
//! Registry logic never embeds a store address; it resolves one through its
//! contract directory and wraps it in one of these handles before querying or
//! dispatching a mutating call.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, WasmMsg};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::issuer::{IssuerExecuteMsg, IssuerQueryMsg, IssuerResponse};
use crate::schema::{
    BindingResponse, NextSchemaIdResponse, SchemaExecuteMsg, SchemaQueryMsg, SchemaResponse,
};
use crate::ExistsResponse;

pub trait StoreContract {
    type ExecuteMsg: Serialize;
    type QueryMsg: Serialize;

    fn addr(&self) -> &Addr;

    /// Build the mutating call. The store sees the dispatching contract as sender.
    fn call(&self, msg: &Self::ExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().to_string(),
            msg: to_json_binary(msg)?,
            funds: vec![],
        }
        .into())
    }

    fn query<T: DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        msg: &Self::QueryMsg,
    ) -> StdResult<T> {
        querier.query_wasm_smart(self.addr(), msg)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuerStore(pub Addr);

impl StoreContract for IssuerStore {
    type ExecuteMsg = IssuerExecuteMsg;
    type QueryMsg = IssuerQueryMsg;

    fn addr(&self) -> &Addr {
        &self.0
    }
}

impl IssuerStore {
    pub fn exists(&self, querier: &QuerierWrapper, issuer_did: &str) -> StdResult<bool> {
        let res: ExistsResponse = self.query(
            querier,
            &IssuerQueryMsg::Exists {
                issuer_did: issuer_did.to_string(),
            },
        )?;
        Ok(res.exists)
    }

    pub fn issuer(&self, querier: &QuerierWrapper, issuer_did: &str) -> StdResult<IssuerResponse> {
        self.query(
            querier,
            &IssuerQueryMsg::Get {
                issuer_did: issuer_did.to_string(),
            },
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaStore(pub Addr);

impl StoreContract for SchemaStore {
    type ExecuteMsg = SchemaExecuteMsg;
    type QueryMsg = SchemaQueryMsg;

    fn addr(&self) -> &Addr {
        &self.0
    }
}

impl SchemaStore {
    pub fn next_schema_id(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        let res: NextSchemaIdResponse = self.query(querier, &SchemaQueryMsg::NextSchemaId {})?;
        Ok(res.next_schema_id)
    }

    /// Ids are assigned sequentially from 0 and never removed.
    pub fn exists(&self, querier: &QuerierWrapper, schema_id: u64) -> StdResult<bool> {
        Ok(schema_id < self.next_schema_id(querier)?)
    }

    pub fn schema(&self, querier: &QuerierWrapper, schema_id: u64) -> StdResult<SchemaResponse> {
        self.query(querier, &SchemaQueryMsg::Get { schema_id })
    }

    pub fn verify_binding(
        &self,
        querier: &QuerierWrapper,
        issuer_did: &str,
        schema_id: u64,
    ) -> StdResult<BindingResponse> {
        self.query(
            querier,
            &SchemaQueryMsg::VerifyBinding {
                issuer_did: issuer_did.to_string(),
                schema_id,
            },
        )
    }
}
