use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use registry_shared::NO_STATUS;

use crate::error::ContractError;
use crate::msg::{
    BindingInfo, BindingResponse, ExecuteMsg, InstantiateMsg, IssuerBindingsResponse,
    NextSchemaIdResponse, OwnerResponse, QueryMsg, SchemaResponse, StoreConfigResponse,
};
use crate::state::{Config, Schema, BINDINGS, CONFIG, NEXT_SCHEMA_ID, SCHEMAS};

const CONTRACT_NAME: &str = "crates.io:schema-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        registry_logic: deps.api.addr_validate(&msg.registry_logic)?,
        certifier: deps.api.addr_validate(&msg.certifier)?,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_SCHEMA_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry_logic", config.registry_logic)
        .add_attribute("certifier", config.certifier))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Add {
            schema_data,
            schema_owner,
            status,
        } => execute_add(deps, info, schema_data, schema_owner, status),
        ExecuteMsg::ChangeStatus { schema_id, status } => {
            execute_change_status(deps, info, schema_id, status)
        }
        ExecuteMsg::Bind {
            issuer_did,
            schema_id,
            status,
        } => execute_bind(deps, info, issuer_did, schema_id, status),
        ExecuteMsg::ChangeBindingStatus {
            issuer_did,
            schema_id,
            status,
        } => execute_change_binding_status(deps, info, issuer_did, schema_id, status),
        ExecuteMsg::ChangeLogicContractAddress {
            new_logic_contract_address,
        } => execute_change_logic_contract_address(deps, info, new_logic_contract_address),
    }
}

fn ensure_registry_logic(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.registry_logic {
        return Err(ContractError::Forbidden {});
    }
    Ok(())
}

pub fn execute_add(
    deps: DepsMut,
    info: MessageInfo,
    schema_data: String,
    schema_owner: String,
    status: u64,
) -> Result<Response, ContractError> {
    ensure_registry_logic(deps.as_ref(), &info)?;

    let schema_owner = deps.api.addr_validate(&schema_owner)?;

    let schema_id = NEXT_SCHEMA_ID.load(deps.storage)?;
    NEXT_SCHEMA_ID.save(deps.storage, &(schema_id + 1))?;

    let schema = Schema {
        schema_data,
        schema_owner: schema_owner.clone(),
        status,
    };
    SCHEMAS.save(deps.storage, schema_id, &schema)?;

    Ok(Response::new()
        .add_attribute("method", "add")
        .add_attribute("schema_id", schema_id.to_string())
        .add_attribute("schema_owner", schema_owner)
        .add_attribute("status", status.to_string()))
}

pub fn execute_change_status(
    deps: DepsMut,
    info: MessageInfo,
    schema_id: u64,
    status: u64,
) -> Result<Response, ContractError> {
    ensure_registry_logic(deps.as_ref(), &info)?;

    SCHEMAS.update(deps.storage, schema_id, |maybe_schema| {
        let mut schema = maybe_schema.ok_or_else(|| ContractError::schema_not_found(schema_id))?;
        schema.status = status;
        Ok::<_, ContractError>(schema)
    })?;

    Ok(Response::new()
        .add_attribute("method", "change_status")
        .add_attribute("schema_id", schema_id.to_string())
        .add_attribute("status", status.to_string()))
}

pub fn execute_bind(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    schema_id: u64,
    status: u64,
) -> Result<Response, ContractError> {
    ensure_registry_logic(deps.as_ref(), &info)?;

    BINDINGS.save(deps.storage, (issuer_did.as_str(), schema_id), &status)?;

    Ok(Response::new()
        .add_attribute("method", "bind")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("schema_id", schema_id.to_string())
        .add_attribute("status", status.to_string()))
}

pub fn execute_change_binding_status(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    schema_id: u64,
    status: u64,
) -> Result<Response, ContractError> {
    ensure_registry_logic(deps.as_ref(), &info)?;

    let key = (issuer_did.as_str(), schema_id);
    if !BINDINGS.has(deps.storage, key) {
        return Err(ContractError::binding_not_found(&issuer_did, schema_id));
    }
    BINDINGS.save(deps.storage, key, &status)?;

    Ok(Response::new()
        .add_attribute("method", "change_binding_status")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("schema_id", schema_id.to_string())
        .add_attribute("status", status.to_string()))
}

pub fn execute_change_logic_contract_address(
    deps: DepsMut,
    info: MessageInfo,
    new_logic_contract_address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.certifier {
        return Err(ContractError::Unauthorized {});
    }

    config.registry_logic = deps.api.addr_validate(&new_logic_contract_address)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "change_logic_contract_address")
        .add_attribute("registry_logic", config.registry_logic))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Get { schema_id } => to_json_binary(&query_schema(deps, schema_id)?),
        QueryMsg::GetOwner { schema_id } => to_json_binary(&query_owner(deps, schema_id)?),
        QueryMsg::VerifyBinding {
            issuer_did,
            schema_id,
        } => to_json_binary(&query_verify_binding(deps, issuer_did, schema_id)?),
        QueryMsg::NextSchemaId {} => to_json_binary(&query_next_schema_id(deps)?),
        QueryMsg::IssuerBindings {
            issuer_did,
            start_after,
            limit,
        } => to_json_binary(&query_issuer_bindings(deps, issuer_did, start_after, limit)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn load_schema(deps: Deps, schema_id: u64) -> StdResult<Schema> {
    SCHEMAS
        .may_load(deps.storage, schema_id)?
        .ok_or_else(|| StdError::not_found(format!("schema {schema_id}")))
}

fn query_schema(deps: Deps, schema_id: u64) -> StdResult<SchemaResponse> {
    let schema = load_schema(deps, schema_id)?;

    Ok(SchemaResponse {
        schema_id,
        schema_data: schema.schema_data,
        schema_owner: schema.schema_owner,
        status: schema.status,
    })
}

fn query_owner(deps: Deps, schema_id: u64) -> StdResult<OwnerResponse> {
    let schema = load_schema(deps, schema_id)?;
    Ok(OwnerResponse {
        owner: schema.schema_owner,
    })
}

fn query_verify_binding(
    deps: Deps,
    issuer_did: String,
    schema_id: u64,
) -> StdResult<BindingResponse> {
    let response = match BINDINGS.may_load(deps.storage, (issuer_did.as_str(), schema_id))? {
        Some(status) => BindingResponse {
            binding_exists: true,
            status,
        },
        None => BindingResponse {
            binding_exists: false,
            status: NO_STATUS,
        },
    };
    Ok(response)
}

fn query_next_schema_id(deps: Deps) -> StdResult<NextSchemaIdResponse> {
    Ok(NextSchemaIdResponse {
        next_schema_id: NEXT_SCHEMA_ID.load(deps.storage)?,
    })
}

fn query_issuer_bindings(
    deps: Deps,
    issuer_did: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<IssuerBindingsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let bindings = BINDINGS
        .prefix(issuer_did.as_str())
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(schema_id, status)| BindingInfo { schema_id, status }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(IssuerBindingsResponse {
        issuer_did,
        bindings,
    })
}

fn query_config(deps: Deps) -> StdResult<StoreConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(StoreConfigResponse {
        registry_logic: config.registry_logic,
        certifier: config.certifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::OwnedDeps;

    const DID: &str = "did:tz:test_did";

    fn setup() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            registry_logic: "logic".to_string(),
            certifier: "certifier".to_string(),
        };
        let info = mock_info("deployer", &[]);
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
        deps
    }

    fn add_schema(deps: DepsMut, data: &str) -> Response {
        let msg = ExecuteMsg::Add {
            schema_data: data.to_string(),
            schema_owner: "alice".to_string(),
            status: 1,
        };
        execute(deps, mock_env(), mock_info("logic", &[]), msg).unwrap()
    }

    fn verify(deps: Deps, issuer_did: &str, schema_id: u64) -> BindingResponse {
        let msg = QueryMsg::VerifyBinding {
            issuer_did: issuer_did.to_string(),
            schema_id,
        };
        from_json(&query(deps, mock_env(), msg).unwrap()).unwrap()
    }

    #[test]
    fn schema_ids_are_sequential() {
        let mut deps = setup();

        for expected in 0..3u64 {
            let res = add_schema(deps.as_mut(), &format!("schema_{expected}"));
            let id = res
                .attributes
                .iter()
                .find(|attr| attr.key == "schema_id")
                .unwrap();
            assert_eq!(id.value, expected.to_string());
        }

        let res = query(deps.as_ref(), mock_env(), QueryMsg::Get { schema_id: 1 }).unwrap();
        let schema: SchemaResponse = from_json(&res).unwrap();
        assert_eq!(schema.schema_data, "schema_1");
        assert_eq!(schema.schema_owner.as_str(), "alice");

        let res = query(deps.as_ref(), mock_env(), QueryMsg::NextSchemaId {}).unwrap();
        let next: NextSchemaIdResponse = from_json(&res).unwrap();
        assert_eq!(next.next_schema_id, 3);
    }

    #[test]
    fn only_registry_logic_mutates() {
        let mut deps = setup();

        let msg = ExecuteMsg::Add {
            schema_data: "schema".to_string(),
            schema_owner: "alice".to_string(),
            status: 1,
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::Forbidden {});

        let msg = ExecuteMsg::Bind {
            issuer_did: DID.to_string(),
            schema_id: 0,
            status: 1,
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("certifier", &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::Forbidden {});
        assert!(!verify(deps.as_ref(), DID, 0).binding_exists);
    }

    #[test]
    fn change_status_of_unknown_schema() {
        let mut deps = setup();
        add_schema(deps.as_mut(), "schema");

        let msg = ExecuteMsg::ChangeStatus {
            schema_id: 999,
            status: 2,
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("logic", &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::schema_not_found(999));
        assert_eq!(err.to_string(), "Schema 999 not found");

        let msg = ExecuteMsg::ChangeStatus {
            schema_id: 0,
            status: 2,
        };
        execute(deps.as_mut(), mock_env(), mock_info("logic", &[]), msg).unwrap();
        let res = query(deps.as_ref(), mock_env(), QueryMsg::Get { schema_id: 0 }).unwrap();
        let schema: SchemaResponse = from_json(&res).unwrap();
        assert_eq!(schema.status, 2);
    }

    #[test]
    fn views_of_unassigned_schema_id() {
        let mut deps = setup();
        add_schema(deps.as_mut(), "schema");

        for msg in [
            QueryMsg::Get { schema_id: 1 },
            QueryMsg::GetOwner { schema_id: 1 },
        ] {
            let err = query(deps.as_ref(), mock_env(), msg).unwrap_err();
            assert!(matches!(err, StdError::NotFound { .. }), "{err}");
        }
        assert!(query(deps.as_ref(), mock_env(), QueryMsg::Get { schema_id: 0 }).is_ok());
    }

    #[test]
    fn bindings_are_keyed_by_pair() {
        let mut deps = setup();
        let logic = mock_info("logic", &[]);

        assert_eq!(
            verify(deps.as_ref(), DID, 0),
            BindingResponse {
                binding_exists: false,
                status: 0
            }
        );

        for schema_id in [0u64, 1] {
            let msg = ExecuteMsg::Bind {
                issuer_did: DID.to_string(),
                schema_id,
                status: 1,
            };
            execute(deps.as_mut(), mock_env(), logic.clone(), msg).unwrap();
        }

        let msg = ExecuteMsg::ChangeBindingStatus {
            issuer_did: DID.to_string(),
            schema_id: 1,
            status: 2,
        };
        execute(deps.as_mut(), mock_env(), logic.clone(), msg).unwrap();

        assert_eq!(
            verify(deps.as_ref(), DID, 0),
            BindingResponse {
                binding_exists: true,
                status: 1
            }
        );
        assert_eq!(verify(deps.as_ref(), DID, 1).status, 2);
        assert!(!verify(deps.as_ref(), "did:tz:other", 0).binding_exists);

        let msg = QueryMsg::IssuerBindings {
            issuer_did: DID.to_string(),
            start_after: Some(0),
            limit: None,
        };
        let res: IssuerBindingsResponse =
            from_json(&query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap();
        assert_eq!(
            res.bindings,
            vec![BindingInfo {
                schema_id: 1,
                status: 2
            }]
        );
    }

    #[test]
    fn change_status_of_unknown_binding() {
        let mut deps = setup();

        let msg = ExecuteMsg::ChangeBindingStatus {
            issuer_did: DID.to_string(),
            schema_id: 0,
            status: 2,
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("logic", &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::binding_not_found(DID, 0));
        assert!(!verify(deps.as_ref(), DID, 0).binding_exists);
    }

    #[test]
    fn certifier_repoints_registry_logic() {
        let mut deps = setup();

        let msg = ExecuteMsg::ChangeLogicContractAddress {
            new_logic_contract_address: "logic2".to_string(),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), msg.clone())
            .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized {});
        execute(deps.as_mut(), mock_env(), mock_info("certifier", &[]), msg).unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap();
        let config: StoreConfigResponse = from_json(&res).unwrap();
        assert_eq!(config.registry_logic.as_str(), "logic2");
    }
}
