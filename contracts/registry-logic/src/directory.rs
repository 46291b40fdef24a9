//! Contract directory: resolves logical component names to the live store
//! addresses so stores can be replaced without redeploying registry logic.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use registry_shared::{IssuerStore, SchemaStore, ISSUER_REGISTRY_CONTRACT, SCHEMA_REGISTRY_CONTRACT};

use crate::error::ContractError;
use crate::state::{CONFIG, CONTRACTS};

/// Register `address` under `contract_name`, replacing any prior entry.
pub fn set_address(
    storage: &mut dyn Storage,
    sender: &Addr,
    contract_name: &str,
    address: &Addr,
) -> Result<(), ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.certifier {
        return Err(ContractError::Unauthorized {});
    }

    CONTRACTS.save(storage, contract_name, address)?;
    Ok(())
}

pub fn resolve(storage: &dyn Storage, contract_name: &str) -> Result<Addr, ContractError> {
    CONTRACTS
        .may_load(storage, contract_name)?
        .ok_or_else(|| ContractError::UnknownComponent {
            contract_name: contract_name.to_string(),
        })
}

pub fn issuer_store(storage: &dyn Storage) -> Result<IssuerStore, ContractError> {
    resolve(storage, ISSUER_REGISTRY_CONTRACT).map(IssuerStore)
}

pub fn schema_store(storage: &dyn Storage) -> Result<SchemaStore, ContractError> {
    resolve(storage, SCHEMA_REGISTRY_CONTRACT).map(SchemaStore)
}

pub fn entries(storage: &dyn Storage) -> StdResult<Vec<(String, Addr)>> {
    CONTRACTS
        .range(storage, None, None, Order::Ascending)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Config;
    use cosmwasm_std::testing::MockStorage;

    fn storage() -> MockStorage {
        let mut storage = MockStorage::new();
        let config = Config {
            certifier: Addr::unchecked("certifier"),
        };
        CONFIG.save(&mut storage, &config).unwrap();
        storage
    }

    #[test]
    fn resolve_unset_name() {
        let storage = storage();
        let err = resolve(&storage, ISSUER_REGISTRY_CONTRACT).unwrap_err();
        assert_eq!(
            err,
            ContractError::UnknownComponent {
                contract_name: ISSUER_REGISTRY_CONTRACT.to_string()
            }
        );
    }

    #[test]
    fn only_certifier_sets_addresses() {
        let mut storage = storage();
        let store = Addr::unchecked("issuers");

        let err = set_address(
            &mut storage,
            &Addr::unchecked("alice"),
            ISSUER_REGISTRY_CONTRACT,
            &store,
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized {});
        assert!(issuer_store(&storage).is_err());

        set_address(
            &mut storage,
            &Addr::unchecked("certifier"),
            ISSUER_REGISTRY_CONTRACT,
            &store,
        )
        .unwrap();
        assert_eq!(issuer_store(&storage).unwrap(), IssuerStore(store));
        assert!(schema_store(&storage).is_err());
    }

    #[test]
    fn set_address_overwrites() {
        let mut storage = storage();
        let certifier = Addr::unchecked("certifier");

        let v1 = Addr::unchecked("v1");
        set_address(&mut storage, &certifier, SCHEMA_REGISTRY_CONTRACT, &v1).unwrap();
        let v2 = Addr::unchecked("v2");
        set_address(&mut storage, &certifier, SCHEMA_REGISTRY_CONTRACT, &v2).unwrap();

        assert_eq!(resolve(&storage, SCHEMA_REGISTRY_CONTRACT).unwrap(), v2);
        assert_eq!(entries(&storage).unwrap().len(), 1);
    }
}
