//! Authorization and pause-state tests for the gateway contract.
//!
//! Every mutating operation must succeed iff the caller is the current
//! owner, and a rejected call must leave the stored configuration
//! untouched.

use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, ContractWrapper, Executor};

use gateway::msg::{
    ConfigResponse, ExecuteMsg, FeeCollectorResponse, InstantiateMsg, IsOwnerResponse,
    IsPausedResponse, ProxyResponse, QueryMsg,
};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_gateway() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        gateway::contract::execute,
        gateway::contract::instantiate,
        gateway::contract::query,
    ))
}

fn owner() -> Addr {
    Addr::unchecked("terra1owner")
}

fn collector() -> Addr {
    Addr::unchecked("terra1collector")
}

fn stranger() -> Addr {
    Addr::unchecked("terra1stranger")
}

fn setup() -> (App, Addr) {
    let mut app = App::default();

    let gateway_code = app.store_code(contract_gateway());
    let gateway_addr = app
        .instantiate_contract(
            gateway_code,
            owner(),
            &InstantiateMsg {
                owner: owner().to_string(),
                fee_collector: collector().to_string(),
                lock_proxy: None,
                paused: None,
            },
            &[],
            "lock-gateway",
            Some(owner().to_string()),
        )
        .unwrap();

    (app, gateway_addr)
}

fn query_config(app: &App, gateway_addr: &Addr) -> ConfigResponse {
    app.wrap()
        .query_wasm_smart(gateway_addr, &QueryMsg::Config {})
        .unwrap()
}

fn is_paused(app: &App, gateway_addr: &Addr) -> bool {
    let res: IsPausedResponse = app
        .wrap()
        .query_wasm_smart(gateway_addr, &QueryMsg::IsPaused {})
        .unwrap();
    res.paused
}

// ============================================================================
// Ownership Tests
// ============================================================================

#[test]
fn test_transfer_ownership() {
    let (mut app, gateway_addr) = setup();
    let new_owner = Addr::unchecked("terra1newowner");

    let res = app
        .execute_contract(
            owner(),
            gateway_addr.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: new_owner.to_string(),
            },
            &[],
        )
        .unwrap();

    let old_attr = res
        .events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == "old_owner")
        .map(|a| a.value.clone());
    assert_eq!(old_attr, Some(owner().to_string()));

    assert_eq!(query_config(&app, &gateway_addr).owner, new_owner);

    // The previous owner has lost all rights
    let res = app.execute_contract(owner(), gateway_addr.clone(), &ExecuteMsg::Pause {}, &[]);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));

    // The new owner holds them
    app.execute_contract(new_owner, gateway_addr, &ExecuteMsg::Pause {}, &[])
        .unwrap();
}

#[test]
fn test_transfer_ownership_unauthorized() {
    let (mut app, gateway_addr) = setup();

    let res = app.execute_contract(
        stranger(),
        gateway_addr.clone(),
        &ExecuteMsg::TransferOwnership {
            new_owner: stranger().to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));

    assert_eq!(query_config(&app, &gateway_addr).owner, owner());
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_set_fee_collector() {
    let (mut app, gateway_addr) = setup();
    let new_collector = Addr::unchecked("terra1newcollector");

    app.execute_contract(
        owner(),
        gateway_addr.clone(),
        &ExecuteMsg::SetFeeCollector {
            address: new_collector.to_string(),
        },
        &[],
    )
    .unwrap();

    let res: FeeCollectorResponse = app
        .wrap()
        .query_wasm_smart(&gateway_addr, &QueryMsg::FeeCollector {})
        .unwrap();
    assert_eq!(res.fee_collector, new_collector);
}

#[test]
fn test_set_fee_collector_unauthorized() {
    let (mut app, gateway_addr) = setup();

    let res = app.execute_contract(
        collector(),
        gateway_addr.clone(),
        &ExecuteMsg::SetFeeCollector {
            address: collector().to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));

    assert_eq!(query_config(&app, &gateway_addr).fee_collector, collector());
}

#[test]
fn test_set_proxy() {
    let (mut app, gateway_addr) = setup();
    let proxy = Addr::unchecked("terra1proxy");

    app.execute_contract(
        owner(),
        gateway_addr.clone(),
        &ExecuteMsg::SetProxy {
            address: proxy.to_string(),
        },
        &[],
    )
    .unwrap();

    let res: ProxyResponse = app
        .wrap()
        .query_wasm_smart(&gateway_addr, &QueryMsg::Proxy {})
        .unwrap();
    assert_eq!(res.lock_proxy, Some(proxy));
}

#[test]
fn test_set_proxy_unauthorized() {
    let (mut app, gateway_addr) = setup();

    let res = app.execute_contract(
        stranger(),
        gateway_addr.clone(),
        &ExecuteMsg::SetProxy {
            address: stranger().to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));

    assert_eq!(query_config(&app, &gateway_addr).lock_proxy, None);
}

// ============================================================================
// Pause Tests
// ============================================================================

#[test]
fn test_pause_unpause_roundtrip() {
    let (mut app, gateway_addr) = setup();

    assert!(!is_paused(&app, &gateway_addr));

    app.execute_contract(owner(), gateway_addr.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();
    assert!(is_paused(&app, &gateway_addr));

    app.execute_contract(owner(), gateway_addr.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap();
    assert!(!is_paused(&app, &gateway_addr));
}

#[test]
fn test_pause_is_idempotent() {
    let (mut app, gateway_addr) = setup();

    app.execute_contract(owner(), gateway_addr.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();
    app.execute_contract(owner(), gateway_addr.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();
    assert!(is_paused(&app, &gateway_addr));

    app.execute_contract(owner(), gateway_addr.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap();
    app.execute_contract(owner(), gateway_addr.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap();
    assert!(!is_paused(&app, &gateway_addr));
}

#[test]
fn test_pause_requires_owner() {
    let (mut app, gateway_addr) = setup();

    let res = app.execute_contract(stranger(), gateway_addr.clone(), &ExecuteMsg::Pause {}, &[]);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));
    assert!(!is_paused(&app, &gateway_addr));
}

#[test]
fn test_administration_stays_available_while_paused() {
    let (mut app, gateway_addr) = setup();

    app.execute_contract(owner(), gateway_addr.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();

    // The owner can still reconfigure and hand over ownership
    app.execute_contract(
        owner(),
        gateway_addr.clone(),
        &ExecuteMsg::SetProxy {
            address: "terra1proxy".to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner(),
        gateway_addr.clone(),
        &ExecuteMsg::TransferOwnership {
            new_owner: "terra1newowner".to_string(),
        },
        &[],
    )
    .unwrap();

    assert!(is_paused(&app, &gateway_addr));
}

#[test]
fn test_instantiate_paused() {
    let mut app = App::default();

    let gateway_code = app.store_code(contract_gateway());
    let gateway_addr = app
        .instantiate_contract(
            gateway_code,
            owner(),
            &InstantiateMsg {
                owner: owner().to_string(),
                fee_collector: collector().to_string(),
                lock_proxy: None,
                paused: Some(true),
            },
            &[],
            "lock-gateway",
            None,
        )
        .unwrap();

    assert!(is_paused(&app, &gateway_addr));
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_is_owner_query() {
    let (app, gateway_addr) = setup();

    let res: IsOwnerResponse = app
        .wrap()
        .query_wasm_smart(
            &gateway_addr,
            &QueryMsg::IsOwner {
                address: owner().to_string(),
            },
        )
        .unwrap();
    assert!(res.is_owner);

    let res: IsOwnerResponse = app
        .wrap()
        .query_wasm_smart(
            &gateway_addr,
            &QueryMsg::IsOwner {
                address: stranger().to_string(),
            },
        )
        .unwrap();
    assert!(!res.is_owner);
}
