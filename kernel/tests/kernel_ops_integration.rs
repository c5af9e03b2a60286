use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use kernel::{Kernel, ERR_ADDR_NOT_IN_WHITE_LIST, ERR_METHOD_NOT_IMPLEMENTED,
    ERR_NO_ENOUGH_UTXO, ERR_PERMISSION_DENIED};
use protocol::component::{make_tx_digest_hash, make_version, GasPrice, InvokeRequest, TxDesc};
use protocol::config::{KernelConfig, PermissionRule, BLOCK_CHAIN_CONFIG_FILE};
use protocol::interface::{ChainAssembler, ChainRegister, Contract, Ledger, StateMeta};
use sys::{load_config, s, uniqid, Account};
use testkit::sim::assemble::SimAssembler;
use testkit::sim::context::make_tx_context;
use testkit::sim::ledger::MemLedger;
use testkit::sim::register::RecordRegister;
use testkit::sim::state::MemMeta;
use testkit::sim::tx::{make_ext_output, make_kernel_desc, make_kernel_tx};


const GENESIS: &str = r#"{"version":"1","maxblocksize":"128","award":"1000000","permission":{"UpdateGasPrice":{"rule":"SIGN_THRESHOLD"}}}"#;


struct Fixture {
    root: PathBuf,
    datadir: PathBuf,
    register: Arc<RecordRegister>,
    assembler: Arc<SimAssembler>,
    ledger: Arc<MemLedger>,
    meta: Arc<MemMeta>,
    krn: Kernel,
}

impl Drop for Fixture {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.root).ok();
    }
}

fn setup(tag: &str, chain: &str, cnf: KernelConfig, no_fee: bool) -> Fixture {
    let root = std::env::temp_dir().join(format!("kernel_it_{}_{}", tag, uniqid()));
    let datadir = root.join("data");
    fs::create_dir_all(&datadir).unwrap();
    let register = Arc::new(RecordRegister::default());
    let assembler = SimAssembler::new();
    let ledger = MemLedger::new(no_fee);
    let meta = MemMeta::new();
    let krn = Kernel::init(datadir.clone(),
        Some(register.clone() as Arc<dyn ChainRegister>),
        assembler.clone() as Arc<dyn ChainAssembler>,
        chain, Arc::new(cnf));
    Fixture { root, datadir, register, assembler, ledger, meta, krn }
}

fn open_cnf() -> KernelConfig {
    KernelConfig {
        disable_create_chain_whitelist: true,
        enable_stop_chain: true,
        ..Default::default()
    }
}

fn set_ctx(fx: &Fixture, height: u64) {
    fx.krn.set_context(make_tx_context(fx.ledger.clone(), fx.meta.clone(), height)).unwrap();
}

fn block_size_desc(old: f64, new: f64) -> TxDesc {
    make_kernel_desc("UpdateMaxBlockSize", serde_json::json!({
        "old_block_size": old,
        "new_block_size": new,
    }), vec![], vec![])
}


#[test]
fn update_max_block_size_applies() {
    let fx = setup("mbs", "xuper", open_cnf(), true);
    fx.meta.preset_max_block_size(1048576);
    set_ctx(&fx, 10);
    fx.krn.run(&block_size_desc(1048576.0, 2097152.0)).unwrap();
    fx.meta.commit();
    assert_eq!(fx.meta.get_max_block_size(), 2097152);
}


#[test]
fn update_max_block_size_guards_stale_old_value() {
    let fx = setup("mbs_guard", "xuper", open_cnf(), true);
    fx.meta.preset_max_block_size(524288);
    let initial = fx.meta.snapshot();
    set_ctx(&fx, 10);
    let err = fx.krn.run(&block_size_desc(1048576.0, 2097152.0)).unwrap_err();
    assert!(err.contains("unexpected old max block size"));
    fx.meta.commit();
    assert_eq!(fx.meta.snapshot(), initial);
    assert_eq!(fx.meta.get_max_block_size(), 524288);
}


#[test]
fn wrong_arg_shape_leaves_state_unchanged() {
    let fx = setup("shape", "xuper", open_cnf(), true);
    fx.meta.preset_max_block_size(1048576);
    let initial = fx.meta.snapshot();
    set_ctx(&fx, 10);
    let desc = make_kernel_desc("UpdateMaxBlockSize", serde_json::json!({
        "old_block_size": "1048576",
        "new_block_size": 2097152.0,
    }), vec![], vec![]);
    let err = fx.krn.run(&desc).unwrap_err();
    assert!(err.contains("invalid arg type"));
    fx.meta.commit();
    assert_eq!(fx.meta.snapshot(), initial);
}


#[test]
fn unknown_method_is_refused() {
    let fx = setup("unknown", "xuper", open_cnf(), true);
    set_ctx(&fx, 1);
    let desc = make_kernel_desc("MintDiamond", serde_json::json!({}), vec![], vec![]);
    assert_eq!(fx.krn.run(&desc).unwrap_err(), ERR_METHOD_NOT_IMPLEMENTED);
}


#[test]
fn i64_parameter_round_trips() {
    let cases: Vec<(&str, &str, &str, i64, f64)> = vec![
        ("UpdateMaxBlockSize", "old_block_size", "new_block_size", 1048576, 2097152.0),
        ("UpdateIrreversibleSlideWindow", "old_irreversible_slide_window",
            "new_irreversible_slide_window", 20, 40.0),
        ("UpdateNewAccountResourceAmount", "old_new_account_resource_amount",
            "new_new_account_resource_amount", 1000, 3000.0),
    ];
    for (method, oldkey, newkey, oldv, newv) in cases {
        let fx = setup("roundtrip", "xuper", open_cnf(), true);
        fx.meta.preset_max_block_size(1048576);
        fx.meta.preset_irreversible_slide_window(20);
        fx.meta.preset_new_account_resource_amount(1000);
        let initial = fx.meta.snapshot();
        set_ctx(&fx, 3);
        let desc = make_kernel_desc(method, serde_json::json!({
            oldkey: oldv as f64,
            newkey: newv,
        }), vec![], vec![]);
        fx.krn.run(&desc).unwrap();
        fx.krn.rollback(&desc).unwrap();
        fx.meta.commit();
        assert_eq!(fx.meta.snapshot(), initial, "round trip of {}", method);
    }
}


#[test]
fn new_account_resource_amount_mismatch_is_fatal() {
    let fx = setup("nara", "xuper", open_cnf(), true);
    fx.meta.preset_new_account_resource_amount(500);
    set_ctx(&fx, 3);
    let desc = make_kernel_desc("UpdateNewAccountResourceAmount", serde_json::json!({
        "old_new_account_resource_amount": 1000.0,
        "new_new_account_resource_amount": 3000.0,
    }), vec![], vec![]);
    let err = fx.krn.run(&desc).unwrap_err();
    assert!(err.contains("unexpected old new account resource amount"));
    fx.meta.commit();
    assert_eq!(fx.meta.get_new_account_resource_amount(), 500);
}


#[test]
fn gas_price_update_and_rollback() {
    let fx = setup("gas", "xuper", open_cnf(), true);
    let one = GasPrice { cpu_rate: 1, mem_rate: 1, disk_rate: 1, xfee_rate: 1 };
    fx.meta.preset_gas_price(&one);
    set_ctx(&fx, 7);
    let desc = make_kernel_desc("UpdateGasPrice", serde_json::json!({
        "old_gas_price": {"cpu_rate": 1, "mem_rate": 1, "disk_rate": 1, "xfee_rate": 1},
        "new_gas_price": {"cpu_rate": 2, "mem_rate": 2, "disk_rate": 2, "xfee_rate": 2},
    }), vec![], vec![]);
    fx.krn.run(&desc).unwrap();
    fx.meta.commit();
    let two = GasPrice { cpu_rate: 2, mem_rate: 2, disk_rate: 2, xfee_rate: 2 };
    assert_eq!(fx.meta.get_gas_price(), two);

    // rollback restores all four rates without comparison
    set_ctx(&fx, 8);
    fx.krn.rollback(&desc).unwrap();
    fx.meta.commit();
    assert_eq!(fx.meta.get_gas_price(), one);
}


#[test]
fn gas_price_guard_compares_component_wise() {
    let fx = setup("gas_guard", "xuper", open_cnf(), true);
    fx.meta.preset_gas_price(&GasPrice { cpu_rate: 1, mem_rate: 1, disk_rate: 1, xfee_rate: 9 });
    set_ctx(&fx, 7);
    let desc = make_kernel_desc("UpdateGasPrice", serde_json::json!({
        "old_gas_price": {"cpu_rate": 1, "mem_rate": 1, "disk_rate": 1, "xfee_rate": 1},
        "new_gas_price": {"cpu_rate": 2, "mem_rate": 2, "disk_rate": 2, "xfee_rate": 2},
    }), vec![], vec![]);
    let err = fx.krn.run(&desc).unwrap_err();
    assert!(err.contains("old_gas_price values are not equal to the current node"));
}


#[test]
fn forbidden_contract_guard_and_round_trip() {
    let fx = setup("forbid", "xuper", open_cnf(), true);
    let live = InvokeRequest {
        module_name: s!("wasm"),
        contract_name: s!("banned"),
        method_name: s!("apply"),
        args: [(s!("k"), s!("v"))].into_iter().collect(),
    };
    fx.meta.preset_forbidden_contract(&live);
    let initial = fx.meta.snapshot();
    set_ctx(&fx, 4);

    // args must deep-equal the live value
    let desc = make_kernel_desc("UpdateForbiddenContract", serde_json::json!({
        "old_forbidden_contract": {
            "module_name": "wasm", "contract_name": "banned",
            "method_name": "apply", "args": {"k": "other"},
        },
        "new_forbidden_contract": {
            "module_name": "wasm", "contract_name": "banned2",
            "method_name": "apply", "args": {},
        },
    }), vec![], vec![]);
    let err = fx.krn.run(&desc).unwrap_err();
    assert!(err.contains("doesn't match current node"));

    let desc = make_kernel_desc("UpdateForbiddenContract", serde_json::json!({
        "old_forbidden_contract": {
            "module_name": "wasm", "contract_name": "banned",
            "method_name": "apply", "args": {"k": "v"},
        },
        "new_forbidden_contract": {
            "module_name": "wasm", "contract_name": "banned2",
            "method_name": "apply", "args": {},
        },
    }), vec![], vec![]);
    fx.krn.run(&desc).unwrap();
    fx.meta.commit();
    assert_eq!(fx.meta.get_forbidden_contract().contract_name, "banned2");

    set_ctx(&fx, 5);
    fx.krn.rollback(&desc).unwrap();
    fx.meta.commit();
    assert_eq!(fx.meta.snapshot(), initial);
}


#[test]
fn reserved_contracts_guard_per_index() {
    let fx = setup("reserved", "xuper", open_cnf(), true);
    let live = vec![
        InvokeRequest {
            module_name: s!("wasm"),
            contract_name: s!("identity"),
            method_name: s!("verify"),
            args: Default::default(),
        },
    ];
    fx.meta.preset_reserved_contracts(&live);
    let initial = fx.meta.snapshot();
    set_ctx(&fx, 4);

    // list length must match the live list
    let desc = make_kernel_desc("UpdateReservedContract", serde_json::json!({
        "old_reserved_contracts": [],
        "new_reserved_contracts": [
            {"module_name": "wasm", "contract_name": "identity2", "method_name": "verify", "args": {}},
        ],
    }), vec![], vec![]);
    let err = fx.krn.run(&desc).unwrap_err();
    assert!(err.contains("old_reserved_contracts values are not equal to the current node"));

    let old_json = serde_json::json!([
        {"module_name": "wasm", "contract_name": "identity", "method_name": "verify", "args": {}},
    ]);
    let new_json = serde_json::json!([
        {"module_name": "wasm", "contract_name": "identity2", "method_name": "verify", "args": {}},
    ]);
    let desc = make_kernel_desc("UpdateReservedContract", serde_json::json!({
        "old_reserved_contracts": old_json,
        "new_reserved_contracts": new_json,
    }), vec![], vec![]);
    fx.krn.run(&desc).unwrap();
    fx.meta.commit();
    assert_eq!(fx.meta.get_reserved_contracts()[0].contract_name, "identity2");

    set_ctx(&fx, 5);
    fx.krn.rollback(&desc).unwrap();
    fx.meta.commit();
    assert_eq!(fx.meta.snapshot(), initial);
}


#[test]
fn create_block_chain_end_to_end() {
    let mut cnf = KernelConfig::default();
    cnf.new_chain_whitelist.insert(s!("addr1"));
    cnf.min_new_chain_amount = s!("1000");
    let fx = setup("create", "xuper", cnf, false);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("CreateBlockChain", serde_json::json!({
        "name": "side1",
        "data": GENESIS,
    }), vec!["addr1"], vec![("side1", 1000)]);
    fx.krn.run(&desc).unwrap();

    // chain dir and genesis file
    let chain_dir = fx.datadir.join("side1");
    assert!(chain_dir.exists());
    let written = fs::read_to_string(chain_dir.join(BLOCK_CHAIN_CONFIG_FILE)).unwrap();
    assert_eq!(written, GENESIS);

    // fresh engines opened, bootstrapped and closed on exit
    let ledgers = fx.assembler.opened_ledgers();
    assert_eq!(ledgers.len(), 1);
    assert_eq!(ledgers[0].confirmed_count(), 1);
    assert!(ledgers[0].is_closed());
    let states = fx.assembler.opened_states();
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].replayed_blocks().len(), 1);
    assert!(states[0].is_closed());

    // hot loaded and permission rules retained
    assert_eq!(fx.register.registered(), vec![s!("side1")]);
    assert_eq!(fx.krn.method_rule("UpdateGasPrice"), Some(PermissionRule::SignThreshold));
}


#[test]
fn create_block_chain_is_idempotent_at_run_level() {
    let fx = setup("create_idem", "xuper", open_cnf(), true);
    fs::create_dir_all(fx.datadir.join("side1")).unwrap();
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("CreateBlockChain", serde_json::json!({
        "name": "side1",
        "data": GENESIS,
    }), vec![], vec![]);
    // the pre-existing chain counts as created, nothing is loaded
    fx.krn.run(&desc).unwrap();
    assert!(fx.register.registered().is_empty());
    assert!(fx.assembler.opened_ledgers().is_empty());
}


#[test]
fn create_block_chain_away_from_root_chain() {
    let fx = setup("create_side", "side9", open_cnf(), true);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("CreateBlockChain", serde_json::json!({
        "name": "side1",
        "data": GENESIS,
    }), vec![], vec![]);
    assert_eq!(fx.krn.run(&desc).unwrap_err(), ERR_PERMISSION_DENIED);
    assert!(! fx.datadir.join("side1").exists());
}


#[test]
fn create_block_chain_whitelist_gate() {
    let mut cnf = KernelConfig::default();
    cnf.new_chain_whitelist.insert(s!("addr1"));
    let fx = setup("create_wl", "xuper", cnf, true);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("CreateBlockChain", serde_json::json!({
        "name": "side1",
        "data": GENESIS,
    }), vec!["outsider"], vec![]);
    assert_eq!(fx.krn.run(&desc).unwrap_err(), ERR_ADDR_NOT_IN_WHITE_LIST);
    assert!(! fx.datadir.join("side1").exists());
}


#[test]
fn create_block_chain_needs_minimum_outlay() {
    let mut cnf = KernelConfig::default();
    cnf.disable_create_chain_whitelist = true;
    cnf.min_new_chain_amount = s!("1000");
    let fx = setup("create_fee", "xuper", cnf, false);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("CreateBlockChain", serde_json::json!({
        "name": "side1",
        "data": GENESIS,
    }), vec![], vec![("side1", 10)]);
    assert_eq!(fx.krn.run(&desc).unwrap_err(), ERR_NO_ENOUGH_UTXO);
    assert!(! fx.datadir.join("side1").exists());
}


#[test]
fn create_block_chain_rejects_malformed_genesis() {
    let fx = setup("create_bad", "xuper", open_cnf(), true);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("CreateBlockChain", serde_json::json!({
        "name": "side1",
        "data": "not a genesis",
    }), vec![], vec![]);
    let err = fx.krn.run(&desc).unwrap_err();
    assert!(err.contains("first block data error"));
    assert!(! fx.datadir.join("side1").exists());
}


#[test]
fn create_block_chain_cleans_up_on_bootstrap_failure() {
    let fx = setup("create_fail", "xuper", open_cnf(), true);
    fx.assembler.set_fail_open_state(true);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("CreateBlockChain", serde_json::json!({
        "name": "side1",
        "data": GENESIS,
    }), vec![], vec![]);
    assert!(fx.krn.run(&desc).is_err());
    // partial side effects undone, the opened ledger closed
    assert!(! fx.datadir.join("side1").exists());
    let ledgers = fx.assembler.opened_ledgers();
    assert_eq!(ledgers.len(), 1);
    assert!(ledgers[0].is_closed());
    assert!(fx.register.registered().is_empty());
}


#[test]
fn rollback_create_moves_chain_to_trash() {
    let fx = setup("create_back", "xuper", open_cnf(), true);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("CreateBlockChain", serde_json::json!({
        "name": "side1",
        "data": GENESIS,
    }), vec![], vec![]);
    fx.krn.run(&desc).unwrap();
    assert!(fx.datadir.join("side1").exists());

    fx.krn.rollback(&desc).unwrap();
    assert!(! fx.datadir.join("side1").exists());
    let trash: Vec<String> = fs::read_dir(fx.root.join("trash")).unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(trash.len(), 1);
    assert!(trash[0].starts_with("side1_"));
    assert_eq!(fx.register.unloaded(), vec![s!("side1")]);

    // a second rollback finds nothing to undo
    fx.krn.rollback(&desc).unwrap();
}


#[test]
fn stop_block_chain_flows() {
    // feature flag off
    let mut cnf = open_cnf();
    cnf.enable_stop_chain = false;
    let fx = setup("stop_off", "xuper", cnf, true);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("StopBlockChain",
        serde_json::json!({"name": "side1"}), vec![], vec![]);
    assert_eq!(fx.krn.run(&desc).unwrap_err(), ERR_PERMISSION_DENIED);

    // the root chain cannot be stopped
    let fx = setup("stop_root", "xuper", open_cnf(), true);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("StopBlockChain",
        serde_json::json!({"name": "xuper"}), vec![], vec![]);
    assert_eq!(fx.krn.run(&desc).unwrap_err(), ERR_PERMISSION_DENIED);

    // whitelist gate
    let mut cnf = KernelConfig::default();
    cnf.enable_stop_chain = true;
    cnf.new_chain_whitelist.insert(s!("addr1"));
    let fx = setup("stop_wl", "xuper", cnf, true);
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("StopBlockChain",
        serde_json::json!({"name": "side1"}), vec!["outsider"], vec![]);
    assert_eq!(fx.krn.run(&desc).unwrap_err(), ERR_ADDR_NOT_IN_WHITE_LIST);

    // success requests the unload and touches no files
    let fx = setup("stop_ok", "xuper", open_cnf(), true);
    fs::create_dir_all(fx.datadir.join("side1")).unwrap();
    set_ctx(&fx, 5);
    let desc = make_kernel_desc("StopBlockChain",
        serde_json::json!({"name": "side1"}), vec![], vec![]);
    fx.krn.run(&desc).unwrap();
    assert_eq!(fx.register.unloaded(), vec![s!("side1")]);
    assert!(fx.datadir.join("side1").exists());

    // an unload failure is tolerated
    let fx = setup("stop_tol", "xuper", open_cnf(), true);
    fx.register.set_fail_unload(true);
    set_ctx(&fx, 5);
    fx.krn.run(&desc).unwrap();
    assert!(fx.register.unloaded().is_empty());

    // rollback is argument validation only
    fx.krn.rollback(&desc).unwrap();
    let bad = make_kernel_desc("StopBlockChain", serde_json::json!({}), vec![], vec![]);
    assert!(fx.krn.rollback(&bad).is_err());
}


fn modify_pk_json(acc: &Account) -> String {
    format!("{{\"curvname\":\"secp256k1\",\"pubkey\":\"{}\"}}",
        hex::encode(acc.public_key_compressed()))
}

#[test]
fn update_block_chain_data_rewrites_history() {
    let acc = Account::create_by_password("modify-root").unwrap();
    let mut cnf = open_cnf();
    cnf.modify_block_addr = s!(acc.readable());
    let fx = setup("moddata", "xuper", cnf, true);

    // one confirmed target tx with two extended outputs
    let mut target = make_kernel_tx("Whatever", serde_json::json!({}), vec!["addr1"], vec![]);
    target.outputs_ext = vec![
        make_ext_output("bk1", b"k1", b"v1"),
        make_ext_output("bk2", b"k2", b"v2"),
    ];
    fx.ledger.insert_transaction(target.clone());
    let v0 = make_version(&target.txid, 0);
    let v1 = make_version(&target.txid, 1);
    fx.meta.cache_put("bk1", &v0);
    fx.meta.cache_put("bk2", &v1);

    // sign the canonical digest of the post-edit transaction
    let mut edited = target.clone();
    edited.desc = vec![];
    edited.outputs_ext = vec![];
    let digest = make_tx_digest_hash(&edited);
    let sign = acc.do_sign(&digest);

    let desc = make_kernel_desc("UpdateBlockChainData", serde_json::json!({
        "txid": target.txid_hex(),
        "publicKey": modify_pk_json(&acc),
        "sign": hex::encode(sign),
    }), vec![], vec![]);
    set_ctx(&fx, 42);
    fx.krn.run(&desc).unwrap();

    // the ledger holds the rewritten form
    let got = fx.ledger.query_transaction(&target.txid).unwrap();
    assert!(got.desc.is_empty());
    assert!(got.outputs_ext.is_empty());
    let rewrites = fx.ledger.rewrites();
    assert_eq!(rewrites.len(), 1);
    assert_eq!(rewrites[0].txid, target.txid_hex());
    assert_eq!(rewrites[0].new_txid, desc.tx.txid_hex());
    assert_eq!(rewrites[0].height, 42);

    // every cached version of the target outputs misses now
    assert!(! fx.meta.cache_contains("bk1", &v0));
    assert!(! fx.meta.cache_contains("bk2", &v1));
    assert_eq!(fx.meta.invalidated().len(), 2);

    // rollback is a no-op, history stays rewritten
    fx.krn.rollback(&desc).unwrap();
    assert_eq!(fx.ledger.rewrites().len(), 1);
}


#[test]
fn update_block_chain_data_refuses_stranger_key() {
    let acc = Account::create_by_password("modify-root").unwrap();
    let stranger = Account::create_by_password("stranger").unwrap();
    let mut cnf = open_cnf();
    cnf.modify_block_addr = s!(acc.readable());
    let fx = setup("moddata_pk", "xuper", cnf, true);

    let target = make_kernel_tx("Whatever", serde_json::json!({}), vec!["addr1"], vec![]);
    fx.ledger.insert_transaction(target.clone());
    let desc = make_kernel_desc("UpdateBlockChainData", serde_json::json!({
        "txid": target.txid_hex(),
        "publicKey": modify_pk_json(&stranger),
        "sign": hex::encode([3u8; 64]),
    }), vec![], vec![]);
    set_ctx(&fx, 42);
    assert_eq!(fx.krn.run(&desc).unwrap_err(), "address and public key not match");
    assert!(fx.ledger.rewrites().is_empty());
}


#[test]
fn update_block_chain_data_refuses_bad_signature() {
    let acc = Account::create_by_password("modify-root").unwrap();
    let mut cnf = open_cnf();
    cnf.modify_block_addr = s!(acc.readable());
    let fx = setup("moddata_sig", "xuper", cnf, true);

    let target = make_kernel_tx("Whatever", serde_json::json!({}), vec!["addr1"], vec![]);
    fx.ledger.insert_transaction(target.clone());
    // signed over the wrong digest
    let sign = acc.do_sign(&sys::sha2(b"something else"));
    let desc = make_kernel_desc("UpdateBlockChainData", serde_json::json!({
        "txid": target.txid_hex(),
        "publicKey": modify_pk_json(&acc),
        "sign": hex::encode(sign),
    }), vec![], vec![]);
    set_ctx(&fx, 42);
    let err = fx.krn.run(&desc).unwrap_err();
    assert!(err.contains("verify signature failed"));
    assert!(fx.ledger.rewrites().is_empty());

    // absent target tx
    let desc = make_kernel_desc("UpdateBlockChainData", serde_json::json!({
        "txid": "00ff00ff",
        "publicKey": modify_pk_json(&acc),
        "sign": hex::encode([9u8; 64]),
    }), vec![], vec![]);
    let err = fx.krn.run(&desc).unwrap_err();
    assert!(err.contains("modified tx not exist"));
}


#[test]
fn kernel_config_loads_from_ini_file() {
    let root = std::env::temp_dir().join(format!("kernel_it_ini_{}", uniqid()));
    fs::create_dir_all(&root).unwrap();
    let file = root.join("node.config.ini");
    fs::write(&file, concat!(
        "[kernel]\n",
        "new_chain_whitelist = addr1,addr2\n",
        "min_new_chain_amount = 1000000\n",
        "enable_stop_chain = true\n",
        "modify_block_addr = addr9\n",
    )).unwrap();

    let ini = load_config(file.to_str().unwrap());
    let cnf = KernelConfig::new(&ini);
    assert!(cnf.new_chain_whitelist.contains("addr1"));
    assert!(cnf.new_chain_whitelist.contains("addr2"));
    assert!(cnf.enable_stop_chain);
    assert!(! cnf.disable_create_chain_whitelist);
    assert_eq!(cnf.min_new_chain_amount_big().to_string(), "1000000");
    assert_eq!(cnf.modify_block_addr, "addr9");
    fs::remove_dir_all(&root).ok();
}
