use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use protocol::component::{GasPrice, InvokeRequest};
use protocol::interface::{MetaBatch, StateMeta};
use sys::*;


const KEY_MAX_BLOCK_SIZE: &[u8] = b"max_block_size";
const KEY_IRREVERSIBLE_SLIDE_WINDOW: &[u8] = b"irreversible_slide_window";
const KEY_NEW_ACCOUNT_RESOURCE_AMOUNT: &[u8] = b"new_account_resource_amount";
const KEY_GAS_PRICE: &[u8] = b"gas_price";
const KEY_FORBIDDEN_CONTRACT: &[u8] = b"forbidden_contract";
const KEY_RESERVED_CONTRACTS: &[u8] = b"reserved_contracts";


type StageOps = Arc<Mutex<Vec<(Vec<u8>, Option<Vec<u8>>)>>>;

/*
* staging batch handle of one executing transaction
*/
pub struct MemMetaBatch {
    stage: StageOps,
}

impl MetaBatch for MemMetaBatch {
    fn put(&mut self, k: &[u8], v: &[u8]) {
        self.stage.lock().unwrap().push((k.to_vec(), Some(v.to_vec())));
    }
    fn del(&mut self, k: &[u8]) {
        self.stage.lock().unwrap().push((k.to_vec(), None));
    }
}


/*
* in-memory state meta engine: committed value table plus
* one shared staging buffer applied in append order
*/
#[derive(Default)]
pub struct MemMeta {
    values: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
    stage: StageOps,
    cache: Mutex<HashSet<(String, String)>>,
    invalidated: Mutex<Vec<(String, String)>>,
    replayed: Mutex<Vec<Vec<u8>>>,
    closed: AtomicBool,
}


impl MemMeta {

    pub fn new() -> Arc<MemMeta> {
        Arc::new(MemMeta::default())
    }

    pub fn make_batch(&self) -> Box<dyn MetaBatch> {
        Box::new(MemMetaBatch {
            stage: self.stage.clone(),
        })
    }

    // the surrounding tx handler commits the open batch
    pub fn commit(&self) {
        let mut values = self.values.lock().unwrap();
        for (k, v) in self.stage.lock().unwrap().drain(..) {
            match v {
                Some(v) => values.insert(k, v),
                None => values.remove(&k),
            };
        }
    }

    pub fn snapshot(&self) -> HashMap<Vec<u8>, Vec<u8>> {
        self.values.lock().unwrap().clone()
    }

    fn preset<T: serde::Serialize>(&self, key: &[u8], v: &T) {
        let enc = serde_json::to_vec(v).unwrap();
        self.values.lock().unwrap().insert(key.to_vec(), enc);
    }

    pub fn preset_max_block_size(&self, v: i64) {
        self.preset(KEY_MAX_BLOCK_SIZE, &v);
    }
    pub fn preset_irreversible_slide_window(&self, v: i64) {
        self.preset(KEY_IRREVERSIBLE_SLIDE_WINDOW, &v);
    }
    pub fn preset_new_account_resource_amount(&self, v: i64) {
        self.preset(KEY_NEW_ACCOUNT_RESOURCE_AMOUNT, &v);
    }
    pub fn preset_gas_price(&self, v: &GasPrice) {
        self.preset(KEY_GAS_PRICE, v);
    }
    pub fn preset_forbidden_contract(&self, v: &InvokeRequest) {
        self.preset(KEY_FORBIDDEN_CONTRACT, v);
    }
    pub fn preset_reserved_contracts(&self, v: &[InvokeRequest]) {
        self.preset(KEY_RESERVED_CONTRACTS, &v.to_vec());
    }

    fn read_value<T>(&self, key: &[u8]) -> T
    where T: serde::de::DeserializeOwned + Default {
        match self.values.lock().unwrap().get(key) {
            Some(bts) => serde_json::from_slice(bts).unwrap_or_default(),
            None => T::default(),
        }
    }

    fn stage_value<T: serde::Serialize>(&self, key: &[u8], v: &T, batch: &mut dyn MetaBatch) -> Rerr {
        let enc = match serde_json::to_vec(v) {
            Ok(enc) => enc,
            Err(e) => return errf!("meta value encode error: {}", e),
        };
        batch.put(key, &enc);
        Ok(())
    }

    // read cache seeding and inspection
    pub fn cache_put(&self, bucket: &str, version: &str) {
        self.cache.lock().unwrap().insert((s!(bucket), s!(version)));
    }
    pub fn cache_contains(&self, bucket: &str, version: &str) -> bool {
        self.cache.lock().unwrap().contains(&(s!(bucket), s!(version)))
    }
    pub fn invalidated(&self) -> Vec<(String, String)> {
        self.invalidated.lock().unwrap().clone()
    }

    pub fn replayed_blocks(&self) -> Vec<Vec<u8>> {
        self.replayed.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

}


impl StateMeta for MemMeta {

    fn get_max_block_size(&self) -> i64 {
        self.read_value(KEY_MAX_BLOCK_SIZE)
    }
    fn update_max_block_size(&self, v: i64, batch: &mut dyn MetaBatch) -> Rerr {
        self.stage_value(KEY_MAX_BLOCK_SIZE, &v, batch)
    }

    fn get_irreversible_slide_window(&self) -> i64 {
        self.read_value(KEY_IRREVERSIBLE_SLIDE_WINDOW)
    }
    fn update_irreversible_slide_window(&self, v: i64, batch: &mut dyn MetaBatch) -> Rerr {
        self.stage_value(KEY_IRREVERSIBLE_SLIDE_WINDOW, &v, batch)
    }

    fn get_new_account_resource_amount(&self) -> i64 {
        self.read_value(KEY_NEW_ACCOUNT_RESOURCE_AMOUNT)
    }
    fn update_new_account_resource_amount(&self, v: i64, batch: &mut dyn MetaBatch) -> Rerr {
        self.stage_value(KEY_NEW_ACCOUNT_RESOURCE_AMOUNT, &v, batch)
    }

    fn get_gas_price(&self) -> GasPrice {
        self.read_value(KEY_GAS_PRICE)
    }
    fn update_gas_price(&self, v: &GasPrice, batch: &mut dyn MetaBatch) -> Rerr {
        self.stage_value(KEY_GAS_PRICE, v, batch)
    }

    fn get_forbidden_contract(&self) -> InvokeRequest {
        self.read_value(KEY_FORBIDDEN_CONTRACT)
    }
    fn update_forbidden_contract(&self, v: &InvokeRequest, batch: &mut dyn MetaBatch) -> Rerr {
        self.stage_value(KEY_FORBIDDEN_CONTRACT, v, batch)
    }

    fn get_reserved_contracts(&self) -> Vec<InvokeRequest> {
        self.read_value(KEY_RESERVED_CONTRACTS)
    }
    fn update_reserved_contracts(&self, v: &[InvokeRequest], batch: &mut dyn MetaBatch) -> Rerr {
        self.stage_value(KEY_RESERVED_CONTRACTS, &v.to_vec(), batch)
    }

    fn cache_invalidate(&self, bucket: &str, version: &str) {
        self.cache.lock().unwrap().remove(&(s!(bucket), s!(version)));
        self.invalidated.lock().unwrap().push((s!(bucket), s!(version)));
    }

    fn replay_block(&self, blockid: &[u8]) -> Rerr {
        self.replayed.lock().unwrap().push(blockid.to_vec());
        Ok(())
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

}
