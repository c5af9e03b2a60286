use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use protocol::component::{Block, Transaction};
use protocol::interface::Ledger;
use sys::*;


#[derive(Debug, Clone)]
pub struct RewriteRecord {
    pub txid: String,
    pub new_txid: String,
    pub public_key: String,
    pub sign: String,
    pub height: u64,
}


/*
* in-memory ledger double: confirmed tx table plus
* a record of every historical rewrite
*/
pub struct MemLedger {
    no_fee: bool,
    txs: Mutex<HashMap<Vec<u8>, Transaction>>,
    confirmed: Mutex<Vec<Block>>,
    rewrites: Mutex<Vec<RewriteRecord>>,
    closed: AtomicBool,
}


impl MemLedger {

    pub fn new(no_fee: bool) -> Arc<MemLedger> {
        Arc::new(MemLedger {
            no_fee,
            txs: Mutex::new(HashMap::new()),
            confirmed: Mutex::new(vec![]),
            rewrites: Mutex::new(vec![]),
            closed: AtomicBool::new(false),
        })
    }

    pub fn insert_transaction(&self, tx: Transaction) {
        self.txs.lock().unwrap().insert(tx.txid.clone(), tx);
    }

    pub fn rewrites(&self) -> Vec<RewriteRecord> {
        self.rewrites.lock().unwrap().clone()
    }

    pub fn confirmed_count(&self) -> usize {
        self.confirmed.lock().unwrap().len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

}


impl Ledger for MemLedger {

    fn no_fee(&self) -> bool {
        self.no_fee
    }

    fn query_transaction(&self, txid: &[u8]) -> Ret<Transaction> {
        match self.txs.lock().unwrap().get(txid) {
            Some(tx) => Ok(tx.clone()),
            None => errf!("transaction {} not found", hex::encode(txid)),
        }
    }

    fn generate_root_tx(&self, genesis: &[u8]) -> Ret<Transaction> {
        let tx = Transaction {
            txid: sha2(genesis).to_vec(),
            timestamp: 0,
            desc: genesis.to_vec(),
            ..Default::default()
        };
        Ok(tx)
    }

    fn format_root_block(&self, txs: Vec<Transaction>) -> Ret<Block> {
        let mut idbuf = Vec::new();
        for tx in &txs {
            idbuf.extend_from_slice(&tx.txid);
        }
        Ok(Block {
            height: 1,
            blockid: sha2(idbuf).to_vec(),
            transactions: txs,
        })
    }

    fn confirm_block(&self, blk: &Block, _is_root: bool) -> Rerr {
        for tx in &blk.transactions {
            self.insert_transaction(tx.clone());
        }
        self.confirmed.lock().unwrap().push(blk.clone());
        Ok(())
    }

    fn update_block_chain_data(&self, txid: &str, new_txid: &str,
        public_key: &str, sign: &str, height: u64) -> Rerr {
        let Ok(rawid) = hex::decode(txid) else {
            return errf!("bad txid {}", txid)
        };
        let mut txs = self.txs.lock().unwrap();
        let Some(tx) = txs.get_mut(rawid.as_slice()) else {
            return errf!("transaction {} not found", txid)
        };
        tx.desc = vec![];
        tx.outputs_ext = vec![];
        self.rewrites.lock().unwrap().push(RewriteRecord {
            txid: s!(txid),
            new_txid: s!(new_txid),
            public_key: s!(public_key),
            sign: s!(sign),
            height,
        });
        Ok(())
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

}
