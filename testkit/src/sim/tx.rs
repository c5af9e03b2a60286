use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use protocol::component::{Transaction, TxDesc, TxOutput, TxOutputExt};
use sys::*;


static TX_SEQ: AtomicU64 = AtomicU64::new(1);

fn next_txid() -> Vec<u8> {
    let seq = TX_SEQ.fetch_add(1, Ordering::SeqCst);
    sha2(seq.to_be_bytes()).to_vec()
}


pub fn make_stub_tx(from_addrs: Vec<&str>, outputs: Vec<(&str, u64)>) -> Transaction {
    Transaction {
        txid: next_txid(),
        timestamp: curtimes(),
        desc: vec![],
        from_addrs: from_addrs.into_iter().map(|a| s!(a)).collect(),
        outputs: outputs.into_iter().map(|(to, amount)| TxOutput {
            to_addr: s!(to),
            amount,
        }).collect(),
        outputs_ext: vec![],
    }
}


pub fn make_ext_output(bucket: &str, key: &[u8], value: &[u8]) -> TxOutputExt {
    TxOutputExt {
        bucket: s!(bucket),
        key: key.to_vec(),
        value: value.to_vec(),
    }
}


// one kernel transaction carrying the descriptor json
pub fn make_kernel_tx(method: &str, args: serde_json::Value,
    from_addrs: Vec<&str>, outputs: Vec<(&str, u64)>) -> Transaction {
    let mut tx = make_stub_tx(from_addrs, outputs);
    let descv = serde_json::json!({
        "module": "kernel",
        "method": method,
        "args": args,
    });
    tx.desc = serde_json::to_vec(&descv).unwrap();
    tx
}


pub fn make_kernel_desc(method: &str, args: serde_json::Value,
    from_addrs: Vec<&str>, outputs: Vec<(&str, u64)>) -> TxDesc {
    let tx = make_kernel_tx(method, args.clone(), from_addrs, outputs);
    TxDesc::from_tx(Arc::new(tx)).unwrap()
}
