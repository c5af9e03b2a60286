use std::sync::{Arc, Mutex};

use protocol::component::BlockInfo;
use protocol::interface::TxContext;

use super::ledger::MemLedger;
use super::state::MemMeta;


// wire one tx context over the sim engines, the way the
// block apply pipeline does before each run or rollback
pub fn make_tx_context(ledger: Arc<MemLedger>, meta: Arc<MemMeta>, height: u64) -> TxContext {
    let batch = meta.make_batch();
    TxContext {
        ledger,
        meta,
        batch: Arc::new(Mutex::new(batch)),
        block: BlockInfo {
            height,
            blockid: vec![height as u8],
        },
    }
}
