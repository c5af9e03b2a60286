use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use protocol::interface::{ChainAssembler, Ledger, StateMeta};
use sys::*;

use super::ledger::MemLedger;
use super::state::MemMeta;


/*
* chain assembler double: every opened engine stays reachable
* so tests can assert it was closed on exit
*/
#[derive(Default)]
pub struct SimAssembler {
    ledgers: Mutex<Vec<Arc<MemLedger>>>,
    states: Mutex<Vec<Arc<MemMeta>>>,
    fail_open_ledger: AtomicBool,
    fail_open_state: AtomicBool,
}


impl SimAssembler {

    pub fn new() -> Arc<SimAssembler> {
        Arc::new(SimAssembler::default())
    }

    pub fn opened_ledgers(&self) -> Vec<Arc<MemLedger>> {
        self.ledgers.lock().unwrap().clone()
    }

    pub fn opened_states(&self) -> Vec<Arc<MemMeta>> {
        self.states.lock().unwrap().clone()
    }

    pub fn set_fail_open_ledger(&self, fail: bool) {
        self.fail_open_ledger.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_open_state(&self, fail: bool) {
        self.fail_open_state.store(fail, Ordering::SeqCst);
    }

}


impl ChainAssembler for SimAssembler {

    fn open_ledger(&self, path: &Path, _kvengine: &str, _crypto: &str)
        -> Ret<Arc<dyn Ledger>> {
        if self.fail_open_ledger.load(Ordering::SeqCst) {
            return errf!("open ledger {} refused", path.display())
        }
        let ledger = MemLedger::new(true);
        self.ledgers.lock().unwrap().push(ledger.clone());
        Ok(ledger)
    }

    fn open_state(&self, _name: &str, path: &Path, _kvengine: &str, _crypto: &str)
        -> Ret<Arc<dyn StateMeta>> {
        if self.fail_open_state.load(Ordering::SeqCst) {
            return errf!("open state {} refused", path.display())
        }
        let state = MemMeta::new();
        self.states.lock().unwrap().push(state.clone());
        Ok(state)
    }

}
