use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use protocol::interface::ChainRegister;
use sys::*;


/*
* chain register double recording every load and unload request
*/
#[derive(Default)]
pub struct RecordRegister {
    registered: Mutex<Vec<String>>,
    unloaded: Mutex<Vec<String>>,
    fail_unload: AtomicBool,
}


impl RecordRegister {

    pub fn registered(&self) -> Vec<String> {
        self.registered.lock().unwrap().clone()
    }

    pub fn unloaded(&self) -> Vec<String> {
        self.unloaded.lock().unwrap().clone()
    }

    pub fn set_fail_unload(&self, fail: bool) {
        self.fail_unload.store(fail, Ordering::SeqCst);
    }

}


impl ChainRegister for RecordRegister {

    fn register_block_chain(&self, name: &str) -> Rerr {
        self.registered.lock().unwrap().push(s!(name));
        Ok(())
    }

    fn unload_block_chain(&self, name: &str) -> Rerr {
        if self.fail_unload.load(Ordering::SeqCst) {
            return errf!("chain {} unload refused", name)
        }
        self.unloaded.lock().unwrap().push(s!(name));
        Ok(())
    }

}
