

/*
* per transaction execution context,
* set by the contract framework before each run or rollback
*/
#[derive(Clone)]
pub struct TxContext {
    pub ledger: Arc<dyn Ledger>,
    pub meta: Arc<dyn StateMeta>,
    pub batch: Arc<Mutex<Box<dyn MetaBatch>>>,
    pub block: BlockInfo,
}


/*
* in-chain contract entry points
*/
pub trait Contract : Send + Sync {
    fn set_context(&self, _: TxContext) -> Rerr { never!() }
    fn run(&self, _: &TxDesc) -> Rerr { never!() }
    fn rollback(&self, _: &TxDesc) -> Rerr { never!() }
    fn finalize(&self, _blockid: &[u8]) -> Rerr { Ok(()) }
    fn stop(&self) {}
    fn read_output(&self, _: &TxDesc) -> Ret<Vec<u8>> { Ok(vec![]) }
}


/*
* verifiable administration transaction surface
*/
pub trait VatContract : Send + Sync {
    fn get_verifiable_autogen_tx(&self, _height: u64, _max: usize, _ts: i64)
        -> Ret<Vec<Transaction>> { Ok(vec![]) }
    fn get_vat_white_list(&self) -> HashSet<String> { never!() }
}
