

/*
* append only block log plus confirmed transaction store
*/
pub trait Ledger : Send + Sync {

    fn no_fee(&self) -> bool { false }

    fn query_transaction(&self, _txid: &[u8]) -> Ret<Transaction> { never!() }

    fn generate_root_tx(&self, _genesis: &[u8]) -> Ret<Transaction> { never!() }

    fn format_root_block(&self, _txs: Vec<Transaction>) -> Ret<Block> { never!() }

    fn confirm_block(&self, _blk: &Block, _is_root: bool) -> Rerr { never!() }

    // persist the rewrite of one confirmed transaction
    fn update_block_chain_data(&self, _txid: &str, _new_txid: &str,
        _public_key: &str, _sign: &str, _height: u64) -> Rerr { never!() }

    fn close(&self) {}

}
