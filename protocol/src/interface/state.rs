

/*
* staging batch of one executing transaction,
* committed by the surrounding tx handler
*/
pub trait MetaBatch : Send {
    fn put(&mut self, _: &[u8], _: &[u8]) { never!() }
    fn del(&mut self, _: &[u8]) { never!() }
}


/*
* durable chain-global configuration store
*/
pub trait StateMeta : Send + Sync {

    fn get_max_block_size(&self) -> i64 { never!() }
    fn update_max_block_size(&self, _: i64, _: &mut dyn MetaBatch) -> Rerr { never!() }

    fn get_irreversible_slide_window(&self) -> i64 { never!() }
    fn update_irreversible_slide_window(&self, _: i64, _: &mut dyn MetaBatch) -> Rerr { never!() }

    fn get_new_account_resource_amount(&self) -> i64 { never!() }
    fn update_new_account_resource_amount(&self, _: i64, _: &mut dyn MetaBatch) -> Rerr { never!() }

    fn get_gas_price(&self) -> GasPrice { never!() }
    fn update_gas_price(&self, _: &GasPrice, _: &mut dyn MetaBatch) -> Rerr { never!() }

    fn get_forbidden_contract(&self) -> InvokeRequest { never!() }
    fn update_forbidden_contract(&self, _: &InvokeRequest, _: &mut dyn MetaBatch) -> Rerr { never!() }

    fn get_reserved_contracts(&self) -> Vec<InvokeRequest> { never!() }
    fn update_reserved_contracts(&self, _: &[InvokeRequest], _: &mut dyn MetaBatch) -> Rerr { never!() }

    // evict one read cache entry of the state model
    fn cache_invalidate(&self, _bucket: &str, _version: &str) { never!() }

    // replay one confirmed block into the state
    fn replay_block(&self, _blockid: &[u8]) -> Rerr { never!() }

    fn close(&self) {}

}
