

/*
* hot load and unload of running chains on this node
*/
pub trait ChainRegister : Send + Sync {
    fn register_block_chain(&self, _name: &str) -> Rerr { never!() }
    fn unload_block_chain(&self, _name: &str) -> Rerr { never!() }
}
