

/*
* opens the storage engines of one chain directory,
* implementation selected by the genesis kvengine / crypto fields
*/
pub trait ChainAssembler : Send + Sync {

    fn open_ledger(&self, _path: &Path, _kvengine: &str, _crypto: &str)
        -> Ret<Arc<dyn Ledger>> { never!() }

    fn open_state(&self, _name: &str, _path: &Path, _kvengine: &str, _crypto: &str)
        -> Ret<Arc<dyn StateMeta>> { never!() }

}
