

/*
* the kernel contract: in-chain administration of chain-global
* configuration and lifecycle state, one instance per chain
*/
pub struct Kernel {
    datapath: PathBuf,
    chain_name: String,
    register: Option<Arc<dyn ChainRegister>>,
    assembler: Arc<dyn ChainAssembler>,
    cnf: Arc<KernelConfig>,
    // serializes run, rollback and context setting for this chain
    exec: Mutex<KernelExec>,
}


pub struct KernelExec {
    context: Option<TxContext>,
    permission: HashMap<String, PermissionRule>,
}

impl KernelExec {
    fn context(&self, tip: &str) -> Ret<TxContext> {
        match &self.context {
            Some(ctx) => Ok(ctx.clone()),
            None => errf!("failed to {}, because no ledger object in context", tip),
        }
    }
}


kernel_op_register!{
    CreateBlockChain
    StopBlockChain
    UpdateMaxBlockSize
    UpdateIrreversibleSlideWindow
    UpdateNewAccountResourceAmount
    UpdateGasPrice
    UpdateForbiddenContract
    UpdateReservedContract
    UpdateBlockChainData
}


impl Kernel {

    pub fn init(datapath: impl Into<PathBuf>, register: Option<Arc<dyn ChainRegister>>,
        assembler: Arc<dyn ChainAssembler>, chain_name: &str, cnf: Arc<KernelConfig>) -> Kernel {
        Kernel {
            datapath: datapath.into(),
            chain_name: s!(chain_name),
            register,
            assembler,
            cnf,
            exec: Mutex::new(KernelExec {
                context: None,
                permission: HashMap::new(),
            }),
        }
    }

    pub fn chain_name(&self) -> &str {
        &self.chain_name
    }

    pub fn config(&self) -> &KernelConfig {
        &self.cnf
    }

    // permission rule bound to one method by the genesis permission block
    pub fn method_rule(&self, method: &str) -> Option<PermissionRule> {
        self.exec.lock().unwrap().permission.get(method).copied()
    }

    fn dispatch(&self, desc: &TxDesc, rollback: bool) -> Rerr {
        let mut exec = self.exec.lock().unwrap();
        let Some(op) = find_kernel_op(&desc.method) else {
            println!("[Kernel] method not implemented, method {}", desc.method);
            return Err(s!(ERR_METHOD_NOT_IMPLEMENTED))
        };
        if op.root_only() && self.chain_name != ROOT_CHAIN {
            return Err(s!(ERR_PERMISSION_DENIED))
        }
        maybe!(rollback,
            op.rollback(self, &mut exec, desc),
            op.run(self, &mut exec, desc))
    }

}


// chain lifecycle filesystem surface
impl Kernel {

    // create a new block chain from the genesis document
    pub fn create_block_chain(&self, ex: &mut KernelExec, name: &str, data: &[u8]) -> Rerr {
        println!("[Kernel] create block chain by contract from {} to create {}", self.chain_name, name);
        if self.chain_name != ROOT_CHAIN {
            println!("[Kernel] only the root chain can create side-chain, chain {}", self.chain_name);
            return Err(s!(ERR_PERMISSION_DENIED))
        }
        let fullpath = self.datapath.join(name);
        if fullpath.exists() {
            println!("[Kernel] chain path exist {}", fullpath.display());
            return Err(s!(ERR_BLOCK_CHAIN_EXIST))
        }
        if let Err(e) = fs::create_dir_all(&fullpath) {
            return errf!("cannot create path {}: {}", fullpath.display(), e)
        }
        let rootfile = fullpath.join(BLOCK_CHAIN_CONFIG_FILE);
        if let Err(e) = fs::write(&rootfile, data) {
            println!("[Kernel] write genesis file error {}", rootfile.display());
            fs::remove_dir_all(&fullpath).ok();
            return errf!("write genesis file error: {}", e)
        }
        // partial side effects must be undone before return
        if let Err(e) = self.assemble_new_chain(ex, &fullpath, name, data) {
            fs::remove_dir_all(&fullpath).ok();
            return Err(e)
        }
        Ok(())
    }

    fn assemble_new_chain(&self, ex: &mut KernelExec, fullpath: &Path,
        name: &str, data: &[u8]) -> Rerr {
        let kvengine = get_kv_engine_type(data)?;
        let crypto = get_crypto_type(data)?;
        let ledger = self.assembler.open_ledger(fullpath, &kvengine, &crypto)?;
        // close on every exit path
        let res = self.bootstrap_root_block(ex, ledger.as_ref(), fullpath, name, data, &kvengine, &crypto);
        ledger.close();
        res
    }

    fn bootstrap_root_block(&self, ex: &mut KernelExec, ledger: &dyn Ledger,
        fullpath: &Path, name: &str, data: &[u8], kvengine: &str, crypto: &str) -> Rerr {
        let tx = ledger.generate_root_tx(data)?;
        let block = match ledger.format_root_block(vec![tx]) {
            Ok(b) => b,
            Err(e) => {
                println!("[Kernel] format root block error: {}", e);
                return Err(s!(ERR_CREATE_BLOCK_CHAIN))
            },
        };
        ledger.confirm_block(&block, true)?;
        println!("[Kernel] confirm root block success, height 1");
        // the state engine opens with an empty identity
        let state = self.assembler.open_state(name, fullpath, kvengine, crypto)?;
        let res = self.replay_root_block(ex, state.as_ref(), &block, data);
        state.close();
        res
    }

    fn replay_root_block(&self, ex: &mut KernelExec, state: &dyn StateMeta,
        block: &Block, data: &[u8]) -> Rerr {
        init_permission_model(ex, data)?;
        if let Err(e) = state.replay_block(&block.blockid) {
            println!("[Kernel] state replay error {} block {}", e, hex::encode(&block.blockid));
        }
        Ok(())
    }

    // move all data of the named chain into the trash dir, never hard delete
    pub fn remove_block_chain_data(&self, name: &str) -> Rerr {
        if self.chain_name != ROOT_CHAIN {
            println!("[Kernel] only the root chain can remove side-chain, chain {}", self.chain_name);
            return Err(s!(ERR_PERMISSION_DENIED))
        }
        let fullpath = self.datapath.join(name);
        let trashpath = self.datapath.join("..").join("trash");
        if ! trashpath.exists() {
            if let Err(e) = fs::create_dir_all(&trashpath) {
                return errf!("cannot create path {}: {}", trashpath.display(), e)
            }
        }
        let random_name = format!("{}_{}", name, uniqid());
        match fs::rename(&fullpath, trashpath.join(&random_name)) {
            Ok(_) => Ok(()),
            Err(e) => errf!("move chain {} to trash error: {}", name, e),
        }
    }

}


impl Contract for Kernel {

    fn set_context(&self, ctx: TxContext) -> Rerr {
        self.exec.lock().unwrap().context = Some(ctx);
        Ok(())
    }

    fn run(&self, desc: &TxDesc) -> Rerr {
        self.dispatch(desc, false)
    }

    fn rollback(&self, desc: &TxDesc) -> Rerr {
        self.dispatch(desc, true)
    }

    fn finalize(&self, _blockid: &[u8]) -> Rerr {
        Ok(())
    }

    fn stop(&self) {}

    fn read_output(&self, _desc: &TxDesc) -> Ret<Vec<u8>> {
        Ok(vec![])
    }

}


impl VatContract for Kernel {

    fn get_verifiable_autogen_tx(&self, _height: u64, _max: usize, _ts: i64)
        -> Ret<Vec<Transaction>> {
        Ok(vec![])
    }

    // every update method plus the historical rewrite,
    // chain lifecycle excluded
    fn get_vat_white_list(&self) -> HashSet<String> {
        [
            "UpdateMaxBlockSize",
            "UpdateReservedContract",
            "UpdateForbiddenContract",
            "UpdateNewAccountResourceAmount",
            "UpdateIrreversibleSlideWindow",
            "UpdateGasPrice",
            "UpdateBlockChainData",
        ].iter().map(|m| s!(*m)).collect()
    }

}
