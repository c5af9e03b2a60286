

/*
* chain lifecycle methods
*/

kernel_op_define!{ CreateBlockChain, true, false,
    run_create_block_chain, rollback_create_block_chain }

kernel_op_define!{ StopBlockChain, true, true,
    run_stop_block_chain, rollback_stop_block_chain }


fn run_create_block_chain(krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let (name, data) = validate_create_bc(desc)?;
    println!("[Kernel] contract create block chain from {} to create {}", krn.chain_name, name);
    if krn.chain_name != ROOT_CHAIN {
        println!("[Kernel] only the root chain can create side-chain, chain {}", krn.chain_name);
        return Err(s!(ERR_PERMISSION_DENIED))
    }
    let cnf = &krn.cnf;
    if ! desc.tx.from_addr_in_list(&cnf.new_chain_whitelist) && ! cnf.disable_create_chain_whitelist {
        println!("[Kernel] tx from addr not in whitelist to create blockchain");
        return Err(s!(ERR_ADDR_NOT_IN_WHITE_LIST))
    }
    let ctx = ex.context("create block chain")?;
    let nofee = ctx.ledger.no_fee();
    let investment = desc.tx.amount_to(&name);
    let min_amount = cnf.min_new_chain_amount_big();
    println!("[Kernel] create blockchain {} investment {} need {} nofee {}",
        name, investment, min_amount, nofee);
    if ! nofee && investment < min_amount {
        return Err(s!(ERR_NO_ENOUGH_UTXO))
    }
    if let Err(e) = krn.create_block_chain(ex, &name, data.as_bytes()) {
        if e == ERR_BLOCK_CHAIN_EXIST {
            return Ok(()) // idempotent creation
        }
        return Err(e)
    }
    if let Some(register) = &krn.register {
        println!("[Kernel] register block chain {}", name);
        return register.register_block_chain(&name)
    }
    Ok(())
}


fn rollback_create_block_chain(krn: &Kernel, _ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let (name, _) = validate_create_bc(desc)?;
    let fullpath = krn.datapath.join(&name);
    if ! fullpath.exists() {
        return Ok(()) // no need to rollback
    }
    krn.remove_block_chain_data(&name)?;
    if let Some(register) = &krn.register {
        return register.unload_block_chain(&name)
    }
    Ok(())
}


// stop one running side-chain, the chain directory is kept
fn run_stop_block_chain(krn: &Kernel, _ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let cnf = &krn.cnf;
    if ! cnf.enable_stop_chain {
        println!("[Kernel] cannot stop any blockchain, configure enable_stop_chain of the kernel section");
        return Err(s!(ERR_PERMISSION_DENIED))
    }
    let name = validate_stop_bc(desc)?;
    if name == ROOT_CHAIN {
        println!("[Kernel] the root chain cannot be stopped");
        return Err(s!(ERR_PERMISSION_DENIED))
    }
    if ! desc.tx.from_addr_in_list(&cnf.new_chain_whitelist) && ! cnf.disable_create_chain_whitelist {
        println!("[Kernel] tx from addr not in whitelist to stop blockchain");
        return Err(s!(ERR_ADDR_NOT_IN_WHITE_LIST))
    }
    let Some(register) = &krn.register else {
        println!("[Kernel] no chain register wired, stop {} skipped", name);
        return Ok(())
    };
    if let Err(e) = register.unload_block_chain(&name) {
        // tolerated, the chain may be already offline
        println!("[Kernel] stop blockchain {} failed: {}", name, e);
        return Ok(())
    }
    println!("[Kernel] stop blockchain {} successfully", name);
    Ok(())
}


// once a chain is unloaded the state needed to undo the stop
// is not available, accepted asymmetry
fn rollback_stop_block_chain(krn: &Kernel, _ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    if ! krn.cnf.enable_stop_chain {
        return Err(s!(ERR_PERMISSION_DENIED))
    }
    validate_stop_bc(desc)?;
    Ok(())
}
