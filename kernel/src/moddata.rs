

/*
* historical data rewrite of one confirmed transaction,
* authorized by a signature of the modify block address
*/

kernel_op_define!{ UpdateBlockChainData, false, true,
    run_update_block_chain_data, rollback_update_block_chain_data }


fn run_update_block_chain_data(krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let ctx = ex.context("update blockchain data")?;
    let args = validate_update_block_chain_data(desc, &krn.cnf.modify_block_addr)?;
    let Ok(mut tx) = ctx.ledger.query_transaction(&args.txid) else {
        return errf!("modified tx not exist")
    };
    // the rewrite invalidates every cached read of the target
    // extended outputs
    for (i, ext) in tx.outputs_ext.iter().enumerate() {
        let version = make_version(&tx.txid, i);
        ctx.meta.cache_invalidate(&ext.bucket, &version);
    }
    tx.desc = vec![];
    tx.outputs_ext = vec![];
    let digest = make_tx_digest_hash(&tx);
    if ! Account::verify_signature(&digest, &args.public_key, &args.sign) {
        println!("[Kernel] update blockchain data verify signature failed");
        return errf!("updateBlockChainData verify signature failed")
    }
    println!("[Kernel] update blockchain data txid {}", args.txid_hex);
    ctx.ledger.update_block_chain_data(&args.txid_hex, &desc.tx.txid_hex(),
        &args.public_key_json, &args.sign_hex, ctx.block.height)
}


// authoritative history is now the rewritten form, recovery
// is to issue a new rewrite
fn rollback_update_block_chain_data(_krn: &Kernel, ex: &mut KernelExec, _desc: &TxDesc) -> Rerr {
    ex.context("modify blockchain data")?;
    Ok(())
}
