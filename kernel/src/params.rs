

/*
* guarded parameter updates: the descriptor carries old and new,
* forward compares old against the live value and writes new,
* rollback writes old without comparison
*/

macro_rules! i64_param_op {
    ($runfn:ident, $backfn:ident, $oldkey:expr, $newkey:expr,
        $get:ident, $update:ident, $label:expr) => {

        fn $runfn(_krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
            let ctx = ex.context(&format!("update {}", $label))?;
            let newv = desc.arg_i64($newkey)?;
            let oldv = desc.arg_i64($oldkey)?;
            println!("[Kernel] update {} old {} new {}", $label, oldv, newv);
            let cur = ctx.meta.$get();
            if oldv != cur {
                return errf!("unexpected old {}, got {}, expected: {}", $label, oldv, cur)
            }
            let mut batch = ctx.batch.lock().unwrap();
            ctx.meta.$update(newv, batch.as_mut())
        }

        fn $backfn(_krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
            let ctx = ex.context(&format!("rollback {}", $label))?;
            desc.arg_i64($newkey)?; // rollback validates the full descriptor
            let oldv = desc.arg_i64($oldkey)?;
            let mut batch = ctx.batch.lock().unwrap();
            ctx.meta.$update(oldv, batch.as_mut())
        }

    };
}


kernel_op_define!{ UpdateMaxBlockSize, false, false,
    run_update_max_block_size, rollback_update_max_block_size }

kernel_op_define!{ UpdateIrreversibleSlideWindow, false, false,
    run_update_irreversible_slide_window, rollback_update_irreversible_slide_window }

kernel_op_define!{ UpdateNewAccountResourceAmount, false, false,
    run_update_new_account_resource_amount, rollback_update_new_account_resource_amount }

kernel_op_define!{ UpdateGasPrice, false, false,
    run_update_gas_price, rollback_update_gas_price }

kernel_op_define!{ UpdateForbiddenContract, false, false,
    run_update_forbidden_contract, rollback_update_forbidden_contract }

kernel_op_define!{ UpdateReservedContract, false, false,
    run_update_reserved_contract, rollback_update_reserved_contract }


i64_param_op!{ run_update_max_block_size, rollback_update_max_block_size,
    "old_block_size", "new_block_size",
    get_max_block_size, update_max_block_size, "max block size" }

i64_param_op!{ run_update_irreversible_slide_window, rollback_update_irreversible_slide_window,
    "old_irreversible_slide_window", "new_irreversible_slide_window",
    get_irreversible_slide_window, update_irreversible_slide_window, "irreversible slide window" }

i64_param_op!{ run_update_new_account_resource_amount, rollback_update_new_account_resource_amount,
    "old_new_account_resource_amount", "new_new_account_resource_amount",
    get_new_account_resource_amount, update_new_account_resource_amount, "new account resource amount" }


fn run_update_gas_price(_krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let ctx = ex.context("update gas price")?;
    let old_params = validate_gas_price(desc, "old_gas_price")?;
    let original = ctx.meta.get_gas_price();
    if old_params.cpu_rate != original.cpu_rate
        || old_params.mem_rate != original.mem_rate
        || old_params.disk_rate != original.disk_rate
        || old_params.xfee_rate != original.xfee_rate {
        return errf!("old_gas_price values are not equal to the current node")
    }
    let new_gas_price = validate_gas_price(desc, "new_gas_price")?;
    println!("[Kernel] update gas price {:?}", new_gas_price);
    let mut batch = ctx.batch.lock().unwrap();
    ctx.meta.update_gas_price(&new_gas_price, batch.as_mut())
}


fn rollback_update_gas_price(_krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let ctx = ex.context("rollback gas price")?;
    let old_params = validate_gas_price(desc, "old_gas_price")?;
    println!("[Kernel] rollback gas price {:?}", old_params);
    let mut batch = ctx.batch.lock().unwrap();
    ctx.meta.update_gas_price(&old_params, batch.as_mut())
}


fn run_update_forbidden_contract(_krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let ctx = ex.context("update forbidden contract")?;
    let old_params = validate_invoke_request(desc, "old_forbidden_contract")?;
    println!("[Kernel] run update forbidden contract old {:?}", old_params);
    let original = ctx.meta.get_forbidden_contract();
    if original.module_name != old_params.module_name
        || original.contract_name != old_params.contract_name
        || original.method_name != old_params.method_name
        || original.args.len() != old_params.args.len() {
        return errf!("old_forbidden_contract conf doesn't match current node forbidden_contract conf")
    }
    for (key, val) in &old_params.args {
        match original.args.get(key) {
            Some(ov) if ov == val => {},
            _ => return errf!("old_forbidden_contract args doesn't match current node forbidden_contract args"),
        }
    }
    let params = validate_invoke_request(desc, "new_forbidden_contract")?;
    println!("[Kernel] update forbidden contract {:?}", params);
    let mut batch = ctx.batch.lock().unwrap();
    ctx.meta.update_forbidden_contract(&params, batch.as_mut())
}


fn rollback_update_forbidden_contract(_krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let ctx = ex.context("rollback forbidden contract")?;
    let params = validate_invoke_request(desc, "old_forbidden_contract")?;
    println!("[Kernel] rollback forbidden contract {:?}", params);
    let mut batch = ctx.batch.lock().unwrap();
    ctx.meta.update_forbidden_contract(&params, batch.as_mut())
}


fn run_update_reserved_contract(_krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let ctx = ex.context("update reserved contract")?;
    let old_params = validate_reserved_contracts(desc, "old_reserved_contracts")?;
    println!("[Kernel] run update reserved contract old count {}", old_params.len());
    let originals = ctx.meta.get_reserved_contracts();
    if old_params.len() != originals.len() {
        return errf!("old_reserved_contracts values are not equal to the current node")
    }
    for (vold, vorig) in old_params.iter().zip(originals.iter()) {
        if vold.module_name != vorig.module_name
            || vold.contract_name != vorig.contract_name
            || vold.method_name != vorig.method_name
            || vold.args.len() != vorig.args.len() {
            return errf!("old_reserved_contracts values are not equal to the current node")
        }
        for (key, val) in &vold.args {
            match vorig.args.get(key) {
                Some(ov) if ov == val => {},
                _ => return errf!("old_reserved_contracts values are not equal to the current node"),
            }
        }
    }
    let params = validate_reserved_contracts(desc, "new_reserved_contracts")?;
    println!("[Kernel] update reserved contract new count {}", params.len());
    let mut batch = ctx.batch.lock().unwrap();
    ctx.meta.update_reserved_contracts(&params, batch.as_mut())
}


fn rollback_update_reserved_contract(_krn: &Kernel, ex: &mut KernelExec, desc: &TxDesc) -> Rerr {
    let ctx = ex.context("rollback reserved contract")?;
    let params = validate_reserved_contracts(desc, "old_reserved_contracts")?;
    println!("[Kernel] rollback reserved contract count {}", params.len());
    let mut batch = ctx.batch.lock().unwrap();
    ctx.meta.update_reserved_contracts(&params, batch.as_mut())
}
