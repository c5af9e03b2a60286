

/*
* init permission model of the kernel contract from the
* genesis permission block: { "<method>": { "rule": "<keyword>" } }
* unknown keywords and malformed shapes warn and are ignored
*/
fn init_permission_model(ex: &mut KernelExec, data: &[u8]) -> Rerr {
    let jsonv: serde_json::Value = match serde_json::from_slice(data) {
        Ok(v) => v,
        Err(e) => {
            println!("[Kernel] permission model data parse error: {}", e);
            return errf!("permission model data parse error: {}", e)
        },
    };
    let Some(permv) = jsonv.get("permission") else {
        return Ok(())
    };
    if permv.is_null() {
        return Ok(())
    }
    let Some(modelset) = permv.as_object() else {
        println!("[Kernel] permission field error in config");
        return Ok(())
    };
    for (method, model) in modelset {
        let Some(item) = model.as_object() else {
            println!("[Kernel] permission model parse error, method {}", method);
            continue
        };
        let Some(rulev) = item.get("rule") else {
            println!("[Kernel] permission rule item parse error, method {}", method);
            continue
        };
        let Some(keyword) = rulev.as_str() else {
            println!("[Kernel] permission rule keyword parse error, method {}", method);
            continue
        };
        let Some(rule) = PermissionRule::from_keyword(keyword) else {
            println!("[Kernel] get permission rule by keyword error, method {} rule {}", method, keyword);
            continue
        };
        if rule == PermissionRule::Null {
            println!("[Kernel] contract method {} initialized with null permission rule", method);
            continue
        }
        ex.permission.insert(method.clone(), rule);
    }
    Ok(())
}
