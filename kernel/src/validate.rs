

/*
* per method argument validators
* pure: typed extraction only, no ledger reads
*/


// returns (name, genesis data)
fn validate_create_bc(desc: &TxDesc) -> Ret<(String, String)> {
    let Some(namev) = desc.args.get("name") else {
        return errf!("block chain name is empty")
    };
    let Some(name) = namev.as_str() else {
        return errf!("the type of name should be string")
    };
    if name.is_empty() {
        return errf!("block chain name is empty")
    }
    let Some(datav) = desc.args.get("data") else {
        return errf!("first block data is empty")
    };
    let Some(data) = datav.as_str() else {
        return errf!("the type of data should be string")
    };
    // reject malformed genesis before any filesystem mutation
    RootConfig::parse(data.as_bytes())?;
    Ok((s!(name), s!(data)))
}


fn validate_stop_bc(desc: &TxDesc) -> Ret<String> {
    let Some(namev) = desc.args.get("name") else {
        return Err(s!(ERR_INVALID_CHAIN_NAME))
    };
    let Some(name) = namev.as_str() else {
        return Err(s!(ERR_INVALID_CHAIN_NAME))
    };
    if name.is_empty() {
        return Err(s!(ERR_INVALID_CHAIN_NAME))
    }
    Ok(s!(name))
}


fn validate_gas_price(desc: &TxDesc, name: &str) -> Ret<GasPrice> {
    let v = desc.arg(name)?;
    match serde_json::from_value::<GasPrice>(v.clone()) {
        Ok(g) => Ok(g),
        Err(e) => errf!("invalid arg {}: {}", name, e),
    }
}


fn validate_invoke_request(desc: &TxDesc, name: &str) -> Ret<InvokeRequest> {
    let v = desc.arg(name)?;
    if ! v.is_object() {
        return errf!("invalid arg type: {}", name)
    }
    match serde_json::from_value::<InvokeRequest>(v.clone()) {
        Ok(r) => Ok(r),
        Err(e) => errf!("invalid arg {}: {}", name, e),
    }
}


// both lists must be present and parseable even when
// only one of them is the subject of the call
fn validate_reserved_contracts(desc: &TxDesc, name: &str) -> Ret<Vec<InvokeRequest>> {
    let mut result = vec![];
    for arg_name in ["old_reserved_contracts", "new_reserved_contracts"] {
        let list = desc.arg_list(arg_name)?;
        let mut params = Vec::with_capacity(list.len());
        for item in &list {
            let req = match serde_json::from_value::<InvokeRequest>(item.clone()) {
                Ok(r) => r,
                Err(e) => return errf!("invalid arg {}: {}", arg_name, e),
            };
            params.push(req);
        }
        for line in &params {
            if line.module_name.is_empty() {
                return errf!("reserved contract element missing module_name")
            }
        }
        if arg_name == name {
            result = params;
        }
    }
    Ok(result)
}


#[derive(serde::Deserialize)]
struct EcPublicKey {
    #[serde(default)]
    curvname: String,
    #[serde(default)]
    pubkey: String,
}

#[derive(Debug)]
pub struct ModDataArgs {
    pub txid: Vec<u8>,
    pub txid_hex: String,
    pub public_key: [u8; PUBLIC_SIZE],
    pub public_key_json: String,
    pub sign: [u8; 64],
    pub sign_hex: String,
}

fn validate_update_block_chain_data(desc: &TxDesc, modify_addr: &str) -> Ret<ModDataArgs> {
    if desc.args.get("txid").is_none()
        || desc.args.get("publicKey").is_none()
        || desc.args.get("sign").is_none() {
        return errf!("miss argument in contract: txid, publicKey, sign")
    }
    let Some(txid_hex) = desc.args["txid"].as_str() else {
        return errf!("invalid arg type: txid")
    };
    let Some(public_key_json) = desc.args["publicKey"].as_str() else {
        return errf!("invalid arg type: publicKey")
    };
    let eckey: EcPublicKey = match serde_json::from_str(public_key_json) {
        Ok(k) => k,
        Err(e) => return errf!("invalid publicKey json: {}", e),
    };
    if eckey.curvname != "secp256k1" {
        return errf!("public key curve {} not support", eckey.curvname)
    }
    let Ok(pkbts) = hex::decode(&eckey.pubkey) else {
        return errf!("invalid publicKey hex")
    };
    let Ok(public_key) = <[u8; PUBLIC_SIZE]>::try_from(pkbts) else {
        return errf!("invalid publicKey size")
    };
    if ! Account::address_match_public_key(modify_addr, &public_key) {
        return errf!("address and public key not match")
    }
    let Some(sign_hex) = desc.args["sign"].as_str() else {
        return errf!("invalid arg type: sign")
    };
    let Ok(signbts) = hex::decode(sign_hex) else {
        return errf!("invalid sign hex")
    };
    let Ok(sign) = <[u8; 64]>::try_from(signbts) else {
        return errf!("invalid sign size")
    };
    let Ok(txid) = hex::decode(txid_hex) else {
        return errf!("validate updateBlockChainData bad txid: {}", txid_hex)
    };
    Ok(ModDataArgs {
        txid,
        txid_hex: s!(txid_hex),
        public_key,
        public_key_json: s!(public_key_json),
        sign,
        sign_hex: s!(sign_hex),
    })
}
