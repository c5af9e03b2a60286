
pub const KV_ENGINE_TYPE_DEFAULT: &str = "default";
pub const CRYPTO_TYPE_DEFAULT: &str = "default";


#[derive(Default, Debug, Clone, serde::Deserialize)]
pub struct RootConsensusConfig {
    #[serde(default, rename = "type")]
    pub name: String,
    #[serde(default)]
    pub miner: String,
}

#[derive(Default, Debug, Clone, serde::Deserialize)]
pub struct Predistribution {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub quota: String,
}

/*
* genesis document of one chain
*/
#[derive(Default, Debug, Clone, serde::Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub crypto: Option<String>,
    #[serde(default)]
    pub kvengine: Option<String>,
    #[serde(default)]
    pub consensus: Option<RootConsensusConfig>,
    #[serde(default)]
    pub predistribution: Vec<Predistribution>,
    #[serde(default)]
    pub maxblocksize: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub award: String,
    #[serde(default)]
    pub decimals: String,
    #[serde(default)]
    pub genesis_timestamp: String,
    #[serde(default)]
    pub gas_price: Option<GasPrice>,
    #[serde(default)]
    pub new_account_resource_amount: Option<i64>,
    #[serde(default)]
    pub permission: Option<serde_json::Value>,
}


impl RootConfig {
    pub fn parse(data: &[u8]) -> Ret<RootConfig> {
        match serde_json::from_slice(data) {
            Ok(cnf) => Ok(cnf),
            Err(e) => errf!("first block data error: {}", e),
        }
    }
}


fn genesis_field_string(data: &[u8], key: &str, dv: &str) -> Ret<String> {
    let jsonv: serde_json::Value = match serde_json::from_slice(data) {
        Ok(v) => v,
        Err(e) => return errf!("genesis json parse error: {}", e),
    };
    match jsonv.get(key) {
        None => Ok(s!(dv)),
        Some(serde_json::Value::Null) => Ok(s!(dv)),
        Some(v) => {
            let Some(v) = v.as_str() else {
                return errf!("the type of {} should be string", key)
            };
            Ok(s!(v))
        },
    }
}

// kv engine implementation selected by the genesis document
pub fn get_kv_engine_type(data: &[u8]) -> Ret<String> {
    genesis_field_string(data, "kvengine", KV_ENGINE_TYPE_DEFAULT)
}

// crypto implementation selected by the genesis document
pub fn get_crypto_type(data: &[u8]) -> Ret<String> {
    genesis_field_string(data, "crypto", CRYPTO_TYPE_DEFAULT)
}
