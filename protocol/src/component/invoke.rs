

/*
* one reserved or forbidden contract invocation
* args keep sorted order so the encoding stays deterministic
*/
#[derive(Default, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InvokeRequest {
    #[serde(default)]
    pub module_name: String,
    #[serde(default)]
    pub contract_name: String,
    #[serde(default)]
    pub method_name: String,
    #[serde(default)]
    pub args: BTreeMap<String, String>,
}
