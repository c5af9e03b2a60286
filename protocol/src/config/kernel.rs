
// the root chain of this node, the only chain allowed to
// execute root-only kernel methods
pub const ROOT_CHAIN: &str = "xuper";

// genesis file name inside each chain directory
pub const BLOCK_CHAIN_CONFIG_FILE: &str = "xuper.json";


/*
* immutable kernel contract configuration, read once at node start
*/
#[derive(Default, Debug, Clone)]
pub struct KernelConfig {
    pub new_chain_whitelist: HashSet<String>,
    pub disable_create_chain_whitelist: bool,
    pub min_new_chain_amount: String,
    pub enable_stop_chain: bool,
    pub modify_block_addr: String,
}


impl KernelConfig {

    pub fn new(ini: &IniObj) -> KernelConfig {

        let sec = ini_section(ini, "kernel");

        KernelConfig {
            new_chain_whitelist: ini_must_list(&sec, "new_chain_whitelist").into_iter().collect(),
            disable_create_chain_whitelist: ini_must_bool(&sec, "disable_create_chain_whitelist", false),
            min_new_chain_amount: ini_must(&sec, "min_new_chain_amount", "0"),
            enable_stop_chain: ini_must_bool(&sec, "enable_stop_chain", false),
            modify_block_addr: ini_must(&sec, "modify_block_addr", ""),
        }
    }

    pub fn min_new_chain_amount_big(&self) -> BigUint {
        BigUint::parse_bytes(self.min_new_chain_amount.as_bytes(), 10)
            .unwrap_or_default()
    }

}
