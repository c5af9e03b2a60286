
// error surface strings, part of the de-facto caller interface
pub const ERR_BLOCK_CHAIN_EXIST: &str = "BlockChain Exist";
pub const ERR_CREATE_BLOCK_CHAIN: &str = "Create BlockChain error";
pub const ERR_METHOD_NOT_IMPLEMENTED: &str = "Method not implemented";
pub const ERR_NO_ENOUGH_UTXO: &str = "No enough money to create new chain";
pub const ERR_ADDR_NOT_IN_WHITE_LIST: &str = "Address not in white list";
pub const ERR_PERMISSION_DENIED: &str = "Permission denied to call this contract";
pub const ERR_INVALID_CHAIN_NAME: &str = "Invalid Chain name";
