

/*
* the block carrying the current transaction
*/
#[derive(Default, Debug, Clone)]
pub struct BlockInfo {
    pub height: u64,
    pub blockid: Vec<u8>,
}


#[derive(Default, Debug, Clone)]
pub struct Block {
    pub height: u64,
    pub blockid: Vec<u8>,
    pub transactions: Vec<Transaction>,
}
