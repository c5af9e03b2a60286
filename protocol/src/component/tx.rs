

/*
* transfer output of one transaction
*/
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TxOutput {
    pub to_addr: String,
    pub amount: u64,
}

/*
* extended output writing one state model key
*/
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TxOutputExt {
    pub bucket: String,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}


#[derive(Default, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub txid: Vec<u8>,
    pub timestamp: u64,
    pub desc: Vec<u8>,
    pub from_addrs: Vec<String>,
    pub outputs: Vec<TxOutput>,
    pub outputs_ext: Vec<TxOutputExt>,
}


impl Transaction {

    pub fn from_addr_in_list(&self, list: &HashSet<String>) -> bool {
        self.from_addrs.iter().any(|a| list.contains(a))
    }

    // total amount paid to one address
    pub fn amount_to(&self, addr: &str) -> BigUint {
        let mut total = BigUint::default();
        for out in &self.outputs {
            if out.to_addr == addr {
                total += BigUint::from(out.amount);
            }
        }
        total
    }

    pub fn txid_hex(&self) -> String {
        hex::encode(&self.txid)
    }

}


// state model version mark of one extended output
pub fn make_version(txid: &[u8], offset: usize) -> String {
    format!("{}_{}", hex::encode(txid), offset)
}
