

fn put_u64(buf: &mut Vec<u8>, v: u64) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn put_bytes(buf: &mut Vec<u8>, v: &[u8]) {
    put_u64(buf, v.len() as u64);
    buf.extend_from_slice(v);
}

/*
* canonical digest of one transaction
* length prefixed field encoding, txid and signatures excluded
*/
pub fn make_tx_digest_hash(tx: &Transaction) -> [u8; 32] {
    let mut buf = Vec::new();
    put_u64(&mut buf, tx.timestamp);
    put_bytes(&mut buf, &tx.desc);
    put_u64(&mut buf, tx.from_addrs.len() as u64);
    for adr in &tx.from_addrs {
        put_bytes(&mut buf, adr.as_bytes());
    }
    put_u64(&mut buf, tx.outputs.len() as u64);
    for out in &tx.outputs {
        put_bytes(&mut buf, out.to_addr.as_bytes());
        put_u64(&mut buf, out.amount);
    }
    put_u64(&mut buf, tx.outputs_ext.len() as u64);
    for ext in &tx.outputs_ext {
        put_bytes(&mut buf, ext.bucket.as_bytes());
        put_bytes(&mut buf, &ext.key);
        put_bytes(&mut buf, &ext.value);
    }
    sha2(buf)
}
