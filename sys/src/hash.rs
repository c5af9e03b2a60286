use sha2::Sha256;
use ripemd::Ripemd160;

pub const H32S: usize = 32;


pub fn sha2(data: impl AsRef<[u8]>) -> [u8; H32S] {
    use sha2::Digest;
    let mut hasher = Sha256::new();
    hasher.update(data.as_ref());
    hasher.finalize().into()
}


pub fn ripemd160(data: impl AsRef<[u8]>) -> [u8; 20] {
    use ripemd::Digest;
    let mut hasher = Ripemd160::new();
    hasher.update(data.as_ref());
    hasher.finalize().into()
}
