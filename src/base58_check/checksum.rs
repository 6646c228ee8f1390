use sha2::{
    digest::{consts::U32, generic_array::GenericArray},
    Digest, Sha256,
};

pub const CHECKSUM_LENGTH: usize = 4;

fn sha256(buffer: impl AsRef<[u8]>) -> GenericArray<u8, U32> {
    let mut hasher = Sha256::new();
    hasher.update(buffer);
    hasher.finalize()
}

pub fn compute_checksum(buffer: impl AsRef<[u8]>) -> [u8; CHECKSUM_LENGTH] {
    let hash = sha256(sha256(buffer));
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&hash[..CHECKSUM_LENGTH]);
    checksum
}

#[cfg(test)]
mod tests {
    #[test]
    fn compute_checksum() {
        assert_eq!(super::compute_checksum(b""), [0x5d, 0xf6, 0xe0, 0xe2]);
    }
}
