use super::compute_checksum;
use crate::base58;

fn extend_input(input: impl AsRef<[u8]>) -> Vec<u8> {
    let mut input = input.as_ref().to_vec();
    let checksum = compute_checksum(&input);
    input.extend_from_slice(&checksum);
    input
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    base58::encode(extend_input(input))
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode([0x00; 21]), "1111111111111111111114oLvT2");
        assert_eq!(super::encode([]), "3QJmnh");
    }
}
