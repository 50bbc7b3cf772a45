//! Node identifiers.

use rand::Rng;

/// DID method used for nodes registered on the SOON network
pub const DEFAULT_DID_METHOD: &str = "soon";

/// Length of the random part of a generated DID
pub const DEFAULT_DID_LENGTH: usize = 23;

/// Length used when a zero length is requested
const FALLBACK_DID_LENGTH: usize = 55;

const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generate `did:<method>:<random base58 characters>`.
#[must_use]
pub fn generate_did(method: &str, length: usize) -> String {
    let length = if length == 0 {
        FALLBACK_DID_LENGTH
    } else {
        length
    };

    let mut rng = rand::thread_rng();
    let id: String = (0..length)
        .map(|_| char::from(BASE58_ALPHABET[rng.gen_range(0..BASE58_ALPHABET.len())]))
        .collect();

    format!("did:{method}:{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn did_has_method_and_length() {
        let did = generate_did(DEFAULT_DID_METHOD, DEFAULT_DID_LENGTH);
        let id = did.strip_prefix("did:soon:").unwrap();
        assert_eq!(id.len(), DEFAULT_DID_LENGTH);
        assert!(id.bytes().all(|b| BASE58_ALPHABET.contains(&b)));
    }

    #[test]
    fn zero_length_falls_back() {
        let did = generate_did("test", 0);
        assert_eq!(did.len(), "did:test:".len() + FALLBACK_DID_LENGTH);
    }

    #[test]
    fn dids_differ() {
        assert_ne!(generate_did("soon", 23), generate_did("soon", 23));
    }
}
