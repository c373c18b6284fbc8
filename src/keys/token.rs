//! Token Module
//!
//! Builds opaque API keys in three explicit stages:
//! 1. draw [`ENTROPY_BYTES`] from an [`EntropySource`]
//! 2. hash them with SHA-256 ([`digest`])
//! 3. encode the digest as URL-safe base64 with padding ([`encode`])
//!
//! Uniqueness is not checked on insert. Collisions between 256-bit random
//! inputs are treated as impossible.
//!
//! Hashing the random bytes adds nothing over encoding them directly, but the
//! resulting key format (44 chars, trailing `=`) is kept for compatibility
//! with keys already handed to clients.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::{rngs::OsRng, TryRngCore};
use sha2::{Digest, Sha256};

use crate::error::{KeyError, Result};

/// Number of random bytes drawn per key.
pub const ENTROPY_BYTES: usize = 32;

// == Entropy Source ==
/// Cryptographically secure source of random bytes.
///
/// Implementations must fail rather than fall back to a weaker generator.
pub trait EntropySource: Send + Sync + 'static {
    /// Fills `buf` entirely with random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Entropy straight from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| KeyError::RandomnessFailure(e.to_string()))
    }
}

// == Pipeline Stages ==
/// SHA-256 of `bytes`.
pub fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// URL-safe base64 with `=` padding.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}

/// Runs the full pipeline against `source`.
pub fn generate_token(source: &dyn EntropySource) -> Result<String> {
    let mut raw = [0u8; ENTROPY_BYTES];
    source.fill(&mut raw)?;
    Ok(encode(&digest(&raw)))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Fills every byte with the same value.
    struct FixedEntropy(u8);

    impl EntropySource for FixedEntropy {
        fn fill(&self, buf: &mut [u8]) -> Result<()> {
            buf.fill(self.0);
            Ok(())
        }
    }

    struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn fill(&self, _buf: &mut [u8]) -> Result<()> {
            Err(KeyError::RandomnessFailure("entropy unavailable".to_string()))
        }
    }

    #[test]
    fn test_digest_known_vector() {
        let hash = digest(&[0u8; 32]);
        assert_eq!(hash[0], 0x66);
        assert_eq!(hash[1], 0x68);
        assert_eq!(hash[31], 0x25);
    }

    #[test]
    fn test_encode_is_url_safe_and_padded() {
        assert_eq!(encode(&[0xfb, 0xff]), "-_8=");
        assert_eq!(encode(&[0u8; 32]).len(), 44);
    }

    #[test]
    fn test_generate_token_known_vector() {
        let token = generate_token(&FixedEntropy(0)).unwrap();
        assert_eq!(token, "Zmh6rfhivXdsj8GLjp-OIAiXFIVu4jOzkCpZHQ1fKSU=");

        let token = generate_token(&FixedEntropy(7)).unwrap();
        assert_eq!(token, "S7Bvjk46dxXSAdVz0KpCN2LlXavWGiwCJ4-lbMbSlOA=");
    }

    #[test]
    fn test_generate_token_propagates_failure() {
        let result = generate_token(&FailingEntropy);
        assert!(matches!(result, Err(KeyError::RandomnessFailure(_))));
    }

    #[test]
    fn test_os_entropy_tokens_distinct() {
        let tokens: HashSet<String> = (0..1000)
            .map(|_| generate_token(&OsEntropy).unwrap())
            .collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_os_entropy_token_shape() {
        let token = generate_token(&OsEntropy).unwrap();
        assert_eq!(token.len(), 44);
        assert!(token.ends_with('='));
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
    }
}
