//! CSRF state tokens for OAuth flows.

use rand::Rng;

/// Generate a cryptographically random state token.
///
/// 32 bytes from the thread-local CSPRNG, hex encoded. The caller persists the
/// value across the redirect and compares it with the `state` the provider
/// echoes back.
pub fn generate_state_token() -> String {
    let random_bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_state_token() {
        let state = generate_state_token();
        assert_eq!(state.len(), 64); // 32 bytes hex encoded
        assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_state_tokens_do_not_collide() {
        let tokens: HashSet<String> = (0..10_000).map(|_| generate_state_token()).collect();
        assert_eq!(tokens.len(), 10_000);
    }
}
