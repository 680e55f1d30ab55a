//! Device identifier generation.

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of every generated device id.
pub const DEVICE_ID_LEN: usize = 32;

/// Generate a random 32 character device id.
///
/// Each character is an independent uniform draw from the 62-symbol
/// alphanumeric alphabet. Not cryptographically secure; uniqueness is not
/// enforced and collisions are left unhandled.
pub fn generate_device_id() -> String {
    let mut rng = rand::thread_rng();
    (0..DEVICE_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_32_alphanumeric_chars() {
        for _ in 0..1000 {
            let id = generate_device_id();
            assert_eq!(id.len(), DEVICE_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn alphabet_covers_62_symbols() {
        assert_eq!(ALPHABET.len(), 62);
    }
}
