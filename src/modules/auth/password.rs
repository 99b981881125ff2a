use rand::Rng;
use sha2::{Digest, Sha256};

/// Characters a generated password may contain: ASCII letters, digits and punctuation
pub const PASSWORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One-way digest of a password, as lowercase hex SHA-256 of its UTF-8 bytes
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Generate a random password of `length` characters drawn from `PASSWORD_ALPHABET`
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_PASSWORD_LENGTH;

    #[test]
    fn test_hash_is_deterministic_digest() {
        let digest = hash_password("Password123!");
        assert_eq!(digest, hash_password("Password123!"));
        assert_ne!(digest, "Password123!");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        assert_ne!(digest, hash_password("Password123?"));

        // Known SHA-256 vector
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_uses_utf8_bytes() {
        assert_eq!(hash_password("senha-ção"), hash_password("senha-ção"));
        assert_ne!(hash_password("senha-ção"), hash_password("senha-cao"));
    }

    #[test]
    fn test_alphabet() {
        assert_eq!(PASSWORD_ALPHABET.len(), 26 + 26 + 10 + 32);
        assert!(PASSWORD_ALPHABET.iter().all(|b| b.is_ascii_graphic()));
        assert!(PASSWORD_ALPHABET.contains(&b'\\'));
        assert!(PASSWORD_ALPHABET.contains(&b'"'));
    }

    #[test]
    fn test_generated_password() {
        let password = generate_password(DEFAULT_PASSWORD_LENGTH);
        assert_eq!(password.chars().count(), DEFAULT_PASSWORD_LENGTH);
        assert!(password.bytes().all(|b| PASSWORD_ALPHABET.contains(&b)));

        let long = generate_password(64);
        assert_eq!(long.len(), 64);
        assert!(long.bytes().all(|b| PASSWORD_ALPHABET.contains(&b)));

        assert_ne!(generate_password(32), generate_password(32));
        assert!(generate_password(0).is_empty());
    }
}
