//! Access Codes
//!
//! Share-link tokens drawn from the browser's CSPRNG. Codes are 12
//! characters over the 62-character alphanumeric alphabet; uniqueness is
//! probabilistic, not checked against existing codes.

/// Alphabet access codes are drawn from
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generated code length
pub const CODE_LENGTH: usize = 12;

// Largest multiple of the alphabet size that fits in a byte. Bytes at or
// above this are rejected so the modulo stays uniform.
const REJECT_THRESHOLD: u8 = 248;

/// Map random bytes onto code characters until the code is full, skipping
/// bytes that would bias the distribution.
fn push_code_chars(code: &mut String, bytes: &[u8]) {
    for &byte in bytes {
        if code.len() == CODE_LENGTH {
            break;
        }
        if byte < REJECT_THRESHOLD {
            code.push(ALPHABET[(byte % ALPHABET.len() as u8) as usize] as char);
        }
    }
}

/// Build a code from a fixed byte supply. Returns None if the supply runs
/// out before the code is complete.
pub fn code_from_bytes(bytes: &[u8]) -> Option<String> {
    let mut code = String::with_capacity(CODE_LENGTH);
    push_code_chars(&mut code, bytes);
    (code.len() == CODE_LENGTH).then_some(code)
}

/// Generate a 12-character access code from crypto-grade random bytes.
pub fn generate_access_code() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let crypto = window
        .crypto()
        .map_err(|_| "Crypto API unavailable".to_string())?;

    let mut code = String::with_capacity(CODE_LENGTH);
    while code.len() < CODE_LENGTH {
        let mut buf = [0u8; 32];
        crypto
            .get_random_values_with_u8_array(&mut buf)
            .map_err(|_| "Random source failed".to_string())?;
        push_code_chars(&mut code, &buf);
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_and_alphabet() {
        let bytes: Vec<u8> = (0..64).collect();
        let code = code_from_bytes(&bytes).expect("enough bytes");
        assert_eq!(code.chars().count(), CODE_LENGTH);
        assert!(code.bytes().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn test_biased_bytes_rejected() {
        // Everything at or above the threshold is skipped, so a supply of
        // only rejected bytes never completes a code.
        let bytes = [REJECT_THRESHOLD; 64];
        assert_eq!(code_from_bytes(&bytes), None);

        // Mixed supply: the twelve accepted bytes below threshold are used,
        // the rejected ones contribute nothing.
        let mut mixed = vec![255u8; 10];
        mixed.extend(std::iter::repeat(7u8).take(CODE_LENGTH));
        let code = code_from_bytes(&mixed).expect("twelve accepted bytes");
        assert_eq!(code, "H".repeat(CODE_LENGTH));
    }

    #[test]
    fn test_byte_mapping_wraps_alphabet() {
        // 0 -> first char, 61 -> last char, 62 wraps to the first again
        let code = code_from_bytes(&[0, 61, 62, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert!(code.starts_with("A9A"));
    }

    #[test]
    fn test_short_supply_is_incomplete() {
        assert_eq!(code_from_bytes(&[1, 2, 3]), None);
    }
}
