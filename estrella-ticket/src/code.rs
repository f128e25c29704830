use chrono::Utc;
use rand::Rng;

/// Operator prefix used when no configuration override is in play.
pub const DEFAULT_PREFIX: &str = "ET";

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Human-displayed booking code: `ET-XXXXX-TTTTTT`, five random base-36
/// characters plus the current unix milliseconds in base 36. The time
/// component makes collisions within one user's collection implausible;
/// global uniqueness is neither guaranteed nor required.
pub fn booking_code(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let random: String = (0..5)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("{}-{}-{}", prefix, random, to_base36(millis))
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        let code = booking_code("ET");
        let parts: Vec<&str> = code.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ET");
        assert_eq!(parts[1].len(), 5);
        assert!(parts[1].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert!(!parts[2].is_empty());
    }

    #[test]
    fn test_consecutive_codes_differ() {
        assert_ne!(booking_code("ET"), booking_code("ET"));
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
    }
}
