//! Record-id generation.
//!
//! Ids are `<kind>:<epoch-millis>-<9 base-36 chars>`, so a lexicographic
//! scan of one kind's keys is approximately chronological and the id
//! doubles as the storage key.

use chrono::Utc;
use rand::Rng;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a fresh id for the given record kind (e.g. `"booking"`).
pub fn record_id(kind: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{kind}:{millis}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_has_kind_prefix_and_suffix() {
        let id = record_id("booking");
        assert!(id.starts_with("booking:"));
        let rest = id.strip_prefix("booking:").unwrap();
        let (millis, suffix) = rest.split_once('-').expect("millis-suffix separator");
        assert!(millis.parse::<i64>().unwrap() > 0);
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn ids_are_unique() {
        let a = record_id("contact");
        let b = record_id("contact");
        assert_ne!(a, b);
    }
}
