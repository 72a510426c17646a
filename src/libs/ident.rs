//! Row identifier generation.
//!
//! Identifiers combine a millisecond timestamp with two short random base-36
//! segments, e.g. `1703123456789-a7f3k2q-9xm01bz`. Uniqueness is practical,
//! not cryptographic: the data set lives on a single device, so timestamp
//! plus 72 bits of randomness is more than enough entropy. These ids are not
//! suitable for distributed coordination.

use chrono::Utc;
use rand::Rng;

const SEGMENT_LEN: usize = 7;
const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a new unique row identifier.
///
/// Format: `<epoch-millis>-<segment>-<segment>` with two independent
/// 7-character base-36 segments.
pub fn generate() -> String {
    format!("{}-{}-{}", Utc::now().timestamp_millis(), segment(), segment())
}

fn segment() -> String {
    let mut rng = rand::thread_rng();
    (0..SEGMENT_LEN).map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ident_shape() {
        let id = generate();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].parse::<i64>().is_ok());
        assert_eq!(parts[1].len(), SEGMENT_LEN);
        assert_eq!(parts[2].len(), SEGMENT_LEN);
        assert!(parts[1].bytes().all(|b| CHARSET.contains(&b)));
        assert!(parts[2].bytes().all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn test_ident_unique_in_practice() {
        let ids: HashSet<String> = (0..1000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
