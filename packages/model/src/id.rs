//! Collision-resistant element id generation.
//!
//! Ids combine a millisecond timestamp prefix with a random suffix, so
//! bulk operations (duplicating a deep subtree assigns one id per
//! descendant) stay collision-free without any shared state.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generate a fresh element id. Infallible, safe at high frequency.
pub fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix = Uuid::new_v4().simple().to_string();
    format!("el-{:x}-{}", millis, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        assert!(id.starts_with("el-"));
        assert_eq!(id.split('-').count(), 3);
    }

    #[test]
    fn test_bulk_generation_is_collision_free() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
