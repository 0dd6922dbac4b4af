//! # Order Reference Module
//!
//! Human-facing order reference generation.
//!
//! A reference looks like `ORD-MBCDEF12-000042`: a fixed prefix, the creation
//! instant encoded as uppercase base36 milliseconds, and the zero-padded
//! order id. The reference is display-only; the database id stays the real
//! key, so uniqueness of the timestamp part is not load-bearing.

use chrono::Utc;

// =============================================================================
// Reference Generation
// =============================================================================

/// Builds the reference for a freshly created order.
///
/// Returns `None` for non-positive ids, which can only come from a caller
/// bug, not from the database.
///
/// ## Example
/// ```rust
/// use stride_core::reference::generate_order_reference;
///
/// let reference = generate_order_reference(42).unwrap();
/// assert!(reference.starts_with("ORD-"));
/// assert!(reference.ends_with("-000042"));
/// assert!(generate_order_reference(0).is_none());
/// ```
pub fn generate_order_reference(order_id: i64) -> Option<String> {
    reference_at(order_id, Utc::now().timestamp_millis())
}

/// [`generate_order_reference`] with an explicit clock reading.
pub fn reference_at(order_id: i64, timestamp_millis: i64) -> Option<String> {
    if order_id <= 0 {
        return None;
    }
    Some(format!(
        "ORD-{}-{:06}",
        to_base36_upper(timestamp_millis),
        order_id
    ))
}

/// Encodes a non-negative integer as uppercase base36.
fn to_base36_upper(mut value: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    if value <= 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    // DIGITS is pure ASCII
    String::from_utf8(out).unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        // 2022-01-01T00:00:00Z in millis
        let reference = reference_at(42, 1_640_995_200_000).unwrap();
        assert_eq!(reference, "ORD-KXV26800-000042");
    }

    #[test]
    fn test_id_zero_padding() {
        let reference = reference_at(1_234_567, 1).unwrap();
        // Seven digits do not get truncated, only short ids are padded
        assert!(reference.ends_with("-1234567"));
        assert!(reference_at(7, 1).unwrap().ends_with("-000007"));
    }

    #[test]
    fn test_non_positive_ids_rejected() {
        assert!(reference_at(0, 1_640_995_200_000).is_none());
        assert!(reference_at(-42, 1_640_995_200_000).is_none());
        assert!(generate_order_reference(-1).is_none());
    }

    #[test]
    fn test_wall_clock_reference_is_well_formed() {
        let reference = generate_order_reference(99).unwrap();
        let parts: Vec<&str> = reference.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ORD");
        assert!(parts[1].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(parts[2], "000099");
    }

    #[test]
    fn test_base36_encoding() {
        assert_eq!(to_base36_upper(0), "0");
        assert_eq!(to_base36_upper(35), "Z");
        assert_eq!(to_base36_upper(36), "10");
        assert_eq!(to_base36_upper(1_295), "ZZ");
    }
}
