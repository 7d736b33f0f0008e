//! Captain attributes — suit integrity, stress, oxygen — with bounded updates.
//!
//! Every mutation goes through [`CaptainAttributes::adjust`], which clamps
//! the result into the attribute's range and reports the realized delta.
//! Callers that show "healed N points" messages must use the realized
//! delta, not the requested one; the two differ at the boundaries.
//!
//! Oxygen reaching 0 is a terminal trigger for the whole session: the
//! exploration engine checks [`CaptainAttributes::out_of_oxygen`] after
//! every consumption and transitions the session to Defeat.

use serde::{Deserialize, Serialize};

/// Maximum suit integrity.
pub const SUIT_MAX: i32 = 6;
/// Maximum stress.
pub const STRESS_MAX: i32 = 10;
/// Maximum oxygen.
pub const OXYGEN_MAX: i32 = 10;

/// One of the captain's three tracked attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    SuitIntegrity,
    Stress,
    Oxygen,
}

impl Attribute {
    /// Inclusive (min, max) range for this attribute.
    pub fn range(self) -> (i32, i32) {
        match self {
            Attribute::SuitIntegrity => (0, SUIT_MAX),
            Attribute::Stress => (0, STRESS_MAX),
            Attribute::Oxygen => (0, OXYGEN_MAX),
        }
    }
}

/// The captain's current attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptainAttributes {
    pub suit_integrity: i32,
    pub stress: i32,
    pub oxygen: i32,
}

/// Result of a bounded adjustment: the new value and the delta that was
/// actually applied after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    /// New attribute value.
    pub value: i32,
    /// Realized delta (may be smaller in magnitude than requested).
    pub applied: i32,
}

impl CaptainAttributes {
    /// Starting attributes: full oxygen, suit and stress per difficulty.
    pub fn new(suit_integrity: i32, stress: i32) -> Self {
        Self {
            suit_integrity: suit_integrity.clamp(0, SUIT_MAX),
            stress: stress.clamp(0, STRESS_MAX),
            oxygen: OXYGEN_MAX,
        }
    }

    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::SuitIntegrity => self.suit_integrity,
            Attribute::Stress => self.stress,
            Attribute::Oxygen => self.oxygen,
        }
    }

    /// Apply a delta to an attribute, clamping into its range.
    ///
    /// Returns the new value together with the realized delta.
    pub fn adjust(&mut self, attr: Attribute, delta: i32) -> Adjustment {
        let (min, max) = attr.range();
        let before = self.get(attr);
        let value = (before + delta).clamp(min, max);
        match attr {
            Attribute::SuitIntegrity => self.suit_integrity = value,
            Attribute::Stress => self.stress = value,
            Attribute::Oxygen => self.oxygen = value,
        }
        Adjustment {
            value,
            applied: value - before,
        }
    }

    /// Terminal condition: the captain has no oxygen left.
    pub fn out_of_oxygen(&self) -> bool {
        self.oxygen <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_and_fills_oxygen() {
        let attrs = CaptainAttributes::new(9, -2);
        assert_eq!(attrs.suit_integrity, SUIT_MAX);
        assert_eq!(attrs.stress, 0);
        assert_eq!(attrs.oxygen, OXYGEN_MAX);
    }

    #[test]
    fn test_adjust_within_range() {
        let mut attrs = CaptainAttributes::new(4, 1);
        let adj = attrs.adjust(Attribute::Stress, 3);
        assert_eq!(adj.value, 4);
        assert_eq!(adj.applied, 3);
    }

    #[test]
    fn test_adjust_clamps_at_max() {
        let mut attrs = CaptainAttributes::new(4, 0);
        // Suit 4 + 5 would be 9, cap is 6 — only 2 applied.
        let adj = attrs.adjust(Attribute::SuitIntegrity, 5);
        assert_eq!(adj.value, SUIT_MAX);
        assert_eq!(adj.applied, 2);
    }

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut attrs = CaptainAttributes::new(4, 1);
        let adj = attrs.adjust(Attribute::Stress, -5);
        assert_eq!(adj.value, 0);
        assert_eq!(adj.applied, -1);
    }

    #[test]
    fn test_bounds_invariant_over_sequences() {
        let mut attrs = CaptainAttributes::new(4, 1);
        let deltas = [7, -20, 3, 3, 3, -1, 100, -100, 5];
        for &d in &deltas {
            for attr in [Attribute::SuitIntegrity, Attribute::Stress, Attribute::Oxygen] {
                attrs.adjust(attr, d);
                let (min, max) = attr.range();
                assert!(attrs.get(attr) >= min && attrs.get(attr) <= max);
            }
        }
    }

    #[test]
    fn test_out_of_oxygen() {
        let mut attrs = CaptainAttributes::new(4, 1);
        assert!(!attrs.out_of_oxygen());
        attrs.adjust(Attribute::Oxygen, -OXYGEN_MAX);
        assert!(attrs.out_of_oxygen());
    }

    #[test]
    fn test_realized_delta_zero_at_floor() {
        let mut attrs = CaptainAttributes::new(4, 0);
        let adj = attrs.adjust(Attribute::Stress, -2);
        assert_eq!(adj.applied, 0);
        assert_eq!(adj.value, 0);
    }
}
