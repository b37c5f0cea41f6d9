//! Purchase quantity for add-to-cart gestures.

use serde::{Deserialize, Serialize};

/// A positive purchase quantity with a floor of 1 and no declared ceiling.
///
/// Quantity is local to the add-to-cart gesture; it is not part of the
/// membership state the synchronizer tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// The minimum quantity.
    pub const MIN: Self = Self(1);

    /// Create a quantity, clamping zero up to the floor of 1.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        if value == 0 { Self(1) } else { Self(value) }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Increment, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Decrement, stopping at the floor of 1.
    #[must_use]
    pub const fn saturating_decrement(self) -> Self {
        if self.0 <= 1 { Self(1) } else { Self(self.0 - 1) }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_floor() {
        assert_eq!(Quantity::new(0), Quantity::MIN);
        assert_eq!(Quantity::new(1).get(), 1);
        assert_eq!(Quantity::new(7).get(), 7);
    }

    #[test]
    fn test_quantity_default_is_one() {
        assert_eq!(Quantity::default().get(), 1);
    }

    #[test]
    fn test_decrement_stops_at_floor() {
        let q = Quantity::new(2);
        assert_eq!(q.saturating_decrement().get(), 1);
        assert_eq!(q.saturating_decrement().saturating_decrement().get(), 1);
    }

    #[test]
    fn test_increment() {
        assert_eq!(Quantity::new(1).saturating_increment().get(), 2);
        assert_eq!(Quantity::new(u32::MAX).saturating_increment().get(), u32::MAX);
    }
}
