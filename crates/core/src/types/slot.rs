//! Named partitions of synchronized state.

use serde::{Deserialize, Serialize};

/// A named partition of persisted and synchronized membership state.
///
/// Each slot has its own membership set, pending map, persisted file,
/// and remote endpoints. The two slots never interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// The shopping cart.
    Cart,
    /// The wishlist.
    Wishlist,
}

impl Slot {
    /// All slots, for iteration.
    pub const ALL: [Self; 2] = [Self::Cart, Self::Wishlist];

    /// Stable lowercase name, used for persisted file names and URL paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Wishlist => "wishlist",
        }
    }
}

impl core::fmt::Display for Slot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_names() {
        assert_eq!(Slot::Cart.as_str(), "cart");
        assert_eq!(Slot::Wishlist.as_str(), "wishlist");
        assert_eq!(Slot::Cart.to_string(), "cart");
    }

    #[test]
    fn test_slot_all_covers_both() {
        assert_eq!(Slot::ALL.len(), 2);
        assert!(Slot::ALL.contains(&Slot::Cart));
        assert!(Slot::ALL.contains(&Slot::Wishlist));
    }
}
