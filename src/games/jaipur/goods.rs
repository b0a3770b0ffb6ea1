//! Goods and dense per-good storage.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Tradeable card categories.
///
/// `Camel` is special everywhere: it lives in the herd, ignores the hand
/// limit, never scores tokens and can't be taken in a trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GoodType {
    Diamonds,
    Gold,
    Silver,
    Cloth,
    Spice,
    Leather,
    Camel,
}

impl GoodType {
    /// Number of good types, camels included.
    pub const COUNT: usize = 7;

    /// All goods in declaration order.
    pub const ALL: [GoodType; Self::COUNT] = [
        GoodType::Diamonds,
        GoodType::Gold,
        GoodType::Silver,
        GoodType::Cloth,
        GoodType::Spice,
        GoodType::Leather,
        GoodType::Camel,
    ];

    /// Goods that go into hands and can be sold.
    pub const TRADE_GOODS: [GoodType; 6] = [
        GoodType::Diamonds,
        GoodType::Gold,
        GoodType::Silver,
        GoodType::Cloth,
        GoodType::Spice,
        GoodType::Leather,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_camel(self) -> bool {
        matches!(self, GoodType::Camel)
    }
}

impl std::fmt::Display for GoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// One `T` per [`GoodType`], stored inline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoodMap<T>([T; GoodType::COUNT]);

impl<T> GoodMap<T> {
    /// Build a map from a per-good factory.
    pub fn from_fn(f: impl Fn(GoodType) -> T) -> Self {
        Self(GoodType::ALL.map(f))
    }

    /// Iterate over (good, &value) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (GoodType, &T)> {
        GoodType::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate over (good, &mut value) pairs in declaration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GoodType, &mut T)> {
        GoodType::ALL.into_iter().zip(self.0.iter_mut())
    }

    /// Project every entry into a new map.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> GoodMap<U> {
        GoodMap::from_fn(|good| f(&self[good]))
    }
}

impl<T> Index<GoodType> for GoodMap<T> {
    type Output = T;

    fn index(&self, good: GoodType) -> &T {
        &self.0[good.index()]
    }
}

impl<T> IndexMut<GoodType> for GoodMap<T> {
    fn index_mut(&mut self, good: GoodType) -> &mut T {
        &mut self.0[good.index()]
    }
}

/// A multiset of goods: how many cards of each type.
pub type GoodCounts = GoodMap<u8>;

impl GoodCounts {
    /// Multiset from (good, count) pairs. Repeated goods accumulate.
    ///
    /// ```
    /// use rust_jaipur::games::jaipur::{GoodCounts, GoodType};
    ///
    /// let take = GoodCounts::of(&[(GoodType::Gold, 2), (GoodType::Spice, 1)]);
    /// assert_eq!(take.total(), 3);
    /// assert_eq!(take[GoodType::Gold], 2);
    /// ```
    #[must_use]
    pub fn of(pairs: &[(GoodType, u8)]) -> Self {
        let mut counts = GoodCounts::default();
        for &(good, n) in pairs {
            counts[good] += n;
        }
        counts
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&n| u32::from(n)).sum()
    }

    /// Goods with a non-zero count, in declaration order.
    pub fn goods(&self) -> impl Iterator<Item = (GoodType, u8)> + '_ {
        self.iter().filter(|(_, &n)| n > 0).map(|(g, &n)| (g, n))
    }

    /// Whether both multisets contain a common good.
    #[must_use]
    pub fn shares_good_with(&self, other: &GoodCounts) -> bool {
        self.0.iter().zip(other.0.iter()).any(|(&a, &b)| a > 0 && b > 0)
    }
}

impl std::fmt::Display for GoodCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (good, n)) in self.goods().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}x{}", n, good)?;
        }
        f.write_str("}")
    }
}
