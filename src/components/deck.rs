//! Ordered card collection with per-observer visibility.
//!
//! Index 0 is the top of the deck. Every item carries one visibility flag per
//! player; a flag only changes through [`Deck::set_visibility`] or when the
//! item is added, moved or shuffled, in which case it falls back to the
//! deck's [`VisibilityMode`].
//!
//! Both the items and the visibility rows live in `im::Vector`, so cloning a
//! deck for a search branch is O(1) and the branches never observe each
//! other's mutations.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, PlayerId};

/// One visibility flag per player.
pub type VisibilityRow = SmallVec<[bool; 4]>;

/// Default visibility of items entering a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityMode {
    /// Face up (the token stacks).
    VisibleToAll,
    /// Face down (the draw pile).
    HiddenToAll,
    /// Only the owner sees the items.
    VisibleToOwner(PlayerId),
}

impl VisibilityMode {
    fn row(self, player_count: usize) -> VisibilityRow {
        match self {
            VisibilityMode::VisibleToAll => SmallVec::from_elem(true, player_count),
            VisibilityMode::HiddenToAll => SmallVec::from_elem(false, player_count),
            VisibilityMode::VisibleToOwner(owner) => (0..player_count)
                .map(|p| p == owner.index())
                .collect(),
        }
    }
}

/// An ordered, visibility-aware collection.
///
/// ```
/// use rust_jaipur::components::{Deck, VisibilityMode};
/// use rust_jaipur::core::PlayerId;
///
/// let mut pile = Deck::new("draw pile", 2, VisibilityMode::HiddenToAll);
/// pile.add(1);
/// pile.add(2); // now on top
///
/// pile.set_visibility(0, PlayerId::new(0), true);
/// assert_eq!(pile.visible_view(PlayerId::new(0)), vec![Some(2), None]);
/// assert_eq!(pile.draw(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<T: Clone> {
    name: String,
    player_count: usize,
    mode: VisibilityMode,
    items: Vector<T>,
    visibility: Vector<VisibilityRow>,
}

impl<T: Clone> Deck<T> {
    /// Create an empty deck.
    pub fn new(name: impl Into<String>, player_count: usize, mode: VisibilityMode) -> Self {
        Self {
            name: name.into(),
            player_count,
            mode,
            items: Vector::new(),
            visibility: Vector::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mode(&self) -> VisibilityMode {
        self.mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Put an item on top.
    pub fn add(&mut self, item: T) {
        self.items.push_front(item);
        self.visibility.push_front(self.mode.row(self.player_count));
    }

    /// Put an item at the bottom.
    pub fn add_bottom(&mut self, item: T) {
        self.items.push_back(item);
        self.visibility.push_back(self.mode.row(self.player_count));
    }

    /// Remove and return the top item.
    pub fn draw(&mut self) -> Option<T> {
        self.visibility.pop_front();
        self.items.pop_front()
    }

    /// Remove and return the item at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        self.visibility.remove(index);
        Some(self.items.remove(index))
    }

    /// Borrow the item at `index` (0 = top).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Copies of the top `n` items (fewer if the deck is shorter), top first.
    #[must_use]
    pub fn peek(&self, n: usize) -> SmallVec<[T; 4]> {
        self.items.iter().take(n).cloned().collect()
    }

    /// Iterate over all items, top first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
        self.visibility.clear();
    }

    /// Shuffle all items. Visibility falls back to the deck's mode: after a
    /// shuffle nobody knows the order any more.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut items: Vec<T> = self.items.iter().cloned().collect();
        rng.shuffle(&mut items);
        self.items = items.into_iter().collect();
        let row = self.mode.row(self.player_count);
        self.visibility = std::iter::repeat(row).take(self.items.len()).collect();
    }

    /// Replace the top `order.len()` items with `order`, keeping their
    /// visibility rows untouched.
    ///
    /// Panics if the deck holds fewer items than `order`.
    pub fn replace_top(&mut self, order: &[T]) {
        assert!(
            order.len() <= self.items.len(),
            "{}: cannot replace top {} of {} items",
            self.name,
            order.len(),
            self.items.len()
        );
        for (i, item) in order.iter().enumerate() {
            self.items.set(i, item.clone());
        }
    }

    /// Set whether `player` can see the item at `index`.
    pub fn set_visibility(&mut self, index: usize, player: PlayerId, visible: bool) {
        let row = self
            .visibility
            .get_mut(index)
            .unwrap_or_else(|| panic!("{}: no item at index {}", self.name, index));
        row[player.index()] = visible;
    }

    /// Whether `player` can see the item at `index`.
    #[must_use]
    pub fn is_visible(&self, index: usize, player: PlayerId) -> bool {
        self.visibility
            .get(index)
            .is_some_and(|row| row[player.index()])
    }

    /// What `player` knows about the deck: visible items, `None` elsewhere.
    #[must_use]
    pub fn visible_view(&self, player: PlayerId) -> Vec<Option<T>> {
        self.items
            .iter()
            .zip(self.visibility.iter())
            .map(|(item, row)| row[player.index()].then(|| item.clone()))
            .collect()
    }

    /// Shuffle the items `player` cannot see among their own positions,
    /// leaving every visible item where it is.
    ///
    /// Used to sample a state consistent with `player`'s information.
    pub fn redeterminize(&mut self, player: PlayerId, rng: &mut GameRng) {
        let mut pool = self.hidden_items(player);
        rng.shuffle(&mut pool);
        self.refill_hidden(player, pool);
    }

    /// Copies of the items `player` cannot see, top first.
    #[must_use]
    pub fn hidden_items(&self, player: PlayerId) -> Vec<T> {
        self.items
            .iter()
            .zip(self.visibility.iter())
            .filter(|(_, row)| !row[player.index()])
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Overwrite the positions hidden from `player`, top first, with `items`.
    ///
    /// Panics unless `items` yields exactly one item per hidden position.
    pub fn refill_hidden(&mut self, player: PlayerId, items: impl IntoIterator<Item = T>) {
        let hidden: Vec<usize> = (0..self.items.len())
            .filter(|&i| !self.is_visible(i, player))
            .collect();
        let mut items = items.into_iter();
        for &index in &hidden {
            let item = items
                .next()
                .unwrap_or_else(|| {
                    panic!("{}: too few items to refill hidden positions", self.name)
                });
            self.items.set(index, item);
        }
        assert!(items.next().is_none(), "{}: too many items to refill hidden positions", self.name);
    }
}
