//! Ordered player queue.
//!
//! Players live in an arena of slots; a separate index list holds the
//! queue order. Removing a player frees its slot for reuse, but unique ids
//! keep counting up.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::SortMode;
use crate::error::{Error, Result};
use crate::player::Player;

#[derive(Debug, Clone, Default)]
pub struct PlayerStore {
    slots: Vec<Option<Player>>,
    free: Vec<usize>,
    order: VecDeque<usize>,
    next_id: u64,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Players in queue order, head first.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.order.iter().filter_map(|&slot| self.slots[slot].as_ref())
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        let slot = *self.order.get(index)?;
        self.slots[slot].as_ref()
    }

    pub fn last_mut(&mut self) -> Option<&mut Player> {
        let slot = *self.order.back()?;
        self.slots[slot].as_mut()
    }

    /// Append a new player at the tail of the queue. Duplicate names are allowed.
    ///
    /// Returns the unique id assigned to the player.
    pub fn append(&mut self, name: impl Into<String>) -> u64 {
        let unique_id = self.next_id;
        self.next_id += 1;

        let player = Player::new(name, unique_id);
        debug!("Appending player {} (id {})", player.name(), unique_id);

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(player);
                slot
            }
            None => {
                self.slots.push(Some(player));
                self.slots.len() - 1
            }
        };
        self.order.push_back(slot);
        unique_id
    }

    /// Remove the player at the head of the queue.
    pub fn remove_head(&mut self) -> Result<Player> {
        let slot = self.order.pop_front().ok_or(Error::EmptyLobby)?;
        self.release(slot).ok_or(Error::EmptyLobby)
    }

    /// Remove the first player named `name`.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Player> {
        if self.is_empty() {
            return Err(Error::EmptyLobby);
        }
        let position = self
            .position(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        let slot = self
            .order
            .remove(position)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        self.release(slot)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// First player named `name`, if any.
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.iter().find(|p| p.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Add `delta` to the first player named `name` and return the new score.
    pub fn add_score(&mut self, name: &str, delta: i64) -> Result<i64> {
        let position = self
            .position(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        let slot = self.order[position];
        let player = self.slots[slot]
            .as_mut()
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        Ok(player.add_score(delta))
    }

    /// Order the queue by ascending score.
    pub fn sort_by_score(&mut self, mode: SortMode) {
        debug!("Sorting {} players ({})", self.len(), mode);
        match mode {
            SortMode::ScoresOnly => self.sort_scores_only(),
            SortMode::Records => self.sort_records(),
        }
    }

    /// Remove every player, head first. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.remove_head().is_ok() {
            removed += 1;
        }
        removed
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.order
            .iter()
            .position(|&slot| self.slots[slot].as_ref().is_some_and(|p| p.name() == name))
    }

    fn release(&mut self, slot: usize) -> Option<Player> {
        let player = self.slots[slot].take()?;
        self.free.push(slot);
        Some(player)
    }

    fn score_at(&self, position: usize) -> i64 {
        self.slots[self.order[position]]
            .as_ref()
            .map_or(i64::MIN, Player::score)
    }

    // Selection sort over positions. Only score values move; every record
    // stays in its slot and keeps its place in the queue.
    fn sort_scores_only(&mut self) {
        let len = self.order.len();
        for i in 0..len {
            let mut min = i;
            for j in (i + 1)..len {
                if self.score_at(j) < self.score_at(min) {
                    min = j;
                }
            }
            if min != i {
                let (a, b) = (self.order[i], self.order[min]);
                if let (Some(first), Some(second)) = pair_mut(&mut self.slots, a, b) {
                    first.swap_scores(second);
                }
            }
        }
    }

    fn sort_records(&mut self) {
        let mut order: Vec<usize> = self.order.drain(..).collect();
        order.sort_by_key(|&slot| self.slots[slot].as_ref().map_or(i64::MIN, Player::score));
        self.order = order.into();
    }
}

/// Mutable access to two distinct slots at once.
fn pair_mut(
    slots: &mut [Option<Player>],
    a: usize,
    b: usize,
) -> (Option<&mut Player>, Option<&mut Player>) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = slots.split_at_mut(b);
        (left[a].as_mut(), right[0].as_mut())
    } else {
        let (left, right) = slots.split_at_mut(a);
        (right[0].as_mut(), left[b].as_mut())
    }
}
