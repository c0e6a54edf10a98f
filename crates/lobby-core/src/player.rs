/// A player waiting in the lobby.
///
/// Players are identified by name for every lookup. `unique_id` is assigned
/// by the owning store and is never reused within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: i64,
    unique_id: u64,
    wins: u32,
    losses: u32,
    errors: u32,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, unique_id: u64) -> Self {
        Self {
            name: name.into(),
            score: 0,
            unique_id,
            wins: 0,
            losses: 0,
            errors: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    /// Add `delta` to the score, saturating at the `i64` bounds.
    pub fn add_score(&mut self, delta: i64) -> i64 {
        self.score = self.score.saturating_add(delta);
        self.score
    }

    pub fn unique_id(&self) -> u64 {
        self.unique_id
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub(crate) fn swap_scores(&mut self, other: &mut Player) {
        std::mem::swap(&mut self.score, &mut other.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("alice", 7);
        assert_eq!(player.name(), "alice");
        assert_eq!(player.score(), 0);
        assert_eq!(player.unique_id(), 7);
        assert_eq!((player.wins(), player.losses(), player.errors()), (0, 0, 0));
    }

    #[test]
    fn test_add_score_accepts_negative_delta() {
        let mut player = Player::new("bob", 0);
        assert_eq!(player.add_score(50), 50);
        assert_eq!(player.add_score(-80), -30);
    }

    #[test]
    fn test_add_score_saturates() {
        let mut player = Player::new("carol", 0);
        player.set_score(i64::MAX - 1);
        assert_eq!(player.add_score(10), i64::MAX);
    }

    #[test]
    fn test_swap_scores_keeps_identity() {
        let mut a = Player::new("a", 0);
        let mut b = Player::new("b", 1);
        a.set_score(30);
        b.set_score(10);
        a.swap_scores(&mut b);
        assert_eq!((a.name(), a.unique_id(), a.score()), ("a", 0, 10));
        assert_eq!((b.name(), b.unique_id(), b.score()), ("b", 1, 30));
    }
}
