//! Per-session statistics
//!
//! Kept in memory only; nothing is written to disk.

use super::board::MAX_TRIES;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of tries used; index 0 is a first-try win
    pub guess_distribution: [usize; MAX_TRIES],
}

impl Statistics {
    pub(crate) fn record_win(&mut self, tries: usize) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(slot) = tries
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    pub(crate) fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_updates_distribution_and_streak() {
        let mut stats = Statistics::default();
        stats.record_win(3);
        stats.record_win(1);

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn loss_breaks_streak_but_keeps_max() {
        let mut stats = Statistics::default();
        stats.record_win(2);
        stats.record_win(6);
        stats.record_loss();
        stats.record_win(4);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.games_played, 4);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn win_rate_without_games_is_zero() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
