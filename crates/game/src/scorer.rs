use bevy::prelude::*;

/// Running score. `high_score` only ever grows; undo rewinds
/// `current_score` alone.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorer {
    pub current_score: u32,
    pub high_score: u32,
}

impl Scorer {
    pub fn add(&mut self, points: u32) {
        self.current_score = self.current_score.saturating_add(points);
        self.high_score = self.high_score.max(self.current_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tracks_high_score() {
        let mut scorer = Scorer::default();
        scorer.add(120);
        scorer.add(30);
        assert_eq!(scorer.current_score, 150);
        assert_eq!(scorer.high_score, 150);

        scorer.current_score = 120;
        assert_eq!(scorer.high_score, 150);
    }
}
