// --- Song Rating Definitions ---
//
// Tier thresholds partition the 0..=10000 karaoke score axis. The table is
// scanned in descending-threshold order and a score must strictly exceed a
// threshold to earn the tier, so a score exactly on a threshold lands one
// tier below. ToneDeaf is the unconditional catch-all.

/// Ordered rating tiers, worst to best. The derived `Ord` gives the rank
/// used by the results UI to compare players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SongRating {
    ToneDeaf,
    Amateur,
    Wannabe,
    Hopeful,
    RisingStar,
    LeadSinger,
    Superstar,
    Ultrastar,
}

impl SongRating {
    /// All tiers in descending-threshold order, the order `for_score` scans.
    pub const VALUES: [Self; 8] = [
        Self::Ultrastar,
        Self::Superstar,
        Self::LeadSinger,
        Self::RisingStar,
        Self::Hopeful,
        Self::Wannabe,
        Self::Amateur,
        Self::ToneDeaf,
    ];

    pub const fn threshold(self) -> f64 {
        match self {
            Self::Ultrastar => 9800.0,
            Self::Superstar => 9000.0,
            Self::LeadSinger => 8000.0,
            Self::RisingStar => 6500.0,
            Self::Hopeful => 5000.0,
            Self::Wannabe => 4000.0,
            Self::Amateur => 2000.0,
            Self::ToneDeaf => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ultrastar => "Ultrastar",
            Self::Superstar => "Superstar",
            Self::LeadSinger => "Lead Singer",
            Self::RisingStar => "Rising Star",
            Self::Hopeful => "Hopeful",
            Self::Wannabe => "Wannabe",
            Self::Amateur => "Amateur",
            Self::ToneDeaf => "Tone Deaf",
        }
    }

    /// Converts a rating to the corresponding frame index on the
    /// "ratings 1x8.png" spritesheet (best rating first).
    pub const fn to_sprite_state(self) -> u32 {
        match self {
            Self::Ultrastar => 0,
            Self::Superstar => 1,
            Self::LeadSinger => 2,
            Self::RisingStar => 3,
            Self::Hopeful => 4,
            Self::Wannabe => 5,
            Self::Amateur => 6,
            Self::ToneDeaf => 7,
        }
    }

    /// Resolves a total score to the highest tier whose threshold the score
    /// strictly exceeds. Scores that exceed no threshold fall back to
    /// `ToneDeaf`, which therefore also absorbs negative scores and NaN
    /// (every comparison against NaN is false).
    pub fn for_score(total_score: f64) -> Self {
        for rating in Self::VALUES {
            if total_score > rating.threshold() {
                return rating;
            }
        }
        Self::ToneDeaf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strictly_descending() {
        for pair in SongRating::VALUES.windows(2) {
            assert!(
                pair[0].threshold() > pair[1].threshold(),
                "{:?} must sit above {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn score_above_top_threshold_is_best_tier() {
        assert_eq!(SongRating::for_score(9900.0), SongRating::Ultrastar);
        assert_eq!(SongRating::for_score(10000.0), SongRating::Ultrastar);
    }

    #[test]
    fn exact_threshold_lands_one_tier_below() {
        // Strict ">" semantics: equality does not earn the tier.
        for rating in SongRating::VALUES {
            if rating == SongRating::ToneDeaf {
                continue;
            }
            let resolved = SongRating::for_score(rating.threshold());
            assert!(
                resolved < rating,
                "score {} resolved to {:?}, expected below {:?}",
                rating.threshold(),
                resolved,
                rating
            );
        }
        assert_eq!(SongRating::for_score(9800.0), SongRating::Superstar);
        assert_eq!(SongRating::for_score(9000.0), SongRating::LeadSinger);
    }

    #[test]
    fn low_scores_fall_back_to_tone_deaf() {
        assert_eq!(SongRating::for_score(50.0), SongRating::ToneDeaf);
        assert_eq!(SongRating::for_score(0.0), SongRating::ToneDeaf);
        assert_eq!(SongRating::for_score(-100.0), SongRating::ToneDeaf);
        assert_eq!(SongRating::for_score(f64::NEG_INFINITY), SongRating::ToneDeaf);
    }

    #[test]
    fn nan_resolves_to_fallback() {
        assert_eq!(SongRating::for_score(f64::NAN), SongRating::ToneDeaf);
    }

    #[test]
    fn resolution_is_monotonic_in_score() {
        let mut previous = SongRating::for_score(0.0);
        let mut score = 0.0;
        while score <= 10000.0 {
            let current = SongRating::for_score(score);
            assert!(current >= previous, "rating regressed at score {score}");
            previous = current;
            score += 25.0;
        }
    }

    #[test]
    fn sprite_states_are_unique_and_dense() {
        let mut seen = [false; 8];
        for rating in SongRating::VALUES {
            let state = rating.to_sprite_state() as usize;
            assert!(state < 8);
            assert!(!seen[state], "duplicate sprite state {state}");
            seen[state] = true;
        }
    }
}
