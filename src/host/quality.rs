use rand::{Rng, RngCore};

/// Item quality tier, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quality {
    Normal,
    Good,
    Excellent,
    Masterwork,
    Legendary,
}

impl Quality {
    pub fn label(self) -> &'static str {
        match self {
            Quality::Normal => "normal",
            Quality::Good => "good",
            Quality::Excellent => "excellent",
            Quality::Masterwork => "masterwork",
            Quality::Legendary => "legendary",
        }
    }
}

/// Cascading coin-flip quality ladder: each flip keeps the current tier with
/// probability 1/2, so the mass is 50/25/12.5/6.25/6.25 from Normal up to
/// Legendary (Legendary absorbs the last remainder).
pub fn roll_quality(rng: &mut dyn RngCore) -> Quality {
    if rng.random_bool(0.5) {
        Quality::Normal
    } else if rng.random_bool(0.5) {
        Quality::Good
    } else if rng.random_bool(0.5) {
        Quality::Excellent
    } else if rng.random_bool(0.5) {
        Quality::Masterwork
    } else {
        Quality::Legendary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn ordering_worst_to_best() {
        assert!(Quality::Normal < Quality::Good);
        assert!(Quality::Masterwork < Quality::Legendary);
    }

    #[test]
    fn ladder_frequencies_match_cascade() {
        let mut rng = SmallRng::seed_from_u64(42);
        let trials = 100_000u32;
        let mut counts = [0u32; 5];
        for _ in 0..trials {
            counts[roll_quality(&mut rng) as usize] += 1;
        }
        let freq = |i: usize| counts[i] as f64 / trials as f64;
        // Expected 0.5 / 0.25 / 0.125 / 0.0625 / 0.0625, generous tolerance.
        assert!((freq(0) - 0.5).abs() < 0.02, "normal {}", freq(0));
        assert!((freq(1) - 0.25).abs() < 0.02, "good {}", freq(1));
        assert!((freq(2) - 0.125).abs() < 0.01, "excellent {}", freq(2));
        assert!((freq(3) - 0.0625).abs() < 0.01, "masterwork {}", freq(3));
        assert!((freq(4) - 0.0625).abs() < 0.01, "legendary {}", freq(4));
    }

    #[test]
    fn every_tier_reachable() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..10_000 {
            seen[roll_quality(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "{seen:?}");
    }
}
