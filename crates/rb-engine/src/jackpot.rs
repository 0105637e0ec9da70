//! Progressive jackpot pool

/// The progressive pool. It grows with every accepted stake, pays out its
/// full value when a jackpot line lands, and never sits below its floor.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressiveJackpot {
    value: u64,
    floor: u64,
    rate: f64,
}

impl ProgressiveJackpot {
    /// Fresh pool sitting at its floor.
    pub fn new(floor: u64, rate: f64) -> Self {
        Self {
            value: floor,
            floor,
            rate,
        }
    }

    /// Restore a persisted pool. Values below the floor clamp up to it.
    pub fn restore(value: u64, floor: u64, rate: f64) -> Self {
        Self {
            value: value.max(floor),
            floor,
            rate,
        }
    }

    /// Current pool value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Reset value after a hit.
    pub fn floor(&self) -> u64 {
        self.floor
    }

    /// Feed an accepted stake into the pool: value += floor(stake × rate).
    /// Returns the contribution that was added.
    pub fn contribute(&mut self, stake: u64) -> u64 {
        let contribution = (stake as f64 * self.rate).floor() as u64;
        self.value += contribution;
        contribution
    }

    /// Pay out the whole pool and reset it to the floor.
    pub fn award(&mut self) -> u64 {
        let amount = self.value;
        self.value = self.floor;
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_floors_fractions() {
        let mut pool = ProgressiveJackpot::new(1000, 0.01);
        assert_eq!(pool.contribute(50), 0); // 0.5 floors to 0
        assert_eq!(pool.contribute(100), 1);
        assert_eq!(pool.contribute(199), 1);
        assert_eq!(pool.contribute(200), 2);
        assert_eq!(pool.value(), 1004);
    }

    #[test]
    fn test_award_resets_to_floor() {
        let mut pool = ProgressiveJackpot::new(1000, 0.01);
        pool.contribute(5000);
        assert_eq!(pool.value(), 1050);

        assert_eq!(pool.award(), 1050);
        assert_eq!(pool.value(), 1000);
    }

    #[test]
    fn test_restore_clamps_to_floor() {
        let pool = ProgressiveJackpot::restore(400, 1000, 0.01);
        assert_eq!(pool.value(), 1000);

        let pool = ProgressiveJackpot::restore(2500, 1000, 0.01);
        assert_eq!(pool.value(), 2500);
    }

    #[test]
    fn test_value_never_below_floor() {
        let mut pool = ProgressiveJackpot::new(1000, 0.01);
        for stake in [1, 10, 100, 3000] {
            pool.contribute(stake);
            assert!(pool.value() >= pool.floor());
        }
        pool.award();
        assert!(pool.value() >= pool.floor());
    }
}
