use crate::question_engine::Level;

/// Floor for the per-question practice budget.
pub const MIN_BUDGET_SECS: u32 = 2;

/// Seconds allowed per practice question at `level`.
///
/// Nine seconds up to level 10, then one second less per further ten levels,
/// never below [`MIN_BUDGET_SECS`].
pub fn time_budget_for_level(level: Level) -> u32 {
    let n = level.get();
    if n <= 10 {
        return 9;
    }
    9u32.saturating_sub((n - 1) / 10).max(MIN_BUDGET_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(n: u32) -> u32 {
        time_budget_for_level(Level::new(n).unwrap())
    }

    #[test]
    fn known_points() {
        assert_eq!(budget(1), 9);
        assert_eq!(budget(10), 9);
        assert_eq!(budget(11), 8);
        assert_eq!(budget(20), 8);
        assert_eq!(budget(21), 7);
        assert_eq!(budget(61), 3);
        assert_eq!(budget(71), 2);
        assert_eq!(budget(1_000), 2);
        assert_eq!(budget(u32::MAX), 2);
    }

    #[test]
    fn never_increases_with_level() {
        let mut prev = budget(1);
        for n in 2..=200 {
            let b = budget(n);
            assert!(b <= prev, "budget rose at level {n}");
            assert_eq!(b, budget(n), "not a pure function of level {n}");
            prev = b;
        }
    }
}
