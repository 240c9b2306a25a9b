//! Property tests for health level transitions.

use proptest::prelude::*;

use thornwald::world::HealthLevel;

const LEVELS: [HealthLevel; 4] = [
    HealthLevel::Dead,
    HealthLevel::Unconscious,
    HealthLevel::Wounded,
    HealthLevel::Healthy,
];

fn any_level() -> impl Strategy<Value = HealthLevel> {
    prop::sample::select(&LEVELS[..])
}

proptest! {
    #[test]
    fn damage_moves_down_one_step_at_most(level in any_level()) {
        let after = level.damaged();
        prop_assert!(after.index() <= level.index());
        prop_assert!(level.index() - after.index() <= 1);
    }

    #[test]
    fn regeneration_never_passes_wounded(level in any_level()) {
        let after = level.regenerated();
        prop_assert!(after.index() <= HealthLevel::Wounded.index() || level == HealthLevel::Healthy);
        prop_assert!(after.index() >= level.index());
        prop_assert!(after.index() - level.index() <= 1);
    }

    #[test]
    fn the_dead_stay_dead(level in any_level()) {
        if level == HealthLevel::Dead {
            prop_assert_eq!(level.damaged(), HealthLevel::Dead);
            prop_assert_eq!(level.regenerated(), HealthLevel::Dead);
        }
    }

    #[test]
    fn indices_stay_in_range(level in any_level()) {
        prop_assert!(level.index() <= 3);
        prop_assert!(level.damaged().index() <= 3);
        prop_assert!(level.regenerated().index() <= 3);
    }
}

#[test]
fn wounded_regeneration_stops_short_of_healthy() {
    // The range guard admits only levels strictly between dead and healthy,
    // and the recovery target is clamped to wounded.
    assert_eq!(HealthLevel::Wounded.regenerated(), HealthLevel::Wounded);
    assert_eq!(HealthLevel::Unconscious.regenerated(), HealthLevel::Wounded);
    assert!(!HealthLevel::Healthy.can_regenerate());
    assert!(!HealthLevel::Dead.can_regenerate());
}
