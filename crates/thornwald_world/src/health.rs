//! The four-level health state machine.
//!
//! Combatant health is coarse: dead, unconscious, wounded, or healthy.
//! Damage resolution moves exactly one step down, regeneration exactly one
//! step up, and regeneration has a range guard that never raises a creature
//! out of the wounded band in a single tick nor touches the dead.

/// Coarse health of a combatant, ordered from worst to best.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthLevel {
    /// Level 0: dead.
    Dead,
    /// Level 1: unconscious.
    Unconscious,
    /// Level 2: wounded.
    Wounded,
    /// Level 3: healthy.
    Healthy,
}

impl HealthLevel {
    /// Numeric level in `0..=3`.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Dead => 0,
            Self::Unconscious => 1,
            Self::Wounded => 2,
            Self::Healthy => 3,
        }
    }

    /// One step worse; dead stays dead.
    #[must_use]
    pub const fn damaged(self) -> Self {
        match self {
            Self::Dead | Self::Unconscious => Self::Dead,
            Self::Wounded => Self::Unconscious,
            Self::Healthy => Self::Wounded,
        }
    }

    /// One step better, under the regeneration range guard: only the
    /// unconscious and the wounded recover, so a single tick never restores
    /// anyone beyond wounded and never raises the dead.
    #[must_use]
    pub const fn regenerated(self) -> Self {
        match self {
            Self::Unconscious => Self::Wounded,
            Self::Wounded => Self::Wounded,
            other => other,
        }
    }

    /// Whether the regeneration guard `0 < level < 3` admits this level.
    #[must_use]
    pub const fn can_regenerate(self) -> bool {
        matches!(self, Self::Unconscious | Self::Wounded)
    }

    /// Whether the combatant can still act (level above unconscious).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Wounded | Self::Healthy)
    }

    /// Display adjective shown as a description prefix and in state
    /// announcements. Healthy combatants carry no adjective.
    #[must_use]
    pub const fn adjective(self) -> &'static str {
        match self {
            Self::Dead => "dead",
            Self::Unconscious => "unconscious",
            Self::Wounded => "wounded",
            Self::Healthy => "",
        }
    }

    /// Sort key used when ordering a location's entities for display and
    /// iteration: the dead sort first, then the unconscious, wounded last
    /// after the healthy.
    #[must_use]
    pub const fn priority(self) -> i32 {
        match self {
            Self::Dead => -4,
            Self::Unconscious => 1,
            Self::Wounded => 10,
            Self::Healthy => 5,
        }
    }
}
