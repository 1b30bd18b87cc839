//! On-air state model and the process-wide state store.
//!
//! The store is the single source of truth for the current state. It is
//! written by the sign screen's input loop and by any external actor
//! (typically a network control handler) through [`set_on_air_state`].
//!
//! Concurrency contract: a single `AtomicU8` with relaxed ordering.
//! Writes are single-word and last-write-wins; readers observe the
//! latest write visible to them. No locking, no ordering guarantees
//! between writers - that is all this screen needs.

use core::sync::atomic::{AtomicU8, Ordering};

/// Operational mode of the studio indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OnAirState {
    /// Studio is idle.
    Off = 0,
    /// About to go live.
    Standby = 1,
    /// Actively broadcasting.
    Live = 2,
}

impl OnAirState {
    /// Forward transition: Off → Standby → Live → Off.
    pub fn next(self) -> Self {
        match self {
            OnAirState::Off => OnAirState::Standby,
            OnAirState::Standby => OnAirState::Live,
            OnAirState::Live => OnAirState::Off,
        }
    }

    /// Backward transition, the exact inverse of [`next`](Self::next):
    /// Off → Live → Standby → Off.
    pub fn previous(self) -> Self {
        match self {
            OnAirState::Off => OnAirState::Live,
            OnAirState::Standby => OnAirState::Off,
            OnAirState::Live => OnAirState::Standby,
        }
    }

    fn from_raw(raw: u8) -> Self {
        match raw {
            1 => OnAirState::Standby,
            2 => OnAirState::Live,
            _ => OnAirState::Off,
        }
    }
}

static ON_AIR: AtomicU8 = AtomicU8::new(OnAirState::Off as u8);

/// Read the current on-air state. No side effects.
pub fn get_on_air_state() -> OnAirState {
    OnAirState::from_raw(ON_AIR.load(Ordering::Relaxed))
}

/// Overwrite the current on-air state unconditionally.
///
/// Does not trigger a redraw - the sign screen detects the change on
/// its next polling iteration.
pub fn set_on_air_state(state: OnAirState) {
    ON_AIR.store(state as u8, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_cycle_visits_all_states() {
        let mut state = OnAirState::Off;
        state = state.next();
        assert_eq!(state, OnAirState::Standby);
        state = state.next();
        assert_eq!(state, OnAirState::Live);
        state = state.next();
        assert_eq!(state, OnAirState::Off);
    }

    #[test]
    fn backward_cycle_visits_all_states() {
        let mut state = OnAirState::Off;
        state = state.previous();
        assert_eq!(state, OnAirState::Live);
        state = state.previous();
        assert_eq!(state, OnAirState::Standby);
        state = state.previous();
        assert_eq!(state, OnAirState::Off);
    }

    #[test]
    fn backward_is_inverse_of_forward() {
        for state in [OnAirState::Off, OnAirState::Standby, OnAirState::Live] {
            assert_eq!(state.next().previous(), state);
            assert_eq!(state.previous().next(), state);
        }
    }

    #[test]
    fn raw_roundtrip_and_fallback() {
        for state in [OnAirState::Off, OnAirState::Standby, OnAirState::Live] {
            assert_eq!(OnAirState::from_raw(state as u8), state);
        }
        // Out-of-range storage decodes to the safe default.
        assert_eq!(OnAirState::from_raw(0xFF), OnAirState::Off);
    }
}
