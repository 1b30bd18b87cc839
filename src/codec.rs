//! String names for on-air states.
//!
//! Three surfaces:
//! - [`parse_state_name`] - tolerant parsing of operator/API input
//!   (trimmed, case-insensitive, several aliases per state),
//! - [`wire_name`] - canonical lowercase names for machine-readable
//!   status reporting,
//! - [`display_label`] - the uppercase labels shown on screen.

use crate::error::Error;
use crate::state::OnAirState;
use crate::style;

/// Longest accepted alias is "standby" (7); anything longer than the
/// buffer cannot match.
const MAX_NAME_LEN: usize = 16;

/// Parse a state name as received from an operator or a control API.
///
/// Input is trimmed and ASCII-lowercased before matching, so
/// `" ON_AIR "` parses as [`OnAirState::Live`]. Unrecognized names
/// yield [`Error::InvalidStateName`].
pub fn parse_state_name(name: &str) -> Result<OnAirState, Error> {
    let mut normalized: heapless::String<MAX_NAME_LEN> = heapless::String::new();
    for c in name.trim().chars() {
        if normalized.push(c.to_ascii_lowercase()).is_err() {
            return Err(Error::InvalidStateName);
        }
    }

    match normalized.as_str() {
        "on" | "live" | "onair" | "on_air" => Ok(OnAirState::Live),
        "standby" | "ready" => Ok(OnAirState::Standby),
        "off" | "offair" | "idle" => Ok(OnAirState::Off),
        _ => Err(Error::InvalidStateName),
    }
}

/// Canonical machine name: `"off"`, `"standby"` or `"live"`.
///
/// Each wire name is also accepted by [`parse_state_name`].
pub fn wire_name(state: OnAirState) -> &'static str {
    match state {
        OnAirState::Off => "off",
        OnAirState::Standby => "standby",
        OnAirState::Live => "live",
    }
}

/// Human-facing label: `"OFF AIR"`, `"STANDBY"` or `"ON AIR"`.
pub fn display_label(state: OnAirState) -> &'static str {
    style::label_for(state)
}

impl core::str::FromStr for OnAirState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_state_name(s)
    }
}
