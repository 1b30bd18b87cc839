//! Tri-state "studio on-air" indicator screen for embedded pixel
//! displays.
//!
//! The crate owns the state model (`Off` / `Standby` / `Live`), its
//! string names, the per-state visual styles and the blocking screen
//! loop. Everything hardware-specific stays on the host side of three
//! narrow traits:
//!
//! - [`Panel`] - fill / rounded-rect / centered-text primitives with a
//!   known width and height ([`GraphicsPanel`] adapts any
//!   embedded-graphics draw target),
//! - [`Inputs`] - debounced button events, one per polling iteration,
//! - [`Host`] - screen wake, the return-to-menu flag, the menu
//!   callback and the theme colors.
//!
//! External actors (a web or network control surface) change the state
//! through [`set_on_air_state`] / [`set_on_air_state_by_name`]; the
//! running screen notices the change on its next poll and repaints.
//!
//! All pure logic is host-testable: `cargo test` needs no hardware.

#![cfg_attr(not(test), no_std)]

pub mod codec;
pub mod config;
pub mod error;
pub mod layout;
pub mod panel;
pub mod render;
pub mod sign;
pub mod state;
pub mod style;

pub use codec::{parse_state_name, wire_name as on_air_state_wire_name};
pub use error::Error;
pub use panel::GraphicsPanel;
pub use render::{draw_sign, Panel};
pub use sign::{show_on_air_sign, Host, InputEvent, Inputs};
pub use state::{get_on_air_state, set_on_air_state, OnAirState};
pub use style::{StyleCatalog, StyleDescriptor, Theme};

/// Human label for status reporting and UI reuse (`"ON AIR"` etc).
pub fn on_air_state_display_label(state: OnAirState) -> &'static str {
    codec::display_label(state)
}

/// Name-based setter for external control surfaces.
///
/// Accepts every alias [`parse_state_name`] knows. Returns `false` and
/// leaves the state unchanged if the name is unrecognized.
pub fn set_on_air_state_by_name(name: &str) -> bool {
    match parse_state_name(name) {
        Ok(state) => {
            set_on_air_state(state);
            true
        }
        Err(_) => false,
    }
}
