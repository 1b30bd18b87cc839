//! Unified error type for onair-sign.
//!
//! We avoid `alloc` - variants carry no heap data. Implements
//! `defmt::Format` for efficient on-target logging when the `defmt`
//! feature is enabled.

/// Top-level error type used across the crate.
///
/// The taxonomy is deliberately tiny: name parsing is the only fallible
/// operation. State access, style lookup and rendering are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A state name did not match any known alias.
    InvalidStateName,
}
