//! Per-state visual styles.
//!
//! Each on-air state maps to one [`StyleDescriptor`]: the label and
//! subtitle shown on screen plus the background/text/accent colors.
//! `Standby` and `Live` use a fixed palette computed once at catalog
//! construction; `Off` borrows the host theme's colors and is rebuilt
//! on every lookup so theme changes show up immediately.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::state::OnAirState;

/// The three host theme colors consumed by this screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb565,
    pub primary: Rgb565,
    pub secondary: Rgb565,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Rgb565::BLACK,
            primary: Rgb565::WHITE,
            secondary: pack_rgb(160, 160, 160),
        }
    }
}

/// Visual presentation of one state. Immutable once returned; the
/// renderer never writes back into the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub state: OnAirState,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub background: Rgb565,
    pub text: Rgb565,
    pub accent: Rgb565,
}

/// Pack an RGB888 triple into RGB565, keeping the top 5/6/5 bits of
/// each channel.
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub(crate) const fn label_for(state: OnAirState) -> &'static str {
    match state {
        OnAirState::Off => "OFF AIR",
        OnAirState::Standby => "STANDBY",
        OnAirState::Live => "ON AIR",
    }
}

const fn subtitle_for(state: OnAirState) -> &'static str {
    match state {
        OnAirState::Off => "Studio is idle",
        OnAirState::Standby => "Stand by for cues",
        OnAirState::Live => "Quiet please",
    }
}

/// Style lookup table. `Standby`/`Live` colors are fixed for the life
/// of the catalog; `Off` tracks the theme passed to each lookup.
pub struct StyleCatalog {
    standby: StyleDescriptor,
    live: StyleDescriptor,
}

impl StyleCatalog {
    /// Build the catalog, computing the fixed `Standby`/`Live` palettes
    /// up front. There is no lazy initialization to race on.
    pub fn new() -> Self {
        StyleCatalog {
            standby: StyleDescriptor {
                state: OnAirState::Standby,
                label: label_for(OnAirState::Standby),
                subtitle: subtitle_for(OnAirState::Standby),
                background: pack_rgb(245, 158, 11),
                text: pack_rgb(26, 32, 44),
                accent: pack_rgb(217, 119, 6),
            },
            live: StyleDescriptor {
                state: OnAirState::Live,
                label: label_for(OnAirState::Live),
                subtitle: subtitle_for(OnAirState::Live),
                background: pack_rgb(220, 38, 38),
                text: Rgb565::WHITE,
                accent: pack_rgb(127, 29, 29),
            },
        }
    }

    /// Resolve the style for `state`.
    ///
    /// The `Off` descriptor is rebuilt from `theme` on every call.
    /// Lookup scans the three entries and falls back to `Off` should
    /// no entry match.
    pub fn style_for(&self, state: OnAirState, theme: &Theme) -> StyleDescriptor {
        let off = StyleDescriptor {
            state: OnAirState::Off,
            label: label_for(OnAirState::Off),
            subtitle: subtitle_for(OnAirState::Off),
            background: theme.background,
            text: theme.primary,
            accent: theme.secondary,
        };

        let entries = [off, self.standby, self.live];
        entries
            .iter()
            .find(|style| style.state == state)
            .copied()
            .unwrap_or(off)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::new()
    }
}
