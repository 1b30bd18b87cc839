//! The blocking sign screen: input polling, state transitions, redraws.
//!
//! [`show_on_air_sign`] owns the screen until the operator leaves via
//! Escape or the host raises its return-to-menu flag. Each iteration it
//! consumes at most one input event, advances the shared state on
//! Next/Select/Previous, detects state changes made by external actors
//! (a control API writing through [`crate::set_on_air_state`]) and
//! repaints only when something changed. The cadence is a fixed sleep,
//! not an event-driven wake, so exit latency is bounded by one
//! [`POLL_INTERVAL_MS`] interval.

use embedded_hal::delay::DelayNs;

use crate::config::POLL_INTERVAL_MS;
use crate::render::{draw_sign, Panel};
use crate::state::{get_on_air_state, set_on_air_state};
use crate::style::{StyleCatalog, Theme};

/// Input events the sign screen reacts to, after whatever debouncing
/// the host applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Advance to the next state.
    Next,
    /// Step back to the previous state.
    Previous,
    /// Same as [`Next`](InputEvent::Next) on this screen.
    Select,
    /// Leave the screen.
    Escape,
}

/// Source of input events, one per polling iteration.
pub trait Inputs {
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Host firmware services consumed by the sign screen.
pub trait Host {
    /// Wake the display if it is dormant.
    fn wake_screen(&mut self);

    /// Whether the host has asked the screen to return to its menu.
    fn menu_requested(&self) -> bool;

    /// Clear a pending return-to-menu request. Called once on entry.
    fn clear_menu_request(&mut self);

    /// Hand control back to the host menu. Called once on exit.
    fn open_menu(&mut self);

    /// Current theme colors, re-read before every repaint.
    fn theme(&self) -> Theme;
}

/// Run the sign screen until the operator exits.
///
/// Blocks the calling context. On entry the display is woken, any
/// pending menu request is cleared and one unconditional repaint shows
/// whatever state is current. The shared state is left untouched on
/// exit, so it persists across screen visits.
pub fn show_on_air_sign<P, I, H, D>(panel: &mut P, inputs: &mut I, host: &mut H, delay: &mut D)
where
    P: Panel,
    I: Inputs,
    H: Host,
    D: DelayNs,
{
    host.wake_screen();
    host.clear_menu_request();

    let catalog = StyleCatalog::new();
    let mut last_drawn = get_on_air_state();
    draw_sign(panel, &catalog.style_for(last_drawn, &host.theme()));

    while !host.menu_requested() {
        let event = inputs.poll();
        if event == Some(InputEvent::Escape) {
            break;
        }

        let mut state = get_on_air_state();
        let mut redraw = state != last_drawn;

        match event {
            Some(InputEvent::Next) | Some(InputEvent::Select) => {
                state = state.next();
                set_on_air_state(state);
                redraw = true;
            }
            Some(InputEvent::Previous) => {
                state = state.previous();
                set_on_air_state(state);
                redraw = true;
            }
            _ => {}
        }

        if redraw {
            #[cfg(feature = "defmt")]
            defmt::info!("on-air sign: drawing {}", state);
            draw_sign(panel, &catalog.style_for(state, &host.theme()));
            last_drawn = state;
        }

        delay.delay_ms(POLL_INTERVAL_MS);
    }

    host.open_menu();
}
