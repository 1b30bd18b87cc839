//! Full-frame rendering of the sign screen.
//!
//! Drawing goes through the narrow [`Panel`] trait so the routine works
//! against any display the host owns (and against a recording mock in
//! tests). [`crate::panel::GraphicsPanel`] adapts any embedded-graphics
//! draw target to it.

use embedded_graphics::pixelcolor::Rgb565;

use crate::config::{
    FOOTER_HINT_OFFSET, FOOTER_NOTE_OFFSET, FRAME_MARGIN, FRAME_RADIUS, MEDIUM_TEXT_SCALE,
    SMALL_TEXT_SCALE, TITLE_Y,
};
use crate::layout;
use crate::style::StyleDescriptor;

const TITLE: &str = "STUDIO STATUS";
const FOOTER_HINT: &str = "Next/Sel change  Prev back  Esc exit";
const FOOTER_NOTE: &str = "State updates instantly from remote";

/// The display primitives this screen needs from the host, nothing more.
///
/// Text scales are multiples of a 6x8 character cell; implementations
/// render at the nearest size they support.
pub trait Panel {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole screen with one color.
    fn fill(&mut self, color: Rgb565);

    /// Stroke a rounded rectangle outline.
    fn round_rect(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32, color: Rgb565);

    /// Draw `text` horizontally centered, with its top edge at `y`.
    fn text_centered(&mut self, text: &str, y: i32, scale: u8, fg: Rgb565, bg: Rgb565);

    /// Push any buffered drawing to the glass. No-op for unbuffered
    /// displays.
    fn commit(&mut self) {}
}

/// Repaint the entire screen for one style. Unconditional - no partial
/// or differential drawing.
pub fn draw_sign(panel: &mut impl Panel, style: &StyleDescriptor) {
    let width = panel.width();
    let height = panel.height();

    panel.fill(style.background);
    panel.round_rect(
        FRAME_MARGIN as i32,
        FRAME_MARGIN as i32,
        width - 2 * FRAME_MARGIN,
        height - 2 * FRAME_MARGIN,
        FRAME_RADIUS,
        style.accent,
    );
    panel.text_centered(TITLE, TITLE_Y, MEDIUM_TEXT_SCALE, style.text, style.background);

    let scale = layout::fit_label_scale(style.label.len(), width);
    let label_y = layout::label_y(height, scale);
    panel.text_centered(style.label, label_y, scale, style.text, style.background);

    panel.text_centered(
        style.subtitle,
        layout::subtitle_y(label_y, scale),
        MEDIUM_TEXT_SCALE,
        style.text,
        style.background,
    );

    panel.text_centered(
        FOOTER_NOTE,
        height as i32 - FOOTER_NOTE_OFFSET,
        SMALL_TEXT_SCALE,
        style.text,
        style.background,
    );
    panel.text_centered(
        FOOTER_HINT,
        height as i32 - FOOTER_HINT_OFFSET,
        SMALL_TEXT_SCALE,
        style.text,
        style.background,
    );

    panel.commit();
}
