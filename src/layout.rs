//! Pure layout math for the sign screen.
//!
//! Kept free of any display type so it can be unit tested on the host.

use crate::config::{
    CHAR_HEIGHT_UNIT, CHAR_WIDTH_UNIT, LABEL_MAX_SCALE, LABEL_MIN_SCALE, LABEL_MIN_Y,
    LABEL_SIDE_MARGIN, SUBTITLE_GAP,
};

/// Estimated pixel width of `len` glyphs at `scale`.
pub fn text_width(len: usize, scale: u8) -> u32 {
    len as u32 * CHAR_WIDTH_UNIT * scale as u32
}

/// Pick the largest scale at which a `label_len`-glyph label fits the
/// screen, leaving [`LABEL_SIDE_MARGIN`] px of horizontal room.
///
/// Starts at [`LABEL_MAX_SCALE`] and shrinks until the estimate fits or
/// [`LABEL_MIN_SCALE`] is reached, whichever comes first.
pub fn fit_label_scale(label_len: usize, screen_width: u32) -> u8 {
    let available = screen_width.saturating_sub(LABEL_SIDE_MARGIN);
    let mut scale = LABEL_MAX_SCALE;
    while scale > LABEL_MIN_SCALE {
        if text_width(label_len, scale) <= available {
            break;
        }
        scale -= 1;
    }
    scale
}

/// Vertical position of the state label: screen center shifted up by
/// half the glyph height, clamped so large scales stay below the frame.
pub fn label_y(screen_height: u32, scale: u8) -> i32 {
    let y = screen_height as i32 / 2 - scale as i32 * (CHAR_HEIGHT_UNIT as i32 / 2);
    y.max(LABEL_MIN_Y)
}

/// Vertical position of the subtitle, just below a label drawn at
/// (`label_y`, `scale`).
pub fn subtitle_y(label_y: i32, scale: u8) -> i32 {
    label_y + scale as i32 * CHAR_HEIGHT_UNIT as i32 + SUBTITLE_GAP
}
