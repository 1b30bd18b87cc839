//! Layout and timing constants.
//!
//! Every tunable of the sign screen lives here so it can be adjusted in
//! one place for a different panel geometry or host firmware.

// Polling loop

/// Cadence of the input polling loop (ms). Also the worst-case latency
/// of the escape / return-to-menu exit checks.
pub const POLL_INTERVAL_MS: u32 = 50;

// Frame

/// Inset of the rounded accent frame from each screen edge (px).
pub const FRAME_MARGIN: u32 = 6;

/// Corner radius of the accent frame (px).
pub const FRAME_RADIUS: u32 = 8;

// Text layout
//
// Scales are multiples of a 6x8 base character cell, so a glyph at
// scale `s` is estimated at `6 * s` px wide and `8 * s` px tall.

/// Estimated glyph advance at scale 1 (px).
pub const CHAR_WIDTH_UNIT: u32 = 6;

/// Estimated glyph height at scale 1 (px).
pub const CHAR_HEIGHT_UNIT: u32 = 8;

/// Vertical position of the title line (px from the top edge).
pub const TITLE_Y: i32 = 14;

/// Largest scale the state label may render at.
pub const LABEL_MAX_SCALE: u8 = 8;

/// Smallest scale the auto-fit search will shrink to.
pub const LABEL_MIN_SCALE: u8 = 2;

/// Horizontal room reserved around the state label (px, both sides combined).
pub const LABEL_SIDE_MARGIN: u32 = 20;

/// The label never renders above this y, so large scales stay inside
/// the accent frame.
pub const LABEL_MIN_Y: i32 = 32;

/// Gap between the bottom of the state label and the subtitle (px).
pub const SUBTITLE_GAP: i32 = 6;

/// Scale of the title and subtitle lines.
pub const MEDIUM_TEXT_SCALE: u8 = 2;

/// Scale of the footer hint lines.
pub const SMALL_TEXT_SCALE: u8 = 1;

/// Footer button-hint line position (px above the bottom edge).
pub const FOOTER_HINT_OFFSET: i32 = 18;

/// Footer remote-change note position (px above the bottom edge).
pub const FOOTER_NOTE_OFFSET: i32 = 30;
