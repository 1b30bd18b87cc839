//! embedded-graphics adapter for the [`Panel`] trait.
//!
//! Wraps any `DrawTarget<Color = Rgb565>` with known dimensions. Mono
//! fonts come in fixed sizes, so the logical 1-8 text scale selects the
//! closest bundled font tier rather than magnifying glyphs.

use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_6X10, FONT_6X13, FONT_7X14_BOLD, FONT_8X13_BOLD, FONT_9X15_BOLD,
    FONT_9X18_BOLD,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::render::Panel;

/// [`Panel`] backed by an embedded-graphics draw target.
///
/// Draw errors are swallowed - rendering is total at this layer, and a
/// failed frame is repaired by the next full repaint.
pub struct GraphicsPanel<D> {
    target: D,
}

impl<D> GraphicsPanel<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    pub fn new(target: D) -> Self {
        GraphicsPanel { target }
    }

    /// Hand the draw target back to the host.
    pub fn release(self) -> D {
        self.target
    }
}

fn font_for_scale(scale: u8) -> &'static MonoFont<'static> {
    match scale {
        0 | 1 => &FONT_6X10,
        2 => &FONT_6X13,
        3 => &FONT_7X14_BOLD,
        4 => &FONT_8X13_BOLD,
        5 => &FONT_9X15_BOLD,
        6 => &FONT_9X18_BOLD,
        _ => &FONT_10X20,
    }
}

impl<D> Panel for GraphicsPanel<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn width(&self) -> u32 {
        self.target.size().width
    }

    fn height(&self) -> u32 {
        self.target.size().height
    }

    fn fill(&mut self, color: Rgb565) {
        let _ = self.target.clear(color);
    }

    fn round_rect(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32, color: Rgb565) {
        let rect = Rectangle::new(Point::new(x, y), Size::new(width, height));
        let _ = RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target);
    }

    fn text_centered(&mut self, text: &str, y: i32, scale: u8, fg: Rgb565, bg: Rgb565) {
        let character_style = MonoTextStyleBuilder::new()
            .font(font_for_scale(scale))
            .text_color(fg)
            .background_color(bg)
            .build();
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        let center_x = (self.target.size().width / 2) as i32;
        let _ = Text::with_text_style(text, Point::new(center_x, y), character_style, text_style)
            .draw(&mut self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn font_tiers_grow_with_scale() {
        let mut last_width = 0;
        for scale in 1..=8u8 {
            let width = font_for_scale(scale).character_size.width;
            assert!(width >= last_width);
            last_width = width;
        }
        assert_eq!(font_for_scale(0).character_size, font_for_scale(1).character_size);
    }

    #[test]
    fn adapter_reports_target_dimensions() {
        let panel = GraphicsPanel::new(MockDisplay::<Rgb565>::new());
        assert_eq!(panel.width(), 64);
        assert_eq!(panel.height(), 64);
    }

    #[test]
    fn adapter_draws_without_error() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        let mut panel = GraphicsPanel::new(display);
        panel.fill(Rgb565::BLACK);
        panel.round_rect(6, 6, 52, 52, 8, Rgb565::RED);
        panel.text_centered("ON AIR", 20, 2, Rgb565::WHITE, Rgb565::BLACK);
        panel.commit();

        let display = panel.release();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::BLACK));
    }
}
