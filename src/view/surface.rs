use crate::geometry::{Point, Rect, rect};
use crate::style::Color;

/// Font-atlas slot reserved for the checkbox check mark.
pub const ICON_CHECK: u8 = 0x01;

/// Per-glyph measurements from the caller's font atlas. Glyphs are byte
/// values 0-255; the toolkit never rasterizes.
pub trait GlyphMetrics {
    fn glyph_width(&self, glyph: u8) -> i32;
    fn glyph_height(&self, glyph: u8) -> i32;
    fn line_height(&self) -> i32;

    fn text_width(&self, text: &[u8]) -> i32 {
        text.iter().map(|&g| self.glyph_width(g)).sum()
    }
}

/// The draw primitives widgets emit. Implemented by the caller's renderer;
/// `draw_border` has a default body composed of four filled strips.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_glyph(&mut self, at: Point, glyph: u8, color: Color);

    fn draw_border(&mut self, r: Rect, thickness: i32, color: Color) {
        let t = thickness;
        self.fill_rect(rect(r.x, r.y, r.w, t), color);
        self.fill_rect(rect(r.x, r.bottom() - t, r.w, t), color);
        self.fill_rect(rect(r.x, r.y + t, t, r.h - 2 * t), color);
        self.fill_rect(rect(r.right() - t, r.y + t, t, r.h - 2 * t), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;

    struct Strips(Vec<Rect>);

    impl DrawSurface for Strips {
        fn fill_rect(&mut self, rect: Rect, _color: Color) {
            self.0.push(rect);
        }

        fn draw_glyph(&mut self, _at: Point, _glyph: u8, _color: Color) {}
    }

    #[test]
    fn default_border_covers_all_four_edges() {
        let mut surface = Strips(Vec::new());
        surface.draw_border(rect(10, 10, 100, 50), 2, Color::BLACK);
        assert_eq!(
            surface.0,
            vec![
                rect(10, 10, 100, 2),
                rect(10, 58, 100, 2),
                rect(10, 12, 2, 46),
                rect(108, 12, 2, 46),
            ]
        );
    }
}
