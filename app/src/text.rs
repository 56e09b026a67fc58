//! Text drawing: fontdue rasterization behind a small glyph cache.

use std::collections::HashMap;

use anyhow::anyhow;
use fontdue::{Font, FontSettings};
use perrito_core::Rect;

use crate::canvas::Canvas;
use crate::theme::Color;

struct Glyph {
    bitmap: Vec<u8>,
    width: usize,
    height: usize,
    xmin: i32,
    ymin: i32,
    advance: f32,
}

pub struct TextRenderer {
    font: Font,
    size: f32,
    ascent: f32,
    descent: f32,
    cache: HashMap<char, Glyph>,
}

impl TextRenderer {
    pub fn new(font_data: &[u8], size: f32) -> anyhow::Result<Self> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|err| anyhow!("parsing font: {err}"))?;
        let metrics = font
            .horizontal_line_metrics(size)
            .ok_or_else(|| anyhow!("font has no horizontal metrics"))?;
        Ok(Self {
            font,
            size,
            ascent: metrics.ascent,
            descent: metrics.descent,
            cache: HashMap::new(),
        })
    }

    fn glyph(&mut self, ch: char) -> &Glyph {
        self.cache.entry(ch).or_insert_with(|| {
            let (metrics, bitmap) = self.font.rasterize(ch, self.size);
            Glyph {
                bitmap,
                width: metrics.width,
                height: metrics.height,
                xmin: metrics.xmin,
                ymin: metrics.ymin,
                advance: metrics.advance_width,
            }
        })
    }

    fn measure(&mut self, text: &str) -> f32 {
        text.chars().map(|ch| self.glyph(ch).advance).sum()
    }

    /// Draws `text` with its baseline starting at `(x, y)`.
    pub fn draw(&mut self, canvas: &mut Canvas, text: &str, color: Color, x: f32, y: f32) {
        let mut pen = x;
        for ch in text.chars() {
            let glyph = self.glyph(ch);
            let gx = pen as i32 + glyph.xmin;
            let gy = y as i32 - glyph.ymin - glyph.height as i32;
            let (gw, gh, advance) = (glyph.width, glyph.height, glyph.advance);

            for row in 0..gh {
                for col in 0..gw {
                    let alpha = self.cache[&ch].bitmap[row * gw + col];
                    if alpha > 0 {
                        canvas.blend_pixel(gx + col as i32, gy + row as i32, color, alpha);
                    }
                }
            }
            pen += advance;
        }
    }

    /// Draws `text` centered inside `rect`.
    pub fn draw_centered(&mut self, canvas: &mut Canvas, text: &str, color: Color, rect: Rect) {
        let width = self.measure(text);
        let center = rect.center();
        let x = center.x - width / 2.0;
        // baseline so that the ascent..descent band is vertically centered
        let y = center.y + (self.ascent + self.descent) / 2.0;
        self.draw(canvas, text, color, x, y);
    }
}
