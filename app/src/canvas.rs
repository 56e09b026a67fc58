//! CPU pixel canvas. Everything is drawn into a `u32` 0RGB buffer that is
//! copied verbatim into the softbuffer surface at presentation time.

use image::RgbaImage;
use perrito_core::{Rect, Vec2};

use crate::theme::Color;

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![pack([0, 0, 0]); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(pack(color));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = self.clip(rect);
        let pixel = pack(color);
        for y in y0..y1 {
            let row = (y * self.width as usize + x0)..(y * self.width as usize + x1);
            self.pixels[row].fill(pixel);
        }
    }

    /// Rectangle outline of the given edge thickness, drawn inward.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: u32, color: Color) {
        let t = thickness as f32;
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y + rect.h - t, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.h), color);
        self.fill_rect(Rect::new(rect.x + rect.w - t, rect.y, t, rect.h), color);
    }

    /// Blends a translucent layer over the whole canvas.
    pub fn overlay(&mut self, color: Color, alpha: u8) {
        for pixel in &mut self.pixels {
            *pixel = blend(*pixel, color, alpha);
        }
    }

    /// Blends a single pixel; no-op outside the canvas.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = blend(self.pixels[idx], color, alpha);
    }

    /// Draws `img` scaled to a `size`-by-`size` square centered on `center`,
    /// nearest-neighbor, optionally mirrored horizontally, alpha-blended.
    pub fn blit_scaled(&mut self, img: &RgbaImage, center: Vec2, size: f32, flipped: bool) {
        if size <= 0.0 || img.width() == 0 || img.height() == 0 {
            return;
        }
        let dest = Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size);
        let (x0, y0, x1, y1) = self.clip(dest);

        for y in y0..y1 {
            for x in x0..x1 {
                let mut u = (x as f32 - dest.x) / size;
                let v = (y as f32 - dest.y) / size;
                if flipped {
                    u = 1.0 - u;
                }
                let sx = ((u * img.width() as f32) as u32).min(img.width() - 1);
                let sy = ((v * img.height() as f32) as u32).min(img.height() - 1);
                let [r, g, b, a] = img.get_pixel(sx, sy).0;
                if a == 0 {
                    continue;
                }
                let idx = y * self.width as usize + x;
                self.pixels[idx] = blend(self.pixels[idx], [r, g, b], a);
            }
        }
    }

    /// Copies the canvas into a presentation buffer of the same layout.
    pub fn copy_to(&self, buf: &mut [u32]) {
        let len = self.pixels.len().min(buf.len());
        buf[..len].copy_from_slice(&self.pixels[..len]);
    }

    /// Pixel at (x, y); test helper.
    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    fn clip(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = rect.x.max(0.0) as usize;
        let y0 = rect.y.max(0.0) as usize;
        let x1 = ((rect.x + rect.w).max(0.0) as usize).min(self.width as usize);
        let y1 = ((rect.y + rect.h).max(0.0) as usize).min(self.height as usize);
        (x0.min(x1), y0, x1, y1.max(y0))
    }
}

#[inline]
fn pack([r, g, b]: Color) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Alpha-blend `fg` over a packed background pixel.
#[inline]
fn blend(bg: u32, [fr, fg, fb]: Color, alpha: u8) -> u32 {
    let a = alpha as u32;
    let inv = 255 - a;
    let br = (bg >> 16) & 0xFF;
    let bgreen = (bg >> 8) & 0xFF;
    let bb = bg & 0xFF;
    let r = (fr as u32 * a + br * inv) / 255;
    let g = (fg as u32 * a + bgreen * inv) / 255;
    let b = (fb as u32 * a + bb * inv) / 255;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn fill_rect_stays_inside_the_canvas() {
        let mut canvas = Canvas::new(10, 10);
        canvas.clear([0, 0, 0]);
        canvas.fill_rect(Rect::new(-5.0, -5.0, 100.0, 100.0), [255, 0, 0]);
        assert_eq!(canvas.pixel(0, 0), pack([255, 0, 0]));
        assert_eq!(canvas.pixel(9, 9), pack([255, 0, 0]));
    }

    #[test]
    fn fill_rect_leaves_the_outside_untouched() {
        let mut canvas = Canvas::new(10, 10);
        canvas.clear([0, 0, 0]);
        canvas.fill_rect(Rect::new(2.0, 2.0, 3.0, 3.0), [0, 255, 0]);
        assert_eq!(canvas.pixel(2, 2), pack([0, 255, 0]));
        assert_eq!(canvas.pixel(4, 4), pack([0, 255, 0]));
        assert_eq!(canvas.pixel(5, 5), pack([0, 0, 0]));
        assert_eq!(canvas.pixel(1, 2), pack([0, 0, 0]));
    }

    #[test]
    fn opaque_overlay_replaces_translucent_blends() {
        let mut canvas = Canvas::new(2, 1);
        canvas.clear([200, 200, 200]);
        canvas.overlay([0, 0, 0], 255);
        assert_eq!(canvas.pixel(0, 0), pack([0, 0, 0]));

        canvas.clear([200, 200, 200]);
        canvas.overlay([0, 0, 0], 0);
        assert_eq!(canvas.pixel(0, 0), pack([200, 200, 200]));
    }

    fn two_tone_image() -> RgbaImage {
        // left column red, right column blue
        let mut img = RgbaImage::new(2, 2);
        for y in 0..2 {
            img.put_pixel(0, y, Rgba([255, 0, 0, 255]));
            img.put_pixel(1, y, Rgba([0, 0, 255, 255]));
        }
        img
    }

    #[test]
    fn blit_mirrors_when_flipped() {
        let img = two_tone_image();

        let mut canvas = Canvas::new(4, 4);
        canvas.clear([0, 0, 0]);
        canvas.blit_scaled(&img, Vec2::new(2.0, 2.0), 4.0, false);
        assert_eq!(canvas.pixel(0, 0), pack([255, 0, 0]));
        assert_eq!(canvas.pixel(3, 0), pack([0, 0, 255]));

        canvas.clear([0, 0, 0]);
        canvas.blit_scaled(&img, Vec2::new(2.0, 2.0), 4.0, true);
        assert_eq!(canvas.pixel(0, 0), pack([0, 0, 255]));
        assert_eq!(canvas.pixel(3, 0), pack([255, 0, 0]));
    }

    #[test]
    fn transparent_source_pixels_are_skipped() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 0]));

        let mut canvas = Canvas::new(2, 2);
        canvas.clear([10, 20, 30]);
        canvas.blit_scaled(&img, Vec2::new(1.0, 1.0), 2.0, false);
        assert_eq!(canvas.pixel(0, 0), pack([10, 20, 30]));
    }
}
