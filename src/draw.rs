use crate::assets::Texture;
use crate::game::GameState;
use crate::geometry::Rect;

pub type Rgba = (u8, u8, u8, u8);

const BACKGROUND: Rgba = (0, 0, 0, 255);
const APPLE: Rgba = (220, 50, 50, 255);
const HEAD: Rgba = (100, 255, 100, 255);
const BODY: Rgba = (255, 255, 255, 255);
const OUTLINE: Rgba = (60, 60, 60, 255);
const TEXT: Rgba = (230, 230, 230, 255);
const ALERT: Rgba = (255, 100, 100, 255);

/// A borrowed RGBA8 frame with clipped drawing helpers.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self { frame, width, height }
    }

    pub fn clear(&mut self, col: Rgba) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&[col.0, col.1, col.2, col.3]);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        self.frame.get(idx..idx + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    pub fn blend_pixel(&mut self, x: u32, y: u32, col: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.frame.len() {
            return;
        }
        let (r, g, b, a) = col;
        let ar = a as u16;
        let iar = (255 - a) as u16;
        let px = &mut self.frame[idx..idx + 4];
        px[0] = ((r as u16 * ar + px[0] as u16 * iar) / 255) as u8;
        px[1] = ((g as u16 * ar + px[1] as u16 * iar) / 255) as u8;
        px[2] = ((b as u16 * ar + px[2] as u16 * iar) / 255) as u8;
        px[3] = 255;
    }

    pub fn fill_rect(&mut self, r: Rect, col: Rgba) {
        let (x0, y0) = (r.x.max(0) as u32, r.y.max(0) as u32);
        let x1 = (r.x + r.w as i32).clamp(0, self.width as i32) as u32;
        let y1 = (r.y + r.h as i32).clamp(0, self.height as i32) as u32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, col);
            }
        }
    }

    pub fn stroke_rect(&mut self, r: Rect, col: Rgba) {
        if r.w == 0 || r.h == 0 || r.x < 0 || r.y < 0 {
            return;
        }
        let (x, y) = (r.x as u32, r.y as u32);
        let x2 = (x + r.w - 1).min(self.width - 1);
        let y2 = (y + r.h - 1).min(self.height - 1);
        for px in x..=x2 {
            self.blend_pixel(px, y, col);
            self.blend_pixel(px, y2, col);
        }
        for py in y..=y2 {
            self.blend_pixel(x, py, col);
            self.blend_pixel(x2, py, col);
        }
    }

    /// Copies `tex` to the top-left corner, clipped to the frame.
    pub fn blit(&mut self, tex: &Texture) {
        let w = tex.width.min(self.width) as usize;
        let h = tex.height.min(self.height);
        for y in 0..h {
            let src = (y * tex.width) as usize * 4;
            let dst = (y * self.width) as usize * 4;
            if let (Some(s), Some(d)) = (tex.rgba.get(src..src + w * 4), self.frame.get_mut(dst..dst + w * 4)) {
                d.copy_from_slice(s);
            }
        }
    }

    pub fn draw_text(&mut self, text: &str, x: u32, y: u32, scale: u32, col: Rgba) {
        let mut cx = x;
        for ch in text.chars() {
            cx += self.draw_char(ch, cx, y, scale, col);
        }
    }

    fn draw_char(&mut self, ch: char, x: u32, y: u32, scale: u32, col: Rgba) -> u32 {
        if let Some(rows) = glyph_5x7(ch) {
            for (ry, row) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (*row >> (4 - rx)) & 1 == 1 {
                        for sy in 0..scale {
                            for sx in 0..scale {
                                self.blend_pixel(x + rx * scale + sx, y + ry as u32 * scale + sy, col);
                            }
                        }
                    }
                }
            }
        }
        5 * scale + scale
    }
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * 6 * scale
}

/// Draws the whole scene for one frame.
pub fn render_game(canvas: &mut Canvas, game: &GameState, background: Option<&Texture>) {
    canvas.clear(BACKGROUND);
    if let Some(tex) = background {
        canvas.blit(tex);
    }

    canvas.fill_rect(game.grid.rect(game.apple), APPLE);

    for (i, &seg) in game.snake.segments().enumerate() {
        let rect = game.grid.rect(seg);
        canvas.fill_rect(rect, if i == 0 { HEAD } else { BODY });
        canvas.stroke_rect(rect, OUTLINE);
    }

    canvas.draw_text(&format!("SCORE: {}", game.score), 8, 8, 2, TEXT);

    let cx = canvas.width / 2;
    let cy = canvas.height / 2;
    if game.is_game_over() {
        let lines = [
            ("GAME OVER".to_string(), ALERT),
            (format!("SCORE: {}", game.score), TEXT),
            ("PRESS R TO RESTART".to_string(), TEXT),
        ];
        for (i, (line, col)) in lines.iter().enumerate() {
            let x = cx.saturating_sub(text_width(line, 2) / 2);
            canvas.draw_text(line, x, (cy + i as u32 * 40).saturating_sub(40), 2, *col);
        }
    } else if game.paused {
        canvas.draw_text("PAUSED", cx.saturating_sub(text_width("PAUSED", 2) / 2), cy, 2, TEXT);
    }
}

fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    let c = ch.to_ascii_uppercase();
    Some(match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        ' ' => [0b00000; 7],
        _ => return None,
    })
}
