//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The game simulates a fixed 800x600 world; the view projects world
//! coordinates onto whatever cell grid the terminal offers, and crops the
//! background art so it fills the viewport without stretching.

use crate::assets::{Assets, TextArt};
use crate::core::{GameState, Word};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOTTOM_MARGIN, PLAY_HEIGHT, PLAY_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Source crop rectangle into background art, in art cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Compute the background crop that fills a viewport without stretching.
///
/// The larger of width-fit and height-fit wins: when the viewport is wider
/// than the art, the art is cropped vertically (centered); when taller,
/// horizontally. The crop always has the viewport's aspect ratio.
pub fn background_source_rect(art_w: f32, art_h: f32, vp_w: f32, vp_h: f32) -> SourceRect {
    let viewport_ratio = vp_w / vp_h;
    let art_ratio = art_w / art_h;

    if viewport_ratio > art_ratio {
        let src_h = art_w / viewport_ratio;
        let y_off = (art_h - src_h) / 2.0;
        SourceRect {
            x: 0.0,
            y: y_off,
            w: art_w,
            h: src_h,
        }
    } else {
        let src_w = art_h * viewport_ratio;
        let x_off = (art_w - src_w) / 2.0;
        SourceRect {
            x: x_off,
            y: 0.0,
            w: src_w,
            h: art_h,
        }
    }
}

/// A lightweight terminal renderer for the typing game.
#[derive(Debug, Default)]
pub struct GameView {}

impl GameView {
    pub fn new() -> Self {
        Self {}
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, assets: &Assets, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        self.draw_background(&mut fb, assets.background.as_ref());

        if !state.game_over() {
            self.draw_danger_line(&mut fb, viewport);
            for word in state.words() {
                self.draw_word(&mut fb, viewport, word, assets.marker.as_ref());
            }
            self.draw_hud(&mut fb, state, viewport);
        } else {
            self.draw_game_over(&mut fb, state, viewport);
        }

        fb
    }

    /// Project world coordinates onto the cell grid.
    fn project(&self, x: f32, y: f32, viewport: Viewport) -> (u16, u16) {
        let cx = (x / PLAY_WIDTH * viewport.width as f32) as i32;
        let cy = (y / PLAY_HEIGHT * viewport.height as f32) as i32;
        (
            cx.clamp(0, viewport.width.saturating_sub(1) as i32) as u16,
            cy.clamp(0, viewport.height.saturating_sub(1) as i32) as u16,
        )
    }

    fn draw_background(&self, fb: &mut FrameBuffer, art: Option<&TextArt>) {
        let style = CellStyle::new(Rgb::new(70, 90, 120), Rgb::new(5, 10, 25));

        let Some(art) = art else {
            // No asset: flat fill.
            fb.clear(style);
            return;
        };

        let src = background_source_rect(
            art.width() as f32,
            art.height() as f32,
            fb.width() as f32,
            fb.height() as f32,
        );

        // Nearest-neighbour sample of the cropped region.
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let sx = src.x + (x as f32 + 0.5) / fb.width() as f32 * src.w;
                let sy = src.y + (y as f32 + 0.5) / fb.height() as f32 * src.h;
                let ch = art.get(sx as usize, sy as usize);
                fb.put_char(x, y, ch, style);
            }
        }
    }

    fn draw_danger_line(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let (_, row) = self.project(0.0, PLAY_HEIGHT - BOTTOM_MARGIN, viewport);
        let style = CellStyle::new(Rgb::new(120, 50, 50), Rgb::new(5, 10, 25));
        for x in 0..fb.width() {
            fb.put_char(x, row, '─', style);
        }
    }

    fn draw_word(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        word: &Word,
        marker: Option<&TextArt>,
    ) {
        let (cx, cy) = self.project(word.x, word.y, viewport);
        let bg = Rgb::new(5, 10, 25);

        let mut text_x = cx;
        if let Some(marker) = marker {
            let marker_style = CellStyle::new(Rgb::new(255, 140, 60), bg).bold();
            for my in 0..marker.height() {
                for mx in 0..marker.width() {
                    let ch = marker.get(mx, my);
                    if ch != ' ' {
                        fb.put_char(
                            cx.saturating_add(mx as u16),
                            cy.saturating_add(my as u16),
                            ch,
                            marker_style,
                        );
                    }
                }
            }
            text_x = cx.saturating_add(marker.width() as u16 + 1);
        }

        let text_style = CellStyle::new(Rgb::new(240, 240, 240), bg).bold();
        fb.put_str(text_x, cy, word.text, text_style);
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let bg = Rgb::new(0, 0, 0);
        let white = CellStyle::new(Rgb::new(240, 240, 240), bg);
        let green = CellStyle::new(Rgb::new(80, 220, 120), bg).bold();
        let gold = CellStyle::new(Rgb::new(235, 200, 80), bg).bold();
        let red = CellStyle::new(Rgb::new(230, 90, 90), bg).bold();
        let blue = CellStyle::new(Rgb::new(100, 150, 240), bg).bold();

        fb.put_str(1, 0, &format!("High Score: {}", state.high_score()), gold);

        let right_col = viewport.width.saturating_sub(14);
        fb.put_str(right_col, 0, &format!("Score: {}", state.score()), green);
        fb.put_str(right_col, 1, &format!("Lives: {}", state.lives()), red);
        fb.put_str(right_col, 2, &format!("Level: {}", state.level()), blue);

        let input_row = viewport.height.saturating_sub(1);
        fb.put_str(1, input_row, &format!("Type: {}", state.input()), white);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let bg = Rgb::new(0, 0, 0);
        let banner = CellStyle::new(Rgb::new(230, 90, 90), bg).bold();
        let white = CellStyle::new(Rgb::new(240, 240, 240), bg);
        let gold = CellStyle::new(Rgb::new(235, 200, 80), bg).bold();
        let dim = CellStyle::new(Rgb::new(150, 150, 150), bg);

        let mid = viewport.height / 2;
        fb.put_str_centered(mid.saturating_sub(2), "GAME OVER!", banner);
        fb.put_str_centered(mid, &format!("Final Score: {}", state.score()), white);
        fb.put_str_centered(mid + 1, &format!("High Score: {}", state.high_score()), gold);
        fb.put_str_centered(mid + 3, "Press R to Restart", dim);
        fb.put_str_centered(mid + 4, "Press ESC to Exit", dim);
    }
}
