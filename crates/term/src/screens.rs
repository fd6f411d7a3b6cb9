//! Full-screen menu, help and game-over views.
//!
//! Like [`GameView`](crate::GameView) these are pure framebuffer
//! painters; the shell decides which one is on screen.

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::game_view::Viewport;
use crate::types::Rgb;

/// Menu entries in display order; the shell indexes into this.
pub const MENU_ITEMS: [&str; 3] = ["PLAY", "HOW TO PLAY", "QUIT"];

const TITLE: &str = "C U B E W E L L";

fn title_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(120, 220, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    }
}

fn text_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(200, 200, 200),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: false,
    }
}

fn faint_style() -> CellStyle {
    CellStyle {
        dim: true,
        ..text_style()
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}

pub fn draw_menu(fb: &mut FrameBuffer, viewport: Viewport, selected: usize) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Cell::default());

    let top = viewport.height.saturating_sub(10) / 2;
    put_centered(fb, viewport, top, TITLE, title_style());

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let y = top + 3 + 2 * i as u16;
        if i == selected {
            let marker = CellStyle {
                bold: true,
                ..text_style()
            };
            let w = item.chars().count() as u16 + 2;
            let x = viewport.width.saturating_sub(w) / 2;
            fb.put_str(x, y, "▸ ", marker);
            fb.put_str(x + 2, y, item, marker);
        } else {
            put_centered(fb, viewport, y, item, faint_style());
        }
    }
}

pub fn draw_how_to_play(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Cell::default());

    let lines: [(&str, &str); 7] = [
        ("MOVE", "LEFT/RIGHT OR A/D"),
        ("DEPTH", "UP/DOWN OR Q/E"),
        ("SOFT DROP", "S"),
        ("ROTATE", "Z X C (ABOUT Z, X, Y)"),
        ("HARD DROP", "SPACE"),
        ("PAUSE", "P"),
        ("RESTART", "R"),
    ];

    let top = viewport.height.saturating_sub(lines.len() as u16 + 6) / 2;
    put_centered(fb, viewport, top, "HOW TO PLAY", title_style());

    let key_x = viewport.width.saturating_sub(32) / 2;
    for (i, (what, keys)) in lines.iter().enumerate() {
        let y = top + 2 + i as u16;
        fb.put_str(key_x, y, what, text_style());
        fb.put_str(key_x + 11, y, keys, faint_style());
    }

    put_centered(
        fb,
        viewport,
        top + 4 + lines.len() as u16,
        "PRESS ANY KEY TO RETURN",
        faint_style(),
    );
}

pub fn draw_game_over(
    fb: &mut FrameBuffer,
    viewport: Viewport,
    score: u32,
    level: u32,
    lines: u32,
) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Cell::default());

    let top = viewport.height.saturating_sub(10) / 2;
    put_centered(fb, viewport, top, "GAME OVER", title_style());

    let stat_x = viewport.width.saturating_sub(14) / 2;
    let stats = [("SCORE", score), ("LEVEL", level), ("LINES", lines)];
    for (i, (label, value)) in stats.iter().enumerate() {
        let y = top + 2 + i as u16;
        fb.put_str(stat_x, y, label, text_style());
        fb.put_u32(stat_x + 8, y, *value, text_style());
    }

    put_centered(
        fb,
        viewport,
        top + 7,
        "R TO PLAY AGAIN / ANY KEY FOR MENU",
        faint_style(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        let chars: Vec<char> = needle.chars().collect();
        for y in 0..fb.height() {
            let row: Vec<char> = (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect();
            if row.windows(chars.len()).any(|w| w == chars.as_slice()) {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_menu_lists_every_item_and_marks_selection() {
        let mut fb = FrameBuffer::new(80, 24);
        draw_menu(&mut fb, Viewport::new(80, 24), 1);
        for item in MENU_ITEMS {
            assert!(contains_text(&fb, item), "{item} missing");
        }
        assert!(contains_text(&fb, "▸ HOW TO PLAY"));
        let markers = fb.cells().iter().filter(|c| c.ch == '▸').count();
        assert_eq!(markers, 1);
    }

    #[test]
    fn test_how_to_play_lists_the_bindings() {
        let mut fb = FrameBuffer::new(80, 24);
        draw_how_to_play(&mut fb, Viewport::new(80, 24));
        for needle in ["HOW TO PLAY", "SOFT DROP", "ROTATE", "SPACE"] {
            assert!(contains_text(&fb, needle), "{needle} missing");
        }
    }

    #[test]
    fn test_game_over_shows_final_stats() {
        let mut fb = FrameBuffer::new(80, 24);
        draw_game_over(&mut fb, Viewport::new(80, 24), 1200, 3, 31);
        assert!(contains_text(&fb, "GAME OVER"));
        assert!(contains_text(&fb, "1200"));
        assert!(contains_text(&fb, "31"));
    }
}
