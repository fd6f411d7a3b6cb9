//! GameView: maps a `core::GameEngine` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Two projections of the well are drawn side by side: a front elevation
//! (x across, y up) where deeper cells render darker, and an overhead
//! plan (x across, z down) showing which depth rows are filled. A panel
//! with score, level, lines and the next piece sits under the plan.

use cubewell_core::piece::Tetromino;
use cubewell_core::{shape_cells, GameEngine};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

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

/// A lightweight terminal renderer for the well.
pub struct GameView {
    /// Well cell width in terminal columns.
    cell_w: u16,
    /// Well cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const MIN_PANEL_W: u16 = 12;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current session into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a
    /// framebuffer across frames and only resize when the terminal size
    /// changes.
    pub fn render_into(
        &self,
        engine: &GameEngine,
        paused: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let config = engine.config();
        let (w, h, d) = (
            config.width as u16,
            config.height as u16,
            config.depth as u16,
        );

        let front_w = w * self.cell_w + 2;
        let front_h = h * self.cell_h + 2;
        let plan_w = w * self.cell_w + 2;
        let plan_h = d * self.cell_h + 2;
        let right_w = plan_w.max(MIN_PANEL_W);

        let start_x = viewport.width.saturating_sub(front_w + 2 + right_w) / 2;
        let start_y = viewport.height.saturating_sub(front_h) / 2;
        let plan_x = start_x + front_w + 2;
        let panel_y = start_y + plan_h + 1;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let ghost = engine.projection(engine.current_piece());

        self.draw_front(engine, &ghost, start_x, start_y, fb);
        draw_border(fb, start_x, start_y, front_w, front_h, border);

        self.draw_plan(engine, plan_x, start_y, fb);
        draw_border(fb, plan_x, start_y, plan_w, plan_h, border);

        self.draw_panel(engine, plan_x, panel_y, fb);

        if paused {
            draw_overlay_text(fb, start_x, start_y, front_w, front_h, "PAUSED");
        } else if !engine.is_running() {
            draw_overlay_text(fb, start_x, start_y, front_w, front_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, engine: &GameEngine, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(engine, paused, viewport, &mut fb);
        fb
    }

    /// Front elevation: for each (x, y) column the nearest thing along z
    /// wins, with the active piece in front of the ghost in front of the
    /// settled stack. Depth fades the color.
    fn draw_front(
        &self,
        engine: &GameEngine,
        ghost: &Tetromino,
        start_x: u16,
        start_y: u16,
        fb: &mut FrameBuffer,
    ) {
        let config = engine.config();
        let (w, h, d) = (config.width, config.height, config.depth);
        let piece = engine.current_piece();

        for y in 0..h {
            let row = (h - 1 - y) as u16;
            for x in 0..w {
                let mut drawn = false;
                for z in 0..d {
                    if piece_covers(piece, x, y, z) {
                        let style = CellStyle {
                            fg: depth_faded(piece.color(), z, d),
                            bg: WELL_BG,
                            bold: true,
                            dim: false,
                        };
                        self.fill_well_cell(fb, start_x, start_y, x as u16, row, '█', style);
                        drawn = true;
                        break;
                    }
                    if piece_covers(ghost, x, y, z) {
                        let style = CellStyle {
                            fg: Rgb::new(140, 140, 140),
                            bg: WELL_BG,
                            bold: false,
                            dim: true,
                        };
                        self.fill_well_cell(fb, start_x, start_y, x as u16, row, '░', style);
                        drawn = true;
                        break;
                    }
                    if let Some(color) = engine.grid().color_at(x, y, z) {
                        let style = CellStyle {
                            fg: depth_faded(color, z, d),
                            bg: WELL_BG,
                            bold: false,
                            dim: false,
                        };
                        self.fill_well_cell(fb, start_x, start_y, x as u16, row, '█', style);
                        drawn = true;
                        break;
                    }
                }
                if !drawn {
                    let style = CellStyle {
                        fg: Rgb::new(90, 90, 100),
                        bg: WELL_BG,
                        bold: false,
                        dim: true,
                    };
                    self.fill_well_cell(fb, start_x, start_y, x as u16, row, '·', style);
                }
            }
        }
    }

    /// Overhead plan: for each (x, z) the topmost block wins. The ghost
    /// is skipped; it always shares the active piece's footprint.
    fn draw_plan(&self, engine: &GameEngine, plan_x: u16, plan_y: u16, fb: &mut FrameBuffer) {
        let config = engine.config();
        let (w, h, d) = (config.width, config.height, config.depth);
        let piece = engine.current_piece();

        for z in 0..d {
            for x in 0..w {
                let mut cell = None;
                for y in (0..h).rev() {
                    if piece_covers(piece, x, y, z) {
                        cell = Some((piece.color(), true));
                        break;
                    }
                    if let Some(color) = engine.grid().color_at(x, y, z) {
                        cell = Some((color, false));
                        break;
                    }
                }
                let (ch, style) = match cell {
                    Some((color, bold)) => (
                        '█',
                        CellStyle {
                            fg: color,
                            bg: WELL_BG,
                            bold,
                            dim: false,
                        },
                    ),
                    None => (
                        '·',
                        CellStyle {
                            fg: Rgb::new(90, 90, 100),
                            bg: WELL_BG,
                            bold: false,
                            dim: true,
                        },
                    ),
                };
                self.fill_well_cell(fb, plan_x, plan_y, x as u16, z as u16, ch, style);
            }
        }
    }

    fn draw_panel(&self, engine: &GameEngine, panel_x: u16, panel_y: u16, fb: &mut FrameBuffer) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = panel_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, engine.score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, engine.level(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, engine.lines_cleared(), value);
        y = y.saturating_add(2);

        let next = engine.next_piece();
        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x + 5, y, next.kind().as_str(), value);
        y = y.saturating_add(1);

        // The canonical layouts are flat and at most 4 wide by 3 tall.
        let mini = CellStyle {
            fg: next.color(),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        for cell in shape_cells(next.kind()) {
            let cx = panel_x + cell.x as u16;
            let cy = y + (2 - cell.y as u16);
            fb.put_char(cx, cy, '█', mini);
        }
    }

    fn fill_well_cell(
        &self,
        fb: &mut FrameBuffer,
        frame_x: u16,
        frame_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame_x + 1 + cell_x * self.cell_w;
        let py = frame_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn piece_covers(piece: &Tetromino, x: i32, y: i32, z: i32) -> bool {
    piece.blocks().iter().any(|b| {
        b.position.x as i32 == x && b.position.y as i32 == y && b.position.z as i32 == z
    })
}

/// Fade toward black with depth: z = 0 keeps the full color, the far
/// wall keeps a bit over half.
fn depth_faded(color: Rgb, z: i32, depth: i32) -> Rgb {
    let den = (2 * depth) as u16;
    color.scaled(den - z as u16, den)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let mid_y = y.saturating_add(h / 2);
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    };
    fb.put_str(tx, mid_y, text, style);
}
