//! The session orchestrator: one well, one falling piece, one preview.
//!
//! All mutation flows through a handful of synchronous calls driven by the
//! shell: `update` with elapsed time once per frame, and the input-mapped
//! action calls between frames. Failed moves and rotations roll back in
//! place, so every call either fully applies or leaves the session
//! untouched.

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::piece::Tetromino;
use crate::rng::SimpleRng;
use crate::scoring;
use crate::types::{Axis, GameAction, Rgb, ShapeKind, Vec3};

const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// One play session. Deterministic given its seed and the sequence of
/// calls; never reads the clock on its own.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: SimpleRng,
    current: Tetromino,
    next: Tetromino,
    score: u32,
    level: u32,
    lines: u32,
    fall_timer: f32,
    running: bool,
}

impl GameEngine {
    /// Build an idle session. Pieces are already spawned so renderers have
    /// something to show, but nothing moves until [`start`](Self::start).
    pub fn new(config: GameConfig, seed: u32) -> GameEngine {
        let grid = Grid::new(config.width, config.height, config.depth);
        let mut rng = SimpleRng::new(seed);
        let kind = rng.next_shape();
        let color = rng.next_color();
        let current = spawn_piece(&config, kind, color);
        let next = preview_piece(&config, &mut rng);
        GameEngine {
            config,
            grid,
            rng,
            current,
            next,
            score: 0,
            level: 0,
            lines: 0,
            fall_timer: 0.0,
            running: false,
        }
    }

    /// Begin (or restart) a session: empty the well, zero the tallies and
    /// spawn a fresh current and preview piece. The random stream carries
    /// on from wherever it was, so a restart plays a different game.
    pub fn start(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.fall_timer = 0.0;
        let kind = self.rng.next_shape();
        let color = self.rng.next_color();
        self.current = spawn_piece(&self.config, kind, color);
        self.next = preview_piece(&self.config, &mut self.rng);
        self.running = !self.grid.collides(&self.current);
    }

    /// Advance the fall timer by `delta_seconds`. Once the accumulated
    /// time reaches the level's fall interval the piece takes one gravity
    /// step, and the accumulator resets whether or not the step locked.
    pub fn update(&mut self, delta_seconds: f32) {
        if !self.running {
            return;
        }
        self.fall_timer += delta_seconds;
        if self.fall_timer >= scoring::fall_interval(&self.config, self.level) {
            self.fall_timer = 0.0;
            self.gravity_step();
        }
    }

    /// Translate the current piece, rolling back if the result collides.
    /// Returns whether the move stuck.
    pub fn move_piece(&mut self, direction: Vec3) -> bool {
        if !self.running {
            return false;
        }
        self.current.translate(direction);
        if self.grid.collides(&self.current) {
            self.current.translate(-direction);
            return false;
        }
        true
    }

    /// Rotate the current piece about `axis`, rolling back with the
    /// opposite angle if the result collides. Returns whether the
    /// rotation stuck.
    pub fn rotate_piece(&mut self, angle_degrees: f32, axis: Axis) -> bool {
        if !self.running {
            return false;
        }
        self.current.rotate(angle_degrees, axis);
        if self.grid.collides(&self.current) {
            self.current.rotate(-angle_degrees, axis);
            return false;
        }
        true
    }

    /// Drop the current piece straight onto its landing spot. It locks on
    /// the next gravity step, leaving one interval of slide time.
    pub fn hard_drop(&mut self) {
        if !self.running {
            return;
        }
        self.current = self.projection(&self.current);
    }

    /// Where `piece` would land if dropped straight down.
    pub fn projection(&self, piece: &Tetromino) -> Tetromino {
        let mut probe = piece.clone();
        loop {
            probe.translate(DOWN);
            if self.grid.collides(&probe) {
                probe.translate(-DOWN);
                return probe;
            }
        }
    }

    /// Route one semantic input action to the matching engine call.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.move_piece(Vec3::new(-1.0, 0.0, 0.0));
            }
            GameAction::MoveRight => {
                self.move_piece(Vec3::new(1.0, 0.0, 0.0));
            }
            GameAction::MoveForward => {
                self.move_piece(Vec3::new(0.0, 0.0, -1.0));
            }
            GameAction::MoveBackward => {
                self.move_piece(Vec3::new(0.0, 0.0, 1.0));
            }
            GameAction::SoftDrop => {
                self.move_piece(DOWN);
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateX => {
                self.rotate_piece(90.0, Axis::X);
            }
            GameAction::RotateY => {
                self.rotate_piece(90.0, Axis::Y);
            }
            GameAction::RotateZ => {
                self.rotate_piece(90.0, Axis::Z);
            }
            GameAction::Restart => self.start(),
            // Pausing is a screen concern; the engine itself never pauses.
            GameAction::Pause => {}
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_piece(&self) -> &Tetromino {
        &self.current
    }

    pub fn next_piece(&self) -> &Tetromino {
        &self.next
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn gravity_step(&mut self) {
        self.current.translate(DOWN);
        if self.grid.collides(&self.current) {
            self.current.translate(-DOWN);
            self.lock_current();
        }
    }

    fn lock_current(&mut self) {
        self.grid.place(&self.current);
        let cleared = self.grid.clear_full_layers();
        if cleared > 0 {
            // Award with the level held before these lines count toward it.
            self.score += scoring::layer_score(&self.config, cleared, self.level);
            self.lines += cleared;
            self.level = scoring::level_for_lines(&self.config, self.lines);
        }
        self.current = spawn_piece(&self.config, self.next.kind(), self.next.color());
        self.next = preview_piece(&self.config, &mut self.rng);
        if self.grid.collides(&self.current) {
            self.running = false;
        }
    }
}

/// A fresh piece of the given identity, clamped into the well at the
/// spawn point.
fn spawn_piece(config: &GameConfig, kind: ShapeKind, color: Rgb) -> Tetromino {
    let mut piece = Tetromino::new(kind, color);
    piece.translate(config.spawn_position());
    clamp_into_bounds(config, &mut piece);
    piece
}

/// A freshly drawn piece parked at the preview position outside the well.
fn preview_piece(config: &GameConfig, rng: &mut SimpleRng) -> Tetromino {
    let mut piece = Tetromino::new(rng.next_shape(), rng.next_color());
    piece.translate(config.preview_position());
    piece
}

/// Shift the whole piece until every block is inside the well. Each block
/// is reexamined after earlier shifts, never moved on its own.
fn clamp_into_bounds(config: &GameConfig, piece: &mut Tetromino) {
    for i in 0..piece.blocks().len() {
        let p = piece.blocks()[i].position;
        let shift = Vec3::new(
            clamp_shift(p.x, config.width),
            clamp_shift(p.y, config.height),
            clamp_shift(p.z, config.depth),
        );
        if shift != Vec3::ZERO {
            piece.translate(shift);
        }
    }
}

fn clamp_shift(coord: f32, dim: i32) -> f32 {
    let c = coord as i32;
    if c < 0 {
        (-c) as f32
    } else if c >= dim {
        (dim - 1 - c) as f32
    } else {
        0.0
    }
}
