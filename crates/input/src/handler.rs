//! DAS/ARR input handler for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS};

/// Direction a movement key is holding the piece toward. Left/right run
/// along x, forward/backward along z; one slot covers all four, so the
/// most recently pressed direction wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateralDirection {
    Left,
    Right,
    Forward,
    Backward,
    None,
}

fn lateral_action(direction: LateralDirection) -> Option<GameAction> {
    match direction {
        LateralDirection::Left => Some(GameAction::MoveLeft),
        LateralDirection::Right => Some(GameAction::MoveRight),
        LateralDirection::Forward => Some(GameAction::MoveForward),
        LateralDirection::Backward => Some(GameAction::MoveBackward),
        LateralDirection::None => None,
    }
}

/// Tracks input state for DAS/ARR handling.
#[derive(Debug, Clone)]
pub struct InputHandler {
    lateral: LateralDirection,
    down_held: bool,
    last_key_time: std::time::Instant,
    lateral_das_timer: u32,
    down_das_timer: u32,
    lateral_arr_accumulator: u32,
    down_arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            lateral: LateralDirection::None,
            down_held: false,
            last_key_time: std::time::Instant::now(),
            lateral_das_timer: 0,
            down_das_timer: 0,
            lateral_arr_accumulator: 0,
            down_arr_accumulator: 0,
            das_delay,
            // The repeat loop drains the accumulator in arr_rate steps; a
            // zero rate would never drain it.
            arr_rate: arr_rate.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    fn direction_for(code: KeyCode) -> Option<LateralDirection> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(LateralDirection::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(LateralDirection::Right)
            }
            KeyCode::Up | KeyCode::Char('q') | KeyCode::Char('Q') => {
                Some(LateralDirection::Forward)
            }
            KeyCode::Down | KeyCode::Char('e') | KeyCode::Char('E') => {
                Some(LateralDirection::Backward)
            }
            _ => None,
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        if let Some(direction) = Self::direction_for(code) {
            self.last_key_time = std::time::Instant::now();
            if self.lateral == direction {
                return None;
            }
            self.lateral = direction;
            self.lateral_das_timer = 0;
            self.lateral_arr_accumulator = 0;
            return lateral_action(direction);
        }
        match code {
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.last_key_time = std::time::Instant::now();
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down_das_timer = 0;
                    self.down_arr_accumulator = 0;
                    Some(GameAction::SoftDrop)
                }
            }
            _ => None,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(direction) = Self::direction_for(code) {
            if self.lateral == direction {
                self.lateral = LateralDirection::None;
                self.lateral_das_timer = 0;
                self.lateral_arr_accumulator = 0;
            }
            return;
        }
        if matches!(code, KeyCode::Char('s') | KeyCode::Char('S')) {
            self.down_held = false;
            self.down_das_timer = 0;
            self.down_arr_accumulator = 0;
        }
    }

    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();

        // Auto-release when terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            if self.lateral != LateralDirection::None {
                self.lateral = LateralDirection::None;
                self.lateral_das_timer = 0;
                self.lateral_arr_accumulator = 0;
            }
            if self.down_held {
                self.down_held = false;
                self.down_das_timer = 0;
                self.down_arr_accumulator = 0;
            }
        }

        if let Some(action) = lateral_action(self.lateral) {
            let prev_das = self.lateral_das_timer;
            self.lateral_das_timer += elapsed_ms;

            if self.lateral_das_timer >= self.das_delay {
                let excess = if prev_das < self.das_delay {
                    self.lateral_das_timer - self.das_delay
                } else {
                    elapsed_ms
                };
                self.lateral_arr_accumulator += excess;

                while self.lateral_arr_accumulator >= self.arr_rate {
                    let _ = actions.try_push(action);
                    self.lateral_arr_accumulator -= self.arr_rate;
                }
            }
        } else {
            self.lateral_das_timer = 0;
            self.lateral_arr_accumulator = 0;
        }

        if self.down_held {
            let prev_das = self.down_das_timer;
            self.down_das_timer += elapsed_ms;

            if self.down_das_timer >= SOFT_DROP_DAS_MS {
                let excess = if prev_das < SOFT_DROP_DAS_MS {
                    self.down_das_timer - SOFT_DROP_DAS_MS
                } else {
                    elapsed_ms
                };
                self.down_arr_accumulator += excess;
                while self.down_arr_accumulator >= SOFT_DROP_ARR_MS {
                    let _ = actions.try_push(GameAction::SoftDrop);
                    self.down_arr_accumulator -= SOFT_DROP_ARR_MS;
                }
            }
        } else {
            self.down_das_timer = 0;
            self.down_arr_accumulator = 0;
        }

        actions
    }

    pub fn reset(&mut self) {
        self.lateral = LateralDirection::None;
        self.down_held = false;
        self.last_key_time = std::time::Instant::now();
        self.lateral_das_timer = 0;
        self.down_das_timer = 0;
        self.lateral_arr_accumulator = 0;
        self.down_arr_accumulator = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
