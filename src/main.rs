//! Terminal runner: screens, input routing and the frame loop.
//!
//! Crossterm drives input; rendering goes through the framebuffer
//! renderer in `cubewell-term`. The engine itself never sees the
//! terminal, only elapsed time and mapped actions.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use cubewell::core::GameEngine;
use cubewell::input::{handle_key_event, should_quit, InputHandler};
use cubewell::settings::Settings;
use cubewell::term::{screens, FrameBuffer, GameView, TerminalRenderer, Viewport};
use cubewell::types::{GameAction, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu { selected: usize },
    HowToPlay,
    Playing,
    Paused,
    GameOver,
}

fn main() -> Result<()> {
    let config_path = parse_args()?;
    let settings = Settings::load(&config_path)?;
    settings
        .validate()
        .with_context(|| format!("bad settings in {}", config_path.display()))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn parse_args() -> Result<PathBuf> {
    let mut config_path = PathBuf::from("cubewell.json");
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = args
                    .next()
                    .map(PathBuf::from)
                    .context("--config needs a file path")?;
            }
            "--help" | "-h" => {
                println!("usage: cubewell [--config PATH]");
                println!("  --config PATH  settings file (default: cubewell.json)");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(config_path)
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let mut engine = GameEngine::new(settings.game_config(), settings.seed_or_entropy());
    let view = GameView::default();
    let mut input_handler = InputHandler::with_config(settings.das_ms, settings.arr_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let mut screen = Screen::Menu { selected: 0 };

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match screen {
            Screen::Menu { selected } => screens::draw_menu(&mut fb, viewport, selected),
            Screen::HowToPlay => screens::draw_how_to_play(&mut fb, viewport),
            Screen::Playing => view.render_into(&engine, false, viewport, &mut fb),
            Screen::Paused => view.render_into(&engine, true, viewport, &mut fb),
            Screen::GameOver => screens::draw_game_over(
                &mut fb,
                viewport,
                engine.score(),
                engine.level(),
                engine.lines_cleared(),
            ),
        }
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key.code, key.modifiers) {
                            return Ok(());
                        }
                        match dispatch_press(screen, key.code, &mut engine, &mut input_handler) {
                            Some(next) => screen = next,
                            None => return Ok(()),
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if screen == Screen::Playing {
                for action in input_handler.update(TICK_MS) {
                    engine.apply_action(action);
                }
                engine.update(TICK_MS as f32 / 1000.0);
            }
        }
    }
}

/// Route one key press according to the active screen. Returns the next
/// screen, or `None` when the player chose to leave the program.
fn dispatch_press(
    screen: Screen,
    code: KeyCode,
    engine: &mut GameEngine,
    input_handler: &mut InputHandler,
) -> Option<Screen> {
    let next = match screen {
        Screen::Menu { selected } => {
            let count = screens::MENU_ITEMS.len();
            match code {
                KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Screen::Menu {
                    selected: (selected + count - 1) % count,
                },
                KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Screen::Menu {
                    selected: (selected + 1) % count,
                },
                KeyCode::Enter | KeyCode::Char(' ') => match selected {
                    0 => {
                        engine.start();
                        input_handler.reset();
                        Screen::Playing
                    }
                    1 => Screen::HowToPlay,
                    _ => return None,
                },
                _ => Screen::Menu { selected },
            }
        }
        Screen::HowToPlay => Screen::Menu { selected: 1 },
        Screen::Playing => {
            if !engine.is_running() {
                // First key after the overlay moves to the stats screen.
                return Some(Screen::GameOver);
            }
            if let Some(action) = input_handler.handle_key_press(code) {
                engine.apply_action(action);
                return Some(Screen::Playing);
            }
            match handle_key_event(code) {
                Some(GameAction::Pause) => {
                    input_handler.reset();
                    Screen::Paused
                }
                Some(GameAction::Restart) => {
                    engine.start();
                    input_handler.reset();
                    Screen::Playing
                }
                Some(action) => {
                    engine.apply_action(action);
                    Screen::Playing
                }
                None => Screen::Playing,
            }
        }
        Screen::Paused => match handle_key_event(code) {
            Some(GameAction::Pause) => Screen::Playing,
            Some(GameAction::Restart) => {
                engine.start();
                input_handler.reset();
                Screen::Playing
            }
            _ => Screen::Paused,
        },
        Screen::GameOver => match code {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                engine.start();
                input_handler.reset();
                Screen::Playing
            }
            _ => Screen::Menu { selected: 0 },
        },
    };
    Some(next)
}
