use cubewell::core::{GameConfig, GameEngine};
use cubewell::term::{screens, FrameBuffer, GameView, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_well_frame_and_panel() {
    let mut engine = GameEngine::new(GameConfig::default(), 1);
    engine.start();

    let view = GameView::default();
    let fb = view.render(&engine, false, Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains('┌'));
    assert!(all.contains('┘'));
    assert!(all.contains("SCORE"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
    assert!(all.contains('█'), "the active piece should be visible");
}

#[test]
fn term_view_shows_settled_blocks_after_a_lock() {
    let mut engine = GameEngine::new(GameConfig::default(), 1);
    engine.start();
    engine.hard_drop();
    engine.update(1.0);

    let view = GameView::default();
    let fb = view.render(&engine, false, Viewport::new(80, 24));

    // Settled cells render in both the front view and the overhead plan,
    // alongside the freshly spawned piece.
    let blocks = screen_text(&fb).matches('█').count();
    assert!(blocks >= 16, "expected settled and active blocks, got {blocks}");
}

#[test]
fn term_view_overlays_pause_banner() {
    let mut engine = GameEngine::new(GameConfig::default(), 1);
    engine.start();

    let view = GameView::default();
    let fb = view.render(&engine, true, Viewport::new(80, 24));
    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn term_view_survives_tiny_viewports() {
    let mut engine = GameEngine::new(GameConfig::default(), 1);
    engine.start();

    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (20, 6)] {
        let fb = view.render(&engine, false, Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}

#[test]
fn term_menu_and_game_over_screens_render() {
    let mut fb = FrameBuffer::new(60, 20);
    let vp = Viewport::new(60, 20);

    screens::draw_menu(&mut fb, vp, 0);
    let menu = screen_text(&fb);
    assert!(menu.contains("PLAY"));
    assert!(menu.contains("QUIT"));

    screens::draw_game_over(&mut fb, vp, 1200, 3, 31);
    let over = screen_text(&fb);
    assert!(over.contains("GAME OVER"));
    assert!(over.contains("1200"));
}
