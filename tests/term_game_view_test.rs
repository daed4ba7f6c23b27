use tick_tetris::core::{GameEngine, GameSnapshot};
use tick_tetris::term::{color_rgb, AnchorY, GameView, Viewport};
use tick_tetris::types::{Cell, Color, GameState};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameEngine::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 10*2 by 20*1 => 20x20, plus border => 22x22
    let fb = view.render(&snap, false, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = Cell::filled(Color::SkyBlue);

    let fb = GameView::default().render(&snap, false, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, color_rgb(Color::SkyBlue));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let engine = GameEngine::new(9);
    let snap = engine.snapshot();
    let active = snap.active.expect("active piece");

    let view = GameView::default();
    let vp = Viewport::new(40, 24);
    let fb = view.render(&snap, false, vp);

    for coord in active.cells {
        let (x, y) = view.cell_origin(vp, coord).unwrap();
        let glyph = fb.get(x, y).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, color_rgb(active.color));
    }
}

#[test]
fn term_view_side_panel_shows_score_and_lines() {
    let mut snap = GameSnapshot::default();
    snap.score = 300;
    snap.lines = 3;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, false, Viewport::new(60, 24));

    // Frame at x=19..41, panel starts two columns to the right.
    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(1).contains("300"));
    assert!(fb.row_text(3).contains("LINES"));
    assert!(fb.row_text(4).contains('3'));
    assert!((0..24).any(|y| fb.row_text(y).contains("rotate")));
}

#[test]
fn term_view_hides_side_panel_when_narrow() {
    let mut snap = GameSnapshot::default();
    snap.score = 12345;
    let fb = GameView::default().render(&snap, false, Viewport::new(30, 22));
    assert!((0..22).all(|y| !fb.row_text(y).contains("SCORE")));
}

#[test]
fn term_view_overlays() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let mut snap = GameSnapshot::default();

    let fb = view.render(&snap, true, vp);
    assert!(fb.row_text(11).contains("PAUSED"));

    snap.state = GameState::GameOver;
    let fb = view.render(&snap, true, vp);
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(!fb.row_text(11).contains("PAUSED"));

    snap.state = GameState::Running;
    let fb = view.render(&snap, false, vp);
    assert!(!fb.row_text(11).contains("PAUSED"));
}
