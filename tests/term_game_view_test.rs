use tile_blocks::core::Session;
use tile_blocks::term::{AnchorY, Button, FrameBuffer, GameView, Viewport};
use tile_blocks::types::{GameOverReason, Phase, Rgb};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners_below_button_bar() {
    let snap = Session::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the frame is 22x17; the button bar adds one row on top.
    let vp = Viewport::new(22, 18);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 17).unwrap().ch, '└');
    assert_eq!(fb.get(21, 17).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut snap = Session::new(1).snapshot();
    snap.grid[14][0] = Some(Rgb::new(0, 0, 255));
    snap.obstacle = None;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 18));

    // Inside the border: (1, 2) is the top-left cell.
    let y = 2 + 14;
    assert_eq!(fb.get(1, y).unwrap().ch, '█');
    assert_eq!(fb.get(2, y).unwrap().ch, '█');
    assert_eq!(fb.get(3, y).unwrap().ch, '·');
}

#[test]
fn term_view_draws_obstacle_glyph() {
    let session = Session::new(3);
    let snap = session.snapshot();
    let o = snap.obstacle.unwrap();

    let fb = GameView::default().render(&snap, Viewport::new(22, 18));
    let x = 1 + o.x as u16 * 2;
    let y = 2 + o.y as u16;
    assert_eq!(fb.get(x, y).unwrap().ch, '▓');
    assert_eq!(fb.get(x + 1, y).unwrap().ch, '▓');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = Session::new(1).snapshot();
    snap.score = 1234;

    let view = GameView::default();
    let all = screen_text(&view.render(&snap, Viewport::new(60, 18)));

    assert!(all.contains("TIME"));
    assert!(all.contains("60s"));
    assert!(all.contains("LIVES"));
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = Session::new(1).snapshot();
    let view = GameView::default();

    // Bar + frame is 18 rows tall: start_y = (30 - 18) / 2 = 6, frame below it.
    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 7).unwrap().ch, '┌');

    let top = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = top.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
}

#[test]
fn term_view_pause_button_reflects_state() {
    let mut session = Session::new(1);
    let view = GameView::default();
    let vp = Viewport::new(22, 18);

    // Buttons sit at x = 11, 15, 19 on row 0; the glyph is one column in.
    let fb = view.render(&session.snapshot(), vp);
    assert_eq!(fb.get(12, 0).unwrap().ch, '↺');
    assert_eq!(fb.get(16, 0).unwrap().ch, '‖');
    assert_eq!(fb.get(20, 0).unwrap().ch, '✕');

    session.toggle_pause();
    let fb = view.render(&session.snapshot(), vp);
    assert_eq!(fb.get(16, 0).unwrap().ch, '▶');
    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn term_view_button_hit_testing() {
    let snap = Session::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(22, 18);

    assert_eq!(view.button_at(&snap, vp, 11, 0), Some(Button::Restart));
    assert_eq!(view.button_at(&snap, vp, 13, 0), Some(Button::Restart));
    assert_eq!(view.button_at(&snap, vp, 14, 0), None);
    assert_eq!(view.button_at(&snap, vp, 16, 0), Some(Button::Pause));
    assert_eq!(view.button_at(&snap, vp, 21, 0), Some(Button::Close));
    assert_eq!(view.button_at(&snap, vp, 16, 1), None);
    // No game-over button while playing.
    assert_eq!(view.button_at(&snap, vp, 10, 12), None);
}

#[test]
fn term_view_game_over_screen() {
    let mut snap = Session::new(1).snapshot();
    snap.phase = Phase::GameOver(GameOverReason::TimeUp);
    snap.score = 120;

    let view = GameView::default();
    let vp = Viewport::new(22, 18);
    let fb = view.render(&snap, vp);
    let all = screen_text(&fb);

    assert!(all.contains("Game Over!"));
    assert!(all.contains("Final Score: 120"));
    assert!(all.contains("Time's up!"));
    assert!(all.contains("[ Restart ]"));

    // mid_y = 1 + 17 / 2 = 9; the button sits three rows below, centered.
    let row: String = fb.row_text(12).chars().skip(5).take(11).collect();
    assert_eq!(row, "[ Restart ]");
    assert_eq!(view.button_at(&snap, vp, 5, 12), Some(Button::Restart));
    assert_eq!(view.button_at(&snap, vp, 15, 12), Some(Button::Restart));
    assert_eq!(view.button_at(&snap, vp, 16, 12), None);
}

#[test]
fn term_view_game_over_reason_messages() {
    let view = GameView::default();
    let vp = Viewport::new(22, 18);
    for (reason, text) in [
        (GameOverReason::OutOfLives, "Out of lives!"),
        (GameOverReason::BlockCollision, "Block collision!"),
    ] {
        let mut snap = Session::new(1).snapshot();
        snap.phase = Phase::GameOver(reason);
        assert!(screen_text(&view.render(&snap, vp)).contains(text));
    }
}
