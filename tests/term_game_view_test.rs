//! Rendering tests over the pure view.

use tui_meteor::assets::{Assets, TextArt};
use tui_meteor::core::GameState;
use tui_meteor::term::{background_source_rect, FrameBuffer, GameView, Viewport};
use tui_meteor::types::GameAction;

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).unwrap().ch)
        .collect()
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y) + "\n").collect()
}

/// Background art where every row is its own letter, for sampling checks.
fn striped_art(width: usize, height: usize) -> TextArt {
    let text: String = (0..height)
        .map(|y| {
            let ch = (b'a' + (y % 26) as u8) as char;
            ch.to_string().repeat(width) + "\n"
        })
        .collect();
    TextArt::parse(&text).unwrap()
}

#[test]
fn hud_shows_session_state() {
    let mut state = GameState::new(1);
    state.start();
    for c in "abc".chars() {
        state.apply_action(GameAction::Type(c));
    }

    let fb = GameView::new().render(&state, &Assets::default(), Viewport::new(80, 24));
    let text = all_text(&fb);

    assert!(text.contains("Score: 0"));
    assert!(text.contains("High Score: 0"));
    assert!(text.contains("Lives: 3"));
    assert!(text.contains("Level: 1"));
    assert!(text.contains("Type: abc"));
}

#[test]
fn falling_word_is_drawn_at_its_projected_row() {
    let mut state = GameState::new(1);
    state.start();
    state.spawn_word();
    // 1.5s keeps the spawn timer under the 2s interval (one word on the
    // field) and drops it below the HUD rows: a right-edge spawn on row 2
    // would be overdrawn by the HUD, which paints after the words.
    state.tick(1.5); // y = 90

    let word = state.words()[0];
    let fb = GameView::new().render(&state, &Assets::default(), Viewport::new(80, 24));

    // y=90 of 600 over 24 rows is row 3.
    let row = row_text(&fb, 3);
    assert!(
        row.contains(word.text),
        "expected {:?} in row {:?}",
        word.text,
        row
    );
}

#[test]
fn marker_art_is_drawn_left_of_the_text() {
    let mut state = GameState::new(1);
    state.start();
    state.spawn_word();
    // Below the HUD rows, which paint over word cells they share.
    state.tick(1.5); // y = 90, row 3
    let word = state.words()[0];

    let assets = Assets {
        background: None,
        marker: TextArt::parse("(@)"),
    };
    // Wide enough that marker plus text fits even for a right-edge spawn.
    let fb = GameView::new().render(&state, &assets, Viewport::new(120, 24));

    let row = row_text(&fb, 3);
    assert!(row.contains(&format!("(@) {}", word.text)), "row: {:?}", row);
}

#[test]
fn hud_paints_over_words_on_shared_cells() {
    let mut state = GameState::new(1);
    state.start();
    state.spawn_word(); // seed 1: "loop" at x=728
    state.tick(1.0); // y = 60, row 2 at 24 rows

    let fb = GameView::new().render(&state, &Assets::default(), Viewport::new(80, 24));

    // The word projects into the right-aligned HUD columns; the HUD is
    // drawn last and wins the shared cells.
    let row = row_text(&fb, 2);
    assert!(row.contains("Level: 1"), "row: {:?}", row);
    assert!(!row.contains("loop"), "row: {:?}", row);
}

#[test]
fn game_over_screen_shows_prompts_and_scores() {
    let mut state = GameState::new(1);
    state.start();
    state.spawn_word();
    state.spawn_word();
    state.spawn_word();
    state.tick(10.0);
    assert!(state.game_over());

    let fb = GameView::new().render(&state, &Assets::default(), Viewport::new(80, 24));
    let text = all_text(&fb);

    assert!(text.contains("GAME OVER!"));
    assert!(text.contains("Final Score: 0"));
    assert!(text.contains("High Score: 0"));
    assert!(text.contains("Press R to Restart"));
    assert!(text.contains("Press ESC to Exit"));

    // No live-play HUD on the game over screen.
    assert!(!text.contains("Type:"));
}

#[test]
fn background_fills_viewport_with_matching_ratio() {
    let state = {
        let mut s = GameState::new(1);
        s.start();
        s
    };
    let assets = Assets {
        background: Some(striped_art(40, 20)),
        marker: None,
    };

    let fb = GameView::new().render(&state, &assets, Viewport::new(40, 20));

    // Same aspect ratio: row 10 samples art row 10 ('k'). Probe mid-grid,
    // away from the HUD corners.
    assert_eq!(fb.get(20, 10).unwrap().ch, 'k');
}

#[test]
fn wide_viewport_crops_the_art_vertically() {
    let state = {
        let mut s = GameState::new(1);
        s.start();
        s
    };
    // Art is 2:1, viewport is 4:1, so the crop drops 5 rows top and bottom.
    let assets = Assets {
        background: Some(striped_art(40, 20)),
        marker: None,
    };

    let fb = GameView::new().render(&state, &assets, Viewport::new(40, 10));

    // fb row 4 samples art row 5 + 4 = 9 ('j').
    assert_eq!(fb.get(20, 4).unwrap().ch, 'j');
}

#[test]
fn crop_rect_always_matches_viewport_ratio() {
    for &(aw, ah, vw, vh) in &[
        (120.0, 45.0, 80.0, 24.0),
        (45.0, 120.0, 80.0, 24.0),
        (64.0, 64.0, 200.0, 50.0),
        (64.0, 64.0, 10.0, 40.0),
    ] {
        let src = background_source_rect(aw, ah, vw, vh);
        assert!((src.w / src.h - vw / vh).abs() < 1e-3);
        // Crop stays inside the art.
        assert!(src.x >= 0.0 && src.y >= 0.0);
        assert!(src.x + src.w <= aw + 1e-3);
        assert!(src.y + src.h <= ah + 1e-3);
    }
}
