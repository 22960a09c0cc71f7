//! Terminal typing arcade runner.
//!
//! One thread owns all state and runs input -> tick -> render at a fixed
//! pace. It uses crossterm for input and a framebuffer-based renderer.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_meteor::assets::Assets;
use tui_meteor::core::GameState;
use tui_meteor::input::{map_key, should_quit};
use tui_meteor::term::{GameView, TerminalRenderer, Viewport};
use tui_meteor::types::TICK_MS;

fn main() -> Result<()> {
    // The terminal UI owns stdout, so logs go to stderr (redirect with 2>).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let assets = Assets::load(Path::new("assets"));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &assets);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, assets: &Assets) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    game.start();

    let view = GameView::new();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, assets, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key, game.game_over()) {
                        game.apply_action(action);
                        report_score(&mut game);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with measured elapsed time.
        if last_tick.elapsed() >= tick_duration {
            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            game.tick(dt);
        }
    }
}

/// Score notifier: one log line per successful match.
fn report_score(game: &mut GameState) {
    if let Some(event) = game.take_last_event() {
        info!(score = event.score, word = event.word, "score updated");
    }
}

/// Seed the spawner once from the wall clock. Reproducibility across runs
/// is not a goal.
fn clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.subsec_nanos() ^ (d.as_secs() as u32),
        Err(_) => 1,
    }
}
