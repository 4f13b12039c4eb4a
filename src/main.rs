//! Terminal runner (default binary).
//!
//! Owns the only clock in the program: the engine is advanced by mapped key
//! presses and by a `Tick` every level-derived interval while playing.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use ziqi_tetris::core::SimpleRng;
use ziqi_tetris::input::{handle_key_event, should_quit};
use ziqi_tetris::session::{EventLog, FileStore, Session, SessionConfig};
use ziqi_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use ziqi_tetris::types::GameAction;

/// Input poll timeout while the drop timer is stopped
const IDLE_POLL: Duration = Duration::from_millis(100);

type GameSession = Session<FileStore, SimpleRng>;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    let log = EventLog::open_or_disabled(config.log_path.as_deref());
    let store = FileStore::new(config.data_dir.clone());
    let mut session =
        Session::with_seed(store, SimpleRng::new(config.seed), log, Some(config.seed));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_drop = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = if session.should_tick() {
            session
                .drop_interval()
                .checked_sub(last_drop.elapsed())
                .unwrap_or(Duration::ZERO)
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    let was_playing = session.should_tick();
                    if let Some(action) = handle_key_event(key, session.state().status()) {
                        session.apply(action);
                    }
                    if !was_playing && session.should_tick() {
                        last_drop = Instant::now();
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if !session.should_tick() {
            continue;
        }
        if last_drop.elapsed() >= session.drop_interval() {
            last_drop = Instant::now();
            session.apply(GameAction::Tick);
        }
    }
}
