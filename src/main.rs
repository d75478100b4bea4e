//! Terminal runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a framebuffer-based
//! renderer. The core only sees commands and elapsed milliseconds.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tile_blocks::core::{Rules, Session, SessionEvent};
use tile_blocks::input::{handle_key_event, should_quit};
use tile_blocks::term::{Button, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tile_blocks::types::{Command, TICK_MS};

/// Falling-block puzzle with a roaming obstacle, a countdown and three lives
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Game length in seconds
    #[arg(long, default_value_t = 60)]
    duration: u32,

    /// Lives at the start of each game
    #[arg(long, default_value_t = 3)]
    lives: u32,

    /// Write logs to this file (the terminal itself is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,
}

/// What the frame loop should do after handling one terminal event.
enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(args.log_level)
            .init();
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let rules = Rules {
        game_duration_ms: args.duration.saturating_mul(1000),
        starting_lives: args.lives.max(1),
        ..Rules::default()
    };
    tracing::info!(seed, ?rules, "starting session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Session::with_rules(seed, rules));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Render.
        let snap = session.snapshot();
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame, delivered in arrival order.
        let deadline = last_tick + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let flow = handle_event(event::read()?, &mut session, &view, viewport, term);
            if matches!(flow, Flow::Quit) {
                return Ok(());
            }
        }

        // Tick with the measured time; the sub-millisecond remainder carries over.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);
        session.tick(elapsed_ms);

        for event in session.take_events() {
            log_event(event, &session);
        }
    }
}

fn handle_event(
    event: Event,
    session: &mut Session,
    view: &GameView,
    viewport: Viewport,
    term: &mut TerminalRenderer,
) -> Flow {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(key) {
                return Flow::Quit;
            }
            if let Some(command) = handle_key_event(key, session.phase()) {
                session.apply(command);
            }
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            let snap = session.snapshot();
            match view.button_at(&snap, viewport, mouse.column, mouse.row) {
                Some(Button::Close) => return Flow::Quit,
                Some(Button::Pause) => {
                    session.apply(Command::TogglePause);
                }
                Some(Button::Restart) => {
                    session.apply(Command::Reset);
                }
                None => {}
            }
        }
        Event::Resize(_, _) => term.invalidate(),
        _ => {}
    }
    Flow::Continue
}

fn log_event(event: SessionEvent, session: &Session) {
    match event {
        SessionEvent::Locked {
            rows_cleared,
            points,
        } => tracing::debug!(rows_cleared, points, score = session.score(), "lock"),
        SessionEvent::ObstacleHit { lives_left } => {
            tracing::info!(lives_left, "obstacle hit")
        }
        SessionEvent::GameOver(reason) => tracing::info!(
            reason = reason.message(),
            score = session.score(),
            collisions = session.collisions(),
            "final result"
        ),
    }
}
