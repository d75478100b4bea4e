//! Session module - owns one game and drives its state machine
//!
//! This module ties together all core components: board, piece, obstacle, RNG and scoring.
//! The adapter feeds it commands and frame ticks and reads it back for rendering.
//!
//! Within a tick the order is fixed: clock, obstacle contact, gravity. A piece that
//! touches the obstacle on the same tick it would lock loses a life instead of locking.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::obstacle::{place_obstacle, Obstacle};
use crate::piece::{self, Piece};
use crate::rng::SimpleRng;
use crate::scoring::lock_score;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Tunable game rules; the defaults are the standard game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub fall_interval_ms: u32,
    pub game_duration_ms: u32,
    pub starting_lives: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            game_duration_ms: GAME_DURATION_MS,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Locked { rows_cleared: usize, points: u32 },
    ObstacleHit { lives_left: u32 },
    GameOver(GameOverReason),
}

/// Events of one tick, in the order they happened.
///
/// A tick yields at most a hit, a lock and a game over.
pub type SessionEvents = ArrayVec<SessionEvent, 4>;

/// Complete game session
#[derive(Debug, Clone)]
pub struct Session {
    rules: Rules,
    rng: SimpleRng,
    board: Board,
    piece: Piece,
    obstacle: Option<Obstacle>,
    score: u32,
    lives: u32,
    elapsed_ms: u32,
    fall_timer_ms: u32,
    /// Obstacle hits in the current game
    collisions: u32,
    phase: Phase,
    events: SessionEvents,
}

impl Session {
    /// Start a standard game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::new();
        let piece = spawn_random(&mut rng);
        let obstacle = place_obstacle(&board, &mut rng);

        Self {
            rules,
            rng,
            board,
            piece,
            obstacle,
            score: 0,
            lives: rules.starting_lives,
            elapsed_ms: 0,
            fall_timer_ms: 0,
            collisions: 0,
            phase: Phase::Playing,
            events: SessionEvents::new(),
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn obstacle(&self) -> Option<Obstacle> {
        self.obstacle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn collisions(&self) -> u32 {
        self.collisions
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Time left on the countdown, never below zero
    pub fn remaining_ms(&self) -> u32 {
        self.rules.game_duration_ms.saturating_sub(self.elapsed_ms)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase.is_paused()
    }

    pub fn game_over(&self) -> bool {
        self.phase.game_over_reason().is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.phase.game_over_reason()
    }

    /// Take the events of the most recent tick.
    pub fn take_events(&mut self) -> SessionEvents {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.grid);
        out.piece = PieceSnapshot::from(self.piece);
        out.obstacle = self.obstacle;
        out.score = self.score;
        out.lives = self.lives;
        out.collisions = self.collisions;
        out.elapsed_ms = self.elapsed_ms;
        out.remaining_ms = self.remaining_ms();
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply an adapter command
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => self.move_piece(direction),
            Command::Rotate => self.rotate(),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Move the piece one cell; blocked moves are a no-op
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        self.piece.try_step(&self.board, direction)
    }

    /// Rotate the piece clockwise; a colliding rotation is rejected
    pub fn rotate(&mut self) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        self.piece.try_rotate(&self.board)
    }

    /// Switch between playing and paused. Has no effect after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver(_) => return false,
        };
        true
    }

    /// Start a fresh game. The RNG keeps running so the next game differs.
    pub fn reset(&mut self) {
        self.board.clear();
        self.piece = spawn_random(&mut self.rng);
        self.obstacle = place_obstacle(&self.board, &mut self.rng);
        self.score = 0;
        self.lives = self.rules.starting_lives;
        self.elapsed_ms = 0;
        self.fall_timer_ms = 0;
        self.collisions = 0;
        self.phase = Phase::Playing;
        self.events.clear();
        tracing::info!(lives = self.lives, "game reset");
    }

    /// Advance the game clock by `elapsed_ms`.
    ///
    /// Returns true when the piece moved, was replaced, or the phase changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.phase.is_playing() {
            return false;
        }

        self.events.clear();
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.rules.game_duration_ms {
            self.end(GameOverReason::TimeUp);
            return true;
        }

        let mut changed = false;
        if self.touches_obstacle() {
            self.resolve_obstacle_hit();
            if !self.phase.is_playing() {
                return true;
            }
            changed = true;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.rules.fall_interval_ms {
            return changed;
        }
        self.fall_timer_ms = 0;

        if !self.piece.try_step(&self.board, Direction::Down) {
            self.lock_piece();
        }
        true
    }

    fn touches_obstacle(&self) -> bool {
        self.obstacle
            .is_some_and(|obstacle| self.piece.covers(obstacle.x, obstacle.y))
    }

    fn resolve_obstacle_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.collisions += 1;
        self.piece = spawn_random(&mut self.rng);
        self.replace_obstacle();
        self.record(SessionEvent::ObstacleHit {
            lives_left: self.lives,
        });
        tracing::debug!(lives = self.lives, "piece hit the obstacle");

        if self.lives == 0 {
            self.end(GameOverReason::OutOfLives);
        } else if self.piece.collides(&self.board) {
            self.end(GameOverReason::BlockCollision);
        }
    }

    /// Lock the piece, score it, clear rows and bring in the next piece
    fn lock_piece(&mut self) {
        let locked = piece::lock(&mut self.board, &self.piece);
        if let Err(err) = locked {
            tracing::error!(%err, "locked piece reached outside the grid");
        }
        debug_assert!(locked.is_ok(), "lock wrote outside the grid: {locked:?}");

        let rows_cleared = self.board.clear_completed_rows();
        let points = lock_score(rows_cleared);
        self.score += points;
        self.record(SessionEvent::Locked {
            rows_cleared,
            points,
        });
        tracing::debug!(rows_cleared, points, score = self.score, "piece locked");

        self.piece = spawn_random(&mut self.rng);
        if self.piece.collides(&self.board) {
            self.end(GameOverReason::BlockCollision);
            return;
        }
        self.replace_obstacle();
    }

    fn replace_obstacle(&mut self) {
        self.obstacle = place_obstacle(&self.board, &mut self.rng);
        if self.obstacle.is_none() {
            tracing::debug!("no free cell for the obstacle");
        }
    }

    fn record(&mut self, event: SessionEvent) {
        // Cleared every tick, so the capacity is never reached.
        let _ = self.events.try_push(event);
    }

    fn end(&mut self, reason: GameOverReason) {
        self.phase = Phase::GameOver(reason);
        self.record(SessionEvent::GameOver(reason));
        tracing::info!(?reason, score = self.score, "game over");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Random shape in a random piece color at the spawn position
fn spawn_random(rng: &mut SimpleRng) -> Piece {
    let kind = ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize];
    let color = PIECE_COLORS[rng.next_range(PIECE_COLORS.len() as u32) as usize];
    Piece::spawn(kind, color)
}
