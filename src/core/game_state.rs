//! Game state module - the complete state machine
//!
//! Ties together board, pieces, RNG, and the perk engine. The driver feeds it
//! discrete commands plus two clock signals: `gravity_tick` (variable-rate
//! fall clock) and `second_tick` (fixed 1-second effect countdown clock).
//! Outcomes the driver must act on - gravity retiming and game over - are
//! queued as [`GameEvent`]s and drained with [`GameState::take_events`].

use crate::core::perks::{ActiveEffects, PerkCooldown, PerkInventory};
use crate::core::pieces::{spawn_shape, PieceShape};
use crate::core::rng::SimpleRng;
use crate::core::Board;
use crate::types::*;

/// The currently falling piece. Replaced atomically at spawn and at lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at the spawn origin (horizontally centered, top row).
    fn at_spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            x: SPAWN_X,
            y: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    score: u32,
    level: u32,
    lives: u32,
    flicker_mode: bool,
    bonus_life_given: bool,
    perks: PerkInventory,
    effects: ActiveEffects,
    cooldown: PerkCooldown,
    started: bool,
    game_over: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            level: 1,
            lives: START_LIVES,
            flicker_mode: false,
            bonus_life_given: false,
            perks: PerkInventory::new(),
            effects: ActiveEffects::default(),
            cooldown: PerkCooldown::default(),
            started: false,
            game_over: false,
            events: Vec::new(),
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn flicker_mode(&self) -> bool {
        self.flicker_mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn perks(&self) -> &PerkInventory {
        &self.perks
    }

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    pub fn cooldown(&self) -> &PerkCooldown {
        &self.cooldown
    }

    /// Drain queued events for the driver.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a driver command. Illegal commands are silent no-ops.
    pub fn apply(&mut self, command: GameCommand) {
        if self.game_over {
            return;
        }
        match command {
            GameCommand::MoveLeft => {
                self.try_shift(-1, 0);
            }
            GameCommand::MoveRight => {
                self.try_shift(1, 0);
            }
            GameCommand::SoftDrop => {
                self.try_shift(0, 1);
            }
            GameCommand::Rotate => self.rotate(),
            GameCommand::UsePerk(index) => self.use_perk(index),
        }
    }

    /// Try to shift the active piece; returns whether it moved.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if self.board.collides(&piece.shape, piece.x + dx, piece.y + dy) {
            return false;
        }
        self.active = Some(ActivePiece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        });
        true
    }

    /// Rotate the active piece clockwise; rejected in place on collision.
    fn rotate(&mut self) {
        let Some(piece) = self.active else {
            return;
        };
        let rotated = piece.shape.rotate_cw();
        if !self.board.collides(&rotated, piece.x, piece.y) {
            self.active = Some(ActivePiece {
                shape: rotated,
                ..piece
            });
        }
    }

    /// Activate the perk in slot `index`. Fails silently when the index is
    /// out of range or the cooldown is still running.
    fn use_perk(&mut self, index: usize) {
        if !self.cooldown.ready() {
            return;
        }
        let Some(kind) = self.perks.take(index) else {
            return;
        };
        self.cooldown.start();

        match kind {
            PerkKind::SlowTime => {
                self.effects.slow_time.start();
                self.events.push(GameEvent::GravityDelayChange(GRAVITY_SLOW_MS));
            }
            PerkKind::Bomb => self.effects.bomb.start(),
            PerkKind::LineErase => self.board.erase_bottom_row(),
            PerkKind::DoubleScore => self.effects.double_score.start(),
            PerkKind::Shield => self.effects.shield.start(),
            PerkKind::Lucky => self.effects.lucky.start(),
        }
    }

    /// One gravity tick: fall by one, or lock / clear / respawn, then the
    /// progression pass.
    pub fn gravity_tick(&mut self) {
        if self.game_over || !self.started {
            return;
        }

        if self.active.is_none() {
            // Shield recovery discarded the previous piece; spawn fresh.
            self.spawn_piece();
        } else if !self.try_shift(0, 1) {
            self.lock_active();
            self.settle_lines();
            self.spawn_piece();
        }

        if !self.game_over {
            self.progress();
        }
    }

    /// One real second: count down every timed effect. SlowTime expiry
    /// restores the normal gravity delay.
    pub fn second_tick(&mut self) {
        if self.game_over {
            return;
        }
        if self.effects.slow_time.tick_second() {
            self.events
                .push(GameEvent::GravityDelayChange(GRAVITY_NORMAL_MS));
        }
        self.effects.double_score.tick_second();
        self.effects.shield.tick_second();
        self.effects.bomb.tick_second();
        self.effects.lucky.tick_second();
    }

    /// Spawn a new piece, retrying after life loss until a piece fits or the
    /// game ends.
    fn spawn_piece(&mut self) {
        loop {
            let kind = if self.effects.lucky.active() {
                self.effects.lucky.clear();
                PieceKind::from_index(0)
            } else {
                PieceKind::from_index(self.rng.next_range(PIECE_KIND_COUNT as u32) as usize)
            };

            let piece = ActivePiece::at_spawn(kind);
            if !self.board.collides(&piece.shape, piece.x, piece.y) {
                self.active = Some(piece);
                return;
            }

            if self.effects.shield.active() {
                // Shield absorbs the failed spawn: one free row, piece discarded,
                // next gravity tick spawns fresh.
                self.effects.shield.clear();
                self.board.erase_bottom_row();
                self.active = None;
                return;
            }

            self.lives -= 1;
            if self.lives == 0 {
                self.game_over = true;
                self.active = None;
                self.events.push(GameEvent::GameOver { score: self.score });
                return;
            }
            self.board.reset();
        }
    }

    /// Write the active piece into the board, or detonate it if Bomb is armed.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        if self.effects.bomb.active() {
            for &(dx, dy) in piece.shape.cells.iter() {
                self.board.clear_radius(piece.x + dx, piece.y + dy);
            }
            self.effects.bomb.clear();
        } else {
            self.board.lock(&piece.shape, piece.x, piece.y, piece.kind);
        }
    }

    /// Clear full rows, scoring each and rolling the perk-grant chance once
    /// per cleared row.
    fn settle_lines(&mut self) {
        let cleared = self.board.clear_full_rows();
        for _ in 0..cleared {
            self.score += if self.effects.double_score.active() {
                LINE_SCORE_DOUBLED
            } else {
                LINE_SCORE
            };
            if self.rng.percent(PERK_DROP_PERCENT) {
                let pick = self.rng.next_range(PerkKind::ALL.len() as u32) as usize;
                self.perks.grant(PerkKind::ALL[pick]);
            }
        }
    }

    /// Per-gravity-tick progression: level thresholds, the one-shot bonus
    /// life, and the perk cooldown. Each threshold fires exactly once, as the
    /// score crosses it while the level still holds the prior value; a large
    /// scoring event can cascade through several in one pass.
    fn progress(&mut self) {
        if self.score >= 1000 && self.level == 1 {
            self.level = 2;
            self.events.push(GameEvent::GravityDelayChange(GRAVITY_FAST_MS));
        }
        if self.score >= 2000 && self.level == 2 {
            self.level = 3;
            self.flicker_mode = true;
        }
        if self.score >= 3000 && self.level == 3 {
            self.level = 4;
            self.lives += 1;
            self.flicker_mode = true;
        }
        if self.score >= 4000 && self.level == 4 {
            self.level = 5;
            self.lives += 1;
            self.flicker_mode = true;
        }
        if self.score >= 5000 && self.level == 5 {
            self.level = 6;
            self.lives += 1;
            self.flicker_mode = true;
        }

        if self.score >= BONUS_LIFE_SCORE && !self.bonus_life_given {
            if self.lives < BONUS_LIFE_CAP {
                self.lives += 1;
            }
            self.bonus_life_given = true;
        }

        self.cooldown.tick();
    }

    /// Lowest origin row the active piece could drop to without colliding.
    /// Pure query for the ghost-piece display.
    pub fn ghost_row(&self) -> Option<i8> {
        let piece = self.active?;
        let mut ghost_y = piece.y;
        while !self.board.collides(&piece.shape, piece.x, ghost_y + 1) {
            ghost_y += 1;
        }
        Some(ghost_y)
    }
}
