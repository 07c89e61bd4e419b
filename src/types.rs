//! Shared constants and plain enums used across the crate.
//!
//! Board dimensions, gravity intervals, perk timing, line scores, and the
//! lives/bonus-life thresholds, plus the small value enums (`PieceKind`,
//! `PerkKind`, `GameCommand`, `GameEvent`) and the `Cell` alias. Pure data
//! with no I/O dependencies, mirroring the teacher's shared `types` module.

/// Board width in columns.
pub const BOARD_WIDTH: u8 = 10;
/// Board height in rows.
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn origin column: horizontally centered (`BOARD_WIDTH / 2 - 1`).
pub const SPAWN_X: i8 = 4;

/// Number of distinct piece kinds in the catalog.
pub const PIECE_KIND_COUNT: usize = 7;

/// Gravity interval at the normal (post level-up) speed, in milliseconds.
pub const GRAVITY_NORMAL_MS: u64 = 600;
/// Gravity interval once level 2 is reached, in milliseconds.
pub const GRAVITY_FAST_MS: u64 = 350;
/// Gravity interval while SlowTime is active, in milliseconds.
pub const GRAVITY_SLOW_MS: u64 = 1000;

/// Points awarded per cleared row.
pub const LINE_SCORE: u32 = 100;
/// Points awarded per cleared row while DoubleScore is active.
pub const LINE_SCORE_DOUBLED: u32 = 200;

/// Probability (percent) of granting a perk on each cleared row.
pub const PERK_DROP_PERCENT: u32 = 30;

/// Maximum held, unused perks.
pub const MAX_PERKS: usize = 3;
/// Activation cooldown length, counted in gravity ticks.
pub const PERK_COOLDOWN_TICKS: u8 = 15;
/// Timed-effect duration, in real seconds.
pub const PERK_DURATION_SECS: u8 = 30;

/// Lives a new game starts with.
pub const START_LIVES: u32 = 3;
/// Score at which the one-shot bonus life is awarded.
pub const BONUS_LIFE_SCORE: u32 = 5000;
/// The bonus life is only granted while lives are below this cap.
pub const BONUS_LIFE_CAP: u32 = 3;

/// A single board cell: empty (`None`) or filled with a piece kind.
pub type Cell = Option<PieceKind>;

/// The seven canonical tetromino kinds, in catalog order (I, O, T, J, L, S, Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// Every kind in catalog order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Catalog index of this kind.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Kind at `index` in catalog order, wrapping modulo the catalog size.
    pub fn from_index(index: usize) -> PieceKind {
        PieceKind::ALL[index % PIECE_KIND_COUNT]
    }
}

/// The six perk kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerkKind {
    SlowTime,
    Bomb,
    LineErase,
    DoubleScore,
    Shield,
    Lucky,
}

impl PerkKind {
    /// Every perk kind.
    pub const ALL: [PerkKind; 6] = [
        PerkKind::SlowTime,
        PerkKind::Bomb,
        PerkKind::LineErase,
        PerkKind::DoubleScore,
        PerkKind::Shield,
        PerkKind::Lucky,
    ];

    /// Human-readable display name.
    pub fn label(self) -> &'static str {
        match self {
            PerkKind::SlowTime => "Slow Time",
            PerkKind::Bomb => "Bomb",
            PerkKind::LineErase => "Line Erase",
            PerkKind::DoubleScore => "Double Score",
            PerkKind::Shield => "Shield",
            PerkKind::Lucky => "Lucky",
        }
    }
}

/// A discrete command fed to the game state by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    UsePerk(usize),
}

/// An outcome the driver must act on, drained after each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The gravity clock must be retimed to the given interval (milliseconds).
    GravityDelayChange(u64),
    /// The game ended; carries the final score for the ledger.
    GameOver { score: u32 },
}
