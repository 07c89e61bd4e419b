//! Terminal runner: screen flow, clocks, and ledger ownership.
//!
//! The driver schedules the two clocks the game core depends on: the gravity
//! clock (interval changes on level-up and SlowTime, via
//! `GameEvent::GravityDelayChange`) and the fixed 1-second effect clock.
//! Both are suspended while paused. The score ledger is owned here and
//! passed by reference wherever it is read or extended.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use tetris_legacy::core::{entropy_seed, GameState, SimpleRng};
use tetris_legacy::input::{is_pause, map_game_key, should_quit};
use tetris_legacy::store::LedgerStore;
use tetris_legacy::term::screens::{GameOverScreen, MenuItem, MenuScreen, NameEntryScreen, RecordsScreen};
use tetris_legacy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_legacy::types::{GameEvent, GRAVITY_NORMAL_MS};

/// A running game plus its two clocks.
struct PlaySession {
    game: GameState,
    player: String,
    paused: bool,
    gravity_interval: Duration,
    next_gravity: Instant,
    next_second: Instant,
    flicker_rng: SimpleRng,
}

impl PlaySession {
    fn new(player: String) -> Self {
        let mut game = GameState::new(entropy_seed());
        game.start();
        let now = Instant::now();
        let gravity_interval = Duration::from_millis(GRAVITY_NORMAL_MS);
        Self {
            game,
            player,
            paused: false,
            gravity_interval,
            next_gravity: now + gravity_interval,
            next_second: now + Duration::from_secs(1),
            flicker_rng: SimpleRng::new(entropy_seed()),
        }
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if !self.paused {
            // Deadlines would have piled up while paused; restart both clocks.
            let now = Instant::now();
            self.next_gravity = now + self.gravity_interval;
            self.next_second = now + Duration::from_secs(1);
        }
    }

    /// Flicker mode blanks roughly one frame in ten.
    fn flicker_blank(&mut self) -> bool {
        self.game.flicker_mode() && !self.paused && self.flicker_rng.next_range(10) > 8
    }
}

enum Screen {
    Menu(MenuScreen),
    NameEntry(NameEntryScreen),
    Playing(Box<PlaySession>),
    GameOver(GameOverScreen),
    Records(RecordsScreen),
}

enum Transition {
    Stay,
    ToMenu,
    ToNameEntry,
    ToRecords,
    StartGame(String),
    ToGameOver { name: String, score: u32 },
    Quit,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = LedgerStore::default_path();
    let mut ledger = store.load();
    let mut screen = Screen::Menu(MenuScreen::default());
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        let fb = match &mut screen {
            Screen::Menu(menu) => menu.render(viewport),
            Screen::NameEntry(entry) => entry.render(viewport),
            Screen::Records(records) => records.render(&ledger, viewport),
            Screen::GameOver(over) => over.render(viewport),
            Screen::Playing(session) => {
                if session.flicker_blank() {
                    FrameBuffer::new(w, h)
                } else {
                    view.render(&session.game, &session.player, session.paused, viewport)
                }
            }
        };
        term.draw(&fb)?;

        // Block on input until the next clock deadline (or a UI poll interval).
        let timeout = match &screen {
            Screen::Playing(session) if !session.paused => session
                .next_gravity
                .min(session.next_second)
                .saturating_duration_since(Instant::now()),
            _ => Duration::from_millis(120),
        };

        let mut transition = Transition::Stay;
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    transition = handle_key(&mut screen, key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Clocks and core events.
        if let Screen::Playing(session) = &mut screen {
            if !session.paused {
                let now = Instant::now();
                if now >= session.next_gravity {
                    session.game.gravity_tick();
                    session.next_gravity = now + session.gravity_interval;
                }
                if now >= session.next_second {
                    session.game.second_tick();
                    session.next_second += Duration::from_secs(1);
                }
            }

            for game_event in session.game.take_events() {
                match game_event {
                    GameEvent::GravityDelayChange(ms) => {
                        session.gravity_interval = Duration::from_millis(ms);
                        session.next_gravity = Instant::now() + session.gravity_interval;
                    }
                    GameEvent::GameOver { score } => {
                        ledger.record(session.player.clone(), score);
                        store.save(&ledger)?;
                        transition = Transition::ToGameOver {
                            name: session.player.clone(),
                            score,
                        };
                    }
                }
            }
        }

        match transition {
            Transition::Stay => {}
            Transition::ToMenu => screen = Screen::Menu(MenuScreen::default()),
            Transition::ToNameEntry => screen = Screen::NameEntry(NameEntryScreen::default()),
            Transition::ToRecords => screen = Screen::Records(RecordsScreen::default()),
            Transition::StartGame(player) => {
                screen = Screen::Playing(Box::new(PlaySession::new(player)))
            }
            Transition::ToGameOver { name, score } => {
                screen = Screen::GameOver(GameOverScreen { name, score })
            }
            Transition::Quit => return Ok(()),
        }
    }
}

fn handle_key(screen: &mut Screen, key: KeyEvent) -> Transition {
    match screen {
        Screen::Menu(menu) => match key.code {
            KeyCode::Up => {
                menu.move_up();
                Transition::Stay
            }
            KeyCode::Down => {
                menu.move_down();
                Transition::Stay
            }
            KeyCode::Enter => match menu.selected_item() {
                MenuItem::Start => Transition::ToNameEntry,
                MenuItem::Records => Transition::ToRecords,
                MenuItem::Exit => Transition::Quit,
            },
            _ if should_quit(key) => Transition::Quit,
            _ => Transition::Stay,
        },

        Screen::NameEntry(entry) => match key.code {
            KeyCode::Enter => Transition::StartGame(entry.finish()),
            KeyCode::Esc => Transition::ToMenu,
            KeyCode::Backspace => {
                entry.backspace();
                Transition::Stay
            }
            KeyCode::Char(ch) => {
                entry.push_char(ch);
                Transition::Stay
            }
            _ => Transition::Stay,
        },

        Screen::Playing(session) => {
            if should_quit(key) {
                // Abandoning a run records nothing.
                return Transition::ToMenu;
            }
            if is_pause(key) {
                session.toggle_pause();
                return Transition::Stay;
            }
            if !session.paused {
                if let Some(command) = map_game_key(key) {
                    session.game.apply(command);
                }
            }
            Transition::Stay
        }

        Screen::GameOver(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Transition::ToNameEntry,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Enter => {
                Transition::ToMenu
            }
            _ => Transition::Stay,
        },

        Screen::Records(records) => match key.code {
            KeyCode::Esc => Transition::ToMenu,
            KeyCode::Backspace => {
                records.backspace();
                Transition::Stay
            }
            KeyCode::Char(ch) => {
                records.push_char(ch);
                Transition::Stay
            }
            _ => Transition::Stay,
        },
    }
}
