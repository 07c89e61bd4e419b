//! Menu, name-entry, game-over, and records screens.
//!
//! Each screen is a small state struct plus a pure render into a
//! framebuffer; key handling stays in the driver.

use crate::core::ScoreLedger;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::game_view::Viewport;

const TITLE: &str = "T E T R I S   L E G A C Y";

fn title_style() -> CellStyle {
    CellStyle::colored(Rgb::new(80, 220, 220)).bold()
}

fn centered_x(viewport: Viewport, text: &str) -> u16 {
    viewport.width.saturating_sub(text.chars().count() as u16) / 2
}

/// Main menu with arrow-key selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Records,
    Exit,
}

#[derive(Debug, Default)]
pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    const ITEMS: [(MenuItem, &'static str); 3] = [
        (MenuItem::Start, "START GAME"),
        (MenuItem::Records, "SEARCH RECORDS"),
        (MenuItem::Exit, "EXIT"),
    ];

    pub fn move_up(&mut self) {
        self.selected = (self.selected + Self::ITEMS.len() - 1) % Self::ITEMS.len();
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % Self::ITEMS.len();
    }

    pub fn selected_item(&self) -> MenuItem {
        Self::ITEMS[self.selected].0
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let base_y = viewport.height.saturating_sub(8) / 2;

        fb.put_str(centered_x(viewport, TITLE), base_y, TITLE, title_style());

        for (i, (_, label)) in Self::ITEMS.iter().enumerate() {
            let y = base_y + 3 + i as u16;
            let style = if i == self.selected {
                CellStyle::colored(Rgb::new(100, 220, 120)).bold()
            } else {
                CellStyle::colored(Rgb::new(160, 160, 170))
            };
            let marker = if i == self.selected { "> " } else { "  " };
            let line = format!("{}{}", marker, label);
            fb.put_str(centered_x(viewport, label), y, &line, style);
        }

        fb
    }
}

/// Typed name entry before a game; blank input becomes "Anonymous".
#[derive(Debug, Default)]
pub struct NameEntryScreen {
    name: String,
}

impl NameEntryScreen {
    const MAX_NAME_LEN: usize = 15;

    pub fn push_char(&mut self, ch: char) {
        if self.name.chars().count() < Self::MAX_NAME_LEN && !ch.is_control() {
            self.name.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.name.pop();
    }

    /// Final player name; falls back when nothing usable was typed.
    pub fn finish(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Anonymous".to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let base_y = viewport.height.saturating_sub(4) / 2;

        let prompt = "Enter your name:";
        fb.put_str(centered_x(viewport, prompt), base_y, prompt, CellStyle::default().bold());

        let field = format!("{}_", self.name);
        fb.put_str(
            centered_x(viewport, &field),
            base_y + 2,
            &field,
            CellStyle::colored(Rgb::new(80, 220, 220)),
        );

        let hint = "enter to play, esc for menu";
        fb.put_str(
            centered_x(viewport, hint),
            base_y + 4,
            hint,
            CellStyle::colored(Rgb::new(110, 110, 120)).dim(),
        );
        fb
    }
}

/// Post-game prompt: retry or back to the menu.
#[derive(Debug)]
pub struct GameOverScreen {
    pub name: String,
    pub score: u32,
}

impl GameOverScreen {
    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let base_y = viewport.height.saturating_sub(5) / 2;

        let headline = format!("GAME OVER, {}!", self.name);
        fb.put_str(
            centered_x(viewport, &headline),
            base_y,
            &headline,
            CellStyle::colored(Rgb::new(220, 80, 80)).bold(),
        );

        let score_line = format!("Score: {}", self.score);
        fb.put_str(
            centered_x(viewport, &score_line),
            base_y + 2,
            &score_line,
            CellStyle::default(),
        );

        let prompt = "Try again? (y/n)";
        fb.put_str(
            centered_x(viewport, prompt),
            base_y + 4,
            prompt,
            CellStyle::colored(Rgb::new(160, 160, 170)),
        );
        fb
    }
}

/// Leaderboard browser with exact-name search.
#[derive(Debug, Default)]
pub struct RecordsScreen {
    query: String,
}

impl RecordsScreen {
    pub fn push_char(&mut self, ch: char) {
        if self.query.chars().count() < 20 && !ch.is_control() {
            self.query.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn render(&self, ledger: &ScoreLedger, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let label = CellStyle::default().bold();
        let value = CellStyle::colored(Rgb::new(0, 255, 150));
        let muted = CellStyle::colored(Rgb::new(110, 110, 120)).dim();

        fb.put_str(2, 1, "RECORDS", title_style());
        fb.put_str(2, 3, &format!("Search name: {}_", self.query), label);

        // Empty query lists everything; otherwise exact-name matches keep
        // their leaderboard ranks.
        let query = self.query.trim();
        let rows: Vec<(usize, String, u32)> = if query.is_empty() {
            ledger
                .sorted_descending()
                .into_iter()
                .enumerate()
                .map(|(i, e)| (i + 1, e.name, e.score))
                .collect()
        } else {
            ledger
                .find_by_name(query)
                .into_iter()
                .map(|m| (m.rank, m.name, m.score))
                .collect()
        };

        let mut y = 5;
        if rows.is_empty() {
            let message = if query.is_empty() {
                "No records yet.".to_string()
            } else {
                format!("No record found for: {}", query)
            };
            fb.put_str(2, y, &message, muted);
        } else {
            for (rank, name, score) in rows {
                if y + 2 >= viewport.height {
                    fb.put_str(2, y, "...", muted);
                    break;
                }
                let line = format!("Rank {:>3}: {:<15} | Score: {}", rank, name, score);
                fb.put_str(2, y, &line, value);
                y += 1;
            }
        }

        let hint = "type to search, backspace to edit, esc for menu";
        fb.put_str(2, viewport.height.saturating_sub(2), hint, muted);
        fb
    }
}
