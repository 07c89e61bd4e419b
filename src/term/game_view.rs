//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The sidebar mirrors the game's
//! HUD: player, score, level, lives, held perks with their activation keys,
//! the activation cooldown, and each running effect's remaining seconds.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the playfield and sidebar.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render the current game state into a framebuffer.
    pub fn render(
        &self,
        state: &GameState,
        player: &str,
        paused: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = 1;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Rgb::new(30, 30, 40);
        let well = CellStyle::colored(Rgb::new(80, 80, 90)).on(bg);
        let border = CellStyle::colored(Rgb::new(200, 200, 200));

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        fb.draw_border(start_x, start_y, frame_w, frame_h, border);

        // Locked board cells; faint grid dots elsewhere.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match state.board().get(x as i8, y as i8).unwrap_or(None) {
                    Some(kind) => self.draw_board_cell(&mut fb, start_x, start_y, x, y, kind),
                    None => {
                        let dot = CellStyle::colored(Rgb::new(90, 90, 100)).on(bg).dim();
                        self.fill_cell(&mut fb, start_x, start_y, x, y, '·', dot);
                    }
                }
            }
        }

        // Ghost piece beneath the active one.
        if let (Some(piece), Some(ghost_y)) = (state.active(), state.ghost_row()) {
            let ghost = CellStyle::colored(Rgb::new(140, 140, 140)).on(bg).dim();
            for &(dx, dy) in piece.shape.cells.iter() {
                let x = piece.x + dx;
                let y = ghost_y + dy;
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.fill_cell(&mut fb, start_x, start_y, x as u16, y as u16, '░', ghost);
                }
            }
        }

        // Active piece (hidden while paused, like the original).
        if !paused {
            if let Some(piece) = state.active() {
                for &(dx, dy) in piece.shape.cells.iter() {
                    let x = piece.x + dx;
                    let y = piece.y + dy;
                    if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                        self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, piece.kind);
                    }
                }
            }
        }

        self.draw_sidebar(&mut fb, state, player, viewport, start_x + frame_w + 2, start_y);

        if paused {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if state.game_over() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::colored(piece_color(kind))
            .on(Rgb::new(30, 30, 40))
            .bold();
        self.fill_cell(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_sidebar(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        player: &str,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::colored(Rgb::new(200, 200, 200));
        let accent = CellStyle::colored(Rgb::new(80, 220, 220));
        let warn = CellStyle::colored(Rgb::new(220, 80, 80)).bold();
        let muted = CellStyle::colored(Rgb::new(110, 110, 120)).dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "PLAYER", label);
        y += 1;
        fb.put_str(panel_x, y, player, accent);
        y += 2;

        fb.put_str(panel_x, y, &format!("SCORE  {}", state.score()), value);
        y += 1;
        fb.put_str(panel_x, y, &format!("LEVEL  {}", state.level()), value);
        y += 1;
        let hearts = "♥".repeat(state.lives() as usize);
        fb.put_str(panel_x, y, "LIVES  ", value);
        fb.put_str(
            panel_x + 7,
            y,
            &hearts,
            CellStyle::colored(Rgb::new(255, 165, 0)),
        );
        y += 2;

        fb.put_str(panel_x, y, "PERKS", CellStyle::colored(Rgb::new(100, 220, 120)).bold());
        y += 1;
        let on_cooldown = !state.cooldown().ready();
        if on_cooldown {
            fb.put_str(
                panel_x,
                y,
                &format!("COOLDOWN {}", state.cooldown().remaining()),
                warn,
            );
            y += 1;
        }
        if state.perks().is_empty() {
            fb.put_str(panel_x, y, "none", muted);
            y += 1;
        } else {
            for (i, perk) in state.perks().as_slice().iter().enumerate() {
                let style = if on_cooldown {
                    muted
                } else {
                    CellStyle::colored(Rgb::new(240, 220, 80))
                };
                fb.put_str(panel_x, y, &format!("{} : {}", i + 1, perk.label()), style);
                y += 1;
            }
        }
        y += 1;

        // Running effects with their remaining seconds.
        let effects = state.effects();
        let rows: [(&str, &crate::core::EffectTimer, Rgb); 5] = [
            ("SLOW TIME", &effects.slow_time, Rgb::new(80, 220, 220)),
            ("2x SCORE", &effects.double_score, Rgb::new(200, 120, 220)),
            ("SHIELD", &effects.shield, Rgb::new(100, 220, 120)),
            ("BOMB READY", &effects.bomb, Rgb::new(220, 80, 80)),
            ("LUCKY", &effects.lucky, Rgb::new(240, 220, 80)),
        ];
        for (name, timer, color) in rows {
            if timer.active() {
                fb.put_str(
                    panel_x,
                    y,
                    &format!("~ {} ~ {}s", name, timer.remaining_secs()),
                    CellStyle::colored(color),
                );
                y += 1;
            }
        }
        y += 1;

        for line in [
            "CONTROLS:",
            "arrows : move/rotate",
            "1/2/3  : use perk",
            "p      : pause",
            "q      : quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, muted);
            y += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y + frame_h / 2;
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, mid_y, text, CellStyle::default().bold());
    }
}

/// Block colors per piece kind (catalog order).
fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(155, 89, 182),
        PieceKind::J => Rgb::new(255, 165, 0),
        PieceKind::L => Rgb::new(80, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn render_to_text(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).unwrap().ch);
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn sidebar_shows_player_and_score() {
        let mut state = GameState::new(1);
        state.start();
        let view = GameView::default();
        let fb = view.render(&state, "Ann", false, Viewport::new(80, 24));
        let text = render_to_text(&fb);
        assert!(text.contains("Ann"));
        assert!(text.contains("SCORE  0"));
        assert!(text.contains("LEVEL  1"));
    }

    #[test]
    fn paused_overlay_replaces_active_piece() {
        let mut state = GameState::new(1);
        state.start();
        let view = GameView::default();
        let fb = view.render(&state, "Ann", true, Viewport::new(80, 24));
        assert!(render_to_text(&fb).contains("PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut state = GameState::new(1);
        state.start();
        let view = GameView::default();
        let _ = view.render(&state, "Ann", false, Viewport::new(10, 5));
    }
}
