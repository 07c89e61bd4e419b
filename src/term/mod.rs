//! Terminal module - framebuffer rendering and screen views

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
