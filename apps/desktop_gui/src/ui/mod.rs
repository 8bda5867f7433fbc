//! UI layer for the desktop GUI: app shell and widgets.

pub mod app;
pub mod widgets;

pub use app::UsuariosApp;
