//! UI layer: app shell, screens, widgets, and theme.

pub mod app;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use app::MedCasesApp;
