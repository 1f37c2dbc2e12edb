//! cardcore — shared library for the card news viewer

pub mod dither;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use storage::Preferences;
pub use theme::CardTheme;
