//! cardnews — an illustrated card news slideshow
//!
//! The story table, the scene illustrations and the navigation state live
//! here; `main.rs` wires them into an eframe window.

pub mod illustration;
pub mod navigation;
pub mod story;

pub use illustration::{Illustration, IllustrationTag};
pub use navigation::{NavigationState, Progress};
pub use story::{Chapter, Scene, Story};
