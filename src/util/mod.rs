//! Browser glue for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the controller
//! and components so the theme logic can be tested off-browser.

pub mod cookie;
pub mod dark_mode;
