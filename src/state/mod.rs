//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module holds plain state types plus the glue that mirrors them into
//! Leptos signals provided via context.

pub mod theme;
