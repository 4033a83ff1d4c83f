//! Leptos views for the transient elements the controllers mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page itself is static HTML; only notifications and ripples are
//! rendered from Rust, mounted into existing elements and unmounted when
//! their handle drops.

pub mod notification;
pub mod ripple;
