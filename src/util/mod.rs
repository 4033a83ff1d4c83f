//! Browser helpers shared by the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from page logic. Host builds get
//! no-op fallbacks so the state modules stay testable.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod keyframes;
pub mod storage;
