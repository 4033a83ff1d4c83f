//! Pure state for each page enhancement.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM. The `dom` controllers read element values,
//! feed them through these types and write the result back, which keeps every
//! decision testable on the host.

pub mod contact_form;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod ripple;
pub mod scroll_top;
pub mod theme;
