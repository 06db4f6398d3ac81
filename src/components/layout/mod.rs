//! Layout Components
//!
//! Header and log panel framing the members page.

pub mod header;
pub mod log_panel;
