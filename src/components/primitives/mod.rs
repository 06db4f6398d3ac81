//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, etc.

pub mod button;
pub mod checkbox;
pub mod text_input;
