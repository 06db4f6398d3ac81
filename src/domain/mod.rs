//! Domain - Pure Data Structures and Derivations
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod config;
pub mod member;
pub mod members_view;
pub mod paging;
pub mod search;
