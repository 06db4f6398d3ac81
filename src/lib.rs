//! Member Admin Library
//!
//! Desktop admin table for a remote member list: fetch once, then search,
//! page, select, edit inline and delete locally.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
