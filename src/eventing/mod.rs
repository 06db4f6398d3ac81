//! Eventing - Service to UI Messages

pub mod app_event;
