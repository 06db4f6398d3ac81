//! Service Layer
//!
//! Network access runs on the service hub's tokio runtime and reports back
//! to the UI through `AppEvent`s.
//!
//! ```text
//! MembersController ──FetchMembers──▶ ServiceHub (tokio thread)
//!                                          │ reqwest GET
//!                                          ▼
//! Workspace event pump ◀──AppEvent──── flume channel
//! ```

pub mod members_api;
pub mod service_hub;
