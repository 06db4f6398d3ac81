//! Application Constants
//!
//! Centralized defaults and UI constants.

/// Endpoint serving the member list
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "member-admin.toml";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// In-app log ring buffer capacity
pub const GLOBAL_LOG_CAPACITY: usize = 2000;
