//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency so log traffic does not re-render the table.

use gpui::{App, AppContext, Entity, Global};

use crate::constants::GLOBAL_LOG_CAPACITY;
use crate::domain::config::AppConfig;
use crate::state::{i18n_state::I18nState, log_state::LogState, members_state::MembersState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Member list, search, paging, selection and drafts
    pub members: Entity<MembersState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: &AppConfig, cx: &mut App) -> Self {
        let page_size = config.page_size;
        let locale = config.locale;
        Self {
            members: cx.new(|_| MembersState::new(page_size)),
            logs: cx.new(|_| LogState::new(GLOBAL_LOG_CAPACITY)),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
