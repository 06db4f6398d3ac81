//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// The other supported locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

type TranslationTable = HashMap<&'static str, (&'static str, &'static str)>;

/// Translation resources
static TRANSLATIONS: OnceLock<TranslationTable> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> TranslationTable {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Member Admin", "成员管理"));
    map.insert("header-members", ("members", "名成员"));

    // Search
    map.insert(
        "search-placeholder",
        ("Search by name, email, and role", "按姓名、邮箱或角色搜索"),
    );

    // Table columns
    map.insert("col-select", ("Select", "选择"));
    map.insert("col-name", ("Name", "姓名"));
    map.insert("col-email", ("Email", "邮箱"));
    map.insert("col-role", ("Role", "角色"));
    map.insert("col-actions", ("Actions", "操作"));

    // Actions
    map.insert("action-edit", ("Edit", "编辑"));
    map.insert("action-save", ("Save", "保存"));
    map.insert("action-delete", ("Delete", "删除"));
    map.insert("action-delete-selected", ("Delete Selected", "删除所选"));

    // Pagination
    map.insert("pagination-items", ("members", "名成员"));

    // Log panel
    map.insert("log-title", ("Logs", "日志"));
    map.insert("log-clear", ("Clear", "清除"));

    // Table
    map.insert("table-no-data", ("No members", "无成员"));
    map.insert("table-loading", ("Loading...", "加载中..."));

    map
}

/// Get translations
fn translations() -> &'static TranslationTable {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(t(Locale::EnUS, "action-delete-selected").as_ref(), "Delete Selected");
        assert_eq!(t(Locale::ZhCN, "action-save").as_ref(), "保存");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key").as_ref(), "no-such-key");
    }

    #[test]
    fn toggled_alternates() {
        assert_eq!(Locale::EnUS.toggled(), Locale::ZhCN);
        assert_eq!(Locale::ZhCN.toggled(), Locale::EnUS);
    }
}
