//! Snapshot - immutable copy of the state handed to observers

use serde::Serialize;

use crate::models::MainConfig;

/// Every getter value at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    pub current_production_screen: String,
    pub current_section: String,
    pub current_theme: String,
    pub is_dark_theme: bool,
    pub is_sidebar_hidden: bool,
    pub is_support_chat: bool,
    pub is_user_menu_hidden: bool,
    pub last_production_screen: String,
    pub last_production_viewed: Option<String>,
    pub main_config: MainConfig,
    pub preview_file_id_to_show: String,
}
