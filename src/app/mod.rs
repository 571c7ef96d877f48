// ==========================================
// UKM 智能经营分析仪表盘 - 应用层
// ==========================================
// 职责: 导航控制、UI 绑定与全局装配
// ==========================================

pub mod handlers;
pub mod navigator;
pub mod state;

pub use handlers::{dispatch, initialize, on_tab_selected, ui_bindings, UiCommand};
pub use navigator::{EpochGuard, TabNavigator};
pub use state::AppState;
