// ==========================================
// UKM 智能经营分析仪表盘 - UI 命令层
// ==========================================
// 职责: 枚举 UI 绑定表，把界面事件分发到各 API
// 失败语义: 用户操作失败记日志并透出本地化错误通知；
//           页签加载失败仅记日志
// ==========================================

use crate::domain::TabId;
use crate::i18n::{t, t_with_args};
use crate::view::{elements, Notification};

use super::state::AppState;

// ==========================================
// UI 命令
// ==========================================

/// 按钮命令
///
/// 每个操作按钮对应一个命令（见 ui_bindings）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// 生成管理报表
    GenerateReport,
    /// 分析绩效
    AnalyzePerformance,
    /// 计算 EOQ
    CalculateEoq,
    /// 计算 ROP
    CalculateRop,
    /// 库存优化
    OptimizeInventory,
    /// 更新库存
    UpdateStock,
    /// 检查效期
    CheckExpiry,
    /// 生成库存报表
    GenerateInventoryReport,
}

impl UiCommand {
    /// 操作名称的本地化键（错误通知 "Terjadi kesalahan saat X" 用）
    fn action_key(&self) -> &'static str {
        match self {
            UiCommand::GenerateReport => "action.generate_report",
            UiCommand::AnalyzePerformance => "action.analyze_performance",
            UiCommand::CalculateEoq => "action.calculate_eoq",
            UiCommand::CalculateRop => "action.calculate_rop",
            UiCommand::OptimizeInventory => "action.optimize_inventory",
            UiCommand::UpdateStock => "action.update_stock",
            UiCommand::CheckExpiry => "action.check_expiry",
            UiCommand::GenerateInventoryReport => "action.inventory_report",
        }
    }
}

/// UI 绑定表: 按钮元素标识 → 命令
///
/// 界面壳在启动时按此表挂接事件监听，之后不再变更
pub fn ui_bindings() -> &'static [(&'static str, UiCommand)] {
    &[
        (elements::BTN_GENERATE_REPORT, UiCommand::GenerateReport),
        (
            elements::BTN_ANALYZE_PERFORMANCE,
            UiCommand::AnalyzePerformance,
        ),
        (elements::BTN_CALCULATE_EOQ, UiCommand::CalculateEoq),
        (elements::BTN_CALCULATE_ROP, UiCommand::CalculateRop),
        (elements::BTN_OPTIMIZE_INVENTORY, UiCommand::OptimizeInventory),
        (elements::BTN_UPDATE_STOCK, UiCommand::UpdateStock),
        (elements::BTN_CHECK_EXPIRY, UiCommand::CheckExpiry),
        (
            elements::BTN_GENERATE_INVENTORY_REPORT,
            UiCommand::GenerateInventoryReport,
        ),
    ]
}

// ==========================================
// 启动初始化
// ==========================================

/// 启动初始化: 枚举绑定 → 激活默认页签 → 加载初始数据
///
/// 进程启动时调用一次；重复调用不受支持
pub async fn initialize(state: &AppState) {
    for (element_id, command) in ui_bindings() {
        tracing::debug!("绑定 UI 元素: {} -> {:?}", element_id, command);
    }

    // 默认激活总览页（与界面初始标记一致），并加载一次快照
    let guard = state.navigator.activate(TabId::Dashboard);
    state.dashboard_api.load(guard).await;
}

// ==========================================
// 页签切换
// ==========================================

/// 页签选择事件
///
/// 未识别的面板标识不做任何处理（不改激活态、不派发加载器）。
/// 激活是单次同步状态更新；随后的加载对调用方即发即忘，
/// 重复激活同一页签会再次触发加载（无去重保护）
pub async fn on_tab_selected(state: &AppState, panel_id: &str) {
    let Some(tab) = TabId::from_panel_id(panel_id) else {
        tracing::debug!("未识别的页签标识，忽略: {}", panel_id);
        return;
    };

    let guard = state.navigator.activate(tab);

    match tab {
        // 总览页数据仅在启动时加载一次，切回不刷新
        TabId::Dashboard => {}
        TabId::Manajemen => state.management_api.load(guard).await,
        TabId::Ppic => state.ppic_api.load(guard).await,
        TabId::Inventory => state.inventory_api.load(guard).await,
    }
}

// ==========================================
// 按钮命令分发
// ==========================================

/// 分发按钮命令
///
/// 结果通知与错误通知都经由渲染接口透出，展示方式由界面壳决定
pub async fn dispatch(state: &AppState, command: UiCommand) {
    let result = match command {
        UiCommand::GenerateReport => state.management_api.generate_report().await,
        UiCommand::AnalyzePerformance => state.management_api.analyze_performance().await,
        UiCommand::CalculateEoq => state.ppic_api.calculate_eoq().await,
        UiCommand::CalculateRop => state.ppic_api.calculate_rop().await,
        UiCommand::OptimizeInventory => state.ppic_api.optimize_inventory().await,
        UiCommand::UpdateStock => state.inventory_api.update_stock().await,
        UiCommand::CheckExpiry => state.inventory_api.check_expiry().await,
        UiCommand::GenerateInventoryReport => {
            state.inventory_api.generate_inventory_report().await
        }
    };

    match result {
        Ok(notification) => state.view.notify(notification),
        Err(e) => {
            tracing::error!(code = e.code(), "用户操作失败: {:?}: {}", command, e);
            let action = t(command.action_key());
            state
                .view
                .notify(Notification::error(t_with_args(
                    "error.during",
                    &[("action", &action)],
                )));
        }
    }
}
