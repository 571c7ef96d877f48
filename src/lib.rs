// ==========================================
// UKM 智能经营分析仪表盘 - 核心库
// ==========================================
// 技术栈: Rust + tokio + reqwest
// 系统定位: 仪表盘前端应用层 (业务计算全部在后端)
// ==========================================

// 初始化国际化系统（用户界面语言为印尼语）
rust_i18n::i18n!("locales", fallback = "id");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 请求作用域的值对象
pub mod domain;

// 后端客户端层 - HTTP 数据访问
pub mod client;

// 图表层 - 图表配置构建
pub mod chart;

// 格式化 - 印尼盾/百分比显示
pub mod format;

// 视图层 - 渲染目标抽象
pub mod view;

// API 层 - 页签加载器与用户操作
pub mod api;

// 应用层 - 导航/绑定/装配
pub mod app;

// 配置层 - 运行时配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DashboardSnapshot, DemandPoint, EoqCalculation, EoqPoint, ForecastResult, InventoryAnalysis,
    InventoryItem, InventoryOptimization, ManagementData, OrderingRecommendation,
    PerformanceAnalysis, PerformanceRecord, ProfitabilityRecord, ReportFile, RopCalculation,
    TabId, TimeSeriesPoint, TrendAnalysis,
};

// 图表配置
pub use chart::{AxisSpec, ChartKind, ChartSpec, Dataset, ValueFormat, YAxisSide};

// API
pub use api::{ApiError, ApiResult, DashboardApi, InventoryApi, ManagementApi, PpicApi};

// 应用层
pub use app::{AppState, EpochGuard, TabNavigator, UiCommand};

// 视图层
pub use view::{MemorySink, Notification, NotificationLevel, RenderError, UiSink};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "UKM 智能经营分析仪表盘";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
