// ==========================================
// UKM 智能经营分析仪表盘 - 领域层
// ==========================================
// 职责: 定义后端响应对应的值对象
// 说明: 全部为请求作用域的瞬态数据，不做持久化
// ==========================================

pub mod dashboard;
pub mod inventory;
pub mod management;
pub mod ppic;
pub mod report;
pub mod types;

pub use dashboard::{DashboardSnapshot, TimeSeriesPoint, TrendAnalysis};
pub use inventory::{ForecastResult, InventoryAnalysis, InventoryItem};
pub use management::{
    ManagementData, PerformanceAnalysis, PerformanceRecord, ProfitabilityRecord,
};
pub use ppic::{
    DemandPoint, EoqCalculation, EoqPoint, InventoryOptimization, OrderingRecommendation,
    PpicData, RopCalculation,
};
pub use report::ReportFile;
pub use types::{AbcClass, TabId};
