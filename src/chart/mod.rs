// ==========================================
// UKM 智能经营分析仪表盘 - 图表层
// ==========================================
// 职责: 把后端数据转换为图表配置 (ChartSpec)
// 说明: 纯函数构建，不做网络与渲染；渲染由外部图表库完成
// ==========================================

pub mod inventory;
pub mod management;
pub mod ppic;
pub mod sales;
pub mod spec;

pub use spec::{palette, AxisSpec, ChartKind, ChartSpec, Dataset, ValueFormat, YAxisSide};

pub use inventory::{abc_distribution_chart, turnover_chart};
pub use management::{performance_chart, profitability_chart};
pub use ppic::{demand_pattern_chart, eoq_chart};
pub use sales::{sales_forecast_chart, sales_trend_chart};
