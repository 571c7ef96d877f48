// ==========================================
// UKM 智能经营分析仪表盘 - 总览页值对象
// ==========================================
// 职责: /api/dashboard-data 与 /api/trends 响应结构
// ==========================================

use serde::{Deserialize, Serialize};

use super::inventory::InventoryItem;

/// 总览快照
///
/// 每次页面启动加载一次，之后不再刷新
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// 总销售额（印尼盾）
    pub total_sales: f64,

    /// 库存价值（印尼盾）
    pub inventory_value: f64,

    /// 增长率（后端已算好的百分比值）
    pub growth_rate: f64,

    /// 最畅销商品名称
    pub top_product: String,

    /// 日销售序列（按日期升序，每日一条）
    pub sales_data: Vec<TimeSeriesPoint>,

    /// 库存明细（转发给库存分析接口）
    pub inventory_data: Vec<InventoryItem>,
}

/// 日销售数据点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// 日期（YYYY-MM-DD，同时作为图表横轴标签）
    pub date: String,

    /// 当日销售额（印尼盾）
    pub sales: f64,
}

/// 销售趋势分析结果
///
/// 后端滚动均线在窗口不足时为 null，对应 None
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// 日期序列（YYYY-MM-DD）
    pub dates: Vec<String>,

    /// 销售额序列
    pub sales: Vec<f64>,

    /// 7 日移动平均
    pub ma_7: Vec<Option<f64>>,

    /// 30 日移动平均
    pub ma_30: Vec<Option<f64>>,

    /// 日环比增长率（%）
    pub growth: Vec<Option<f64>>,
}
