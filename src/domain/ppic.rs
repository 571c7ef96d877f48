// ==========================================
// UKM 智能经营分析仪表盘 - PPIC 页值对象
// ==========================================
// 职责: /api/ppic-data 与 EOQ/ROP/优化计算接口的响应结构
// ==========================================

use serde::{Deserialize, Serialize};

/// PPIC 页数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpicData {
    /// EOQ 成本曲线采样点（订货量递增）
    pub eoq_data: Vec<EoqPoint>,

    /// 需求模式序列
    pub demand_data: Vec<DemandPoint>,

    /// 订货建议列表
    pub ordering_recommendations: Vec<OrderingRecommendation>,
}

/// EOQ 成本曲线采样点
///
/// 总成本最小的采样点即为经济订货量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoqPoint {
    /// 订货量
    pub quantity: f64,

    /// 订货成本（印尼盾）
    pub ordering_cost: f64,

    /// 持有成本（印尼盾）
    pub holding_cost: f64,

    /// 总成本（印尼盾）
    pub total_cost: f64,
}

/// 需求模式数据点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandPoint {
    /// 期间标签（如 "Bulan 1"）
    pub period: String,

    /// 实际需求
    pub demand: f64,

    /// 预测需求
    pub forecast: f64,

    /// 预测误差（实际 - 预测）
    pub error: f64,
}

/// 订货建议
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderingRecommendation {
    /// 商品名称
    pub product: String,

    /// 经济订货量
    pub eoq: f64,

    /// 再订货点
    pub rop: f64,

    /// 安全库存
    pub safety_stock: f64,

    /// 订货周期（天）
    pub frequency: f64,
}

/// EOQ 计算结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoqCalculation {
    /// 经济订货量
    pub eoq: f64,

    /// 总成本（印尼盾）
    pub total_cost: f64,

    /// 订货成本（印尼盾）
    pub ordering_cost: f64,

    /// 持有成本（印尼盾）
    pub holding_cost: f64,

    /// 每年最优订货次数
    pub optimal_orders: f64,
}

/// ROP 计算结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RopCalculation {
    /// 再订货点
    pub rop: f64,

    /// 安全库存
    pub safety_stock: f64,

    /// 提前期需求
    pub lead_time_demand: f64,

    /// 服务水平（%）
    pub service_level: f64,
}

/// 库存优化结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryOptimization {
    /// 总节省（印尼盾）
    pub savings: f64,

    /// 缺货减少（%）
    pub stock_out_reduction: f64,

    /// 周转率提升（%）
    pub turnover_improvement: f64,

    /// 优化建议文本
    pub recommendation: String,
}
