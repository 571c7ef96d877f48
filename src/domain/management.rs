// ==========================================
// UKM 智能经营分析仪表盘 - 管理页值对象
// ==========================================
// 职责: /api/management-data 与 /api/analyze-performance 响应结构
// ==========================================

use serde::{Deserialize, Serialize};

/// 管理页数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagementData {
    /// 月度绩效序列
    pub performance_data: Vec<PerformanceRecord>,

    /// 商品盈利序列
    pub profitability_data: Vec<ProfitabilityRecord>,
}

/// 月度绩效记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// 月份标签（如 "Jan"）
    pub month: String,

    /// 销售额（印尼盾）
    pub sales: f64,

    /// 成本（印尼盾）
    pub costs: f64,

    /// 利润（印尼盾）
    pub profit: f64,
}

impl PerformanceRecord {
    /// 利润率（%），由前端按 profit / sales × 100 推导
    ///
    /// 销售额为零时返回 0，避免除零
    pub fn margin_pct(&self) -> f64 {
        if self.sales == 0.0 {
            0.0
        } else {
            self.profit / self.sales * 100.0
        }
    }
}

/// 商品盈利记录
///
/// margin 由后端提供，按原值消费
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitabilityRecord {
    /// 商品名称
    pub product: String,

    /// 收入（印尼盾）
    pub revenue: f64,

    /// 成本（印尼盾）
    pub cost: f64,

    /// 利润（印尼盾）
    pub profit: f64,

    /// 利润率（%）
    pub margin: f64,
}

/// 绩效分析结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    /// 平均销售额（印尼盾）
    pub avg_sales: f64,

    /// 平均利润（印尼盾）
    pub avg_profit: f64,

    /// 平均利润率（%，按原值展示）
    pub avg_margin: f64,

    /// 月度增长率（%，按原值展示）
    pub monthly_growth: f64,

    /// 最佳商品
    pub top_product: String,

    /// 最佳品类
    pub top_category: String,
}
