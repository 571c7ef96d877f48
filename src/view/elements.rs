// ==========================================
// UKM 智能经营分析仪表盘 - 界面元素标识
// ==========================================
// 职责: 集中声明所有渲染目标与操作按钮的稳定标识
// 说明: 页签选择器通过 data 属性携带面板标识（TabId::panel_id）
// ==========================================

// ==========================================
// KPI 卡片
// ==========================================

/// 总销售额
pub const TOTAL_SALES: &str = "total-sales";
/// 库存价值
pub const INVENTORY_VALUE: &str = "inventory-value";
/// 增长率
pub const GROWTH_RATE: &str = "growth-rate";
/// 最畅销商品
pub const TOP_PRODUCT: &str = "top-product";

// ==========================================
// 图表画布
// ==========================================

/// 销售趋势图
pub const SALES_TREND_CHART: &str = "sales-trend-chart";
/// 销售预测图
pub const SALES_FORECAST_CHART: &str = "sales-forecast-chart";
/// ABC 分类分布图
pub const ABC_ANALYSIS_CHART: &str = "abc-analysis-chart";
/// 库存周转图
pub const INVENTORY_TURNOVER_CHART: &str = "inventory-turnover-chart";
/// 月度绩效图
pub const PERFORMANCE_CHART: &str = "performance-chart";
/// 商品盈利分析图
pub const PROFITABILITY_CHART: &str = "profitability-chart";
/// EOQ 成本曲线图
pub const EOQ_CHART: &str = "eoq-chart";
/// 需求模式图
pub const DEMAND_PATTERN_CHART: &str = "demand-pattern-chart";

// ==========================================
// 表格
// ==========================================

/// 月度绩效表
pub const PERFORMANCE_TABLE: &str = "performance-table";
/// 订货建议表
pub const ORDERING_TABLE: &str = "ordering-table";

// ==========================================
// 操作按钮
// ==========================================

/// 生成管理报表
pub const BTN_GENERATE_REPORT: &str = "generate-report";
/// 分析绩效
pub const BTN_ANALYZE_PERFORMANCE: &str = "analyze-performance";
/// 计算 EOQ
pub const BTN_CALCULATE_EOQ: &str = "calculate-eoq";
/// 计算 ROP
pub const BTN_CALCULATE_ROP: &str = "calculate-rop";
/// 库存优化
pub const BTN_OPTIMIZE_INVENTORY: &str = "optimize-inventory";
/// 更新库存
pub const BTN_UPDATE_STOCK: &str = "update-stock";
/// 检查效期
pub const BTN_CHECK_EXPIRY: &str = "check-expiry";
/// 生成库存报表
pub const BTN_GENERATE_INVENTORY_REPORT: &str = "generate-inventory-report";

/// 全部渲染目标（KPI/图表/表格，不含按钮）
pub fn render_targets() -> &'static [&'static str] {
    &[
        TOTAL_SALES,
        INVENTORY_VALUE,
        GROWTH_RATE,
        TOP_PRODUCT,
        SALES_TREND_CHART,
        SALES_FORECAST_CHART,
        ABC_ANALYSIS_CHART,
        INVENTORY_TURNOVER_CHART,
        PERFORMANCE_CHART,
        PROFITABILITY_CHART,
        EOQ_CHART,
        DEMAND_PATTERN_CHART,
        PERFORMANCE_TABLE,
        ORDERING_TABLE,
    ]
}
