// ==========================================
// UKM 智能经营分析仪表盘 - 库存分析值对象
// ==========================================
// 职责: /api/inventory-analysis 与 /api/forecast 响应结构
// 不变式: 同一响应内的并行数组长度一致且按下标对齐
// ==========================================

use serde::{Deserialize, Serialize};

use super::types::AbcClass;

/// 库存明细行
///
/// 原样转发给库存分析接口，字段含义由后端定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// 商品名称
    pub product: String,

    /// 当前库存量
    pub stock: f64,

    /// 单价（印尼盾）
    pub price: f64,

    /// 销量
    pub sales: f64,
}

/// 销售预测结果
///
/// dates 与 values 为等长并行数组，接在历史序列之后
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// 预测日期序列（YYYY-MM-DD）
    pub dates: Vec<String>,

    /// 预测销售额序列
    pub values: Vec<f64>,
}

impl ForecastResult {
    /// 并行数组是否对齐
    pub fn is_aligned(&self) -> bool {
        self.dates.len() == self.values.len()
    }

    /// 预测期数
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// 库存分析结果
///
/// 四个并行数组按下标对齐：第 i 个分类属于第 i 个商品
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryAnalysis {
    /// 商品名称序列
    pub products: Vec<String>,

    /// 库存周转率序列
    pub turnover: Vec<f64>,

    /// 库存价值序列（后端算好，按原值消费）
    pub value: Vec<f64>,

    /// ABC 分类标签序列（"A" / "B" / "C"）
    pub abc_class: Vec<String>,
}

impl InventoryAnalysis {
    /// 并行数组是否对齐
    pub fn is_aligned(&self) -> bool {
        let n = self.products.len();
        self.turnover.len() == n && self.value.len() == n && self.abc_class.len() == n
    }

    /// 商品数量
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 统计某一分类的商品数量（对标签数组做整趟过滤）
    pub fn count_class(&self, class: AbcClass) -> usize {
        self.abc_class
            .iter()
            .filter(|c| c.as_str() == class.label())
            .count()
    }
}
