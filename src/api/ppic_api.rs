// ==========================================
// UKM 智能经营分析仪表盘 - PPIC 页 API
// ==========================================
// 职责: EOQ 曲线/需求模式/订货建议的加载，
//       EOQ、ROP、库存优化三个计算操作
// ==========================================

use std::sync::Arc;

use crate::app::navigator::{EpochGuard, TabNavigator};
use crate::chart;
use crate::client::BackendApi;
use crate::domain::OrderingRecommendation;
use crate::format::{format_plain, format_rupiah};
use crate::i18n::{t, t_with_args};
use crate::view::{elements, Notification, TableModel, UiSink};

use super::error::{ApiError, ApiResult};

/// PPIC 页API
pub struct PpicApi {
    /// 后端客户端
    backend: Arc<dyn BackendApi>,

    /// 渲染接口
    view: Arc<dyn UiSink>,

    /// 导航控制器（渲染前校验纪元）
    navigator: Arc<TabNavigator>,
}

impl PpicApi {
    /// 创建新的PpicApi实例
    pub fn new(
        backend: Arc<dyn BackendApi>,
        view: Arc<dyn UiSink>,
        navigator: Arc<TabNavigator>,
    ) -> Self {
        Self {
            backend,
            view,
            navigator,
        }
    }

    /// 加载 PPIC 页（被动加载，失败对用户静默）
    ///
    /// 一次取数；取数失败时 EOQ 图/需求图/订货表全部保持空白，
    /// 也不产生任何用户通知
    pub async fn load(&self, guard: EpochGuard) {
        let data = match self.backend.ppic_data().await {
            Ok(data) => data,
            Err(e) => {
                let err = ApiError::from(e);
                tracing::warn!(code = err.code(), "PPIC 数据加载失败: {}", err);
                return;
            }
        };

        if !self.navigator.is_current(&guard) {
            tracing::debug!("PPIC 响应迟到，纪元已推进，丢弃");
            return;
        }

        // EOQ 成本曲线图（空曲线视为数据不一致，保持空白）
        match chart::eoq_chart(&data.eoq_data) {
            Some(spec) => {
                if let Err(e) = self.view.render_chart(elements::EOQ_CHART, spec) {
                    tracing::warn!("EOQ 图渲染失败: {}", e);
                }
            }
            None => tracing::warn!("EOQ 曲线为空，保持空白"),
        }

        // 需求模式图
        let spec = chart::demand_pattern_chart(&data.demand_data);
        if let Err(e) = self.view.render_chart(elements::DEMAND_PATTERN_CHART, spec) {
            tracing::warn!("需求模式图渲染失败: {}", e);
        }

        // 订货建议表（整表替换）
        let table = ordering_table(&data.ordering_recommendations);
        if let Err(e) = self.view.replace_table(elements::ORDERING_TABLE, table) {
            tracing::warn!("订货建议表渲染失败: {}", e);
        }
    }

    // ==========================================
    // 用户操作
    // ==========================================

    /// 计算 EOQ（多行结果通知）
    pub async fn calculate_eoq(&self) -> ApiResult<Notification> {
        let result = self.backend.calculate_eoq().await?;

        let message = [
            t("eoq.header"),
            t_with_args("eoq.line_eoq", &[("value", &format_plain(result.eoq))]),
            t_with_args(
                "eoq.line_total_cost",
                &[("value", &format_rupiah(result.total_cost))],
            ),
            t_with_args(
                "eoq.line_ordering_cost",
                &[("value", &format_rupiah(result.ordering_cost))],
            ),
            t_with_args(
                "eoq.line_holding_cost",
                &[("value", &format_rupiah(result.holding_cost))],
            ),
            t_with_args(
                "eoq.line_optimal_orders",
                &[("value", &format_plain(result.optimal_orders))],
            ),
        ]
        .join("\n");

        Ok(Notification::result(message))
    }

    /// 计算 ROP（多行结果通知）
    pub async fn calculate_rop(&self) -> ApiResult<Notification> {
        let result = self.backend.calculate_rop().await?;

        let message = [
            t("rop.header"),
            t_with_args("rop.line_rop", &[("value", &format_plain(result.rop))]),
            t_with_args(
                "rop.line_safety_stock",
                &[("value", &format_plain(result.safety_stock))],
            ),
            t_with_args(
                "rop.line_lead_time_demand",
                &[("value", &format_plain(result.lead_time_demand))],
            ),
            t_with_args(
                "rop.line_service_level",
                &[("value", &format_plain(result.service_level))],
            ),
        ]
        .join("\n");

        Ok(Notification::result(message))
    }

    /// 库存优化（多行结果通知）
    pub async fn optimize_inventory(&self) -> ApiResult<Notification> {
        let result = self.backend.optimize_inventory().await?;

        let message = [
            t("optimize.header"),
            t_with_args(
                "optimize.line_savings",
                &[("value", &format_rupiah(result.savings))],
            ),
            t_with_args(
                "optimize.line_stock_out",
                &[("value", &format_plain(result.stock_out_reduction))],
            ),
            t_with_args(
                "optimize.line_turnover",
                &[("value", &format_plain(result.turnover_improvement))],
            ),
            t_with_args(
                "optimize.line_recommendation",
                &[("value", &result.recommendation)],
            ),
        ]
        .join("\n");

        Ok(Notification::result(message))
    }
}

/// 构建订货建议表行
///
/// 行格式: 商品 / EOQ / ROP / 安全库存 / 订货周期（"N hari"）
pub(crate) fn ordering_table(recommendations: &[OrderingRecommendation]) -> TableModel {
    let rows = recommendations
        .iter()
        .map(|rec| {
            vec![
                rec.product.clone(),
                format_plain(rec.eoq),
                format_plain(rec.rop),
                format_plain(rec.safety_stock),
                t_with_args(
                    "table.frequency_days",
                    &[("days", &format_plain(rec.frequency))],
                ),
            ]
        })
        .collect();
    TableModel::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_table_rows() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let recommendations = vec![OrderingRecommendation {
            product: "Indomie Goreng".into(),
            eoq: 346.0,
            rop: 120.0,
            safety_stock: 40.0,
            frequency: 10.0,
        }];

        let table = ordering_table(&recommendations);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.rows[0],
            vec![
                "Indomie Goreng".to_string(),
                "346".to_string(),
                "120".to_string(),
                "40".to_string(),
                "10 hari".to_string(),
            ]
        );
    }
}
