// ==========================================
// UKM 智能经营分析仪表盘 - 管理页 API
// ==========================================
// 职责: 月度绩效/盈利图表与绩效表的加载，
//       报表生成与绩效分析两个用户操作
// ==========================================

use std::sync::Arc;

use crate::app::navigator::{EpochGuard, TabNavigator};
use crate::chart;
use crate::client::BackendApi;
use crate::domain::{PerformanceRecord, ReportFile};
use crate::format::{format_percent, format_plain, format_rupiah};
use crate::i18n::{t, t_with_args};
use crate::view::{elements, Notification, TableModel, UiSink};

use super::error::{ApiError, ApiResult};

/// 管理页API
pub struct ManagementApi {
    /// 后端客户端
    backend: Arc<dyn BackendApi>,

    /// 渲染接口
    view: Arc<dyn UiSink>,

    /// 导航控制器（渲染前校验纪元）
    navigator: Arc<TabNavigator>,
}

impl ManagementApi {
    /// 创建新的ManagementApi实例
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

    /// 加载管理页（被动加载，失败对用户静默）
    ///
    /// 一次取数；取数失败时绩效图/盈利图/绩效表全部保持空白。
    /// 三个渲染路径相互隔离，单个渲染失败不影响其余两个
    pub async fn load(&self, guard: EpochGuard) {
        let data = match self.backend.management_data().await {
            Ok(data) => data,
            Err(e) => {
                let err = ApiError::from(e);
                tracing::warn!(code = err.code(), "管理数据加载失败: {}", err);
                return;
            }
        };

        if !self.navigator.is_current(&guard) {
            tracing::debug!("管理数据响应迟到，纪元已推进，丢弃");
            return;
        }

        // 绩效图
        let spec = chart::performance_chart(&data.performance_data);
        if let Err(e) = self.view.render_chart(elements::PERFORMANCE_CHART, spec) {
            tracing::warn!("月度绩效图渲染失败: {}", e);
        }

        // 盈利分析图
        let spec = chart::profitability_chart(&data.profitability_data);
        if let Err(e) = self.view.render_chart(elements::PROFITABILITY_CHART, spec) {
            tracing::warn!("盈利分析图渲染失败: {}", e);
        }

        // 绩效表（整表替换）
        let table = performance_table(&data.performance_data);
        if let Err(e) = self.view.replace_table(elements::PERFORMANCE_TABLE, table) {
            tracing::warn!("绩效表渲染失败: {}", e);
        }
    }

    // ==========================================
    // 用户操作
    // ==========================================

    /// 生成管理报表并提供下载
    ///
    /// 载荷序列化为格式化 JSON，文件名带当天日期
    pub async fn generate_report(&self) -> ApiResult<Notification> {
        let payload = self.backend.generate_report().await?;

        let today = chrono::Local::now().date_naive();
        let file = ReportFile::from_payload(&payload, today)
            .map_err(|e| ApiError::ParseFailure(format!("报表载荷序列化失败: {}", e)))?;

        self.view.offer_download(file)?;
        Ok(Notification::success(t("notify.report_success")))
    }

    /// 绩效分析（多行结果通知）
    pub async fn analyze_performance(&self) -> ApiResult<Notification> {
        let analysis = self.backend.analyze_performance().await?;

        let message = [
            t("analysis.header"),
            t_with_args(
                "analysis.line_avg_sales",
                &[("value", &format_rupiah(analysis.avg_sales))],
            ),
            t_with_args(
                "analysis.line_avg_profit",
                &[("value", &format_rupiah(analysis.avg_profit))],
            ),
            t_with_args(
                "analysis.line_avg_margin",
                &[("value", &format_plain(analysis.avg_margin))],
            ),
            t_with_args(
                "analysis.line_monthly_growth",
                &[("value", &format_plain(analysis.monthly_growth))],
            ),
            t_with_args(
                "analysis.line_top_product",
                &[("value", &analysis.top_product)],
            ),
            t_with_args(
                "analysis.line_top_category",
                &[("value", &analysis.top_category)],
            ),
        ]
        .join("\n");

        Ok(Notification::result(message))
    }
}

/// 构建绩效表行
///
/// 行格式: 月份 / 销售额 / 成本 / 利润 / 利润率（前端推导，两位小数）
pub(crate) fn performance_table(records: &[PerformanceRecord]) -> TableModel {
    let rows = records
        .iter()
        .map(|record| {
            vec![
                record.month.clone(),
                format_rupiah(record.sales),
                format_rupiah(record.costs),
                format_rupiah(record.profit),
                format_percent(record.margin_pct()),
            ]
        })
        .collect();
    TableModel::new(rows)
}
