// ==========================================
// UKM 智能经营分析仪表盘 - 总览页 API
// ==========================================
// 职责: KPI 卡片与总览页四张图表的加载与渲染
// 架构: 一次快照取数 + 每张图表独立的异步加载路径，
//       任一路径失败只记录日志，不影响其余路径
// ==========================================

use std::sync::Arc;

use crate::app::navigator::{EpochGuard, TabNavigator};
use crate::chart;
use crate::client::BackendApi;
use crate::domain::{DashboardSnapshot, TimeSeriesPoint, TrendAnalysis};
use crate::format::{format_percent, format_rupiah};
use crate::view::{elements, UiSink};

use super::error::{ApiError, ApiResult};

/// 总览页API
///
/// 快照数据仅在启动时加载一次（总览页签重新激活不触发刷新）
pub struct DashboardApi {
    /// 后端客户端
    backend: Arc<dyn BackendApi>,

    /// 渲染接口
    view: Arc<dyn UiSink>,

    /// 导航控制器（渲染前校验纪元）
    navigator: Arc<TabNavigator>,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
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

    /// 加载总览页（被动加载，失败对用户静默）
    ///
    /// 取到快照后：
    /// 1. 同步渲染 KPI 卡片与销售趋势图
    /// 2. 并发发起预测图 / ABC 图 / 周转图三个独立任务，
    ///    各自完成时各自渲染，完成顺序无保证
    pub async fn load(&self, guard: EpochGuard) {
        let snapshot = match self.backend.dashboard_data().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                let err = ApiError::from(e);
                tracing::warn!(code = err.code(), "总览数据加载失败: {}", err);
                return;
            }
        };

        if !self.navigator.is_current(&guard) {
            tracing::debug!("总览响应迟到，纪元已推进，丢弃");
            return;
        }

        // KPI 卡片与趋势图直接由快照渲染
        if let Err(e) = self.render_kpis(&snapshot) {
            tracing::warn!(code = e.code(), "KPI 渲染失败: {}", e);
        }
        if let Err(e) = self.render_sales_trend(&snapshot.sales_data) {
            tracing::warn!(code = e.code(), "销售趋势图渲染失败: {}", e);
        }

        // 三个独立加载路径并发执行，互不阻塞，完成顺序无保证
        let forecast_path = self.load_forecast_chart(&snapshot, guard);
        let abc_path = self.load_abc_chart(&snapshot, guard);
        let turnover_path = self.load_turnover_chart(&snapshot, guard);
        futures::join!(forecast_path, abc_path, turnover_path);
    }

    /// 销售趋势分析（透传后端 /api/trends）
    pub async fn trend_analysis(
        &self,
        sales_data: &[TimeSeriesPoint],
    ) -> ApiResult<TrendAnalysis> {
        let trends = self.backend.trends(sales_data).await?;
        Ok(trends)
    }

    // ==========================================
    // 渲染路径
    // ==========================================

    /// 渲染 KPI 卡片
    fn render_kpis(&self, snapshot: &DashboardSnapshot) -> ApiResult<()> {
        self.view
            .set_text(elements::TOTAL_SALES, &format_rupiah(snapshot.total_sales))?;
        self.view.set_text(
            elements::INVENTORY_VALUE,
            &format_rupiah(snapshot.inventory_value),
        )?;
        self.view.set_text(
            elements::GROWTH_RATE,
            &format_percent(snapshot.growth_rate),
        )?;
        self.view
            .set_text(elements::TOP_PRODUCT, &snapshot.top_product)?;
        Ok(())
    }

    /// 渲染销售趋势图
    fn render_sales_trend(&self, sales_data: &[TimeSeriesPoint]) -> ApiResult<()> {
        let spec = chart::sales_trend_chart(sales_data);
        self.view.render_chart(elements::SALES_TREND_CHART, spec)?;
        Ok(())
    }

    /// 预测图加载路径（独立失败隔离）
    async fn load_forecast_chart(&self, snapshot: &DashboardSnapshot, guard: EpochGuard) {
        if let Err(e) = self.build_forecast_chart(snapshot, guard).await {
            tracing::warn!(code = e.code(), "销售预测图加载失败(保持空白): {}", e);
        }
    }

    async fn build_forecast_chart(
        &self,
        snapshot: &DashboardSnapshot,
        guard: EpochGuard,
    ) -> ApiResult<()> {
        let forecast = self.backend.forecast(&snapshot.sales_data).await?;
        if !forecast.is_aligned() {
            return Err(ApiError::InvalidResponse(format!(
                "预测响应并行数组未对齐: dates={}, values={}",
                forecast.dates.len(),
                forecast.values.len()
            )));
        }

        if !self.navigator.is_current(&guard) {
            tracing::debug!("预测响应迟到，纪元已推进，丢弃");
            return Ok(());
        }

        let spec = chart::sales_forecast_chart(&snapshot.sales_data, &forecast);
        self.view
            .render_chart(elements::SALES_FORECAST_CHART, spec)?;
        Ok(())
    }

    /// ABC 分布图加载路径（独立失败隔离）
    async fn load_abc_chart(&self, snapshot: &DashboardSnapshot, guard: EpochGuard) {
        if let Err(e) = self.build_abc_chart(snapshot, guard).await {
            tracing::warn!(code = e.code(), "ABC 分布图加载失败(保持空白): {}", e);
        }
    }

    async fn build_abc_chart(
        &self,
        snapshot: &DashboardSnapshot,
        guard: EpochGuard,
    ) -> ApiResult<()> {
        let analysis = self
            .backend
            .inventory_analysis(&snapshot.inventory_data)
            .await?;
        if !analysis.is_aligned() {
            return Err(ApiError::InvalidResponse(
                "库存分析响应并行数组未对齐".to_string(),
            ));
        }

        if !self.navigator.is_current(&guard) {
            tracing::debug!("库存分析响应迟到，纪元已推进，丢弃");
            return Ok(());
        }

        let spec = chart::abc_distribution_chart(&analysis);
        self.view.render_chart(elements::ABC_ANALYSIS_CHART, spec)?;
        Ok(())
    }

    /// 周转图加载路径（独立失败隔离，独立取数）
    async fn load_turnover_chart(&self, snapshot: &DashboardSnapshot, guard: EpochGuard) {
        if let Err(e) = self.build_turnover_chart(snapshot, guard).await {
            tracing::warn!(code = e.code(), "库存周转图加载失败(保持空白): {}", e);
        }
    }

    async fn build_turnover_chart(
        &self,
        snapshot: &DashboardSnapshot,
        guard: EpochGuard,
    ) -> ApiResult<()> {
        // 与 ABC 图各自取数，互不等待
        let analysis = self
            .backend
            .inventory_analysis(&snapshot.inventory_data)
            .await?;
        if !analysis.is_aligned() {
            return Err(ApiError::InvalidResponse(
                "库存分析响应并行数组未对齐".to_string(),
            ));
        }

        if !self.navigator.is_current(&guard) {
            tracing::debug!("库存分析响应迟到，纪元已推进，丢弃");
            return Ok(());
        }

        let spec = chart::turnover_chart(&analysis);
        self.view
            .render_chart(elements::INVENTORY_TURNOVER_CHART, spec)?;
        Ok(())
    }
}
