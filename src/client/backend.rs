// ==========================================
// UKM 智能经营分析仪表盘 - 后端接口客户端
// ==========================================
// 职责: 每个后端接口一个类型化方法
// 说明: 无重试、无退避；失败语义由上层决定
// ==========================================

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::{
    DashboardSnapshot, EoqCalculation, ForecastResult, InventoryAnalysis, InventoryItem,
    InventoryOptimization, ManagementData, PerformanceAnalysis, PpicData, RopCalculation,
    TimeSeriesPoint, TrendAnalysis,
};

use super::error::{ClientError, ClientResult};

// ==========================================
// 接口抽象
// ==========================================

/// 后端分析接口
///
/// 所有业务计算（预测/ABC/EOQ/ROP）均在后端完成，
/// 本层只做取数与类型化解析
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// GET /api/dashboard-data
    async fn dashboard_data(&self) -> ClientResult<DashboardSnapshot>;

    /// POST /api/forecast
    async fn forecast(&self, sales_data: &[TimeSeriesPoint]) -> ClientResult<ForecastResult>;

    /// POST /api/trends
    async fn trends(&self, sales_data: &[TimeSeriesPoint]) -> ClientResult<TrendAnalysis>;

    /// POST /api/inventory-analysis
    async fn inventory_analysis(
        &self,
        inventory_data: &[InventoryItem],
    ) -> ClientResult<InventoryAnalysis>;

    /// GET /api/management-data
    async fn management_data(&self) -> ClientResult<ManagementData>;

    /// POST /api/generate-report（载荷结构由后端定义，原样透传）
    async fn generate_report(&self) -> ClientResult<serde_json::Value>;

    /// POST /api/analyze-performance
    async fn analyze_performance(&self) -> ClientResult<PerformanceAnalysis>;

    /// GET /api/ppic-data
    async fn ppic_data(&self) -> ClientResult<PpicData>;

    /// POST /api/calculate-eoq
    async fn calculate_eoq(&self) -> ClientResult<EoqCalculation>;

    /// POST /api/calculate-rop
    async fn calculate_rop(&self) -> ClientResult<RopCalculation>;

    /// POST /api/optimize-inventory
    async fn optimize_inventory(&self) -> ClientResult<InventoryOptimization>;
}

// ==========================================
// HTTP 实现
// ==========================================

/// 基于 reqwest 的后端客户端
pub struct HttpBackendClient {
    /// 复用的 HTTP 连接池
    http: reqwest::Client,

    /// 后端基础地址（不含尾部斜杠）
    base_url: String,
}

impl HttpBackendClient {
    /// 按配置构建客户端
    pub fn new(config: &AppConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::BuildFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 指定基础地址构建客户端（测试用）
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::BuildFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// 拼接完整 URL
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET 并解析 JSON
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed {
                url: url.clone(),
                source: e,
            })?;

        Self::decode(url, response).await
    }

    /// POST（可带 JSON 请求体）并解析 JSON
    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed {
                url: url.clone(),
                source: e,
            })?;

        Self::decode(url, response).await
    }

    /// 统一的状态检查与解码
    async fn decode<T: DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::BadStatus { status, url });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::DecodeFailed { url, source: e })
    }
}

/// POST /api/forecast 与 /api/trends 的请求体
#[derive(Serialize)]
struct SalesDataBody<'a> {
    sales_data: &'a [TimeSeriesPoint],
}

/// POST /api/inventory-analysis 的请求体
#[derive(Serialize)]
struct InventoryDataBody<'a> {
    inventory_data: &'a [InventoryItem],
}

#[async_trait]
impl BackendApi for HttpBackendClient {
    async fn dashboard_data(&self) -> ClientResult<DashboardSnapshot> {
        self.get_json("/api/dashboard-data").await
    }

    async fn forecast(&self, sales_data: &[TimeSeriesPoint]) -> ClientResult<ForecastResult> {
        self.post_json("/api/forecast", Some(&SalesDataBody { sales_data }))
            .await
    }

    async fn trends(&self, sales_data: &[TimeSeriesPoint]) -> ClientResult<TrendAnalysis> {
        self.post_json("/api/trends", Some(&SalesDataBody { sales_data }))
            .await
    }

    async fn inventory_analysis(
        &self,
        inventory_data: &[InventoryItem],
    ) -> ClientResult<InventoryAnalysis> {
        self.post_json(
            "/api/inventory-analysis",
            Some(&InventoryDataBody { inventory_data }),
        )
        .await
    }

    async fn management_data(&self) -> ClientResult<ManagementData> {
        self.get_json("/api/management-data").await
    }

    async fn generate_report(&self) -> ClientResult<serde_json::Value> {
        self.post_json::<(), _>("/api/generate-report", None).await
    }

    async fn analyze_performance(&self) -> ClientResult<PerformanceAnalysis> {
        self.post_json::<(), _>("/api/analyze-performance", None)
            .await
    }

    async fn ppic_data(&self) -> ClientResult<PpicData> {
        self.get_json("/api/ppic-data").await
    }

    async fn calculate_eoq(&self) -> ClientResult<EoqCalculation> {
        self.post_json::<(), _>("/api/calculate-eoq", None).await
    }

    async fn calculate_rop(&self) -> ClientResult<RopCalculation> {
        self.post_json::<(), _>("/api/calculate-rop", None).await
    }

    async fn optimize_inventory(&self) -> ClientResult<InventoryOptimization> {
        self.post_json::<(), _>("/api/optimize-inventory", None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = HttpBackendClient::with_base_url("http://backend:5000/").unwrap();
        assert_eq!(
            client.url("/api/dashboard-data"),
            "http://backend:5000/api/dashboard-data"
        );
    }
}
