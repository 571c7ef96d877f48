// ==========================================
// UKM 智能经营分析仪表盘 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{DashboardApi, InventoryApi, ManagementApi, PpicApi};
use crate::client::{BackendApi, HttpBackendClient};
use crate::config::AppConfig;
use crate::view::UiSink;

use super::navigator::TabNavigator;

/// 应用状态
///
/// 包含所有API实例和共享资源，在界面壳中作为全局状态管理
pub struct AppState {
    /// 运行时配置
    pub config: AppConfig,

    /// 后端客户端
    pub backend: Arc<dyn BackendApi>,

    /// 渲染接口
    pub view: Arc<dyn UiSink>,

    /// 导航控制器
    pub navigator: Arc<TabNavigator>,

    /// 总览页API
    pub dashboard_api: Arc<DashboardApi>,

    /// 管理页API
    pub management_api: Arc<ManagementApi>,

    /// PPIC 页API
    pub ppic_api: Arc<PpicApi>,

    /// 库存页API
    pub inventory_api: Arc<InventoryApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config: 运行时配置
    /// - view: 渲染接口实现（由界面壳提供）
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    pub fn new(config: AppConfig, view: Arc<dyn UiSink>) -> Result<Self, String> {
        tracing::info!("初始化AppState，后端地址: {}", config.base_url);

        let backend = Arc::new(
            HttpBackendClient::new(&config).map_err(|e| format!("无法创建后端客户端: {}", e))?,
        );

        Ok(Self::with_backend(config, backend, view))
    }

    /// 指定后端实现装配（测试或自定义客户端用）
    pub fn with_backend(
        config: AppConfig,
        backend: Arc<dyn BackendApi>,
        view: Arc<dyn UiSink>,
    ) -> Self {
        // ==========================================
        // 初始化导航控制器
        // ==========================================
        let navigator = Arc::new(TabNavigator::new());

        // ==========================================
        // 初始化API层
        // ==========================================
        let dashboard_api = Arc::new(DashboardApi::new(
            backend.clone(),
            view.clone(),
            navigator.clone(),
        ));
        let management_api = Arc::new(ManagementApi::new(
            backend.clone(),
            view.clone(),
            navigator.clone(),
        ));
        let ppic_api = Arc::new(PpicApi::new(
            backend.clone(),
            view.clone(),
            navigator.clone(),
        ));
        let inventory_api = Arc::new(InventoryApi::new());

        tracing::info!("AppState初始化完成");

        Self {
            config,
            backend,
            view,
            navigator,
            dashboard_api,
            management_api,
            ppic_api,
            inventory_api,
        }
    }
}
