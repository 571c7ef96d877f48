// ==========================================
// UKM 智能经营分析仪表盘 - API 层
// ==========================================
// 职责: 页签数据加载器与用户操作
// 架构: API 层 → 客户端层 (BackendApi) → 后端 HTTP 接口
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod inventory_api;
pub mod management_api;
pub mod ppic_api;

pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use inventory_api::InventoryApi;
pub use management_api::ManagementApi;
pub use ppic_api::PpicApi;
