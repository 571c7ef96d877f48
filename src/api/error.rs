// ==========================================
// UKM 智能经营分析仪表盘 - API层错误类型
// ==========================================
// 职责: 定义加载/操作的统一错误分类
// 说明: 三类失败在同一粒度捕获，折叠为单一"操作失败"结果；
//       始终记录日志，仅用户主动操作才向界面透出
// ==========================================

use thiserror::Error;

use crate::client::ClientError;
use crate::view::RenderError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 失败分类（与处理粒度一致，不再细分）
    // ==========================================
    /// 网络失败（请求被拒绝或非成功状态，统一对待）
    #[error("网络请求失败: {0}")]
    NetworkFailure(String),

    /// 解析失败（非法 JSON 或字段不匹配）
    #[error("响应解析失败: {0}")]
    ParseFailure(String),

    /// 渲染失败（渲染目标缺失）
    #[error("渲染失败: {0}")]
    RenderFailure(#[from] RenderError),

    /// 响应数据不一致（并行数组未对齐等）
    #[error("响应数据不一致: {0}")]
    InvalidResponse(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 稳定的机器可读错误代码（记录日志与界面层分流用）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NetworkFailure(_) => "NETWORK_FAILURE",
            ApiError::ParseFailure(_) => "PARSE_FAILURE",
            ApiError::RenderFailure(_) => "RENDER_FAILURE",
            ApiError::InvalidResponse(_) => "INVALID_RESPONSE",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }
}

// ==========================================
// 从 ClientError 转换
// 目的: 把客户端层的传输错误折叠进 API 层分类
// ==========================================
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            // 请求失败与非成功状态统一归为网络失败
            ClientError::RequestFailed { .. }
            | ClientError::BadStatus { .. }
            | ClientError::BuildFailed(_) => ApiError::NetworkFailure(err.to_string()),

            // 响应体解析失败
            ClientError::DecodeFailed { .. } => ApiError::ParseFailure(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
