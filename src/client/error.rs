// ==========================================
// UKM 智能经营分析仪表盘 - 客户端层错误类型
// ==========================================
// 职责: 定义 HTTP 数据访问层的错误类型
// 说明: 非成功状态码与请求失败同等对待，不做逐状态分支
// ==========================================

use thiserror::Error;

/// 客户端层错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    /// 请求发送失败（连接拒绝/超时/DNS 等）
    #[error("请求发送失败: {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 后端返回非成功状态码
    #[error("后端返回非成功状态: {status}: {url}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// 响应体解析失败（非法 JSON 或字段不匹配）
    #[error("响应解析失败: {url}: {source}")]
    DecodeFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 客户端构建失败
    #[error("HTTP 客户端构建失败: {0}")]
    BuildFailed(String),
}

/// Result 类型别名
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_message() {
        let err = ClientError::BadStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://backend/api/ppic-data".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/api/ppic-data"));
    }
}
