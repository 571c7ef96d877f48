// ==========================================
// UKM 智能经营分析仪表盘 - 运行时配置
// ==========================================
// 职责: 汇总后端地址/超时/下载目录/界面语言等运行参数
// 说明: 全部来源于环境变量，带合理默认值
// ==========================================

use std::path::PathBuf;
use std::time::Duration;

/// 后端地址环境变量
pub const ENV_API_URL: &str = "UKM_DASHBOARD_API_URL";

/// 请求超时环境变量（秒）
pub const ENV_TIMEOUT_SECS: &str = "UKM_DASHBOARD_TIMEOUT_SECS";

/// 报表下载目录环境变量
pub const ENV_DOWNLOAD_DIR: &str = "UKM_DASHBOARD_DOWNLOAD_DIR";

/// 界面语言环境变量
pub const ENV_LOCALE: &str = "UKM_DASHBOARD_LOCALE";

/// 默认后端地址（本地开发后端）
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// 默认请求超时（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 运行时配置
///
/// 包含应用启动所需的全部外部参数
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 后端基础地址（不含尾部斜杠）
    pub base_url: String,

    /// 单次请求超时
    pub request_timeout: Duration,

    /// 报表文件下载目录
    pub download_dir: PathBuf,

    /// 界面语言代码（"id" 或 "en"）
    pub locale: String,
}

impl AppConfig {
    /// 从环境变量构建配置
    ///
    /// # 环境变量
    /// - UKM_DASHBOARD_API_URL: 后端基础地址（默认 http://127.0.0.1:5000）
    /// - UKM_DASHBOARD_TIMEOUT_SECS: 请求超时秒数（默认 30）
    /// - UKM_DASHBOARD_DOWNLOAD_DIR: 下载目录（默认用户下载目录，取不到时为当前目录）
    /// - UKM_DASHBOARD_LOCALE: 界面语言（默认 "id"）
    pub fn from_env() -> Self {
        let base_url = env_nonempty(ENV_API_URL)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = env_nonempty(ENV_TIMEOUT_SECS)
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let download_dir = env_nonempty(ENV_DOWNLOAD_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_download_dir);

        let locale = env_nonempty(ENV_LOCALE).unwrap_or_else(|| "id".to_string());

        Self {
            base_url,
            request_timeout,
            download_dir,
            locale,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            download_dir: default_download_dir(),
            locale: "id".to_string(),
        }
    }
}

/// 读取非空环境变量
fn env_nonempty(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}

/// 默认下载目录
///
/// 优先使用用户下载目录，取不到时回退为当前目录
fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // 环境变量为进程全局状态，相关测试串行化
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let _guard = ENV_TEST_LOCK.lock().unwrap();
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_TIMEOUT_SECS);
        std::env::remove_var(ENV_LOCALE);

        let config = AppConfig::from_env();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.locale, "id");
    }

    #[test]
    fn test_env_override() {
        let _guard = ENV_TEST_LOCK.lock().unwrap();
        std::env::set_var(ENV_API_URL, "http://backend:8080/");
        std::env::set_var(ENV_TIMEOUT_SECS, "5");
        std::env::set_var(ENV_LOCALE, "en");

        let config = AppConfig::from_env();
        // 尾部斜杠被去除
        assert_eq!(config.base_url, "http://backend:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.locale, "en");

        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_TIMEOUT_SECS);
        std::env::remove_var(ENV_LOCALE);
    }

    #[test]
    fn test_blank_env_falls_back() {
        let _guard = ENV_TEST_LOCK.lock().unwrap();
        std::env::set_var(ENV_API_URL, "   ");

        let config = AppConfig::from_env();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");

        std::env::remove_var(ENV_API_URL);
    }
}
