// ==========================================
// UKM 智能经营分析仪表盘 - 报表文件
// ==========================================
// 职责: 把后端报表载荷包装为可下载文件
// 命名规则: laporan-manajemen-<当天日期>.json
// ==========================================

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 报表文件名前缀
const REPORT_FILE_PREFIX: &str = "laporan-manajemen";

/// 可下载的报表文件
///
/// contents 为格式化（pretty）后的 JSON 文本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFile {
    /// 文件名（含 .json 后缀）
    pub file_name: String,

    /// 文件内容
    pub contents: String,
}

impl ReportFile {
    /// 从报表载荷构建下载文件
    ///
    /// # 参数
    /// - payload: 后端返回的任意 JSON 报表载荷
    /// - date: 命名用日期（调用方传入当天日期）
    pub fn from_payload(payload: &serde_json::Value, date: NaiveDate) -> serde_json::Result<Self> {
        let contents = serde_json::to_string_pretty(payload)?;
        Ok(Self {
            file_name: format!("{}-{}.json", REPORT_FILE_PREFIX, date.format("%Y-%m-%d")),
            contents,
        })
    }

    /// 把文件写入目录，返回完整路径
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_uses_iso_date() {
        let payload = serde_json::json!({"report_id": "RPT-20250101-120000"});
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let file = ReportFile::from_payload(&payload, date).unwrap();
        assert_eq!(file.file_name, "laporan-manajemen-2025-01-01.json");
    }

    #[test]
    fn test_contents_pretty_printed() {
        let payload = serde_json::json!({"summary": {"total_sales": 800000000.0}});
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        let file = ReportFile::from_payload(&payload, date).unwrap();
        // pretty 输出带换行与缩进
        assert!(file.contents.contains('\n'));
        assert!(file.contents.contains("  \"summary\""));

        // 内容可以再解析回同一载荷
        let reparsed: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
        assert_eq!(reparsed, payload);
    }

    #[test]
    fn test_write_to_dir() {
        let payload = serde_json::json!({"period": "Bulanan"});
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let file = ReportFile::from_payload(&payload, date).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = file.write_to(dir.path()).unwrap();

        assert!(path.ends_with("laporan-manajemen-2025-03-15.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, file.contents);
    }
}
