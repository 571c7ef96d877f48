// ==========================================
// UKM 智能经营分析仪表盘 - 渲染接口
// ==========================================
// 职责: 定义加载器/操作层写入界面的唯一通道
// 约定: 每个图表/表格独占一个渲染目标，互不覆盖
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::ChartSpec;
use crate::domain::ReportFile;

// ==========================================
// 渲染错误
// ==========================================

/// 渲染层错误类型
#[derive(Error, Debug)]
pub enum RenderError {
    /// 渲染目标不存在
    #[error("渲染目标不存在: {0}")]
    MissingTarget(String),
}

// ==========================================
// 通知
// ==========================================

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    /// 提示
    Info,
    /// 成功
    Success,
    /// 错误
    Error,
}

/// 结构化通知
///
/// 操作处理器只产出通知值，展示方式（模态/toast/内联）由界面壳决定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// 级别
    pub level: NotificationLevel,

    /// 通知正文（可多行，已本地化）
    pub message: String,

    /// 是否要求阻断式展示（对应模态弹窗）
    pub blocking: bool,
}

impl Notification {
    /// 阻断式结果通知（多行计算结果）
    pub fn result(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            blocking: true,
        }
    }

    /// 成功通知
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            blocking: true,
        }
    }

    /// 错误通知
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            blocking: true,
        }
    }
}

// ==========================================
// 表格模型
// ==========================================

/// 表格内容（整表替换，不做增量更新）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableModel {
    /// 数据行（每行一个单元格文本列表）
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// 创建表格模型
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// 渲染接口
// ==========================================

/// 界面渲染接口
///
/// 实现方负责把值对象落到具体界面；
/// 本层的调用全部以元素标识寻址（见 elements 模块）
pub trait UiSink: Send + Sync {
    /// 写入 KPI 文本
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), RenderError>;

    /// 渲染图表
    fn render_chart(&self, element_id: &str, spec: ChartSpec) -> Result<(), RenderError>;

    /// 整表替换表格内容
    fn replace_table(&self, element_id: &str, table: TableModel) -> Result<(), RenderError>;

    /// 展示通知（不可失败，best-effort）
    fn notify(&self, notification: Notification);

    /// 提供文件下载
    fn offer_download(&self, file: ReportFile) -> Result<(), RenderError>;
}
