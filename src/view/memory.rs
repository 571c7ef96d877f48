// ==========================================
// UKM 智能经营分析仪表盘 - 内存渲染器
// ==========================================
// 职责: 把渲染结果记录在内存中
// 用途: 无头运行模式与测试断言
// ==========================================

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::chart::ChartSpec;
use crate::domain::ReportFile;

use super::elements;
use super::sink::{Notification, RenderError, TableModel, UiSink};

/// 单个渲染目标的当前内容
#[derive(Debug, Clone)]
pub enum RenderedContent {
    /// KPI 文本
    Text(String),
    /// 图表配置
    Chart(ChartSpec),
    /// 表格内容
    Table(TableModel),
}

/// 内存渲染器
///
/// 只接受 elements::render_targets() 中声明的目标；
/// 未知目标返回 RenderError::MissingTarget
pub struct MemorySink {
    /// 合法的渲染目标集合
    targets: HashSet<&'static str>,

    /// 各目标当前内容（整项替换）
    rendered: Mutex<HashMap<String, RenderedContent>>,

    /// 已产生的通知（按顺序）
    notifications: Mutex<Vec<Notification>>,

    /// 已提供的下载文件（按顺序）
    downloads: Mutex<Vec<ReportFile>>,
}

impl MemorySink {
    /// 创建内存渲染器
    pub fn new() -> Self {
        Self {
            targets: elements::render_targets().iter().copied().collect(),
            rendered: Mutex::new(HashMap::new()),
            notifications: Mutex::new(Vec::new()),
            downloads: Mutex::new(Vec::new()),
        }
    }

    /// 校验目标标识
    fn check_target(&self, element_id: &str) -> Result<(), RenderError> {
        if self.targets.contains(element_id) {
            Ok(())
        } else {
            Err(RenderError::MissingTarget(element_id.to_string()))
        }
    }

    /// 目标是否已渲染
    pub fn is_rendered(&self, element_id: &str) -> bool {
        self.rendered.lock().unwrap().contains_key(element_id)
    }

    /// 读取 KPI 文本
    pub fn text_of(&self, element_id: &str) -> Option<String> {
        match self.rendered.lock().unwrap().get(element_id) {
            Some(RenderedContent::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    /// 读取图表配置
    pub fn chart_of(&self, element_id: &str) -> Option<ChartSpec> {
        match self.rendered.lock().unwrap().get(element_id) {
            Some(RenderedContent::Chart(spec)) => Some(spec.clone()),
            _ => None,
        }
    }

    /// 读取表格内容
    pub fn table_of(&self, element_id: &str) -> Option<TableModel> {
        match self.rendered.lock().unwrap().get(element_id) {
            Some(RenderedContent::Table(table)) => Some(table.clone()),
            _ => None,
        }
    }

    /// 全部通知
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// 全部下载文件
    pub fn downloads(&self) -> Vec<ReportFile> {
        self.downloads.lock().unwrap().clone()
    }

    /// 已渲染目标数量
    pub fn rendered_count(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSink for MemorySink {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), RenderError> {
        self.check_target(element_id)?;
        self.rendered
            .lock()
            .unwrap()
            .insert(element_id.to_string(), RenderedContent::Text(text.to_string()));
        Ok(())
    }

    fn render_chart(&self, element_id: &str, spec: ChartSpec) -> Result<(), RenderError> {
        self.check_target(element_id)?;
        self.rendered
            .lock()
            .unwrap()
            .insert(element_id.to_string(), RenderedContent::Chart(spec));
        Ok(())
    }

    fn replace_table(&self, element_id: &str, table: TableModel) -> Result<(), RenderError> {
        self.check_target(element_id)?;
        self.rendered
            .lock()
            .unwrap()
            .insert(element_id.to_string(), RenderedContent::Table(table));
        Ok(())
    }

    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }

    fn offer_download(&self, file: ReportFile) -> Result<(), RenderError> {
        self.downloads.lock().unwrap().push(file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_and_read_back() {
        let sink = MemorySink::new();
        sink.set_text(elements::TOTAL_SALES, "Rp 1.000,00").unwrap();

        assert!(sink.is_rendered(elements::TOTAL_SALES));
        assert_eq!(sink.text_of(elements::TOTAL_SALES).unwrap(), "Rp 1.000,00");
    }

    #[test]
    fn test_unknown_target_rejected() {
        let sink = MemorySink::new();
        let result = sink.set_text("tidak-ada", "x");
        assert!(matches!(result, Err(RenderError::MissingTarget(_))));
        assert_eq!(sink.rendered_count(), 0);
    }

    #[test]
    fn test_table_replacement_not_incremental() {
        let sink = MemorySink::new();

        let first = TableModel::new(vec![vec!["Jan".into()], vec!["Feb".into()]]);
        sink.replace_table(elements::PERFORMANCE_TABLE, first).unwrap();

        // 重新加载时整表替换，不做增量合并
        let second = TableModel::new(vec![vec!["Mar".into()]]);
        sink.replace_table(elements::PERFORMANCE_TABLE, second).unwrap();

        let table = sink.table_of(elements::PERFORMANCE_TABLE).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0][0], "Mar");
    }
}
