// ==========================================
// UKM 智能经营分析仪表盘 - 视图层
// ==========================================
// 职责: 渲染目标抽象（具体界面壳由外部实现）
// 说明: 所有渲染目标通过稳定的元素标识寻址
// ==========================================

pub mod elements;
pub mod memory;
pub mod sink;

pub use memory::MemorySink;
pub use sink::{Notification, NotificationLevel, RenderError, TableModel, UiSink};
