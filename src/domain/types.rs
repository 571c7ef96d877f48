// ==========================================
// UKM 智能经营分析仪表盘 - 基础类型
// ==========================================
// 职责: 页签标识与 ABC 分类等跨模块枚举
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 页签标识
// ==========================================

/// 页签标识
///
/// 每个页签对应一个面板标识（HTML data 属性携带的值）
/// 和一个数据加载器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabId {
    /// 总览页（初始激活，数据仅在启动时加载一次）
    Dashboard,

    /// 管理页（月度绩效/盈利分析）
    Manajemen,

    /// PPIC 页（EOQ/需求模式/订货建议）
    Ppic,

    /// 库存页（功能占位）
    Inventory,
}

impl TabId {
    /// 全部页签（用于遍历/索引）
    pub const ALL: [TabId; 4] = [
        TabId::Dashboard,
        TabId::Manajemen,
        TabId::Ppic,
        TabId::Inventory,
    ];

    /// 从面板标识解析页签
    ///
    /// 未识别的标识返回 None（导航层对其不做任何处理）
    pub fn from_panel_id(panel_id: &str) -> Option<TabId> {
        match panel_id {
            "dashboard" => Some(TabId::Dashboard),
            "manajemen" => Some(TabId::Manajemen),
            "ppic" => Some(TabId::Ppic),
            "inventory" => Some(TabId::Inventory),
            _ => None,
        }
    }

    /// 页签对应的面板标识
    pub fn panel_id(&self) -> &'static str {
        match self {
            TabId::Dashboard => "dashboard",
            TabId::Manajemen => "manajemen",
            TabId::Ppic => "ppic",
            TabId::Inventory => "inventory",
        }
    }

    /// 页签在 ALL 中的下标（用于纪元计数器数组）
    pub fn index(&self) -> usize {
        match self {
            TabId::Dashboard => 0,
            TabId::Manajemen => 1,
            TabId::Ppic => 2,
            TabId::Inventory => 3,
        }
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.panel_id())
    }
}

// ==========================================
// ABC 分类
// ==========================================

/// ABC 库存分类（三个固定等级）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    /// 固定的分类顺序（饼图扇区顺序依赖于此）
    pub const ALL: [AbcClass; 3] = [AbcClass::A, AbcClass::B, AbcClass::C];

    /// 分类字母标签
    pub fn label(&self) -> &'static str {
        match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        }
    }
}
