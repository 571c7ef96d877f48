// ==========================================
// UKM 智能经营分析仪表盘 - 图表配置模型
// ==========================================
// 职责: 定义图表库消费的配置值对象
// 约定: 数据点用 Option<f64>，None 表示该位置显式缺值
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 配色
// ==========================================

/// 图表配色（与既有界面风格一致）
pub mod palette {
    /// 主题蓝
    pub const PRIMARY: &str = "#0055a5";
    /// 主题蓝半透明填充
    pub const PRIMARY_FILL: &str = "rgba(0, 85, 165, 0.1)";
    /// 预测粉
    pub const FORECAST: &str = "#ff6384";
    /// 预测粉半透明填充
    pub const FORECAST_FILL: &str = "rgba(255, 99, 132, 0.1)";
    /// 绿
    pub const GREEN: &str = "#4caf50";
    /// 绿半透明填充
    pub const GREEN_FILL: &str = "rgba(76, 175, 80, 0.1)";
    /// 橙
    pub const ORANGE: &str = "#ff9800";
    /// 红
    pub const RED: &str = "#f44336";
    /// 红半透明填充
    pub const RED_FILL: &str = "rgba(244, 67, 54, 0.1)";
    /// 蓝
    pub const BLUE: &str = "#2196f3";
    /// 蓝半透明填充
    pub const BLUE_FILL: &str = "rgba(33, 150, 243, 0.1)";
}

// ==========================================
// 基础枚举
// ==========================================

/// 图表类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// 折线图
    Line,
    /// 柱状图
    Bar,
    /// 饼图
    Pie,
}

/// 轴数值显示格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// 印尼盾
    Currency,
    /// 百分比
    Percent,
    /// 原值
    Plain,
}

/// 数据集挂载的纵轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YAxisSide {
    /// 主轴（左）
    Primary,
    /// 副轴（右）
    Secondary,
}

// ==========================================
// 数据集
// ==========================================

/// 单个数据序列
///
/// points 与图表 labels 等长；None 表示该位置无值，
/// 渲染端应将其画成断点而不是零
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// 序列名称（图例文本）
    pub label: String,

    /// 数据点（与 labels 对齐）
    pub points: Vec<Option<f64>>,

    /// 覆盖图表类型（混合图表用，如柱状图上叠加折线）
    pub kind_override: Option<ChartKind>,

    /// 线条/边框颜色；饼图时为各扇区颜色列表的替代（见 slice_colors）
    pub color: String,

    /// 填充颜色（可选）
    pub background: Option<String>,

    /// 饼图各扇区颜色（仅饼图使用）
    pub slice_colors: Vec<String>,

    /// 是否填充到坐标轴
    pub fill: bool,

    /// 是否虚线
    pub dashed: bool,

    /// 线宽（可选）
    pub border_width: Option<u32>,

    /// 数据点半径（可选，用于高亮标记）
    pub point_radius: Option<u32>,

    /// 是否连线（false 时只画点）
    pub show_line: bool,

    /// 初始是否隐藏
    pub hidden: bool,

    /// 绘制次序（数值小者在上层）
    pub draw_order: Option<u32>,

    /// 挂载纵轴
    pub y_axis: YAxisSide,
}

impl Dataset {
    /// 创建数据集（默认: 实线、无填充、主轴、可见）
    pub fn new(label: impl Into<String>, points: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            points,
            kind_override: None,
            color: palette::PRIMARY.to_string(),
            background: None,
            slice_colors: Vec::new(),
            fill: false,
            dashed: false,
            border_width: None,
            point_radius: None,
            show_line: true,
            hidden: false,
            draw_order: None,
            y_axis: YAxisSide::Primary,
        }
    }

    /// 由全有值的序列创建数据集
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        Self::new(label, values.iter().copied().map(Some).collect())
    }

    /// 设置颜色
    pub fn color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// 设置填充颜色并开启填充
    pub fn filled(mut self, background: &str) -> Self {
        self.background = Some(background.to_string());
        self.fill = true;
        self
    }

    /// 虚线
    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    /// 设置线宽
    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    /// 设置数据点半径
    pub fn point_radius(mut self, radius: u32) -> Self {
        self.point_radius = Some(radius);
        self
    }

    /// 只画点不连线（高亮标记序列）
    pub fn points_only(mut self) -> Self {
        self.show_line = false;
        self
    }

    /// 初始隐藏
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// 设置绘制次序
    pub fn draw_order(mut self, order: u32) -> Self {
        self.draw_order = Some(order);
        self
    }

    /// 挂载到副轴
    pub fn secondary_axis(mut self) -> Self {
        self.y_axis = YAxisSide::Secondary;
        self
    }

    /// 覆盖为折线（混合图表）
    pub fn as_line(mut self) -> Self {
        self.kind_override = Some(ChartKind::Line);
        self
    }

    /// 设置饼图扇区颜色
    pub fn slice_colors(mut self, colors: &[&str]) -> Self {
        self.slice_colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    /// 非缺值点的数量
    pub fn present_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }
}

// ==========================================
// 坐标轴
// ==========================================

/// 坐标轴配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisSpec {
    /// 轴标题（可选）
    pub title: Option<String>,

    /// 数值显示格式
    pub format: ValueFormat,

    /// 是否从零开始
    pub begin_at_zero: bool,

    /// 上限（可选）
    pub max: Option<f64>,
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self {
            title: None,
            format: ValueFormat::Plain,
            begin_at_zero: true,
            max: None,
        }
    }
}

impl AxisSpec {
    /// 印尼盾格式轴
    pub fn currency() -> Self {
        Self {
            format: ValueFormat::Currency,
            ..Default::default()
        }
    }

    /// 百分比格式轴
    pub fn percent() -> Self {
        Self {
            format: ValueFormat::Percent,
            ..Default::default()
        }
    }

    /// 设置轴标题
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// 设置上限
    pub fn capped(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

// ==========================================
// 图表配置
// ==========================================

/// 一张图表的完整配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    /// 图表类型
    pub kind: ChartKind,

    /// 图表标题
    pub title: String,

    /// 横轴标签（所有数据集与其对齐）
    pub labels: Vec<String>,

    /// 数据集列表
    pub datasets: Vec<Dataset>,

    /// 横轴配置
    pub x_axis: AxisSpec,

    /// 主纵轴配置
    pub y_axis: AxisSpec,

    /// 副纵轴配置（可选）
    pub y2_axis: Option<AxisSpec>,

    /// 预生成的提示文本（按标签下标对齐；空表示使用默认提示）
    pub tooltip_lines: Vec<String>,
}

impl ChartSpec {
    /// 创建图表配置
    pub fn new(kind: ChartKind, title: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            labels,
            datasets: Vec::new(),
            x_axis: AxisSpec::default(),
            y_axis: AxisSpec::default(),
            y2_axis: None,
            tooltip_lines: Vec::new(),
        }
    }

    /// 追加数据集
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// 设置主纵轴
    pub fn y_axis(mut self, axis: AxisSpec) -> Self {
        self.y_axis = axis;
        self
    }

    /// 设置横轴
    pub fn x_axis(mut self, axis: AxisSpec) -> Self {
        self.x_axis = axis;
        self
    }

    /// 设置副纵轴
    pub fn y2_axis(mut self, axis: AxisSpec) -> Self {
        self.y2_axis = Some(axis);
        self
    }

    /// 设置提示文本
    pub fn tooltips(mut self, lines: Vec<String>) -> Self {
        self.tooltip_lines = lines;
        self
    }

    /// 校验所有数据集与标签等长
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|d| d.points.len() == self.labels.len())
    }
}
