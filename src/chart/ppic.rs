// ==========================================
// UKM 智能经营分析仪表盘 - PPIC 图表构建
// ==========================================
// 职责: EOQ 成本曲线图与需求模式图
// ==========================================

use crate::domain::{DemandPoint, EoqPoint};
use crate::i18n::{t, t_with_args};

use super::spec::{palette, AxisSpec, ChartKind, ChartSpec, Dataset};

/// 定位 EOQ 采样点下标
///
/// 对总成本序列做整趟线性扫描取最小值；
/// 并列时取首个（下标/订货量最小者）。空曲线返回 None
pub fn locate_eoq_index(points: &[EoqPoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, point) in points.iter().enumerate() {
        match best {
            Some((_, cost)) if point.total_cost >= cost => {}
            _ => best = Some((i, point.total_cost)),
        }
    }
    best.map(|(i, _)| i)
}

/// 构建 EOQ 成本曲线图
///
/// 订货/持有/总成本三条曲线，外加仅在最优点有值的高亮标记序列；
/// 标题中嵌入定位到的经济订货量。空曲线返回 None
pub fn eoq_chart(points: &[EoqPoint]) -> Option<ChartSpec> {
    let eoq_index = locate_eoq_index(points)?;
    let eoq_quantity = points[eoq_index].quantity;
    let min_total_cost = points[eoq_index].total_cost;

    let labels: Vec<String> = points.iter().map(|p| p.quantity.to_string()).collect();
    let ordering: Vec<f64> = points.iter().map(|p| p.ordering_cost).collect();
    let holding: Vec<f64> = points.iter().map(|p| p.holding_cost).collect();
    let total: Vec<f64> = points.iter().map(|p| p.total_cost).collect();

    // 标记序列: 仅最优下标有值，其余位置显式缺值
    let marker: Vec<Option<f64>> = (0..points.len())
        .map(|i| if i == eoq_index { Some(min_total_cost) } else { None })
        .collect();

    let title = t_with_args("chart.eoq.title", &[("eoq", &eoq_quantity.to_string())]);

    Some(
        ChartSpec::new(ChartKind::Line, title, labels)
            .dataset(
                Dataset::from_values(t("chart.eoq.ordering"), &ordering)
                    .color(palette::RED)
                    .filled(palette::RED_FILL),
            )
            .dataset(
                Dataset::from_values(t("chart.eoq.holding"), &holding)
                    .color(palette::BLUE)
                    .filled(palette::BLUE_FILL),
            )
            .dataset(
                Dataset::from_values(t("chart.eoq.total"), &total)
                    .color(palette::GREEN)
                    .filled(palette::GREEN_FILL)
                    .border_width(3),
            )
            .dataset(
                Dataset::new(t("chart.eoq.marker"), marker)
                    .color(palette::ORANGE)
                    .point_radius(6)
                    .points_only(),
            )
            .x_axis(AxisSpec::default().titled(t("chart.eoq.x_axis")))
            .y_axis(AxisSpec::currency().titled(t("chart.eoq.y_axis"))),
    )
}

/// 构建需求模式图
///
/// 实际需求/预测需求两条曲线，误差序列初始隐藏
pub fn demand_pattern_chart(points: &[DemandPoint]) -> ChartSpec {
    let periods: Vec<String> = points.iter().map(|p| p.period.clone()).collect();
    let demand: Vec<f64> = points.iter().map(|p| p.demand).collect();
    let forecast: Vec<f64> = points.iter().map(|p| p.forecast).collect();
    let error: Vec<f64> = points.iter().map(|p| p.error).collect();

    ChartSpec::new(ChartKind::Line, t("chart.demand.title"), periods)
        .dataset(
            Dataset::from_values(t("chart.demand.actual"), &demand)
                .color(palette::BLUE)
                .filled(palette::BLUE_FILL),
        )
        .dataset(
            Dataset::from_values(t("chart.demand.series"), &forecast)
                .color(palette::GREEN)
                .filled(palette::GREEN_FILL)
                .dashed(),
        )
        .dataset(
            Dataset::from_values(t("chart.demand.error"), &error)
                .color(palette::RED)
                .filled(palette::RED_FILL)
                .hidden(),
        )
        .y_axis(AxisSpec::default().titled(t("chart.demand.y_axis")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(costs: &[f64]) -> Vec<EoqPoint> {
        costs
            .iter()
            .enumerate()
            .map(|(i, c)| EoqPoint {
                quantity: ((i + 1) * 50) as f64,
                ordering_cost: *c / 2.0,
                holding_cost: *c / 2.0,
                total_cost: *c,
            })
            .collect()
    }

    #[test]
    fn test_locate_eoq_minimum() {
        let points = curve(&[500.0, 300.0, 400.0]);
        assert_eq!(locate_eoq_index(&points), Some(1));
    }

    #[test]
    fn test_locate_eoq_tie_takes_first() {
        // 并列最小值取首个（订货量最小者）
        let points = curve(&[400.0, 300.0, 300.0]);
        assert_eq!(locate_eoq_index(&points), Some(1));
    }

    #[test]
    fn test_locate_eoq_empty() {
        assert_eq!(locate_eoq_index(&[]), None);
    }

    #[test]
    fn test_eoq_chart_marker_and_title() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let points = curve(&[500.0, 300.0, 400.0]);
        let spec = eoq_chart(&points).unwrap();

        // 标题嵌入最优订货量（第 2 个采样点 = 100）
        assert_eq!(spec.title, "Analisis EOQ (Economic Order Quantity = 100)");

        // 标记序列仅最优下标有值
        let marker = &spec.datasets[3];
        assert_eq!(marker.points, vec![None, Some(300.0), None]);
        assert!(!marker.show_line);
        assert_eq!(marker.point_radius, Some(6));
    }

    #[test]
    fn test_demand_chart_error_hidden() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let points = vec![DemandPoint {
            period: "Bulan 1".into(),
            demand: 1150.0,
            forecast: 1100.0,
            error: 50.0,
        }];

        let spec = demand_pattern_chart(&points);
        assert_eq!(spec.datasets.len(), 3);
        assert!(spec.datasets[2].hidden);
        assert!(spec.datasets[1].dashed);
    }
}
