// ==========================================
// UKM 智能经营分析仪表盘 - 管理页图表构建
// ==========================================
// 职责: 月度绩效图与商品盈利分析图
// ==========================================

use crate::domain::{PerformanceRecord, ProfitabilityRecord};
use crate::i18n::t;

use super::spec::{palette, AxisSpec, ChartKind, ChartSpec, Dataset};

/// 构建月度绩效图
///
/// 销售额/成本为柱，利润为叠加折线；纵轴按印尼盾格式显示
pub fn performance_chart(records: &[PerformanceRecord]) -> ChartSpec {
    let months: Vec<String> = records.iter().map(|r| r.month.clone()).collect();
    let sales: Vec<f64> = records.iter().map(|r| r.sales).collect();
    let costs: Vec<f64> = records.iter().map(|r| r.costs).collect();
    let profit: Vec<f64> = records.iter().map(|r| r.profit).collect();

    ChartSpec::new(ChartKind::Bar, t("chart.performance.title"), months)
        .dataset(
            Dataset::from_values(t("chart.performance.sales"), &sales)
                .color(palette::GREEN)
                .draw_order(3),
        )
        .dataset(
            Dataset::from_values(t("chart.performance.costs"), &costs)
                .color(palette::RED)
                .draw_order(2),
        )
        .dataset(
            Dataset::from_values(t("chart.performance.profit"), &profit)
                .as_line()
                .color(palette::BLUE)
                .border_width(2)
                .draw_order(1),
        )
        .y_axis(AxisSpec::currency())
}

/// 构建商品盈利分析图
///
/// 收入/成本/利润为柱，利润率为挂在副轴（百分比，上限 100）的折线
pub fn profitability_chart(records: &[ProfitabilityRecord]) -> ChartSpec {
    let products: Vec<String> = records.iter().map(|r| r.product.clone()).collect();
    let revenue: Vec<f64> = records.iter().map(|r| r.revenue).collect();
    let cost: Vec<f64> = records.iter().map(|r| r.cost).collect();
    let profit: Vec<f64> = records.iter().map(|r| r.profit).collect();
    let margin: Vec<f64> = records.iter().map(|r| r.margin).collect();

    ChartSpec::new(ChartKind::Bar, t("chart.profitability.title"), products)
        .dataset(
            Dataset::from_values(t("chart.profitability.revenue"), &revenue)
                .color(palette::GREEN)
                .draw_order(3),
        )
        .dataset(
            Dataset::from_values(t("chart.profitability.cost"), &cost)
                .color(palette::RED)
                .draw_order(2),
        )
        .dataset(
            Dataset::from_values(t("chart.profitability.profit"), &profit)
                .color(palette::BLUE)
                .draw_order(1),
        )
        .dataset(
            Dataset::from_values(t("chart.profitability.margin"), &margin)
                .as_line()
                .color(palette::ORANGE)
                .border_width(2)
                .draw_order(0)
                .secondary_axis(),
        )
        .y_axis(AxisSpec::currency())
        .y2_axis(AxisSpec::percent().capped(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PerformanceRecord> {
        vec![
            PerformanceRecord {
                month: "Jan".into(),
                sales: 120_000_000.0,
                costs: 80_000_000.0,
                profit: 40_000_000.0,
            },
            PerformanceRecord {
                month: "Feb".into(),
                sales: 130_000_000.0,
                costs: 85_000_000.0,
                profit: 45_000_000.0,
            },
        ]
    }

    #[test]
    fn test_performance_chart_mixed_series() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let spec = performance_chart(&records());

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels, vec!["Jan", "Feb"]);
        assert_eq!(spec.datasets.len(), 3);

        // 利润序列叠加为折线
        let profit = &spec.datasets[2];
        assert_eq!(profit.kind_override, Some(ChartKind::Line));
        assert_eq!(profit.draw_order, Some(1));
    }

    #[test]
    fn test_profitability_chart_secondary_axis() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let spec = profitability_chart(&[ProfitabilityRecord {
            product: "Teh Botol".into(),
            revenue: 18_000_000.0,
            cost: 10_800_000.0,
            profit: 7_200_000.0,
            margin: 40.0,
        }]);

        assert_eq!(spec.datasets.len(), 4);

        // 利润率折线挂在副轴，上限 100
        let margin = &spec.datasets[3];
        assert_eq!(margin.y_axis, crate::chart::YAxisSide::Secondary);
        let y2 = spec.y2_axis.as_ref().unwrap();
        assert_eq!(y2.max, Some(100.0));
    }
}
