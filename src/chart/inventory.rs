// ==========================================
// UKM 智能经营分析仪表盘 - 库存图表构建
// ==========================================
// 职责: ABC 分类分布饼图与库存周转柱状图
// ==========================================

use crate::domain::{AbcClass, InventoryAnalysis};
use crate::i18n::{t, t_with_args};

use super::spec::{palette, AxisSpec, ChartKind, ChartSpec, Dataset};

/// 构建 ABC 分类分布饼图
///
/// 对分类标签数组按 A/B/C 三个固定分类各做一趟过滤得到计数；
/// 提示文本为 "Kelas X: N produk (P%)"，P 为占比四舍五入到整数
pub fn abc_distribution_chart(analysis: &InventoryAnalysis) -> ChartSpec {
    let counts: Vec<usize> = AbcClass::ALL
        .iter()
        .map(|class| analysis.count_class(*class))
        .collect();
    let total: usize = counts.iter().sum();

    let labels: Vec<String> = AbcClass::ALL
        .iter()
        .map(|class| t_with_args("chart.abc.class_label", &[("class", class.label())]))
        .collect();

    let tooltips: Vec<String> = AbcClass::ALL
        .iter()
        .zip(counts.iter())
        .map(|(class, count)| {
            let pct = if total == 0 {
                0
            } else {
                (*count as f64 / total as f64 * 100.0).round() as i64
            };
            t_with_args(
                "chart.abc.tooltip",
                &[
                    ("class", class.label()),
                    ("count", &count.to_string()),
                    ("pct", &pct.to_string()),
                ],
            )
        })
        .collect();

    let points: Vec<f64> = counts.iter().map(|c| *c as f64).collect();

    ChartSpec::new(ChartKind::Pie, t("chart.abc.title"), labels)
        .dataset(
            Dataset::from_values("", &points).slice_colors(&[
                palette::GREEN,
                palette::ORANGE,
                palette::RED,
            ]),
        )
        .tooltips(tooltips)
}

/// 构建库存周转柱状图
///
/// 每个商品一根柱，周转率按后端原值展示
pub fn turnover_chart(analysis: &InventoryAnalysis) -> ChartSpec {
    ChartSpec::new(
        ChartKind::Bar,
        t("chart.turnover.title"),
        analysis.products.clone(),
    )
    .dataset(
        Dataset::from_values(t("chart.turnover.series"), &analysis.turnover)
            .color(palette::PRIMARY),
    )
    .y_axis(AxisSpec::default().titled(t("chart.turnover.y_axis")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_of(classes: &[&str]) -> InventoryAnalysis {
        InventoryAnalysis {
            products: classes.iter().enumerate().map(|(i, _)| format!("P{}", i)).collect(),
            turnover: vec![1.0; classes.len()],
            value: vec![10.0; classes.len()],
            abc_class: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_abc_counts_and_percentages() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        // 2 个 A，1 个 B，3 个 C
        let analysis = analysis_of(&["A", "A", "B", "C", "C", "C"]);
        let spec = abc_distribution_chart(&analysis);

        assert_eq!(spec.kind, ChartKind::Pie);
        assert_eq!(
            spec.datasets[0].points,
            vec![Some(2.0), Some(1.0), Some(3.0)]
        );

        // 占比四舍五入到整数: 33% / 17% / 50%
        assert_eq!(spec.tooltip_lines[0], "Kelas A: 2 produk (33%)");
        assert_eq!(spec.tooltip_lines[1], "Kelas B: 1 produk (17%)");
        assert_eq!(spec.tooltip_lines[2], "Kelas C: 3 produk (50%)");
    }

    #[test]
    fn test_abc_empty_analysis() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let analysis = analysis_of(&[]);
        let spec = abc_distribution_chart(&analysis);

        // 空分析: 三个扇区计数为零，占比为 0%
        assert_eq!(
            spec.datasets[0].points,
            vec![Some(0.0), Some(0.0), Some(0.0)]
        );
        assert_eq!(spec.tooltip_lines[0], "Kelas A: 0 produk (0%)");
    }

    #[test]
    fn test_turnover_chart_entries() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let analysis = InventoryAnalysis {
            products: vec!["Indomie Goreng".into(), "Aqua 600ml".into()],
            turnover: vec![3.2, 1.8],
            value: vec![100.0, 50.0],
            abc_class: vec!["A".into(), "B".into()],
        };

        let spec = turnover_chart(&analysis);
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels, vec!["Indomie Goreng", "Aqua 600ml"]);
        assert_eq!(spec.datasets[0].points, vec![Some(3.2), Some(1.8)]);
    }
}
