// ==========================================
// UKM 智能经营分析仪表盘 - 销售图表构建
// ==========================================
// 职责: 销售趋势图与销售预测图
// ==========================================

use crate::domain::{ForecastResult, TimeSeriesPoint};
use crate::i18n::t;

use super::spec::{palette, AxisSpec, ChartKind, ChartSpec, Dataset};

/// 构建日销售趋势图
///
/// 折线图，横轴为日期，纵轴按印尼盾格式显示
pub fn sales_trend_chart(sales_data: &[TimeSeriesPoint]) -> ChartSpec {
    let labels: Vec<String> = sales_data.iter().map(|p| p.date.clone()).collect();
    let values: Vec<f64> = sales_data.iter().map(|p| p.sales).collect();

    ChartSpec::new(ChartKind::Line, t("chart.sales_trend.title"), labels)
        .dataset(
            Dataset::from_values(t("chart.sales_trend.series"), &values)
                .color(palette::PRIMARY)
                .filled(palette::PRIMARY_FILL),
        )
        .y_axis(AxisSpec::currency())
}

/// 构建销售预测图
///
/// 横轴为历史日期与预测日期拼接成的单条连续时间轴。
/// 历史序列在预测区间为显式缺值，预测序列在历史区间为显式缺值，
/// 两段在同一时间轴上连续且不重叠。
///
/// 调用方需先校验 forecast.is_aligned()
pub fn sales_forecast_chart(
    sales_data: &[TimeSeriesPoint],
    forecast: &ForecastResult,
) -> ChartSpec {
    let hist_len = sales_data.len();
    let forecast_len = forecast.len();

    // 拼接横轴: 历史日期 ++ 预测日期
    let mut labels: Vec<String> = sales_data.iter().map(|p| p.date.clone()).collect();
    labels.extend(forecast.dates.iter().cloned());

    // 历史序列: 前 H 个有值，后 F 个缺值
    let mut historical: Vec<Option<f64>> = sales_data.iter().map(|p| Some(p.sales)).collect();
    historical.extend(std::iter::repeat(None).take(forecast_len));

    // 预测序列: 前 H 个缺值，后 F 个有值
    let mut predicted: Vec<Option<f64>> = std::iter::repeat(None).take(hist_len).collect();
    predicted.extend(forecast.values.iter().copied().map(Some));

    ChartSpec::new(ChartKind::Line, t("chart.forecast.title"), labels)
        .dataset(
            Dataset::new(t("chart.forecast.historical"), historical)
                .color(palette::PRIMARY)
                .filled(palette::PRIMARY_FILL),
        )
        .dataset(
            Dataset::new(t("chart.forecast.series"), predicted)
                .color(palette::FORECAST)
                .filled(palette::FORECAST_FILL)
                .dashed(),
        )
        .y_axis(AxisSpec::currency())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(n: usize) -> Vec<TimeSeriesPoint> {
        (0..n)
            .map(|i| TimeSeriesPoint {
                date: format!("2025-01-{:02}", i + 1),
                sales: 1000.0 + i as f64,
            })
            .collect()
    }

    #[test]
    fn test_trend_chart_one_entry_per_point() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let spec = sales_trend_chart(&hist(5));
        assert_eq!(spec.labels.len(), 5);
        assert_eq!(spec.datasets.len(), 1);
        assert_eq!(spec.datasets[0].points.len(), 5);
        assert!(spec.is_aligned());
        assert_eq!(spec.title, "Tren Penjualan Harian");
    }

    #[test]
    fn test_forecast_axis_concatenation() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let sales = hist(3);
        let forecast = ForecastResult {
            dates: vec!["2025-02-01".into(), "2025-02-02".into()],
            values: vec![2000.0, 2100.0],
        };

        let spec = sales_forecast_chart(&sales, &forecast);

        // 轴长 = H + F
        assert_eq!(spec.labels.len(), 5);
        assert!(spec.is_aligned());

        // 历史序列: 前 H 有值，后 F 缺值
        let historical = &spec.datasets[0];
        assert_eq!(historical.points[..3].iter().filter(|p| p.is_some()).count(), 3);
        assert!(historical.points[3..].iter().all(|p| p.is_none()));

        // 预测序列: 前 H 缺值，后 F 有值
        let predicted = &spec.datasets[1];
        assert!(predicted.points[..3].iter().all(|p| p.is_none()));
        assert_eq!(predicted.points[3..].iter().filter(|p| p.is_some()).count(), 2);
        assert!(predicted.dashed);
    }
}
