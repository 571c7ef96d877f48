// ==========================================
// 集成测试辅助: 模拟后端与状态装配
// ==========================================

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ukm_dashboard::app::AppState;
use ukm_dashboard::config::AppConfig;
use ukm_dashboard::view::MemorySink;
use ukm_dashboard::{i18n, logging};

/// 测试初始化: 日志 + 印尼语界面
pub fn init() {
    logging::init_test();
    i18n::set_locale("id");
}

/// 指向模拟后端的应用状态与内存渲染器
pub fn state_against(server: &MockServer) -> (AppState, Arc<MemorySink>) {
    let view = Arc::new(MemorySink::new());
    let config = AppConfig {
        base_url: server.uri(),
        ..AppConfig::default()
    };
    let state = AppState::new(config, view.clone()).expect("装配 AppState 失败");
    (state, view)
}

// ==========================================
// 样例载荷（与后端响应形状一致）
// ==========================================

pub fn dashboard_payload() -> serde_json::Value {
    json!({
        "total_sales": 800000000.0,
        "inventory_value": 120000000.0,
        "growth_rate": 12.5,
        "top_product": "Indomie Goreng",
        "sales_data": [
            {"date": "2025-01-01", "sales": 1500000.0},
            {"date": "2025-01-02", "sales": 1750000.0},
            {"date": "2025-01-03", "sales": 1600000.0}
        ],
        "inventory_data": [
            {"product": "Indomie Goreng", "stock": 500.0, "price": 3500.0, "sales": 450.0},
            {"product": "Aqua 600ml", "stock": 400.0, "price": 3000.0, "sales": 380.0},
            {"product": "Rokok Surya", "stock": 200.0, "price": 25000.0, "sales": 150.0},
            {"product": "Pocari Sweat", "stock": 150.0, "price": 7000.0, "sales": 90.0},
            {"product": "Teh Botol", "stock": 300.0, "price": 4000.0, "sales": 210.0},
            {"product": "Sabun Mandi", "stock": 100.0, "price": 5000.0, "sales": 40.0}
        ]
    })
}

pub fn forecast_payload() -> serde_json::Value {
    json!({
        "dates": ["2025-02-02", "2025-03-04"],
        "values": [1800000.0, 1900000.0]
    })
}

/// ABC 分类场景: 2 个 A，1 个 B，3 个 C
pub fn inventory_analysis_payload() -> serde_json::Value {
    json!({
        "products": ["Indomie Goreng", "Aqua 600ml", "Rokok Surya",
                     "Pocari Sweat", "Teh Botol", "Sabun Mandi"],
        "turnover": [0.9, 0.95, 0.75, 0.6, 0.7, 0.4],
        "value": [1750000.0, 1200000.0, 5000000.0, 1050000.0, 1200000.0, 500000.0],
        "abc_class": ["A", "A", "B", "C", "C", "C"]
    })
}

pub fn management_payload() -> serde_json::Value {
    json!({
        "performance_data": [
            {"month": "Jan", "sales": 120000000.0, "costs": 80000000.0, "profit": 40000000.0},
            {"month": "Feb", "sales": 130000000.0, "costs": 85000000.0, "profit": 45000000.0}
        ],
        "profitability_data": [
            {"product": "Indomie Goreng", "revenue": 30000000.0, "cost": 18000000.0,
             "profit": 12000000.0, "margin": 40.0},
            {"product": "Aqua 600ml", "revenue": 25000000.0, "cost": 15000000.0,
             "profit": 10000000.0, "margin": 40.0}
        ]
    })
}

/// EOQ 曲线: 最小总成本在第 2 个采样点（quantity=100）
pub fn ppic_payload() -> serde_json::Value {
    json!({
        "eoq_data": [
            {"quantity": 50.0, "ordering_cost": 6000000.0, "holding_cost": 125000.0,
             "total_cost": 6125000.0},
            {"quantity": 100.0, "ordering_cost": 3000000.0, "holding_cost": 250000.0,
             "total_cost": 3250000.0},
            {"quantity": 150.0, "ordering_cost": 2000000.0, "holding_cost": 375000.0,
             "total_cost": 3375000.0}
        ],
        "demand_data": [
            {"period": "Bulan 1", "demand": 1150.0, "forecast": 1100.0, "error": 50.0},
            {"period": "Bulan 2", "demand": 1220.0, "forecast": 1200.0, "error": 20.0}
        ],
        "ordering_recommendations": [
            {"product": "Indomie Goreng", "eoq": 346.0, "rop": 120.0,
             "safety_stock": 40.0, "frequency": 10.0},
            {"product": "Aqua 600ml", "eoq": 316.0, "rop": 150.0,
             "safety_stock": 50.0, "frequency": 8.0}
        ]
    })
}

pub fn performance_analysis_payload() -> serde_json::Value {
    json!({
        "avg_sales": 133333333.0,
        "avg_profit": 46666667.0,
        "avg_margin": 35.0,
        "monthly_growth": 8.3,
        "top_product": "Rokok Surya",
        "top_category": "Makanan & Minuman"
    })
}

pub fn report_payload() -> serde_json::Value {
    json!({
        "report_id": "RPT-20250630-120000",
        "generated_at": "2025-06-30T12:00:00",
        "period": "Bulanan",
        "summary": {
            "total_sales": 800000000.0,
            "total_costs": 520000000.0,
            "total_profit": 280000000.0,
            "avg_margin": 35.0,
            "growth_rate": 12.5
        },
        "details": "Laporan detail kinerja manajemen..."
    })
}

pub fn eoq_calculation_payload() -> serde_json::Value {
    json!({
        "eoq": 10954.0,
        "total_cost": 54772000.0,
        "ordering_cost": 27386000.0,
        "holding_cost": 27386000.0,
        "optimal_orders": 1095.4
    })
}

pub fn rop_calculation_payload() -> serde_json::Value {
    json!({
        "rop": 133650.0,
        "safety_stock": 14289.0,
        "lead_time_demand": 120000.0,
        "service_level": 95.0
    })
}

pub fn optimization_payload() -> serde_json::Value {
    json!({
        "savings": 12500000.0,
        "stock_out_reduction": 35.0,
        "turnover_improvement": 22.0,
        "recommendation": "Tingkatkan frekuensi pemesanan untuk produk kelas A, kurangi stock produk kelas C"
    })
}

// ==========================================
// 接口挂载
// ==========================================

/// 挂载单个 GET 接口
pub async fn mount_get(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// 挂载单个 POST 接口
pub async fn mount_post(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// 挂载失败接口（统一 500）
pub async fn mount_failure(server: &MockServer, endpoint: &str) {
    Mock::given(path(endpoint))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

/// 挂载总览页全部接口
pub async fn mount_dashboard_endpoints(server: &MockServer) {
    mount_get(server, "/api/dashboard-data", dashboard_payload()).await;
    mount_post(server, "/api/forecast", forecast_payload()).await;
    mount_post(server, "/api/inventory-analysis", inventory_analysis_payload()).await;
}

/// 统计指定路径收到的请求数
pub async fn request_count(server: &MockServer, endpoint: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == endpoint)
        .count()
}
