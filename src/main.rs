// ==========================================
// UKM 智能经营分析仪表盘 - 主入口
// ==========================================
// 技术栈: Rust + tokio + reqwest
// 系统定位: 仪表盘前端应用层（无头运行模式）
// ==========================================

use std::sync::Arc;

use ukm_dashboard::app::{handlers, AppState};
use ukm_dashboard::config::AppConfig;
use ukm_dashboard::view::{elements, MemorySink};
use ukm_dashboard::{i18n, logging};

#[tokio::main]
async fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", ukm_dashboard::APP_NAME);
    tracing::info!("系统版本: {}", ukm_dashboard::VERSION);
    tracing::info!("==================================================");

    // 读取配置并设置界面语言
    let config = AppConfig::from_env();
    i18n::set_locale(&config.locale);
    tracing::info!("后端地址: {}", config.base_url);
    tracing::info!("界面语言: {}", config.locale);

    // 无头模式: 渲染结果记录在内存渲染器中
    let view = Arc::new(MemorySink::new());

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let state = AppState::new(config, view.clone()).expect("无法初始化AppState");

    // 启动初始化: 枚举绑定 → 激活默认页签 → 加载初始数据
    handlers::initialize(&state).await;

    // 输出渲染摘要
    tracing::info!("初始加载完成，已渲染目标 {} 个:", view.rendered_count());
    for element_id in elements::render_targets() {
        if view.is_rendered(element_id) {
            match view.text_of(element_id) {
                Some(text) => tracing::info!("  {} = {}", element_id, text),
                None => tracing::info!("  {} (图表/表格)", element_id),
            }
        }
    }

    if view.rendered_count() == 0 {
        tracing::warn!("没有任何目标被渲染，请确认后端是否可达");
    }
}
