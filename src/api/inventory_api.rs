// ==========================================
// UKM 智能经营分析仪表盘 - 库存页 API
// ==========================================
// 职责: 库存页占位加载与三个未上线操作
// 说明: 库存页功能尚未由后端提供，操作返回"未上线"通知，
//       使界面契约保持可观测而不是静默吞掉点击
// ==========================================

use crate::app::navigator::EpochGuard;
use crate::i18n::{t, t_with_args};
use crate::view::Notification;

use super::error::ApiResult;

/// 库存页API（功能占位）
pub struct InventoryApi;

impl InventoryApi {
    /// 创建新的InventoryApi实例
    pub fn new() -> Self {
        Self
    }

    /// 加载库存页
    ///
    /// 后端尚无库存页数据接口，仅记录日志
    pub async fn load(&self, guard: EpochGuard) {
        tracing::info!("加载库存页（功能占位，无数据接口）: epoch={}", guard.epoch());
    }

    // ==========================================
    // 用户操作（未上线）
    // ==========================================

    /// 更新库存
    pub async fn update_stock(&self) -> ApiResult<Notification> {
        Ok(unavailable("feature.update_stock"))
    }

    /// 检查效期
    pub async fn check_expiry(&self) -> ApiResult<Notification> {
        Ok(unavailable("feature.check_expiry"))
    }

    /// 生成库存报表
    pub async fn generate_inventory_report(&self) -> ApiResult<Notification> {
        Ok(unavailable("feature.inventory_report"))
    }
}

impl Default for InventoryApi {
    fn default() -> Self {
        Self::new()
    }
}

/// 构建"功能未上线"通知
fn unavailable(feature_key: &str) -> Notification {
    let feature = t(feature_key);
    Notification::result(t_with_args(
        "notify.feature_unavailable",
        &[("feature", &feature)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_stock_notifies_unavailable() {
        let _locale = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("id");
        let api = InventoryApi::new();
        let notification = api.update_stock().await.unwrap();
        assert_eq!(notification.message, "Fitur update stok belum tersedia");
    }
}
