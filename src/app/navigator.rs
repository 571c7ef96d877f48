// ==========================================
// UKM 智能经营分析仪表盘 - 导航控制器
// ==========================================
// 职责: 维护唯一激活页签与各页签的请求纪元
// 契约: 任意时刻恰有一个页签激活；激活先同步更新状态，
//       再由调用方发起 fire-and-forget 的异步加载
// ==========================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::domain::TabId;

/// 请求纪元凭据
///
/// 激活页签时签发；加载任务在每次写入界面前校验凭据仍然有效，
/// 被新激活取代（纪元已推进）的迟到响应直接丢弃
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochGuard {
    tab: TabId,
    epoch: u64,
}

impl EpochGuard {
    /// 凭据所属页签
    pub fn tab(&self) -> TabId {
        self.tab
    }

    /// 凭据纪元值
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// 导航控制器
///
/// 激活是单次同步状态更新；同一页签重复激活会再次签发新纪元
/// （即加载器会再次触发，无去重保护）
pub struct TabNavigator {
    /// 当前激活页签
    active: Mutex<TabId>,

    /// 各页签的请求纪元计数（下标 = TabId::index）
    epochs: [AtomicU64; 4],
}

impl TabNavigator {
    /// 创建导航控制器（初始激活总览页）
    pub fn new() -> Self {
        Self {
            active: Mutex::new(TabId::Dashboard),
            epochs: [
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
            ],
        }
    }

    /// 激活页签
    ///
    /// 旧激活页签隐式失效（激活集合里只保留新页签），
    /// 推进该页签的纪元并签发新凭据
    pub fn activate(&self, tab: TabId) -> EpochGuard {
        {
            let mut active = self.active.lock().unwrap();
            *active = tab;
        }

        let epoch = self.epochs[tab.index()].fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("激活页签: {} (epoch={})", tab, epoch);

        EpochGuard { tab, epoch }
    }

    /// 当前激活页签
    pub fn active(&self) -> TabId {
        *self.active.lock().unwrap()
    }

    /// 凭据是否仍然有效（该页签未被重新激活）
    pub fn is_current(&self, guard: &EpochGuard) -> bool {
        self.epochs[guard.tab.index()].load(Ordering::SeqCst) == guard.epoch
    }

    /// 页签当前纪元值
    pub fn current_epoch(&self, tab: TabId) -> u64 {
        self.epochs[tab.index()].load(Ordering::SeqCst)
    }
}

impl Default for TabNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_active_tab() {
        let navigator = TabNavigator::new();
        assert_eq!(navigator.active(), TabId::Dashboard);
        assert_eq!(navigator.current_epoch(TabId::Manajemen), 0);
    }

    #[test]
    fn test_activate_switches_active_set() {
        let navigator = TabNavigator::new();
        navigator.activate(TabId::Ppic);
        assert_eq!(navigator.active(), TabId::Ppic);

        navigator.activate(TabId::Manajemen);
        // 任意时刻恰有一个激活页签
        assert_eq!(navigator.active(), TabId::Manajemen);
    }

    #[test]
    fn test_repeat_activation_issues_new_epoch() {
        let navigator = TabNavigator::new();
        let first = navigator.activate(TabId::Ppic);
        let second = navigator.activate(TabId::Ppic);

        // 重复激活不去重: 纪元推进，旧凭据失效
        assert_eq!(first.epoch() + 1, second.epoch());
        assert!(!navigator.is_current(&first));
        assert!(navigator.is_current(&second));
    }

    #[test]
    fn test_stale_guard_after_leaving_tab() {
        let navigator = TabNavigator::new();
        let guard = navigator.activate(TabId::Manajemen);

        // 切走再切回: 原凭据已被取代
        navigator.activate(TabId::Ppic);
        assert!(navigator.is_current(&guard));

        navigator.activate(TabId::Manajemen);
        assert!(!navigator.is_current(&guard));
    }
}
