// ==========================================
// 清关派送跟单管理系统 - 页签状态注册表
// ==========================================
// 依据: 跟单业务流程说明 - 各列表页页签
// 职责: 页签短键 → 规范状态串的稳定映射
// 红线: 只有显式的 "all" 键匹配全部;未注册页签必须
//       报 UnknownTab,绝不静默退化为全量匹配
// ==========================================

use crate::domain::types::Domain;
use crate::engine::error::{EngineError, EngineResult};

/// 页签解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStatus {
    /// "all" 页签: 状态谓词放行一切
    All,
    /// 普通页签: 仅保留状态等于该规范串的记录
    Status(&'static str),
}

/// "all" 页签键
pub const ALL_TAB: &str = "all";

// ==========================================
// 各域页签表 (键 → 规范状态串)
// ==========================================

const ORDER_TABS: [(&str, &str); 10] = [
    ("pending", "资料待审核"),
    ("reviewed", "资料已审核"),
    ("clearing", "清关中"),
    ("cleared", "清关完成"),
    ("booked", "已预约提柜"),
    ("picked", "已提柜"),
    ("storage", "放置堆场"),
    ("delivering", "出派中"),
    ("received", "已签收"),
    ("returned", "已还柜"),
];

// 派送页的 pending 指向"待预约提柜",与跟单页不同
const DELIVERY_TABS: [(&str, &str); 7] = [
    ("pending", "待预约提柜"),
    ("booked", "已预约提柜"),
    ("picked", "已提柜"),
    ("storage", "放置堆场"),
    ("delivering", "出派中"),
    ("received", "已签收"),
    ("returned", "已还柜"),
];

const INCOME_TABS: [(&str, &str); 2] = [("pending", "待确认"), ("confirmed", "已确认")];

const PAYMENT_TABS: [(&str, &str); 4] = [
    ("pending", "待审核"),
    ("awaiting", "待付款"),
    ("paid", "已付款"),
    ("closed", "已关闭"),
];

fn domain_tabs(domain: Domain) -> &'static [(&'static str, &'static str)] {
    match domain {
        Domain::Order | Domain::Clearance => &ORDER_TABS,
        Domain::Delivery => &DELIVERY_TABS,
        Domain::Income => &INCOME_TABS,
        Domain::Payment => &PAYMENT_TABS,
    }
}

/// 解析页签键
///
/// # 返回
/// - Ok(TabStatus::All): 显式 "all" 页签
/// - Ok(TabStatus::Status): 页签对应的规范状态串
/// - Err(UnknownTab): 未注册页签(包括收入/付款页的"查询"控件键)
pub fn resolve_tab_status(domain: Domain, tab_key: &str) -> EngineResult<TabStatus> {
    if tab_key == ALL_TAB {
        return Ok(TabStatus::All);
    }
    domain_tabs(domain)
        .iter()
        .find(|(key, _)| *key == tab_key)
        .map(|(_, status)| TabStatus::Status(status))
        .ok_or_else(|| EngineError::UnknownTab {
            domain: domain.to_string(),
            tab: tab_key.to_string(),
        })
}
