// ==========================================
// 清关派送跟单管理系统 - 操作可见性引擎
// ==========================================
// 依据: 跟单业务流程说明 - 各列表页操作按钮规则
// 职责: (业务域, 当前状态) → 允许的操作集合
// 红线: 查表实现,保证全覆盖;每个状态恰好一组互不重叠的操作;
//       未注册状态返回空集(降级展示,不 panic)
// ==========================================

use crate::domain::types::Domain;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Action - 操作标识
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ===== 跟单(订单/清关) =====
    Review,                 // 审核
    Declare,                // 申报
    MarkArrival,            // 到港(船司网站能查到到港轨迹)
    MarkOnline,             // 上网(海关已能查询到提单号)
    UploadDeclaration,      // 回传初步报关单
    CompleteClearance,      // 清关完成
    UploadFinalDeclaration, // 回传最终报关单
    BookPickup,             // 预约提柜
    ConfirmPickup,          // 确认提柜
    PlaceInYard,            // 放置堆场
    ScheduleDelivery,       // 派送预约
    ConfirmDelivery,        // 确认交货
    ReturnContainer,        // 归还货柜

    // ===== 收入 =====
    ConfirmIncome, // 确认收入

    // ===== 付款 =====
    ReviewPayment, // 付款审核
    PayFee,        // 缴费
}

impl Action {
    /// 按钮中文文案
    pub fn label(&self) -> &'static str {
        match self {
            Action::Review => "审核",
            Action::Declare => "申报",
            Action::MarkArrival => "到港",
            Action::MarkOnline => "上网",
            Action::UploadDeclaration => "回传初步报关单",
            Action::CompleteClearance => "清关完成",
            Action::UploadFinalDeclaration => "回传最终报关单",
            Action::BookPickup => "预约提柜",
            Action::ConfirmPickup => "确认提柜",
            Action::PlaceInYard => "放置堆场",
            Action::ScheduleDelivery => "派送预约",
            Action::ConfirmDelivery => "确认交货",
            Action::ReturnContainer => "归还货柜",
            Action::ConfirmIncome => "确认收入",
            Action::ReviewPayment => "付款审核",
            Action::PayFee => "缴费",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 跟单操作表 (订单/清关共享生命周期)
// ==========================================
// 表项顺序与 OrderStatus::ALL 一一对应
static ORDER_TABLE: [(&str, &[Action]); 10] = [
    ("资料待审核", &[Action::Review]),
    ("资料已审核", &[Action::Declare]),
    (
        "清关中",
        &[
            Action::MarkArrival,
            Action::MarkOnline,
            Action::UploadDeclaration,
            Action::CompleteClearance,
        ],
    ),
    (
        "清关完成",
        &[Action::UploadFinalDeclaration, Action::BookPickup],
    ),
    ("已预约提柜", &[Action::ConfirmPickup]),
    ("已提柜", &[Action::PlaceInYard]),
    ("放置堆场", &[Action::ScheduleDelivery]),
    ("出派中", &[Action::ConfirmDelivery]),
    ("已签收", &[Action::ReturnContainer]),
    ("已还柜", &[]),
];

// ==========================================
// 派送操作表
// ==========================================
static DELIVERY_TABLE: [(&str, &[Action]); 7] = [
    ("待预约提柜", &[Action::BookPickup]),
    ("已预约提柜", &[Action::ConfirmPickup]),
    ("已提柜", &[Action::PlaceInYard]),
    ("放置堆场", &[Action::ScheduleDelivery]),
    ("出派中", &[Action::ConfirmDelivery]),
    ("已签收", &[Action::ReturnContainer]),
    ("已还柜", &[]),
];

// ==========================================
// 收入操作表
// ==========================================
static INCOME_TABLE: [(&str, &[Action]); 2] = [
    ("待确认", &[Action::ConfirmIncome]),
    ("已确认", &[]),
];

// ==========================================
// 付款操作表
// ==========================================
static PAYMENT_TABLE: [(&str, &[Action]); 4] = [
    ("待审核", &[Action::ReviewPayment]),
    ("待付款", &[Action::PayFee]),
    ("已付款", &[]),
    ("已关闭", &[]),
];

fn lookup(table: &'static [(&'static str, &'static [Action])], status: &str) -> &'static [Action] {
    table
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, actions)| *actions)
        .unwrap_or(&[])
}

/// 查询记录当前允许的操作集合
///
/// # 参数
/// - domain: 业务域(订单与清关共用跟单表)
/// - status: 记录当前状态(中文规范串)
///
/// # 返回
/// - 允许的操作,顺序即按钮渲染顺序;未注册状态返回空集
pub fn resolve_actions(domain: Domain, status: &str) -> &'static [Action] {
    match domain {
        Domain::Order | Domain::Clearance => lookup(&ORDER_TABLE, status),
        Domain::Delivery => lookup(&DELIVERY_TABLE, status),
        Domain::Income => lookup(&INCOME_TABLE, status),
        Domain::Payment => lookup(&PAYMENT_TABLE, status),
    }
}

/// 判断某状态下是否允许指定操作
pub fn action_permitted(domain: Domain, status: &str, action: Action) -> bool {
    resolve_actions(domain, status).contains(&action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{DeliveryStatus, IncomeStatus, OrderStatus, PaymentStatus};
    use std::collections::HashSet;

    // ==========================================
    // 全覆盖性测试
    // ==========================================

    #[test]
    fn test_order_table_covers_every_status() {
        for status in OrderStatus::ALL {
            // 每个状态都有表项(含空集的终态)
            let found = ORDER_TABLE.iter().any(|(s, _)| *s == status.as_str());
            assert!(found, "状态 {} 缺少操作表项", status);
        }
        assert_eq!(ORDER_TABLE.len(), OrderStatus::ALL.len());
    }

    #[test]
    fn test_delivery_income_payment_tables_cover_every_status() {
        for status in DeliveryStatus::ALL {
            assert!(DELIVERY_TABLE.iter().any(|(s, _)| *s == status.as_str()));
        }
        for status in IncomeStatus::ALL {
            assert!(INCOME_TABLE.iter().any(|(s, _)| *s == status.as_str()));
        }
        for status in PaymentStatus::ALL {
            assert!(PAYMENT_TABLE.iter().any(|(s, _)| *s == status.as_str()));
        }
    }

    // ==========================================
    // 互斥性 + 并集等于全目录
    // ==========================================

    fn assert_disjoint_and_union(
        table: &'static [(&'static str, &'static [Action])],
        catalogue: &[Action],
    ) {
        let mut seen: HashSet<Action> = HashSet::new();
        for (status, actions) in table {
            for action in *actions {
                assert!(
                    seen.insert(*action),
                    "操作 {:?} 在多个状态组重复出现 (status={})",
                    action,
                    status
                );
            }
        }
        let expected: HashSet<Action> = catalogue.iter().copied().collect();
        assert_eq!(seen, expected, "操作并集与目录不一致");
    }

    #[test]
    fn test_order_actions_disjoint_and_reachable() {
        assert_disjoint_and_union(
            &ORDER_TABLE,
            &[
                Action::Review,
                Action::Declare,
                Action::MarkArrival,
                Action::MarkOnline,
                Action::UploadDeclaration,
                Action::CompleteClearance,
                Action::UploadFinalDeclaration,
                Action::BookPickup,
                Action::ConfirmPickup,
                Action::PlaceInYard,
                Action::ScheduleDelivery,
                Action::ConfirmDelivery,
                Action::ReturnContainer,
            ],
        );
    }

    #[test]
    fn test_delivery_actions_disjoint_and_reachable() {
        assert_disjoint_and_union(
            &DELIVERY_TABLE,
            &[
                Action::BookPickup,
                Action::ConfirmPickup,
                Action::PlaceInYard,
                Action::ScheduleDelivery,
                Action::ConfirmDelivery,
                Action::ReturnContainer,
            ],
        );
    }

    #[test]
    fn test_finance_actions_disjoint_and_reachable() {
        assert_disjoint_and_union(&INCOME_TABLE, &[Action::ConfirmIncome]);
        assert_disjoint_and_union(&PAYMENT_TABLE, &[Action::ReviewPayment, Action::PayFee]);
    }

    // ==========================================
    // 具体状态组
    // ==========================================

    #[test]
    fn test_clearing_status_group() {
        let actions = resolve_actions(Domain::Clearance, "清关中");
        assert_eq!(
            actions,
            &[
                Action::MarkArrival,
                Action::MarkOnline,
                Action::UploadDeclaration,
                Action::CompleteClearance,
            ]
        );
    }

    #[test]
    fn test_cleared_status_group() {
        let actions = resolve_actions(Domain::Clearance, "清关完成");
        assert_eq!(
            actions,
            &[Action::UploadFinalDeclaration, Action::BookPickup]
        );
        assert!(!actions.contains(&Action::UploadDeclaration));
        assert!(!actions.contains(&Action::CompleteClearance));
    }

    #[test]
    fn test_unknown_status_yields_empty_set() {
        // 未注册状态降级为无操作,不是错误
        assert!(resolve_actions(Domain::Order, "不存在的状态").is_empty());
        assert!(resolve_actions(Domain::Order, "").is_empty());
    }

    #[test]
    fn test_order_and_clearance_share_table() {
        assert_eq!(
            resolve_actions(Domain::Order, "资料待审核"),
            resolve_actions(Domain::Clearance, "资料待审核")
        );
    }

    #[test]
    fn test_action_permitted() {
        assert!(action_permitted(Domain::Payment, "待付款", Action::PayFee));
        assert!(!action_permitted(Domain::Payment, "已付款", Action::PayFee));
    }
}
