// ==========================================
// 清关派送跟单管理系统 - 领域类型定义
// ==========================================
// 依据: 跟单业务流程说明 - 订单/清关/派送/收入/付款
// 职责: 业务域判别、各域状态枚举、审核结果
// 红线: 状态取值为封闭集合,中文规范串即数据本身
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 业务域 (Domain)
// ==========================================
// 订单与清关共享同一条跟单生命周期(10态),
// 派送/收入/付款各自独立枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Order,     // 订单列表(跟单)
    Clearance, // 清关列表(跟单)
    Delivery,  // 派送列表(跟单)
    Income,    // 收入确认
    Payment,   // 付款申请
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Order => write!(f, "order"),
            Domain::Clearance => write!(f, "clearance"),
            Domain::Delivery => write!(f, "delivery"),
            Domain::Income => write!(f, "income"),
            Domain::Payment => write!(f, "payment"),
        }
    }
}

// ==========================================
// 跟单状态 (Order Status)
// ==========================================
// 枚举顺序即业务推进顺序(资料待审核 → … → 已还柜)
// 序列化格式: 中文规范串(与上游接口一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "资料待审核")]
    PendingReview,
    #[serde(rename = "资料已审核")]
    Reviewed,
    #[serde(rename = "清关中")]
    Clearing,
    #[serde(rename = "清关完成")]
    Cleared,
    #[serde(rename = "已预约提柜")]
    PickupBooked,
    #[serde(rename = "已提柜")]
    PickedUp,
    #[serde(rename = "放置堆场")]
    InYard,
    #[serde(rename = "出派中")]
    Delivering,
    #[serde(rename = "已签收")]
    Received,
    #[serde(rename = "已还柜")]
    ContainerReturned,
}

impl OrderStatus {
    /// 全部状态(按业务推进顺序)
    pub const ALL: [OrderStatus; 10] = [
        OrderStatus::PendingReview,
        OrderStatus::Reviewed,
        OrderStatus::Clearing,
        OrderStatus::Cleared,
        OrderStatus::PickupBooked,
        OrderStatus::PickedUp,
        OrderStatus::InYard,
        OrderStatus::Delivering,
        OrderStatus::Received,
        OrderStatus::ContainerReturned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingReview => "资料待审核",
            OrderStatus::Reviewed => "资料已审核",
            OrderStatus::Clearing => "清关中",
            OrderStatus::Cleared => "清关完成",
            OrderStatus::PickupBooked => "已预约提柜",
            OrderStatus::PickedUp => "已提柜",
            OrderStatus::InYard => "放置堆场",
            OrderStatus::Delivering => "出派中",
            OrderStatus::Received => "已签收",
            OrderStatus::ContainerReturned => "已还柜",
        }
    }

    /// 解析中文规范串;未注册取值返回 None(上游数据不可信)
    pub fn parse(s: &str) -> Option<OrderStatus> {
        OrderStatus::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 派送状态 (Delivery Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "待预约提柜")]
    PendingPickup,
    #[serde(rename = "已预约提柜")]
    PickupBooked,
    #[serde(rename = "已提柜")]
    PickedUp,
    #[serde(rename = "放置堆场")]
    InYard,
    #[serde(rename = "出派中")]
    Delivering,
    #[serde(rename = "已签收")]
    Received,
    #[serde(rename = "已还柜")]
    ContainerReturned,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 7] = [
        DeliveryStatus::PendingPickup,
        DeliveryStatus::PickupBooked,
        DeliveryStatus::PickedUp,
        DeliveryStatus::InYard,
        DeliveryStatus::Delivering,
        DeliveryStatus::Received,
        DeliveryStatus::ContainerReturned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::PendingPickup => "待预约提柜",
            DeliveryStatus::PickupBooked => "已预约提柜",
            DeliveryStatus::PickedUp => "已提柜",
            DeliveryStatus::InYard => "放置堆场",
            DeliveryStatus::Delivering => "出派中",
            DeliveryStatus::Received => "已签收",
            DeliveryStatus::ContainerReturned => "已还柜",
        }
    }

    pub fn parse(s: &str) -> Option<DeliveryStatus> {
        DeliveryStatus::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 收入状态 (Income Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeStatus {
    #[serde(rename = "待确认")]
    PendingConfirm,
    #[serde(rename = "已确认")]
    Confirmed,
}

impl IncomeStatus {
    pub const ALL: [IncomeStatus; 2] = [IncomeStatus::PendingConfirm, IncomeStatus::Confirmed];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeStatus::PendingConfirm => "待确认",
            IncomeStatus::Confirmed => "已确认",
        }
    }

    pub fn parse(s: &str) -> Option<IncomeStatus> {
        IncomeStatus::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for IncomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 付款状态 (Payment Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "待审核")]
    PendingReview,
    #[serde(rename = "待付款")]
    AwaitingPayment,
    #[serde(rename = "已付款")]
    Paid,
    #[serde(rename = "已关闭")]
    Closed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::PendingReview,
        PaymentStatus::AwaitingPayment,
        PaymentStatus::Paid,
        PaymentStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::PendingReview => "待审核",
            PaymentStatus::AwaitingPayment => "待付款",
            PaymentStatus::Paid => "已付款",
            PaymentStatus::Closed => "已关闭",
        }
    }

    pub fn parse(s: &str) -> Option<PaymentStatus> {
        PaymentStatus::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 附件审核结果 (Review Result)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewResult {
    Pending, // 未审核
    Passed,  // 审核通过
    Failed,  // 审核不通过(必须填写备注)
}

impl fmt::Display for ReviewResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewResult::Pending => write!(f, "未审核"),
            ReviewResult::Passed => write!(f, "通过"),
            ReviewResult::Failed => write!(f, "不通过"),
        }
    }
}
