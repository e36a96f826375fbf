// ==========================================
// 清关派送跟单管理系统 - 收入/付款领域模型
// ==========================================
// 依据: 跟单业务流程说明 - 收入确认/付款申请
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// IncomeRecord - 收入确认记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: String,
    pub business_no: String, // 业务单号
    pub customer: String,    // 客户
    pub country: String,     // 国家
    pub service: String,     // 产品服务(如 清关)
    pub status: String,      // 待确认 / 已确认
    pub business_date: String, // 业务日期
    pub confirm_date: String,  // 确认日期(确认收入里程碑写入)
    pub currency: String,
    pub amount: f64,
    pub remark: String,
    pub creator: String,
    pub create_time: String,
}

// ==========================================
// PaymentRecord - 付款申请记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub request_no: String,  // 付款申请号(如 PKSQ251125001)
    pub business_no: String, // 关联业务单号
    pub service: String,
    pub country: String,
    pub supplier: String, // 供应商
    pub currency: String,
    pub request_amount: f64, // 申请金额
    pub paid_amount: f64,    // 已付金额(缴费里程碑写入)
    pub payment_reason: String, // 费用名称(如 DO款/港杂费)
    pub payment_date: String,   // 付款日期(缴费里程碑写入)
    pub status: String,         // 待审核 / 待付款 / 已付款 / 已关闭
    pub remark: String,
    pub creator: String,
    pub create_time: String,
}
