// ==========================================
// 清关派送跟单管理系统 - 订单/清关领域模型
// ==========================================
// 依据: 跟单业务流程说明 - 订单列表/清关列表
// 用途: 列表页展示、里程碑操作的输入输出
// 红线: 记录只通过里程碑操作产生新副本,不可原地修改
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// FeeFlags - 缴费标记 (DO / 港杂 / 税)
// ==========================================
// 三个布尔互相独立,与状态无约束关系
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeFlags {
    #[serde(rename = "do")]
    pub do_fee: bool, // DO 款
    pub port: bool, // 港杂费
    pub tax: bool,  // 税款
}

// ==========================================
// OrderRecord - 订单跟单记录
// ==========================================
// 对齐: 上游 order-base-info 接口经规范化后的结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    // ===== 主键 =====
    pub id: String, // 集合内唯一,更新后保持不变

    // ===== 单证信息 =====
    pub bill_no: String,      // 提单号
    pub container_no: String, // 柜号
    pub shipping: String,     // 船司
    pub port: String,         // 清关口岸
    pub customer_code: String, // 客户代码
    pub agent: String,        // 清关代理
    pub recipient: String,    // 提单收件人

    // ===== 时间信息 (yyyy/MM/dd) =====
    pub estimated_date: String, // 预报日期
    pub shipping_date: String,  // 发运日期
    pub arrival_date: String,   // 到港日期(到港里程碑写入)

    // ===== 状态与缴费 =====
    pub status: String, // 跟单状态(中文规范串,未注册取值按无操作处理)
    pub fees: FeeFlags,
}

// ==========================================
// ClearanceRecord - 清关跟单记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearanceRecord {
    pub id: String,
    pub bill_no: String,
    pub status: String, // 与订单共享跟单状态枚举
    pub container_no: String,
    pub shipping: String,
    pub port: String,
    pub customer_code: String,
    pub agent: String,
    pub recipient: String,

    // ===== 清关里程碑 =====
    pub clearance_date: String, // 海关申报日期 (yyyy/MM/dd)
    pub clearance_time: String, // 清关完成时间 (YYYY-MM-DDTHH:mm,完成清关里程碑写入)
    pub declaration_docs: Vec<String>, // 已回传的报关单文件引用

    pub fees: FeeFlags,
}
