// ==========================================
// 清关派送跟单管理系统 - 派送领域模型
// ==========================================
// 依据: 跟单业务流程说明 - 派送列表
// ==========================================

use serde::{Deserialize, Serialize};

/// 派送跟单记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub id: String,
    pub bill_no: String,        // 提单号
    pub container_no: String,   // 货柜编号
    pub container_type: String, // 货柜型号(如 40尺)
    pub status: String,         // 派送状态(中文规范串)
    pub customer_code: String,  // 客户代码
    pub company: String,        // 运输公司
    pub driver: String,         // 司机姓名
    pub phone: String,          // 司机电话
    pub scheduled_time: String, // 待预约阶段为预约提柜时间,其余阶段为实际时间
}
