// ==========================================
// 清关派送跟单管理系统 - 订单附件领域模型
// ==========================================
// 依据: 跟单业务流程说明 - 审核资料页
// 红线: 审核不通过必须填写备注(引擎层强制)
// ==========================================

use crate::domain::types::ReviewResult;
use serde::{Deserialize, Serialize};

/// 订单附件(提单文件/装箱单/发票/SABER/授权函等)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub doc_type: String,  // 附件类型(如 提单文件/装箱单/发票)
    pub file_name: String, // 可为分号分隔的多文件(如 a.pdf;b.pdf)

    // ===== 审核字段(审核里程碑写入) =====
    pub review_result: ReviewResult,
    pub remark: String,      // 审核不通过时的原因说明
    pub review_date: String, // 审核日期
    pub reviewer: String,    // 审核人
}
