// ==========================================
// 清关派送跟单管理系统 - 引擎层错误类型
// ==========================================
// 职责: 里程碑操作与查询层的业务错误
// 工具: thiserror 派生宏
// 红线: 非法状态转换必须显式拒绝,不得静默改写记录
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    // ===== 状态机错误 =====
    #[error("无效的状态转换: status={status} 不允许操作 {action}")]
    InvalidTransition { status: String, action: String },

    // ===== 弹窗输入校验错误 =====
    #[error("必填字段缺失: {0}")]
    MissingField(String),

    #[error("时间格式错误: {value} (期望 YYYY-MM-DDTHH:mm)")]
    InvalidTimestamp { value: String },

    #[error("审核不通过必须填写备注")]
    MissingRemark,

    // ===== 文件校验错误 =====
    #[error("不支持的文件类型: {file_name} (允许: {allowed})")]
    UnsupportedFileType { file_name: String, allowed: String },

    // ===== 查询层错误 =====
    #[error("未注册的页签: domain={domain}, tab={tab}")]
    UnknownTab { domain: String, tab: String },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
