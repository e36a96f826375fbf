// ==========================================
// 清关派送跟单管理系统 - API 层错误类型
// ==========================================
// 职责: 上游取数与代理转发的错误
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 上游错误 =====
    // 非 2xx 响应按统一口径报告,消息中携带 HTTP 状态码
    #[error("API请求失败: {status}")]
    UpstreamStatus { status: u16 },

    #[error("上游请求错误: {0}")]
    Transport(#[from] reqwest::Error),

    // ===== 响应解析错误 =====
    #[error("响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("响应信封异常: code={code}, message={message}")]
    EnvelopeError { code: i64, message: String },
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
