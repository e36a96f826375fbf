// ==========================================
// 清关派送跟单管理系统 - API 层
// ==========================================
// 职责: 上游取数客户端 + 订单代理服务
// ==========================================

pub mod error;
pub mod order_api;
pub mod proxy;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use order_api::{normalize_order, OrderApiClient, OrderApiPage, OrderApiResponse, OrderPage, RawOrderItem};
pub use proxy::{router as proxy_router, ProxyState};
