// ==========================================
// 清关派送跟单管理系统 - 核心库
// ==========================================
// 技术栈: Rust + axum + reqwest
// 系统定位: 跟单后台的业务规则核心 + 订单代理服务
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与状态枚举
pub mod domain;

// 引擎层 - 操作可见性 + 里程碑规则
pub mod engine;

// 查询层 - 页签注册表 + 列表过滤
pub mod query;

// API 层 - 上游取数 + 代理服务
pub mod api;

// 应用层 - 页面状态与演示数据
pub mod app;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Attachment, ClearanceRecord, DeliveryRecord, DeliveryStatus, Domain, FeeFlags, IncomeRecord,
    IncomeStatus, OrderRecord, OrderStatus, PaymentRecord, PaymentStatus, ReviewResult,
};

// 引擎
pub use engine::{resolve_actions, Action, EngineError, EngineResult};

// 查询
pub use query::{filter_records, resolve_tab_status, FilterSource, TabStatus, ALL_TAB};

// API
pub use api::{ApiError, ApiResult, OrderApiClient, OrderPage};

// 应用
pub use app::{Command, DialogValue, PageRecord, PageState};

// 配置
pub use config::AppConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "清关派送跟单管理系统";
