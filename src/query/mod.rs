// ==========================================
// 清关派送跟单管理系统 - 查询层
// ==========================================
// 职责: 页签注册表 + 列表过滤
// ==========================================

pub mod filter;
pub mod tabs;

// 重导出核心类型
pub use filter::{filter_records, FilterSource};
pub use tabs::{resolve_tab_status, TabStatus, ALL_TAB};
