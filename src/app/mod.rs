// ==========================================
// 清关派送跟单管理系统 - 应用层
// ==========================================
// 职责: 页面状态与命令更新 + 演示数据
// ==========================================

pub mod mock;
pub mod state;

// 重导出核心类型
pub use state::{Command, DialogValue, OpenDialog, PageRecord, PageState};
