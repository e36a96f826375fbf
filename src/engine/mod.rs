// ==========================================
// 清关派送跟单管理系统 - 引擎层
// ==========================================
// 职责: 操作可见性规则 + 里程碑更新规则
// 红线: 纯函数,不访问网络,不持有可变状态
// ==========================================

pub mod actions;
pub mod error;
pub mod milestone;

// 重导出核心类型
pub use actions::{action_permitted, resolve_actions, Action};
pub use error::{EngineError, EngineResult};
pub use milestone::{
    book_pickup, complete_clearance, confirm_delivery, confirm_income, confirm_pickup,
    pay_fee, place_in_yard, record_arrival, record_online, return_container,
    review_attachment, review_payment, schedule_delivery, upload_declaration,
    upload_final_declaration, DECLARATION_FILE_EXTENSIONS, DIALOG_TIME_FORMAT,
};
