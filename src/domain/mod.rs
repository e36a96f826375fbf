// ==========================================
// 清关派送跟单管理系统 - 领域模型层
// ==========================================
// 职责: 定义业务记录、状态枚举、附件结构
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod attachment;
pub mod delivery;
pub mod finance;
pub mod order;
pub mod types;

// 重导出核心类型
pub use attachment::Attachment;
pub use delivery::DeliveryRecord;
pub use finance::{IncomeRecord, PaymentRecord};
pub use order::{ClearanceRecord, FeeFlags, OrderRecord};
pub use types::{Domain, DeliveryStatus, IncomeStatus, OrderStatus, PaymentStatus, ReviewResult};
