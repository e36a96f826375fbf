// ==========================================
// 清关派送跟单管理系统 - 页面状态层
// ==========================================
// 依据: 跟单业务流程说明 - 列表页交互(页签/搜索/弹窗)
// 职责: 页面级状态对象 + 单向命令更新(reducer)
// 红线: 1) 状态只通过 apply 推进,无进程级单例
//       2) 取数带序号围栏,过期响应一律丢弃
//       3) 里程碑失败保持弹窗打开,记录集合不动
// ==========================================

use crate::domain::delivery::DeliveryRecord;
use crate::domain::finance::{IncomeRecord, PaymentRecord};
use crate::domain::order::{ClearanceRecord, OrderRecord};
use crate::domain::types::Domain;
use crate::engine::actions::{resolve_actions, Action};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::milestone;
use crate::query::filter::{filter_records, FilterSource};
use std::collections::BTreeMap;
use tracing::{debug, warn};

// ==========================================
// DialogValue - 弹窗确认值
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum DialogValue {
    /// 时间控件 (YYYY-MM-DDTHH:mm)
    Time(String),
    /// 文件选择(文件名)
    File(String),
    /// 审核决定(通过/驳回)
    ReviewDecision(bool),
    /// 缴费(金额 + 付款时间)
    Payment { amount: f64, time: String },
}

// ==========================================
// PageRecord - 页面记录的统一入口
// ==========================================

/// 列表页记录: 标识 + 状态 + 里程碑应用
pub trait PageRecord: Clone + FilterSource {
    fn domain() -> Domain;
    fn id(&self) -> &str;

    /// 把弹窗确认值交给对应的里程碑操作,返回记录新副本
    fn apply_milestone(&self, action: Action, value: &DialogValue) -> EngineResult<Self>;
}

fn value_mismatch(action: Action) -> EngineError {
    EngineError::MissingField(format!("{} 弹窗确认值", action.label()))
}

fn unsupported(status: &str, action: Action) -> EngineError {
    EngineError::InvalidTransition {
        status: status.to_string(),
        action: action.label().to_string(),
    }
}

impl PageRecord for OrderRecord {
    fn domain() -> Domain {
        Domain::Order
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_milestone(&self, action: Action, value: &DialogValue) -> EngineResult<Self> {
        match (action, value) {
            (Action::MarkArrival, DialogValue::Time(t)) => milestone::record_arrival(self, t),
            (Action::MarkOnline, DialogValue::Time(t)) => milestone::record_online(self, t),
            (Action::MarkArrival | Action::MarkOnline, _) => Err(value_mismatch(action)),
            _ => Err(unsupported(&self.status, action)),
        }
    }
}

impl PageRecord for ClearanceRecord {
    fn domain() -> Domain {
        Domain::Clearance
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_milestone(&self, action: Action, value: &DialogValue) -> EngineResult<Self> {
        match (action, value) {
            (Action::UploadDeclaration, DialogValue::File(f)) => {
                milestone::upload_declaration(self, f)
            }
            (Action::UploadFinalDeclaration, DialogValue::File(f)) => {
                milestone::upload_final_declaration(self, f)
            }
            (Action::CompleteClearance, DialogValue::Time(t)) => {
                milestone::complete_clearance(self, t)
            }
            (
                Action::UploadDeclaration
                | Action::UploadFinalDeclaration
                | Action::CompleteClearance,
                _,
            ) => Err(value_mismatch(action)),
            _ => Err(unsupported(&self.status, action)),
        }
    }
}

impl PageRecord for DeliveryRecord {
    fn domain() -> Domain {
        Domain::Delivery
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_milestone(&self, action: Action, value: &DialogValue) -> EngineResult<Self> {
        let DialogValue::Time(t) = value else {
            return Err(value_mismatch(action));
        };
        match action {
            Action::BookPickup => milestone::book_pickup(self, t),
            Action::ConfirmPickup => milestone::confirm_pickup(self, t),
            Action::PlaceInYard => milestone::place_in_yard(self, t),
            Action::ScheduleDelivery => milestone::schedule_delivery(self, t),
            Action::ConfirmDelivery => milestone::confirm_delivery(self, t),
            Action::ReturnContainer => milestone::return_container(self, t),
            _ => Err(unsupported(&self.status, action)),
        }
    }
}

impl PageRecord for IncomeRecord {
    fn domain() -> Domain {
        Domain::Income
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_milestone(&self, action: Action, value: &DialogValue) -> EngineResult<Self> {
        match (action, value) {
            (Action::ConfirmIncome, DialogValue::Time(t)) => milestone::confirm_income(self, t),
            (Action::ConfirmIncome, _) => Err(value_mismatch(action)),
            _ => Err(unsupported(&self.status, action)),
        }
    }
}

impl PageRecord for PaymentRecord {
    fn domain() -> Domain {
        Domain::Payment
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_milestone(&self, action: Action, value: &DialogValue) -> EngineResult<Self> {
        match (action, value) {
            (Action::ReviewPayment, DialogValue::ReviewDecision(approved)) => {
                milestone::review_payment(self, *approved)
            }
            (Action::PayFee, DialogValue::Payment { amount, time }) => {
                milestone::pay_fee(self, *amount, time)
            }
            (Action::ReviewPayment | Action::PayFee, _) => Err(value_mismatch(action)),
            _ => Err(unsupported(&self.status, action)),
        }
    }
}

// ==========================================
// Command - 页面命令
// ==========================================
#[derive(Debug, Clone)]
pub enum Command<R> {
    /// 切换页签(未注册页签拒绝,保持原页签)
    SwitchTab(String),
    /// 设置搜索字段
    SetFilter { key: String, value: String },
    /// 重置全部搜索字段
    ResetFilters,
    /// 打开操作弹窗(按当前状态校验操作可见性)
    OpenDialog { record_id: String, action: Action },
    /// 关闭弹窗(不提交)
    CloseDialog,
    /// 弹窗确认: 执行里程碑操作并替换记录
    ConfirmDialog(DialogValue),
    /// 发起取数(递增序号,进入 loading)
    FetchStarted,
    /// 取数完成;seq 过期则整体丢弃
    FetchCompleted { seq: u64, records: Vec<R> },
    /// 取数失败;seq 过期则整体丢弃
    FetchFailed { seq: u64, message: String },
}

/// 打开中的弹窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialog {
    pub record_id: String,
    pub action: Action,
}

// ==========================================
// PageState - 页面状态
// ==========================================

/// 页面级状态: 每个列表页各持一份,页面间不共享
#[derive(Debug, Clone)]
pub struct PageState<R> {
    pub records: Vec<R>,
    pub active_tab: String,
    pub filters: BTreeMap<String, String>,
    pub dialog: Option<OpenDialog>,
    pub loading: bool,
    pub last_error: Option<String>,
    pub notice: Option<String>,
    /// 取数围栏: 最近一次发起的请求序号
    pub fetch_seq: u64,
}

impl<R: PageRecord> PageState<R> {
    pub fn new(records: Vec<R>, default_tab: &str) -> Self {
        Self {
            records,
            active_tab: default_tab.to_string(),
            filters: BTreeMap::new(),
            dialog: None,
            loading: false,
            last_error: None,
            notice: None,
            fetch_seq: 0,
        }
    }

    /// 当前可见子集(页签 + 搜索字段)
    pub fn visible(&self) -> EngineResult<Vec<&R>> {
        filter_records(&self.records, R::domain(), &self.active_tab, &self.filters)
    }

    /// 某条记录当前允许渲染的操作按钮
    pub fn actions_for(&self, record_id: &str) -> &'static [Action] {
        self.records
            .iter()
            .find(|r| r.id() == record_id)
            .map(|r| resolve_actions(R::domain(), r.status()))
            .unwrap_or(&[])
    }

    /// 应用一条页面命令
    pub fn apply(&mut self, command: Command<R>) {
        self.notice = None;
        match command {
            Command::SwitchTab(tab) => {
                match crate::query::tabs::resolve_tab_status(R::domain(), &tab) {
                    Ok(_) => {
                        self.active_tab = tab;
                        self.last_error = None;
                    }
                    Err(err) => {
                        warn!(%tab, "切换到未注册页签被拒绝");
                        self.last_error = Some(err.to_string());
                    }
                }
            }
            Command::SetFilter { key, value } => {
                self.filters.insert(key, value);
            }
            Command::ResetFilters => {
                self.filters.clear();
            }
            Command::OpenDialog { record_id, action } => {
                let permitted = self
                    .records
                    .iter()
                    .find(|r| r.id() == record_id)
                    .map(|r| resolve_actions(R::domain(), r.status()).contains(&action))
                    .unwrap_or(false);
                if permitted {
                    self.dialog = Some(OpenDialog { record_id, action });
                    self.last_error = None;
                } else {
                    self.last_error = Some(format!("当前状态不允许操作 {}", action.label()));
                }
            }
            Command::CloseDialog => {
                self.dialog = None;
            }
            Command::ConfirmDialog(value) => self.confirm_dialog(&value),
            Command::FetchStarted => {
                self.fetch_seq += 1;
                self.loading = true;
                self.last_error = None;
                debug!(seq = self.fetch_seq, "发起列表取数");
            }
            Command::FetchCompleted { seq, records } => {
                if seq != self.fetch_seq {
                    // 过期响应: 后发请求已在途,丢弃
                    warn!(seq, current = self.fetch_seq, "丢弃过期取数响应");
                    return;
                }
                self.records = records;
                self.loading = false;
            }
            Command::FetchFailed { seq, message } => {
                if seq != self.fetch_seq {
                    warn!(seq, current = self.fetch_seq, "丢弃过期取数失败通知");
                    return;
                }
                self.loading = false;
                self.last_error = Some(message);
            }
        }
    }

    fn confirm_dialog(&mut self, value: &DialogValue) {
        let Some(dialog) = self.dialog.clone() else {
            self.last_error = Some("没有打开的弹窗".to_string());
            return;
        };
        let Some(index) = self.records.iter().position(|r| r.id() == dialog.record_id) else {
            self.last_error = Some(format!("记录不存在: {}", dialog.record_id));
            self.dialog = None;
            return;
        };

        match self.records[index].apply_milestone(dialog.action, value) {
            Ok(next) => {
                self.records[index] = next;
                self.dialog = None;
                self.last_error = None;
                self.notice = Some(format!("{} 操作成功", dialog.action.label()));
            }
            Err(err) => {
                // 校验失败保持弹窗打开,由用户修正输入
                self.last_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock;

    fn clearance_state() -> PageState<ClearanceRecord> {
        PageState::new(mock::mock_clearances(), "clearing")
    }

    // ==========================================
    // 弹窗生命周期
    // ==========================================

    #[test]
    fn test_dialog_open_confirm_close() {
        let mut state = clearance_state();
        state.apply(Command::OpenDialog {
            record_id: "1".to_string(),
            action: Action::CompleteClearance,
        });
        assert!(state.dialog.is_some());

        state.apply(Command::ConfirmDialog(DialogValue::Time(
            "2025-12-12T10:00".to_string(),
        )));
        assert!(state.dialog.is_none());
        assert_eq!(state.records[0].status, "清关完成");
        assert_eq!(state.notice.as_deref(), Some("清关完成 操作成功"));
    }

    #[test]
    fn test_confirm_with_empty_time_keeps_dialog_open() {
        let mut state = clearance_state();
        state.apply(Command::OpenDialog {
            record_id: "1".to_string(),
            action: Action::CompleteClearance,
        });
        state.apply(Command::ConfirmDialog(DialogValue::Time(String::new())));
        // 弹窗保持打开,记录不变
        assert!(state.dialog.is_some());
        assert_eq!(state.records[0].status, "清关中");
        assert!(state.last_error.is_some());
    }

    #[test]
    fn test_open_dialog_rejected_for_wrong_status() {
        let mut state = clearance_state();
        state.apply(Command::OpenDialog {
            record_id: "1".to_string(),
            action: Action::BookPickup, // 清关中不允许预约提柜
        });
        assert!(state.dialog.is_none());
        assert!(state.last_error.is_some());
    }

    // ==========================================
    // 页签与搜索
    // ==========================================

    #[test]
    fn test_switch_to_unknown_tab_is_rejected() {
        let mut state = clearance_state();
        state.apply(Command::SwitchTab("no-such-tab".to_string()));
        assert_eq!(state.active_tab, "clearing");
        assert!(state.last_error.is_some());
    }

    #[test]
    fn test_filters_apply_to_visible() {
        let mut state = clearance_state();
        state.apply(Command::SwitchTab("all".to_string()));
        state.apply(Command::SetFilter {
            key: "billNo".to_string(),
            value: "58559".to_string(),
        });
        let visible = state.visible().unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].bill_no, "55-58559");

        state.apply(Command::ResetFilters);
        assert_eq!(state.visible().unwrap().len(), 2);
    }

    // ==========================================
    // 取数围栏
    // ==========================================

    #[test]
    fn test_stale_fetch_response_is_dropped() {
        let mut state: PageState<OrderRecord> = PageState::new(vec![], "all");

        state.apply(Command::FetchStarted);
        let first_seq = state.fetch_seq;
        state.apply(Command::FetchStarted);
        let second_seq = state.fetch_seq;
        assert_ne!(first_seq, second_seq);

        // 旧请求后到: 丢弃,仍在 loading
        state.apply(Command::FetchCompleted {
            seq: first_seq,
            records: mock::mock_orders(),
        });
        assert!(state.records.is_empty());
        assert!(state.loading);

        // 新请求完成: 应用
        state.apply(Command::FetchCompleted {
            seq: second_seq,
            records: mock::mock_orders(),
        });
        assert!(!state.records.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_fetch_failure_is_dropped() {
        let mut state: PageState<OrderRecord> = PageState::new(vec![], "all");
        state.apply(Command::FetchStarted);
        let stale = state.fetch_seq;
        state.apply(Command::FetchStarted);

        state.apply(Command::FetchFailed {
            seq: stale,
            message: "API请求失败: 500".to_string(),
        });
        assert!(state.last_error.is_none());
        assert!(state.loading);
    }

    #[test]
    fn test_fetch_failure_surfaces_message() {
        let mut state: PageState<OrderRecord> = PageState::new(vec![], "all");
        state.apply(Command::FetchStarted);
        let seq = state.fetch_seq;
        state.apply(Command::FetchFailed {
            seq,
            message: "API请求失败: 502".to_string(),
        });
        assert_eq!(state.last_error.as_deref(), Some("API请求失败: 502"));
        assert!(!state.loading);
    }
}
