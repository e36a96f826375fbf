// ==========================================
// 清关派送跟单管理系统 - 里程碑操作引擎
// ==========================================
// 依据: 跟单业务流程说明 - 弹窗确认后的记录更新规则
// 职责: 接收弹窗确认值,产出记录的新副本(必要时推进状态)
// 红线: 1) 先查操作可见性表,当前状态不允许的操作一律
//          InvalidTransition,绝不静默改写
//       2) 输入记录只读,永远返回替换副本
// ==========================================

use crate::domain::attachment::Attachment;
use crate::domain::delivery::DeliveryRecord;
use crate::domain::finance::{IncomeRecord, PaymentRecord};
use crate::domain::order::{ClearanceRecord, OrderRecord};
use crate::domain::types::{DeliveryStatus, Domain, OrderStatus, PaymentStatus, ReviewResult};
use crate::engine::actions::{action_permitted, Action};
use crate::engine::error::{EngineError, EngineResult};
use chrono::NaiveDateTime;

/// 弹窗时间控件的提交格式
pub const DIALOG_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// 报关单回传允许的文件扩展名(与上传弹窗的 accept 一致)
pub const DECLARATION_FILE_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "jpg", "jpeg", "png"];

// ==========================================
// 输入校验辅助
// ==========================================

/// 解析弹窗时间 (YYYY-MM-DDTHH:mm)
///
/// 空值与格式错误分开报告: 弹窗本地会拦截空值,引擎仍兜底校验
pub fn parse_dialog_time(field: &str, value: &str) -> EngineResult<NaiveDateTime> {
    if value.trim().is_empty() {
        return Err(EngineError::MissingField(field.to_string()));
    }
    NaiveDateTime::parse_from_str(value, DIALOG_TIME_FORMAT).map_err(|_| {
        EngineError::InvalidTimestamp {
            value: value.to_string(),
        }
    })
}

/// 校验报关单文件扩展名(大小写不敏感)
pub fn validate_declaration_file(file_name: &str) -> EngineResult<()> {
    let lower = file_name.to_lowercase();
    let ok = DECLARATION_FILE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")));
    if ok {
        Ok(())
    } else {
        Err(EngineError::UnsupportedFileType {
            file_name: file_name.to_string(),
            allowed: DECLARATION_FILE_EXTENSIONS.join("/"),
        })
    }
}

fn ensure_permitted(domain: Domain, status: &str, action: Action) -> EngineResult<()> {
    if action_permitted(domain, status, action) {
        Ok(())
    } else {
        Err(EngineError::InvalidTransition {
            status: status.to_string(),
            action: action.label().to_string(),
        })
    }
}

// ==========================================
// 订单里程碑 (到港 / 上网)
// ==========================================

/// 到港确认: 写入到港日期,状态不推进
///
/// 状态是否应由服务端在到港后推进尚无定论,这里只记录日期
pub fn record_arrival(order: &OrderRecord, arrival_time: &str) -> EngineResult<OrderRecord> {
    ensure_permitted(Domain::Order, &order.status, Action::MarkArrival)?;
    let ts = parse_dialog_time("到港时间", arrival_time)?;
    let mut next = order.clone();
    next.arrival_date = ts.format("%Y/%m/%d").to_string();
    Ok(next)
}

/// 上网确认: 纯信息性里程碑,校验输入后原样返回副本
pub fn record_online(order: &OrderRecord, online_time: &str) -> EngineResult<OrderRecord> {
    ensure_permitted(Domain::Order, &order.status, Action::MarkOnline)?;
    parse_dialog_time("上网时间", online_time)?;
    Ok(order.clone())
}

// ==========================================
// 清关里程碑 (回传报关单 / 完成清关)
// ==========================================

/// 回传初步报关单: 附加文件引用,状态不变
pub fn upload_declaration(
    clearance: &ClearanceRecord,
    file_name: &str,
) -> EngineResult<ClearanceRecord> {
    ensure_permitted(Domain::Clearance, &clearance.status, Action::UploadDeclaration)?;
    validate_declaration_file(file_name)?;
    let mut next = clearance.clone();
    next.declaration_docs.push(file_name.to_string());
    Ok(next)
}

/// 回传最终报关单(清关完成后)
pub fn upload_final_declaration(
    clearance: &ClearanceRecord,
    file_name: &str,
) -> EngineResult<ClearanceRecord> {
    ensure_permitted(
        Domain::Clearance,
        &clearance.status,
        Action::UploadFinalDeclaration,
    )?;
    validate_declaration_file(file_name)?;
    let mut next = clearance.clone();
    next.declaration_docs.push(file_name.to_string());
    Ok(next)
}

/// 完成清关: 写入清关完成时间,状态 清关中 → 清关完成
pub fn complete_clearance(
    clearance: &ClearanceRecord,
    clearance_time: &str,
) -> EngineResult<ClearanceRecord> {
    ensure_permitted(Domain::Clearance, &clearance.status, Action::CompleteClearance)?;
    parse_dialog_time("清关完成时间", clearance_time)?;
    let mut next = clearance.clone();
    next.clearance_time = clearance_time.to_string();
    next.status = OrderStatus::Cleared.as_str().to_string();
    Ok(next)
}

// ==========================================
// 附件审核
// ==========================================

/// 审核附件: 写入审核结果/日期/审核人
///
/// 审核不通过必须给出备注
pub fn review_attachment(
    attachment: &Attachment,
    result: ReviewResult,
    remark: &str,
    reviewer: &str,
    review_date: &str,
) -> EngineResult<Attachment> {
    match result {
        ReviewResult::Pending => {
            return Err(EngineError::MissingField("审核结果".to_string()));
        }
        ReviewResult::Failed if remark.trim().is_empty() => {
            return Err(EngineError::MissingRemark);
        }
        _ => {}
    }
    let mut next = attachment.clone();
    next.review_result = result;
    next.remark = remark.to_string();
    next.reviewer = reviewer.to_string();
    next.review_date = review_date.to_string();
    Ok(next)
}

// ==========================================
// 派送里程碑
// ==========================================
// 每步推进一个状态并写入时间(派送页的"实际时间"列)

fn advance_delivery(
    delivery: &DeliveryRecord,
    action: Action,
    to: DeliveryStatus,
    time: &str,
) -> EngineResult<DeliveryRecord> {
    ensure_permitted(Domain::Delivery, &delivery.status, action)?;
    let ts = parse_dialog_time(action.label(), time)?;
    let mut next = delivery.clone();
    next.status = to.as_str().to_string();
    next.scheduled_time = ts.format("%Y/%m/%d %H:%M").to_string();
    Ok(next)
}

/// 预约提柜: 待预约提柜 → 已预约提柜,写入预约提柜时间
pub fn book_pickup(delivery: &DeliveryRecord, time: &str) -> EngineResult<DeliveryRecord> {
    advance_delivery(delivery, Action::BookPickup, DeliveryStatus::PickupBooked, time)
}

/// 确认提柜: 已预约提柜 → 已提柜
pub fn confirm_pickup(delivery: &DeliveryRecord, time: &str) -> EngineResult<DeliveryRecord> {
    advance_delivery(delivery, Action::ConfirmPickup, DeliveryStatus::PickedUp, time)
}

/// 放置堆场: 已提柜 → 放置堆场
pub fn place_in_yard(delivery: &DeliveryRecord, time: &str) -> EngineResult<DeliveryRecord> {
    advance_delivery(delivery, Action::PlaceInYard, DeliveryStatus::InYard, time)
}

/// 派送预约: 放置堆场 → 出派中
pub fn schedule_delivery(delivery: &DeliveryRecord, time: &str) -> EngineResult<DeliveryRecord> {
    advance_delivery(delivery, Action::ScheduleDelivery, DeliveryStatus::Delivering, time)
}

/// 确认交货: 出派中 → 已签收
pub fn confirm_delivery(delivery: &DeliveryRecord, time: &str) -> EngineResult<DeliveryRecord> {
    advance_delivery(delivery, Action::ConfirmDelivery, DeliveryStatus::Received, time)
}

/// 归还货柜: 已签收 → 已还柜
pub fn return_container(delivery: &DeliveryRecord, time: &str) -> EngineResult<DeliveryRecord> {
    advance_delivery(
        delivery,
        Action::ReturnContainer,
        DeliveryStatus::ContainerReturned,
        time,
    )
}

// ==========================================
// 收入 / 付款里程碑
// ==========================================

/// 确认收入: 待确认 → 已确认,写入确认日期
pub fn confirm_income(income: &IncomeRecord, confirm_time: &str) -> EngineResult<IncomeRecord> {
    ensure_permitted(Domain::Income, &income.status, Action::ConfirmIncome)?;
    let ts = parse_dialog_time("确认日期", confirm_time)?;
    let mut next = income.clone();
    next.status = "已确认".to_string();
    next.confirm_date = ts.format("%Y/%m/%d").to_string();
    Ok(next)
}

/// 付款审核: 通过 → 待付款,驳回 → 已关闭
pub fn review_payment(payment: &PaymentRecord, approved: bool) -> EngineResult<PaymentRecord> {
    ensure_permitted(Domain::Payment, &payment.status, Action::ReviewPayment)?;
    let mut next = payment.clone();
    next.status = if approved {
        PaymentStatus::AwaitingPayment.as_str().to_string()
    } else {
        PaymentStatus::Closed.as_str().to_string()
    };
    Ok(next)
}

/// 缴费: 待付款 → 已付款,写入已付金额与付款日期
pub fn pay_fee(payment: &PaymentRecord, amount: f64, pay_time: &str) -> EngineResult<PaymentRecord> {
    ensure_permitted(Domain::Payment, &payment.status, Action::PayFee)?;
    let ts = parse_dialog_time("付款日期", pay_time)?;
    if amount <= 0.0 {
        return Err(EngineError::MissingField("付款金额".to_string()));
    }
    let mut next = payment.clone();
    next.status = PaymentStatus::Paid.as_str().to_string();
    next.paid_amount = amount;
    next.payment_date = ts.format("%Y/%m/%d").to_string();
    Ok(next)
}
