// ==========================================
// 清关派送跟单管理系统 - 上游订单取数客户端
// ==========================================
// 依据: 上游 order-base-info 分页接口
// 职责: 分页拉取 + 信封解包 + 宽松字段规范化
// 红线: 上游字段形状不可信("字符串或对象"),一律在
//       边界处强制收敛为字符串,缺失/畸形取空串,
//       绝不把歧义形状放进领域层
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::order::{FeeFlags, OrderRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

// ==========================================
// 上游响应信封 {code, message, data}
// ==========================================

#[derive(Debug, Deserialize)]
pub struct OrderApiResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<OrderApiPage>,
}

#[derive(Debug, Deserialize)]
pub struct OrderApiPage {
    #[serde(default)]
    pub items: Vec<RawOrderItem>,
    #[serde(default)]
    pub total: i64,
    #[serde(default, rename = "pageIndex")]
    pub page_index: i64,
    #[serde(default, rename = "pageSize")]
    pub page_size: i64,
    #[serde(default, rename = "totalPages")]
    pub total_pages: i64,
}

/// 上游订单条目(原始形状)
///
/// 上游把多数字段声明为"字符串或对象",因此这里全部
/// 用 Value 承接,由 normalize_order 收敛
#[derive(Debug, Default, Deserialize)]
pub struct RawOrderItem {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub statuss: Value,
    #[serde(default, rename = "orderNo")]
    pub order_no: Value,
    #[serde(default, rename = "waybillNo")]
    pub waybill_no: Value,
    #[serde(default, rename = "orderDate")]
    pub order_date: Value,
    #[serde(default, rename = "containerNo")]
    pub container_no: Value,
    #[serde(default, rename = "shipperName")]
    pub shipper_name: Value,
    #[serde(default, rename = "custPort")]
    pub cust_port: Value,
    #[serde(default, rename = "customerName")]
    pub customer_name: Value,
    #[serde(default, rename = "consigneeName")]
    pub consignee_name: Value,
}

/// 规范化后的分页结果
#[derive(Debug, Clone, Serialize)]
pub struct OrderPage {
    pub orders: Vec<OrderRecord>,
    pub total: i64,
    pub page_index: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

// ==========================================
// 字段收敛
// ==========================================

/// 字符串字段收敛: 仅接受 JSON 字符串,其余(对象/null/数字)取空串
fn coerce_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

/// 标识字段收敛: 数字与字符串都接受(上游 id 为数字)
fn coerce_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// 日期收敛: ISO 日期(时间)串 → yyyy/MM/dd,解析失败取空串
fn coerce_date(value: &Value) -> String {
    let Value::String(s) = value else {
        return String::new();
    };
    let date_part = s.get(..10).unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%Y/%m/%d").to_string())
        .unwrap_or_default()
}

/// 把上游条目规范化为订单记录
///
/// 提单号取值顺序: waybillNo → orderNo → 空串
pub fn normalize_order(item: &RawOrderItem) -> OrderRecord {
    let waybill = coerce_str(&item.waybill_no);
    let bill_no = if waybill.is_empty() {
        coerce_str(&item.order_no)
    } else {
        waybill
    };

    OrderRecord {
        id: coerce_id(&item.id),
        bill_no,
        container_no: coerce_str(&item.container_no),
        shipping: coerce_str(&item.shipper_name),
        port: coerce_str(&item.cust_port),
        customer_code: coerce_str(&item.customer_name),
        agent: String::new(),
        recipient: coerce_str(&item.consignee_name),
        estimated_date: coerce_date(&item.order_date),
        shipping_date: String::new(),
        arrival_date: String::new(),
        status: coerce_str(&item.statuss),
        fees: FeeFlags::default(),
    }
}

// ==========================================
// OrderApiClient - 上游取数客户端
// ==========================================

/// 上游订单接口客户端
///
/// 无重试、无缓存: 失败直接上抛,由页面提示后人工重试
pub struct OrderApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OrderApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// 分页拉取订单列表
    ///
    /// # 返回
    /// - Ok(OrderPage): 规范化后的条目 + 分页元数据
    /// - Err(ApiError): 非 2xx / 传输 / 解析失败
    pub async fn fetch_page(&self, page_index: u32, page_size: u32) -> ApiResult<OrderPage> {
        let url = format!(
            "{}/dynamic/order-base-info?pageIndex={}&pageSize={}",
            self.base_url, page_index, page_size
        );
        debug!(page_index, page_size, "拉取订单列表");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "上游返回非 2xx");
            return Err(ApiError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let envelope: OrderApiResponse = response.json().await?;
        let page = envelope.data.ok_or(ApiError::EnvelopeError {
            code: envelope.code,
            message: envelope.message,
        })?;

        debug!(count = page.items.len(), total = page.total, "订单列表拉取完成");
        Ok(OrderPage {
            orders: page.items.iter().map(normalize_order).collect(),
            total: page.total,
            page_index: page.page_index,
            page_size: page.page_size,
            total_pages: page.total_pages,
        })
    }
}
