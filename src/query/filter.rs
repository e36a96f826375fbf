// ==========================================
// 清关派送跟单管理系统 - 列表查询过滤层
// ==========================================
// 依据: 跟单业务流程说明 - 搜索区 + 页签联合过滤
// 职责: (集合, 当前页签, 搜索字段) → 可见子集
// 红线: 1) 纯函数,稳定过滤,保持集合原始顺序
//       2) 子串匹配区分大小写,不做模糊/归一化
//       3) 空结果是正常的"暂无数据",不是错误
// ==========================================

use crate::domain::delivery::DeliveryRecord;
use crate::domain::finance::{IncomeRecord, PaymentRecord};
use crate::domain::order::{ClearanceRecord, OrderRecord};
use crate::domain::types::Domain;
use crate::engine::error::EngineResult;
use crate::query::tabs::{resolve_tab_status, TabStatus};
use std::collections::BTreeMap;

// ==========================================
// FilterSource - 记录的可过滤视图
// ==========================================

/// 列表记录暴露给过滤层的只读视图
///
/// 搜索键沿用前端字段名(billNo/customerCode/…);
/// 记录不具备的搜索键返回 None,对非空搜索值永远不匹配
pub trait FilterSource {
    fn status(&self) -> &str;
    fn filter_field(&self, key: &str) -> Option<&str>;
}

/// 过滤集合: 页签状态谓词 + 各搜索字段子串匹配,AND 组合
///
/// # 参数
/// - records: 完整集合(顺序即展示顺序)
/// - domain: 业务域(决定页签表)
/// - tab_key: 当前页签键
/// - filters: 搜索字段 → 输入文本(空文本忽略)
///
/// # 返回
/// - Ok(Vec<&R>): 可见子集,保持输入顺序
/// - Err(UnknownTab): 页签未注册
pub fn filter_records<'a, R: FilterSource>(
    records: &'a [R],
    domain: Domain,
    tab_key: &str,
    filters: &BTreeMap<String, String>,
) -> EngineResult<Vec<&'a R>> {
    let tab = resolve_tab_status(domain, tab_key)?;

    let visible = records
        .iter()
        .filter(|record| match tab {
            TabStatus::All => true,
            TabStatus::Status(status) => record.status() == status,
        })
        .filter(|record| {
            filters
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .all(|(key, value)| {
                    record
                        .filter_field(key)
                        .map(|field| field.contains(value.as_str()))
                        .unwrap_or(false)
                })
        })
        .collect();

    Ok(visible)
}

// ==========================================
// 各记录类型的过滤视图实现
// ==========================================

impl FilterSource for OrderRecord {
    fn status(&self) -> &str {
        &self.status
    }

    fn filter_field(&self, key: &str) -> Option<&str> {
        match key {
            "billNo" => Some(&self.bill_no),
            "containerNo" => Some(&self.container_no),
            "customerCode" => Some(&self.customer_code),
            "port" => Some(&self.port),
            "agent" => Some(&self.agent),
            "recipient" => Some(&self.recipient),
            "shipping" => Some(&self.shipping),
            "date" => Some(&self.estimated_date),
            _ => None,
        }
    }
}

impl FilterSource for ClearanceRecord {
    fn status(&self) -> &str {
        &self.status
    }

    fn filter_field(&self, key: &str) -> Option<&str> {
        match key {
            "billNo" => Some(&self.bill_no),
            "containerNo" => Some(&self.container_no),
            "customerCode" => Some(&self.customer_code),
            "port" => Some(&self.port),
            "agent" => Some(&self.agent),
            "recipient" => Some(&self.recipient),
            "shipping" => Some(&self.shipping),
            _ => None,
        }
    }
}

impl FilterSource for DeliveryRecord {
    fn status(&self) -> &str {
        &self.status
    }

    fn filter_field(&self, key: &str) -> Option<&str> {
        match key {
            "billNo" => Some(&self.bill_no),
            "containerNo" => Some(&self.container_no),
            "customerCode" => Some(&self.customer_code),
            "company" => Some(&self.company),
            "driver" => Some(&self.driver),
            "phone" => Some(&self.phone),
            _ => None,
        }
    }
}

impl FilterSource for IncomeRecord {
    fn status(&self) -> &str {
        &self.status
    }

    fn filter_field(&self, key: &str) -> Option<&str> {
        match key {
            "businessNo" => Some(&self.business_no),
            "customer" => Some(&self.customer),
            "country" => Some(&self.country),
            "service" => Some(&self.service),
            "businessDate" => Some(&self.business_date),
            _ => None,
        }
    }
}

impl FilterSource for PaymentRecord {
    fn status(&self) -> &str {
        &self.status
    }

    fn filter_field(&self, key: &str) -> Option<&str> {
        match key {
            "businessNo" => Some(&self.business_no),
            "requestNo" => Some(&self.request_no),
            "supplier" => Some(&self.supplier),
            "service" => Some(&self.service),
            "country" => Some(&self.country),
            "reason" => Some(&self.payment_reason),
            "applicant" => Some(&self.creator),
            "createTime" => Some(&self.create_time),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::FeeFlags;

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn order(id: &str, bill_no: &str, status: &str) -> OrderRecord {
        OrderRecord {
            id: id.to_string(),
            bill_no: bill_no.to_string(),
            container_no: "CSNU6927227".to_string(),
            shipping: "COSCO".to_string(),
            port: "DMM".to_string(),
            customer_code: "JK025".to_string(),
            agent: "AM".to_string(),
            recipient: "XXX".to_string(),
            estimated_date: "2015/11/10".to_string(),
            shipping_date: String::new(),
            arrival_date: String::new(),
            status: status.to_string(),
            fees: FeeFlags::default(),
        }
    }

    fn filters(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==========================================
    // 页签谓词
    // ==========================================

    #[test]
    fn test_all_tab_returns_everything_in_order() {
        let records = vec![
            order("1", "55-58558", "资料待审核"),
            order("2", "55-58559", "清关中"),
            order("3", "55-58560", "清关中"),
        ];
        let visible =
            filter_records(&records, Domain::Order, "all", &BTreeMap::new()).unwrap();
        assert_eq!(visible.len(), 3);
        // 顺序保持不变
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[1].id, "2");
        assert_eq!(visible[2].id, "3");
    }

    #[test]
    fn test_clearing_tab_keeps_only_matching_status() {
        let records = vec![
            order("1", "55-58558", "资料待审核"),
            order("2", "55-58559", "清关中"),
            order("3", "55-58560", "清关中"),
        ];
        let visible =
            filter_records(&records, Domain::Order, "clearing", &BTreeMap::new()).unwrap();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, "2");
        assert_eq!(visible[1].id, "3");
    }

    #[test]
    fn test_unknown_tab_propagates_error() {
        let records = vec![order("1", "55-58558", "清关中")];
        assert!(filter_records(&records, Domain::Order, "whatever", &BTreeMap::new()).is_err());
    }

    // ==========================================
    // 字段子串匹配
    // ==========================================

    #[test]
    fn test_bill_no_substring_match() {
        let records = vec![
            order("1", "55-58558", "清关中"),
            order("2", "55-58560", "清关中"),
        ];
        let visible =
            filter_records(&records, Domain::Order, "all", &filters(&[("billNo", "558")]))
                .unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].bill_no, "55-58558");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let records = vec![order("1", "55-58558", "清关中")];
        assert!(
            filter_records(&records, Domain::Order, "all", &filters(&[("shipping", "cosco")]))
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            filter_records(&records, Domain::Order, "all", &filters(&[("shipping", "COSCO")]))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_filters_combine_with_and() {
        let records = vec![
            order("1", "55-58558", "清关中"),
            order("2", "55-58559", "清关中"),
        ];
        let visible = filter_records(
            &records,
            Domain::Order,
            "clearing",
            &filters(&[("billNo", "58559"), ("customerCode", "JK")]),
        )
        .unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_empty_filter_value_is_ignored() {
        let records = vec![order("1", "55-58558", "清关中")];
        let visible =
            filter_records(&records, Domain::Order, "all", &filters(&[("billNo", "")])).unwrap();
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_unknown_filter_key_never_matches() {
        let records = vec![order("1", "55-58558", "清关中")];
        assert!(filter_records(
            &records,
            Domain::Order,
            "all",
            &filters(&[("deliveryCompany", "运输")])
        )
        .unwrap()
        .is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = vec![
            order("1", "55-58558", "清关中"),
            order("2", "55-58559", "资料待审核"),
        ];
        let query = filters(&[("billNo", "55")]);
        let first = filter_records(&records, Domain::Order, "clearing", &query).unwrap();
        let second = filter_records(&records, Domain::Order, "clearing", &query).unwrap();
        let first_ids: Vec<&str> = first.iter().map(|r| r.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_empty_collection_yields_empty_result() {
        let records: Vec<OrderRecord> = vec![];
        assert!(filter_records(&records, Domain::Order, "all", &BTreeMap::new())
            .unwrap()
            .is_empty());
    }
}
