// ==========================================
// 清关派送跟单管理系统 - 演示数据集
// ==========================================
// 职责: 后端接通前各列表页的离线数据
// ==========================================

use crate::domain::attachment::Attachment;
use crate::domain::delivery::DeliveryRecord;
use crate::domain::finance::{IncomeRecord, PaymentRecord};
use crate::domain::order::{ClearanceRecord, FeeFlags, OrderRecord};
use crate::domain::types::ReviewResult;

/// 订单列表演示数据
pub fn mock_orders() -> Vec<OrderRecord> {
    vec![
        OrderRecord {
            id: "1".to_string(),
            bill_no: "55-58558".to_string(),
            container_no: "CSNU6927227".to_string(),
            shipping: "COSCO".to_string(),
            port: "DMM".to_string(),
            customer_code: "JK025".to_string(),
            agent: "AM".to_string(),
            recipient: "XXX".to_string(),
            estimated_date: "2015/11/10".to_string(),
            shipping_date: String::new(),
            arrival_date: String::new(),
            status: "资料待审核".to_string(),
            fees: FeeFlags::default(),
        },
        OrderRecord {
            id: "2".to_string(),
            bill_no: "55-58555".to_string(),
            container_no: "CSNU6927226".to_string(),
            shipping: "COSCO".to_string(),
            port: "DMM".to_string(),
            customer_code: "JK025".to_string(),
            agent: "AM".to_string(),
            recipient: "XXX".to_string(),
            estimated_date: "2015/11/10".to_string(),
            shipping_date: String::new(),
            arrival_date: String::new(),
            status: "资料待审核".to_string(),
            fees: FeeFlags::default(),
        },
    ]
}

/// 清关列表演示数据
pub fn mock_clearances() -> Vec<ClearanceRecord> {
    vec![
        ClearanceRecord {
            id: "1".to_string(),
            bill_no: "55-58559".to_string(),
            status: "清关中".to_string(),
            container_no: "CSNU6927227".to_string(),
            shipping: "COSCO".to_string(),
            port: "DMM".to_string(),
            customer_code: "JK025".to_string(),
            agent: "AM".to_string(),
            recipient: "XXX".to_string(),
            clearance_date: "2025/12/12".to_string(),
            clearance_time: String::new(),
            declaration_docs: vec![],
            fees: FeeFlags {
                do_fee: true,
                port: true,
                tax: false,
            },
        },
        ClearanceRecord {
            id: "2".to_string(),
            bill_no: "55-58558".to_string(),
            status: "清关中".to_string(),
            container_no: "CSNU6927227".to_string(),
            shipping: "COSCO".to_string(),
            port: "DMM".to_string(),
            customer_code: "JK025".to_string(),
            agent: "AM".to_string(),
            recipient: "XXX".to_string(),
            clearance_date: "2025/12/12".to_string(),
            clearance_time: String::new(),
            declaration_docs: vec![],
            fees: FeeFlags {
                do_fee: true,
                port: true,
                tax: false,
            },
        },
    ]
}

/// 派送列表演示数据(待预约/出派中/已签收三段)
pub fn mock_deliveries() -> Vec<DeliveryRecord> {
    vec![
        DeliveryRecord {
            id: "1".to_string(),
            bill_no: "55-58558".to_string(),
            container_no: "CSNU6927227".to_string(),
            container_type: "40尺".to_string(),
            status: "待预约提柜".to_string(),
            customer_code: "JK025".to_string(),
            company: "运输公司1".to_string(),
            driver: "司机1".to_string(),
            phone: "1234567891".to_string(),
            scheduled_time: "2025/12/12 23:26".to_string(),
        },
        DeliveryRecord {
            id: "2".to_string(),
            bill_no: "55-58555".to_string(),
            container_no: "CSNU6927226".to_string(),
            container_type: "40尺".to_string(),
            status: "待预约提柜".to_string(),
            customer_code: "JK025".to_string(),
            company: "运输公司1".to_string(),
            driver: "司机2".to_string(),
            phone: "1234567892".to_string(),
            scheduled_time: String::new(),
        },
        DeliveryRecord {
            id: "3".to_string(),
            bill_no: "55-58558".to_string(),
            container_no: "CSNU6927226".to_string(),
            container_type: "40尺".to_string(),
            status: "出派中".to_string(),
            customer_code: "JK025".to_string(),
            company: "运输公司1".to_string(),
            driver: "司机1".to_string(),
            phone: "1234567891".to_string(),
            scheduled_time: "2025/12/12 23:26".to_string(),
        },
        DeliveryRecord {
            id: "4".to_string(),
            bill_no: "55-58558".to_string(),
            container_no: "CSNU6927226".to_string(),
            container_type: "40尺".to_string(),
            status: "已签收".to_string(),
            customer_code: "JK025".to_string(),
            company: "运输公司1".to_string(),
            driver: "司机1".to_string(),
            phone: "1234567891".to_string(),
            scheduled_time: "2025/12/12 23:26".to_string(),
        },
    ]
}

/// 收入确认演示数据
pub fn mock_incomes() -> Vec<IncomeRecord> {
    vec![
        IncomeRecord {
            id: "1".to_string(),
            business_no: "55-58558".to_string(),
            customer: "客户2".to_string(),
            country: "SA".to_string(),
            service: "清关".to_string(),
            status: "待确认".to_string(),
            business_date: "2025/11/20".to_string(),
            confirm_date: String::new(),
            currency: "SAR".to_string(),
            amount: 8866.0,
            remark: String::new(),
            creator: "jim".to_string(),
            create_time: "2025/11/24".to_string(),
        },
        IncomeRecord {
            id: "2".to_string(),
            business_no: "55-58555".to_string(),
            customer: "客户1".to_string(),
            country: "SA".to_string(),
            service: "清关".to_string(),
            status: "待确认".to_string(),
            business_date: "2025/11/14".to_string(),
            confirm_date: String::new(),
            currency: "SAR".to_string(),
            amount: 633.0,
            remark: String::new(),
            creator: "jim".to_string(),
            create_time: "2025/11/24".to_string(),
        },
        IncomeRecord {
            id: "3".to_string(),
            business_no: "55-58558".to_string(),
            customer: "客户2".to_string(),
            country: "SA".to_string(),
            service: "清关".to_string(),
            status: "已确认".to_string(),
            business_date: "2025/11/20".to_string(),
            confirm_date: "2025/11/25".to_string(),
            currency: "SAR".to_string(),
            amount: 8866.0,
            remark: String::new(),
            creator: "jim".to_string(),
            create_time: "2025/11/24".to_string(),
        },
        IncomeRecord {
            id: "4".to_string(),
            business_no: "55-58555".to_string(),
            customer: "客户1".to_string(),
            country: "SA".to_string(),
            service: "清关".to_string(),
            status: "已确认".to_string(),
            business_date: "2025/11/14".to_string(),
            confirm_date: "2025/11/24".to_string(),
            currency: "SAR".to_string(),
            amount: 633.0,
            remark: String::new(),
            creator: "jim".to_string(),
            create_time: "2025/11/24".to_string(),
        },
    ]
}

/// 付款申请演示数据(四个状态各一段)
pub fn mock_payments() -> Vec<PaymentRecord> {
    let base = PaymentRecord {
        id: String::new(),
        request_no: "PKSQ251125001".to_string(),
        business_no: "55-58558".to_string(),
        service: "清关".to_string(),
        country: "SA".to_string(),
        supplier: "供应商1".to_string(),
        currency: "SAR".to_string(),
        request_amount: 8866.0,
        paid_amount: 0.0,
        payment_reason: "DO款".to_string(),
        payment_date: String::new(),
        status: String::new(),
        remark: String::new(),
        creator: "jim".to_string(),
        create_time: "2025/11/24".to_string(),
    };

    vec![
        PaymentRecord {
            id: "1".to_string(),
            status: "待审核".to_string(),
            ..base.clone()
        },
        PaymentRecord {
            id: "2".to_string(),
            request_no: "PKSQ251124001".to_string(),
            business_no: "55-58555".to_string(),
            request_amount: 633.0,
            payment_reason: "港杂费".to_string(),
            status: "待审核".to_string(),
            ..base.clone()
        },
        PaymentRecord {
            id: "3".to_string(),
            status: "待付款".to_string(),
            ..base.clone()
        },
        PaymentRecord {
            id: "4".to_string(),
            paid_amount: 8866.0,
            payment_date: "2025/12/12".to_string(),
            status: "已付款".to_string(),
            ..base.clone()
        },
        PaymentRecord {
            id: "5".to_string(),
            status: "已关闭".to_string(),
            ..base
        },
    ]
}

/// 审核资料页演示附件
pub fn mock_attachments() -> Vec<Attachment> {
    vec![
        Attachment {
            id: "1".to_string(),
            doc_type: "提单文件".to_string(),
            file_name: "td.pdf".to_string(),
            review_result: ReviewResult::Passed,
            remark: String::new(),
            review_date: "2025/11/22".to_string(),
            reviewer: "steven".to_string(),
        },
        Attachment {
            id: "2".to_string(),
            doc_type: "装箱单".to_string(),
            file_name: "z.pdf".to_string(),
            review_result: ReviewResult::Passed,
            remark: String::new(),
            review_date: "2025/11/22".to_string(),
            reviewer: "steven".to_string(),
        },
        Attachment {
            id: "3".to_string(),
            doc_type: "发票".to_string(),
            file_name: "f.pdf".to_string(),
            review_result: ReviewResult::Failed,
            remark: "申报金额过低".to_string(),
            review_date: "2025/11/22".to_string(),
            reviewer: "steven".to_string(),
        },
        Attachment {
            id: "4".to_string(),
            doc_type: "SABER".to_string(),
            file_name: "a.pdf;b.pdf".to_string(),
            review_result: ReviewResult::Passed,
            remark: String::new(),
            review_date: "2025/11/22".to_string(),
            reviewer: "steven".to_string(),
        },
        Attachment {
            id: "5".to_string(),
            doc_type: "清关授权函".to_string(),
            file_name: "qgsqh.pdf".to_string(),
            review_result: ReviewResult::Passed,
            remark: String::new(),
            review_date: "2025/11/22".to_string(),
            reviewer: "steven".to_string(),
        },
        Attachment {
            id: "6".to_string(),
            doc_type: "船司授权函".to_string(),
            file_name: "cssqh.pdf".to_string(),
            review_result: ReviewResult::Passed,
            remark: String::new(),
            review_date: "2025/11/22".to_string(),
            reviewer: "steven".to_string(),
        },
    ]
}
