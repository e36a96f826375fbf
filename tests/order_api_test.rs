// ==========================================
// 上游取数 + 订单代理集成测试
// ==========================================
// 测试范围:
// 1. OrderApiClient 对假上游的分页拉取与字段规范化
// 2. 非 2xx 响应按统一口径报错(消息携带状态码)
// 3. 代理服务原样中继 / 上游失败统一 500 {"error"}
// ==========================================

use std::sync::Arc;
use std::thread;

use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use customs_freight_ops::api::order_api::OrderApiClient;
use customs_freight_ops::api::proxy::{proxy_orders, ProxyQuery, ProxyState};
use customs_freight_ops::api::ApiError;
use tiny_http::{Header, Response, Server};

// ==========================================
// 测试辅助函数
// ==========================================

const PAGE_BODY: &str = r#"{
  "code": 0,
  "message": "ok",
  "data": {
    "items": [
      {
        "id": 17,
        "statuss": "清关中",
        "orderNo": "OD-001",
        "waybillNo": "55-58558",
        "orderDate": "2025-11-10T00:00:00",
        "containerNo": {},
        "shipperName": "COSCO",
        "custPort": "DMM",
        "customerName": "JK025",
        "consigneeName": "XXX"
      }
    ],
    "total": 1,
    "pageIndex": 1,
    "pageSize": 10,
    "totalPages": 1
  }
}"#;

/// 启动只应答一次的假上游,返回(基地址, 线程句柄)
fn spawn_upstream(
    status: u16,
    body: &'static str,
    expect_query: &'static str,
) -> (String, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").expect("启动假上游失败");
    let base = format!("http://{}/api", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("等待请求失败");
        assert!(
            request.url().starts_with("/api/dynamic/order-base-info"),
            "意外的转发路径: {}",
            request.url()
        );
        assert!(
            request.url().contains(expect_query),
            "缺少分页参数: {}",
            request.url()
        );
        let response = Response::from_string(body).with_status_code(status).with_header(
            Header::from_bytes("Content-Type", "application/json").expect("构造响应头失败"),
        );
        request.respond(response).expect("应答失败");
    });

    (base, handle)
}

// ==========================================
// OrderApiClient
// ==========================================

#[tokio::test]
async fn test_fetch_page_normalizes_items() {
    let (base, handle) = spawn_upstream(200, PAGE_BODY, "pageIndex=1&pageSize=10");

    let client = OrderApiClient::new(base);
    let page = client.fetch_page(1, 10).await.expect("拉取失败");

    assert_eq!(page.total, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.orders.len(), 1);

    let order = &page.orders[0];
    assert_eq!(order.id, "17");
    assert_eq!(order.bill_no, "55-58558");
    assert_eq!(order.status, "清关中");
    // 对象形状字段收敛为空串
    assert_eq!(order.container_no, "");
    assert_eq!(order.estimated_date, "2025/11/10");

    handle.join().expect("上游线程异常");
}

#[tokio::test]
async fn test_fetch_page_surfaces_http_status() {
    let (base, handle) = spawn_upstream(500, r#"{"error":"boom"}"#, "pageIndex=2");

    let client = OrderApiClient::new(base);
    let err = client.fetch_page(2, 50).await.expect_err("应当失败");
    match &err {
        ApiError::UpstreamStatus { status } => assert_eq!(*status, 500),
        other => panic!("错误类型不符: {other}"),
    }
    // 消息口径: API请求失败: <状态码>
    assert_eq!(err.to_string(), "API请求失败: 500");

    handle.join().expect("上游线程异常");
}

// ==========================================
// 代理服务
// ==========================================

#[tokio::test]
async fn test_proxy_relays_body_verbatim() {
    let (base, handle) = spawn_upstream(200, PAGE_BODY, "pageIndex=1&pageSize=10");
    let state = Arc::new(ProxyState::new(base));

    // 缺省分页参数取 1/10
    let response = proxy_orders(
        State(state),
        Query(ProxyQuery {
            page_index: None,
            page_size: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("读取响应体失败");
    assert_eq!(std::str::from_utf8(&body).expect("非 UTF8 响应"), PAGE_BODY);

    handle.join().expect("上游线程异常");
}

#[tokio::test]
async fn test_proxy_maps_upstream_failure_to_500() {
    let (base, handle) = spawn_upstream(404, "not found", "pageIndex=3&pageSize=20");
    let state = Arc::new(ProxyState::new(base));

    let response = proxy_orders(
        State(state),
        Query(ProxyQuery {
            page_index: Some("3".to_string()),
            page_size: Some("20".to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("读取响应体失败");
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("响应体不是 JSON");
    assert_eq!(payload["error"], "API请求失败: 404");

    handle.join().expect("上游线程异常");
}

#[tokio::test]
async fn test_proxy_unreachable_upstream_is_500() {
    // 不可达端口: 连接失败也走统一 500 口径
    let state = Arc::new(ProxyState::new("http://127.0.0.1:1/api"));
    let response = proxy_orders(
        State(state),
        Query(ProxyQuery {
            page_index: None,
            page_size: None,
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
