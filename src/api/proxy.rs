// ==========================================
// 清关派送跟单管理系统 - 订单代理服务
// ==========================================
// 依据: 上游 order-base-info 接口的跨域转发需求
// 职责: GET /order-proxy?pageIndex=&pageSize= → 原样转发
//       上游 JSON,附宽松跨域头;上游失败统一 500 {"error"}
// 红线: 纯协议中继,无缓存/无重试/无退避
// ==========================================

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// 代理服务共享状态
pub struct ProxyState {
    http: reqwest::Client,
    upstream_base: String,
}

impl ProxyState {
    pub fn new(upstream_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            upstream_base: upstream_base.into(),
        }
    }
}

/// 分页查询参数(原样保留字符串,默认 1/10)
#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    #[serde(rename = "pageIndex")]
    pub page_index: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// 构建代理路由(宽松 CORS,OPTIONS 预检由中间件处理)
pub fn router(state: Arc<ProxyState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/order-proxy", get(proxy_orders))
        .layer(cors)
        .with_state(state)
}

/// 转发订单列表请求
pub async fn proxy_orders(
    State(state): State<Arc<ProxyState>>,
    Query(query): Query<ProxyQuery>,
) -> Response {
    let page_index = query.page_index.as_deref().unwrap_or("1");
    let page_size = query.page_size.as_deref().unwrap_or("10");
    info!(page_index, page_size, "转发订单列表请求");

    match relay(&state, page_index, page_size).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(message) => {
            error!(%message, "订单代理转发失败");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message })))
                .into_response()
        }
    }
}

async fn relay(state: &ProxyState, page_index: &str, page_size: &str) -> Result<String, String> {
    let url = format!(
        "{}/dynamic/order-base-info?pageIndex={}&pageSize={}",
        state.upstream_base, page_index, page_size
    );

    let response = state
        .http
        .get(&url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("API请求失败: {}", status.as_u16()));
    }

    // 原样中继响应体,不做信封改写
    response.text().await.map_err(|e| e.to_string())
}
