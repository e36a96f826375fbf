// ==========================================
// 清关派送跟单管理系统 - 订单代理服务入口
// ==========================================
// 技术栈: tokio + axum
// 系统定位: 低风险内部后台的协议中继
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use customs_freight_ops::api::proxy::{router, ProxyState};
use customs_freight_ops::config::AppConfig;
use customs_freight_ops::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 订单代理服务", customs_freight_ops::APP_NAME);
    tracing::info!("系统版本: {}", customs_freight_ops::VERSION);
    tracing::info!("==================================================");

    // 读取运行配置
    let config = AppConfig::from_env();
    tracing::info!("上游接口: {}", config.upstream_base_url);
    tracing::info!("监听地址: {}", config.listen_addr);

    let state = Arc::new(ProxyState::new(config.upstream_base_url.clone()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("无法监听 {}", config.listen_addr))?;

    axum::serve(listener, app)
        .await
        .context("代理服务异常退出")?;

    Ok(())
}
