// ==========================================
// 清关派送跟单管理系统 - 配置层
// ==========================================
// 职责: 环境变量驱动的运行配置
// 约定: 上游地址是系统唯一的外部环境契约
// ==========================================

use serde::{Deserialize, Serialize};
use std::env;

/// 上游订单接口默认地址
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "http://8.134.102.174:8002/api";

/// 代理服务默认监听地址
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8787";

/// 默认分页大小
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 运行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub upstream_base_url: String,
    pub listen_addr: String,
    pub default_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// 从环境变量读取配置
    ///
    /// # 环境变量
    /// - CUSTOMS_API_BASE_URL: 上游订单接口基地址
    /// - PROXY_LISTEN_ADDR: 代理服务监听地址
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upstream_base_url: env::var("CUSTOMS_API_BASE_URL")
                .unwrap_or(defaults.upstream_base_url),
            listen_addr: env::var("PROXY_LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            default_page_size: defaults.default_page_size,
        }
    }
}
