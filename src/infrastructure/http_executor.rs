//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"发送请求"的能力

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use tracing::{debug, warn};

use crate::api::SpRequest;
use crate::error::{ApiError, AppError, AppResult};

/// 请求传输能力
///
/// 返回 2xx 响应的正文，其他状态码一律转换为 [`ApiError::BadStatus`]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: SpRequest) -> AppResult<String>;
}

/// 共享的传输实现
pub type SharedTransport = Arc<dyn Transport>;

/// HTTP 执行器
///
/// 职责：
/// - 持有唯一的 reqwest Client
/// - 附加认证头
/// - 不认识页面 / 模板
/// - 不处理业务流程
pub struct HttpExecutor {
    client: Client,
    access_token: Option<String>,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            access_token,
        }
    }

    fn build_headers(&self, request: &SpRequest) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidRequest {
                url: request.url.to_string(),
                reason: format!("无效的请求头名称 {}: {}", name, e),
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidRequest {
                url: request.url.to_string(),
                reason: format!("无效的请求头 {}: {}", name, e),
            })?;
            headers.insert(header_name, header_value);
        }

        if let Some(token) = &self.access_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                ApiError::InvalidRequest {
                    url: request.url.to_string(),
                    reason: format!("无效的访问令牌: {}", e),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpExecutor {
    async fn send(&self, request: SpRequest) -> AppResult<String> {
        let endpoint = request.endpoint();
        debug!("发送请求: {} {}", request.method, request.url);

        let headers = self.build_headers(&request)?;
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.clone(), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.clone(), e))?;

        if !status.is_success() {
            warn!("请求失败: {} -> {}", endpoint, status);
            return Err(ApiError::BadStatus {
                endpoint,
                status: status.as_u16(),
                body,
            }
            .into());
        }

        debug!("请求成功: {} -> {} ({} 字节)", endpoint, status, body.len());
        Ok(body)
    }
}
