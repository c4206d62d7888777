//! 页面读取服务 - 业务能力层
//!
//! 只负责"按名称找到页面"能力，不关心流程

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{page_query, PageName, SiteContext};
use crate::error::AppResult;
use crate::infrastructure::SharedTransport;
use crate::models::PageRecord;

/// 页面读取服务
///
/// 职责：
/// - 在站点的页面库中按叶子文件名查询页面
/// - 没有匹配或响应格式不对时返回 `None`，不视为错误
/// - 传输层错误原样向上传递
pub struct PageReader {
    transport: SharedTransport,
    current_site_url: String,
}

impl PageReader {
    /// 创建新的页面读取服务
    pub fn new(transport: SharedTransport, site: &SiteContext) -> Self {
        Self {
            transport,
            current_site_url: site.web_url().to_string(),
        }
    }

    /// 按名称读取页面
    ///
    /// # 参数
    /// - `name`: 页面名称（不带扩展名）
    /// - `site_url`: 站点绝对地址，`None` 表示当前站点
    ///
    /// # 返回
    /// 第一条匹配记录，没有匹配时返回 `None`
    pub async fn get_page_by_name(
        &self,
        name: &PageName,
        site_url: Option<&str>,
    ) -> AppResult<Option<PageRecord>> {
        let site_url = site_url.unwrap_or(&self.current_site_url);
        info!("📄 读取页面 {} (站点: {})", name, site_url);

        let request = page_query(site_url, name)?;
        let body = self.transport.send(request).await?;

        let page = parse_first_record(&body);
        match &page {
            Some(record) => debug!("找到页面 {} (ID: {})", name, record.id),
            None => warn!("⚠️ 站点 {} 中没有找到页面 {}", site_url, name),
        }

        Ok(page)
    }
}

/// 从 `{ "value": [...] }` 中取出第一条记录
fn parse_first_record(body: &str) -> Option<PageRecord> {
    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(e) => {
            warn!("页面查询响应不是有效的 JSON: {}", e);
            return None;
        }
    };

    let first = json.get("value")?.as_array()?.first()?;

    match serde_json::from_value(first.clone()) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("页面记录格式不正确: {}", e);
            None
        }
    }
}
