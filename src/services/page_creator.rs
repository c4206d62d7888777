//! 页面创建服务 - 业务能力层
//!
//! 复制基础页面得到新页面，目标路径已存在时直接覆盖

use tracing::{debug, info};

use crate::api::{copy_baseline, PageName, SiteContext};
use crate::error::AppResult;
use crate::infrastructure::SharedTransport;

/// 页面创建服务
pub struct PageCreator {
    transport: SharedTransport,
    site: SiteContext,
    baseline: PageName,
}

impl PageCreator {
    /// 创建新的页面创建服务
    ///
    /// `baseline` 是当前站点 SitePages 下被复制的页面
    pub fn new(transport: SharedTransport, site: SiteContext, baseline: PageName) -> Self {
        Self {
            transport,
            site,
            baseline,
        }
    }

    /// 在当前站点创建（或覆盖）页面
    ///
    /// 返回远端的确认内容，调用方不应依赖其结构
    pub async fn create_page(&self, name: &PageName) -> AppResult<String> {
        info!(
            "🆕 创建页面 {} (站点: {}, 基础页面: {})",
            name,
            self.site.web_url(),
            self.baseline
        );

        let request = copy_baseline(&self.site, &self.baseline, name)?;
        let confirmation = self.transport.send(request).await?;

        debug!("创建页面确认: {} 字节", confirmation.len());
        Ok(confirmation)
    }
}
