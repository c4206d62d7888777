//! 页面内容更新服务 - 业务能力层

use tracing::info;

use crate::api::{merge_update, SiteContext};
use crate::error::AppResult;
use crate::infrastructure::SharedTransport;
use crate::models::PageFields;
use crate::utils::logging::truncate_text;

/// 页面内容更新服务
///
/// 用 MERGE + `IF-MATCH: *` 覆盖目标列表项的字段，不做版本冲突检测
pub struct PageUpdater {
    transport: SharedTransport,
    site: SiteContext,
}

impl PageUpdater {
    pub fn new(transport: SharedTransport, site: SiteContext) -> Self {
        Self { transport, site }
    }

    /// 覆盖页面内容
    ///
    /// # 参数
    /// - `page_id`: 远端分配的列表项 ID
    /// - `fields`: 要写入的字段
    pub async fn update_page_content(&self, page_id: i64, fields: &PageFields) -> AppResult<()> {
        info!(
            "✏️ 更新页面 ID {} 的内容: \"{}\"",
            page_id,
            truncate_text(fields.canvas_content.as_deref().unwrap_or_default(), 80)
        );

        let request = merge_update(&self.site, page_id, fields)?;
        self.transport.send(request).await?;

        Ok(())
    }
}
