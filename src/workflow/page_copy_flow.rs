//! 页面复制流程 - 流程层
//!
//! 核心职责：定义"复制一个页面"的完整流程
//!
//! 流程顺序（严格串行，每一步等待上一步完成）：
//! 1. READ_TEMPLATE：读取模板页面
//! 2. CREATE_DESTINATION：复制基础页面得到目标页面（覆盖同名页面）
//! 3. READ_DESTINATION：重新读取目标页面，拿到远端分配的 ID
//! 4. WRITE_CONTENT：模板和目标都存在时，把模板字段写入目标
//!
//! 模板不存在时仍然会执行第 2、3 步，只跳过第 4 步。

use tracing::{info, warn};

use crate::api::{PageName, SiteContext};
use crate::error::{AppError, AppResult, CopyStage};
use crate::infrastructure::SharedTransport;
use crate::models::{CopiedPage, CopyOutcome, CopyRequest};
use crate::services::{PageCreator, PageReader, PageUpdater};
use crate::utils::logging::log_copy_summary;

/// 页面复制流程
///
/// - 编排读取 / 创建 / 读取 / 写入四个阶段
/// - 不重试，不捕获传输层错误，只给错误标上阶段
/// - 每次调用之间不共享任何状态
pub struct PageCopyFlow {
    site: SiteContext,
    reader: PageReader,
    creator: PageCreator,
    updater: PageUpdater,
}

impl PageCopyFlow {
    /// 创建新的页面复制流程
    pub fn new(transport: SharedTransport, site: SiteContext, baseline: PageName) -> Self {
        Self {
            reader: PageReader::new(transport.clone(), &site),
            creator: PageCreator::new(transport.clone(), site.clone(), baseline),
            updater: PageUpdater::new(transport, site.clone()),
            site,
        }
    }

    pub fn site(&self) -> &SiteContext {
        &self.site
    }

    /// 复制页面
    ///
    /// # 参数
    /// - `template_site_relative_url`: 模板所在站点，空字符串表示当前站点
    /// - `source_name`: 模板页面名称
    /// - `destination_name`: 目标页面名称
    pub async fn copy_page(
        &self,
        template_site_relative_url: &str,
        source_name: &PageName,
        destination_name: &PageName,
    ) -> AppResult<CopyOutcome> {
        let request = CopyRequest::new(
            template_site_relative_url,
            source_name.clone(),
            destination_name.clone(),
        );
        self.run(&request).await
    }

    pub async fn run(&self, request: &CopyRequest) -> AppResult<CopyOutcome> {
        info!("📑 开始复制 {}", request);

        // ========== 阶段 1: 读取模板 ==========
        let template_site = self.site.resolve_site(&request.template_site_relative_url);
        let template = self
            .reader
            .get_page_by_name(&request.source_name, Some(template_site.as_str()))
            .await
            .map_err(|e| AppError::at_stage(CopyStage::ReadTemplate, e))?;

        if template.is_none() {
            warn!("⚠️ {} 模板不存在，仍然创建目标页面", request);
        }

        // ========== 阶段 2: 创建目标页面 ==========
        self.creator
            .create_page(&request.destination_name)
            .await
            .map_err(|e| AppError::at_stage(CopyStage::CreateDestination, e))?;

        // ========== 阶段 3: 读取目标页面 ID ==========
        let destination = self
            .reader
            .get_page_by_name(&request.destination_name, None)
            .await
            .map_err(|e| AppError::at_stage(CopyStage::ReadDestination, e))?;

        // ========== 阶段 4: 写入内容 ==========
        let outcome = match (template, destination) {
            (Some(template), Some(destination)) => {
                self.updater
                    .update_page_content(destination.id, &template.fields())
                    .await
                    .map_err(|e| AppError::at_stage(CopyStage::WriteContent, e))?;

                CopyOutcome::Copied(CopiedPage {
                    page_id: destination.id,
                    title: template.title,
                    page_url: self.site.page_url(&request.destination_name),
                })
            }
            (None, _) => CopyOutcome::TemplateNotFound,
            (Some(_), None) => CopyOutcome::DestinationNotFound,
        };

        log_copy_summary(request, &outcome);
        Ok(outcome)
    }
}
