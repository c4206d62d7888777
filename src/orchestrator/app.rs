//! 应用外壳 - 编排层

use std::sync::Arc;

use tracing::{error, info};

use crate::api::{PageName, SiteContext};
use crate::config::Config;
use crate::error::{AppError, AppResult, PageNameError};
use crate::infrastructure::{HttpExecutor, SharedTransport};
use crate::models::CopyOutcome;
use crate::utils::logging::log_startup;
use crate::workflow::PageCopyFlow;

/// 输入的页面名称必须超过这个长度（去除空白之前计算）
pub const MIN_PAGE_NAME_LEN: usize = 3;

/// 错误回调
pub type ErrorHook = Box<dyn Fn(&AppError) + Send + Sync>;

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: CopyOutcome,
    /// 调用方应跳转到的页面地址
    pub page_url: String,
}

/// 应用主结构
pub struct App {
    config: Config,
    template_name: PageName,
    flow: PageCopyFlow,
    error_hook: Option<ErrorHook>,
}

impl App {
    /// 初始化应用，使用真实的 HTTP 执行器
    pub fn initialize(config: Config) -> AppResult<Self> {
        let transport: SharedTransport = Arc::new(HttpExecutor::new(config.access_token.clone()));
        Self::with_transport(config, transport)
    }

    /// 使用指定的传输实现初始化
    pub fn with_transport(config: Config, transport: SharedTransport) -> AppResult<Self> {
        config.validate()?;

        let site = SiteContext::new(&config.site_url)?;
        let baseline = PageName::parse(&config.baseline_page)?;
        let template_name = PageName::parse(&config.template_name)?;

        log_startup(
            site.web_url(),
            &format!("{}/{}", config.template_site_relative_url, template_name),
        );

        Ok(Self {
            flow: PageCopyFlow::new(transport, site, baseline),
            template_name,
            config,
            error_hook: None,
        })
    }

    /// 设置错误回调，`submit` 返回错误前会先调用它
    pub fn with_error_hook(mut self, hook: impl Fn(&AppError) + Send + Sync + 'static) -> Self {
        self.error_hook = Some(Box::new(hook));
        self
    }

    /// 输入框标签
    pub fn field_title(&self) -> &str {
        &self.config.field_title
    }

    pub fn site(&self) -> &SiteContext {
        self.flow.site()
    }

    /// 校验用户输入并去除所有空白
    pub fn prepare_name(raw: &str) -> Result<PageName, PageNameError> {
        if raw.chars().count() <= MIN_PAGE_NAME_LEN {
            return Err(PageNameError::TooShort {
                name: raw.to_string(),
                min: MIN_PAGE_NAME_LEN,
            });
        }

        let without_spaces: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        PageName::parse(&without_spaces)
    }

    /// 处理一次提交
    ///
    /// # 参数
    /// - `raw_name`: 用户输入的页面名称
    ///
    /// # 返回
    /// 复制结果和目标页面地址
    pub async fn submit(&self, raw_name: &str) -> AppResult<Submission> {
        let result = self.try_submit(raw_name).await;

        if let Err(e) = &result {
            error!("❌ 页面复制失败: {}", e);
            if let Some(hook) = &self.error_hook {
                hook(e);
            }
        }

        result
    }

    async fn try_submit(&self, raw_name: &str) -> AppResult<Submission> {
        let destination = Self::prepare_name(raw_name)?;
        info!("📝 提交页面名称: {}", destination);

        let outcome = self
            .flow
            .copy_page(
                &self.config.template_site_relative_url,
                &self.template_name,
                &destination,
            )
            .await?;

        Ok(Submission {
            outcome,
            page_url: self.site().page_url(&destination),
        })
    }
}
