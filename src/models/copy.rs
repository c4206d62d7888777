use std::fmt::Display;

use crate::api::PageName;

/// 一次复制操作的输入
#[derive(Debug, Clone)]
pub struct CopyRequest {
    /// 模板所在站点（站点集合相对路径，可以是当前站点）
    pub template_site_relative_url: String,
    /// 模板页面名称
    pub source_name: PageName,
    /// 目标页面名称（调用方已去除空白）
    pub destination_name: PageName,
}

impl CopyRequest {
    pub fn new(
        template_site_relative_url: impl Into<String>,
        source_name: PageName,
        destination_name: PageName,
    ) -> Self {
        Self {
            template_site_relative_url: template_site_relative_url.into(),
            source_name,
            destination_name,
        }
    }
}

impl Display for CopyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[模板 {}/{} -> 页面 {}]",
            self.template_site_relative_url, self.source_name, self.destination_name
        )
    }
}

/// 已完成复制的目标页面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedPage {
    pub page_id: i64,
    pub title: Option<String>,
    pub page_url: String,
}

/// 复制结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// 内容已写入目标页面
    Copied(CopiedPage),
    /// 模板不存在，目标页面已创建但未写入内容
    TemplateNotFound,
    /// 创建后读取不到目标页面，未写入内容
    DestinationNotFound,
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}
