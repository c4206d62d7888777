//! API 模块
//!
//! 负责构造所有发往 Site Pages REST 接口的请求

pub mod page_name;
pub mod site_pages;

// 重新导出常用类型
pub use page_name::PageName;
pub use site_pages::{copy_baseline, merge_update, page_query, SiteContext, SpRequest};
