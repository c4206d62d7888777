//! # Modern Page Copy
//!
//! 复制 SharePoint 现代页面：读取模板页面的内容和元数据，在当前站点
//! 创建新页面，再把模板内容写进去。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有唯一的 HTTP 客户端，只暴露能力
//! - `HttpExecutor` - 实现 `Transport`，负责发送请求和状态码检查
//!
//! ### ② 请求构造（API）
//! - `api/` - `PageName` 校验和 Site Pages REST 请求构造
//!
//! ### ③ 业务能力层（Services）
//! - `PageReader` - 按名称读取页面
//! - `PageCreator` - 复制基础页面得到新页面（覆盖同名页面）
//! - `PageUpdater` - MERGE 覆盖页面字段
//!
//! ### ④ 流程层（Workflow）
//! - `PageCopyFlow` - 读取模板 → 创建 → 读取目标 → 写入内容
//!
//! ### ⑤ 编排层（Orchestration）
//! - `App` - 校验输入、调用流程、返回跳转地址
//!
//! ## 模块结构

pub mod api;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use api::{PageName, SiteContext};
pub use config::Config;
pub use error::{AppError, AppResult, CopyStage};
pub use infrastructure::{HttpExecutor, SharedTransport, Transport};
pub use models::{CopiedPage, CopyOutcome, CopyRequest, PageRecord};
pub use orchestrator::{App, Submission};
pub use workflow::PageCopyFlow;
