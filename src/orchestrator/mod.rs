//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层是页面复制的调用入口，相当于原来网页部件里的表单按钮。
//!
//! ### `app` - 应用外壳
//! - 校验配置，构造 HttpExecutor 和 SiteContext（显式注入，不从容器查找）
//! - 校验用户输入的页面名称（长度、去除空白、非法字符）
//! - 调用 `workflow::PageCopyFlow` 完成复制
//! - 返回跳转地址，出错时调用错误回调
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (处理用户输入)
//!     ↓
//! workflow::PageCopyFlow (四个阶段)
//!     ↓
//! services (能力层：read / create / update)
//!     ↓
//! api (请求构造) + infrastructure (HttpExecutor)
//! ```

pub mod app;

pub use app::{App, ErrorHook, Submission, MIN_PAGE_NAME_LEN};
