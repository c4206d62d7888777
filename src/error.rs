use std::fmt;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 远程 API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 页面名称校验失败
    #[error("页面名称错误: {0}")]
    PageName(#[from] PageNameError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 复制流程中某一阶段失败
    #[error("阶段 {stage} 失败: {source}")]
    Stage {
        stage: CopyStage,
        #[source]
        source: Box<AppError>,
    },
}

/// 页面复制流程的四个阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStage {
    ReadTemplate,
    CreateDestination,
    ReadDestination,
    WriteContent,
}

impl fmt::Display for CopyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CopyStage::ReadTemplate => "READ_TEMPLATE",
            CopyStage::CreateDestination => "CREATE_DESTINATION",
            CopyStage::ReadDestination => "READ_DESTINATION",
            CopyStage::WriteContent => "WRITE_CONTENT",
        };
        f.write_str(name)
    }
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 返回非 2xx 状态码
    #[error("API返回错误响应 ({endpoint}): status={status}, body={body}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// JSON 序列化/解析失败
    #[error("JSON解析失败: {0}")]
    JsonParseFailed(#[from] serde_json::Error),
    /// 请求构造失败
    #[error("无效的请求 {url}: {reason}")]
    InvalidRequest { url: String, reason: String },
}

/// 页面名称校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageNameError {
    #[error("页面名称不能为空")]
    Empty,
    #[error("页面名称 '{name}' 太短 (需要超过 {min} 个字符)")]
    TooShort { name: String, min: usize },
    #[error("页面名称太长 ({len} > {max})")]
    TooLong { len: usize, max: usize },
    #[error("页面名称 '{name}' 包含非法字符 {ch:?}")]
    IllegalChar { name: String, ch: char },
    #[error("页面名称 '{name}' 不能以 '.' 开头或结尾，也不能包含 '..'")]
    IllegalDots { name: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必填配置项缺失
    #[error("配置项 {key} 不能为空")]
    Missing { key: &'static str },
    /// 配置值无效
    #[error("配置项 {key} 的值 '{value}' 无效: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 将错误包装为某一阶段的失败
    pub fn at_stage(stage: CopyStage, source: AppError) -> Self {
        AppError::Stage {
            stage,
            source: Box::new(source),
        }
    }

    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 失败所在的阶段（如果有）
    pub fn stage(&self) -> Option<CopyStage> {
        match self {
            AppError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// 是否为写入内容阶段的失败
    pub fn is_write_failed(&self) -> bool {
        self.stage() == Some(CopyStage::WriteContent)
    }

    /// 远程返回的 HTTP 状态码（如果有）
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AppError::Api(ApiError::BadStatus { status, .. }) => Some(*status),
            AppError::Stage { source, .. } => source.http_status(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed(err))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
