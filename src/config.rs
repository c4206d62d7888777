use std::path::Path;

use serde::Deserialize;

use crate::error::{AppResult, ConfigError};

/// 指定 TOML 配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PAGE_COPY_CONFIG";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 当前站点的绝对地址
    pub site_url: String,
    /// 模板所在站点（站点集合相对路径）
    pub template_site_relative_url: String,
    /// 模板页面名称（不带扩展名）
    pub template_name: String,
    /// 输入框标签
    pub field_title: String,
    /// 新页面复制自的基础页面（不带扩展名）
    pub baseline_page: String,
    /// 访问令牌（Bearer）
    pub access_token: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            template_site_relative_url: String::new(),
            template_name: "Template".to_string(),
            field_title: "Page name".to_string(),
            baseline_page: "Home".to_string(),
            access_token: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            site_url: std::env::var("SITE_URL").unwrap_or(default.site_url),
            template_site_relative_url: std::env::var("TEMPLATE_SITE_RELATIVE_URL").unwrap_or(default.template_site_relative_url),
            template_name: std::env::var("TEMPLATE_NAME").unwrap_or(default.template_name),
            field_title: std::env::var("FIELD_TITLE").unwrap_or(default.field_title),
            baseline_page: std::env::var("BASELINE_PAGE").unwrap_or(default.baseline_page),
            access_token: std::env::var("ACCESS_TOKEN").ok().filter(|v| !v.is_empty()).or(default.access_token),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 字符串解析配置，缺失的键使用默认值
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Self::parse_toml(content, "<inline>")
    }

    /// 从 TOML 文件加载配置
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: display.clone(),
            source,
        })?;
        Self::parse_toml(&content, &display)
    }

    /// 如果设置了 `PAGE_COPY_CONFIG` 则读取该文件，否则读取环境变量
    pub fn load() -> AppResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::from_toml_file(Path::new(&path)),
            _ => Ok(Self::from_env()),
        }
    }

    fn parse_toml(content: &str, path: &str) -> AppResult<Self> {
        let config = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 校验构造时必须的配置项
    pub fn validate(&self) -> AppResult<()> {
        if self.site_url.trim().is_empty() {
            return Err(ConfigError::Missing { key: "site_url" }.into());
        }
        if !self.site_url.starts_with("https://") && !self.site_url.starts_with("http://") {
            return Err(ConfigError::Invalid {
                key: "site_url",
                value: self.site_url.clone(),
                reason: "必须是绝对地址".to_string(),
            }
            .into());
        }
        if !self.template_site_relative_url.is_empty() && !self.template_site_relative_url.starts_with('/') {
            return Err(ConfigError::Invalid {
                key: "template_site_relative_url",
                value: self.template_site_relative_url.clone(),
                reason: "必须以 '/' 开头".to_string(),
            }
            .into());
        }
        if self.template_name.trim().is_empty() {
            return Err(ConfigError::Missing { key: "template_name" }.into());
        }
        if self.baseline_page.trim().is_empty() {
            return Err(ConfigError::Missing { key: "baseline_page" }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_from_toml_str_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            site_url = "https://contoso.sharepoint.com/sites/News"
            template_site_relative_url = "/sites/Hub"
            "#,
        )
        .unwrap();

        assert_eq!(config.site_url, "https://contoso.sharepoint.com/sites/News");
        assert_eq!(config.template_site_relative_url, "/sites/Hub");
        assert_eq!(config.template_name, "Template");
        assert_eq!(config.baseline_page, "Home");
        assert!(config.access_token.is_none());
        assert_ok!(config.validate());
    }

    #[test]
    fn test_from_toml_str_rejects_bad_syntax() {
        let result = Config::from_toml_str("site_url = ");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::TomlParseFailed { .. }))
        ));
    }

    #[test]
    fn test_validate_requires_absolute_site_url() {
        let mut config = Config::default();
        assert_err!(config.validate());

        config.site_url = "contoso.sharepoint.com/sites/News".to_string();
        assert_err!(config.validate());

        config.site_url = "https://contoso.sharepoint.com/sites/News".to_string();
        config.template_site_relative_url = "sites/Hub".to_string();
        assert_err!(config.validate());
    }

    #[test]
    fn test_from_toml_file_missing() {
        let result = Config::from_toml_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::ReadFailed { .. }))
        ));
    }
}
