//! 页面名称
//!
//! 页面名称会被拼接进 OData 查询和 CopyTo 命令的字符串字面量中，
//! 所以只有通过校验的 [`PageName`] 才能进入请求构造器。

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::PageNameError;

/// 页面名称最大长度（不含 `.aspx`）
pub const MAX_PAGE_NAME_LEN: usize = 128;

/// SharePoint 文件名和 OData 字面量中不能出现的字符
static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"*:<>?/\\|#%&~{}\p{Cc}]"#).expect("valid regex"));

/// 已校验的页面叶子文件名（不含扩展名）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageName(String);

impl PageName {
    pub fn parse(raw: &str) -> Result<Self, PageNameError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(PageNameError::Empty);
        }

        let len = name.chars().count();
        if len > MAX_PAGE_NAME_LEN {
            return Err(PageNameError::TooLong {
                len,
                max: MAX_PAGE_NAME_LEN,
            });
        }

        if let Some(m) = ILLEGAL_CHARS.find(name) {
            let ch = m.as_str().chars().next().unwrap_or_default();
            return Err(PageNameError::IllegalChar {
                name: name.to_string(),
                ch,
            });
        }

        if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
            return Err(PageNameError::IllegalDots {
                name: name.to_string(),
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 带 `.aspx` 扩展名的文件名
    pub fn file_name(&self) -> String {
        format!("{}.aspx", self.0)
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for PageName {
    type Error = PageNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
