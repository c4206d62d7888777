//! Site Pages REST 请求构造
//!
//! 负责把页面名称、站点地址和字段值拼成完整的 [`SpRequest`]，
//! 不发送请求。

use reqwest::{Method, Url};
use serde_json::json;

use crate::api::PageName;
use crate::error::{ApiError, AppResult};
use crate::models::PageFields;

/// 页面库的列表标题
pub const SITE_PAGES_LIST: &str = "Site Pages";

/// 页面库在站点下的文件夹
pub const SITE_PAGES_FOLDER: &str = "SitePages";

/// 读取页面时选择的字段
pub const PAGE_SELECT_FIELDS: &str =
    "ID,Title,CanvasContent1,PageLayoutType,BannerImageUrl,BannerImageOffset,Description";

/// 页面列表项的实体类型
pub const SITE_PAGES_ITEM_TYPE: &str = "SP.Data.SitePagesItem";

const ACCEPT_NOMETADATA: &str = "application/json;odata=nometadata";
const CONTENT_TYPE_VERBOSE: &str = "application/json;odata=verbose";

/// 当前站点的地址信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    web_url: String,
    server_relative_path: String,
    origin: String,
}

impl SiteContext {
    /// 从当前站点的绝对地址推导
    pub fn new(site_url: &str) -> AppResult<Self> {
        let url = Url::parse(site_url).map_err(|e| ApiError::InvalidRequest {
            url: site_url.to_string(),
            reason: e.to_string(),
        })?;

        if url.host_str().is_none() {
            return Err(ApiError::InvalidRequest {
                url: site_url.to_string(),
                reason: "缺少主机名".to_string(),
            }
            .into());
        }

        Ok(Self {
            web_url: site_url.trim_end_matches('/').to_string(),
            server_relative_path: url.path().trim_end_matches('/').to_string(),
            origin: url.origin().ascii_serialization(),
        })
    }

    pub fn web_url(&self) -> &str {
        &self.web_url
    }

    /// 站点集合相对路径，根站点为空字符串
    pub fn server_relative_path(&self) -> &str {
        &self.server_relative_path
    }

    /// `scheme://host[:port]`
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// 将站点相对路径转换为绝对地址
    ///
    /// 空字符串表示当前站点，`/` 表示根站点集合
    pub fn resolve_site(&self, site_relative_url: &str) -> String {
        if site_relative_url.is_empty() {
            self.web_url.clone()
        } else {
            format!("{}{}", self.origin, site_relative_url.trim_end_matches('/'))
        }
    }

    /// 页面在站点中的服务器相对路径
    pub fn page_server_relative_url(&self, name: &PageName) -> String {
        format!(
            "{}/{}/{}",
            self.server_relative_path,
            SITE_PAGES_FOLDER,
            name.file_name()
        )
    }

    /// 页面的浏览地址
    pub fn page_url(&self, name: &PageName) -> String {
        format!("{}/{}/{}", self.web_url, SITE_PAGES_FOLDER, name.file_name())
    }
}

/// 待发送的请求
#[derive(Debug, Clone)]
pub struct SpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl SpRequest {
    fn new(method: Method, url: &str) -> AppResult<Self> {
        let url = Url::parse(url).map_err(|e| ApiError::InvalidRequest {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// 用于日志和错误信息的端点描述
    pub fn endpoint(&self) -> String {
        format!("{} {}", self.method, self.url.path())
    }

    /// 按名称查找请求头（不区分大小写）
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// OData 字符串字面量中的单引号需要写两次
fn odata_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// 按叶子文件名查询页面
pub fn page_query(site_url: &str, name: &PageName) -> AppResult<SpRequest> {
    let base = format!(
        "{}/_api/web/lists/GetByTitle('{}')/items",
        site_url.trim_end_matches('/'),
        SITE_PAGES_LIST
    );
    let mut request = SpRequest::new(Method::GET, &base)?;

    // 参数值需要完整编码，否则 `+` 会被服务端当成空格
    let filter = format!("FileLeafRef eq '{}'", odata_literal(&name.file_name()));
    request
        .url
        .query_pairs_mut()
        .append_pair("$select", PAGE_SELECT_FIELDS)
        .append_pair("$filter", &filter);

    Ok(request.header("Accept", ACCEPT_NOMETADATA))
}

/// 复制基础页面到目标名称，已存在的页面会被覆盖
pub fn copy_baseline(site: &SiteContext, baseline: &PageName, destination: &PageName) -> AppResult<SpRequest> {
    let url = format!(
        "{}/_api/Web/GetFileByServerRelativeUrl('{}')/CopyTo(strnewurl='{}',bOverwrite=true)",
        site.web_url(),
        odata_literal(&site.page_server_relative_url(baseline)),
        odata_literal(&site.page_server_relative_url(destination)),
    );

    Ok(SpRequest::new(Method::POST, &url)?
        .header("Accept", ACCEPT_NOMETADATA)
        .body(String::new()))
}

/// 以 MERGE 方式覆盖页面列表项的字段
pub fn merge_update(site: &SiteContext, page_id: i64, fields: &PageFields) -> AppResult<SpRequest> {
    let url = format!(
        "{}/_api/lists/getbytitle('{}')/items({})",
        site.web_url(),
        SITE_PAGES_LIST,
        page_id
    );

    let mut payload = serde_json::to_value(fields)?;
    payload["__metadata"] = json!({ "type": SITE_PAGES_ITEM_TYPE });
    let body = serde_json::to_string(&payload)?;

    Ok(SpRequest::new(Method::POST, &url)?
        .header("Accept", ACCEPT_NOMETADATA)
        .header("Content-Type", CONTENT_TYPE_VERBOSE)
        .header("odata-version", "")
        .header("IF-MATCH", "*")
        .header("X-HTTP-Method", "MERGE")
        .body(body))
}
