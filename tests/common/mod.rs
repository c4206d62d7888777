//! 内存中的 Site Pages 模拟实现

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use modern_page_copy::api::SpRequest;
use modern_page_copy::error::{ApiError, AppResult};
use modern_page_copy::models::{PageFields, PageRecord};
use modern_page_copy::Transport;
use regex::Regex;
use serde_json::json;

pub const SITE_URL: &str = "https://contoso.sharepoint.com/sites/News";

/// 收到的请求类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Query { site: String, file: String },
    CopyTo { from: String, to: String },
    Merge { site: String, id: i64 },
}

#[derive(Default)]
struct State {
    /// (站点路径, 文件名) -> 页面
    pages: BTreeMap<(String, String), PageRecord>,
    next_id: i64,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct FakeSite {
    state: Mutex<State>,
}

impl FakeSite {
    pub fn new() -> Self {
        let site = Self::default();
        site.state.lock().unwrap().next_id = 1;
        site
    }

    /// 放入一个页面，返回分配的 ID
    pub fn put_page(&self, site: &str, name: &str, canvas: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.pages.insert(
            (site.to_string(), format!("{}.aspx", name)),
            PageRecord {
                id,
                title: Some(name.to_string()),
                canvas_content: Some(canvas.to_string()),
                layout_type: Some("Article".to_string()),
                banner_image: None,
                banner_image_offset: None,
                description: None,
            },
        );
        id
    }

    pub fn set_fields(&self, site: &str, name: &str, fields: PageFields) {
        let mut state = self.state.lock().unwrap();
        let page = state
            .pages
            .get_mut(&(site.to_string(), format!("{}.aspx", name)))
            .unwrap();
        apply(page, fields);
    }

    pub fn page(&self, site: &str, name: &str) -> Option<PageRecord> {
        self.state
            .lock()
            .unwrap()
            .pages
            .get(&(site.to_string(), format!("{}.aspx", name)))
            .cloned()
    }

    pub fn count(&self, site: &str, name: &str) -> usize {
        let file = format!("{}.aspx", name);
        self.state
            .lock()
            .unwrap()
            .pages
            .keys()
            .filter(|(s, f)| s == site && f.eq_ignore_ascii_case(&file))
            .count()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn merge_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Merge { .. }))
            .count()
    }
}

fn apply(page: &mut PageRecord, fields: PageFields) {
    page.canvas_content = fields.canvas_content;
    page.title = fields.title;
    page.layout_type = fields.layout_type;
    page.banner_image = fields.banner_image;
    page.banner_image_offset = fields.banner_image_offset;
    page.description = fields.description;
}

fn not_found(request: &SpRequest) -> AppResult<String> {
    Err(ApiError::BadStatus {
        endpoint: request.endpoint(),
        status: 404,
        body: "File Not Found.".to_string(),
    }
    .into())
}

/// 还原路径中的 `%XX` 转义，服务端按解码后的文件名匹配
fn percent_decode(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Ok(b) = u8::from_str_radix(&path[i + 1..i + 3], 16) {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap()
}

/// "/sites/News/SitePages/Home.aspx" -> ("/sites/News", "Home.aspx")
fn split_page_path(path: &str) -> (String, String) {
    let (site, file) = path.rsplit_once("/SitePages/").unwrap();
    (site.to_string(), file.to_string())
}

#[async_trait]
impl Transport for FakeSite {
    async fn send(&self, request: SpRequest) -> AppResult<String> {
        let path = percent_decode(request.url.path());
        let (site, api) = path.split_once("/_api/").unwrap();
        let site = site.to_string();
        let mut state = self.state.lock().unwrap();

        if request.method == reqwest::Method::GET {
            let filter = request
                .url
                .query_pairs()
                .find(|(k, _)| k == "$filter")
                .map(|(_, v)| v.into_owned())
                .unwrap();
            let file = filter
                .trim_start_matches("FileLeafRef eq '")
                .trim_end_matches('\'')
                .to_string();
            state.calls.push(Call::Query {
                site: site.clone(),
                file: file.clone(),
            });

            let value: Vec<_> = state.pages.get(&(site, file)).into_iter().cloned().collect();
            return Ok(json!({ "value": value }).to_string());
        }

        if api.contains("/CopyTo(") {
            let re = Regex::new(
                r"GetFileByServerRelativeUrl\('([^']*)'\)/CopyTo\(strnewurl='([^']*)',bOverwrite=true\)",
            )
            .unwrap();
            let caps = re.captures(api).unwrap();
            let (from, to) = (caps[1].to_string(), caps[2].to_string());
            state.calls.push(Call::CopyTo {
                from: from.clone(),
                to: to.clone(),
            });

            let Some(source) = state.pages.get(&split_page_path(&from)).cloned() else {
                return not_found(&request);
            };
            let key = split_page_path(&to);
            let id = match state.pages.get(&key) {
                Some(existing) => existing.id,
                None => {
                    let id = state.next_id;
                    state.next_id += 1;
                    id
                }
            };
            state.pages.insert(key, PageRecord { id, ..source });
            return Ok(json!({ "odata.null": true }).to_string());
        }

        if request.header_value("X-HTTP-Method") == Some("MERGE") {
            let id: i64 = Regex::new(r"items\((\d+)\)$").unwrap().captures(api).unwrap()[1]
                .parse()
                .unwrap();
            state.calls.push(Call::Merge {
                site: site.clone(),
                id,
            });

            let fields: PageFields = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
            let Some(page) = state
                .pages
                .iter_mut()
                .find(|((s, _), p)| *s == site && p.id == id)
                .map(|(_, p)| p)
            else {
                return not_found(&request);
            };
            apply(page, fields);
            return Ok(String::new());
        }

        panic!("未知请求: {}", request.endpoint());
    }
}
