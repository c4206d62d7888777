use serde::{Deserialize, Serialize};

/// 页面横幅图片
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerImageReference {
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Url", default)]
    pub url: Option<String>,
}

/// 页面在读取时刻的字段值
///
/// `id` 由远端分配，只有在页面创建之后才能读到
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "CanvasContent1", default)]
    pub canvas_content: Option<String>,
    #[serde(rename = "PageLayoutType", default)]
    pub layout_type: Option<String>,
    #[serde(rename = "BannerImageUrl", default)]
    pub banner_image: Option<BannerImageReference>,
    #[serde(rename = "BannerImageOffset", default)]
    pub banner_image_offset: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl PageRecord {
    /// 取出需要复制到目标页面的字段
    pub fn fields(&self) -> PageFields {
        PageFields {
            canvas_content: self.canvas_content.clone(),
            title: self.title.clone(),
            layout_type: self.layout_type.clone(),
            banner_image: self.banner_image.clone(),
            banner_image_offset: self.banner_image_offset.clone(),
            description: self.description.clone(),
        }
    }
}

/// 写入目标页面的字段集合（MERGE 请求体）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFields {
    #[serde(rename = "CanvasContent1")]
    pub canvas_content: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "PageLayoutType")]
    pub layout_type: Option<String>,
    #[serde(rename = "BannerImageUrl")]
    pub banner_image: Option<BannerImageReference>,
    #[serde(rename = "BannerImageOffset")]
    pub banner_image_offset: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}
