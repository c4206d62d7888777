//! 测试用的脚本化传输实现

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::SpRequest;
use crate::error::{ApiError, AppResult};
use crate::infrastructure::Transport;

/// 预设的响应
pub(crate) enum Reply {
    Body(String),
    Status(u16),
}

/// 按顺序返回预设响应，并记录收到的请求
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<SpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<SpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: SpRequest) -> AppResult<String> {
        let endpoint = request.endpoint();
        self.requests.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(ApiError::BadStatus {
                endpoint,
                status,
                body: String::new(),
            }
            .into()),
            None => panic!("没有为 {} 预设响应", endpoint),
        }
    }
}
