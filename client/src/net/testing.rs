//! Recording transport for exercising `AudienceClient` without a network.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::{ApiError, ApiRequest, ApiResponse, HttpTransport};

#[derive(Default)]
pub(crate) struct FakeTransport {
    pub requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl FakeTransport {
    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport(message.to_owned())));
        self
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_owned())))
    }
}
