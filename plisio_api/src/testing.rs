//! In-memory transport for unit tests.

use std::sync::Mutex;

use crate::{request::HttpRequest, response::HttpResponse, transport::Transport, Error};

/// Records every request and answers each with the same canned response.
#[derive(Debug)]
pub(crate) struct Recorder {
    reply: HttpResponse,
    sent: Mutex<Vec<HttpRequest>>,
}

impl Recorder {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: HttpResponse::new(status, body),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn last(&self) -> Option<HttpRequest> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn record(&self, request: HttpRequest) -> HttpResponse {
        self.sent.lock().unwrap().push(request);
        self.reply.clone()
    }
}

impl Transport for Recorder {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        Ok(self.record(request))
    }
}

#[cfg(feature = "blocking")]
impl crate::blocking::BlockingTransport for Recorder {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        Ok(self.record(request))
    }
}
