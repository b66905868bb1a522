//! Blocking HTTP transport backed by ureq.

use tracing::debug;
use wishlist_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        // Status codes are the core's business, so 4xx/5xx come back as data.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = &self.agent;
        let body = req.body.as_deref().unwrap_or("");
        let result = match req.method {
            HttpMethod::Get => with_headers(agent.get(&req.path), &req.headers).call(),
            HttpMethod::Delete => with_headers(agent.delete(&req.path), &req.headers).call(),
            HttpMethod::Post => {
                with_headers(agent.post(&req.path), &req.headers).send(body.as_bytes())
            }
            HttpMethod::Put => {
                with_headers(agent.put(&req.path), &req.headers).send(body.as_bytes())
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!("read {} bytes", body.len());

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
