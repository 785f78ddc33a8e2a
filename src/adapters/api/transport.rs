use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::ports::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, RepositoryError, RepositoryResult,
};

/// `HttpTransport` over a shared reqwest client. No timeout is configured;
/// a hung request waits until the peer or the OS gives up.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> RepositoryResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("task-attachments/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RepositoryError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> RepositoryResult<HttpResponse> {
        tracing::debug!(
            "{} {} (authorization: {})",
            request.method,
            request.url,
            if request.header_value("Authorization").is_some() { "set" } else { "none" }
        );

        let mut builder = self.client.request(method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        tracing::debug!("API Response ({}): {}", status, body);

        Ok(HttpResponse::new(status, body))
    }
}
