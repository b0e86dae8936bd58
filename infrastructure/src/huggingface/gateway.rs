//! Hosted inference gateway implementation

use super::response::{decode_body, excerpt};
use async_trait::async_trait;
use magi_application::{ArbiterConfig, GatewayError, InferenceGateway};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("magi-arbiter/", env!("CARGO_PKG_VERSION"));

/// Request body for a text-generation call
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Debug, Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
}

/// Inference gateway for HuggingFace-style hosted text generation.
///
/// One POST per call to `{endpoint_base}/{model_identifier}`. Deadlines are
/// enforced by the caller; this adapter only classifies what came back.
pub struct HuggingFaceGateway {
    client: reqwest::Client,
    endpoint_base: String,
    credential: Option<String>,
    max_new_tokens: u32,
}

impl HuggingFaceGateway {
    /// Create a gateway from the arbiter configuration
    pub fn new(config: &ArbiterConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(
            endpoint = %config.endpoint_base,
            authenticated = config.has_credential(),
            "HuggingFaceGateway initialized"
        );

        Ok(Self::with_client(client, config))
    }

    /// Create a gateway with an existing HTTP client
    pub fn with_client(client: reqwest::Client, config: &ArbiterConfig) -> Self {
        Self {
            client,
            endpoint_base: config.endpoint_base.trim_end_matches('/').to_string(),
            credential: config.credential.clone(),
            max_new_tokens: config.max_new_tokens,
        }
    }

    /// Endpoint URL for a model
    pub fn endpoint_for(&self, model_identifier: &str) -> String {
        format!("{}/{}", self.endpoint_base, model_identifier)
    }
}

fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

fn map_status(status: StatusCode, body: &str) -> GatewayError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::Unauthenticated(format!("HTTP {}", status.as_u16()))
        }
        _ => GatewayError::Status {
            status: status.as_u16(),
            body: excerpt(body),
        },
    }
}

#[async_trait]
impl InferenceGateway for HuggingFaceGateway {
    async fn generate(&self, model_identifier: &str, prompt: &str) -> Result<String, GatewayError> {
        let url = self.endpoint_for(model_identifier);
        let request = GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters {
                max_new_tokens: self.max_new_tokens,
            },
        };

        debug!(%url, "Sending generation request");

        let mut builder = self.client.post(&url).json(&request);
        if let Some(credential) = &self.credential {
            builder = builder.bearer_auth(credential);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(map_send_error)?;

        debug!(%url, status = status.as_u16(), bytes = body.len(), "Received response");

        if !status.is_success() {
            return Err(map_status(status, &body));
        }

        decode_body(&body, content_type.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magi_application::AgentClient;
    use magi_domain::{Agent, AgentRole, ErrorKind, Question, Vote};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response and hand back the raw request
    async fn serve_once(
        status_line: &'static str,
        content_type: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/models", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (base, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn request_body(request: &str) -> serde_json::Value {
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    fn config(base: &str) -> ArbiterConfig {
        ArbiterConfig::default()
            .with_endpoint_base(base)
            .with_max_new_tokens(32)
    }

    #[test]
    fn test_endpoint_for_trims_trailing_slash() {
        let gateway =
            HuggingFaceGateway::new(&config("https://example.test/models/")).unwrap();
        assert_eq!(
            gateway.endpoint_for("google/flan-t5-large"),
            "https://example.test/models/google/flan-t5-large"
        );
    }

    #[test]
    fn test_map_status() {
        assert!(matches!(
            map_status(StatusCode::UNAUTHORIZED, ""),
            GatewayError::Unauthenticated(_)
        ));
        assert!(matches!(
            map_status(StatusCode::FORBIDDEN, ""),
            GatewayError::Unauthenticated(_)
        ));
        assert_eq!(
            map_status(StatusCode::SERVICE_UNAVAILABLE, "loading"),
            GatewayError::Status {
                status: 503,
                body: "loading".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_generate_sends_request_and_extracts_text() {
        let (base, server) = serve_once(
            "200 OK",
            "application/json",
            r#"[{"generated_text": "Ship it. DECISION: YES"}]"#,
        )
        .await;
        let gateway =
            HuggingFaceGateway::new(&config(&base).with_credential(Some("hf_test".into())))
                .unwrap();

        let text = gateway
            .generate("google/flan-t5-large", "Question: Deploy?")
            .await
            .unwrap();
        assert_eq!(text, "Ship it. DECISION: YES");

        let request = server.await.unwrap();
        let head = request.to_lowercase();
        assert!(head.starts_with("post /models/google/flan-t5-large http/1.1"));
        assert!(head.contains("authorization: bearer hf_test"));
        assert!(head.contains("content-type: application/json"));

        let body = request_body(&request);
        assert_eq!(body["inputs"], "Question: Deploy?");
        assert_eq!(body["parameters"]["max_new_tokens"], 32);
    }

    #[tokio::test]
    async fn test_generate_without_credential_sends_no_auth_header() {
        let (base, server) =
            serve_once("200 OK", "application/json", r#"{"generated_text": "ok"}"#).await;
        let gateway = HuggingFaceGateway::new(&config(&base)).unwrap();

        assert_eq!(gateway.generate("m", "p").await.unwrap(), "ok");

        let request = server.await.unwrap();
        assert!(!request.to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_generate_plain_text_body() {
        let (base, server) = serve_once("200 OK", "text/plain", "DECISION: NO").await;
        let gateway = HuggingFaceGateway::new(&config(&base)).unwrap();

        assert_eq!(gateway.generate("m", "p").await.unwrap(), "DECISION: NO");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_unauthorized() {
        let (base, server) = serve_once(
            "401 Unauthorized",
            "application/json",
            r#"{"error": "Invalid credentials"}"#,
        )
        .await;
        let gateway = HuggingFaceGateway::new(&config(&base)).unwrap();

        let err = gateway.generate("m", "p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_server_error() {
        let (base, server) = serve_once(
            "503 Service Unavailable",
            "application/json",
            r#"{"error": "Model is currently loading"}"#,
        )
        .await;
        let gateway = HuggingFaceGateway::new(&config(&base)).unwrap();

        let err = gateway.generate("m", "p").await.unwrap_err();
        assert!(matches!(err, GatewayError::Status { status: 503, .. }));
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_unrecognized_shape() {
        let (base, server) = serve_once(
            "200 OK",
            "application/json",
            r#"[{"label": "POSITIVE", "score": 0.99}]"#,
        )
        .await;
        let gateway = HuggingFaceGateway::new(&config(&base)).unwrap();

        let err = gateway.generate("m", "p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnrecognizedResponseShape);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/models", listener.local_addr().unwrap());
        drop(listener);

        let gateway = HuggingFaceGateway::new(&config(&base)).unwrap();
        let err = gateway.generate("m", "p").await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
    }

    #[tokio::test]
    async fn test_silent_server_times_out_through_agent_client() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/models", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let gateway = Arc::new(HuggingFaceGateway::new(&config(&base)).unwrap());
        let agent = Agent::with_defaults(AgentRole::Safety);
        let question = Question::try_new("Deploy the patch?").unwrap();

        let outcome = AgentClient::new(gateway)
            .invoke(&agent, &question, Duration::from_millis(200))
            .await;

        assert_eq!(outcome.vote(), Vote::Abstain);
        assert_eq!(outcome.error(), Some(ErrorKind::Timeout));
        assert!(outcome.elapsed() < Duration::from_secs(5));
        server.abort();
    }
}
