//! Single-agent invocation
//!
//! [`AgentClient`] is the failure-containment boundary for one agent: every
//! error (gateway failure or deadline) becomes an abstaining
//! [`AgentOutcome`] with the cause recorded.

use crate::ports::inference_gateway::InferenceGateway;
use magi_domain::{Agent, AgentOutcome, ErrorKind, Question};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Invokes one agent through the inference gateway
pub struct AgentClient<G: InferenceGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: InferenceGateway + ?Sized> Clone for AgentClient<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: InferenceGateway + ?Sized> AgentClient<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Ask `agent` the question, giving up after `timeout`.
    ///
    /// Makes exactly one gateway call. When the deadline passes, the
    /// in-flight call is dropped and the outcome records
    /// [`ErrorKind::Timeout`].
    pub async fn invoke(
        &self,
        agent: &Agent,
        question: &Question,
        timeout: Duration,
    ) -> AgentOutcome {
        let prompt = agent.prompt_for(question);
        let start = Instant::now();
        debug!(
            agent = agent.codename(),
            model = agent.model_identifier(),
            ?timeout,
            "Dispatching agent call"
        );

        let call = self.gateway.generate(agent.model_identifier(), &prompt);
        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(text)) => {
                let outcome = AgentOutcome::responded(agent.clone(), text, start.elapsed());
                if outcome.vote().is_abstain() {
                    warn!(agent = agent.codename(), "Response has no decision marker");
                } else {
                    info!(agent = agent.codename(), vote = %outcome.vote(), "Agent voted");
                }
                outcome
            }
            Ok(Err(e)) => {
                let kind = e.kind();
                warn!(agent = agent.codename(), error = %kind, "Agent call failed: {}", e);
                AgentOutcome::failed(agent.clone(), kind, e.to_string(), start.elapsed())
            }
            Err(_) => {
                warn!(agent = agent.codename(), ?timeout, "Agent call timed out");
                AgentOutcome::failed(
                    agent.clone(),
                    ErrorKind::Timeout,
                    format!("no response within {:?}", timeout),
                    start.elapsed(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inference_gateway::GatewayError;
    use async_trait::async_trait;
    use magi_domain::{AgentRole, Vote};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replies with a fixed result after an optional delay, recording prompts
    struct ScriptedGateway {
        reply: Result<String, GatewayError>,
        delay: Duration,
        calls: AtomicUsize,
        prompts: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedGateway {
        fn new(reply: Result<String, GatewayError>) -> Self {
            Self {
                reply,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    #[async_trait]
    impl InferenceGateway for ScriptedGateway {
        async fn generate(
            &self,
            model_identifier: &str,
            prompt: &str,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts
                .lock()
                .unwrap()
                .push((model_identifier.to_string(), prompt.to_string()));
            tokio::time::sleep(self.delay).await;
            self.reply.clone()
        }
    }

    fn agent() -> Agent {
        Agent::new(AgentRole::Logic, "org/logic", "Think hard. Question: ")
    }

    fn question() -> Question {
        Question::try_new("Deploy the patch?").unwrap()
    }

    #[tokio::test]
    async fn test_success_parses_vote_and_sends_prompt() {
        let gateway = Arc::new(ScriptedGateway::new(Ok("Clearly. DECISION: YES".into())));
        let client = AgentClient::new(Arc::clone(&gateway));

        let outcome = client
            .invoke(&agent(), &question(), Duration::from_secs(5))
            .await;

        assert_eq!(outcome.vote(), Vote::Yes);
        assert_eq!(outcome.raw_text(), Some("Clearly. DECISION: YES"));
        assert!(outcome.error().is_none());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(
            prompts[0],
            (
                "org/logic".to_string(),
                "Think hard. Question: Deploy the patch?".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_unparseable_text_abstains_without_error() {
        let gateway = Arc::new(ScriptedGateway::new(Ok("I would rather not say".into())));
        let outcome = AgentClient::new(gateway)
            .invoke(&agent(), &question(), Duration::from_secs(5))
            .await;

        assert_eq!(outcome.vote(), Vote::Abstain);
        assert!(outcome.error().is_none());
        assert!(outcome.is_parse_failure());
    }

    #[tokio::test]
    async fn test_gateway_error_is_contained() {
        let gateway = Arc::new(ScriptedGateway::new(Err(GatewayError::Status {
            status: 500,
            body: "boom".into(),
        })));
        let outcome = AgentClient::new(Arc::clone(&gateway))
            .invoke(&agent(), &question(), Duration::from_secs(5))
            .await;

        assert_eq!(outcome.vote(), Vote::Abstain);
        assert_eq!(outcome.error(), Some(ErrorKind::TransportFailure));
        assert_eq!(outcome.detail(), Some("HTTP 500: boom"));
        assert!(outcome.raw_text().is_none());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unauthenticated_is_recorded() {
        let gateway = Arc::new(ScriptedGateway::new(Err(GatewayError::Unauthenticated(
            "HTTP 401".into(),
        ))));
        let outcome = AgentClient::new(gateway)
            .invoke(&agent(), &question(), Duration::from_secs(5))
            .await;

        assert_eq!(outcome.error(), Some(ErrorKind::Unauthenticated));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_abandons_call() {
        let gateway = Arc::new(
            ScriptedGateway::new(Ok("DECISION: YES".into())).with_delay(Duration::from_secs(60)),
        );
        let outcome = AgentClient::new(Arc::clone(&gateway))
            .invoke(&agent(), &question(), Duration::from_secs(2))
            .await;

        assert_eq!(outcome.vote(), Vote::Abstain);
        assert_eq!(outcome.error(), Some(ErrorKind::Timeout));
        assert!(outcome.raw_text().is_none());
        assert!(outcome.elapsed() < Duration::from_secs(60));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }
}
