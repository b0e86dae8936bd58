//! Decide use case (the arbiter)
//!
//! Puts one question to all three agents at once and reduces their votes.
//!
//! ```text
//! DISPATCHED ──▶ AWAITING ──▶ REDUCED
//!   3 tasks       join all     tally + classify
//! ```
//!
//! Each agent task carries its own deadline, so a hung agent only costs its
//! own timeout. The join waits for every task; completion order does not
//! affect the verdict, which always lists Logic, Safety, Humanity.

use crate::config::ArbiterConfig;
use crate::ports::decision_maker::DecisionMaker;
use crate::ports::inference_gateway::InferenceGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::invoke_agent::AgentClient;
use async_trait::async_trait;
use magi_domain::{
    Agent, AgentOutcome, DomainError, ErrorKind, Question, Verdict, VerdictResult,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Hard failures of a decision.
///
/// Agent failures never appear here; they are recorded as abstentions. A
/// panicking agent task also abstains; `Dispatch` is left for tasks the
/// runtime cancelled.
#[derive(Error, Debug)]
pub enum DecideError {
    #[error(transparent)]
    InvalidQuestion(#[from] DomainError),

    #[error("Agent task could not run to completion: {0}")]
    Dispatch(String),
}

/// Use case for deciding a question by quorum of three agents
pub struct DecideUseCase<G: InferenceGateway + 'static> {
    client: AgentClient<G>,
    agents: [Agent; 3],
    default_timeout: Duration,
}

impl<G: InferenceGateway + 'static> DecideUseCase<G> {
    pub fn new(gateway: Arc<G>, config: &ArbiterConfig) -> Self {
        Self {
            client: AgentClient::new(gateway),
            agents: config.agents(),
            default_timeout: config.default_timeout,
        }
    }

    /// Decide with the configured default timeout and no progress reporting
    pub async fn execute(&self, question: &str) -> Result<Verdict, DecideError> {
        self.decide(question, self.default_timeout).await
    }

    /// Decide, bounding each agent call by `per_agent_timeout`
    pub async fn decide(
        &self,
        question: &str,
        per_agent_timeout: Duration,
    ) -> Result<Verdict, DecideError> {
        self.decide_with_progress(question, per_agent_timeout, &NoProgress)
            .await
    }

    /// Decide with progress callbacks
    pub async fn decide_with_progress(
        &self,
        question: &str,
        per_agent_timeout: Duration,
        progress: &dyn ProgressNotifier,
    ) -> Result<Verdict, DecideError> {
        let question = Question::try_new(question)?;
        info!("Dispatching question to {} agents", self.agents.len());

        let started = Instant::now();
        let mut join_set = JoinSet::new();
        let mut task_roles = HashMap::with_capacity(self.agents.len());
        for agent in &self.agents {
            let client = self.client.clone();
            let role = agent.role();
            let agent = agent.clone();
            let question = question.clone();

            let handle = join_set
                .spawn(async move { client.invoke(&agent, &question, per_agent_timeout).await });
            task_roles.insert(handle.id(), role);
        }
        progress.on_dispatch(&self.agents);

        let mut slots: [Option<AgentOutcome>; 3] = [None, None, None];
        while let Some(joined) = join_set.join_next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                // A panicking adapter costs only its own agent.
                Err(e) if e.is_panic() => {
                    let Some(&role) = task_roles.get(&e.id()) else {
                        return Err(DecideError::Dispatch(e.to_string()));
                    };
                    warn!(agent = role.codename(), "Agent task panicked: {}", e);
                    AgentOutcome::failed(
                        self.agents[role.index()].clone(),
                        ErrorKind::TransportFailure,
                        e.to_string(),
                        started.elapsed(),
                    )
                }
                Err(e) => return Err(DecideError::Dispatch(e.to_string())),
            };
            debug!(
                agent = outcome.agent().codename(),
                vote = %outcome.vote(),
                "Agent settled"
            );
            progress.on_agent_settled(&outcome);
            let index = outcome.agent().role().index();
            slots[index] = Some(outcome);
        }

        let [Some(logic), Some(safety), Some(humanity)] = slots else {
            return Err(DecideError::Dispatch(
                "an agent task finished without reporting an outcome".to_string(),
            ));
        };

        let verdict = Verdict::from_outcomes(&question, [logic, safety, humanity]);
        info!(
            "Verdict {} {} ({})",
            verdict.result(),
            verdict.vote_summary(),
            verdict.tally()
        );
        progress.on_verdict(&verdict);
        Ok(verdict)
    }
}

#[async_trait]
impl<G: InferenceGateway + 'static> DecisionMaker for DecideUseCase<G> {
    async fn decide_result(&self, question: &str) -> Result<VerdictResult, DecideError> {
        Ok(self.execute(question).await?.result())
    }
}
