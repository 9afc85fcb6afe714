//! Router tests module
//!
//! Uses in-process fake adapters so every routing property can be checked
//! without network access.


use crate::core::providers::{ProviderError, ProviderRegistry};
use crate::core::traits::ProviderAdapter;
use crate::core::types::{GenerationRequest, GenerationResult, Message};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// What a fake does when asked to generate
#[derive(Debug, Clone)]
pub(crate) enum Outcome {
    Succeed,
    Fail,
    Hang,
}

/// What a fake answers to an availability probe
#[derive(Debug, Clone, Copy)]
pub(crate) enum Probe {
    Up,
    Down,
    Hang,
}

/// Shared call log, in call order
pub(crate) type CallLog = Arc<Mutex<Vec<&'static str>>>;

#[derive(Debug)]
pub(crate) struct FakeProvider {
    name: &'static str,
    outcome: Outcome,
    probe: Probe,
    log: CallLog,
    pub(crate) calls: AtomicUsize,
    pub(crate) probes: AtomicUsize,
}

impl FakeProvider {
    pub(crate) fn new(name: &'static str, outcome: Outcome, probe: Probe, log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            name,
            outcome,
            probe,
            log: log.clone(),
            calls: AtomicUsize::new(0),
            probes: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderAdapter for FakeProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn model(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<GenerationResult, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.lock().push(self.name);
        match self.outcome {
            Outcome::Succeed => Ok(GenerationResult::new(
                format!("answer from {}", self.name),
                self.name,
                "fake-model",
                Some(7),
            )),
            Outcome::Fail => Err(ProviderError::network(self.name, "connection refused")),
            Outcome::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(ProviderError::timeout(self.name, "unreachable"))
            }
        }
    }

    async fn is_available(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        match self.probe {
            Probe::Up => true,
            Probe::Down => false,
            Probe::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                true
            }
        }
    }
}

pub(crate) fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn registry_of(providers: &[&Arc<FakeProvider>]) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    for provider in providers {
        let adapter: Arc<dyn ProviderAdapter> = (*provider).clone();
        registry.register(provider.name, adapter);
    }
    registry
}

pub(crate) fn ask(text: &str) -> GenerationRequest {
    GenerationRequest::new(vec![Message::user(text)])
}
