//! Scripted collaborator ports for routing tests.
//!
//! No network access: every port answers from a canned result.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use promptline_axum::{AxumContext, CollaboratorPorts};
use promptline_core::{
    CollaboratorError, CompletionPort, CompletionRequest, ContentSafetyPort, GrammarAnalyzerPort,
    GrammarResult, PipelineSettings, SafetyVerdict,
};

pub struct FakeGrammar(pub Result<GrammarResult, CollaboratorError>);

#[async_trait]
impl GrammarAnalyzerPort for FakeGrammar {
    async fn analyze(&self, _text: &str) -> Result<GrammarResult, CollaboratorError> {
        self.0.clone()
    }
}

pub struct FakeSafety(pub Result<SafetyVerdict, CollaboratorError>);

#[async_trait]
impl ContentSafetyPort for FakeSafety {
    async fn classify(&self, _text: &str) -> Result<SafetyVerdict, CollaboratorError> {
        self.0.clone()
    }
}

type Script = Box<dyn Fn(&CompletionRequest) -> Result<String, CollaboratorError> + Send + Sync>;

/// Completion port answering through a closure, counting calls.
pub struct FakeCompletion {
    script: Script,
    calls: AtomicUsize,
}

impl FakeCompletion {
    pub fn new(
        script: impl Fn(&CompletionRequest) -> Result<String, CollaboratorError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::new(|_| Err(CollaboratorError::Transport("connection refused".to_string())))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionPort for FakeCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.script)(request)
    }
}

/// Rewrite deployment for the misspelled weather prompt.
///
/// Suggestion prompts are recognised by their "exactly 2" instruction.
pub fn weather_rewriter() -> FakeCompletion {
    FakeCompletion::new(|request| {
        if request.prompt.contains("exactly 2") {
            Ok("What's the weather like today?|How is the weather right now?".to_string())
        } else {
            Ok("What is the weather?".to_string())
        }
    })
}

/// Ports and handles onto the completion fakes, for call-count assertions.
pub struct Harness {
    pub rewrite: Arc<FakeCompletion>,
    pub response: Arc<FakeCompletion>,
    pub ctx: AxumContext,
}

pub fn harness(
    grammar: FakeGrammar,
    safety: FakeSafety,
    rewrite: FakeCompletion,
    response: FakeCompletion,
) -> Harness {
    let rewrite = Arc::new(rewrite);
    let response = Arc::new(response);
    let ports = CollaboratorPorts {
        grammar: Arc::new(grammar),
        safety: Arc::new(safety),
        rewrite: rewrite.clone(),
        response: response.clone(),
    };

    Harness {
        rewrite,
        response,
        ctx: AxumContext::from_ports(ports, PipelineSettings::default()),
    }
}

/// All collaborators healthy.
pub fn healthy() -> Harness {
    harness(
        FakeGrammar(Ok(GrammarResult::new(Vec::new(), "en"))),
        FakeSafety(Ok(SafetyVerdict::clear())),
        weather_rewriter(),
        FakeCompletion::new(|_| Ok("It is sunny and 22°C.".to_string())),
    )
}
