//! Scripted event source for exercising run-control paths.

use std::collections::VecDeque;

use frag_core::errors::{ErrorInfo, FragError};
use frag_core::event::Event;
use frag_core::{EventSource, SourceInit};

/// Replays a fixed script of events and failure slots in order.
///
/// A test double: the run controller sees exactly the sequence the script
/// describes, including mid-run generation failures. Running past the end
/// of the script is also reported as a generation failure.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<Option<Event>>,
    initialized: bool,
    init_failure: Option<String>,
}

impl ScriptedSource {
    /// Script that yields the given events, then fails when exhausted.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            script: events.into_iter().map(Some).collect(),
            ..Self::default()
        }
    }

    /// Source whose initialization fails with the given message.
    pub fn fail_initialization(message: impl Into<String>) -> Self {
        Self {
            init_failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Appends another event to the script.
    pub fn push_event(&mut self, event: Event) {
        self.script.push_back(Some(event));
    }

    /// Appends an explicit generation-failure slot to the script.
    pub fn push_failure(&mut self) {
        self.script.push_back(None);
    }
}

impl EventSource for ScriptedSource {
    fn initialize(&mut self, _init: &SourceInit) -> Result<(), FragError> {
        if let Some(message) = &self.init_failure {
            return Err(FragError::Init(ErrorInfo::new(
                "scripted-init",
                message.clone(),
            )));
        }
        self.initialized = true;
        Ok(())
    }

    fn generate(&mut self) -> Result<Event, FragError> {
        if !self.initialized {
            return Err(FragError::Generation(ErrorInfo::new(
                "source-order",
                "generate called before initialize",
            )));
        }
        match self.script.pop_front() {
            Some(Some(event)) => Ok(event),
            Some(None) => Err(FragError::Generation(ErrorInfo::new(
                "scripted-failure",
                "scripted generation failure",
            ))),
            None => Err(FragError::Generation(ErrorInfo::new(
                "scripted-exhausted",
                "script has no more events",
            ))),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
