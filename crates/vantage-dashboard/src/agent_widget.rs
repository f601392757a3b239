//! Ask-the-agent widget state.
//!
//! The widget owns its input surface (open flag and draft text), a pending
//! flag for the in-flight question, and the last answer. How the question is
//! delivered is injected as an async callback so the widget works with any
//! backend.

use std::fmt::Display;
use std::future::Future;

use vantage_core::entities::AgentProfile;
use vantage_core::enums::AgentKind;

use crate::agent::AgentState;

/// Why a submit did not reach the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Question empty after trimming.
    Blank,
    /// A previous question is still awaiting its answer.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Answered,
    Rejected(Rejection),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AgentQaWidget {
    kind: AgentKind,
    profile: AgentProfile,
    open: bool,
    pending: bool,
    draft: String,
    answer: Option<String>,
    last_error: Option<String>,
}

impl AgentQaWidget {
    #[must_use]
    pub fn new(kind: AgentKind, agent: &AgentState) -> Self {
        Self {
            kind,
            profile: agent.profile().clone(),
            open: false,
            pending: false,
            draft: String::new(),
            answer: None,
            last_error: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AgentKind {
        self.kind
    }

    #[must_use]
    pub const fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Validate the draft and mark the widget pending. Returns the trimmed
    /// question to send.
    ///
    /// # Errors
    ///
    /// Refuses blank drafts and drafts submitted while another question is
    /// pending; neither changes state.
    pub fn begin_submit(&mut self) -> Result<String, Rejection> {
        if self.pending {
            return Err(Rejection::Pending);
        }
        let question = self.draft.trim();
        if question.is_empty() {
            return Err(Rejection::Blank);
        }
        let question = question.to_string();
        self.pending = true;
        self.last_error = None;
        Ok(question)
    }

    /// Apply the result of a question started with [`Self::begin_submit`].
    pub fn finish_submit<E: Display>(&mut self, result: Result<String, E>) -> SubmitOutcome {
        self.pending = false;
        match result {
            Ok(answer) => {
                self.answer = Some(answer);
                self.draft.clear();
                self.open = false;
                SubmitOutcome::Answered
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(agent = %self.kind, error = %message, "agent question failed");
                self.last_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Send the current draft through `ask`.
    ///
    /// On success the surface closes and the answer is kept. On failure the
    /// surface stays open with the draft intact so the user can retry.
    pub async fn submit<F, Fut, E>(&mut self, ask: F) -> SubmitOutcome
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<String, E>>,
        E: Display,
    {
        let question = match self.begin_submit() {
            Ok(question) => question,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        let result = ask(question).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::agent::default_profile;
    use pretty_assertions::assert_eq;

    fn widget() -> AgentQaWidget {
        let state = AgentState::Loaded(default_profile(AgentKind::Projects));
        let mut widget = AgentQaWidget::new(AgentKind::Projects, &state);
        widget.open();
        widget
    }

    #[tokio::test]
    async fn whitespace_question_never_reaches_callback() {
        let mut widget = widget();
        widget.set_draft("   \n\t ");
        let called = Cell::new(false);
        let flag = &called;

        let outcome = widget
            .submit(move |_| async move {
                flag.set(true);
                Ok::<_, String>("unused".to_string())
            })
            .await;

        assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::Blank));
        assert!(!called.get());
        assert!(widget.is_open());
        assert!(!widget.is_pending());
    }

    #[tokio::test]
    async fn answer_closes_surface() {
        let mut widget = widget();
        widget.set_draft("  Which project is late? ");

        let outcome = widget
            .submit(|question| async move { Ok::<_, String>(format!("re: {question}")) })
            .await;

        assert_eq!(outcome, SubmitOutcome::Answered);
        assert_eq!(widget.answer(), Some("re: Which project is late?"));
        assert!(!widget.is_open());
        assert_eq!(widget.draft(), "");
    }

    #[tokio::test]
    async fn failure_keeps_surface_open() {
        let mut widget = widget();
        widget.set_draft("Budget status?");

        let outcome = widget
            .submit(|_| async { Err::<String, _>("backend down") })
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed("backend down".into()));
        assert!(widget.is_open());
        assert!(!widget.is_pending());
        assert_eq!(widget.draft(), "Budget status?");
        assert_eq!(widget.last_error(), Some("backend down"));
        assert_eq!(widget.answer(), None);
    }

    #[test]
    fn second_submit_while_pending_is_refused() {
        let mut widget = widget();
        widget.set_draft("First?");
        assert_eq!(widget.begin_submit(), Ok("First?".to_string()));
        assert_eq!(widget.begin_submit(), Err(Rejection::Pending));

        widget.finish_submit(Ok::<_, String>("done".into()));
        assert!(!widget.is_pending());
    }
}
