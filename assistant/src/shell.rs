//! Sequencing of the user-facing steps: credential, menu upload, questions.
//!
//! Each step yields a [`Notice`] for the presentation layer to display. A step
//! that cannot run yet (no key, no menu) returns the matching advisory and
//! touches nothing else.

use crate::errors::{AssistantError, AssistantResult};
use crate::query_service::QueryService;
use crate::session::Session;
use std::path::Path;

pub const AI_RESPONSE_HEADING: &str = "### AI Response:";

/// Something to show the user after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Success(String),
    Answer(String),
    Error(String),
}

impl Notice {
    pub fn to_markdown(&self) -> String {
        match self {
            Notice::Warning(msg) => format!("**Warning:** {msg}"),
            Notice::Success(msg) => format!("**{msg}**"),
            Notice::Answer(text) => format!("{AI_RESPONSE_HEADING}\n{text}"),
            Notice::Error(msg) => format!("**Error:** {msg}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

impl From<AssistantError> for Notice {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::MissingCredential | AssistantError::MenuNotLoaded => {
                Notice::Warning(err.to_string())
            }
            other => Notice::Error(other.to_string()),
        }
    }
}

pub struct InteractionShell {
    session: Session,
    query_service: QueryService,
}

impl InteractionShell {
    pub fn new(query_service: QueryService) -> Self {
        Self {
            session: Session::new(),
            query_service,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn submit_credential(&mut self, raw: &str) -> Option<Notice> {
        match self.session.set_credential(raw) {
            Ok(()) => None,
            Err(e) => Some(e.into()),
        }
    }

    pub fn upload_menu(&mut self, document: &[u8]) -> Notice {
        let result = self.session.upload_menu(document);
        Self::menu_notice(result)
    }

    pub fn load_menu_file(&mut self, path: &Path) -> Notice {
        let result = self.session.load_menu_file(path);
        Self::menu_notice(result)
    }

    fn menu_notice(result: AssistantResult<usize>) -> Notice {
        match result {
            Ok(count) => {
                log::info!("Menu installed ({} dishes)", count);
                Notice::Success("Menu uploaded successfully!".to_string())
            }
            Err(e) => e.into(),
        }
    }

    /// A blank question is ignored and yields `None`.
    pub async fn ask(&self, question: &str) -> Option<Notice> {
        if let Err(e) = self.session.credential() {
            return Some(e.into());
        }
        if let Err(e) = self.session.menu() {
            return Some(e.into());
        }
        if question.trim().is_empty() {
            return None;
        }

        let notice = match self.query_service.query(&self.session, question).await {
            Ok(answer) => Notice::Answer(answer.text),
            Err(e) => e.into(),
        };
        Some(notice)
    }
}
