//! The status line above the grids.

use serde::Serialize;

/// Visual style of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Info,
    Loading,
    Error,
    Empty,
}

/// A user-facing status message. An empty message clears the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    fn new(message: impl Into<String>, kind: FeedbackKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// No message.
    pub fn none() -> Self {
        Self::new("", FeedbackKind::Info)
    }

    pub fn blank_query() -> Self {
        Self::new("Digite o nome de uma série para buscar.", FeedbackKind::Empty)
    }

    pub fn searching() -> Self {
        Self::new("Buscando séries...", FeedbackKind::Loading)
    }

    pub fn no_results() -> Self {
        Self::new("Nenhuma série encontrada para essa busca.", FeedbackKind::Empty)
    }

    pub fn found(count: usize) -> Self {
        Self::new(format!("Encontradas {} série(s).", count), FeedbackKind::Info)
    }

    pub fn search_failed() -> Self {
        Self::new(
            "Ocorreu um erro ao buscar séries. Tente novamente mais tarde.",
            FeedbackKind::Error,
        )
    }

    pub fn start_searching() -> Self {
        Self::new("Busque por uma série para começar.", FeedbackKind::Empty)
    }

    pub fn no_favorites() -> Self {
        Self::new("Você ainda não possui favoritos.", FeedbackKind::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::none()
    }
}
