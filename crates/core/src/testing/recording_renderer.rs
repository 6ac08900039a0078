//! Renderer that records what it was asked to draw.

use std::sync::Mutex;

use crate::render::{RenderPort, Tab};
use crate::show::ShowId;
use crate::view::{CardView, Feedback};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// A full grid render, reduced to the card ids in order.
    Grid { tab: Tab, ids: Vec<ShowId> },
    Patch { tab: Tab, card: CardView },
    Feedback(Feedback),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded grid and patch events. Feedback is left out; see
    /// [`feedback`](Self::feedback).
    pub fn events(&self) -> Vec<RenderEvent> {
        self.all_events()
            .into_iter()
            .filter(|e| !matches!(e, RenderEvent::Feedback(_)))
            .collect()
    }

    /// Every feedback message shown, oldest first.
    pub fn feedback(&self) -> Vec<Feedback> {
        self.all_events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Feedback(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    pub fn all_events(&self) -> Vec<RenderEvent> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RenderEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RenderPort for RecordingRenderer {
    fn render_grid(&self, tab: Tab, cards: &[CardView]) {
        let ids = cards.iter().map(|c| c.id).collect();
        self.lock().push(RenderEvent::Grid { tab, ids });
    }

    fn patch_card(&self, tab: Tab, card: &CardView) {
        self.lock().push(RenderEvent::Patch {
            tab,
            card: card.clone(),
        });
    }

    fn show_feedback(&self, feedback: &Feedback) {
        self.lock().push(RenderEvent::Feedback(feedback.clone()));
    }
}
