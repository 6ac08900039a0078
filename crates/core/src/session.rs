//! One user's search-and-favorites session.
//!
//! `ShowSession` owns the favorites store, the result cache and the search
//! orchestrator, and keeps the rendering collaborator in sync with them.

use std::sync::Arc;

use tracing::{debug, info};

use crate::external_catalog::{ExternalCatalog, ExternalCatalogError};
use crate::favorites::{FavoritesStore, ToggleOutcome};
use crate::reconcile;
use crate::render::{RenderPort, Tab};
use crate::results::ResultCache;
use crate::search::{SearchError, SearchOrchestrator, SearchOutcome, SearchState, SearchTicket};
use crate::show::{Show, ShowId};
use crate::storage::FavoritesGateway;
use crate::view::{project, CardView, Feedback};

pub struct ShowSession {
    favorites: FavoritesStore,
    results: ResultCache,
    search: SearchOrchestrator,
    renderer: Arc<dyn RenderPort>,
    /// Whether the results grid currently shows the cache. False while a
    /// search is loading, since the grid was cleared.
    results_rendered: bool,
    active_tab: Tab,
    feedback: Feedback,
}

impl ShowSession {
    /// Load favorites through `gateway` and draw the favorites grid.
    pub fn open(gateway: FavoritesGateway, renderer: Arc<dyn RenderPort>) -> Self {
        let favorites = FavoritesStore::load(gateway);
        info!("Session opened with {} favorites", favorites.len());

        let mut session = Self {
            favorites,
            results: ResultCache::new(),
            search: SearchOrchestrator::new(),
            renderer,
            results_rendered: false,
            active_tab: Tab::Results,
            feedback: Feedback::none(),
        };
        session.render_favorites();
        session
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn results(&self) -> &ResultCache {
        &self.results
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn is_favorite(&self, id: ShowId) -> bool {
        self.favorites.contains(id)
    }

    /// Cards for the current results, in catalog order.
    pub fn results_cards(&self) -> Vec<CardView> {
        self.results
            .shows()
            .iter()
            .map(|show| project(show, self.favorites.contains(show.id)))
            .collect()
    }

    /// Cards for the favorites, ordered by id so the grid is stable between
    /// renders.
    pub fn favorites_cards(&self) -> Vec<CardView> {
        let mut shows: Vec<&Show> = self.favorites.iter().collect();
        shows.sort_by_key(|show| show.id);
        shows.into_iter().map(|show| project(show, true)).collect()
    }

    /// The card for any show this session knows about.
    pub fn card(&self, id: ShowId) -> Option<CardView> {
        reconcile::resolve(id, &self.results, &self.favorites)
            .map(|show| project(&show, self.favorites.contains(id)))
    }

    /// Make `tab` active and update the feedback line for it.
    pub fn switch_tab(&mut self, tab: Tab) -> &Feedback {
        self.active_tab = tab;

        let feedback = match tab {
            Tab::Results if self.results.is_empty() => Feedback::start_searching(),
            Tab::Favorites if self.favorites.is_empty() => Feedback::no_favorites(),
            _ => Feedback::none(),
        };
        self.set_feedback(feedback);
        &self.feedback
    }

    /// Submit a query. A blank query only updates the feedback line.
    ///
    /// On success the results tab becomes active and its grid is cleared
    /// while the request is in flight; the cached results stay resolvable
    /// for toggles until the response is applied.
    pub fn begin_search(&mut self, query: &str) -> Result<SearchTicket, SearchError> {
        match self.search.begin(query) {
            Ok(ticket) => {
                self.active_tab = Tab::Results;
                self.set_feedback(Feedback::searching());
                self.renderer.render_grid(Tab::Results, &[]);
                self.results_rendered = false;
                Ok(ticket)
            }
            Err(e) => {
                debug!("Rejected search submission: {}", e);
                self.set_feedback(Feedback::blank_query());
                Err(e)
            }
        }
    }

    /// Apply the catalog response for `ticket`.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Show>, ExternalCatalogError>,
    ) -> SearchOutcome {
        let outcome = self.search.complete(ticket, result, &mut self.results);
        if !outcome.is_accepted() {
            return outcome;
        }

        let cards = self.results_cards();
        self.renderer.render_grid(Tab::Results, &cards);
        self.results_rendered = true;

        if self.search.state() != SearchState::Searching {
            let feedback = match &outcome {
                SearchOutcome::Populated { count } => Feedback::found(*count),
                SearchOutcome::Empty => Feedback::no_results(),
                _ => Feedback::search_failed(),
            };
            self.set_feedback(feedback);
        }

        outcome
    }

    /// Submit, fetch and apply in one step.
    pub async fn search(
        &mut self,
        catalog: &dyn ExternalCatalog,
        query: &str,
    ) -> Result<SearchOutcome, SearchError> {
        let ticket = self.begin_search(query)?;
        let result = catalog.search_shows(ticket.query()).await;
        Ok(self.complete_search(ticket, result))
    }

    /// Flip the favorite state of `id` and refresh every view of it.
    ///
    /// Ids that resolve nowhere are ignored: they come from stale views, not
    /// from user mistakes.
    pub fn toggle(&mut self, id: ShowId) -> ToggleOutcome {
        let resolved = reconcile::resolve(id, &self.results, &self.favorites);
        let outcome = self.favorites.toggle(id, move |_| resolved);

        if !outcome.changed() {
            return outcome;
        }

        if self.results_rendered {
            if let Some(show) = self.results.find(id) {
                let card = project(show, outcome.is_favorite());
                self.renderer.patch_card(Tab::Results, &card);
            }
        }
        self.render_favorites();

        info!("Show {} {}", id, outcome.as_str());
        outcome
    }

    fn render_favorites(&mut self) {
        let cards = self.favorites_cards();
        self.renderer.render_grid(Tab::Favorites, &cards);

        if cards.is_empty() && self.active_tab == Tab::Favorites {
            self.set_feedback(Feedback::no_favorites());
        }
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = feedback;
        self.renderer.show_feedback(&self.feedback);
    }
}

impl std::fmt::Debug for ShowSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowSession")
            .field("favorites", &self.favorites.len())
            .field("results", &self.results.len())
            .field("search", &self.search.state())
            .field("active_tab", &self.active_tab)
            .finish_non_exhaustive()
    }
}
