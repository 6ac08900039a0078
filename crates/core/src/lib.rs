pub mod config;
pub mod external_catalog;
pub mod favorites;
pub mod metrics;
pub mod reconcile;
pub mod render;
pub mod results;
pub mod search;
pub mod session;
pub mod show;
pub mod storage;
pub mod testing;
pub mod view;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use external_catalog::{ExternalCatalog, ExternalCatalogError, TvMazeClient, TvMazeConfig};
pub use favorites::{FavoritesStore, ToggleOutcome};
pub use render::{NullRenderer, RenderPort, Tab};
pub use results::ResultCache;
pub use search::{SearchError, SearchOrchestrator, SearchOutcome, SearchState, SearchTicket};
pub use session::ShowSession;
pub use show::{Show, ShowId, ShowImage, ShowRating};
pub use storage::{
    FavoritesGateway, KeyValueStore, SqliteKeyValueStore, StorageError, DEFAULT_FAVORITES_KEY,
};
pub use view::{project, CardView, FavoriteAffordance, Feedback, FeedbackKind};
