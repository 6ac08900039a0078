pub mod favorites;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod search;
pub mod shows;
pub mod tabs;
pub mod ws;

pub use routes::create_router;
pub use ws::{WsBroadcaster, WsMessage};
