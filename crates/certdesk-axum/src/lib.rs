#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use auth::CurrentUser;
pub use bootstrap::{
    AxumContext, CorsConfig, ServerConfig, bootstrap, bootstrap_with_converter, start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
