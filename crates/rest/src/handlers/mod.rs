//! HTTP request handlers, one module per endpoint group.

pub mod auth;
pub mod create;
pub mod facets;
pub mod health;
pub mod list;
pub mod read;
pub mod search;
pub mod update;

pub use auth::{profile_handler, signin_handler, signout_handler, signup_handler};
pub use create::create_handler;
pub use facets::{categories_handler, submitters_handler, tags_handler};
pub use health::{health_handler, info_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use search::search_handler;
pub use update::update_handler;
