//! HTTP request handlers for API endpoints.

pub mod health;
pub mod movie_detail;
pub mod movie_list;

pub use health::health_handler;
pub use movie_detail::movie_detail_handler;
pub use movie_list::movie_list_handler;
