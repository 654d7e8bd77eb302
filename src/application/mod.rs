//! Application layer services implementing catalog use cases.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::movie_service::MovieService`] - Paginated listing and single-movie lookup

pub mod services;
