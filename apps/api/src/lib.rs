pub mod config;
pub mod errors;
pub mod reference;
pub mod routes;
pub mod state;
pub mod summary;
pub mod wizard;
