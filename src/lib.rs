pub mod api;
pub mod app;
pub mod client;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod map;
pub mod proxy;
pub mod responses;
pub mod router;
pub mod static_files;
pub mod templates;

#[cfg(test)]
mod tests;
