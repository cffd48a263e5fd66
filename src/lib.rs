pub mod config;
pub mod docs;
pub mod domain;
pub mod error;
pub mod routes;
pub mod seed;
pub mod startup;
pub mod store;
pub mod telemetry;
