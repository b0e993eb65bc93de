pub mod aggregator;
pub mod care;
pub mod clock;
pub mod configuration;
pub mod diff;
pub mod domain;
pub mod error;
pub mod reveal;
pub mod routes;
pub mod sources;
pub mod startup;
pub mod telemetry;
