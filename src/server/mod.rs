pub mod app;
pub mod deserializers;
pub mod extractors;
mod routes;
