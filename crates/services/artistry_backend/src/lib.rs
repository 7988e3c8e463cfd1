pub mod app;
pub mod service_factory;
