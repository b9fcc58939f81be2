pub mod manifest;
pub mod service_worker;
