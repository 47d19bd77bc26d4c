pub mod client_service;
pub use client_service::ClientService;
pub mod status_service;
pub use status_service::StatusService;
