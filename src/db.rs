pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod status_repo;
pub use status_repo::StatusRepository;
