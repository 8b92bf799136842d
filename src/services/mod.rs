pub mod find_service;

pub use find_service::FindService;
