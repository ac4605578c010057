pub mod adapters;
pub mod factory;
pub mod repository;
