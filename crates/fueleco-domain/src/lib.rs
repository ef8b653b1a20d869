//! Domain services and source traits for the fuel economy catalog

pub mod repository;
pub mod service;
