//! Storage layer - database entities and repositories

pub mod entity;
pub mod mapper;
pub mod repositories;
