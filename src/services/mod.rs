// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod hierarchy_service;
pub mod image_service;
pub mod resolver_service;

#[cfg(test)]
mod resolver_service_tests;

// Re-export all services and their types
pub use hierarchy_service::HierarchyLinker;

pub use image_service::{ImageKind, ImageService, RemoteImage};

pub use resolver_service::ResolverService;
