// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO validation
// - NO event emission
// - Storage failures never reach the user: reads fall back, writes are logged

pub mod id_allocator;
pub mod product_repository;

pub use id_allocator::IdAllocator;
pub use product_repository::{HydrationSource, ProductRepository};
