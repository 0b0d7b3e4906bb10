//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain value objects (Denomination, WithdrawalAmount)
//! - Domain entities (NoteBreakdown)
//! - Domain services (greedy breakdown)

pub mod entities;
pub mod services;
pub mod value_objects;
