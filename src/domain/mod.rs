//! Domain Layer - 领域层

pub mod novel;
