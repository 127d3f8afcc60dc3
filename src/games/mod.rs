//! Game implementations.

pub mod scoundrel;
