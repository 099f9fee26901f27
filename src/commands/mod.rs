//! Command implementations for bastion-inventory

pub mod generate;
