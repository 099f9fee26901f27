//! Terraform outputs handling
//!
//! Reads the document produced by `terraform output -json` and answers address
//! lookups per environment and role.

pub mod outputs;

pub use outputs::TerraformOutputs;
