//! Command handlers for jigsol CLI

pub mod configure;
pub mod extract;
