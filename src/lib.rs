pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod grammar;
pub mod interop;
pub mod ui;

pub use domain::{Identifier, Version};
pub use error::{Result, SemverCompatError};
pub use grammar::{parse, CompatibilityGrammar, Grammar, Parser, StrictGrammar};
