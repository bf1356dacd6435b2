//! Longhand number parsing
//!
//! Converts English number phrases such as "seven thousand two hundred
//! thirty one" into signed integers, rejecting anything malformed or out of
//! range.

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod tables;

pub use ast::{Span, Term};
pub use config::{Config, ConfigError, OutputFormat};
pub use error::{ErrorKind, LonghandError, Operation, Result};
pub use parser::{Width, parse_longhand, parse_longhand32, parse_longhand64};
