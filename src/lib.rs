//! The mapping tables of the Forge deobfuscation toolchain.
//!
//! Four naming systems are involved:
//! - `notch` - The obfuscated names found in the shipped jar
//! - `srg` - MCP's stable intermediate names, which insulate tooling from obfuscation changes
//! - `mcp` - MCP's crowd sourced names, layered on top of the srg names by short name
//! - `exc` - Not a naming system, but the checked exceptions each method declares
//!
//! This crate holds the data model and the text formats.
//! Deriving the tables between namespaces happens in the engine.
extern crate indexmap;
extern crate failure;
extern crate failure_derive;
extern crate itertools;
extern crate csv;

pub mod names;
pub mod relation;
pub mod srg;
pub mod mcp;
pub mod exc;
pub mod error;
pub mod utils;

pub use self::names::{FieldRef, MethodRef};
pub use self::relation::Relation;
pub use self::srg::SrgMappings;
pub use self::mcp::{McpMappings, RenameDictionary};
pub use self::exc::{ExceptionEntry, ExceptionList};
pub use self::error::{FormatError, IoFailure};
