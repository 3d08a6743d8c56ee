//! Generates every combination of the mapping tables a deobfuscation workspace needs.
//!
//! Three naming systems are supported:
//! - `notch` - The obfuscated names, which the input srg table starts from
//!   - `obf` is accepted as an alias, since that's what everyone else calls them
//! - `srg` - MCP's unique srg names, which are what the input srg table renames into
//! - `mcp` - MCP's crowd sourced names, which only rename fields and methods
//!   - These are looked up by srg short name in the `fields.csv` and `methods.csv` exports
//!   - Packages and classes are the same as in srg
//!
//! Mapping targets have a string representation of the form `{original}2{renamed}`.
//! For example, `mcp2notch` specifies mappings from the MCP names back into the obfuscated ones.
//! The exception tables (`exc`) are carried along in both the srg and mcp namespaces.
#[macro_use]
extern crate failure;
extern crate failure_derive;
extern crate indexmap;
#[macro_use]
extern crate log;
extern crate scopeguard;
extern crate serde;
extern crate serde_derive;
extern crate serde_json;

mod target;
mod computer;
mod exc;
mod task;

pub use self::target::{TargetMapping, MappingSystem, InvalidTarget, GENERATED_TARGETS};
pub use self::computer::{MappingsTargetComputer, TargetComputeError};
pub use self::exc::{remap_exceptions, RemappedExceptions};
pub use self::task::{GenSrgs, GenSrgsConfig, GeneratedTables, SrgInputs, SrgOutputs};
