//! The batch task that reads a workspace's inputs and writes out every table.
use std::fs::File;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use failure::Error;
use scopeguard::ScopeGuard;
use serde_derive::{Serialize, Deserialize};
use mappings::{SrgMappings, McpMappings, ExceptionList, IoFailure};
use mappings::utils::write_file;

use crate::target::{TargetMapping, MappingSystem};
use crate::computer::MappingsTargetComputer;
use crate::exc::{remap_exceptions, RemappedExceptions};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenSrgsConfig {
    pub inputs: SrgInputs,
    pub outputs: SrgOutputs
}
impl GenSrgsConfig {
    pub fn load(path: &Path) -> Result<GenSrgsConfig, Error> {
        let file = File::open(path).map_err(|cause| IoFailure::reading(path, cause))?;
        Ok(::serde_json::from_reader(file)?)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SrgInputs {
    /// The notch2srg table everything else derives from
    pub srg: PathBuf,
    /// Exception entries in srg names
    pub exc: PathBuf,
    pub methods_csv: PathBuf,
    pub fields_csv: PathBuf,
    /// More notch2srg tables, appended to the main one in order
    #[serde(default)]
    pub extra_srgs: Vec<PathBuf>,
    /// More exception entries, in mcp names
    #[serde(default)]
    pub extra_excs: Vec<PathBuf>
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SrgOutputs {
    pub notch_to_srg: PathBuf,
    pub notch_to_mcp: PathBuf,
    pub srg_to_mcp: PathBuf,
    pub mcp_to_srg: PathBuf,
    pub mcp_to_notch: PathBuf,
    pub srg_exc: PathBuf,
    pub mcp_exc: PathBuf
}
impl SrgOutputs {
    /// Put every output in a single directory, using the customary file names
    pub fn in_directory(dir: &Path) -> SrgOutputs {
        SrgOutputs {
            notch_to_srg: dir.join("notch-srg.srg"),
            notch_to_mcp: dir.join("notch-mcp.srg"),
            srg_to_mcp: dir.join("srg-mcp.srg"),
            mcp_to_srg: dir.join("mcp-srg.srg"),
            mcp_to_notch: dir.join("mcp-notch.srg"),
            srg_exc: dir.join("srg.exc"),
            mcp_exc: dir.join("mcp.exc"),
        }
    }
    pub fn target_file(&self, target: TargetMapping) -> Option<&Path> {
        Some(match (target.original, target.renamed) {
            (MappingSystem::Notch, MappingSystem::Srg) => &self.notch_to_srg,
            (MappingSystem::Notch, MappingSystem::Mcp) => &self.notch_to_mcp,
            (MappingSystem::Srg, MappingSystem::Mcp) => &self.srg_to_mcp,
            (MappingSystem::Mcp, MappingSystem::Srg) => &self.mcp_to_srg,
            (MappingSystem::Mcp, MappingSystem::Notch) => &self.mcp_to_notch,
            _ => return None
        })
    }
}

/// Everything a run produces, before it's written anywhere
#[derive(Debug)]
pub struct GeneratedTables {
    pub targets: Vec<(TargetMapping, Rc<SrgMappings>)>,
    pub exceptions: RemappedExceptions
}

pub struct GenSrgs {
    config: GenSrgsConfig
}
impl GenSrgs {
    #[inline]
    pub fn new(config: GenSrgsConfig) -> GenSrgs {
        GenSrgs { config }
    }
    #[inline]
    pub fn config(&self) -> &GenSrgsConfig {
        &self.config
    }
    /// Read every input and compute every table in memory
    pub fn generate(&self) -> Result<GeneratedTables, Error> {
        let inputs = &self.config.inputs;
        let mcp = McpMappings::load(&inputs.fields_csv, &inputs.methods_csv)?;
        debug!("Loaded {} field names and {} method names", mcp.fields.len(), mcp.methods.len());
        let mut notch2srg = SrgMappings::load(&inputs.srg)?;
        for extra in &inputs.extra_srgs {
            notch2srg.extend(SrgMappings::load(extra)?);
        }
        debug!(
            "Loaded {} packages, {} classes, {} fields and {} methods",
            notch2srg.packages.len(), notch2srg.classes.len(),
            notch2srg.fields.len(), notch2srg.methods.len()
        );
        let primary_excs = ExceptionList::load(&inputs.exc)?;
        let extra_excs = inputs.extra_excs.iter()
            .map(|path| ExceptionList::load(path))
            .collect::<Result<Vec<_>, Error>>()?;
        let computer = MappingsTargetComputer::new(&notch2srg, &mcp);
        let targets = computer.compute_all()?;
        let exceptions = remap_exceptions(&primary_excs, &extra_excs, &mcp.methods);
        Ok(GeneratedTables { targets, exceptions })
    }
    /// Write out each table to its own file
    pub fn write(&self, tables: &GeneratedTables) -> Result<(), Error> {
        let outputs = &self.config.outputs;
        for &(target, ref mappings) in &tables.targets {
            let path = outputs.target_file(target)
                .ok_or_else(|| format_err!("No output configured for {}", target))?;
            write_file(path, |writer| mappings.write(writer))?;
            debug!("Wrote {} to {}", target, path.display());
        }
        write_file(&outputs.srg_exc, |writer| tables.exceptions.srg.write(writer))?;
        write_file(&outputs.mcp_exc, |writer| tables.exceptions.mcp.write(writer))?;
        Ok(())
    }
    pub fn run(&self) -> Result<(), Error> {
        // If anything goes wrong, whatever we've already written can't be trusted
        let guard = ::scopeguard::guard((), |()| {
            warn!("Failed to generate srgs, outputs from this run are invalid");
        });
        let tables = self.generate()?;
        self.write(&tables)?;
        ScopeGuard::into_inner(guard);
        info!(
            "Generated {} srg tables and {} exception entries",
            tables.targets.len(), tables.exceptions.srg.len()
        );
        Ok(())
    }
}
