use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use failure::Error;
use failure_derive::Fail;
use mappings::{SrgMappings, McpMappings, FieldRef, MethodRef};

use super::target::{TargetMapping, MappingSystem, NOTCH2SRG, NOTCH2MCP, SRG2MCP};

/// Computes mapping targets from the notch2srg table and the MCP names.
///
/// Every table is derived record by record from the input,
/// so each of them has exactly one entry per input record, in input order.
pub struct MappingsTargetComputer<'a> {
    notch2srg: &'a SrgMappings,
    mcp: &'a McpMappings,
    computed_targets: RefCell<IndexMap<TargetMapping, Rc<SrgMappings>>>,
}
impl<'a> MappingsTargetComputer<'a> {
    pub fn new(notch2srg: &'a SrgMappings, mcp: &'a McpMappings) -> Self {
        MappingsTargetComputer { notch2srg, mcp, computed_targets: Default::default() }
    }
    pub fn compute_target(&self, target: TargetMapping) -> Result<Rc<SrgMappings>, Error> {
        {
            let computed_targets =
                self.computed_targets.borrow();
            if let Some(mappings) = computed_targets.get(&target) {
                return Ok(mappings.clone())
            }
        }
        let mappings = Rc::new(self.fallback_compute_target(target)
            .map_err(|cause| TargetComputeError { target, cause })?);
        self.computed_targets.borrow_mut().insert(target, mappings.clone());
        Ok(mappings)
    }
    /// Compute all the targets in `GENERATED_TARGETS`, in order
    pub fn compute_all(&self) -> Result<Vec<(TargetMapping, Rc<SrgMappings>)>, Error> {
        super::GENERATED_TARGETS.iter()
            .map(|&target| -> Result<_, Error> { Ok((target, self.compute_target(target)?)) })
            .collect()
    }
    fn fallback_compute_target(&self, target: TargetMapping) -> Result<SrgMappings, Error> {
        debug!("Computing {}", target);
        // NOTE: These relationships are hardcoded, and the reverse tables are always plain inversions
        Ok(match (target.original, target.renamed) {
            (MappingSystem::Notch, MappingSystem::Srg) => self.notch2srg.clone(),
            (MappingSystem::Notch, MappingSystem::Mcp) => self.notch2mcp(),
            (MappingSystem::Srg, MappingSystem::Mcp) => self.srg2mcp(),
            (MappingSystem::Srg, MappingSystem::Notch) => {
                self.compute_target(NOTCH2SRG)?.inverted()
            },
            (MappingSystem::Mcp, MappingSystem::Srg) => {
                self.compute_target(SRG2MCP)?.inverted()
            },
            (MappingSystem::Mcp, MappingSystem::Notch) => {
                self.compute_target(NOTCH2MCP)?.inverted()
            },
            (MappingSystem::Notch, MappingSystem::Notch) |
            (MappingSystem::Srg, MappingSystem::Srg) |
            (MappingSystem::Mcp, MappingSystem::Mcp) => return Err(RedundantTarget(target).into()),
        })
    }
    fn notch2mcp(&self) -> SrgMappings {
        let input = self.notch2srg;
        SrgMappings {
            // Nobody renames packages or classes after srg
            packages: input.packages.clone(),
            classes: input.classes.clone(),
            fields: input.fields.iter()
                .map(|&(ref notch, ref srg)| (notch.clone(), self.mcp_field(srg)))
                .collect(),
            methods: input.methods.iter()
                .map(|&(ref notch, ref srg)| (notch.clone(), self.mcp_method(srg)))
                .collect(),
        }
    }
    fn srg2mcp(&self) -> SrgMappings {
        let input = self.notch2srg;
        SrgMappings {
            // Packages are identical in srg and mcp, so there's no point in listing them at all
            packages: Default::default(),
            classes: input.classes.renamed()
                .map(|srg| (srg.clone(), srg.clone()))
                .collect(),
            fields: input.fields.renamed()
                .map(|srg| (srg.clone(), self.mcp_field(srg)))
                .collect(),
            methods: input.methods.renamed()
                .map(|srg| (srg.clone(), self.mcp_method(srg)))
                .collect(),
        }
    }
    #[inline]
    fn mcp_field(&self, srg: &FieldRef) -> FieldRef {
        match self.mcp.fields.get(srg.short_name()) {
            Some(mcp) => srg.renamed(mcp),
            None => srg.clone()
        }
    }
    #[inline]
    fn mcp_method(&self, srg: &MethodRef) -> MethodRef {
        match self.mcp.methods.get(srg.short_name()) {
            Some(mcp) => srg.renamed(mcp),
            None => srg.clone()
        }
    }
}
#[derive(Debug, Fail)]
#[fail(display = "Unable to compute {}: {}", target, cause)]
pub struct TargetComputeError {
    target: TargetMapping,
    cause: Error
}
#[derive(Debug, Fail)]
#[fail(display = "Redundant target {}", _0)]
pub struct RedundantTarget(TargetMapping);
