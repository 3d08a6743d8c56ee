use std::str::FromStr;
use std::fmt::{self, Display, Formatter};

use failure_derive::Fail;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MappingSystem {
    Notch,
    Srg,
    Mcp
}
impl MappingSystem {
    #[inline]
    fn id(self) -> &'static str {
        match self {
            MappingSystem::Notch => "notch",
            MappingSystem::Srg => "srg",
            MappingSystem::Mcp => "mcp",
        }
    }
    fn from_id(id: &str) -> Option<MappingSystem> {
        Some(match id {
            "notch" | "obf" => MappingSystem::Notch,
            "srg" => MappingSystem::Srg,
            "mcp" => MappingSystem::Mcp,
            _ => return None
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TargetMapping {
    pub original: MappingSystem,
    pub renamed: MappingSystem
}
impl TargetMapping {
    #[inline]
    pub const fn new(original: MappingSystem, renamed: MappingSystem) -> TargetMapping {
        TargetMapping { original, renamed }
    }
    #[inline]
    pub const fn reversed(self) -> TargetMapping {
        TargetMapping { original: self.renamed, renamed: self.original }
    }
}
pub(crate) const NOTCH2SRG: TargetMapping = TargetMapping::new(MappingSystem::Notch, MappingSystem::Srg);
pub(crate) const NOTCH2MCP: TargetMapping = TargetMapping::new(MappingSystem::Notch, MappingSystem::Mcp);
pub(crate) const SRG2MCP: TargetMapping = TargetMapping::new(MappingSystem::Srg, MappingSystem::Mcp);
pub(crate) const MCP2SRG: TargetMapping = SRG2MCP.reversed();
pub(crate) const MCP2NOTCH: TargetMapping = NOTCH2MCP.reversed();

/// Every table a workspace needs, in the order we generate them
pub const GENERATED_TARGETS: [TargetMapping; 5] = [NOTCH2SRG, NOTCH2MCP, SRG2MCP, MCP2SRG, MCP2NOTCH];

impl FromStr for TargetMapping {
    type Err = InvalidTarget;

    fn from_str(s: &str) -> Result<Self, InvalidTarget> {
        let invalid_target = || InvalidTarget(s.into());
        let mapping_separator = s.find('2').ok_or_else(invalid_target)?;
        let original = MappingSystem::from_id(&s[..mapping_separator])
            .ok_or_else(invalid_target)?;
        let renamed = MappingSystem::from_id(&s[(mapping_separator + 1)..])
            .ok_or_else(invalid_target)?;
        Ok(TargetMapping { original, renamed })
    }
}
impl Display for TargetMapping {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}2{}", self.original.id(), self.renamed.id())
    }
}
#[derive(Debug, Fail)]
#[fail(display = "Invalid target {:?}", _0)]
pub struct InvalidTarget(String);

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn parse_target() {
        assert_eq!(TargetMapping {
            original: MappingSystem::Srg,
            renamed: MappingSystem::Mcp,
        }, "srg2mcp".parse().unwrap());
        assert_eq!(TargetMapping {
            original: MappingSystem::Notch,
            renamed: MappingSystem::Mcp,
        }, "notch2mcp".parse().unwrap());
        assert_eq!(NOTCH2SRG, "obf2srg".parse().unwrap());
        assert!("spigot2mcp".parse::<TargetMapping>().is_err());
        assert!("srgmcp".parse::<TargetMapping>().is_err());
    }
    #[test]
    fn display_target() {
        let names: Vec<String> = GENERATED_TARGETS.iter()
            .map(|target| format!("{}", target))
            .collect();
        assert_eq!(names, vec!["notch2srg", "notch2mcp", "srg2mcp", "mcp2srg", "mcp2notch"]);
    }
    #[test]
    fn reversed() {
        assert_eq!(MCP2SRG, "mcp2srg".parse().unwrap());
        assert_eq!(MCP2NOTCH.reversed(), NOTCH2MCP);
    }
}
