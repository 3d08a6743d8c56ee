use mappings::{ExceptionList, RenameDictionary};

/// The exception tables in both the srg and mcp namespaces
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RemappedExceptions {
    pub srg: ExceptionList,
    pub mcp: ExceptionList
}

/// Remap the exception entries into both namespaces.
///
/// The primary entries are already in srg names, so they're remapped forwards into mcp.
/// The extra entries are in mcp names, and are remapped backwards into srg,
/// using only the mcp names that identify a single srg name.
/// Anything that isn't a method signature ends up in both tables unchanged.
pub fn remap_exceptions(
    primary: &ExceptionList,
    extras: &[ExceptionList],
    methods: &RenameDictionary
) -> RemappedExceptions {
    let mut result = RemappedExceptions::default();
    for entry in primary.iter() {
        result.srg.push(entry.clone());
        result.mcp.push(entry.renamed(methods));
    }
    let reversed = methods.inverted_unambiguous();
    for extra in extras {
        for entry in extra.iter() {
            result.mcp.push(entry.clone());
            result.srg.push(entry.renamed(&reversed));
        }
    }
    result
}
