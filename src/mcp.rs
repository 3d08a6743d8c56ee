//! MCP's crowd sourced names, keyed by srg short name.
use std::io::Read;
use std::iter::FromIterator;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::error::{FormatError, IoFailure};

/// A lookup from one short name to another.
///
/// The keys are unqualified, so every member sharing a short name gets the same rename.
/// That's fine for srg names, since each `func_1234_a` is unique.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenameDictionary(IndexMap<String, String>);
impl RenameDictionary {
    #[inline]
    pub fn new() -> RenameDictionary {
        RenameDictionary::default()
    }
    #[inline]
    pub fn get(&self, short_name: &str) -> Option<&str> {
        self.0.get(short_name).map(String::as_str)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> Iter<String, String> {
        self.0.iter()
    }
    /// Reverse the dictionary, mapping the new names back to the old ones.
    ///
    /// MCP names are far from unique (there are plenty of `getName`s),
    /// so any new name claimed by more than one old name is left out entirely.
    pub fn inverted_unambiguous(&self) -> RenameDictionary {
        let mut inverted: IndexMap<&str, Option<&str>> = IndexMap::with_capacity(self.len());
        for (original, renamed) in self.iter() {
            inverted.entry(renamed.as_str())
                .and_modify(|existing| *existing = None)
                .or_insert(Some(original.as_str()));
        }
        inverted.into_iter()
            .filter_map(|(renamed, original)| original.map(|original| (renamed.to_string(), original.to_string())))
            .collect()
    }
}
impl FromIterator<(String, String)> for RenameDictionary {
    /// Later entries replace earlier ones with the same key
    #[inline]
    fn from_iter<T: IntoIterator<Item=(String, String)>>(iter: T) -> Self {
        RenameDictionary(iter.into_iter().collect())
    }
}

#[derive(Debug, Default)]
pub struct McpMappings {
    pub fields: RenameDictionary,
    pub methods: RenameDictionary
}
impl McpMappings {
    #[inline]
    pub fn new() -> Self {
        McpMappings::default()
    }
    pub fn load(fields_file: &Path, methods_file: &Path) -> Result<McpMappings, ::failure::Error> {
        let mut mappings = McpMappings::new();
        mappings.load_fields(&mut open_csv(fields_file)?)
            .map_err(|e| e.in_file(fields_file))?;
        mappings.load_methods(&mut open_csv(methods_file)?)
            .map_err(|e| e.in_file(methods_file))?;
        Ok(mappings)
    }
    pub fn load_fields<R: Read>(&mut self, reader: &mut ::csv::Reader<R>) -> Result<(), FormatError> {
        self.fields = load_record_map(reader)?;
        Ok(())
    }
    pub fn load_methods<R: Read>(&mut self, reader: &mut ::csv::Reader<R>) -> Result<(), FormatError> {
        self.methods = load_record_map(reader)?;
        Ok(())
    }
}
fn open_csv(path: &Path) -> Result<::csv::Reader<::std::fs::File>, IoFailure> {
    let file = ::std::fs::File::open(path).map_err(|cause| IoFailure::reading(path, cause))?;
    Ok(reader_builder().from_reader(file))
}
/// The first line is a header (`searge,name,side,desc` for MCP's own exports)
#[inline]
pub fn reader_builder() -> ::csv::ReaderBuilder {
    let mut builder = ::csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(false);
    builder
}
/// Take the first two columns of every row, ignoring the rest
fn load_record_map<R: Read>(
    reader: &mut ::csv::Reader<R>
) -> Result<RenameDictionary, FormatError> {
    reader.records()
        .map(|result| -> Result<(String, String), FormatError> {
            let record = result?;
            match (record.get(0), record.get(1)) {
                (Some(original), Some(renamed)) => Ok((original.to_string(), renamed.to_string())),
                _ => Err(FormatError::MalformedRow {
                    row: record.position().map_or(0, |position| position.line()),
                    columns: record.len()
                })
            }
        }).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    fn parse(text: &str) -> Result<RenameDictionary, FormatError> {
        load_record_map(&mut reader_builder().from_reader(text.as_bytes()))
    }
    #[test]
    fn load_mcp_export() {
        let dictionary = parse("searge,name,side,desc\n\
            func_1234_a,getWorld,2,Gets the world\n\
            func_5678_b,tick,0,\n").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("func_1234_a"), Some("getWorld"));
        assert_eq!(dictionary.get("func_5678_b"), Some("tick"));
        assert_eq!(dictionary.get("getWorld"), None);
    }
    #[test]
    fn load_two_columns() {
        let dictionary = parse("searge,name\nfield_1_a,world\n").unwrap();
        assert_eq!(dictionary.get("field_1_a"), Some("world"));
    }
    #[test]
    fn last_write_wins() {
        let dictionary = parse("searge,name\nfunc_1_a,first\nfunc_1_a,second\n").unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("func_1_a"), Some("second"));
    }
    #[test]
    fn wrong_column_count() {
        assert!(parse("searge,name\nfunc_1_a,first,extra\n").is_err());
        match parse("searge\nfunc_1_a\n") {
            Err(FormatError::MalformedRow { columns, .. }) => assert_eq!(columns, 1),
            other => panic!("Unexpected result {:?}", other)
        }
    }
    #[test]
    fn inverted_drops_ambiguous_names() {
        let dictionary: RenameDictionary = vec![
            ("func_1_a".to_string(), "getName".to_string()),
            ("func_2_b".to_string(), "tick".to_string()),
            ("func_3_c".to_string(), "getName".to_string()),
        ].into_iter().collect();
        let inverted = dictionary.inverted_unambiguous();
        assert_eq!(inverted.get("tick"), Some("func_2_b"));
        assert_eq!(inverted.get("getName"), None);
        assert_eq!(inverted.len(), 1);
    }
}
