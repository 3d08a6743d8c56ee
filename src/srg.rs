//! The SRG text format.
//!
//! Each line is one record, tagged by its kind:
//! ```text
//! PK: ./ net/minecraft/server
//! CL: a net/minecraft/server/World
//! FD: a/b net/minecraft/server/World/field_1234_b
//! MD: a/c (I)Z net/minecraft/server/World/func_5678_c (I)Z
//! ```
use std::io::{self, BufRead, Write};
use std::path::Path;

use itertools::Itertools;

use crate::error::FormatError;
use crate::names::{FieldRef, MethodRef};
use crate::relation::Relation;

/// A complete srg table, with every record in the order it was read.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SrgMappings {
    pub packages: Relation<String, String>,
    pub classes: Relation<String, String>,
    pub fields: Relation<FieldRef, FieldRef>,
    pub methods: Relation<MethodRef, MethodRef>
}
impl SrgMappings {
    #[inline]
    pub fn new() -> SrgMappings {
        SrgMappings::default()
    }
    pub fn load(path: &Path) -> Result<SrgMappings, ::failure::Error> {
        let text = crate::utils::read_to_string(path)?;
        Ok(SrgMappings::parse_text(&text).map_err(|e| e.in_file(path))?)
    }
    pub fn parse_stream<R: BufRead>(reader: R) -> Result<SrgMappings, ::failure::Error> {
        let mut result = SrgMappings::new();
        for (index, line) in reader.lines().enumerate() {
            result.parse_line(index + 1, &line?)?;
        }
        Ok(result)
    }
    pub fn parse_text(text: &str) -> Result<SrgMappings, FormatError> {
        let mut result = SrgMappings::new();
        for (index, line) in text.lines().enumerate() {
            result.parse_line(index + 1, line)?;
        }
        Ok(result)
    }
    fn parse_line(&mut self, line_number: usize, line: &str) -> Result<(), FormatError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(())
        }
        let mut parts = trimmed.split_whitespace();
        let tag = parts.next().unwrap_or("");
        let malformed = |kind: &'static str| FormatError::MalformedRecord {
            kind, line_number, line: line.into()
        };
        match tag {
            "PK:" => {
                let (original, renamed) = parts.collect_tuple()
                    .ok_or_else(|| malformed("package"))?;
                self.packages.push(original.into(), renamed.into());
            },
            "CL:" => {
                let (original, renamed) = parts.collect_tuple()
                    .ok_or_else(|| malformed("class"))?;
                self.classes.push(original.into(), renamed.into());
            },
            "FD:" => {
                let (original, renamed) = parts.collect_tuple()
                    .ok_or_else(|| malformed("field"))?;
                self.fields.push(FieldRef::parse(original), FieldRef::parse(renamed));
            },
            "MD:" => {
                let (original, original_desc, renamed, renamed_desc) = parts.collect_tuple()
                    .ok_or_else(|| malformed("method"))?;
                self.methods.push(
                    MethodRef::parse(original, original_desc),
                    MethodRef::parse(renamed, renamed_desc)
                );
            },
            _ => return Err(FormatError::UnknownTag { line_number, line: line.into() })
        }
        Ok(())
    }
    /// Append every record of the other table after ours, kind by kind
    pub fn extend(&mut self, other: SrgMappings) {
        self.packages.extend(other.packages);
        self.classes.extend(other.classes);
        self.fields.extend(other.fields);
        self.methods.extend(other.methods);
    }
    /// Swap the original and renamed side of every record
    pub fn inverted(&self) -> SrgMappings {
        SrgMappings {
            packages: self.packages.inverted(),
            classes: self.classes.inverted(),
            fields: self.fields.inverted(),
            methods: self.methods.inverted()
        }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.packages.len() + self.classes.len() + self.fields.len() + self.methods.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn write<W: Write>(&self, mut output: W) -> io::Result<()> {
        for (original, renamed) in &self.packages {
            writeln!(output, "PK: {} {}", original, renamed)?;
        }
        for (original, renamed) in &self.classes {
            writeln!(output, "CL: {} {}", original, renamed)?;
        }
        for (original, renamed) in &self.fields {
            writeln!(output, "FD: {} {}", original, renamed)?;
        }
        for (original, renamed) in &self.methods {
            writeln!(output, "MD: {} {}", original, renamed)?;
        }
        Ok(())
    }
    pub fn write_string(&self) -> String {
        let mut buffer = Vec::with_capacity(self.len() * 64);
        self.write(&mut buffer).unwrap_or_else(|_| unreachable!());
        String::from_utf8(buffer).unwrap_or_else(|_| unreachable!())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    const SAMPLE: &str = "PK: ./ net/minecraft/server
CL: a net/minecraft/server/World
FD: a/b net/minecraft/server/World/field_1234_b
MD: a/c (La;)Z net/minecraft/server/World/func_5678_c (Lnet/minecraft/server/World;)Z
";
    #[test]
    fn parse_sample() {
        let mappings = SrgMappings::parse_text(SAMPLE).unwrap();
        assert_eq!(mappings.packages.len(), 1);
        assert_eq!(mappings.classes.iter().next().unwrap(), &("a".to_string(), "net/minecraft/server/World".to_string()));
        let &(ref notch, ref srg) = mappings.fields.iter().next().unwrap();
        assert_eq!(*notch, FieldRef::new("a", "b"));
        assert_eq!(srg.short_name(), "field_1234_b");
        let &(ref notch, ref srg) = mappings.methods.iter().next().unwrap();
        assert_eq!(notch.descriptor, "(La;)Z");
        assert_eq!(srg.descriptor, "(Lnet/minecraft/server/World;)Z");
        assert_eq!(srg.short_name(), "func_5678_c");
    }
    #[test]
    fn parse_stream_matches_text() {
        let from_stream = SrgMappings::parse_stream(::std::io::Cursor::new(SAMPLE)).unwrap();
        assert_eq!(from_stream, SrgMappings::parse_text(SAMPLE).unwrap());
    }
    #[test]
    fn write_round_trips_sample() {
        let mappings = SrgMappings::parse_text(SAMPLE).unwrap();
        assert_eq!(mappings.write_string(), SAMPLE);
    }
    #[test]
    fn kinds_are_grouped_in_order() {
        let mappings = SrgMappings::parse_text("MD: a/a ()V b/b ()V\nCL: a b\n\n# comment\nPK: c d\n").unwrap();
        assert_eq!(mappings.write_string(), "PK: c d\nCL: a b\nMD: a/a ()V b/b ()V\n");
    }
    #[test]
    fn comments_are_skipped_not_rejected() {
        let mappings = SrgMappings::parse_text("#XX: a b\n   \n  # CL: c d\nCL: a b\n").unwrap();
        assert_eq!(mappings.write_string(), "CL: a b\n");
        // Without the leading '#' the same tag is an error
        assert!(SrgMappings::parse_text("XX: a b\n").is_err());
    }
    #[test]
    fn unknown_tag() {
        match SrgMappings::parse_text("CL: a b\nXX: c d\n") {
            Err(FormatError::UnknownTag { line_number, line }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "XX: c d");
            },
            other => panic!("Unexpected result {:?}", other)
        }
    }
    #[test]
    fn malformed_record() {
        match SrgMappings::parse_text("MD: a/a ()V b/b\n") {
            Err(FormatError::MalformedRecord { kind, line_number, .. }) => {
                assert_eq!(kind, "method");
                assert_eq!(line_number, 1);
            },
            other => panic!("Unexpected result {:?}", other)
        }
        assert!(SrgMappings::parse_text("CL: a b c\n").is_err());
    }
    #[test]
    fn inverted_swaps_every_kind() {
        let mappings = SrgMappings::parse_text(SAMPLE).unwrap();
        assert_eq!(mappings.inverted().write_string(), "PK: net/minecraft/server ./
CL: net/minecraft/server/World a
FD: net/minecraft/server/World/field_1234_b a/b
MD: net/minecraft/server/World/func_5678_c (Lnet/minecraft/server/World;)Z a/c (La;)Z
");
        assert_eq!(mappings.inverted().inverted(), mappings);
    }
    #[test]
    fn extend_appends_by_kind() {
        let mut first = SrgMappings::parse_text("CL: a b\nFD: a/x b/y\n").unwrap();
        first.extend(SrgMappings::parse_text("CL: c d\n").unwrap());
        assert_eq!(first.write_string(), "CL: a b\nCL: c d\nFD: a/x b/y\n");
    }
}
