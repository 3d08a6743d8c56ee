//! Exception entries, in the `.exc` format MCP ships.
//!
//! Each line maps a method signature to the checked exceptions it declares:
//! ```text
//! net/minecraft/A.func_1234_a(I)V=java/io/IOException,java/lang/InterruptedException
//! ```
//! The owner is separated from the method name by a dot rather than a slash.
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::path::Path;

use crate::mcp::RenameDictionary;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExceptionEntry {
    Method {
        owner: String,
        name: String,
        /// Everything from the opening parenthesis to the end of the signature
        descriptor: String,
        /// Whatever follows the first `=`, if there is one
        exceptions: Option<String>
    },
    /// Anything that isn't a method signature, which we carry along untouched
    Other(String)
}
impl ExceptionEntry {
    pub fn parse(line: &str) -> ExceptionEntry {
        let (signature, exceptions) = match line.find('=') {
            Some(index) => (&line[..index], Some(&line[(index + 1)..])),
            None => (line, None)
        };
        let signature_start = match signature.find('(') {
            Some(index) => index,
            None => return ExceptionEntry::Other(line.into())
        };
        let dot = match signature[..signature_start].rfind('.') {
            Some(index) => index,
            None => return ExceptionEntry::Other(line.into())
        };
        ExceptionEntry::Method {
            owner: signature[..dot].into(),
            name: signature[(dot + 1)..signature_start].into(),
            descriptor: signature[signature_start..].into(),
            exceptions: exceptions.map(String::from)
        }
    }
    #[inline]
    pub fn method_name(&self) -> Option<&str> {
        match *self {
            ExceptionEntry::Method { ref name, .. } => Some(name.as_str()),
            ExceptionEntry::Other(_) => None
        }
    }
    /// Rename the method if the dictionary knows its name, passing everything else through
    pub fn renamed(&self, dictionary: &RenameDictionary) -> ExceptionEntry {
        match *self {
            ExceptionEntry::Method { ref owner, ref name, ref descriptor, ref exceptions } => {
                let name = dictionary.get(name).unwrap_or(name);
                ExceptionEntry::Method {
                    owner: owner.clone(),
                    name: name.into(),
                    descriptor: descriptor.clone(),
                    exceptions: exceptions.clone()
                }
            },
            ExceptionEntry::Other(_) => self.clone()
        }
    }
}
impl Display for ExceptionEntry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ExceptionEntry::Method { ref owner, ref name, ref descriptor, ref exceptions } => {
                write!(f, "{}.{}{}", owner, name, descriptor)?;
                if let Some(ref exceptions) = *exceptions {
                    write!(f, "={}", exceptions)?;
                }
                Ok(())
            },
            ExceptionEntry::Other(ref line) => f.write_str(line)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExceptionList(pub Vec<ExceptionEntry>);
impl ExceptionList {
    #[inline]
    pub fn new() -> ExceptionList {
        ExceptionList::default()
    }
    pub fn parse_text(text: &str) -> ExceptionList {
        ExceptionList(text.lines().map(ExceptionEntry::parse).collect())
    }
    pub fn load(path: &Path) -> Result<ExceptionList, ::failure::Error> {
        Ok(ExceptionList::parse_text(&crate::utils::read_to_string(path)?))
    }
    #[inline]
    pub fn push(&mut self, entry: ExceptionEntry) {
        self.0.push(entry);
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
    pub fn iter(&self) -> ::std::slice::Iter<ExceptionEntry> {
        self.0.iter()
    }
    pub fn write<W: Write>(&self, mut output: W) -> io::Result<()> {
        for entry in &self.0 {
            writeln!(output, "{}", entry)?;
        }
        Ok(())
    }
    pub fn write_string(&self) -> String {
        self.0.iter().map(|entry| format!("{}\n", entry)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn parse_method() {
        let entry = ExceptionEntry::parse("a/B.foo(I)V=java/io/IOException");
        assert_eq!(entry, ExceptionEntry::Method {
            owner: "a/B".into(),
            name: "foo".into(),
            descriptor: "(I)V".into(),
            exceptions: Some("java/io/IOException".into())
        });
        assert_eq!(format!("{}", entry), "a/B.foo(I)V=java/io/IOException");
    }
    #[test]
    fn display_is_verbatim() {
        for line in &[
            "a/B.foo(I)V=",
            "a/B.foo(I)V",
            "a/B$C.<init>(Ljava/lang/String;)V=java/io/IOException,java/lang/Exception",
            "a/B.foo(I)V=|p_1_,p_2_=x",
            "# a comment",
            "",
        ] {
            assert_eq!(format!("{}", ExceptionEntry::parse(line)), *line);
        }
    }
    #[test]
    fn pass_through_non_methods() {
        assert_eq!(ExceptionEntry::parse("a/B.foo=bar"), ExceptionEntry::Other("a/B.foo=bar".into()));
        assert_eq!(ExceptionEntry::parse("a/B/foo(I)V=bar"), ExceptionEntry::Other("a/B/foo(I)V=bar".into()));
        // The dot has to come before the parenthesis
        assert_eq!(ExceptionEntry::parse("foo(Ljava.lang.String;)V"), ExceptionEntry::Other("foo(Ljava.lang.String;)V".into()));
        assert_eq!(ExceptionEntry::parse("a/B.foo(I)V=").method_name(), Some("foo"));
    }
    #[test]
    fn rename() {
        let dictionary: RenameDictionary = vec![("foo".to_string(), "bar".to_string())].into_iter().collect();
        let entry = ExceptionEntry::parse("a/B.foo(I)V=java/io/IOException");
        assert_eq!(format!("{}", entry.renamed(&dictionary)), "a/B.bar(I)V=java/io/IOException");
        let unknown = ExceptionEntry::parse("a/B.baz(I)V=java/io/IOException");
        assert_eq!(unknown.renamed(&dictionary), unknown);
        let other = ExceptionEntry::parse("foo");
        assert_eq!(other.renamed(&dictionary), other);
    }
    #[test]
    fn list_round_trips() {
        let text = "a/B.foo(I)V=java/io/IOException\nnot a method\n";
        let list = ExceptionList::parse_text(text);
        assert_eq!(list.len(), 2);
        assert_eq!(list.write_string(), text);
        let mut buffer = Vec::new();
        list.write(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), text);
    }
}
