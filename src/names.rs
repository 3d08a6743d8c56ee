//! Fields and methods, as they're spelled in a single namespace.
//!
//! A `FieldRef` in one namespace and the `FieldRef` of the same field in another namespace
//! have nothing in common except a row in some mapping table.
use std::fmt::{self, Display, Formatter};

/// Split a slash separated path at its final segment
#[inline]
fn split_last_segment(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(index) => (&path[..index], &path[(index + 1)..]),
        None => ("", path)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FieldRef {
    /// The internal name of the declaring class, like `net/minecraft/server/World`
    pub owner: String,
    pub name: String
}
impl FieldRef {
    #[inline]
    pub fn new<O: Into<String>, N: Into<String>>(owner: O, name: N) -> FieldRef {
        FieldRef { owner: owner.into(), name: name.into() }
    }
    /// Parse a qualified field like `a/B/c`
    #[inline]
    pub fn parse(qualified: &str) -> FieldRef {
        let (owner, name) = split_last_segment(qualified);
        FieldRef::new(owner, name)
    }
    /// The unqualified name, which is what the rename dictionaries are keyed by
    #[inline]
    pub fn short_name(&self) -> &str {
        &self.name
    }
    /// The same field with only its final segment replaced
    #[inline]
    pub fn renamed(&self, name: &str) -> FieldRef {
        FieldRef::new(self.owner.clone(), name)
    }
}
impl Display for FieldRef {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.owner.is_empty() {
            write!(f, "{}/", self.owner)?;
        }
        f.write_str(&self.name)
    }
}

/// A method reference, carrying its descriptor.
///
/// The descriptor is spelled in whatever namespace the owner is,
/// but we never remap it ourselves.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MethodRef {
    pub owner: String,
    pub name: String,
    pub descriptor: String
}
impl MethodRef {
    #[inline]
    pub fn new<O, N, D>(owner: O, name: N, descriptor: D) -> MethodRef
        where O: Into<String>, N: Into<String>, D: Into<String> {
        MethodRef { owner: owner.into(), name: name.into(), descriptor: descriptor.into() }
    }
    /// Parse a qualified method `a/B/c` with its descriptor `(I)V`
    #[inline]
    pub fn parse(qualified: &str, descriptor: &str) -> MethodRef {
        let (owner, name) = split_last_segment(qualified);
        MethodRef::new(owner, name, descriptor)
    }
    #[inline]
    pub fn short_name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn renamed(&self, name: &str) -> MethodRef {
        MethodRef::new(self.owner.clone(), name, self.descriptor.clone())
    }
}
impl Display for MethodRef {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.owner.is_empty() {
            write!(f, "{}/", self.owner)?;
        }
        write!(f, "{} {}", self.name, self.descriptor)
    }
}
