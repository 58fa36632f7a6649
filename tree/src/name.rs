use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use crate::ConstructionError;

/// A wrapper type for validated node names.
/// Disallows the empty string and line breaks, so every node occupies
/// exactly one line of a listing. Duplicates are fine.
#[repr(transparent)]
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    inner: String,
}

pub(crate) fn validate_name(name: &str) -> Result<(), ConstructionError> {
    if name.is_empty() {
        return Err(ConstructionError::Empty);
    }
    if name.contains(|c| c == '\n' || c == '\r') {
        return Err(ConstructionError::LineBreak(name.to_owned()));
    }

    Ok(())
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.inner
    }
}

impl TryFrom<String> for Name {
    type Error = ConstructionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_name(&value)?;
        Ok(Self { inner: value })
    }
}

impl TryFrom<&str> for Name {
    type Error = ConstructionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_name(value)?;
        Ok(Self {
            inner: value.to_owned(),
        })
    }
}

impl FromStr for Name {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
