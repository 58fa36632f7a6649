use crate::{ConstructionError, List, Name};

/// A Leaf represents a single, non-decomposable resource.
/// Listing it yields exactly its own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    name: Name,
}

impl Leaf {
    pub fn new(name: impl AsRef<str>) -> Result<Self, ConstructionError> {
        Ok(Self {
            name: name.as_ref().try_into()?,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn rename(&mut self, name: Name) {
        self.name = name;
    }

    pub fn list(&self) -> List<'_> {
        List::leaf(self)
    }
}

impl From<Name> for Leaf {
    fn from(name: Name) -> Self {
        Self { name }
    }
}
