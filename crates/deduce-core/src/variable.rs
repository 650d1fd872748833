use tinyvec::TinyVec;

/// Identifier of a problem variable.
///
/// Identifiers are dense indices handed out in declaration order, so ordering
/// two identifiers orders them by declaration.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("#{_0}")]
pub struct VarId(usize);

impl VarId {
    /// Creates an identifier from a declaration index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the declaration index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A set of variables that must all take pairwise-distinct values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    members: TinyVec<[VarId; 9]>,
}

impl Group {
    pub(crate) fn new(members: TinyVec<[VarId; 9]>) -> Self {
        Self { members }
    }

    /// Returns the members in declaration order of the group.
    #[must_use]
    pub fn members(&self) -> &[VarId] {
        &self.members
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `var` belongs to the group.
    #[must_use]
    pub fn contains(&self, var: VarId) -> bool {
        self.members.contains(&var)
    }
}
