// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Member graph model: people and the relations between them.

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

use hashbrown::HashSet;
use smallvec::SmallVec;

/// Stable identifier for a [`Member`].
///
/// Identifiers are supplied by the data source and compared by value. They
/// are never generated by this crate.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Creates an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for MemberId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Relation list; most people declare at most two parents or partners.
pub type Relations = SmallVec<[MemberId; 2]>;

/// A person in the family graph.
///
/// Members are immutable for the duration of a layout pass. Relations may
/// reference ids that are not part of the current member set; those are
/// tolerated and simply produce no connector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    /// Unique, stable identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Generation rank. `None` is treated as generation `0`.
    pub generation: Option<i32>,
    /// Free-form relation label such as "Mother" or "Partner".
    pub relation: Option<String>,
    /// Declared parents.
    pub parents: Relations,
    /// Declared children.
    pub children: Relations,
    /// Declared partners. Informational only; layout ignores them.
    pub partners: Relations,
}

impl Member {
    /// Creates a member with no generation and no relations.
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            generation: None,
            relation: None,
            parents: Relations::new(),
            children: Relations::new(),
            partners: Relations::new(),
        }
    }

    /// Sets the generation rank.
    #[must_use]
    pub fn with_generation(mut self, generation: i32) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Sets the relation label.
    #[must_use]
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    /// Replaces the declared parents.
    #[must_use]
    pub fn with_parents<I, T>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MemberId>,
    {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the declared children.
    #[must_use]
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MemberId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the declared partners.
    #[must_use]
    pub fn with_partners<I, T>(mut self, partners: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MemberId>,
    {
        self.partners = partners.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the generation, defaulting to `0` when absent.
    #[must_use]
    pub fn generation_or_default(&self) -> i32 {
        self.generation.unwrap_or(0)
    }
}

/// Problem found by [`validate_members`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberSetError {
    /// Two members share the same id.
    DuplicateId(MemberId),
    /// A member lists itself as its own parent, child or partner.
    SelfRelation(MemberId),
}

impl fmt::Display for MemberSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "member id '{id}' is used more than once"),
            Self::SelfRelation(id) => write!(f, "member '{id}' is related to itself"),
        }
    }
}

impl core::error::Error for MemberSetError {}

/// Checks a member set for problems the layout tolerates but callers may
/// want to surface.
///
/// Layout never calls this; dangling relation ids are not reported because
/// they are an expected consequence of showing a partial family.
pub fn validate_members(members: &[Member]) -> Result<(), MemberSetError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(members.len());
    for member in members {
        if !seen.insert(member.id.as_str()) {
            return Err(MemberSetError::DuplicateId(member.id.clone()));
        }
        let mut related = member
            .parents
            .iter()
            .chain(&member.children)
            .chain(&member.partners);
        if related.any(|other| *other == member.id) {
            return Err(MemberSetError::SelfRelation(member.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn missing_generation_defaults_to_zero() {
        let m = Member::new("ada", "Ada Hart");
        assert_eq!(m.generation, None);
        assert_eq!(m.generation_or_default(), 0);
        assert_eq!(m.with_generation(3).generation_or_default(), 3);
    }

    #[test]
    fn builders_collect_relations() {
        let m = Member::new("evelyn", "Evelyn Hart")
            .with_relation("Mother")
            .with_parents(["ruth", "samuel"])
            .with_children(["jordan"])
            .with_partners(["marcus"]);
        assert_eq!(m.parents.len(), 2);
        assert_eq!(m.children[0].as_str(), "jordan");
        assert_eq!(m.partners[0], MemberId::from("marcus"));
        assert_eq!(m.relation.as_deref(), Some("Mother"));
    }

    #[test]
    fn validate_accepts_dangling_relations() {
        let members = vec![Member::new("a", "A").with_children(["ghost"])];
        assert_eq!(validate_members(&members), Ok(()));
    }

    #[test]
    fn validate_reports_duplicates_and_self_relations() {
        let dup = vec![Member::new("a", "A"), Member::new("a", "Other A")];
        assert_eq!(
            validate_members(&dup),
            Err(MemberSetError::DuplicateId("a".into()))
        );

        let selfish = vec![Member::new("b", "B").with_partners(["b"])];
        let err = validate_members(&selfish).unwrap_err();
        assert_eq!(err, MemberSetError::SelfRelation("b".into()));
        assert_eq!(err.to_string(), "member 'b' is related to itself");
    }
}
