//! Centre lookup and display-name resolution.

use std::collections::HashMap;

use budgetscope_shared::types::CentreId;

use super::types::{Centre, Responsable};

/// Display name for records whose centre is missing from the collection.
pub const UNASSIGNED_CENTRE_NAME: &str = "N/A";

/// How a centre's denormalized responsible-party name relates to the
/// current Responsable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsableLink<'a> {
    /// The stored name matches a current Responsable.
    Linked(&'a Responsable),
    /// The stored name matches no Responsable (renamed or deleted since).
    Stale(&'a str),
    /// No responsible party stored.
    Unassigned,
}

/// Read-only index over a centre collection.
///
/// When the collection holds duplicate ids the first centre wins.
#[derive(Debug, Clone)]
pub struct CentreDirectory<'a> {
    centres: &'a [Centre],
    by_id: HashMap<&'a CentreId, &'a Centre>,
}

impl<'a> CentreDirectory<'a> {
    /// Indexes `centres` by id.
    #[must_use]
    pub fn new(centres: &'a [Centre]) -> Self {
        let mut by_id = HashMap::with_capacity(centres.len());
        for centre in centres {
            by_id.entry(&centre.id).or_insert(centre);
        }
        Self { centres, by_id }
    }

    /// The indexed centres, in input order.
    #[must_use]
    pub const fn centres(&self) -> &'a [Centre] {
        self.centres
    }

    /// Number of centres in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.centres.len()
    }

    /// Returns true if the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.centres.is_empty()
    }

    /// Looks up a centre by id.
    #[must_use]
    pub fn get(&self, id: &CentreId) -> Option<&'a Centre> {
        self.by_id.get(id).copied()
    }

    /// Display name for `id`, or [`UNASSIGNED_CENTRE_NAME`] for orphan references.
    #[must_use]
    pub fn display_name(&self, id: &CentreId) -> &'a str {
        self.get(id)
            .map_or(UNASSIGNED_CENTRE_NAME, |centre| centre.name.as_str())
    }

    /// Name used for free-text search. Orphan references search as an empty name.
    #[must_use]
    pub fn search_name(&self, id: &CentreId) -> &'a str {
        self.get(id).map_or("", |centre| centre.name.as_str())
    }

    /// Resolves a centre's stored responsible-party name against `responsables`.
    #[must_use]
    pub fn responsable_link<'r>(
        centre: &'r Centre,
        responsables: &'r [Responsable],
    ) -> ResponsableLink<'r> {
        let stored = centre.responsable.trim();
        if stored.is_empty() {
            return ResponsableLink::Unassigned;
        }

        responsables
            .iter()
            .find(|r| r.display_name() == stored)
            .map_or(ResponsableLink::Stale(stored), ResponsableLink::Linked)
    }
}
