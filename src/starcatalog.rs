//! In-memory star collection keyed by catalog id.
//!
//! `StarCatalog` is an owned snapshot: every pipeline phase (recentering,
//! rotation) takes a catalog by reference and returns a new one, so a catalog
//! a caller still holds is never shifted or rotated twice.
//!
//! Iteration is in ascending id order. That order also decides which star wins
//! when two stars share a designation and one of them is looked up by name.

use std::collections::btree_map::{self, BTreeMap};

use crate::error::DecodeError;
use crate::{Rotor, StarRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarCatalog {
    stars: BTreeMap<u32, StarRecord>,
}

impl StarCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from owned records, rejecting duplicate ids.
    pub fn from_stars<I>(stars: I) -> Result<Self, DecodeError>
    where
        I: IntoIterator<Item = StarRecord>,
    {
        let mut catalog = Self::new();
        for star in stars {
            catalog.insert(star)?;
        }
        Ok(catalog)
    }

    /// Insert a star, failing if its id is already present.
    pub fn insert(&mut self, star: StarRecord) -> Result<(), DecodeError> {
        match self.stars.entry(star.id) {
            btree_map::Entry::Occupied(_) => Err(DecodeError::DuplicateId { id: star.id }),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(star);
                Ok(())
            }
        }
    }

    /// Return the total number of stars in the catalog.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Return `true` when the catalog contains no stars.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&StarRecord> {
        self.stars.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.stars.contains_key(&id)
    }

    /// Iterate over stars in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &StarRecord> {
        self.stars.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.stars.keys().copied()
    }

    /// First star (in catalog order) carrying `name` among its designations.
    pub fn find_by_name(&self, name: &str) -> Option<&StarRecord> {
        self.iter().find(|star| star.has_name(name))
    }

    /// New snapshot with every star position rotated by `rotor`.
    pub fn rotated(&self, rotor: &Rotor) -> StarCatalog {
        self.iter()
            .map(|star| StarRecord {
                position: rotor.rotate_vector(&star.position),
                ..star.clone()
            })
            .collect()
    }

    /// One line per star with all designations joined by `", "`.
    pub fn name_listing(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|star| star.names.join(", "))
    }
}

impl FromIterator<StarRecord> for StarCatalog {
    /// Collect records; a later record with an already-seen id replaces the
    /// earlier one. Use [`StarCatalog::from_stars`] to reject duplicates.
    fn from_iter<T: IntoIterator<Item = StarRecord>>(iter: T) -> Self {
        Self {
            stars: iter.into_iter().map(|star| (star.id, star)).collect(),
        }
    }
}

impl IntoIterator for StarCatalog {
    type Item = StarRecord;
    type IntoIter = btree_map::IntoValues<u32, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.into_values()
    }
}

impl<'a> IntoIterator for &'a StarCatalog {
    type Item = &'a StarRecord;
    type IntoIter = btree_map::Values<'a, u32, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.values()
    }
}
