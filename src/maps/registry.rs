//! Explicit map registry.

use super::{GameMap, HazardPitsMap, StandardMap};
use std::collections::BTreeMap;
use std::fmt;

/// Error looking up or registering a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A map with this id is already registered.
    DuplicateId(String),
    /// No map has this id.
    UnknownMap(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "map already registered: {id}"),
            Self::UnknownMap(id) => write!(f, "unknown map: {id}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Every map this crate provides, in registration order.
fn builtin_maps() -> Vec<Box<dyn GameMap>> {
    vec![Box::new(StandardMap), Box::new(HazardPitsMap)]
}

/// Maps available to a game server, keyed by id.
#[derive(Debug, Default)]
pub struct MapRegistry {
    maps: BTreeMap<&'static str, Box<dyn GameMap>>,
}

impl MapRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every map this crate provides.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] if two built-in maps share an id.
    pub fn with_builtin_maps() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for map in builtin_maps() {
            registry.register(map)?;
        }
        Ok(registry)
    }

    /// Add a map.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] if the id is taken.
    pub fn register(&mut self, map: Box<dyn GameMap>) -> Result<(), RegistryError> {
        let id = map.id();
        if self.maps.contains_key(id) {
            return Err(RegistryError::DuplicateId(id.to_string()));
        }
        self.maps.insert(id, map);
        Ok(())
    }

    /// Look up a map by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownMap`] if no map has the id.
    pub fn get(&self, id: &str) -> Result<&dyn GameMap, RegistryError> {
        self.maps
            .get(id)
            .map(|map| &**map)
            .ok_or_else(|| RegistryError::UnknownMap(id.to_string()))
    }

    /// Registered ids in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.maps.keys().copied().collect()
    }

    /// Iterate over registered maps in id order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn GameMap> {
        self.maps.values().map(|map| &**map)
    }

    /// Maps that can host a game of this size and player count.
    #[must_use]
    pub fn compatible(&self, width: i32, height: i32, players: usize) -> Vec<&dyn GameMap> {
        self.iter()
            .filter(|map| map.meta().supports(width, height, players))
            .collect()
    }

    /// Number of registered maps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Check if no maps are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
