// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! A wrapper around a `typed_generational_arena::Arena` that also provides lookup by name.
//!
//! We use `MappedArena` to store resolved interfaces keyed by the interface name; its
//! `contains_key` is how duplicate interface names are detected. Values are never removed, so
//! iterating the underlying arena yields them in insertion order, which keeps the resolved output
//! in declaration order.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize, Serializer};

use typed_generational_arena::{Arena, IgnoreGeneration, Index};

pub type SerializableSlab<T> = Arena<T, usize, IgnoreGeneration>;
pub type SerializableSlabIndex<T> = Index<T, usize, IgnoreGeneration>;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MappedArena<V> {
    values: SerializableSlab<V>,
    #[serde(serialize_with = "ordered_map")] // sort by key so that the output is stable
    map: HashMap<String, SerializableSlabIndex<V>>,
}

fn ordered_map<S: Serializer, V: Serialize>(
    value: &HashMap<String, SerializableSlabIndex<V>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let ordered = value.iter().collect::<BTreeMap<_, _>>();
    ordered.serialize(serializer)
}

impl<V> MappedArena<V> {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn get_id(&self, key: &str) -> Option<SerializableSlabIndex<V>> {
        self.map.get(key).copied()
    }

    pub fn get_by_key(&self, key: &str) -> Option<&V> {
        self.get_id(key).map(|id| &self.values[id])
    }

    /// Add a value under `key`, keeping the existing value if the key is already present.
    pub fn add(&mut self, key: &str, value: V) -> SerializableSlabIndex<V> {
        match self.try_add(key, value) {
            Ok(id) => id,
            Err(_) => self.map[key],
        }
    }

    /// Add a value under `key`, handing the value back if the key is already taken.
    pub fn try_add(&mut self, key: &str, value: V) -> Result<SerializableSlabIndex<V>, V> {
        if self.map.contains_key(key) {
            return Err(value);
        }

        let id = self.values.insert(value);
        self.map.insert(key.to_string(), id);
        Ok(id)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter().map(|(_, value)| value)
    }
}

impl<V> Default for MappedArena<V> {
    fn default() -> Self {
        MappedArena {
            values: SerializableSlab::new(),
            map: HashMap::default(),
        }
    }
}

impl<V> std::ops::Index<SerializableSlabIndex<V>> for MappedArena<V> {
    type Output = V;

    #[inline]
    fn index(&self, id: SerializableSlabIndex<V>) -> &V {
        &self.values[id]
    }
}
