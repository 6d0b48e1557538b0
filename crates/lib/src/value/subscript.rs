//! Index, key and key-path access on [`Value`].
//!
//! Reads never fail; they return `None` when the address does not resolve.
//! Writes replace payloads in place and follow these rules:
//!
//! - Negative list indices count from the end (`-1` is the last element).
//! - Writing [`Value::Null`] removes the addressed list element or map entry.
//! - Writing past the end of a list pads it with [`Value::Null`] up to the
//!   target index and then appends.
//!
//! ```
//! use anyvalue::Value;
//!
//! let mut list = Value::empty_list();
//! list.set_index(3, 12.3);
//! assert_eq!(list.to_string(), "[null, null, null, 12.3]");
//!
//! list.set_index(3, Value::Null);
//! assert_eq!(list.to_string(), "[null, null, null]");
//! ```

use std::collections::BTreeMap;

use super::{KeyPath, Value, ValueError};

/// Resolves a possibly negative index against `len`.
///
/// Returns `None` when a negative index reaches before the first element.
/// The result may still be `>= len`.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok()
    } else {
        let len = i64::try_from(len).ok()?;
        usize::try_from(len.checked_add(index)?).ok()
    }
}

fn set_list_element(list: &mut Vec<Value>, index: i64, value: Value) -> Result<(), String> {
    let Some(index) = resolve_index(index, list.len()) else {
        return Ok(());
    };

    if value.is_null() {
        if index < list.len() {
            list.remove(index);
        }
        return Ok(());
    }

    if index < list.len() {
        list[index] = value;
    } else {
        let additional = index - list.len() + 1;
        list.try_reserve(additional)
            .map_err(|err| format!("cannot pad list to index {index}: {err}"))?;
        if index > list.len() {
            tracing::trace!(index, len = list.len(), "padding list with nulls");
        }
        list.resize(index, Value::Null);
        list.push(value);
    }
    Ok(())
}

fn set_map_entry(map: &mut BTreeMap<String, Value>, key: &str, value: Value) {
    if value.is_null() {
        map.remove(key);
    } else {
        map.insert(key.to_string(), value);
    }
}

impl Value {
    /// Gets a value by key.
    ///
    /// Maps look the key up directly. Lists parse the key as a base-10
    /// integer and defer to [`Value::get_index`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            Value::List(_) => self.get_index(key.parse().ok()?),
            _ => None,
        }
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Map(map) => map.get_mut(key),
            Value::List(list) => {
                let index = resolve_index(key.parse().ok()?, list.len())?;
                list.get_mut(index)
            }
            _ => None,
        }
    }

    /// Gets a value by integer index.
    ///
    /// Lists accept negative indices counting from the end. Maps render the
    /// index as a decimal string and look that key up.
    ///
    /// ```
    /// # use anyvalue::Value;
    /// let list = Value::List(vec![
    ///     Value::Int(123),
    ///     Value::from("str"),
    ///     Value::from_list([12.3]),
    /// ]);
    /// assert_eq!(list.get_index(-1), Some(&Value::from_list([12.3])));
    /// assert_eq!(list.get_index(-2), Some(&Value::from("str")));
    /// assert_eq!(list.get_index(3), None);
    /// ```
    pub fn get_index(&self, index: i64) -> Option<&Value> {
        match self {
            Value::List(list) => list.get(resolve_index(index, list.len())?),
            Value::Map(map) => map.get(&index.to_string()),
            _ => None,
        }
    }

    /// Resolves a key path.
    ///
    /// An empty path resolves to `self`. Map segments are looked up as keys,
    /// list segments must be non-negative base-10 indices within bounds.
    ///
    /// ```
    /// # use anyvalue::Value;
    /// let doc = Value::from_map([("a", Value::from_map([("b", vec![10i64, 20, 30])]))]);
    /// assert_eq!(doc.get_path("a.b.1"), Some(&Value::Int(20)));
    /// assert_eq!(doc.get_path("a.b.5"), None);
    /// assert_eq!(doc.get_path("a.c"), None);
    /// ```
    pub fn get_path(&self, path: impl Into<KeyPath>) -> Option<&Value> {
        self.resolve(&path.into())
    }

    fn resolve(&self, path: &KeyPath) -> Option<&Value> {
        let Some((head, tail)) = path.head_and_tail() else {
            return Some(self);
        };

        let child = match self {
            Value::Map(map) => map.get(head)?,
            Value::List(list) => list.get(head.parse::<usize>().ok()?)?,
            _ => return None,
        };

        if tail.is_empty() {
            Some(child)
        } else {
            child.resolve(&tail)
        }
    }

    /// Resolves a key path to a mutable reference, with the same rules as [`Value::get_path`]
    pub fn get_path_mut(&mut self, path: impl Into<KeyPath>) -> Option<&mut Value> {
        let path = path.into();
        let mut current = self;

        for segment in path.segments() {
            current = match current {
                Value::Map(map) => map.get_mut(segment.as_str())?,
                Value::List(list) => list.get_mut(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Writes a value at an integer index of a list.
    ///
    /// Writing [`Value::Null`] removes the element (no-op when out of
    /// bounds). Writing anything else replaces the element, or pads the list
    /// with nulls and appends when the index is past the end. Negative
    /// indices resolve against the current length; indices still negative
    /// after that are ignored. Padding that cannot be allocated skips the
    /// write. Non-list values are left untouched.
    pub fn set_index(&mut self, index: i64, value: impl Into<Value>) {
        if let Value::List(list) = self
            && let Err(reason) = set_list_element(list, index, value.into())
        {
            tracing::debug!(index, reason = %reason, "index write skipped");
        }
    }

    /// Writes a value by key.
    ///
    /// Maps upsert the entry, or delete it when `value` is [`Value::Null`].
    /// Lists parse the key as a base-10 integer and defer to
    /// [`Value::set_index`]; non-numeric keys are ignored, as are writes to
    /// leaf values.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        match self {
            Value::Map(map) => set_map_entry(map, key, value.into()),
            Value::List(list) => {
                if let Ok(index) = key.parse::<i64>()
                    && let Err(reason) = set_list_element(list, index, value.into())
                {
                    tracing::debug!(key, reason = %reason, "key write skipped");
                }
            }
            _ => {}
        }
    }

    /// Removes and returns the entry addressed by `key`.
    ///
    /// Lists accept negative indices like [`Value::get`].
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Map(map) => map.remove(key),
            Value::List(list) => {
                let index = resolve_index(key.parse().ok()?, list.len())?;
                (index < list.len()).then(|| list.remove(index))
            }
            _ => None,
        }
    }

    /// Writes a value at a key path, creating intermediate maps as needed.
    ///
    /// An empty path replaces the whole value. Missing map entries along the
    /// way become empty maps, and leaf values in intermediate positions are
    /// replaced by empty maps. List segments in intermediate positions must
    /// address an existing element. The final segment follows
    /// [`Value::set`] semantics, so writing [`Value::Null`] deletes. A delete
    /// never rewrites intermediates, and padding a list beyond what can be
    /// allocated is an error.
    ///
    /// ```
    /// # use anyvalue::Value;
    /// let mut doc = Value::empty_map();
    /// doc.set_path("user.profile.name", "Alice").unwrap();
    /// assert_eq!(doc.get_path("user.profile.name"), Some(&Value::from("Alice")));
    ///
    /// let mut scalar = Value::Int(1);
    /// assert!(scalar.set_path("a", 2).is_err());
    /// ```
    pub fn set_path(
        &mut self,
        path: impl Into<KeyPath>,
        value: impl Into<Value>,
    ) -> Result<(), ValueError> {
        let path = path.into();
        self.set_segments(path.segments(), value.into())
            .map_err(|reason| {
                tracing::debug!(path = %path, reason = %reason, "key path write rejected");
                ValueError::InvalidPath {
                    path: path.to_string(),
                    reason,
                }
            })
    }

    fn set_segments(&mut self, segments: &[String], value: Value) -> Result<(), String> {
        let Some((head, rest)) = segments.split_first() else {
            *self = value;
            return Ok(());
        };

        if rest.is_empty() {
            return match self {
                Value::Map(map) => {
                    set_map_entry(map, head, value);
                    Ok(())
                }
                Value::List(list) => {
                    let index = head
                        .parse::<i64>()
                        .map_err(|_| format!("'{head}' is not a list index"))?;
                    set_list_element(list, index, value)
                }
                other => Err(format!(
                    "cannot write '{head}' into a {} value",
                    other.type_name()
                )),
            };
        }

        let child = match self {
            Value::Map(map) => {
                if value.is_null() && !map.get(head.as_str()).is_some_and(Value::is_branch) {
                    // Nothing below a missing or leaf entry to delete
                    return Ok(());
                }
                let entry = map.entry(head.clone()).or_insert_with(Value::empty_map);
                if !entry.is_branch() {
                    *entry = Value::empty_map();
                }
                entry
            }
            Value::List(list) => {
                let len = list.len();
                let index = head
                    .parse::<i64>()
                    .ok()
                    .and_then(|index| resolve_index(index, len))
                    .filter(|index| *index < len)
                    .ok_or_else(|| format!("'{head}' is not an index into a list of {len}"))?;
                let element = &mut list[index];
                if value.is_null() && !element.is_branch() {
                    return Ok(());
                }
                if !element.is_branch() {
                    *element = Value::empty_map();
                }
                element
            }
            other => {
                return Err(format!(
                    "cannot descend into '{head}' of a {} value",
                    other.type_name()
                ));
            }
        };

        child.set_segments(rest, value)
    }
}
