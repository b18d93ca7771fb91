//! Runtime property registry.
//!
//! A typed key/value store backing per-widget state. Registering a property
//! yields a `PropertyHandle`; values are read and written through the handle
//! and keep the type they were registered with. A property can carry a draw
//! callback (invoked when a layout node bound to it is drawn) and a free
//! callback (invoked with the final value when the property is unregistered
//! or the registry is dropped).
//!
//! Slots are reused after `unregister`, so handles carry a generation and a
//! handle to a freed slot is rejected.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::draw::DrawList;
use crate::error::PropertyError;
use crate::primitives::{Color, Rect};

/// Opaque reference to a registered property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyHandle {
    index: u32,
    generation: u32,
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Color(Color),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::Text(_) => "text",
            PropertyValue::Color(_) => "color",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            PropertyValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            PropertyValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            PropertyValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match *self {
            PropertyValue::Color(v) => Some(v),
            _ => None,
        }
    }

    fn same_type(&self, other: &PropertyValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

pub type DrawCallback = Box<dyn Fn(&PropertyValue, Rect, &mut DrawList)>;
pub type FreeCallback = Box<dyn FnOnce(PropertyValue)>;

/// Optional draw/free hooks for a property.
#[derive(Default)]
pub struct PropertyCallbacks {
    draw: Option<DrawCallback>,
    free: Option<FreeCallback>,
}

impl PropertyCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_draw(mut self, draw: impl Fn(&PropertyValue, Rect, &mut DrawList) + 'static) -> Self {
        self.draw = Some(Box::new(draw));
        self
    }

    pub fn on_free(mut self, free: impl FnOnce(PropertyValue) + 'static) -> Self {
        self.free = Some(Box::new(free));
        self
    }
}

struct Entry {
    name: String,
    value: PropertyValue,
    callbacks: PropertyCallbacks,
}

impl Entry {
    fn release(self) {
        if let Some(free) = self.callbacks.free {
            free(self.value);
        }
    }
}

#[derive(Default)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Registry of named, typed properties.
#[derive(Default)]
pub struct PropertyRegistry {
    slots: Vec<Slot>,
    vacant: Vec<u32>,
    by_name: HashMap<String, PropertyHandle>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Register a property without callbacks.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        value: PropertyValue,
    ) -> Result<PropertyHandle, PropertyError> {
        self.register_with(name, value, PropertyCallbacks::default())
    }

    pub fn register_with(
        &mut self,
        name: impl Into<String>,
        value: PropertyValue,
        callbacks: PropertyCallbacks,
    ) -> Result<PropertyHandle, PropertyError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(PropertyError::DuplicateName(name));
        }

        let index = match self.vacant.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        slot.entry = Some(Entry {
            name: name.clone(),
            value,
            callbacks,
        });

        let handle = PropertyHandle {
            index,
            generation: slot.generation,
        };
        tracing::trace!(%name, index, "property registered");
        self.by_name.insert(name, handle);
        Ok(handle)
    }

    pub fn lookup(&self, name: &str) -> Option<PropertyHandle> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, handle: PropertyHandle) -> Result<&str, PropertyError> {
        Ok(&self.entry(handle)?.name)
    }

    pub fn get(&self, handle: PropertyHandle) -> Result<&PropertyValue, PropertyError> {
        Ok(&self.entry(handle)?.value)
    }

    /// Replace a value, returning the previous one.
    ///
    /// The new value must have the same type as the registered one.
    pub fn set(
        &mut self,
        handle: PropertyHandle,
        value: PropertyValue,
    ) -> Result<PropertyValue, PropertyError> {
        let entry = self.entry_mut(handle)?;
        if !entry.value.same_type(&value) {
            return Err(PropertyError::TypeMismatch {
                expected: entry.value.type_name(),
                found: value.type_name(),
            });
        }
        Ok(std::mem::replace(&mut entry.value, value))
    }

    /// Remove a property, running its free callback.
    pub fn unregister(&mut self, handle: PropertyHandle) -> Result<(), PropertyError> {
        self.entry(handle)?;
        let slot = &mut self.slots[handle.index as usize];
        let Some(entry) = slot.entry.take() else {
            return Err(PropertyError::UnknownProperty);
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(handle.index);
        self.by_name.remove(&entry.name);
        entry.release();
        Ok(())
    }

    /// Run the property's draw callback for `rect`.
    ///
    /// Returns `false` when the property has no draw callback.
    pub fn draw(
        &self,
        handle: PropertyHandle,
        rect: Rect,
        list: &mut DrawList,
    ) -> Result<bool, PropertyError> {
        let entry = self.entry(handle)?;
        match &entry.callbacks.draw {
            Some(draw) => {
                draw(&entry.value, rect, list);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn entry(&self, handle: PropertyHandle) -> Result<&Entry, PropertyError> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_ref())
            .ok_or(PropertyError::UnknownProperty)
    }

    fn entry_mut(&mut self, handle: PropertyHandle) -> Result<&mut Entry, PropertyError> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_mut())
            .ok_or(PropertyError::UnknownProperty)
    }
}

impl Drop for PropertyRegistry {
    fn drop(&mut self) {
        for slot in &mut self.slots {
            if let Some(entry) = slot.entry.take() {
                entry.release();
            }
        }
    }
}

impl std::fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("len", &self.len())
            .finish()
    }
}
