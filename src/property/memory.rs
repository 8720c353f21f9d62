// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;

use super::{is_legal_property_name, PropertyStore, PROP_VALUE_MAX};
use crate::error::{PropertyError, Result};

/// A property store held in process memory, used for dry runs and tests.
/// It enforces the same name and length limits as bionic's property area.
#[derive(Debug, Default, Clone)]
pub struct MemoryPropertyStore {
    props: BTreeMap<String, String>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates over all properties sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn check_value(name: &str, value: &str) -> Result<()> {
        if !name.starts_with("ro.") && value.len() >= PROP_VALUE_MAX {
            return Err(PropertyError::ValueTooLong {
                name: name.to_string(),
                len: value.len(),
            });
        }
        Ok(())
    }
}

impl PropertyStore for MemoryPropertyStore {
    type Handle = String;

    fn find(&self, name: &str) -> Option<String> {
        self.props.get_key_value(name).map(|(k, _)| k.clone())
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        if !is_legal_property_name(name) {
            return Err(PropertyError::InvalidName(name.to_string()));
        }
        Self::check_value(name, value)?;
        self.props.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn update(&mut self, handle: String, value: &str) -> Result<()> {
        Self::check_value(&handle, value)?;
        self.props.insert(handle, value.to_string());
        Ok(())
    }
}
