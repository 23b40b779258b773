// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

use crate::constants::DEFAULT_NAMESPACE;
use crate::resources::EventContext;

/// Event configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the EventListener the resources are created for
    pub el_name: String,
    /// Namespace used for templates that don't carry their own
    pub el_namespace: String,
    pub trigger_name: String,
    pub event_id: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} environment variable not set", key))
        };

        let el_name = required("EL_NAME")?;
        let el_namespace = lookup("EL_NAMESPACE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let trigger_name = required("TRIGGER_NAME")?;
        let event_id = required("EVENT_ID")?;

        Ok(Config {
            el_name,
            el_namespace,
            trigger_name,
            event_id,
        })
    }

    /// Borrow the event identity handed to resource creation
    pub fn event_context(&self) -> EventContext<'_> {
        EventContext {
            trigger_name: &self.trigger_name,
            event_id: &self.event_id,
            el_name: &self.el_name,
            el_namespace: &self.el_namespace,
        }
    }
}
