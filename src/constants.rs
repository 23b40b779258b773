// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label keys stamped onto every resource created for an event
pub mod labels {
    /// Domain all generated label keys are prefixed with
    pub const GROUP_NAME: &str = "triggers.tekton.dev";
    /// Name of the EventListener that received the event
    pub const EVENT_LISTENER: &str = "/eventlistener";
    /// Identifier of the event the resource was created for
    pub const EVENT_ID: &str = "/triggers-eventid";
    /// Name of the trigger whose template produced the resource
    pub const TRIGGER: &str = "/trigger";
}

/// Namespace used when neither the template nor the environment names one
pub const DEFAULT_NAMESPACE: &str = "default";
