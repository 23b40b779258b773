// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creation of trigger resource templates

use crate::constants::labels;
use crate::error::{Result, TriggerError};
use crate::kubernetes::{DynamicCreate, ServerResources};
use crate::resources::resolve::{find_api_resource, group_version_resource};
use crate::types::Unstructured;
use kube::api::DynamicObject;
use tracing::{info, instrument};

/// Identity of the event a set of resources is created for
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    pub trigger_name: &'a str,
    pub event_id: &'a str,
    pub el_name: &'a str,
    /// Namespace for templates that don't specify one
    pub el_namespace: &'a str,
}

/// Create the resource described by a raw JSON template.
///
/// The object is labeled with the event's provenance, placed in its own
/// namespace or the EventListener's, and created through the API resource
/// discovered for its apiVersion and kind. Nothing is retried: after a failed
/// create the object may or may not exist on the server.
#[instrument(
    skip_all,
    fields(trigger = %ctx.trigger_name, event_id = %ctx.event_id)
)]
pub async fn create<D, C>(
    template: &[u8],
    ctx: &EventContext<'_>,
    discovery: &D,
    dynamic: &C,
) -> Result<DynamicObject>
where
    D: ServerResources + ?Sized,
    C: DynamicCreate + ?Sized,
{
    // apiVersion and kind are assumed present
    let data = Unstructured::from_slice(template)?;

    let data = add_labels(
        data,
        [
            (labels::EVENT_LISTENER, ctx.el_name),
            (labels::EVENT_ID, ctx.event_id),
            (labels::TRIGGER, ctx.trigger_name),
        ],
    )?;

    let namespace = match data.namespace() {
        "" => ctx.el_namespace,
        ns => ns,
    }
    .to_string();

    let api_resource = find_api_resource(data.api_version(), data.kind(), discovery).await?;

    let name = match data.name() {
        "" => data.generate_name(),
        name => name,
    };
    let gvr = group_version_resource(&api_resource);
    info!(
        "Generating resource: kind: {} ({}/{}, {}), name: {}",
        api_resource.kind, gvr.group, gvr.version, gvr.resource, name
    );

    let object = DynamicObject::try_from(data)?;
    dynamic
        .create_namespaced(&gvr, &namespace, &object)
        .await
        .map_err(TriggerError::Create)
}

/// Create every template for one event, in order.
///
/// Stops at the first failure; resources created before it are left in place.
pub async fn create_resources<T, D, C>(
    templates: &[T],
    ctx: &EventContext<'_>,
    discovery: &D,
    dynamic: &C,
) -> Result<Vec<DynamicObject>>
where
    T: AsRef<[u8]>,
    D: ServerResources + ?Sized,
    C: DynamicCreate + ?Sized,
{
    let mut created = Vec::with_capacity(templates.len());
    for template in templates {
        created.push(create(template.as_ref(), ctx, discovery, dynamic).await?);
    }
    Ok(created)
}

/// Add the trigger labels to an object.
///
/// Keys are placed under the triggers label domain after stripping any leading
/// '/'. Labels already on the object are kept; an object whose existing labels
/// are malformed is rejected rather than rewritten.
pub fn add_labels<K, V>(
    mut object: Unstructured,
    labels_to_add: impl IntoIterator<Item = (K, V)>,
) -> serde_json::Result<Unstructured>
where
    K: AsRef<str>,
    V: Into<String>,
{
    let mut merged = object.labels()?;
    for (key, value) in labels_to_add {
        let key = format!(
            "{}/{}",
            labels::GROUP_NAME,
            key.as_ref().trim_start_matches('/')
        );
        merged.insert(key, value.into());
    }

    object.set_labels(merged)?;
    Ok(object)
}
