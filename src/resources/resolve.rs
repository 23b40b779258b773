// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of apiVersion/kind pairs to API resource definitions

use crate::error::{Result, TriggerError};
use crate::kubernetes::ServerResources;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, APIResourceList};
use kube::core::{GroupVersion, GroupVersionResource};
use tracing::{debug, instrument};

/// Find the APIResource serving `kind` under `api_version`.
///
/// The first resource with a matching kind wins. Discovery responses often
/// leave group and version empty on the individual resources; in that case
/// both are taken from the list's groupVersion so the returned resource
/// always carries a complete identity.
#[instrument(skip(discovery))]
pub async fn find_api_resource<D>(
    api_version: &str,
    kind: &str,
    discovery: &D,
) -> Result<APIResource>
where
    D: ServerResources + ?Sized,
{
    let APIResourceList {
        group_version,
        resources,
    } = discovery
        .server_resources_for_group_version(api_version)
        .await
        .map_err(|source| TriggerError::Discovery {
            api_version: api_version.to_string(),
            source,
        })?;

    let Some(mut api_resource) = resources.into_iter().find(|r| r.kind == kind) else {
        return Err(TriggerError::ResourceNotFound {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
        });
    };

    if is_unset(&api_resource.group) || is_unset(&api_resource.version) {
        let gv = parse_group_version(&group_version)?;
        api_resource.group = Some(gv.group);
        api_resource.version = Some(gv.version);
    }

    debug!(
        "Resolved {} {} to resource {}",
        api_version, kind, api_resource.name
    );

    Ok(api_resource)
}

/// The group/version/resource triple addressing an APIResource's endpoint
pub fn group_version_resource(api_resource: &APIResource) -> GroupVersionResource {
    GroupVersionResource::gvr(
        api_resource.group.as_deref().unwrap_or_default(),
        api_resource.version.as_deref().unwrap_or_default(),
        &api_resource.name,
    )
}

/// Split a "group/version" string, where a bare "version" is the core group.
pub fn parse_group_version(group_version: &str) -> Result<GroupVersion> {
    if group_version.matches('/').count() > 1 {
        return Err(TriggerError::InvalidGroupVersion(group_version.to_string()));
    }

    group_version
        .parse::<GroupVersion>()
        .map_err(|_| TriggerError::InvalidGroupVersion(group_version.to_string()))
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
