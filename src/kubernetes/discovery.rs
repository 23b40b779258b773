// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server resource discovery per group/version

use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use kube::Client;
use tracing::debug;

/// Lists the resources a cluster serves under one group/version.
#[async_trait]
pub trait ServerResources: Send + Sync {
    async fn server_resources_for_group_version(
        &self,
        api_version: &str,
    ) -> kube::Result<APIResourceList>;
}

#[async_trait]
impl ServerResources for Client {
    async fn server_resources_for_group_version(
        &self,
        api_version: &str,
    ) -> kube::Result<APIResourceList> {
        debug!("Listing server resources for {}", api_version);

        // Core group versions are served under /api, everything else under /apis
        if api_version.contains('/') {
            self.list_api_group_resources(api_version).await
        } else {
            self.list_core_api_resources(api_version).await
        }
    }
}
