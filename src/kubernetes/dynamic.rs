// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creation of arbitrary namespaced objects without compile-time types

use async_trait::async_trait;
use kube::{
    api::{ApiResource, DynamicObject, GroupVersionKind, PostParams},
    core::GroupVersionResource,
    Api, Client,
};
use tracing::debug;

/// Creates an object of any kind in a namespace, addressed by its GVR.
#[async_trait]
pub trait DynamicCreate: Send + Sync {
    async fn create_namespaced(
        &self,
        gvr: &GroupVersionResource,
        namespace: &str,
        object: &DynamicObject,
    ) -> kube::Result<DynamicObject>;
}

#[async_trait]
impl DynamicCreate for Client {
    async fn create_namespaced(
        &self,
        gvr: &GroupVersionResource,
        namespace: &str,
        object: &DynamicObject,
    ) -> kube::Result<DynamicObject> {
        let kind = object
            .types
            .as_ref()
            .map(|t| t.kind.as_str())
            .unwrap_or_default();
        let gvk = GroupVersionKind::gvk(&gvr.group, &gvr.version, kind);
        let ar = ApiResource::from_gvk_with_plural(&gvk, &gvr.resource);

        debug!("Creating {} in namespace {} via {}", kind, namespace, ar.plural);

        let api: Api<DynamicObject> = Api::namespaced_with(self.clone(), namespace, &ar);
        api.create(&PostParams::default(), object).await
    }
}
