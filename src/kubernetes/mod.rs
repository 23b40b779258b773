// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes capabilities for resource discovery and dynamic object creation.

pub mod discovery;
pub mod dynamic;

pub use discovery::ServerResources;
pub use dynamic::DynamicCreate;
