// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolving and creating the resources a trigger produces for an event.

pub mod create;
pub mod resolve;

pub use create::{add_labels, create, create_resources, EventContext};
pub use resolve::{find_api_resource, group_version_resource, parse_group_version};
