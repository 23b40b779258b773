// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic object representation for resource templates.

pub mod unstructured;

pub use unstructured::Unstructured;
