// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriggerError {
    #[error(transparent)]
    Template(#[from] serde_json::Error),

    #[error("error getting kubernetes server resources for apiVersion {api_version}: {source}")]
    Discovery {
        api_version: String,
        #[source]
        source: kube::Error,
    },

    #[error("error parsing GroupVersion: {0}")]
    InvalidGroupVersion(String),

    #[error("could not find resource with apiVersion {api_version} and kind {kind}")]
    ResourceNotFound { api_version: String, kind: String },

    #[error(transparent)]
    Create(kube::Error),
}

pub type Result<T> = std::result::Result<T, TriggerError>;
