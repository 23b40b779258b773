// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::{Client, ResourceExt};
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trigger_resources::config::Config;
use trigger_resources::resources::create_resources;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: eventlistener={}/{}, trigger={}, event_id={}",
        config.el_namespace, config.el_name, config.trigger_name, config.event_id
    );

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read resource templates from stdin")?;
    let templates = parse_templates(&input)?;
    info!("Read {} resource templates", templates.len());

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let created = create_resources(&templates, &config.event_context(), &client, &client).await?;

    for object in &created {
        info!(
            "Created {}/{}",
            object.namespace().unwrap_or_default(),
            object.name_any()
        );
    }

    Ok(())
}

/// Split stdin into JSON templates. Accepts one object or a list of objects,
/// written as YAML or JSON.
fn parse_templates(input: &str) -> Result<Vec<Vec<u8>>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: serde_json::Value =
        serde_yaml::from_str(input).context("Failed to parse resource templates")?;

    let objects = match document {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Null => Vec::new(),
        object => vec![object],
    };

    objects
        .iter()
        .map(|o| serde_json::to_vec(o).context("Failed to encode resource template"))
        .collect()
}
