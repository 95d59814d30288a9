//! Vertex layout file loading

use anyhow::{Context, Result, bail};
use nether_pack::VertexLayout;
use std::path::Path;

/// Parse a layout from TOML text and check it is usable
pub fn parse_layout(text: &str) -> Result<VertexLayout> {
    let layout: VertexLayout = toml::from_str(text).context("Failed to parse vertex layout")?;
    layout.validate()?;

    for (i, attribute) in layout.attributes.iter().enumerate() {
        if !attribute.name.is_empty()
            && layout.attributes[..i]
                .iter()
                .any(|earlier| earlier.name == attribute.name)
        {
            bail!("Duplicate attribute name: {}", attribute.name);
        }
    }

    Ok(layout)
}

/// Load a layout file from disk
pub fn load_layout(path: &Path) -> Result<VertexLayout> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout: {}", path.display()))?;
    let layout =
        parse_layout(&text).with_context(|| format!("Invalid layout: {}", path.display()))?;

    tracing::debug!(
        attributes = layout.attributes.len(),
        stride = layout.stride(),
        "loaded vertex layout from {}",
        path.display()
    );
    Ok(layout)
}
