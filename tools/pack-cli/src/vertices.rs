//! Vertex stream packing command

use anyhow::{Context, Result, bail};
use clap::Args;
use nether_pack::VertexLayout;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::layout;

/// Arguments for the vertices command
#[derive(Args)]
pub struct VerticesArgs {
    /// Path to the TOML vertex layout
    #[arg(short, long)]
    pub layout: PathBuf,

    /// Path to the JSON vertex data
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output binary file (prints hex per vertex when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Vertex data as either one array per vertex or a single flat array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VertexInput {
    PerVertex(Vec<Vec<f32>>),
    Flat(Vec<f32>),
}

impl VertexInput {
    /// Flatten into one f32 stream; every per-vertex row must hold `components` floats
    pub fn into_flat(self, components: usize) -> Result<Vec<f32>> {
        match self {
            VertexInput::PerVertex(vertices) => {
                if let Some((index, row)) = vertices
                    .iter()
                    .enumerate()
                    .find(|(_, row)| row.len() != components)
                {
                    bail!(
                        "Vertex {} has {} floats, layout expects {}",
                        index,
                        row.len(),
                        components
                    );
                }
                Ok(vertices.into_iter().flatten().collect())
            }
            VertexInput::Flat(data) => Ok(data),
        }
    }
}

/// Read the JSON vertex file into flat f32 data for `layout`
pub fn load_vertices(path: &Path, layout: &VertexLayout) -> Result<Vec<f32>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vertex data: {}", path.display()))?;
    let input: VertexInput = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse vertex data: {}", path.display()))?;
    input
        .into_flat(layout.components_per_vertex())
        .with_context(|| format!("Invalid vertex data: {}", path.display()))
}

/// Pack flat vertex data with `layout`
pub fn pack_vertices(layout: &VertexLayout, data: &[f32]) -> Result<Vec<u8>> {
    let packed = layout.pack(data).with_context(|| {
        format!(
            "Vertex data does not match layout ({} floats per vertex)",
            layout.components_per_vertex()
        )
    })?;
    Ok(packed)
}

/// Execute the vertices command
pub fn execute(args: VerticesArgs) -> Result<()> {
    let layout = layout::load_layout(&args.layout)?;
    let data = load_vertices(&args.input, &layout)?;
    let packed = pack_vertices(&layout, &data)?;

    let stride = layout.stride();
    let vertex_count = packed.len() / stride;
    tracing::info!(
        "Packed {} vertices ({} bytes, stride {})",
        vertex_count,
        packed.len(),
        stride
    );

    match args.output {
        Some(path) => {
            std::fs::write(&path, &packed)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            println!("Wrote {} bytes to {}", packed.len(), path.display());
        }
        None => {
            for vertex in packed.chunks_exact(stride) {
                println!("{}", hex::encode(vertex));
            }
        }
    }

    Ok(())
}
