use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::color::{InvalidHex, PaletteLine};

pub const DEFAULT_CATALOG_PATH: &str = "./data/materials.json";

const HEADER: &str = "GIMP Palette\nName: A_Palette\n#\n";

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("failed to read color catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("color catalog is not a JSON object of materials: {0}")]
    Malformed(String),

    #[error("material `{material}` has no `colors` list")]
    MissingColors { material: String },

    #[error("color {index} of material `{material}` has no `hex` string")]
    MissingHex { material: String, index: usize },

    #[error(transparent)]
    InvalidHex(#[from] InvalidHex),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorEntry {
    pub hex: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Material {
    pub name: String,
    pub colors: Vec<ColorEntry>,
}

/// Materials in the order they appear in the source document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorCatalog {
    pub materials: Vec<Material>,
}

impl ColorCatalog {
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let text = fs::read_to_string(path).map_err(|source| PaletteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            materials = catalog.materials.len(),
            colors = catalog.color_count(),
            "loaded color catalog"
        );
        Ok(catalog)
    }

    pub fn from_json_str(text: &str) -> Result<Self, PaletteError> {
        let root: Value =
            serde_json::from_str(text).map_err(|e| PaletteError::Malformed(e.to_string()))?;
        let entries = match root {
            Value::Object(entries) => entries,
            other => {
                return Err(PaletteError::Malformed(format!(
                    "expected an object at the top level, found {}",
                    kind_of(&other)
                )));
            }
        };

        let materials = entries
            .into_iter()
            .map(|(name, body)| parse_material(name, body))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { materials })
    }

    pub fn color_count(&self) -> usize {
        self.materials.iter().map(|m| m.colors.len()).sum()
    }
}

fn parse_material(name: String, body: Value) -> Result<Material, PaletteError> {
    let colors = match body {
        Value::Object(mut fields) => fields.remove("colors"),
        _ => None,
    };
    let Some(Value::Array(colors)) = colors else {
        return Err(PaletteError::MissingColors { material: name });
    };

    let colors = colors
        .into_iter()
        .enumerate()
        .map(|(index, color)| {
            hex_field(color).ok_or_else(|| PaletteError::MissingHex {
                material: name.clone(),
                index,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Material { name, colors })
}

fn hex_field(color: Value) -> Option<ColorEntry> {
    let Value::Object(mut fields) = color else {
        return None;
    };
    match fields.remove("hex") {
        Some(Value::String(hex)) => Some(ColorEntry { hex }),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One line per color entry, materials first to last, colors in listed order.
/// Fails on the first unparsable hex without producing any lines.
pub fn build_palette(catalog: &ColorCatalog) -> Result<Vec<PaletteLine>, PaletteError> {
    catalog
        .materials
        .iter()
        .flat_map(|material| material.colors.iter())
        .map(|color| PaletteLine::from_hex(&color.hex).map_err(PaletteError::from))
        .collect()
}

pub fn render(lines: &[PaletteLine]) -> String {
    let mut out = String::from(HEADER);
    for line in lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}
