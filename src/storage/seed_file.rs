use crate::error::Result;
use crate::model::Restaurant;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Yaml,
}

/// Pick the seed file format from its extension. Anything other than
/// `.json` is read as YAML.
pub fn detect_format(path: &Path) -> SeedFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => SeedFormat::Json,
        _ => SeedFormat::Yaml,
    }
}

pub fn parse_seed(content: &str, format: SeedFormat) -> Result<Vec<Restaurant>> {
    let restaurants = match format {
        SeedFormat::Json => serde_json::from_str(content)?,
        SeedFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(restaurants)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<Restaurant>> {
    let content = std::fs::read_to_string(path)?;
    parse_seed(&content, detect_format(path))
}
