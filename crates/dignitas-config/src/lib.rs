use dignitas::ScoringConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATHS: [&str; 2] = ["configs/dignity.toml", "../../configs/dignity.toml"];

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    scoring: Option<ScoringConfig>,
}

/// Try the common relative paths for `configs/dignity.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("Loaded scoring config from {p}");
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load dignity.toml from {:?}", CONFIG_PATHS);
}

/// Parse the `[scoring]` table. A document without one yields the defaults.
pub fn parse_scoring_config(text: &str) -> anyhow::Result<ScoringConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse dignity.toml: {e}"))?;
    let config = root.scoring.unwrap_or_default();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid [scoring] config: {e}"))?;
    Ok(config)
}

pub fn load_scoring_config() -> anyhow::Result<ScoringConfig> {
    let text = read_config_toml_text()?;
    parse_scoring_config(&text)
}

pub fn load_scoring_config_from(path: &Path) -> anyhow::Result<ScoringConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    parse_scoring_config(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dignitas::zodiac::DignityTier;
    use dignitas::{HouseStrength, Planet};

    #[test]
    fn test_empty_document_is_default() {
        let config = parse_scoring_config("").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_scoring_table() {
        let text = r#"
            [scoring]
            partile_orb = 0.75
            reception_by_exaltation = true
            almuten_tiers = ["rulership", "exaltation", "term"]
            house_strength = [5, 3, 1, 4, 3, -2, 4, -2, 2, 5, 4, 0]

            [scoring.mean_speeds]
            mars = 0.55
        "#;
        let config = parse_scoring_config(text).unwrap();
        assert_eq!(config.partile_orb, 0.75);
        assert!(config.reception_by_exaltation);
        assert!(config.almuten_uses(DignityTier::Term));
        assert_eq!(config.house_strength.strength(12), 0);
        assert_eq!(config.mean_speed(Planet::Mars), 0.55);
        assert_eq!(config.star_orb, 1.0);
    }

    #[test]
    fn test_rejects_short_house_table() {
        let text = "[scoring]\nhouse_strength = [1, 2, 3]\n";
        assert!(parse_scoring_config(text).is_err());
    }

    #[test]
    fn test_rejects_cazimi_outside_beams() {
        let text = "[scoring]\ncazimi_orb_minutes = 600.0\n";
        let err = parse_scoring_config(text).unwrap_err();
        assert!(err.to_string().contains("Invalid [scoring] config"));
    }

    #[test]
    fn test_missing_file() {
        assert!(load_scoring_config_from(Path::new("/nonexistent/dignity.toml")).is_err());
    }
}
