//! Scenario loader.
//!
//! A scenario describes the arena (bounds and rectangular obstacles), the
//! item triggers placed in it and the bots spawned at start.

use std::path::Path;

use raven_core::ScenarioSpec;

use crate::loaders::{LoadResult, read_file};

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Parse a scenario from RON text.
    ///
    /// Per-bot bias overrides are validated; world-level checks (bots inside
    /// the bounds, at least one bot) are left to the runtime.
    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        let scenario: ScenarioSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        for bot in &scenario.bots {
            if let Some(biases) = &bot.biases {
                biases
                    .validate()
                    .map_err(|e| anyhow::anyhow!("bot `{}`: {}", bot.name, e))?;
            }
        }

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use raven_core::{ItemKind, Vector2D};

    use super::*;

    const DUEL: &str = r#"
        (
            name: "duel",
            bounds: (min: (x: 0.0, y: 0.0), max: (x: 400.0, y: 300.0)),
            obstacles: [
                (min: (x: 180.0, y: 100.0), max: (x: 220.0, y: 200.0)),
            ],
            items: [
                (kind: Health, position: (x: 200.0, y: 20.0)),
                (kind: Railgun, position: (x: 200.0, y: 280.0)),
            ],
            bots: [
                (name: "alpha", position: (x: 40.0, y: 150.0)),
                (
                    name: "beta",
                    position: (x: 360.0, y: 150.0),
                    biases: Some((attack_target: 1.5)),
                ),
            ],
        )
    "#;

    #[test]
    fn parses_a_full_scenario() {
        let scenario = ScenarioLoader::parse(DUEL).unwrap();

        assert_eq!(scenario.name, "duel");
        assert_eq!(scenario.obstacles.len(), 1);
        assert_eq!(scenario.items[1].kind, ItemKind::Railgun);
        assert_eq!(scenario.bots[0].position, Vector2D::new(40.0, 150.0));
        assert_eq!(scenario.bots[0].biases, None);

        let beta = scenario.bots[1].biases.unwrap();
        assert_eq!(beta.attack_target, 1.5);
        assert_eq!(beta.explore, 1.0);
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let scenario = ScenarioLoader::parse(
            r#"(
                name: "empty",
                bounds: (min: (x: 0.0, y: 0.0), max: (x: 10.0, y: 10.0)),
                bots: [],
            )"#,
        )
        .unwrap();
        assert!(scenario.items.is_empty());
        assert!(scenario.obstacles.is_empty());
    }

    #[test]
    fn invalid_bot_biases_are_rejected() {
        let err = ScenarioLoader::parse(
            r#"(
                name: "bad",
                bounds: (min: (x: 0.0, y: 0.0), max: (x: 10.0, y: 10.0)),
                bots: [(name: "gamma", position: (x: 1.0, y: 1.0), biases: Some((explore: -2.0)))],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("gamma"));
    }
}
