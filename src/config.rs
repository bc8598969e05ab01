use rocket::figment::Figment;
use serde::Deserialize;

/// Application keys read from `Rocket.toml` and `ROCKET_*` variables,
/// next to Rocket's own settings.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlannerConfig {
    pub seed_demo_data: bool,
    pub protect_default_category: bool,
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig {
            seed_demo_data: true,
            protect_default_category: true,
        }
    }
}

impl PlannerConfig {
    pub fn from_figment(figment: &Figment) -> Result<PlannerConfig, rocket::figment::Error> {
        figment.extract()
    }
}
