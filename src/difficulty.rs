use serde::Deserialize;

/// Per-level difficulty curve.
///
/// Obstacles grow linearly with the level and are capped by the grid;
/// the step budget shrinks linearly and is floored at `min_steps`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Difficulty {
    #[serde(default = "default_base_obstacles")]
    pub base_obstacles: usize,
    #[serde(default = "default_obstacles_per_level")]
    pub obstacles_per_level: usize,
    #[serde(default = "default_base_steps")]
    pub base_steps: u32,
    #[serde(default = "default_steps_per_level")]
    pub steps_per_level: u32,
    #[serde(default = "default_min_steps")]
    pub min_steps: u32,
    /// Budget assigned when generation falls back to an open grid
    #[serde(default = "default_fallback_steps")]
    pub fallback_steps: u32,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_base_obstacles() -> usize { 20 }
fn default_obstacles_per_level() -> usize { 2 }
fn default_base_steps() -> u32 { 100 }
fn default_steps_per_level() -> u32 { 5 }
fn default_min_steps() -> u32 { 10 }
fn default_fallback_steps() -> u32 { 1 }
fn default_max_attempts() -> u32 { crate::generator::MAX_ATTEMPTS }

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            base_obstacles: default_base_obstacles(),
            obstacles_per_level: default_obstacles_per_level(),
            base_steps: default_base_steps(),
            steps_per_level: default_steps_per_level(),
            min_steps: default_min_steps(),
            fallback_steps: default_fallback_steps(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl Difficulty {
    /// `min(base + per_level * level, size² - 2)`
    pub fn obstacle_count(&self, level: u32, size: i32) -> usize {
        let wanted = self
            .obstacles_per_level
            .saturating_mul(level as usize)
            .saturating_add(self.base_obstacles);
        let side = size.max(0) as usize;
        wanted.min(side.saturating_mul(side).saturating_sub(2))
    }

    /// `max(min_steps, base - per_level * (level - 1))`
    pub fn step_budget(&self, level: u32) -> u32 {
        let spent = self.steps_per_level.saturating_mul(level.saturating_sub(1));
        self.base_steps.saturating_sub(spent).max(self.min_steps)
    }
}
