use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Frames are scheduled in whole milliseconds
pub const MAX_ANIMATION_FPS: u32 = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub sequencer: SequencerConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Page scroll loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Per-frame interpolation factor toward the scroll target
    #[serde(default = "default_ease")]
    pub ease: f64,
    /// Positions below this snap to exactly zero
    #[serde(default = "default_snap_epsilon")]
    pub snap_epsilon: f64,
    /// Frames per second of the host loop
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Pixels added to the scroll target per wheel notch or key press
    #[serde(default = "default_wheel_line_px")]
    pub wheel_line_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            ease: default_ease(),
            snap_epsilon: default_snap_epsilon(),
            animation_fps: default_animation_fps(),
            wheel_line_px: default_wheel_line_px(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Per-frame interpolation factor toward the drag target
    #[serde(default = "default_ease")]
    pub ease: f64,
    /// Fraction of the trailing edge / container width that triggers a wrap
    #[serde(default = "default_wrap_threshold")]
    pub wrap_threshold: f64,
    /// Drag distance multiplier (1.0 = pointer follows 1:1)
    #[serde(default = "default_drag_multiplier")]
    pub drag_multiplier: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            ease: default_ease(),
            wrap_threshold: default_wrap_threshold(),
            drag_multiplier: default_drag_multiplier(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Duration of one slide transition in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Viewport width the slide spacing was designed for
    #[serde(default = "default_design_width")]
    pub design_width: f64,
    /// Opacity of slides that are not current
    #[serde(default = "default_idle_opacity")]
    pub idle_opacity: f64,
    /// Scale of a fully grown circle mask
    #[serde(default = "default_circle_scale")]
    pub circle_scale: f64,
    /// Vertical nudge (percent of own height) applied to stacked images per step
    #[serde(default = "default_stack_nudge_percent")]
    pub stack_nudge_percent: f64,
    /// Easing curve used by slide transitions
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            design_width: default_design_width(),
            idle_opacity: default_idle_opacity(),
            circle_scale: default_circle_scale(),
            stack_nudge_percent: default_stack_nudge_percent(),
            easing: EasingType::default(),
        }
    }
}

/// Easing curve for slide transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    /// power1.out
    #[default]
    QuadOut,
    /// power2.out
    CubicOut,
    /// power3.out
    QuartOut,
}

/// Content of the demo page rendered by the terminal host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Virtual pixels per terminal column
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f64,
    /// Virtual pixels per terminal row
    #[serde(default = "default_cell_height_px")]
    pub cell_height_px: f64,
    /// Hero section height in viewport heights
    #[serde(default = "default_hero_screens")]
    pub hero_screens: f64,
    /// Carousel item titles
    #[serde(default = "default_carousel_items")]
    pub carousel_items: Vec<String>,
    /// Carousel item width as a fraction of the viewport width
    #[serde(default = "default_carousel_item_ratio")]
    pub carousel_item_ratio: f64,
    /// Sticky slide titles
    #[serde(default = "default_slides")]
    pub slides: Vec<String>,
    /// Footer height in viewport heights
    #[serde(default = "default_footer_screens")]
    pub footer_screens: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            cell_width_px: default_cell_width_px(),
            cell_height_px: default_cell_height_px(),
            hero_screens: default_hero_screens(),
            carousel_items: default_carousel_items(),
            carousel_item_ratio: default_carousel_item_ratio(),
            slides: default_slides(),
            footer_screens: default_footer_screens(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scrollstage")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ease() -> f64 {
    0.1
}

fn default_snap_epsilon() -> f64 {
    0.1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_wheel_line_px() -> f64 {
    100.0
}

fn default_wrap_threshold() -> f64 {
    0.75
}

fn default_drag_multiplier() -> f64 {
    1.0
}

fn default_transition_ms() -> u64 {
    1000
}

fn default_design_width() -> f64 {
    1920.0
}

fn default_idle_opacity() -> f64 {
    0.2
}

fn default_circle_scale() -> f64 {
    25.0
}

fn default_stack_nudge_percent() -> f64 {
    4.0
}

fn default_cell_width_px() -> f64 {
    8.0
}

fn default_cell_height_px() -> f64 {
    16.0
}

fn default_hero_screens() -> f64 {
    1.5
}

fn default_carousel_items() -> Vec<String> {
    ["Dune", "Fjord", "Canyon", "Atoll", "Tundra", "Delta"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_carousel_item_ratio() -> f64 {
    0.3
}

fn default_slides() -> Vec<String> {
    ["Discover", "Design", "Deliver"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_footer_screens() -> f64 {
    1.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaulting when it is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the frame loop cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        let fps = self.scroll.animation_fps;
        if !(1..=MAX_ANIMATION_FPS).contains(&fps) {
            return Err(crate::Error::Config(format!(
                "scroll.animation_fps must be between 1 and {}, got {}",
                MAX_ANIMATION_FPS, fps
            )));
        }

        for (name, ease) in [("scroll.ease", self.scroll.ease), ("carousel.ease", self.carousel.ease)] {
            if !(ease > 0.0 && ease <= 1.0) {
                return Err(crate::Error::Config(format!(
                    "{} must be in (0, 1], got {}",
                    name, ease
                )));
            }
        }

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrollstage/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrollstage")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("scrollstage.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!((config.scroll.ease - 0.1).abs() < f64::EPSILON);
        assert!((config.scroll.snap_epsilon - 0.1).abs() < f64::EPSILON);
        assert!((config.carousel.wrap_threshold - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.sequencer.transition_ms, 1000);
        assert_eq!(config.sequencer.easing, EasingType::QuadOut);
        assert_eq!(config.page.slides.len(), 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [scroll]
            ease = 0.2

            [sequencer]
            easing = "linear"
            "#,
        )
        .unwrap();

        assert!((config.scroll.ease - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.scroll.animation_fps, 60);
        assert_eq!(config.sequencer.easing, EasingType::Linear);
        assert_eq!(config.sequencer.transition_ms, 1000);
        assert_eq!(config.page.carousel_items.len(), 6);
    }

    #[test]
    fn test_animation_fps_range() {
        assert!(AppConfig::from_toml("[scroll]\nanimation_fps = 1000\n").is_ok());
        assert!(AppConfig::from_toml("[scroll]\nanimation_fps = 1\n").is_ok());

        for fps in [0, 1001, 2000] {
            let err = AppConfig::from_toml(&format!("[scroll]\nanimation_fps = {}\n", fps))
                .unwrap_err();
            assert!(matches!(err, crate::Error::Config(_)), "fps {}", fps);
        }
    }

    #[test]
    fn test_zero_ease_rejected() {
        assert!(AppConfig::from_toml("[scroll]\nease = 0.0\n").is_err());
        assert!(AppConfig::from_toml("[carousel]\nease = 1.5\n").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.page.slides = vec!["One".into(), "Two".into()];
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.page.slides, vec!["One".to_string(), "Two".to_string()]);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[scroll\nease = ").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        let path = std::path::Path::new("/tmp/scrollstage");
        assert_eq!(expand_tilde(path), PathBuf::from("/tmp/scrollstage"));
    }
}
