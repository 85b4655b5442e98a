//! Site configuration.
//!
//! Every field has a default matching the deployed site, so the page works
//! with no configuration at all. A page may override any subset by embedding
//! JSON in `<script type="application/json" id="portfolio-config">`.

use serde::{Deserialize, Serialize};

use crate::engine::SectionList;
use crate::error::Result;

/// Id of the optional `<script>` element holding configuration JSON.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    pub splash: SplashConfig,
    pub navigation: NavigationConfig,
    pub background: BackgroundConfig,
    pub clouds: CloudEffectConfig,
    pub sections: Vec<SectionSpec>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            splash: SplashConfig::default(),
            navigation: NavigationConfig::default(),
            background: BackgroundConfig::default(),
            clouds: CloudEffectConfig::default(),
            sections: default_sections(),
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a configuration block.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        SectionList::new(config.sections.clone())?;
        Ok(config)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub display_ms: u32,
    pub fade_ms: u32,
    pub status_text: String,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            display_ms: 8000,
            fade_ms: 500,
            status_text: "Loading portfolio...".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Transition length in seconds, shared by both surfaces.
    pub duration_s: f64,
    /// Easing curve name, e.g. `power2.inOut`.
    pub easing: String,
    /// Minimum horizontal travel, in px, for a touch to count as a swipe.
    pub swipe_threshold_px: f64,
    /// Minimum time the navigator's loading overlay stays up.
    pub min_loading_ms: u32,
    /// Delay between the overlay clearing and the first underline layout.
    pub underline_init_delay_ms: u32,
    pub scroll_hint: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            duration_s: 0.8,
            easing: "power2.inOut".into(),
            swipe_threshold_px: 50.0,
            min_loading_ms: 1500,
            underline_init_delay_ms: 100,
            scroll_hint: "Scroll, use arrows, or click navigation \u{2191}".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub image_url: String,
    pub fallback_url: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            image_url: "/upscale_design.png".into(),
            fallback_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=4000&q=80".into(),
        }
    }
}

/// Options handed to the cloud background effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudEffectConfig {
    pub mouse_controls: bool,
    pub touch_controls: bool,
    pub gyro_controls: bool,
    pub min_height: f64,
    pub min_width: f64,
    pub background_color: u32,
    pub sky_color: u32,
    pub cloud_color: u32,
    pub cloud_shadow_color: u32,
    pub sun_color: u32,
    pub sun_glare_color: u32,
    pub sunlight_color: u32,
    pub speed: f64,
}

impl Default for CloudEffectConfig {
    fn default() -> Self {
        Self {
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
            min_height: 200.0,
            min_width: 200.0,
            background_color: 0x00111f,
            sky_color: 0x002b36,
            cloud_color: 0x004f63,
            cloud_shadow_color: 0x001f2b,
            sun_color: 0x005f7a,
            sun_glare_color: 0x0088a9,
            sunlight_color: 0x00bcd4,
            speed: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub name: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl SectionSpec {
    fn new(name: &str, paragraphs: &[&str]) -> Self {
        Self {
            name: name.into(),
            paragraphs: paragraphs.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

fn default_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec::new(
            "Me",
            &[
                "Welcome to my portfolio. I'm a passionate developer with a love for creating smooth, interactive experiences.",
                "Scroll horizontally to explore my work!",
            ],
        ),
        SectionSpec::new(
            "Projects",
            &[
                "Here are some of my featured projects. Each demonstrates my skills in different technologies.",
                "From web applications to mobile apps, I create digital solutions that make a difference.",
            ],
        ),
        SectionSpec::new(
            "Skills",
            &[
                "My technical skills include frontend and backend development, UX/UI design, and more.",
                "JavaScript, React, Node.js, Python, and many other technologies in my toolkit.",
            ],
        ),
        SectionSpec::new(
            "Resume",
            &[
                "Check out my professional experience and education background.",
                "Years of experience building scalable and performant applications.",
            ],
        ),
        SectionSpec::new(
            "Contact",
            &[
                "Let's connect! You can reach me through email or social media.",
                "Ready to collaborate on your next project.",
            ],
        ),
    ]
}
