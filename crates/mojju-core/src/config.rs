//! Landing page configuration.
//!
//! Defaults reproduce the production page. The desktop shell overrides
//! individual fields from the command line and validates the result once at
//! startup.

use serde::Serialize;

use crate::error::{LandingError, LandingResult};

/// Default background video
pub const DEFAULT_VIDEO_URL: &str =
    "https://mojli.s3.us-east-2.amazonaws.com/Mojli+Website+upscaled+(12mb).webm";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LandingConfig {
    /// Wordmark shown at the left of the bar
    pub brand: String,
    /// Streamable background video
    pub video_url: String,
    /// MIME type of `video_url`
    pub video_mime: String,
    /// Headline lines, rendered one per row
    pub headline: Vec<String>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            brand: "MOJJU".to_string(),
            video_url: DEFAULT_VIDEO_URL.to_string(),
            video_mime: "video/webm".to_string(),
            headline: vec![
                "AI FILM".to_string(),
                "PRODUCTION".to_string(),
                "WITHOUT LIMITS".to_string(),
            ],
        }
    }
}

impl LandingConfig {
    pub fn validate(&self) -> LandingResult<()> {
        if self.brand.trim().is_empty() {
            return Err(LandingError::InvalidConfig("brand is empty".into()));
        }
        let url = self.video_url.trim();
        if url.is_empty() {
            return Err(LandingError::InvalidConfig("video url is empty".into()));
        }
        if !(url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/')) {
            return Err(LandingError::InvalidConfig(format!(
                "video url must be http(s) or an absolute path: {url}"
            )));
        }
        if self.headline.iter().all(|line| line.trim().is_empty()) {
            return Err(LandingError::InvalidConfig("headline is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = LandingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brand, "MOJJU");
        assert_eq!(config.headline.len(), 3);
    }

    #[test]
    fn rejects_relative_video_url() {
        let config = LandingConfig {
            video_url: "video.webm".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LandingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn accepts_local_asset_path() {
        let config = LandingConfig {
            video_url: "/assets/hero.webm".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_blank_brand_and_headline() {
        let blank_brand = LandingConfig {
            brand: "  ".into(),
            ..Default::default()
        };
        assert!(blank_brand.validate().is_err());

        let blank_headline = LandingConfig {
            headline: vec![String::new()],
            ..Default::default()
        };
        assert!(blank_headline.validate().is_err());
    }
}
