//! Tribute content - page copy and asset paths
//!
//! The built-in content is used unless a YAML file is supplied. Any section
//! or field left out of the file keeps its built-in value.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("content must list at least one reason")]
    NoReasons,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Moms 44th Birthday".to_string(),
            description: "Made with love by her children".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WelcomeContent {
    pub headline: String,
    pub subheadline: String,
    pub tagline: String,
    pub start_label: String,
}

impl Default for WelcomeContent {
    fn default() -> Self {
        Self {
            headline: "Happy 44th".to_string(),
            subheadline: "Birthday!".to_string(),
            tagline: "A special birthday experience for the most amazing mom ✨".to_string(),
            start_label: "Start the Celebration! 🎉".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoContent {
    pub title: String,
    pub image: String,
    pub caption: String,
}

impl Default for PhotoContent {
    fn default() -> Self {
        Self {
            title: "The Birthday Star ⭐".to_string(),
            image: "/mom.JPG".to_string(),
            caption: "Look at this beautiful, amazing person who brings so much joy to our lives! ✨"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideosContent {
    pub title: String,
    pub poster: String,
    pub caption: String,
    pub items: Vec<String>,
}

impl Default for VideosContent {
    fn default() -> Self {
        Self {
            title: "A Walk Down Memory Lane 🎬".to_string(),
            poster: "/photos/photo.jpeg".to_string(),
            caption: "Precious moments captured in time, showing all the joy and love you bring to our lives! 💕"
                .to_string(),
            items: (1..=3).map(|n| format!("/videos/vid{}.mp4", n)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub text: String,
    pub image: String,
}

impl Reason {
    fn new(text: &str, image: &str) -> Self {
        Self {
            text: text.to_string(),
            image: image.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonsContent {
    pub title: String,
    pub items: Vec<Reason>,
}

impl Default for ReasonsContent {
    fn default() -> Self {
        Self {
            title: "Why We Love You 💕".to_string(),
            items: vec![
                Reason::new("You are the epitome of beauty", "/photos/photo.jpeg"),
                Reason::new(
                    "You gave birth to three beautiful children",
                    "/photos/IMG_7136.jpeg",
                ),
                Reason::new(
                    "You are what it means to be hard working and inspire us to do the same",
                    "/photos/DSC07537.JPG",
                ),
                Reason::new(
                    "You taught us nothing else matters as long as we believe in ourselves",
                    "/photos/IMG_9049.JPG",
                ),
                Reason::new("You taught us how to forgive", "/photos/IMG_5984.PNG"),
                Reason::new("You taught us how to never give up", "/photos/IMG_5428.jpeg"),
                Reason::new("You care for us", "/photos/IMG_7836.JPG"),
                Reason::new(
                    "You always make sure we have the best things in life",
                    "/photos/IMG_4261.jpeg",
                ),
                Reason::new("You always make sure we are happy", "/photos/IMG_4510.JPEG"),
                Reason::new(
                    "You showed us what it means to be loved unconditionally",
                    "/photos/IMG_4609.JPG",
                ),
                Reason::new("You accepted our faults and who we are", "/photos/IMG_7823.jpeg"),
                Reason::new("You encourage us to try new things", "/photos/DSC08902.JPG"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationContent {
    pub title: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub button_label: String,
    pub emojis: Vec<String>,
    pub floating: Vec<String>,
}

impl Default for CelebrationContent {
    fn default() -> Self {
        Self {
            title: "Let's Celebrate! 🎉".to_string(),
            heading: "Happy Birthday Mommy! ❤️".to_string(),
            paragraphs: vec![
                "May 30th marks another year where the world was changed for the better. Today we celebrate not just another day where a beautiful Mom was brought into this earth, but celebrate the lessons you have taught us, the love you brought into this world, and the sacrifices you have made to be where you are today."
                    .to_string(),
                "Thank you for being the best Mom in the whole world. We don't know what we would do without you. We love you very much ❤️"
                    .to_string(),
            ],
            button_label: "🎊 Celebrate! 🎊".to_string(),
            emojis: ["🎂", "🎈", "🎁", "✨", "🌟", "💐", "🎊", "🥳"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            floating: ["🎈", "🎂", "🎁", "✨"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Everything the pages display
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub site: SiteInfo,
    pub welcome: WelcomeContent,
    pub photo: PhotoContent,
    pub videos: VideosContent,
    pub reasons: ReasonsContent,
    pub celebration: CelebrationContent,
}

impl Content {
    /// Parse content from YAML text
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self, ContentError> {
        let content: Content = serde_yaml::from_str(text).map_err(|source| ContentError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a YAML file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text, path)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.reasons.items.is_empty() {
            return Err(ContentError::NoReasons);
        }
        Ok(())
    }
}
