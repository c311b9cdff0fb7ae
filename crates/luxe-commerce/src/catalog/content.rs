//! Home page reference content: carousel slides, feature blurbs, social links.

use serde::{Deserialize, Serialize};

/// One frame of the rotating promotional banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

impl Slide {
    pub fn new(image: &str, title: &str, subtitle: &str) -> Self {
        Self {
            image: image.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// A value-proposition blurb.
///
/// `icon` is a symbolic icon name; the renderer decides how to draw it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A footer link to the brand's social media presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub network: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(network: &str, url: &str) -> Self {
        Self {
            network: network.to_string(),
            url: url.to_string(),
        }
    }
}
