//! Per-platform authoring profiles.
//!
//! A closed catalog describing how content should be written for each
//! platform: hard length limits, tone, and hashtag placement. Consumed by the
//! generator when building prompts and by the `platforms` command for display.

use crate::model::Platform;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashtagStyle {
    Inline,
    Footer,
}

impl fmt::Display for HashtagStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashtagStyle::Inline => write!(f, "inline"),
            HashtagStyle::Footer => write!(f, "footer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub name: &'static str,
    pub platform: Platform,
    pub max_length: usize,
    pub description: &'static str,
    pub hashtag_style: HashtagStyle,
    pub tone: &'static str,
    pub example_format: &'static str,
}

const PROFILES: [PlatformProfile; 3] = [
    PlatformProfile {
        name: "Twitter / X",
        platform: Platform::Twitter,
        max_length: 280,
        description: "Short-form microblogging. Punchy, engaging, concise.",
        hashtag_style: HashtagStyle::Inline,
        tone: "concise and engaging, sometimes witty",
        example_format: "Main point in 1-2 sentences. #Hashtag #Topic",
    },
    PlatformProfile {
        name: "Instagram",
        platform: Platform::Instagram,
        max_length: 2200,
        description: "Visual-first platform. Captions support storytelling with emoji and hashtag blocks.",
        hashtag_style: HashtagStyle::Footer,
        tone: "casual, relatable, storytelling-oriented with emoji",
        example_format: "Opening hook line\n\nBody paragraph with details and personality.\n\nCall to action\n\n#hashtag1 #hashtag2 #hashtag3",
    },
    PlatformProfile {
        name: "LinkedIn",
        platform: Platform::Linkedin,
        max_length: 3000,
        description: "Professional networking. Thought leadership, industry insights, career content.",
        hashtag_style: HashtagStyle::Footer,
        tone: "professional, insightful, thought-leadership",
        example_format: "Attention-grabbing opening line.\n\nSupporting paragraph with data or experience.\n\nKey takeaway or call to discussion.\n\n#Industry #Topic",
    },
];

/// Profile for a single platform.
pub fn profile(platform: Platform) -> &'static PlatformProfile {
    match platform {
        Platform::Twitter => &PROFILES[0],
        Platform::Instagram => &PROFILES[1],
        Platform::Linkedin => &PROFILES[2],
    }
}

/// All profiles, in catalog order.
pub fn all() -> &'static [PlatformProfile] {
    &PROFILES
}
