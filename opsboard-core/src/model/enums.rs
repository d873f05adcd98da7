// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Closed enumerations of the activity log
//!
//! Each enumeration carries its wire label (the string used in JSON and in the
//! export text) and a static display table. Lookups by raw label never fail:
//! an unmatched label falls back to a neutral style or is shown as-is.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social network an activity was performed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    TikTok,
    Twitter,
    LinkedIn,
    YouTube,
    Facebook,
}

/// Display metadata attached to a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStyle {
    /// Human-readable color family
    pub color_name: &'static str,
    /// Bar color used by the platform chart
    pub hex: &'static str,
}

const INSTAGRAM_STYLE: PlatformStyle = PlatformStyle {
    color_name: "pink",
    hex: "#E1306C",
};
const TIKTOK_STYLE: PlatformStyle = PlatformStyle {
    color_name: "black",
    hex: "#000000",
};
const TWITTER_STYLE: PlatformStyle = PlatformStyle {
    color_name: "blue",
    hex: "#1DA1F2",
};
const LINKEDIN_STYLE: PlatformStyle = PlatformStyle {
    color_name: "navy",
    hex: "#0A66C2",
};
const YOUTUBE_STYLE: PlatformStyle = PlatformStyle {
    color_name: "red",
    hex: "#FF0000",
};
const FACEBOOK_STYLE: PlatformStyle = PlatformStyle {
    color_name: "blue",
    hex: "#1877F2",
};

impl Platform {
    /// Every platform, in declaration order.
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::YouTube,
        Platform::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
            Platform::YouTube => "YouTube",
            Platform::Facebook => "Facebook",
        }
    }

    pub fn style(&self) -> PlatformStyle {
        match self {
            Platform::Instagram => INSTAGRAM_STYLE,
            Platform::TikTok => TIKTOK_STYLE,
            Platform::Twitter => TWITTER_STYLE,
            Platform::LinkedIn => LINKEDIN_STYLE,
            Platform::YouTube => YOUTUBE_STYLE,
            Platform::Facebook => FACEBOOK_STYLE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::TikTok),
            "twitter" | "x" => Ok(Platform::Twitter),
            "linkedin" => Ok(Platform::LinkedIn),
            "youtube" => Ok(Platform::YouTube),
            "facebook" => Ok(Platform::Facebook),
            _ => Err(CoreError::validation(format!("Unknown platform: {s}"))),
        }
    }
}

/// Kind of work an activity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Post,
    Story,
    Reel,
    /// Replying to comments, liking
    Engagement,
    Strategy,
    #[serde(rename = "Ad Campaign", alias = "AdCampaign")]
    AdCampaign,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Post,
        ActivityType::Story,
        ActivityType::Reel,
        ActivityType::Engagement,
        ActivityType::Strategy,
        ActivityType::AdCampaign,
    ];

    /// Wire label, as written to JSON and export text.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Post => "Post",
            ActivityType::Story => "Story",
            ActivityType::Reel => "Reel",
            ActivityType::Engagement => "Engagement",
            ActivityType::Strategy => "Strategy",
            ActivityType::AdCampaign => "Ad Campaign",
        }
    }

    /// Localized label shown in activity lists.
    pub fn zh_label(&self) -> &'static str {
        match self {
            ActivityType::Post => "帖子",
            ActivityType::Story => "快拍",
            ActivityType::Reel => "短视频",
            ActivityType::Engagement => "互动",
            ActivityType::Strategy => "策略",
            ActivityType::AdCampaign => "广告",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "post" => Ok(ActivityType::Post),
            "story" => Ok(ActivityType::Story),
            "reel" => Ok(ActivityType::Reel),
            "engagement" => Ok(ActivityType::Engagement),
            "strategy" => Ok(ActivityType::Strategy),
            "ad campaign" | "adcampaign" | "ad_campaign" | "ad-campaign" => {
                Ok(ActivityType::AdCampaign)
            }
            _ => Err(CoreError::validation(format!("Unknown activity type: {s}"))),
        }
    }
}

/// Publication state of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    Draft,
    #[default]
    Published,
    Scheduled,
    Analyzing,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Draft,
        Status::Published,
        Status::Scheduled,
        Status::Analyzing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Published => "Published",
            Status::Scheduled => "Scheduled",
            Status::Analyzing => "Analyzing",
        }
    }

    pub fn zh_label(&self) -> &'static str {
        match self {
            Status::Draft => "草稿",
            Status::Published => "已发布",
            Status::Scheduled => "已排期",
            Status::Analyzing => "分析中",
        }
    }

    /// Everything that is not yet published counts as in progress.
    pub fn is_in_progress(&self) -> bool {
        !matches!(self, Status::Published)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Status::Draft),
            "published" => Ok(Status::Published),
            "scheduled" => Ok(Status::Scheduled),
            "analyzing" => Ok(Status::Analyzing),
            _ => Err(CoreError::validation(format!("Unknown status: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_labels_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
        }
        assert_eq!("TIKTOK".parse::<Platform>().unwrap(), Platform::TikTok);
        assert!("myspace".parse::<Platform>().unwrap_err().is_validation());
    }

    #[test]
    fn test_platform_styles() {
        assert_eq!(Platform::Instagram.style().hex, "#E1306C");
        assert_eq!(Platform::LinkedIn.style().color_name, "navy");
        assert_eq!(Platform::YouTube.style().hex, "#FF0000");
    }

    #[test]
    fn test_ad_campaign_wire_label() {
        let json = serde_json::to_string(&ActivityType::AdCampaign).unwrap();
        assert_eq!(json, "\"Ad Campaign\"");

        let parsed: ActivityType = serde_json::from_str("\"AdCampaign\"").unwrap();
        assert_eq!(parsed, ActivityType::AdCampaign);
        assert_eq!(
            "ad campaign".parse::<ActivityType>().unwrap(),
            ActivityType::AdCampaign
        );
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        assert!("Livestream".parse::<ActivityType>().unwrap_err().is_validation());
        assert!("Archived".parse::<Status>().unwrap_err().is_validation());
        assert!(serde_json::from_str::<Platform>("\"Mastodon\"").is_err());
    }

    #[test]
    fn test_status_progress() {
        assert!(!Status::Published.is_in_progress());
        assert!(Status::Draft.is_in_progress());
        assert!(Status::Scheduled.is_in_progress());
        assert_eq!(Status::default(), Status::Published);
        assert_eq!(Status::Analyzing.zh_label(), "分析中");
    }
}
