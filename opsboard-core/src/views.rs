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

//! Derived views over a log snapshot
//!
//! Every function here is pure: it reads the slice it is given and never
//! touches the store. Date-sensitive views take the reference instant as an
//! argument so callers decide which clock and time zone apply.

use crate::model::{ActivityLog, Platform, PlatformStyle, Status};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Write;

const EMPTY_EXPORT: &str = "今日暂无活动记录。";

/// Number of logs on one platform, with its chart style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCount {
    pub platform: Platform,
    pub count: usize,
    pub style: PlatformStyle,
}

/// Count logs per platform.
///
/// Returns one entry for every platform in declaration order, zeros included.
pub fn count_by_platform(logs: &[ActivityLog]) -> Vec<PlatformCount> {
    Platform::ALL
        .iter()
        .map(|&platform| PlatformCount {
            platform,
            count: logs.iter().filter(|log| log.platform == platform).count(),
            style: platform.style(),
        })
        .collect()
}

/// Logs that fall on the same calendar day as `reference`, in its time zone.
pub fn filter_today<Tz: TimeZone>(
    logs: &[ActivityLog],
    reference: &DateTime<Tz>,
) -> Vec<ActivityLog> {
    let tz = reference.timezone();
    let day = reference.date_naive();

    logs.iter()
        .filter(|log| log.timestamp.with_timezone(&tz).date_naive() == day)
        .cloned()
        .collect()
}

/// Render the plain-text daily digest used for sharing.
///
/// The header carries the month and day of `reference`; log times are shown
/// as `HH:MM` in the same time zone.
pub fn render_export_text<Tz: TimeZone>(logs: &[ActivityLog], reference: &DateTime<Tz>) -> String {
    let mut text = format!(
        "📅 **{}月{}日 运营日报汇总**\n\n",
        reference.month(),
        reference.day()
    );

    if logs.is_empty() {
        text.push_str(EMPTY_EXPORT);
        return text;
    }

    let tz = reference.timezone();
    for (index, log) in logs.iter().enumerate() {
        let local = log.timestamp.with_timezone(&tz);
        // Writing into a String cannot fail
        let _ = writeln!(
            text,
            "{}. 【{}】{} - {} ({:02}:{:02})",
            index + 1,
            log.platform,
            log.activity_type,
            log.user_name,
            local.hour(),
            local.minute()
        );
        let _ = writeln!(text, "   📝 内容: {}", log.description);
        let _ = write!(text, "   📊 状态: {}", log.status);

        if let Some(metrics) = log.metrics.as_ref().filter(|m| m.has_reach()) {
            let _ = write!(
                text,
                " | 数据: 👁️{} ❤️{}",
                metrics.views.unwrap_or(0),
                metrics.likes.unwrap_or(0)
            );
        }
        if let Some(link) = &log.link {
            let _ = write!(text, "\n   🔗 链接: {}", link);
        }
        text.push_str("\n\n");
    }

    text
}

/// The first `n` logs of a most-recent-first snapshot.
pub fn recent(logs: &[ActivityLog], n: usize) -> &[ActivityLog] {
    &logs[..n.min(logs.len())]
}

/// Headline numbers for the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_activities: usize,
    pub published: usize,
    /// Draft, Scheduled or Analyzing
    pub in_progress: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub contributors: usize,
}

pub fn dashboard_stats(logs: &[ActivityLog]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_activities: logs.len(),
        ..Default::default()
    };
    let mut contributors = HashSet::new();

    for log in logs {
        if log.status == Status::Published {
            stats.published += 1;
        } else {
            stats.in_progress += 1;
        }
        if let Some(metrics) = &log.metrics {
            stats.total_views = stats.total_views.saturating_add(metrics.views.unwrap_or(0));
            stats.total_likes = stats.total_likes.saturating_add(metrics.likes.unwrap_or(0));
        }
        contributors.insert(log.user_id.as_str());
    }

    stats.contributors = contributors.len();
    stats
}

/// Format a count for a stat card: `950`, `45.2K`, `1.2M`.
pub fn format_compact(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }

    // Tenths of a thousand, so 999_950 rolls over into millions
    let tenths_k = (n as f64 / 100.0).round();
    if tenths_k < 10_000.0 {
        format!("{:.1}K", tenths_k / 10.0)
    } else {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    }
}
