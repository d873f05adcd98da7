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

//! Terminal rendering for the dashboard commands

use chrono::{DateTime, TimeZone, Timelike};
use opsboard_core::{format_compact, ActivityLog, DashboardStats, PlatformCount};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Activity list with localized type and status labels
pub fn activity_list<Tz: TimeZone>(logs: &[ActivityLog], tz: &Tz) -> String {
    if logs.is_empty() {
        return "暂无活动记录。\n".to_string();
    }

    let mut out = String::new();
    for log in logs {
        let local = log.timestamp.with_timezone(tz);
        let _ = writeln!(
            out,
            "[{:02}:{:02}] {} · {} · {} · {}",
            local.hour(),
            local.minute(),
            log.platform,
            log.activity_type.zh_label(),
            log.status.zh_label(),
            log.user_name
        );
        let _ = writeln!(out, "    {}", log.description);

        let mut extras = Vec::new();
        if let Some(metrics) = &log.metrics {
            if let Some(views) = metrics.views {
                extras.push(format!("👁️ {}", format_compact(views)));
            }
            if let Some(likes) = metrics.likes {
                extras.push(format!("❤️ {}", format_compact(likes)));
            }
        }
        if let Some(link) = &log.link {
            extras.push(format!("🔗 {}", link));
        }
        if !extras.is_empty() {
            let _ = writeln!(out, "    {}", extras.join("  "));
        }
    }
    out
}

/// Per-platform counts as horizontal bars scaled to the largest count
pub fn platform_chart(counts: &[PlatformCount]) -> String {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    let label_width = counts
        .iter()
        .map(|c| c.platform.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in counts {
        let bar = if max == 0 {
            0
        } else {
            (entry.count * BAR_WIDTH).div_ceil(max)
        };
        let _ = writeln!(
            out,
            "{:<width$} {:>3} {} {}",
            entry.platform.as_str(),
            entry.count,
            "█".repeat(bar),
            entry.style.hex,
            width = label_width
        );
    }
    out
}

/// Dashboard stat cards
pub fn stat_cards(stats: &DashboardStats) -> String {
    format!(
        "总活动数   {}\n已发布     {}\n进行中     {}\n总浏览量   {}\n总点赞数   {}\n参与成员   {}\n",
        stats.total_activities,
        stats.published,
        stats.in_progress,
        format_compact(stats.total_views),
        format_compact(stats.total_likes),
        stats.contributors
    )
}

/// One-line confirmation for a newly stored record
pub fn stored_record<Tz: TimeZone>(log: &ActivityLog, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local: DateTime<Tz> = log.timestamp.with_timezone(tz);
    format!(
        "已记录 {} 【{}】{} - {} ({})",
        log.id,
        log.platform,
        log.activity_type,
        log.user_name,
        local.format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use opsboard_core::{count_by_platform, dashboard_stats, demo::demo_logs};

    fn logs() -> Vec<ActivityLog> {
        demo_logs(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), &Utc)
    }

    #[test]
    fn test_activity_list_uses_localized_labels() {
        let text = activity_list(&logs(), &Utc);
        assert!(text.starts_with("[10:30] TikTok · 短视频 · 已发布 · Sarah Chen\n"));
        assert!(text.contains("LinkedIn · 帖子 · 草稿 · Mike Ross"));
        assert!(text.contains("👁️ 12.5K  ❤️ 3.4K"));
        assert_eq!(activity_list(&[], &Utc), "暂无活动记录。\n");
    }

    #[test]
    fn test_platform_chart_scales_bars() {
        let chart = platform_chart(&count_by_platform(&logs()));
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Instagram"));
        assert!(lines[0].contains(&"█".repeat(BAR_WIDTH)));
        assert!(lines[4].starts_with("YouTube     0  #FF0000"));
    }

    #[test]
    fn test_stat_cards() {
        let cards = stat_cards(&dashboard_stats(&logs()));
        assert!(cards.contains("总活动数   4"));
        assert!(cards.contains("进行中     1"));
        assert!(cards.contains("总浏览量   17.0K"));
    }
}
