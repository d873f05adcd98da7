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

//! Sample team data for demos and local runs.

use crate::model::{ActivityLog, ActivityType, LogId, Metrics, Platform, Role, Status, User};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// The signed-in operator of the demo dashboard
pub fn demo_user() -> User {
    User::new("u1", "Sarah Chen", Role::Operator).with_avatar("https://picsum.photos/100")
}

struct Sample {
    id: &'static str,
    user_id: &'static str,
    user_name: &'static str,
    platform: Platform,
    activity_type: ActivityType,
    description: &'static str,
    metrics: Option<(u64, u64)>,
    status: Status,
    at: (u32, u32),
}

const SAMPLES: [Sample; 4] = [
    Sample {
        id: "1",
        user_id: "u1",
        user_name: "Sarah Chen",
        platform: Platform::TikTok,
        activity_type: ActivityType::Reel,
        description: "发布了新产品发布会的幕后花絮视频。使用了热门音频。",
        metrics: Some((12_500, 3_400)),
        status: Status::Published,
        at: (10, 30),
    },
    Sample {
        id: "2",
        user_id: "u2",
        user_name: "Mike Ross",
        platform: Platform::LinkedIn,
        activity_type: ActivityType::Post,
        description: "起草了一篇关于跨境电商趋势的思想领导力文章。",
        metrics: None,
        status: Status::Draft,
        at: (11, 15),
    },
    Sample {
        id: "3",
        user_id: "u1",
        user_name: "Sarah Chen",
        platform: Platform::Instagram,
        activity_type: ActivityType::Story,
        description: "发布投票，询问粉丝最喜欢的夏季系列颜色。",
        metrics: Some((4_500, 120)),
        status: Status::Published,
        at: (14, 20),
    },
    Sample {
        id: "4",
        user_id: "u3",
        user_name: "Jessica Lee",
        platform: Platform::Twitter,
        activity_type: ActivityType::Engagement,
        description: "回复了15个客户支持查询，转发了3条正面评价。",
        metrics: None,
        status: Status::Published,
        at: (9, 0),
    },
];

/// The four sample activities, stamped on `date` in time zone `tz`.
pub fn demo_logs<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Vec<ActivityLog> {
    SAMPLES
        .iter()
        .map(|sample| ActivityLog {
            id: LogId::from(sample.id),
            user_id: sample.user_id.to_string(),
            user_name: sample.user_name.to_string(),
            platform: sample.platform,
            activity_type: sample.activity_type,
            description: sample.description.to_string(),
            metrics: sample
                .metrics
                .map(|(views, likes)| Metrics::new().views(views).likes(likes)),
            link: None,
            status: sample.status,
            timestamp: local_instant(date, sample.at, tz),
        })
        .collect()
}

fn local_instant<Tz: TimeZone>(date: NaiveDate, (hour, minute): (u32, u32), tz: &Tz) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default());
    // Falls back to UTC wall time inside a DST gap
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}
