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

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args as ClapArgs, Parser, Subcommand};
use opsboard_core::{
    count_by_platform, dashboard_stats, demo, filter_today, recent, render_export_text,
    ActivityLog, ActivityLogInput, LogStore, Metrics, User,
};
use opsboard_insight::{
    error_summary, no_activity_summary, render_brief_text, InsightSession, SummaryService,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod render;

use config::OpsboardConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Social media operations activity log", long_about = None)]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, env = "OPSBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Seed the store with today's sample activities
    #[arg(long)]
    demo: bool,

    /// Seed the store from a JSON array of activity logs
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new activity
    Add(AddArgs),

    /// List activities, most recent first
    List {
        /// Only today's activities
        #[arg(long)]
        today: bool,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Activities per platform
    Chart {
        #[arg(long)]
        today: bool,
    },

    /// Dashboard stat cards and recent activity
    Stats,

    /// Print the shareable daily report
    Export {
        #[arg(long)]
        today: bool,
    },

    /// Generate the AI daily summary
    Summarize {
        /// Summarize every stored activity instead of today's
        #[arg(long)]
        all: bool,

        /// Print the shareable brief text
        #[arg(long)]
        brief: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct AddArgs {
    #[arg(long)]
    platform: String,

    #[arg(long = "type")]
    activity_type: String,

    #[arg(long)]
    description: String,

    #[arg(long)]
    views: Option<u64>,

    #[arg(long)]
    likes: Option<u64>,

    #[arg(long)]
    shares: Option<u64>,

    #[arg(long)]
    comments: Option<u64>,

    #[arg(long)]
    link: Option<String>,

    #[arg(long)]
    status: Option<String>,

    /// Author id (default: the demo operator)
    #[arg(long, env = "OPSBOARD_USER_ID")]
    user_id: Option<String>,

    #[arg(long, env = "OPSBOARD_USER_NAME")]
    user_name: Option<String>,
}

impl AddArgs {
    fn into_input(self) -> Result<ActivityLogInput> {
        let mut user: User = demo::demo_user();
        if let Some(id) = self.user_id {
            user.id = id;
        }
        if let Some(name) = self.user_name {
            user.name = name;
        }

        let mut input = ActivityLogInput::new(
            &user,
            self.platform.parse()?,
            self.activity_type.parse()?,
            self.description,
        );
        if let Some(status) = self.status {
            input = input.status(status.parse()?);
        }
        if let Some(link) = self.link {
            input = input.link(link);
        }
        input.metrics = Some(Metrics {
            views: self.views,
            likes: self.likes,
            shares: self.shares,
            comments: self.comments,
        });

        Ok(input.validate()?)
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "opsboard=debug,opsboard_core=debug,opsboard_insight=debug"
    } else {
        "opsboard=info,opsboard_core=info,opsboard_insight=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn seed_store(args: &Args) -> Result<LogStore> {
    let mut records: Vec<ActivityLog> = Vec::new();

    if let Some(path) = &args.import {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let imported: Vec<ActivityLog> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::info!("Imported {} activity logs from {:?}", imported.len(), path);
        records.extend(imported);
    }

    if args.demo {
        records.extend(demo::demo_logs(Local::now().date_naive(), &Local));
    }

    Ok(LogStore::from_records(records)?)
}

fn select(logs: Vec<ActivityLog>, today: bool) -> Vec<ActivityLog> {
    if today {
        filter_today(&logs, &Local::now())
    } else {
        logs
    }
}

async fn summarize(config: &OpsboardConfig, logs: &[ActivityLog], brief: bool) {
    let summary = if logs.is_empty() {
        no_activity_summary()
    } else {
        match SummaryService::from_config(&config.llm) {
            Ok(service) => {
                let session = InsightSession::new(Arc::new(service));
                session
                    .generate(logs)
                    .await
                    .unwrap_or_else(error_summary)
            }
            Err(e) => {
                tracing::error!("Error generating summary: {}", e);
                error_summary()
            }
        }
    };

    if brief {
        println!("{}", render_brief_text(&summary));
    } else {
        println!("📌 {}\n", summary.summary);
        println!("🏆 关键成就");
        for item in &summary.key_achievements {
            println!("  - {}", item);
        }
        println!("\n💡 建议与机会");
        for item in &summary.suggestions {
            println!("  - {}", item);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = OpsboardConfig::load(args.config.clone())?;
    let store = seed_store(&args)?;

    match args.command {
        Command::Add(add) => {
            let log = store.append(add.into_input()?);
            println!("{}\n", render::stored_record(&log, &Local));
            print!("{}", render::activity_list(&store.all(), &Local));
        }
        Command::List { today, limit } => {
            let logs = select(store.all(), today);
            let shown = recent(&logs, limit.unwrap_or(logs.len()));
            print!("{}", render::activity_list(shown, &Local));
        }
        Command::Chart { today } => {
            let logs = select(store.all(), today);
            print!("{}", render::platform_chart(&count_by_platform(&logs)));
        }
        Command::Stats => {
            let logs = store.all();
            print!("{}", render::stat_cards(&dashboard_stats(&logs)));
            println!("\n最近动态");
            print!(
                "{}",
                render::activity_list(recent(&logs, config.report.recent_limit), &Local)
            );
        }
        Command::Export { today } => {
            let logs = select(store.all(), today);
            println!("{}", render_export_text(&logs, &Local::now()));
        }
        Command::Summarize { all, brief } => {
            let logs = select(store.all(), !all);
            summarize(&config, &logs, brief).await;
        }
    }

    Ok(())
}
