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

use opsboard_core::Summary;

/// Render a summary as the shareable "AI brief" text.
pub fn render_brief_text(summary: &Summary) -> String {
    let mut lines = vec![
        "🤖 **AI 智能总结**".to_string(),
        String::new(),
        "📌 **执行摘要**:".to_string(),
        summary.summary.clone(),
        String::new(),
        "🏆 **关键成就**:".to_string(),
    ];
    lines.extend(summary.key_achievements.iter().map(|item| format!("- {}", item)));
    lines.push(String::new());
    lines.push("💡 **建议与机会**:".to_string());
    lines.extend(summary.suggestions.iter().map(|item| format!("- {}", item)));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_layout() {
        let summary = Summary::new(
            "团队专注于短视频。",
            vec!["Reel 获得 12.5K 观看".to_string()],
            vec!["发布 LinkedIn 草稿".to_string(), "复用热门音频".to_string()],
        );

        assert_eq!(
            render_brief_text(&summary),
            "🤖 **AI 智能总结**\n\n📌 **执行摘要**:\n团队专注于短视频。\n\n\
             🏆 **关键成就**:\n- Reel 获得 12.5K 观看\n\n\
             💡 **建议与机会**:\n- 发布 LinkedIn 草稿\n- 复用热门音频"
        );
    }

    #[test]
    fn test_brief_with_empty_lists() {
        let text = render_brief_text(&Summary::new("S", vec![], vec![]));
        assert!(text.ends_with("🏆 **关键成就**:\n\n💡 **建议与机会**:"));
    }
}
