//! Output Rendering
//!
//! Provides a unified interface for rendering reports to different formats.
//! Renderers return the text instead of printing it so callers decide where
//! it goes.

use crate::application::{
    FounderDashboard, FounderStream, NotificationSummary, SprintPosition, TeamDashboard,
    TeamFeed, TeamStream,
};
use crate::config::OutputFormat;
use crate::domain::services::Pacing;
use crate::error::MissionResult;

use super::format::{
    colors, format_currency, format_percent, pad_right, paint, progress_bar, tier_color,
};

const BAR_WIDTH: usize = 24;

/// Icons for output rendering
struct Icons {
    separator: &'static str,
    win: &'static str,
    blocker: &'static str,
    warning: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            separator: "·",
            win: "✓",
            blocker: "✗",
            warning: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            separator: "-",
            win: "[WIN]",
            blocker: "[BLOCKED]",
            warning: "[!]",
        }
    }
}

/// Trait for rendering report views
pub trait ReportRenderer {
    fn render_team(&self, team: &TeamDashboard) -> MissionResult<String>;
    fn render_founder(&self, founder: &FounderDashboard) -> MissionResult<String>;
    fn render_summary(&self, summary: &NotificationSummary) -> MissionResult<String>;
    fn render_feed(&self, feed: &TeamFeed) -> MissionResult<String>;
    fn render_position(&self, position: &SprintPosition) -> MissionResult<String>;
}

/// Text renderer for terminals
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn heading(&self, position: &SprintPosition) -> String {
        let icons = self.icons();
        let mut line = format!(
            "Mission Control {} month {} of {} ({})",
            icons.separator, position.current_month, position.total_months, position.calendar_month
        );
        if position.is_overrun() {
            line.push_str(&format!(" {} sprint overrun", icons.warning));
        }
        line
    }

    fn pacing_line(&self, pacing: &Pacing) -> String {
        let tier = paint(pacing.tier.as_str(), tier_color(pacing.tier), self.color);
        format!(
            "  {}{} {} (expected {})",
            pad_right("Pacing", 12),
            format_percent(pacing.percentage),
            tier,
            format_currency(pacing.expected_to_date)
        )
    }

    fn overall_lines(&self, label: &str, revenue: f64, target: f64, progress: f64) -> Vec<String> {
        vec![
            format!(
                "  {}{} / {} ({})",
                pad_right(label, 12),
                format_currency(revenue),
                format_currency(target),
                format_percent(progress)
            ),
            format!(
                "  {}{}",
                pad_right("", 12),
                progress_bar(progress, BAR_WIDTH, self.unicode)
            ),
        ]
    }

    fn team_stream_lines(&self, label: &str, stream: &TeamStream) -> Vec<String> {
        let mut lines = self.overall_lines(label, stream.revenue, stream.target, stream.progress);
        lines.push(self.pacing_line(&stream.pacing));
        lines.push(format!(
            "  {}{} of {} ({})",
            pad_right("This month", 12),
            format_currency(stream.this_month.revenue),
            format_currency(stream.this_month.target),
            format_percent(stream.this_month.progress)
        ));
        lines
    }

    fn founder_stream_lines(&self, label: &str, stream: &FounderStream) -> Vec<String> {
        let mut lines = self.overall_lines(label, stream.revenue, stream.target, stream.progress);
        lines.push(self.pacing_line(&stream.pacing));
        lines
    }
}

impl ReportRenderer for TextRenderer {
    fn render_team(&self, team: &TeamDashboard) -> MissionResult<String> {
        let mut lines = vec![self.heading(&team.position), String::new()];

        lines.push("Primary revenue".to_string());
        lines.extend(self.team_stream_lines("Overall", &team.primary));

        if let Some(mission) = &team.secondary {
            lines.push(String::new());
            lines.push(format!(
                "{} ({} / {} customers)",
                mission.name, mission.new_customers, mission.target_customers
            ));
            lines.extend(self.team_stream_lines("ARR", &mission.stream));
        }

        if !team.contributions.is_empty() {
            let width = team
                .contributions
                .iter()
                .map(|c| unicode_width::UnicodeWidthStr::width(c.name.as_str()))
                .max()
                .unwrap_or(0)
                + 2;
            lines.push(String::new());
            lines.push("Contributions".to_string());
            for contribution in &team.contributions {
                lines.push(format!(
                    "  {}{}",
                    pad_right(&contribution.name, width),
                    format_currency(contribution.revenue)
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn render_founder(&self, founder: &FounderDashboard) -> MissionResult<String> {
        let mut lines = vec![
            format!(
                "{} {} {}",
                founder.name,
                self.icons().separator,
                self.heading(&founder.position)
            ),
            String::new(),
            "Primary revenue".to_string(),
        ];
        lines.extend(self.founder_stream_lines("Overall", &founder.primary));

        if let Some(mission) = founder.secondary.as_ref().filter(|m| m.stream.target > 0.0) {
            lines.push(String::new());
            lines.push(format!(
                "{} ({} share)",
                mission.name,
                format_percent(mission.share_percentage)
            ));
            lines.extend(self.founder_stream_lines("ARR", &mission.stream));
        }

        lines.push(String::new());
        if founder.entries.is_empty() {
            lines.push(paint("No revenue entries yet.", colors::DIM, self.color));
        } else {
            lines.push(format!("Entries ({})", founder.entries.len()));
            for entry in &founder.entries {
                let mut line = format!(
                    "  {}  {}  {}",
                    pad_right(&entry.date, 10),
                    pad_right(&entry.source.to_string(), 9),
                    format_currency(entry.amount)
                );
                if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
                    line.push_str(&format!("  {}", description));
                }
                if entry.is_new_secondary_customer() {
                    line.push_str("  (new customer)");
                }
                lines.push(line);
            }
        }

        Ok(lines.join("\n"))
    }

    fn render_summary(&self, summary: &NotificationSummary) -> MissionResult<String> {
        let mut lines = vec![
            format!(
                "Progress update {} month {} of {} ({})",
                self.icons().separator,
                summary.current_month,
                summary.total_months,
                summary.calendar_month
            ),
            format!(
                "Primary: {} / {} ({})",
                format_currency(summary.primary_revenue),
                format_currency(summary.total_target),
                format_percent(summary.primary_progress)
            ),
            format!(
                "  This month: {} of {} ({})",
                format_currency(summary.this_month_primary_revenue),
                format_currency(summary.this_month_primary_target),
                format_percent(summary.this_month_primary_progress)
            ),
        ];

        if let Some(secondary) = &summary.secondary {
            lines.push(format!(
                "{}: {} / {} ({}), {} / {} customers",
                secondary.mission_name,
                format_currency(secondary.revenue),
                format_currency(secondary.target_arr),
                format_percent(secondary.arr_progress),
                secondary.new_customers,
                secondary.target_customers
            ));
            lines.push(format!(
                "  This month: {} of {} ({})",
                format_currency(secondary.this_month_revenue),
                format_currency(secondary.this_month_target),
                format_percent(secondary.this_month_progress)
            ));
        }

        Ok(lines.join("\n"))
    }

    fn render_feed(&self, feed: &TeamFeed) -> MissionResult<String> {
        if feed.is_empty() {
            return Ok(paint("No wins or blockers posted.", colors::DIM, self.color));
        }

        let icons = self.icons();
        let mut lines = vec![format!("Wins ({})", feed.wins.len())];
        for item in &feed.wins {
            lines.push(format!(
                "  {} {}: {}",
                paint(icons.win, colors::SUCCESS, self.color),
                item.author,
                item.text
            ));
        }
        lines.push(String::new());
        lines.push(format!("Blockers ({})", feed.blockers.len()));
        for item in &feed.blockers {
            lines.push(format!(
                "  {} {}: {}",
                paint(icons.blocker, colors::ERROR, self.color),
                item.author,
                item.text
            ));
        }
        Ok(lines.join("\n"))
    }

    fn render_position(&self, position: &SprintPosition) -> MissionResult<String> {
        Ok(format!(
            "{}\nSprint runs {} to {}",
            self.heading(position),
            position.start,
            position.end
        ))
    }
}

/// JSON renderer for scripting and the notification formatter
pub struct JsonRenderer;

impl JsonRenderer {
    fn to_json<T: serde::Serialize>(value: &T) -> MissionResult<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_team(&self, team: &TeamDashboard) -> MissionResult<String> {
        Self::to_json(team)
    }

    fn render_founder(&self, founder: &FounderDashboard) -> MissionResult<String> {
        Self::to_json(founder)
    }

    fn render_summary(&self, summary: &NotificationSummary) -> MissionResult<String> {
        Self::to_json(summary)
    }

    fn render_feed(&self, feed: &TeamFeed) -> MissionResult<String> {
        Self::to_json(feed)
    }

    fn render_position(&self, position: &SprintPosition) -> MissionResult<String> {
        Self::to_json(position)
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    color: bool,
    unicode: bool,
) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color, unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
