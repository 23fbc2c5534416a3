//! Plain-text rendering for the console.

use std::fmt::Write;

use harpal_client::models::category::Category;
use harpal_client::models::job::JobPosting;
use harpal_client::models::user::User;
use harpal_dashboard::notify::{Level, Notification};
use harpal_dashboard::screens::{CategorySummary, OverviewStats, UserSummary};
use harpal_dashboard::shell::{MenuItem, APP_TITLE};

/// An entity that can be shown as one table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn yes_no(value: bool) -> String {
    let word = if value { "yes" } else { "no" };
    word.to_string()
}

impl TableRow for JobPosting {
    const HEADERS: &'static [&'static str] = &["ID", "TITLE", "COMPANY", "LOCATION", "TYPE", "FEATURED", "VIEWS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            text(self.title.as_deref()),
            text(self.company_name()),
            text(self.location.as_deref()),
            text(self.job_type.map(|t| t.as_str())),
            yes_no(self.is_featured()),
            self.views.map_or_else(|| "-".into(), |v| v.to_string()),
        ]
    }
}

impl TableRow for User {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "EMAIL", "ROLE", "COMPANY", "ACTIVE"];

    fn cells(&self) -> Vec<String> {
        let name = self.full_name();
        vec![
            self.id.to_string(),
            if name.is_empty() { "-".into() } else { name },
            text(self.email.as_deref()),
            self.role.as_ref().map_or_else(|| "-".into(), |r| r.to_string()),
            text(self.company_name.as_deref()),
            yes_no(self.is_active()),
        ]
    }
}

impl TableRow for Category {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "ICON", "JOBS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            text(self.name.as_deref()),
            text(self.icon_url.as_deref()),
            self.job_count.map_or_else(|| "-".into(), |n| n.to_string()),
        ]
    }
}

/// Left-aligned columns separated by two spaces.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header).chain(rows) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}

pub fn entities<'a, E: TableRow + 'a>(items: impl Iterator<Item = &'a E>) -> String {
    let rows: Vec<Vec<String>> = items.map(E::cells).collect();
    if rows.is_empty() {
        return "(no entries)\n".to_string();
    }
    table(E::HEADERS, &rows)
}

/// `name: value` lines for an open form.
pub fn form<I>(title: &str, fields: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let fields: Vec<(String, String)> = fields.into_iter().collect();
    let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = format!("{title}\n");
    for (name, value) in fields {
        let _ = writeln!(out, "  {name:<width$}  {value}");
    }
    out
}

pub fn overview(stats: &OverviewStats) -> String {
    fn figure<T: ToString>(value: Option<T>) -> String {
        value.map_or_else(|| "unavailable".to_string(), |v| v.to_string())
    }

    let mut out = String::new();
    let _ = writeln!(out, "Total Jobs     {}", figure(stats.total_jobs));
    let _ = writeln!(out, "Active Users   {}", figure(stats.active_users));
    let _ = writeln!(out, "Total Views    {}", figure(stats.total_views));
    let _ = writeln!(out, "Featured Jobs  {}", figure(stats.featured_jobs));
    let _ = writeln!(out, "Posted Today   {}", figure(stats.jobs_today));
    if !stats.recent_jobs.is_empty() {
        out.push_str("\nRecent Job Postings\n");
        out.push_str(&entities(stats.recent_jobs.iter()));
    }
    out
}

pub fn user_summary(summary: &UserSummary) -> String {
    format!(
        "Total Users {}  Active Users {}  Admins {}\n",
        summary.total, summary.active, summary.admins
    )
}

pub fn category_summary(summary: &CategorySummary) -> String {
    let average = summary
        .average_jobs
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    format!(
        "Total Categories {}  Total Jobs {}  Avg Jobs/Category {average}\n",
        summary.total, summary.total_jobs
    )
}

pub fn menu(items: &[MenuItem], collapsed: bool) -> String {
    let mut out = String::new();
    if !collapsed {
        let _ = writeln!(out, "{APP_TITLE}");
    }
    for item in items {
        let marker = if item.active { '>' } else { ' ' };
        if collapsed {
            let _ = writeln!(out, "{marker} {}", item.tab.id());
        } else {
            let _ = writeln!(out, "{marker} {:<11} {}", item.tab.id(), item.label);
        }
    }
    out
}

pub fn notification(notification: &Notification) -> String {
    let tag = match notification.level {
        Level::Success => "[ok]",
        Level::Error => "[error]",
    };
    format!("{tag} {}", notification.message)
}
