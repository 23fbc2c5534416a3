//! Landing screen with headline figures and the most recent postings.

use std::sync::Arc;

use harpal_client::models::category::Category;
use harpal_client::models::job::JobPosting;
use harpal_client::models::user::User;
use harpal_client::resources::{JobsApi, UsersApi};
use harpal_client::ApiResult;

use crate::notify::{Notification, Notifier};

/// How many postings the "recent" panel shows.
pub const RECENT_JOBS: usize = 3;

/// Headline figures. `None` means the figure could not be loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewStats {
    pub total_jobs: Option<u64>,
    pub active_users: Option<usize>,
    pub total_views: Option<u64>,
    pub featured_jobs: Option<usize>,
    pub jobs_today: Option<usize>,
    pub recent_jobs: Vec<JobPosting>,
}

impl OverviewStats {
    /// Whether no figure at all could be loaded.
    pub fn is_empty(&self) -> bool {
        self.total_jobs.is_none()
            && self.active_users.is_none()
            && self.total_views.is_none()
            && self.featured_jobs.is_none()
            && self.jobs_today.is_none()
            && self.recent_jobs.is_empty()
    }
}

pub struct OverviewScreen {
    jobs: JobsApi,
    users: UsersApi,
    notifier: Arc<dyn Notifier>,
    stats: OverviewStats,
}

impl OverviewScreen {
    pub fn new(jobs: JobsApi, users: UsersApi, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            jobs,
            users,
            notifier,
            stats: OverviewStats::default(),
        }
    }

    pub fn stats(&self) -> &OverviewStats {
        &self.stats
    }

    /// Load every figure independently; one failing leaves only that figure
    /// unavailable.
    pub async fn mount(&mut self) -> &OverviewStats {
        let mut stats = OverviewStats {
            total_jobs: figure("total jobs", self.jobs.count().await),
            featured_jobs: figure("featured jobs", self.jobs.featured().await)
                .map(|listing| listing.into_items().len()),
            jobs_today: figure("jobs today", self.jobs.today().await)
                .map(|listing| listing.into_items().len()),
            ..OverviewStats::default()
        };

        if let Some(listing) = figure("jobs", self.jobs.get_all().await) {
            let jobs = listing.into_items();
            stats.total_views = Some(total_views(&jobs));
            stats.recent_jobs = recent_jobs(jobs, RECENT_JOBS);
        }
        stats.active_users = figure("users", self.users.get_all().await)
            .map(|listing| active_users(&listing.into_items()));

        if stats.is_empty() {
            self.notifier
                .notify(Notification::error("Failed to fetch dashboard statistics"));
        }
        self.stats = stats;
        &self.stats
    }
}

fn figure<T>(name: &'static str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(figure = name, error = %e, "Overview figure unavailable");
            None
        }
    }
}

/// Sum of `views` across postings; missing counts add nothing.
pub fn total_views(jobs: &[JobPosting]) -> u64 {
    jobs.iter().filter_map(|job| job.views).sum()
}

pub fn active_users(users: &[User]) -> usize {
    users.iter().filter(|user| user.is_active()).count()
}

pub fn admin_users(users: &[User]) -> usize {
    users
        .iter()
        .filter(|user| user.role.as_ref().is_some_and(|role| role.is_admin()))
        .count()
}

/// Sum of `jobCount` across categories; missing counts add nothing.
pub fn total_category_jobs(categories: &[Category]) -> u64 {
    categories.iter().filter_map(|category| category.job_count).sum()
}

/// Counts shown above the user table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserSummary {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
}

impl UserSummary {
    pub fn of(users: &[User]) -> Self {
        Self {
            total: users.len(),
            active: active_users(users),
            admins: admin_users(users),
        }
    }
}

/// Counts shown above the category table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySummary {
    pub total: usize,
    pub total_jobs: u64,
    /// Jobs per category rounded to the nearest whole number; `None` with no
    /// categories.
    pub average_jobs: Option<u64>,
}

impl CategorySummary {
    pub fn of(categories: &[Category]) -> Self {
        let total_jobs = total_category_jobs(categories);
        let count = categories.len() as u64;
        Self {
            total: categories.len(),
            total_jobs,
            average_jobs: (count > 0).then(|| (total_jobs + count / 2) / count),
        }
    }
}

/// The `limit` newest postings, newest first. Postings without a creation
/// time sort last, in their original order.
pub fn recent_jobs(mut jobs: Vec<JobPosting>, limit: usize) -> Vec<JobPosting> {
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    jobs.truncate(limit);
    jobs
}
