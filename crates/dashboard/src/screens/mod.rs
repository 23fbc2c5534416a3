//! One module per kind of dashboard screen.

pub mod crud;
pub mod overview;
pub mod singleton;

pub use crud::{CategoriesScreen, CrudScreen, JobsScreen, UsersScreen};
pub use overview::{CategorySummary, OverviewScreen, OverviewStats, UserSummary};
pub use singleton::{PageSeoScreen, SingletonScreen, WebsiteSettingsScreen};
