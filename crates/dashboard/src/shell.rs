//! Top-level navigation: fixed tabs, one mounted screen at a time.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use harpal_client::models::page_seo::PageName;
use harpal_client::resources::Resources;

use crate::list::StalePolicy;
use crate::notify::Notifier;
use crate::screens::{
    CategoriesScreen, JobsScreen, OverviewScreen, PageSeoScreen, UsersScreen, WebsiteSettingsScreen,
};

/// Title shown in the sidebar header.
pub const APP_TITLE: &str = "HarPalJob Admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Jobs,
    Users,
    Categories,
    Website,
    Seo,
}

impl Tab {
    /// Sidebar order.
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Jobs,
        Tab::Users,
        Tab::Categories,
        Tab::Website,
        Tab::Seo,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Jobs => "jobs",
            Tab::Users => "users",
            Tab::Categories => "categories",
            Tab::Website => "website",
            Tab::Seo => "seo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Jobs => "Job Management",
            Tab::Users => "User Management",
            Tab::Categories => "Categories",
            Tab::Website => "Website Settings",
            Tab::Seo => "SEO Management",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}

/// The mounted screen and its state.
pub enum Screen {
    Overview(OverviewScreen),
    Jobs(JobsScreen),
    Users(UsersScreen),
    Categories(CategoriesScreen),
    Website(WebsiteSettingsScreen),
    Seo(PageSeoScreen),
}

impl Screen {
    pub fn tab(&self) -> Tab {
        match self {
            Screen::Overview(_) => Tab::Overview,
            Screen::Jobs(_) => Tab::Jobs,
            Screen::Users(_) => Tab::Users,
            Screen::Categories(_) => Tab::Categories,
            Screen::Website(_) => Tab::Website,
            Screen::Seo(_) => Tab::Seo,
        }
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Screen").field(&self.tab()).finish()
    }
}

/// One entry of the rendered sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

pub struct Shell {
    resources: Resources,
    notifier: Arc<dyn Notifier>,
    policy: StalePolicy,
    screen: Screen,
    sidebar_collapsed: bool,
}

impl Shell {
    /// Build the shell and mount the overview.
    pub async fn open(resources: Resources, notifier: Arc<dyn Notifier>, policy: StalePolicy) -> Self {
        let mut screen = Screen::Overview(OverviewScreen::new(
            resources.jobs.clone(),
            resources.users.clone(),
            Arc::clone(&notifier),
        ));
        mount(&mut screen).await;

        Self {
            resources,
            notifier,
            policy,
            screen,
            sidebar_collapsed: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.screen.tab()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Drop the current screen and mount `tab`, which performs its own
    /// initial load. Selecting the active tab keeps the current screen.
    ///
    /// Returns whether a new screen was mounted.
    pub async fn switch_to(&mut self, tab: Tab) -> bool {
        if tab == self.active_tab() {
            return false;
        }
        tracing::info!(from = %self.active_tab(), to = %tab, "Switching tab");

        let mut screen = self.build(tab);
        mount(&mut screen).await;
        self.screen = screen;
        true
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    pub fn menu(&self) -> Vec<MenuItem> {
        let active = self.active_tab();
        Tab::ALL
            .into_iter()
            .map(|tab| MenuItem {
                tab,
                label: tab.label(),
                active: tab == active,
            })
            .collect()
    }

    fn build(&self, tab: Tab) -> Screen {
        let notifier = Arc::clone(&self.notifier);
        let r = &self.resources;
        match tab {
            Tab::Overview => Screen::Overview(OverviewScreen::new(r.jobs.clone(), r.users.clone(), notifier)),
            Tab::Jobs => Screen::Jobs(JobsScreen::new(Arc::new(r.jobs.clone()), notifier, self.policy)),
            Tab::Users => Screen::Users(UsersScreen::new(Arc::new(r.users.clone()), notifier, self.policy)),
            Tab::Categories => Screen::Categories(CategoriesScreen::new(
                Arc::new(r.categories.clone()),
                notifier,
                self.policy,
            )),
            Tab::Website => Screen::Website(WebsiteSettingsScreen::new(
                Arc::new(r.website_settings.clone()),
                (),
                notifier,
            )),
            Tab::Seo => Screen::Seo(PageSeoScreen::new(
                Arc::new(r.page_seo.clone()),
                PageName::default(),
                notifier,
            )),
        }
    }
}

/// Initial load; failures are already logged and reported by the screen.
async fn mount(screen: &mut Screen) {
    let result = match screen {
        Screen::Overview(s) => {
            s.mount().await;
            return;
        }
        Screen::Jobs(s) => s.mount().await.map(drop),
        Screen::Users(s) => s.mount().await.map(drop),
        Screen::Categories(s) => s.mount().await.map(drop),
        Screen::Website(s) => s.load().await,
        Screen::Seo(s) => s.load().await,
    };
    if let Err(e) = result {
        tracing::debug!(tab = %screen.tab(), error = %e, "Initial load failed");
    }
}
