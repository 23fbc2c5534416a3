mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use harpal_client::models::category::{Category, CategoryDraft};
use harpal_client::models::envelope::Listing;
use harpal_client::models::job::{JobDraft, JobPosting};
use harpal_client::models::user::{User, UserDraft};
use harpal_client::models::website_settings::WebsiteSettings;
use harpal_client::resources::Resources;
use harpal_client::{ApiClient, ApiError, Session};
use harpal_core::error::ValidationError;
use harpal_core::types::EntityId;
use harpal_dashboard::list::{Confirmation, ListController, StalePolicy};
use harpal_dashboard::screens::{CrudScreen, SingletonScreen};
use harpal_dashboard::shell::{Screen, Shell, Tab};
use harpal_dashboard::DashboardError;

use common::{category, job, log, settings, user, FakeCollection, FakeSingleton, Stored};

type Categories = FakeCollection<Category, CategoryDraft>;
type Jobs = FakeCollection<JobPosting, JobDraft>;
type Users = FakeCollection<User, UserDraft>;

// ---------------------------------------------------------------------------
// Listing and search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_search_is_case_insensitive_substring() {
    let resource = Categories::new(vec![category(1, "Technology", 145)]);
    let (_, notifier) = log();
    let mut list = ListController::new(resource, notifier);
    list.refresh().await.unwrap();

    for query in ["tech", "TECH", "Tech", "nolog"] {
        list.set_search_query(query);
        let names: Vec<_> = list
            .filtered_items()
            .map(|c| c.name.clone().unwrap_or_default())
            .collect();
        assert_eq!(names, ["Technology"], "query {query:?}");
    }

    list.set_search_query("design");
    assert_eq!(list.filtered_items().count(), 0);
}

#[tokio::test]
async fn empty_query_keeps_original_order() {
    let resource = Jobs::new(vec![
        job(3, "Product Manager", "StartupXYZ"),
        job(1, "Senior React Developer", "TechCorp"),
        job(2, "UX Designer", "DesignStudio"),
    ]);
    let (_, notifier) = log();
    let mut list = ListController::new(resource, notifier);
    list.refresh().await.unwrap();

    let ids: Vec<_> = list.filtered_items().map(|j| j.id.to_string()).collect();
    assert_eq!(ids, ["3", "1", "2"]);

    list.set_search_query("corp");
    let ids: Vec<_> = list.filtered_items().map(|j| j.id.to_string()).collect();
    assert_eq!(ids, ["1"]);
}

#[tokio::test]
async fn user_search_covers_email_and_names() {
    let resource = Users::new(vec![
        user(1, "John", "Doe", "john.doe@example.com"),
        user(2, "Jane", "Smith", "jane.smith@example.com"),
    ]);
    let (_, notifier) = log();
    let mut list = ListController::new(resource, notifier);
    list.refresh().await.unwrap();

    list.set_search_query("SMITH@");
    assert_eq!(list.filtered_items().count(), 1);
    list.set_search_query("example.com");
    assert_eq!(list.filtered_items().count(), 2);
}

#[tokio::test]
async fn enveloped_listing_stores_inner_array() {
    let resource = Categories::new(vec![category(1, "Technology", 145), category(2, "Marketing", 67)]);
    resource.set_enveloped(true);
    let (_, notifier) = log();
    let mut list = ListController::new(resource, notifier);

    list.refresh().await.unwrap();

    assert_eq!(list.items().len(), 2);
    assert_eq!(list.items()[1].job_count, Some(67));
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn job_with_empty_title_is_rejected_locally() {
    let resource = Jobs::new(Vec::new());
    let (log, notifier) = log();
    let mut screen = CrudScreen::new(Arc::clone(&resource), notifier, StalePolicy::default());
    screen.mount().await.unwrap();

    screen.begin_create().unwrap();
    screen.set_field("description", "Build things").unwrap();
    screen.set_field("location", "Remote").unwrap();
    let err = screen.submit().await.unwrap_err();

    assert_matches!(
        err,
        DashboardError::Validation(ValidationError::RequiredFields { ref fields }) if fields == &["title"]
    );
    assert_eq!(resource.write_calls(), 0);
    assert_eq!(resource.get_all_calls(), 1);
    assert!(screen.form().is_some());
    assert_eq!(log.errors().len(), 1);
}

#[tokio::test]
async fn successful_save_refreshes_once_and_closes_once() {
    let resource = Categories::new(vec![category(1, "Technology", 145)]);
    let (log, notifier) = log();
    let mut screen = CrudScreen::new(Arc::clone(&resource), notifier, StalePolicy::default());
    screen.mount().await.unwrap();

    screen.begin_edit(&EntityId::from("1")).unwrap();
    assert_eq!(screen.form().unwrap().fields().name, "Technology");
    screen.set_field("name", "Tech & IT").unwrap();
    screen.submit().await.unwrap();

    assert_eq!(resource.get_all_calls(), 2);
    assert_eq!(resource.updated()[0].1.name, "Tech & IT");
    assert!(screen.form().is_none());
    assert!(!screen.list().is_form_open());
    assert_eq!(log.entries().last().unwrap().message, "Category updated successfully");
}

#[tokio::test]
async fn failed_save_keeps_form_open_with_values() {
    let resource = Categories::new(Vec::new());
    let (log, notifier) = log();
    let mut screen = CrudScreen::new(Arc::clone(&resource), notifier, StalePolicy::default());
    screen.mount().await.unwrap();
    resource.set_fail_writes(true);

    screen.begin_create().unwrap();
    screen.set_field("name", "Design").unwrap();
    screen.set_field("iconUrl", "design-icon.svg").unwrap();
    let err = screen.submit().await.unwrap_err();

    assert_matches!(err, DashboardError::Api(ApiError::Http { status: 500 }));
    let form = screen.form().expect("form stays open");
    assert_eq!(form.fields().name, "Design");
    assert_eq!(form.fields().icon_url, "design-icon.svg");
    assert!(screen.list().is_form_open());
    assert_eq!(resource.get_all_calls(), 1);
    assert_eq!(log.errors()[0].message, "Failed to save category");
}

#[tokio::test]
async fn cancel_discards_edits_without_writing() {
    let resource = Categories::new(vec![category(1, "Technology", 145)]);
    let (_, notifier) = log();
    let mut screen = CrudScreen::new(Arc::clone(&resource), notifier, StalePolicy::default());
    screen.mount().await.unwrap();

    screen.begin_edit(&EntityId::from("1")).unwrap();
    screen.set_field("name", "Changed").unwrap();
    screen.cancel();

    assert!(screen.form().is_none());
    assert_eq!(resource.write_calls(), 0);
    assert_eq!(screen.list().items()[0].name.as_deref(), Some("Technology"));
}

#[tokio::test]
async fn editing_an_unloaded_id_fails() {
    let resource = Categories::new(Vec::new());
    let (_, notifier) = log();
    let mut screen = CrudScreen::new(resource, notifier, StalePolicy::default());

    assert_matches!(
        screen.begin_edit(&EntityId::from("42")),
        Err(DashboardError::NotLoaded { entity: "Category", .. })
    );
    assert_matches!(screen.submit().await, Err(DashboardError::NoForm));
}

// ---------------------------------------------------------------------------
// Removal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_without_confirmation_never_deletes() {
    let resource = Users::new(vec![user(1, "John", "Doe", "john.doe@example.com")]);
    let (_, notifier) = log();
    let mut list = ListController::new(Arc::clone(&resource), notifier);
    list.refresh().await.unwrap();

    let result = list.remove(&EntityId::from("1"), Confirmation::Declined).await;

    assert_matches!(result, Err(DashboardError::NotConfirmed(_)));
    assert!(resource.deleted().is_empty());
    assert_eq!(list.items().len(), 1);
}

#[tokio::test]
async fn delete_then_failed_refresh_keeps_stale_users() {
    let resource = Users::new(vec![
        user(1, "John", "Doe", "john.doe@example.com"),
        user(2, "Jane", "Smith", "jane.smith@example.com"),
    ]);
    let (log, notifier) = log();
    let mut list = ListController::new(Arc::clone(&resource), notifier);
    list.refresh().await.unwrap();
    resource.set_fail_reads(true);

    list.remove(&EntityId::from("1"), Confirmation::Confirmed)
        .await
        .unwrap();

    assert_eq!(resource.deleted(), vec![EntityId::from("1")]);
    assert_eq!(list.items().len(), 2);
    assert!(!list.is_loading());
    let messages: Vec<_> = log.entries().into_iter().map(|n| n.message).collect();
    assert_eq!(messages, ["User deleted successfully", "Failed to fetch users"]);
}

// ---------------------------------------------------------------------------
// Stale responses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn policies_differ_on_out_of_order_completions() {
    let (_, notifier) = log();
    let resource = Jobs::new(Vec::new());

    for (policy, expected) in [
        (StalePolicy::LastWriteWins, "Old"),
        (StalePolicy::DiscardStale, "New"),
    ] {
        let mut list =
            ListController::new(Arc::clone(&resource), notifier.clone()).with_policy(policy);
        let first = list.begin_refresh();
        let second = list.begin_refresh();

        list.apply_refresh(second, Ok(Listing::Bare(vec![job(2, "New", "B")])))
            .unwrap();
        list.apply_refresh(first, Ok(Listing::Bare(vec![job(1, "Old", "A")])))
            .unwrap();

        assert_eq!(list.items()[0].title.as_deref(), Some(expected), "{policy:?}");
    }
}

// ---------------------------------------------------------------------------
// Settings screens
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stored_settings_hydrate_and_save_in_place() {
    let resource = FakeSingleton::new(Stored::Record(settings("HarPalJob")));
    let (log, notifier) = log();
    let mut screen = SingletonScreen::new(Arc::clone(&resource), (), notifier);

    screen.load().await.unwrap();
    assert!(screen.is_loaded());
    assert_eq!(screen.form().fields().site_title, "HarPalJob");

    screen.set_field("siteTitle", "HarPalJob Careers").unwrap();
    screen.submit().await.unwrap();

    let updated = resource.updated();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].site_title, "HarPalJob Careers");
    assert_eq!(updated[0].site_description, "Find your next job");
    assert!(resource.created().is_empty());
    assert_eq!(log.entries().last().unwrap().message, "Website settings updated successfully");
}

#[tokio::test]
async fn missing_settings_load_as_defaults() {
    for answer in [Stored::Null, Stored::Status(404)] {
        let resource = FakeSingleton::new(answer.clone());
        let (log, notifier) = log();
        let mut screen = SingletonScreen::new(Arc::clone(&resource), (), notifier);

        screen.load().await.unwrap();

        assert!(screen.is_loaded(), "{answer:?}");
        assert_eq!(screen.form().fields(), &WebsiteSettings::default());
        assert!(log.entries().is_empty());

        screen.set_field("siteTitle", "HarPalJob").unwrap();
        screen.submit().await.unwrap();
        assert_eq!(resource.updated()[0].site_title, "HarPalJob");
        assert!(resource.created().is_empty());
    }
}

#[tokio::test]
async fn failed_load_keeps_form_and_reports() {
    let resource = FakeSingleton::new(Stored::Record(settings("HarPalJob")));
    let (log, notifier) = log();
    let mut screen = SingletonScreen::new(Arc::clone(&resource), (), notifier);
    screen.load().await.unwrap();
    screen.set_field("siteKeywords", "jobs, careers").unwrap();

    resource.answer_with(Stored::Status(500));
    let err = screen.load().await.unwrap_err();

    assert_matches!(err, DashboardError::Api(ApiError::Http { status: 500 }));
    assert_eq!(screen.form().fields().site_title, "HarPalJob");
    assert_eq!(screen.form().fields().site_keywords, "jobs, careers");
    assert_eq!(log.errors()[0].message, "Failed to fetch website settings");
}

#[tokio::test]
async fn settings_are_never_written_before_a_successful_load() {
    let resource = FakeSingleton::new(Stored::Status(500));
    let (_, notifier) = log();
    let mut screen = SingletonScreen::new(Arc::clone(&resource), (), notifier);

    assert!(screen.load().await.is_err());
    assert!(!screen.is_loaded());
    assert_matches!(screen.submit().await, Err(DashboardError::Unavailable(_)));
    assert!(resource.updated().is_empty());

    resource.answer_with(Stored::Record(settings("HarPalJob")));
    screen.select(()).await.unwrap();
    screen.submit().await.unwrap();
    assert_eq!(resource.loads(), 2);
    assert_eq!(resource.updated()[0].site_title, "HarPalJob");
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

fn unreachable_resources() -> Resources {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap()
        .port();
    let client = ApiClient::new(format!("http://127.0.0.1:{port}/api"), Session::anonymous());
    Resources::new(&client)
}

#[tokio::test]
async fn shell_mounts_one_screen_at_a_time() {
    let (log, notifier) = log();
    let mut shell = Shell::open(unreachable_resources(), notifier, StalePolicy::default()).await;
    assert_eq!(shell.active_tab(), Tab::Overview);
    assert_eq!(log.drain().len(), 1);

    assert!(shell.switch_to(Tab::Categories).await);
    assert_matches!(shell.screen(), Screen::Categories(_));
    assert_eq!(format!("{:?}", shell.screen()), "Screen(Categories)");
    assert_eq!(log.drain()[0].message, "Failed to fetch categories");

    assert!(!shell.switch_to(Tab::Categories).await);
    assert!(log.entries().is_empty());

    assert!(shell.switch_to(Tab::Seo).await);
    assert_eq!(shell.active_tab(), Tab::Seo);
    assert_eq!(log.drain()[0].message, "Failed to fetch seo settings");
}

#[tokio::test]
async fn shell_menu_marks_active_tab() {
    let (_, notifier) = log();
    let mut shell = Shell::open(unreachable_resources(), notifier, StalePolicy::default()).await;
    shell.switch_to(Tab::Users).await;

    let active: Vec<_> = shell
        .menu()
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.label)
        .collect();
    assert_eq!(active, ["User Management"]);

    assert!(shell.toggle_sidebar());
    assert!(!shell.toggle_sidebar());
}

#[tokio::test]
async fn list_summaries_cover_every_loaded_entry() {
    let users = Users::new(vec![
        user(1, "John", "Doe", "john.doe@example.com"),
        user(2, "Jane", "Smith", "jane.smith@example.com"),
    ]);
    let (_, notifier) = log();
    let mut screen = CrudScreen::new(users, notifier.clone(), StalePolicy::default());
    screen.mount().await.unwrap();
    screen.set_search_query("jane");

    let summary = screen.user_summary();
    assert_eq!((summary.total, summary.active, summary.admins), (2, 2, 0));

    let categories = Categories::new(vec![category(1, "Technology", 145), category(2, "Marketing", 67)]);
    let mut screen = CrudScreen::new(categories, notifier, StalePolicy::default());
    screen.mount().await.unwrap();
    assert_eq!(screen.category_summary().total_jobs, 212);
    assert_eq!(screen.category_summary().average_jobs, Some(106));
}

#[tokio::test]
async fn users_cannot_be_created_from_the_dashboard() {
    let (_, notifier) = log();
    let mut shell = Shell::open(unreachable_resources(), notifier, StalePolicy::default()).await;
    shell.switch_to(Tab::Users).await;

    let Screen::Users(screen) = shell.screen_mut() else {
        panic!("users screen not mounted");
    };
    assert_matches!(screen.begin_create(), Err(DashboardError::Unavailable(_)));
    assert!(screen.form().is_none());
}
