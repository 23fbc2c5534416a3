//! Line-oriented front end over a [`Shell`].
//!
//! Each input line is one [`Command`]. Notifications raised while a command
//! runs are printed after it as `[ok]` / `[error]` lines.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use harpal_client::models::auth::LoginRequest;
use harpal_client::resources::{AuthApi, Resources};
use harpal_client::{ApiClient, ApiResult, Session};
use harpal_core::types::EntityId;
use harpal_core::validation;
use harpal_dashboard::form::{FormController, FormMode};
use harpal_dashboard::list::Confirmation;
use harpal_dashboard::notify::{Notification, NotificationLog, Notifier};
use harpal_dashboard::resource::FormDraft;
use harpal_dashboard::shell::{Screen, Shell};
use harpal_dashboard::{DashboardError, DashboardResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::commands::{self, Command, HELP};
use crate::config::AdminConfig;
use crate::render;

/// Run `$body` with `$s` bound to the mounted list screen, or `$fallback`
/// when the active tab has no list.
macro_rules! on_list_screen {
    ($screen:expr, $s:ident => $body:expr, else $fallback:expr) => {
        match $screen {
            Screen::Jobs($s) => $body,
            Screen::Users($s) => $body,
            Screen::Categories($s) => $body,
            _ => $fallback,
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W: Write> {
    shell: Shell,
    session: Session,
    auth: AuthApi,
    notifications: NotificationLog,
    out: W,
}

impl<W: Write> Console<W> {
    /// Build the gateway from `config` and open the shell on the overview.
    pub async fn connect(config: &AdminConfig, out: W) -> ApiResult<Self> {
        let session = match &config.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::anonymous(),
        };
        let client = ApiClient::from_config(&config.gateway(), session.clone())?;
        let resources = Resources::new(&client);
        let notifications = NotificationLog::new();
        let shell = Shell::open(
            resources,
            Arc::new(notifications.clone()),
            config.stale_policy,
        )
        .await;
        Ok(Self::new(shell, session, notifications, out))
    }

    /// Wrap an open shell. `notifications` must be the log the shell reports to.
    pub fn new(shell: Shell, session: Session, notifications: NotificationLog, out: W) -> Self {
        let auth = shell.resources().auth.clone();
        Self {
            shell,
            session,
            auth,
            notifications,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands from `input` until `quit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        self.print_notifications()?;
        self.print_screen()?;

        loop {
            write!(self.out, "harpal:{}> ", self.shell.active_tab())?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(self.out)?;
                break;
            };
            let flow = match commands::parse(&line) {
                Ok(None) => Flow::Continue,
                Ok(Some(command)) => self.execute(command, &mut lines).await?,
                Err(e) => {
                    writeln!(self.out, "{e}")?;
                    Flow::Continue
                }
            };
            self.print_notifications()?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Run one command. `lines` is only read for confirmation prompts.
    pub async fn execute<R>(&mut self, command: Command, lines: &mut Lines<R>) -> io::Result<Flow>
    where
        R: AsyncBufRead + Unpin,
    {
        tracing::debug!(?command, tab = %self.shell.active_tab(), "Executing command");
        match command {
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Tabs => self.print_menu()?,
            Command::Sidebar => {
                self.shell.toggle_sidebar();
                self.print_menu()?;
            }
            Command::Tab(tab) => {
                self.shell.switch_to(tab).await;
                self.print_notifications()?;
                self.print_screen()?;
            }
            Command::List => self.print_screen()?,
            Command::Refresh => {
                let result = match self.shell.screen_mut() {
                    Screen::Overview(s) => {
                        s.mount().await;
                        Ok(())
                    }
                    Screen::Website(s) => s.load().await,
                    Screen::Seo(s) => s.load().await,
                    other => on_list_screen!(other, s => s.refresh().await.map(drop), else Ok(())),
                };
                self.report(result)?;
                self.print_screen()?;
            }
            Command::Search(query) => {
                let result = on_list_screen!(self.shell.screen_mut(), s => {
                    s.set_search_query(query);
                    Ok(())
                }, else Err(unavailable("Search")));
                self.report(result)?;
                self.print_screen()?;
            }
            Command::New => {
                let result = on_list_screen!(self.shell.screen_mut(), s => s.begin_create(),
                    else Err(unavailable("Creating entries")));
                if self.report(result)? {
                    self.print_form()?;
                }
            }
            Command::Edit(id) => {
                let result = on_list_screen!(self.shell.screen_mut(), s => s.begin_edit(&id),
                    else Err(unavailable("Editing entries")));
                if self.report(result)? {
                    self.print_form()?;
                }
            }
            Command::Set { field, value } => {
                let result = match self.shell.screen_mut() {
                    Screen::Website(s) => s.set_field(&field, &value),
                    Screen::Seo(s) => s.set_field(&field, &value),
                    other => on_list_screen!(other, s => s.set_field(&field, &value),
                        else Err(DashboardError::NoForm)),
                };
                self.report(result)?;
            }
            Command::Show => self.print_form()?,
            Command::Save => {
                let result = match self.shell.screen_mut() {
                    Screen::Website(s) => s.submit().await,
                    Screen::Seo(s) => s.submit().await,
                    other => on_list_screen!(other, s => s.submit().await, else Err(DashboardError::NoForm)),
                };
                if self.report(result)? {
                    self.print_notifications()?;
                    self.print_screen()?;
                }
            }
            Command::Cancel => {
                let result = match self.shell.screen_mut() {
                    Screen::Website(s) => s.load().await,
                    Screen::Seo(s) => s.load().await,
                    other => on_list_screen!(other, s => {
                        s.cancel();
                        Ok(())
                    }, else Err(DashboardError::NoForm)),
                };
                self.report(result)?;
            }
            Command::Delete(id) => {
                if !matches!(
                    self.shell.screen(),
                    Screen::Jobs(_) | Screen::Users(_) | Screen::Categories(_)
                ) {
                    self.report(Err(unavailable("Deleting entries")))?;
                    return Ok(Flow::Continue);
                }
                let confirmation = self.confirm(&id, lines).await?;
                let result = on_list_screen!(self.shell.screen_mut(), s => s.remove(&id, confirmation).await,
                    else Ok(()));
                if self.report(result)? {
                    self.print_notifications()?;
                    self.print_screen()?;
                }
            }
            Command::Page(page) => {
                let result = match self.shell.screen_mut() {
                    Screen::Seo(s) => s.select(page).await,
                    _ => Err(unavailable("Choosing a page")),
                };
                self.report(result)?;
                self.print_notifications()?;
                self.print_form()?;
            }
            Command::Login { email, password } => self.login(email, password).await,
            Command::Logout => {
                self.session.clear();
                tracing::info!("Signed out");
                self.notifications.notify(Notification::success("Signed out"));
            }
        }
        Ok(Flow::Continue)
    }

    async fn login(&mut self, email: String, password: String) {
        let request = LoginRequest { email, password };
        if let Err(e) = validation::check(&request) {
            self.notifications.notify(Notification::error(e.to_string()));
            return;
        }
        match self.auth.login(&request).await {
            Ok(response) => match response.token {
                Some(token) => {
                    self.session.set_token(token);
                    tracing::info!(email = %request.email, "Signed in");
                    self.notifications
                        .notify(Notification::success(format!("Signed in as {}", request.email)));
                }
                None => {
                    tracing::warn!(email = %request.email, "Login answered without a token");
                    self.notifications
                        .notify(Notification::error("Login did not return a token"));
                }
            },
            Err(e) => {
                tracing::error!(email = %request.email, error = %e, "Login failed");
                self.notifications.notify(Notification::error("Login failed"));
            }
        }
    }

    async fn confirm<R>(&mut self, id: &EntityId, lines: &mut Lines<R>) -> io::Result<Confirmation>
    where
        R: AsyncBufRead + Unpin,
    {
        write!(self.out, "Are you sure you want to delete {id}? [y/N] ")?;
        self.out.flush()?;
        let answer = lines.next_line().await?.unwrap_or_default();
        Ok(match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Confirmation::Confirmed,
            _ => Confirmation::Declined,
        })
    }

    /// Print errors the controllers did not already report. Returns whether
    /// the operation succeeded.
    fn report(&mut self, result: DashboardResult<()>) -> io::Result<bool> {
        match result {
            Ok(()) => Ok(true),
            Err(DashboardError::Validation(_) | DashboardError::Api(_)) => Ok(false),
            Err(DashboardError::NotConfirmed(_)) => {
                writeln!(self.out, "Deletion cancelled.")?;
                Ok(false)
            }
            Err(other) => {
                writeln!(self.out, "{}", render::notification(&Notification::error(other.to_string())))?;
                Ok(false)
            }
        }
    }

    fn print_notifications(&mut self) -> io::Result<()> {
        for notification in self.notifications.drain() {
            writeln!(self.out, "{}", render::notification(&notification))?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let menu = render::menu(&self.shell.menu(), self.shell.sidebar_collapsed());
        write!(self.out, "{menu}")
    }

    fn print_screen(&mut self) -> io::Result<()> {
        let tab = self.shell.active_tab();
        let body = match self.shell.screen() {
            Screen::Overview(s) => render::overview(s.stats()),
            Screen::Jobs(s) => list_view(s.list().search_query(), render::entities(s.list().filtered_items())),
            Screen::Users(s) => {
                let table = list_view(s.list().search_query(), render::entities(s.list().filtered_items()));
                format!("{}\n{table}", render::user_summary(&s.user_summary()))
            }
            Screen::Categories(s) => {
                let table = list_view(s.list().search_query(), render::entities(s.list().filtered_items()));
                format!("{}\n{table}", render::category_summary(&s.category_summary()))
            }
            Screen::Website(s) => form_view("Website Settings".to_string(), s.form()),
            Screen::Seo(s) => form_view(format!("SEO Settings: {}", s.key().label()), s.form()),
        };
        writeln!(self.out, "== {} ==", tab.label())?;
        write!(self.out, "{body}")
    }

    fn print_form(&mut self) -> io::Result<()> {
        let body = match self.shell.screen() {
            Screen::Website(s) => Some(form_view("Website Settings".to_string(), s.form())),
            Screen::Seo(s) => Some(form_view(format!("SEO Settings: {}", s.key().label()), s.form())),
            other => on_list_screen!(other, s => s.form().map(|form| {
                let title = match form.mode() {
                    FormMode::Create => "New entry".to_string(),
                    FormMode::Update(id) => format!("Editing {id}"),
                };
                form_view(title, form)
            }), else None),
        };
        match body {
            Some(body) => write!(self.out, "{body}"),
            None => writeln!(self.out, "No form is open."),
        }
    }
}

fn unavailable(action: &str) -> DashboardError {
    DashboardError::Unavailable(format!("{action} is not available on this tab"))
}

fn list_view(query: &str, table: String) -> String {
    if query.is_empty() {
        table
    } else {
        format!("search: {query}\n{table}")
    }
}

fn form_view<D, K>(title: String, form: &FormController<D, K>) -> String
where
    D: FormDraft,
    K: Clone + fmt::Debug,
{
    let fields = form.field_names().into_iter().map(|name| {
        let value = form.field(&name).unwrap_or_default();
        (name, value)
    });
    render::form(&title, fields)
}
