//! Line-oriented front-end
//!
//! Reads one command per line, applies it through the view models and
//! prints the resulting notification and page.

use std::str::FromStr;

use freelo_core::{AuthSession, LinkField, Route, SignUpRequest};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;
use tracing::debug;

use crate::state::AppState;
use crate::viewmodel::{self, Notification, Response};

const HELP: &str = "\
commands:
  go <path>                      open a page, e.g. go /add-event
  set <field> <value>            fill an add-event field (empty value clears)
  toggle has|attendee <value>    flip a checkbox
  toggle carticket
  submit                         continue to publishing
  tier free|featured|extraLinks  pick a publishing tier
  link add | link remove <n> | link set <n> title|url <value>
  confirm                        publish the event
  back                           return to the add-event form
  lang [en|he]                   switch language
  login <email> <password>
  signup name=<n> email=<e> password=<p> confirm=<p> terms age18
  events [category]              list upcoming events, optionally by category
  logout | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Go(Route),
    Set { field: String, value: String },
    Toggle { group: String, value: Option<String> },
    Submit,
    Tier(String),
    LinkAdd,
    LinkRemove(usize),
    LinkSet { index: usize, field: LinkField, value: String },
    Confirm,
    Back,
    Lang(Option<String>),
    Login { email: String, password: String },
    Signup(SignUpFields),
    Logout,
    Events(Option<String>),
    Help,
    Quit,
}

/// Sign-up form as typed on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
    pub age18: bool,
}

impl From<SignUpFields> for SignUpRequest {
    fn from(fields: SignUpFields) -> Self {
        SignUpRequest {
            name: fields.name,
            email: fields.email,
            password: fields.password,
            confirm_password: fields.confirm_password,
            agree_terms: fields.agree_terms,
            age18: fields.age18,
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "go" if !rest.is_empty() => Command::Go(Route::parse(rest)),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("usage: set <field> <value>".into());
                }
                Command::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            "toggle" if !rest.is_empty() => {
                let mut parts = rest.split_whitespace();
                Command::Toggle {
                    group: parts.next().unwrap_or_default().to_string(),
                    value: parts.next().map(str::to_string),
                }
            }
            "submit" => Command::Submit,
            "tier" if !rest.is_empty() => Command::Tier(rest.to_string()),
            "link" => parse_link(rest)?,
            "confirm" | "publish" => Command::Confirm,
            "back" => Command::Back,
            "lang" => Command::Lang((!rest.is_empty()).then(|| rest.to_string())),
            "login" => {
                let mut parts = rest.split_whitespace();
                Command::Login {
                    email: parts.next().unwrap_or_default().to_string(),
                    password: parts.next().unwrap_or_default().to_string(),
                }
            }
            "signup" => Command::Signup(parse_signup(rest)?),
            "logout" => Command::Logout,
            "events" => Command::Events((!rest.is_empty()).then(|| rest.to_string())),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(format!("unknown command '{}'", line)),
        };
        Ok(command)
    }
}

fn parse_link(rest: &str) -> Result<Command, String> {
    let mut parts = rest.splitn(4, char::is_whitespace);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some("add"), None, _, _) => Ok(Command::LinkAdd),
        (Some("remove"), Some(n), None, _) => Ok(Command::LinkRemove(parse_index(n)?)),
        (Some("set"), Some(n), Some(field), value) => {
            let field = match field {
                "title" => LinkField::Title,
                "url" => LinkField::Url,
                other => return Err(format!("unknown link field '{}'", other)),
            };
            Ok(Command::LinkSet {
                index: parse_index(n)?,
                field,
                value: value.unwrap_or_default().trim().to_string(),
            })
        }
        _ => Err("usage: link add | link remove <n> | link set <n> title|url <value>".into()),
    }
}

/// One-based on the command line, zero-based in the selector
fn parse_index(n: &str) -> Result<usize, String> {
    n.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| format!("invalid link number '{}'", n))
}

fn parse_signup(rest: &str) -> Result<SignUpFields, String> {
    let mut fields = SignUpFields::default();
    for token in rest.split_whitespace() {
        match token.split_once('=') {
            Some(("name", v)) => fields.name = v.to_string(),
            Some(("email", v)) => fields.email = v.to_string(),
            Some(("password", v)) => fields.password = v.to_string(),
            Some(("confirm", v)) => fields.confirm_password = v.to_string(),
            None if token == "terms" => fields.agree_terms = true,
            None if token == "age18" => fields.age18 = true,
            _ => return Err(format!("unknown sign-up field '{}'", token)),
        }
    }
    Ok(fields)
}

pub struct Shell {
    state: AppState,
    route: Route,
    category: Option<String>,
    session: watch::Receiver<Option<AuthSession>>,
}

impl Shell {
    pub fn new(state: AppState) -> Self {
        let session = state.auth.subscribe();
        Self {
            state,
            route: Route::Home,
            category: None,
            session,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one command and return what to show the user
    pub async fn execute(&mut self, command: Command) -> Option<Notification> {
        debug!(route = %self.route, "Executing command");
        let state = &mut self.state;
        let response = match command {
            Command::Go(route) => {
                self.category = None;
                Self::navigate(state, route)
            }
            Command::Events(category) => {
                self.category = category;
                Self::navigate(state, Route::Events)
            }
            Command::Set { field, value } if self.route == Route::AddEvent => {
                viewmodel::wizard::set_field(state, &field, &value)
            }
            Command::Toggle { group, value } if self.route == Route::AddEvent => {
                viewmodel::wizard::toggle(state, &group, value.as_deref())
            }
            Command::Submit if self.route == Route::AddEvent => viewmodel::wizard::submit(state),
            Command::Tier(tier) if self.route == Route::PublishOptions => {
                viewmodel::wizard::select_tier(state, &tier)
            }
            Command::LinkAdd if self.route == Route::PublishOptions => {
                viewmodel::wizard::add_link(state)
            }
            Command::LinkRemove(index) if self.route == Route::PublishOptions => {
                viewmodel::wizard::remove_link(state, index)
            }
            Command::LinkSet {
                index,
                field,
                value,
            } if self.route == Route::PublishOptions => {
                viewmodel::wizard::set_link(state, index, field, &value)
            }
            Command::Confirm if self.route == Route::PublishOptions => {
                viewmodel::wizard::confirm(state).await
            }
            Command::Back if self.route == Route::PublishOptions => viewmodel::wizard::back(state),
            Command::Lang(Some(code)) => viewmodel::language::set_code(state, &code),
            Command::Lang(None) => viewmodel::language::toggle(state),
            Command::Login { email, password } => {
                viewmodel::auth::login(state, &email, &password)
            }
            Command::Signup(fields) => viewmodel::auth::signup(state, &fields.into()),
            Command::Logout => viewmodel::auth::logout(state),
            Command::Help | Command::Quit => Response::none(),
            _ => Response::notify(Notification::error(state.locale(), "common.notAvailable")),
        };

        if let Some(route) = response.route {
            self.route = route;
        }
        response.notification
    }

    /// Route guard plus wizard page loading
    fn navigate(state: &mut AppState, route: Route) -> Response {
        if route.requires_session() && !state.auth.is_signed_in() {
            return Response::notify(Notification::error(state.locale(), "auth.required"))
                .and_goto(Route::Auth);
        }
        match state.wizard_mut().navigate(&route) {
            Ok(route) => Response::goto(route),
            Err(e) => {
                Response::notify(Notification::error(state.locale(), "common.error").with_detail(e))
            }
        }
    }

    /// The current page as text
    pub fn render(&self) -> String {
        let locale = self.state.locale();
        let signed_in = self.session.borrow().clone();

        let mut lines = vec![format!(
            "{} | {} {} {} | {} [{}/{}] | {}",
            locale.t("app.name"),
            locale.t("nav.home"),
            locale.t("nav.events"),
            locale.t("nav.addEvent"),
            match &signed_in {
                Some(session) => session.display_name.as_str(),
                None => locale.t("nav.login"),
            },
            locale.locale,
            locale.direction.as_str(),
            self.route
        )];

        if let Some(body) = viewmodel::events::render(
            locale,
            &self.route,
            signed_in.is_some(),
            self.category.as_deref(),
        ) {
            lines.extend(body);
        } else {
            match &self.route {
                Route::AddEvent | Route::PublishOptions => {
                    lines.extend(viewmodel::wizard::render(&self.state))
                }
                Route::Auth => {
                    lines.push(format!("== {} ==", locale.t("auth.title")));
                    lines.push(locale.t("auth.description").to_string());
                }
                Route::Profile | Route::AccountSettings => {
                    if let Some(session) = &signed_in {
                        lines.push(format!("{} <{}>", session.display_name, session.email));
                    }
                }
                Route::Membership => {
                    lines.push(format!("== {} ==", locale.t("membership.title")));
                    lines.push(locale.t("membership.description").to_string());
                }
                Route::NotFound(_) => lines.push(locale.t("notFound.title").to_string()),
                other => lines.push(other.path()),
            }
        }
        lines.join("\n")
    }

    /// Read commands until end of input or `quit`
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(format!("{}\n> ", self.render()).as_bytes()).await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                output.write_all(b"> ").await?;
                output.flush().await?;
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    let note = Notification::error(self.state.locale(), "common.unknownCommand")
                        .with_detail(e);
                    output.write_all(format!("{}\n> ", note).as_bytes()).await?;
                    output.flush().await?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => output.write_all(format!("{}\n", HELP).as_bytes()).await?,
                Command::Confirm if self.route == Route::PublishOptions => {
                    let note = Notification::info(self.state.locale(), "publishOptions.publishing");
                    output.write_all(format!("{}\n", note).as_bytes()).await?;
                    output.flush().await?;
                }
                _ => {}
            }

            if let Some(note) = self.execute(command).await {
                output.write_all(format!("{}\n", note).as_bytes()).await?;
            }
            output.write_all(format!("{}\n> ", self.render()).as_bytes()).await?;
            output.flush().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelo_core::{AppConfig, PublishTier};

    fn shell() -> Shell {
        let mut config = AppConfig::default();
        config.publish.delay_ms = 0;
        Shell::new(AppState::in_memory(config).unwrap())
    }

    async fn run(shell: &mut Shell, commands: &[&str]) -> Vec<Option<Notification>> {
        let mut notes = Vec::new();
        for line in commands {
            notes.push(shell.execute(line.parse().unwrap()).await);
        }
        notes
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("go /add-event".parse(), Ok(Command::Go(Route::AddEvent)));
        assert_eq!(
            "set description A long night out".parse(),
            Ok(Command::Set {
                field: "description".into(),
                value: "A long night out".into()
            })
        );
        assert_eq!(
            "link set 2 url https://x.example".parse(),
            Ok(Command::LinkSet {
                index: 1,
                field: LinkField::Url,
                value: "https://x.example".into()
            })
        );
        assert!("link remove 0".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());

        let Ok(Command::Signup(fields)) =
            "signup name=Dana email=d@x.co password=p confirm=p terms".parse::<Command>()
        else {
            panic!("expected signup");
        };
        assert!(fields.agree_terms);
        assert!(!fields.age18);
    }

    #[tokio::test]
    async fn test_author_and_publish_featured() {
        let mut shell = shell();
        run(
            &mut shell,
            &[
                "go /add-event",
                "set name Test Event",
                "set date 2024-01-01",
                "set start 19:00",
                "set end 22:00",
                "set description desc",
                "submit",
            ],
        )
        .await;
        assert_eq!(shell.route(), &Route::PublishOptions);

        run(&mut shell, &["tier featured"]).await;
        let selector = shell.state().wizard().selector().unwrap();
        assert_eq!(selector.tier(), PublishTier::Featured);

        let notes = run(&mut shell, &["confirm"]).await;
        assert!(!notes[0].as_ref().unwrap().is_error());
        assert_eq!(shell.route(), &Route::Events);

        run(&mut shell, &["go /publish-options"]).await;
        assert_eq!(shell.route(), &Route::AddEvent);
    }

    #[tokio::test]
    async fn test_commands_outside_their_page() {
        let mut shell = shell();
        let notes = run(&mut shell, &["set name x", "tier free", "confirm"]).await;
        assert!(notes.iter().all(|n| n.as_ref().unwrap().is_error()));
        assert_eq!(shell.route(), &Route::Home);
    }

    #[tokio::test]
    async fn test_profile_requires_session() {
        let mut shell = shell();
        run(&mut shell, &["go /profile"]).await;
        assert_eq!(shell.route(), &Route::Auth);

        run(
            &mut shell,
            &["signup name=Dana email=dana@example.com password=secret1 confirm=secret1 terms age18"],
        )
        .await;
        assert_eq!(shell.route(), &Route::Home);

        run(&mut shell, &["go /profile"]).await;
        assert_eq!(shell.route(), &Route::Profile);
        assert!(shell.render().contains("dana@example.com"));
    }

    #[tokio::test]
    async fn test_language_toggle_renders_rtl() {
        let mut shell = shell();
        run(&mut shell, &["lang"]).await;
        assert!(shell.render().contains("[he/rtl]"));
    }

    #[tokio::test]
    async fn test_run_reads_until_quit() {
        let mut shell = shell();
        let input: &[u8] = b"go /events\nquit\ngo /add-event\n";
        let mut output = Vec::new();
        shell.run(input, &mut output).await.unwrap();

        assert_eq!(shell.route(), &Route::Events);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Upcoming Events"));
    }

    #[tokio::test]
    async fn test_navbar_follows_session_changes() {
        let mut shell = shell();
        assert!(shell.render().lines().next().unwrap().contains("Login"));

        run(
            &mut shell,
            &["signup name=Dana email=dana@example.com password=secret1 confirm=secret1 terms age18"],
        )
        .await;
        assert!(shell.render().lines().next().unwrap().contains("Dana"));

        run(&mut shell, &["logout"]).await;
        let navbar = shell.render();
        assert!(!navbar.lines().next().unwrap().contains("Dana"));
    }

    #[tokio::test]
    async fn test_events_by_category() {
        let mut shell = shell();
        run(&mut shell, &["events bdsm"]).await;
        assert_eq!(shell.route(), &Route::Events);
        let page = shell.render();
        assert!(page.contains("Rope Bondage for Beginners"));
        assert!(page.contains("Kink & Consent Workshop"));
        assert!(!page.contains("Polyamory Meetup & Workshop"));
        assert!(!page.contains("Fetish Night"));

        run(&mut shell, &["go /events"]).await;
        assert!(shell.render().contains("Polyamory Meetup & Workshop"));
    }
}
