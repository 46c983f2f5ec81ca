//! # Site Navigation Example
//!
//! A header of dropdown menus loaded from TOML:
//! - hover a title to open its menu, move away to close it
//! - click a title to toggle it
//! - Tab / Shift+Tab walk the menus, Enter follows a link
//! - internal links change the page below, external links open a browser
//!
//! Run with: `cargo run --example site_nav -- [demos/nav.toml] [--log nav.log]`

use flyout::config::SiteNav;
use flyout::crossterm::event::{KeyCode, KeyModifiers};
use flyout::ratatui::layout::{Constraint, Layout};
use flyout::ratatui::style::{Color, Modifier, Style};
use flyout::ratatui::text::{Line, Span};
use flyout::ratatui::widgets::{Block, Borders, Paragraph};
use flyout::ratatui::Frame;
use flyout::widgets::dropdown_menu::Live;
use flyout::widgets::link::open_in_browser;
use flyout::widgets::nav_bar::{self, NavBar};
use flyout::{
    terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent,
};

const STATUS_LINES: usize = 4;

struct SiteNavApp {
    nav: NavBar,
    location: String,
    status: Vec<Line<'static>>,
}

enum Msg {
    Nav(nav_bar::Message),
    Opened(String, Option<String>),
    Quit,
}

impl SiteNavApp {
    fn push_status(&mut self, line: Line<'static>) {
        self.status.push(line);
        if self.status.len() > STATUS_LINES {
            self.status.remove(0);
        }
    }
}

impl Model for SiteNavApp {
    type Message = Msg;
    type Flags = SiteNav;

    fn init(site: SiteNav) -> (Self, Command<Msg>) {
        let app = SiteNavApp {
            nav: site.nav_bar(),
            location: site.start,
            status: vec![],
        };
        (app, Command::set_title("flyout"))
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Nav(nav_bar::Message::Navigate(to)) => {
                self.push_status(Line::raw(format!("navigated to {to}")));
                self.location = to.clone();
                self.nav
                    .update(nav_bar::Message::RouteChanged(to))
                    .map(Msg::Nav)
            }
            Msg::Nav(nav_bar::Message::OpenExternal(url)) => {
                self.push_status(Line::raw(format!("opening {url}")));
                open_in_browser(url.clone(), move |result| {
                    Msg::Opened(url, result.err().map(|err| err.to_string()))
                })
            }
            Msg::Nav(nav_bar::Message::Announce(announcement)) => {
                let style = match announcement.live {
                    Live::Assertive => Style::default().add_modifier(Modifier::BOLD),
                    Live::Polite => Style::default(),
                };
                self.push_status(Line::from(vec![
                    Span::styled("a11y: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(announcement.text, style),
                ]));
                Command::none()
            }
            Msg::Nav(nav_bar::Message::FocusExit(_)) => {
                self.push_status(Line::raw("focus left the menu bar"));
                Command::none()
            }
            Msg::Nav(msg) => self.nav.update(msg).map(Msg::Nav),
            Msg::Opened(url, Some(err)) => {
                self.push_status(Line::styled(
                    format!("could not open {url}: {err}"),
                    Style::default().fg(Color::Red),
                ));
                Command::none()
            }
            Msg::Opened(_, None) => Command::none(),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [header, page, status, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(STATUS_LINES as u16 + 2),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let body = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                format!("  You are on {}", self.location),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])
        .block(Block::default().borders(Borders::TOP));
        frame.render_widget(body, page);

        frame.render_widget(
            Paragraph::new(self.status.clone())
                .block(Block::default().borders(Borders::ALL).title(" events ")),
            status,
        );
        frame.render_widget(
            Line::styled(
                "hover/click titles · Tab/Shift+Tab move · Enter follow · q quit",
                Style::default().fg(Color::DarkGray),
            ),
            help,
        );

        // Last, so open lists draw over the page.
        self.nav.view(frame, header);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|event| match event {
            TerminalEvent::Key(key) if key.code == KeyCode::Char('q') => Some(Msg::Quit),
            TerminalEvent::Key(key)
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(Msg::Quit)
            }
            TerminalEvent::Mouse(mouse) => Some(Msg::Nav(nav_bar::Message::Mouse(mouse))),
            other => other
                .key_press()
                .map(|key| Msg::Nav(nav_bar::Message::KeyPress(key))),
        })]
    }
}

#[flyout::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = "demos/nav.toml".to_string();
    let mut log_file = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--log" => log_file = args.next().map(Into::into),
            _ => config = arg,
        }
    }

    let site = SiteNav::load(&config)?;
    let options = ProgramOptions {
        title: Some("flyout".into()),
        log_file,
        ..ProgramOptions::default()
    };
    let app = flyout::run_with::<SiteNavApp>(site, options).await?;
    println!("Last page: {}", app.location);
    Ok(())
}
