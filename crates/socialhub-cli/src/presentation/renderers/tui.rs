//! TUI Renderer for the feed page
//!
//! This module implements the TUI event loop and screen rendering.
//!
//! ## Design:
//! - Renderer owns the page state and the UI state (focus, list cursor)
//! - Every frame is drawn from a fresh `PageViewModel`
//! - Components turn keys into `FeedAction`s; the renderer applies them
//! - Side columns are hidden on narrow terminals

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
};
use socialhub_engine::{ActionOutcome, FeedAction, FeedPage};

use crate::config::UiConfig;
use crate::presentation::presenters::{present_page, present_status_bar};
use crate::presentation::view_models::StatusLevel;
use crate::presentation::views::tui::components::{
    ComposerAction, ComposerComponent, FeedComponent, SidebarComponent,
};
use crate::presentation::views::tui::{DiscoveryView, HeaderView, StatusBarView};

/// Terminal width needed before the navigation column is drawn
pub const SIDEBAR_MIN_WIDTH: u16 = 100;
/// Terminal width needed before the recommendations column is drawn
pub const DISCOVERY_MIN_WIDTH: u16 = 130;

const SIDEBAR_WIDTH: u16 = 26;
const DISCOVERY_WIDTH: u16 = 38;
const MAX_COMPOSER_LINES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Composer,
    Feed,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Focus::Sidebar => "Меню",
            Focus::Composer => "Новый пост",
            Focus::Feed => "Лента",
        }
    }
}

/// Which optional columns fit the current terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    sidebar: bool,
    discovery: bool,
}

impl Columns {
    fn for_width(width: u16, ui: &UiConfig) -> Self {
        Self {
            sidebar: ui.show_sidebar && width >= SIDEBAR_MIN_WIDTH,
            discovery: ui.show_discovery && width >= DISCOVERY_MIN_WIDTH,
        }
    }
}

pub struct TuiRenderer {
    page: FeedPage,
    ui: UiConfig,

    /// UI State: focused panel
    focus: Focus,
    sidebar: SidebarComponent,
    composer: ComposerComponent,
    feed: FeedComponent,

    /// Columns drawn in the last frame
    columns: Columns,

    /// Message shown in the status bar after an action
    status: Option<(String, StatusLevel)>,

    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(page: FeedPage, ui: UiConfig) -> Self {
        Self {
            page,
            focus: Focus::Feed,
            sidebar: SidebarComponent::new(),
            composer: ComposerComponent::new(),
            feed: FeedComponent::new(),
            columns: Columns {
                sidebar: ui.show_sidebar,
                discovery: ui.show_discovery,
            },
            ui,
            status: None,
            should_quit: false,
        }
    }

    pub fn page(&self) -> &FeedPage {
        &self.page
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Main event loop for TUI rendering
    ///
    /// This function:
    /// 1. Sets up terminal in raw mode
    /// 2. Draws the page, handles keyboard input
    /// 3. Cleans up terminal on exit
    ///
    /// Returns the page as it was when the user quit.
    pub fn run(mut self) -> Result<FeedPage> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(130);
        })?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result.map(|_| self.page)
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.ui.tick_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.cycle_focus(key.code == KeyCode::Tab);
            return;
        }

        if self.focus == Focus::Composer {
            match self.composer.handle_input(key) {
                Some(ComposerAction::Dispatch(action)) => self.dispatch(action),
                Some(ComposerAction::Leave) => self.focus = Focus::Feed,
                None => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('i') | KeyCode::Char('n') => {
                self.focus = Focus::Composer;
                return;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(tab) = SidebarComponent::tab_for_digit(c) {
                    self.dispatch(FeedAction::SelectTab(tab));
                }
                return;
            }
            _ => {}
        }

        let action = match self.focus {
            Focus::Sidebar => self.sidebar.handle_input(key, self.page.active_tab()),
            Focus::Feed => {
                let feed = present_page(&self.page).feed;
                self.feed.handle_input(key, &feed)
            }
            Focus::Composer => None,
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order: Vec<Focus> = if self.columns.sidebar {
            vec![Focus::Sidebar, Focus::Composer, Focus::Feed]
        } else {
            vec![Focus::Composer, Focus::Feed]
        };

        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    fn dispatch(&mut self, action: FeedAction) {
        match self.page.apply(action) {
            ActionOutcome::Published(id) => {
                log::info!("published post {}", id);
                self.feed.select_first();
                self.focus = Focus::Feed;
                self.status = Some(("Пост опубликован".to_string(), StatusLevel::Success));
            }
            ActionOutcome::LikeToggled { liked, likes, .. } => {
                let heart = if liked { "♥" } else { "♡" };
                self.status = Some((format!("{} {}", heart, likes), StatusLevel::Info));
            }
            ActionOutcome::TabSelected(tab) => {
                self.status = Some((format!("Раздел: {}", tab.label()), StatusLevel::Info));
            }
            // Blank drafts and stale ids change nothing and say nothing
            ActionOutcome::DraftRejected
            | ActionOutcome::LikeIgnored(_)
            | ActionOutcome::DraftEdited => {}
        }
    }

    /// Render the screen using Components and Views
    ///
    /// Layout: [Sidebar? | Header + Composer + Feed | Discovery?] over [Status Bar]
    fn render(&mut self, f: &mut Frame) {
        let vm = present_page(&self.page);
        let area = f.area();

        self.columns = Columns::for_width(area.width, &self.ui);
        if self.focus == Focus::Sidebar && !self.columns.sidebar {
            self.focus = Focus::Feed;
        }

        let [body, status_area] =
            Layout::vertical([Constraint::Min(10), Constraint::Length(3)]).areas(area);

        let (sidebar_area, main_area, discovery_area) = self.split_columns(body);

        if let Some(sidebar_area) = sidebar_area {
            let focused = self.focus == Focus::Sidebar;
            self.sidebar
                .render(f, sidebar_area, &vm.sidebar, &vm.app_name, focused);
        }

        let composer_lines = vm
            .composer
            .draft
            .split('\n')
            .count()
            .clamp(1, MAX_COMPOSER_LINES) as u16;
        let [header_area, composer_area, feed_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(composer_lines + 3),
            Constraint::Min(5),
        ])
        .areas(main_area);

        f.render_widget(HeaderView::new(&vm.header), header_area);
        self.composer.render(
            f,
            composer_area,
            &vm.composer,
            self.focus == Focus::Composer,
        );
        self.feed
            .render(f, feed_area, &vm.feed, self.focus == Focus::Feed);

        if let Some(discovery_area) = discovery_area {
            f.render_widget(DiscoveryView::new(&vm.discovery), discovery_area);
        }

        let status = present_status_bar(&vm, self.focus.label(), self.status.clone());
        f.render_widget(StatusBarView::new(&status), status_area);
    }

    fn split_columns(&self, body: Rect) -> (Option<Rect>, Rect, Option<Rect>) {
        let mut constraints = Vec::with_capacity(3);
        if self.columns.sidebar {
            constraints.push(Constraint::Length(SIDEBAR_WIDTH));
        }
        constraints.push(Constraint::Min(40));
        if self.columns.discovery {
            constraints.push(Constraint::Length(DISCOVERY_WIDTH));
        }

        let chunks = Layout::horizontal(constraints).split(body);
        let mut iter = chunks.iter().copied();

        let sidebar = if self.columns.sidebar { iter.next() } else { None };
        let main = iter.next().unwrap_or(body);
        let discovery = if self.columns.discovery { iter.next() } else { None };

        (sidebar, main, discovery)
    }
}
