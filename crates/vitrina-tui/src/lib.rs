// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use vitrina_app::{ApiStatus, Category, GalleryCommand, GalleryState, Project};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const FAILURE_TITLE: &str = "Oops! Something Went Wrong";
const FAILURE_DETAIL: &str = "We cannot seem to find the page you are looking for";
const FAILURE_HINT: &str = "press r to retry";

/// Completion of one outbound fetch. `request_id` ties the completion to the
/// fetch that produced it so superseded responses can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    Completed {
        request_id: u64,
        projects: Vec<Project>,
    },
    Failed {
        request_id: u64,
        error: String,
    },
}

impl FetchEvent {
    const fn request_id(&self) -> u64 {
        match self {
            Self::Completed { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    Fetch(FetchEvent),
}

/// Seam between the renderer and the thing that actually issues requests.
/// The default `spawn_fetch` runs synchronously and reports through the
/// channel; an implementation may override it to fetch on a background
/// thread so the loading view stays animated.
pub trait GalleryRuntime {
    fn fetch_projects(&mut self, category: Category) -> Result<Vec<Project>>;

    fn spawn_fetch(
        &mut self,
        request_id: u64,
        category: Category,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let event = match self.fetch_projects(category) {
            Ok(projects) => InternalEvent::Fetch(FetchEvent::Completed {
                request_id,
                projects,
            }),
            Err(error) => InternalEvent::Fetch(FetchEvent::Failed {
                request_id,
                error: error.to_string(),
            }),
        };
        tx.send(event)
            .map_err(|_| anyhow::anyhow!("fetch event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    spinner_tick: usize,
    status_line: Option<String>,
    status_token: u64,
    next_request_id: u64,
    in_flight: Option<u64>,
}

pub fn run_app<R: GalleryRuntime>(state: &mut GalleryState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    // Fetch on mount, for whatever category the state starts with.
    issue_fetch(
        state,
        runtime,
        &mut view_data,
        &internal_tx,
        GalleryCommand::SelectCategory(state.category),
    );

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        } else if state.status == ApiStatus::InProgress {
            view_data.spinner_tick = view_data.spinner_tick.wrapping_add(1);
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut GalleryState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                view_data.status_line = None;
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Fetch(event) => {
                handle_fetch_event(state, view_data, tx, event);
            }
        }
    }
}

fn handle_fetch_event(
    state: &mut GalleryState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    event: FetchEvent,
) {
    let Some(in_flight) = view_data.in_flight else {
        return;
    };
    if event.request_id() != in_flight {
        // Superseded by a newer category selection or retry.
        return;
    }

    view_data.in_flight = None;
    match event {
        FetchEvent::Completed { projects, .. } => {
            state.dispatch(GalleryCommand::LoadSucceeded(projects));
        }
        FetchEvent::Failed { error, .. } => {
            state.dispatch(GalleryCommand::LoadFailed);
            emit_status(view_data, tx, format!("load failed: {error}"));
        }
    }
}

/// Dispatches the trigger command, then hands the fetch for the (now
/// current) category to the runtime. The state is observably `InProgress`
/// before the request leaves.
fn issue_fetch<R: GalleryRuntime>(
    state: &mut GalleryState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: GalleryCommand,
) {
    state.dispatch(command);
    debug_assert!(state.wants_fetch());

    view_data.next_request_id = view_data.next_request_id.wrapping_add(1);
    let request_id = view_data.next_request_id;
    view_data.in_flight = Some(request_id);

    if let Err(error) = runtime.spawn_fetch(request_id, state.category, internal_tx.clone()) {
        view_data.in_flight = None;
        state.dispatch(GalleryCommand::LoadFailed);
        emit_status(view_data, internal_tx, format!("fetch not started: {error}"));
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    view_data.status_line = Some(message.into());
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: GalleryRuntime>(
    state: &mut GalleryState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q')
        && (key.modifiers.is_empty() || key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return true;
    }

    match state.status {
        ApiStatus::Success => match key.code {
            KeyCode::Left => {
                select_neighbor(state, runtime, view_data, internal_tx, -1);
            }
            KeyCode::Right => {
                select_neighbor(state, runtime, view_data, internal_tx, 1);
            }
            KeyCode::Char(digit @ '1'..='5') => {
                let index = digit as usize - '1' as usize;
                select_category(state, runtime, view_data, internal_tx, Category::ALL[index]);
            }
            _ => {}
        },
        ApiStatus::Failure => {
            if key.code == KeyCode::Char('r') {
                issue_fetch(state, runtime, view_data, internal_tx, GalleryCommand::Retry);
            }
        }
        ApiStatus::Initial | ApiStatus::InProgress => {}
    }

    false
}

fn select_neighbor<R: GalleryRuntime>(
    state: &mut GalleryState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    delta: isize,
) {
    let categories = Category::ALL;
    let current = categories
        .iter()
        .position(|category| *category == state.category)
        .unwrap_or(0) as isize;
    let len = categories.len() as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    select_category(state, runtime, view_data, internal_tx, categories[next]);
}

fn select_category<R: GalleryRuntime>(
    state: &mut GalleryState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    category: Category,
) {
    if category == state.category {
        return;
    }
    issue_fetch(
        state,
        runtime,
        view_data,
        internal_tx,
        GalleryCommand::SelectCategory(category),
    );
}

fn render(frame: &mut ratatui::Frame<'_>, state: &GalleryState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    render_header(frame, layout[0]);

    match state.status {
        ApiStatus::Initial | ApiStatus::InProgress => {
            let loading = Paragraph::new(loading_text(view_data.spinner_tick))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(loading, layout[1]);
        }
        ApiStatus::Success => render_gallery(frame, layout[1], state),
        ApiStatus::Failure => {
            let failure = Paragraph::new(failure_text())
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(failure, layout[1]);
        }
    }

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);
}

// Page chrome, identical in all three view states.
fn render_header(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let header = Paragraph::new("projects showcase")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().title("vitrina").borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_gallery(frame: &mut ratatui::Frame<'_>, area: Rect, state: &GalleryState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let selected = Category::ALL
        .iter()
        .position(|category| *category == state.category)
        .unwrap_or(0);
    let tabs = Tabs::new(category_titles())
        .block(Block::default().title("category").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    let title = format!("projects ({})", state.projects.len());
    if state.projects.is_empty() {
        let empty = Paragraph::new(empty_gallery_text(state.category))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(empty, layout[1]);
        return;
    }

    let rows = state
        .projects
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(project.name.clone()),
                Cell::from(project.image_url.clone()),
            ])
        })
        .collect::<Vec<_>>();
    let table = Table::new(
        rows,
        [Constraint::Percentage(35), Constraint::Percentage(65)],
    )
    .header(
        Row::new(vec!["name", "image"]).style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(table, layout[1]);
}

fn category_titles() -> Vec<String> {
    Category::ALL
        .iter()
        .enumerate()
        .map(|(index, category)| format!("{} {}", index + 1, category.label()))
        .collect()
}

fn loading_text(tick: usize) -> String {
    format!(
        "{} loading projects",
        SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
    )
}

fn failure_text() -> String {
    format!("{FAILURE_TITLE}\n{FAILURE_DETAIL}\n\n{FAILURE_HINT}")
}

fn empty_gallery_text(category: Category) -> String {
    format!("no projects in {}", category.label())
}

fn status_text(state: &GalleryState, view_data: &ViewData) -> String {
    if let Some(message) = &view_data.status_line {
        return message.clone();
    }
    match state.status {
        ApiStatus::Initial | ApiStatus::InProgress => {
            format!("loading {} | q quit", state.category.label())
        }
        ApiStatus::Success => format!(
            "{} | left/right or 1-5 switch category | q quit",
            state.category.label()
        ),
        ApiStatus::Failure => format!("{} | r retry | q quit", state.category.label()),
    }
}
