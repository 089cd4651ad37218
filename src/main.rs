// src/main.rs
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use filebrowser::{
    filesystem::{DirNavigator, Item},
    i18n::{keys, Params, Translate},
    logging,
    utils::{format_size, format_updated},
    view::{
        Action, AddAction, Callbacks, DateFilter, DragEvent, DropPayload, EventOutcome, FileBrowser, FocusTarget,
        KeyInput, Modifiers, SortDirection, SortKey,
    },
    HeightMode, Pagination, ViewConfig,
};
use ratatui::{prelude::*, widgets::*};
use rust_i18n::t;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

rust_i18n::i18n!("locales", fallback = "en");

const PAGE: usize = 200;
const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Intents queued by the view and handled after each input event.
enum Request {
    Navigate(String),
    Reload,
    LoadMore,
    Dropped(DropPayload),
    Selected(usize),
    Status(String),
}

type Queue = Rc<RefCell<Vec<Request>>>;

/// Looks text up in `locales/`. Only the item-count family takes a parameter.
fn translate(key: &str, params: &Params) -> String {
    match params.get("count") {
        Some(count) => t!(key, count => count).to_string(),
        None => t!(key).to_string(),
    }
}

fn callbacks(queue: &Queue) -> Callbacks {
    let q = |queue: &Queue| queue.clone();
    let status = |queue: &Queue, verb: &'static str| {
        let queue = queue.clone();
        move |items: Vec<Item>| {
            tracing::info!(verb, count = items.len(), "action requested");
            queue.borrow_mut().push(Request::Status(format!("{}: {} item(s)", verb, items.len())));
        }
    };
    let signal = |queue: &Queue, what: &'static str| {
        let queue = queue.clone();
        move || queue.borrow_mut().push(Request::Status(format!("{} requested", what)))
    };

    let (nav, refresh, more, drop, sel, filter) = (q(queue), q(queue), q(queue), q(queue), q(queue), q(queue));
    Callbacks::new()
        .on_navigate(move |path| nav.borrow_mut().push(Request::Navigate(path)))
        .on_refresh(move || refresh.borrow_mut().push(Request::Reload))
        .on_load_more(move || more.borrow_mut().push(Request::LoadMore))
        .on_file_drop(move |payload| drop.borrow_mut().push(Request::Dropped(payload)))
        .on_selection_change(move |items| sel.borrow_mut().push(Request::Selected(items.len())))
        .on_date_filter_change(move |_| filter.borrow_mut().push(Request::Reload))
        .on_rename(status(queue, "rename"))
        .on_move(status(queue, "move"))
        .on_download(status(queue, "download"))
        .on_share(status(queue, "share"))
        .on_delete(status(queue, "delete"))
        .on_upload(signal(queue, "upload"))
        .on_create_folder(signal(queue, "create folder"))
        .on_import_files(signal(queue, "import files"))
        .on_import_folders(signal(queue, "import folders"))
}

struct App {
    browser: FileBrowser,
    navigator: DirNavigator,
    queue: Queue,
    path: String,
    page: usize,
    status: String,
    table_state: TableState,
    table_area: Rect,
    menu_area: Option<Rect>,
    last_click: Option<(Instant, usize)>,
    quit: bool,
}

impl App {
    fn new(config: ViewConfig, root: PathBuf) -> Self {
        let queue: Queue = Rc::new(RefCell::new(Vec::new()));
        let browser = FileBrowser::new(config, callbacks(&queue)).with_translator(translate);
        let mut app = App {
            browser,
            navigator: DirNavigator::new(root),
            queue,
            path: "/".to_string(),
            page: PAGE,
            status: String::new(),
            table_state: TableState::default(),
            table_area: Rect::default(),
            menu_area: None,
            last_click: None,
            quit: false,
        };
        app.reload();
        app.browser.mount();
        app.browser.set_focus(FocusTarget::Surface);
        app
    }

    fn reload(&mut self) {
        let now = chrono::Utc::now();
        let filter = self.browser.date_filter();
        let mut items: Vec<Item> = self
            .navigator
            .list(&self.path)
            .into_iter()
            .filter(|item| filter.accepts(item, now))
            .collect();
        let total = items.len();
        items.truncate(self.page);

        self.browser.set_pagination(Pagination {
            total_count: Some(total),
            has_more: items.len() < total,
            is_loading_more: false,
        });
        self.browser.set_items(items, self.path.clone());
    }

    fn drain(&mut self) {
        loop {
            let pending = std::mem::take(&mut *self.queue.borrow_mut());
            if pending.is_empty() {
                break;
            }
            for request in pending {
                match request {
                    Request::Navigate(path) => {
                        self.path = path;
                        self.page = PAGE;
                        self.reload();
                    }
                    Request::Reload => self.reload(),
                    Request::LoadMore => {
                        self.page += PAGE;
                        self.reload();
                    }
                    Request::Dropped(payload) => {
                        self.status = format!("{} file(s) dropped", payload.paths.len());
                    }
                    Request::Selected(count) => self.status = format!("{} selected", count),
                    Request::Status(status) => self.status = status,
                }
            }
        }
    }

    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area;
        let first = area.y + 2;
        if column <= area.x || column + 1 >= area.right() || row < first || row + 1 >= area.bottom() {
            return None;
        }
        let index = self.table_state.offset() + (row - first) as usize;
        (index < self.browser.sorted_items().len()).then_some(index)
    }

    fn on_key(&mut self, input: KeyInput, code: KeyCode, modifiers: KeyModifiers) {
        if self.browser.handle_key(&input) == EventOutcome::PreventDefault {
            return;
        }

        let entries = self.browser.add_menu_entries();
        match code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc if self.browser.is_add_menu_open() => self.browser.close_add_menu(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => {
                let next = match self.browser.focus() {
                    FocusTarget::Surface => FocusTarget::Elsewhere,
                    _ => FocusTarget::Surface,
                };
                self.browser.set_focus(next);
            }
            KeyCode::Char(' ') => {
                if let Some(index) = self.browser.active_index() {
                    let mods = Modifiers {
                        shift: modifiers.contains(KeyModifiers::SHIFT),
                        ctrl: modifiers.contains(KeyModifiers::CONTROL),
                    };
                    self.browser.click(index, mods);
                }
            }
            KeyCode::Backspace => {
                let depth = self.browser.breadcrumb().len();
                if depth > 1 {
                    self.browser.navigate_to_segment(depth - 2);
                }
            }
            KeyCode::Char(c @ '1'..='4') if self.browser.is_add_menu_open() => {
                let slot = c as usize - '1' as usize;
                if let Some(&action) = entries.get(slot) {
                    self.browser.choose_add(action);
                }
            }
            KeyCode::Char('n') => self.browser.toggle_sort(SortKey::Name),
            KeyCode::Char('m') => self.browser.toggle_sort(SortKey::UpdatedAt),
            KeyCode::Char('z') => self.browser.toggle_sort(SortKey::Size),
            KeyCode::Char('r') => self.browser.refresh(),
            KeyCode::Char('e') => {
                self.browser.trigger(Action::Rename);
            }
            KeyCode::Char('v') => {
                self.browser.trigger(Action::Move);
            }
            KeyCode::Char('w') => {
                self.browser.trigger(Action::Download);
            }
            KeyCode::Char('h') => {
                self.browser.trigger(Action::Share);
            }
            KeyCode::Char('x') => {
                self.browser.trigger(Action::Delete);
            }
            KeyCode::Char('+') => self.browser.toggle_add_menu(),
            KeyCode::Char('f') => {
                let next = match self.browser.date_filter() {
                    DateFilter::All => DateFilter::Today,
                    DateFilter::Today => DateFilter::Last7Days,
                    DateFilter::Last7Days => DateFilter::Last30Days,
                    DateFilter::Last30Days => DateFilter::LastYear,
                    DateFilter::LastYear => DateFilter::All,
                };
                self.browser.set_date_filter(next);
            }
            KeyCode::Char('.') => {
                self.navigator.show_hidden = !self.navigator.show_hidden;
                self.reload();
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(menu) = self.menu_area {
                    if hit(menu, mouse.column, mouse.row) {
                        let slot = mouse.row.saturating_sub(menu.y + 1) as usize;
                        if let Some(&action) = self.browser.add_menu_entries().get(slot) {
                            self.browser.choose_add(action);
                        }
                        return;
                    }
                    self.browser.outside_click();
                }

                let Some(index) = self.row_at(mouse.column, mouse.row) else {
                    return;
                };
                self.browser.set_focus(FocusTarget::Surface);
                let now = Instant::now();
                let is_double = matches!(
                    self.last_click,
                    Some((at, last)) if last == index && now.duration_since(at) < DOUBLE_CLICK
                );
                if is_double {
                    self.last_click = None;
                    self.browser.double_click(index);
                } else {
                    self.last_click = Some((now, index));
                    let mods = Modifiers {
                        shift: mouse.modifiers.contains(KeyModifiers::SHIFT),
                        ctrl: mouse.modifiers.contains(KeyModifiers::CONTROL),
                    };
                    self.browser.click(index, mods);
                }
            }
            MouseEventKind::Moved => {
                let index = self.row_at(mouse.column, mouse.row);
                self.browser.hover(index);
            }
            _ => {}
        }
    }
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

fn text(t: &dyn Translate, key: &str) -> String {
    t.t(key, &Params::new())
}

fn draw(f: &mut Frame, app: &mut App) {
    let browser = &app.browser;
    let t = browser.translator();
    let rows_needed = u16::try_from(browser.sorted_items().len()).unwrap_or(u16::MAX).saturating_add(3);
    let table_height = match browser.height_mode() {
        HeightMode::Auto => Constraint::Length(rows_needed),
        HeightMode::FillContainer => Constraint::Min(3),
        HeightMode::MaxHeight(max) => Constraint::Length(rows_needed.min(max.max(3))),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            table_height,
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(f.size());

    let crumbs: Vec<String> = browser.breadcrumb().into_iter().map(|s| s.label).collect();
    f.render_widget(Paragraph::new(crumbs.join(" / ")).style(Style::default().bold()), chunks[0]);

    let sort = browser.sort_config();
    let arrow = |key: SortKey| match (sort.key == key, sort.direction) {
        (false, _) => "",
        (true, SortDirection::Asc) => " ^",
        (true, SortDirection::Desc) => " v",
    };
    let header = Row::new(vec![
        format!("{}{}", text(t, keys::COLUMN_NAME), arrow(SortKey::Name)),
        format!("{}{}", text(t, keys::COLUMN_SIZE), arrow(SortKey::Size)),
        format!("{}{}", text(t, keys::COLUMN_UPDATED), arrow(SortKey::UpdatedAt)),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = browser
        .sorted_items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut style = Style::default();
            if item.disabled {
                style = style.add_modifier(Modifier::DIM);
            }
            if browser.is_selected(&item.id) {
                style = style.fg(Color::Black).bg(Color::Cyan);
            }
            if browser.hovered_index() == Some(i) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let name = if item.is_directory { format!("{}/", item.name) } else { item.name.clone() };
            Row::new(vec![name, format_size(item), format_updated(item, t)]).style(style)
        })
        .collect();

    let border = if browser.focus() == FocusTarget::Surface { Color::Yellow } else { Color::DarkGray };
    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(12), Constraint::Length(18)])
        .header(header)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)))
        .highlight_symbol("> ");

    app.table_state.select(browser.active_index());
    app.table_area = chunks[1];
    f.render_stateful_widget(table, chunks[1], &mut app.table_state);

    let mut footer = browser.item_count_text();
    if browser.pagination().is_loading_more {
        footer = format!("{}  {}", footer, text(t, keys::LOADING_MORE));
    }
    if !app.status.is_empty() {
        footer = format!("{}  |  {}", footer, app.status);
    }
    f.render_widget(Paragraph::new(footer), chunks[2]);
    f.render_widget(
        Paragraph::new(text(t, keys::HELP))
            .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );

    app.menu_area = None;
    if browser.is_add_menu_open() {
        let entries: Vec<ListItem> = browser
            .add_menu_entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let key = match entry {
                    AddAction::Upload => keys::ADD_UPLOAD,
                    AddAction::CreateFolder => keys::ADD_CREATE_FOLDER,
                    AddAction::ImportFiles => keys::ADD_IMPORT_FILES,
                    AddAction::ImportFolders => keys::ADD_IMPORT_FOLDERS,
                };
                ListItem::new(format!("{} {}", i + 1, text(t, key)))
            })
            .collect();
        let area = Rect {
            x: chunks[1].right().saturating_sub(22),
            y: chunks[1].y,
            width: 22.min(chunks[1].width),
            height: (entries.len() as u16 + 2).min(chunks[1].height),
        };
        f.render_widget(Clear, area);
        f.render_widget(List::new(entries).block(Block::default().borders(Borders::ALL)), area);
        app.menu_area = Some(area);
    }

    if browser.is_drag_active() {
        let area = chunks[1].inner(&Margin { horizontal: 4, vertical: 1 });
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(text(t, keys::DROP_FILES))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_path = logging::init()?;
    let config = ViewConfig::load_or_default()?;
    let root = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => std::env::current_dir()?,
    };
    tracing::info!(root = %root.display(), log = %log_path.display(), "starting");

    let mut app = App::new(config, root);

    enable_raw_mode()?;
    execute!(
        std::io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let result = run(&mut terminal, &mut app);

    app.browser.unmount();
    disable_raw_mode()?;
    execute!(
        std::io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        DisableFocusChange
    )?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.quit {
        terminal.draw(|f| draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                if let Some(input) = KeyInput::from_crossterm(&key) {
                    app.on_key(input, key.code, key.modifiers);
                }
            }
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Paste(pasted) => {
                app.browser.handle_drag(DragEvent::Enter { has_files: true });
                app.browser.handle_drag(DragEvent::Drop(DropPayload::from_pasted(&pasted)));
            }
            Event::FocusGained => app.browser.set_focus(FocusTarget::Surface),
            Event::FocusLost => app.browser.set_focus(FocusTarget::Elsewhere),
            Event::Resize(_, _) => {}
        }
        app.drain();
    }
    Ok(())
}
