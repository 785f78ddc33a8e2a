use color_eyre::Result;
use std::sync::Arc;
use super::{
    event::{AppEvent, EventHandler},
    widgets::{attachments_table, form_view, FilterBar},
};
use crate::application::{time_since, AttachmentForm, FormField, StateManager};
use crate::domain::{AttachmentSummary, TaskId};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, TableState, Wrap},
};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Main,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedPane {
    Form,
    Filter,
    List,
}

pub struct App {
    state_manager: Arc<StateManager>,

    // UI State
    mode: AppMode,
    focused_pane: FocusedPane,

    // Upload form
    form: AttachmentForm,

    // Attachment list
    current_task: Option<TaskId>,
    attachments: Vec<AttachmentSummary>,
    filtered_attachments: Vec<AttachmentSummary>,
    list_state: TableState,
    filter_bar: FilterBar,

    // Loading states
    is_loading: bool,
    status_message: Option<String>,
    error_message: Option<String>,
}

impl App {
    pub fn new(state_manager: Arc<StateManager>) -> Self {
        Self {
            state_manager,
            mode: AppMode::Main,
            focused_pane: FocusedPane::Form,
            form: AttachmentForm::default(),
            current_task: None,
            attachments: Vec::new(),
            filtered_attachments: Vec::new(),
            list_state: TableState::default(),
            filter_bar: FilterBar::new(),
            is_loading: false,
            status_message: None,
            error_message: None,
        }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        self.state_manager.initialize().await?;
        self.current_task = self.state_manager.get_current_task().await;

        if let Some(task_id) = &self.current_task {
            self.form = AttachmentForm::new(task_id.as_str());
            self.load_attachments(true).await;
        }
        Ok(())
    }

    async fn load_attachments(&mut self, use_cache: bool) {
        let Some(task_id) = self.current_task.clone() else {
            return;
        };

        self.is_loading = true;
        match self.state_manager.get_attachments(&task_id, use_cache).await {
            Ok(files) => {
                self.attachments = files;
                self.update_filtered_attachments();
                if self.filtered_attachments.is_empty() {
                    self.list_state.select(None);
                } else if self.list_state.selected().is_none() {
                    self.list_state.select(Some(0));
                }
            }
            Err(e) => {
                // Rows from another task must not stay selectable
                self.attachments.clear();
                self.filtered_attachments.clear();
                self.list_state.select(None);
                self.error_message = Some(format!("Failed to load attachments: {e}"));
            }
        }
        self.is_loading = false;
    }

    fn update_filtered_attachments(&mut self) {
        let query = self.filter_bar.query();
        self.filtered_attachments = if query.is_empty() {
            self.attachments.clone()
        } else {
            self.attachments
                .iter()
                .filter(|a| a.matches(query))
                .cloned()
                .collect()
        };

        if let Some(selected) = self.list_state.selected() {
            if selected >= self.filtered_attachments.len() {
                let new_selection = self.filtered_attachments.len().checked_sub(1);
                self.list_state.select(new_selection);
            }
        }
    }

    async fn submit_form(&mut self) {
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return;
            }
        };

        self.error_message = None;

        match self.state_manager.upload(&request).await {
            Ok(result) => {
                let message = match result.get("fileID").and_then(|v| v.as_str()) {
                    Some(file_id) => format!("Uploaded {} ({file_id})", request.file_name),
                    None => format!("Uploaded {}", request.file_name),
                };
                self.status_message = Some(message);
                self.form.reset();

                if let Err(e) = self.state_manager.set_current_task(request.task_id.clone()).await {
                    tracing::warn!("Failed to switch task: {}", e);
                }
                self.current_task = Some(request.task_id);
                self.load_attachments(false).await;
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
    }

    async fn delete_selected(&mut self) {
        let (Some(task_id), Some(index)) = (self.current_task.clone(), self.list_state.selected())
        else {
            return;
        };
        let Some(attachment) = self.filtered_attachments.get(index).cloned() else {
            return;
        };

        let file_path = match attachment.file_path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => {
                self.error_message = Some(format!(
                    "Cannot delete {}: the service did not report its file path",
                    attachment.file_name
                ));
                return;
            }
        };

        match self
            .state_manager
            .delete(&task_id, &attachment.file_id, file_path)
            .await
        {
            Ok(()) => {
                self.status_message = Some(format!("Deleted {}", attachment.file_name));
                self.load_attachments(false).await;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to delete: {e}"));
            }
        }
    }

    fn focus(&mut self, pane: FocusedPane) {
        self.focused_pane = pane;
        self.filter_bar.set_focused(pane == FocusedPane::Filter);
    }

    fn next_attachment(&mut self) {
        if self.filtered_attachments.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.filtered_attachments.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_attachment(&mut self) {
        if self.filtered_attachments.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.filtered_attachments.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Returns true when the app should exit.
    pub async fn handle_event(&mut self, event: AppEvent) -> Result<bool> {
        if self.mode == AppMode::Help {
            match event {
                AppEvent::Quit => return Ok(true),
                AppEvent::CloseModal | AppEvent::Character('q') | AppEvent::Character('?') => {
                    self.mode = AppMode::Main;
                }
                _ => {}
            }
            return Ok(false);
        }

        match event {
            AppEvent::Quit => return Ok(true),

            AppEvent::CloseModal => match self.focused_pane {
                FocusedPane::Filter => self.focus(FocusedPane::List),
                FocusedPane::Form => self.focus(FocusedPane::List),
                FocusedPane::List => {
                    self.error_message = None;
                    self.status_message = None;
                }
            },

            AppEvent::Tab => match self.focused_pane {
                FocusedPane::Form => {
                    if !self.form.focus_next() {
                        self.focus(FocusedPane::List);
                    }
                }
                FocusedPane::Filter => self.focus(FocusedPane::List),
                FocusedPane::List => {
                    self.form.focus(FormField::TaskId);
                    self.focus(FocusedPane::Form);
                }
            },

            AppEvent::BackTab => match self.focused_pane {
                FocusedPane::Form => {
                    if !self.form.focus_previous() {
                        self.focus(FocusedPane::List);
                    }
                }
                FocusedPane::Filter => self.focus(FocusedPane::List),
                FocusedPane::List => {
                    self.form.focus(FormField::Tags);
                    self.focus(FocusedPane::Form);
                }
            },

            AppEvent::Enter => match self.focused_pane {
                FocusedPane::Form => self.submit_form().await,
                FocusedPane::Filter => self.focus(FocusedPane::List),
                FocusedPane::List => {}
            },

            AppEvent::Next => match self.focused_pane {
                FocusedPane::Form => {
                    self.form.focus_next();
                }
                _ => self.next_attachment(),
            },

            AppEvent::Previous => match self.focused_pane {
                FocusedPane::Form => {
                    self.form.focus_previous();
                }
                _ => self.previous_attachment(),
            },

            AppEvent::OptionLeft => {
                if self.focused_pane == FocusedPane::Form && self.form.focused() == FormField::Priority {
                    self.form.previous_priority();
                }
            }

            AppEvent::OptionRight => {
                if self.focused_pane == FocusedPane::Form && self.form.focused() == FormField::Priority {
                    self.form.next_priority();
                }
            }

            AppEvent::Backspace => match self.focused_pane {
                FocusedPane::Form => self.form.delete_char(),
                FocusedPane::Filter => {
                    self.filter_bar.delete_char();
                    self.update_filtered_attachments();
                }
                FocusedPane::List => {}
            },

            AppEvent::Character(c) => match self.focused_pane {
                FocusedPane::Form => match (self.form.focused(), c) {
                    (FormField::Priority, ' ') => self.form.next_priority(),
                    _ => self.form.insert_char(c),
                },
                FocusedPane::Filter => {
                    self.filter_bar.insert_char(c);
                    self.update_filtered_attachments();
                }
                FocusedPane::List => match c {
                    'q' => return Ok(true),
                    '?' => self.mode = AppMode::Help,
                    '/' => self.focus(FocusedPane::Filter),
                    'j' => self.next_attachment(),
                    'k' => self.previous_attachment(),
                    'g' => {
                        if !self.filtered_attachments.is_empty() {
                            self.list_state.select(Some(0));
                        }
                    }
                    'G' => {
                        let last = self.filtered_attachments.len().checked_sub(1);
                        self.list_state.select(last);
                    }
                    'r' => {
                        self.error_message = None;
                        self.load_attachments(false).await;
                    }
                    'd' => self.delete_selected().await,
                    'u' => self.focus(FocusedPane::Form),
                    'c' => {
                        self.filter_bar.clear();
                        self.update_filtered_attachments();
                    }
                    _ => {}
                },
            },

            AppEvent::Tick => {}
        }

        Ok(false)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(outer[0]);

        form_view::render(
            frame,
            panes[0],
            &self.form,
            self.focused_pane == FocusedPane::Form,
        );

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(panes[1]);

        self.filter_bar.render(frame, right[0]);
        self.render_attachment_list(frame, right[1]);
        self.render_status_bar(frame, outer[1]);

        if self.mode == AppMode::Help {
            self.render_help(frame);
        }
    }

    fn render_attachment_list(&mut self, frame: &mut Frame, area: Rect) {
        let title = match &self.current_task {
            Some(task_id) => {
                let fetched = self
                    .state_manager
                    .last_fetched(task_id)
                    .map(|at| format!(" · fetched {}", time_since(at, chrono::Utc::now())))
                    .unwrap_or_default();
                format!("Attachments for {} ({}){}", task_id, self.filtered_attachments.len(), fetched)
            }
            None => "Attachments".to_string(),
        };

        if self.current_task.is_none() || (self.filtered_attachments.is_empty() && !self.is_loading) {
            let message = if self.current_task.is_none() {
                "Upload an attachment to pick a task"
            } else if self.filter_bar.query().is_empty() {
                "No attachments for this task"
            } else {
                "No attachments match the filter"
            };
            let block = Block::default().title(title).borders(Borders::ALL);
            frame.render_widget(
                Paragraph::new(message)
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }

        attachments_table::render(
            frame,
            area,
            &title,
            &self.filtered_attachments,
            &mut self.list_state,
            self.focused_pane == FocusedPane::List,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if let Some(error) = &self.error_message {
            (format!("❌ {error}"), Style::default().fg(Color::Red))
        } else if let Some(status) = &self.status_message {
            (format!("✓ {status}"), Style::default().fg(Color::Green))
        } else if self.is_loading {
            ("Loading...".to_string(), Style::default().fg(Color::Yellow))
        } else {
            let help = match self.focused_pane {
                FocusedPane::Form => "Tab: next field | Enter: upload | Esc: list | Ctrl+C: quit",
                FocusedPane::Filter => "Type to filter | Enter/Esc: back to list",
                FocusedPane::List => "j/k: move | r: refresh | d: delete | /: filter | u: form | ?: help | q: quit",
            };
            (help.to_string(), Style::default().fg(Color::DarkGray))
        };

        frame.render_widget(Paragraph::new(text).style(style), area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = Self::centered_rect(60, 60, frame.area());
        let help_text = vec![
            Line::from("Form").style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from("  Tab / Shift+Tab   next / previous field"),
            Line::from("  ←/→ or Space      change priority"),
            Line::from("  Enter             upload attachment"),
            Line::from(""),
            Line::from("Attachment list").style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from("  j/k or ↓/↑        move selection"),
            Line::from("  g / G             first / last"),
            Line::from("  r                 refresh from API"),
            Line::from("  d                 delete selected"),
            Line::from("  /                 filter, c to clear"),
            Line::from("  u                 focus the form"),
            Line::from(""),
            Line::from("Press q, ? or Esc to close"),
        ];

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(help_text)
                .block(Block::default().title("Help").borders(Borders::ALL))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

pub async fn run_tui(mut app: App) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;

    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    app.initialize().await?;

    let mut event_handler = EventHandler::new();
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let event = event_handler.next_event().await?;
        if app.handle_event(event).await? || event_handler.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::AttachmentListCache;
    use crate::application::AttachmentService;
    use crate::domain::Priority;
    use crate::ports::{AppConfig, MockAttachmentRepository, MockConfigStore};
    use ratatui::backend::TestBackend;
    use serde_json::json;

    fn attachment(id: &str, name: &str, priority: Option<&str>) -> AttachmentSummary {
        AttachmentSummary {
            file_id: id.into(),
            file_name: name.to_string(),
            priority: priority.map(str::to_string),
            uploaded_at: "2024-05-01".to_string(),
            task_id: Some("t1".into()),
            file_path: Some(format!("https://cdn.example.com/{name}")),
            tags: vec!["docs".to_string()],
        }
    }

    fn app(repository: MockAttachmentRepository) -> App {
        let mut config_store = MockConfigStore::new();
        config_store.expect_load_config().returning(|| {
            Ok(AppConfig {
                default_task: Some("t1".into()),
                ..Default::default()
            })
        });
        config_store.expect_save_config().returning(|_| Ok(()));

        let service = AttachmentService::new(
            Arc::new(repository),
            Arc::new(AttachmentListCache::new(300, 100)),
        );
        App::new(Arc::new(StateManager::new(Arc::new(service), Arc::new(config_store))))
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(AppEvent::Character(c)).await.unwrap();
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_initialize_loads_current_task() {
        let mut repository = MockAttachmentRepository::new();
        repository
            .expect_list_attachments()
            .times(1)
            .returning(|_| Ok(vec![attachment("f1", "spec.pdf", None)]));

        let mut app = app(repository);
        app.initialize().await.unwrap();

        assert_eq!(app.form.task_id, "t1");
        assert_eq!(app.filtered_attachments.len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));

        let screen = screen(&mut app);
        assert!(screen.contains("spec.pdf"));
        assert!(screen.contains("Priority"));
    }

    #[tokio::test]
    async fn test_submit_uploads_and_resets_form() {
        let mut repository = MockAttachmentRepository::new();
        repository
            .expect_list_attachments()
            .returning(|_| Ok(vec![attachment("f1", "spec.pdf", Some("high"))]));
        repository
            .expect_upload_attachment()
            .withf(|request| {
                request.task_id.as_str() == "t1"
                    && request.file_name == "a.txt"
                    && request.file_path == "/tmp/a.txt"
                    && request.priority == Priority::High
                    && request.tags == vec!["design".to_string(), "docs".to_string()]
            })
            .times(1)
            .returning(|_| Ok(json!({"status": "success", "fileID": "f9"})));

        let mut app = app(repository);
        app.initialize().await.unwrap();

        app.handle_event(AppEvent::Tab).await.unwrap();
        type_text(&mut app, "a.txt").await;
        app.handle_event(AppEvent::Tab).await.unwrap();
        type_text(&mut app, "/tmp/a.txt").await;
        app.handle_event(AppEvent::Tab).await.unwrap();
        app.handle_event(AppEvent::OptionRight).await.unwrap();
        app.handle_event(AppEvent::Tab).await.unwrap();
        type_text(&mut app, "design, , docs").await;
        app.handle_event(AppEvent::Enter).await.unwrap();

        assert_eq!(app.error_message, None);
        assert_eq!(app.status_message.as_deref(), Some("Uploaded a.txt (f9)"));
        assert_eq!(app.form, AttachmentForm::default());
        assert_eq!(app.current_task, Some("t1".into()));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_form() {
        let mut repository = MockAttachmentRepository::new();
        repository.expect_list_attachments().returning(|_| Ok(Vec::new()));
        repository.expect_upload_attachment().returning(|_| {
            Err(crate::ports::RepositoryError::Rejected {
                status: 400,
                message: "task not found".to_string(),
            })
        });

        let mut app = app(repository);
        app.initialize().await.unwrap();
        app.form.file_name = "a.txt".to_string();
        app.form.file_path = "a.txt".to_string();

        app.handle_event(AppEvent::Enter).await.unwrap();

        assert_eq!(app.error_message.as_deref(), Some("task not found"));
        assert_eq!(app.form.file_name, "a.txt");
    }

    #[tokio::test]
    async fn test_filter_and_list_navigation() {
        let mut repository = MockAttachmentRepository::new();
        repository.expect_list_attachments().returning(|_| {
            Ok(vec![
                attachment("f1", "spec.pdf", None),
                attachment("f2", "invoice.pdf", Some("low")),
            ])
        });

        let mut app = app(repository);
        app.initialize().await.unwrap();
        app.handle_event(AppEvent::CloseModal).await.unwrap();
        assert_eq!(app.focused_pane, FocusedPane::List);

        app.handle_event(AppEvent::Character('j')).await.unwrap();
        assert_eq!(app.list_state.selected(), Some(1));
        app.handle_event(AppEvent::Character('j')).await.unwrap();
        assert_eq!(app.list_state.selected(), Some(0));

        app.handle_event(AppEvent::Character('/')).await.unwrap();
        type_text(&mut app, "inv").await;
        assert_eq!(app.filtered_attachments.len(), 1);
        assert_eq!(app.filtered_attachments[0].file_name, "invoice.pdf");

        app.handle_event(AppEvent::Enter).await.unwrap();
        app.handle_event(AppEvent::Character('c')).await.unwrap();
        assert_eq!(app.filtered_attachments.len(), 2);

        let quit = app.handle_event(AppEvent::Character('q')).await.unwrap();
        assert!(quit);
    }

    #[tokio::test]
    async fn test_delete_selected() {
        let mut repository = MockAttachmentRepository::new();
        repository
            .expect_list_attachments()
            .returning(|_| Ok(vec![attachment("f1", "spec.pdf", None)]));
        repository
            .expect_delete_attachment()
            .withf(|_, file, path| file.0 == "f1" && path == "https://cdn.example.com/spec.pdf")
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut app = app(repository);
        app.initialize().await.unwrap();
        app.handle_event(AppEvent::CloseModal).await.unwrap();
        app.handle_event(AppEvent::Character('d')).await.unwrap();

        assert_eq!(app.status_message.as_deref(), Some("Deleted spec.pdf"));
    }

    #[tokio::test]
    async fn test_q_types_into_form() {
        let mut app = app(MockAttachmentRepository::new());
        app.form.focus(FormField::FileName);

        let quit = app.handle_event(AppEvent::Character('q')).await.unwrap();

        assert!(!quit);
        assert_eq!(app.form.file_name, "q");
    }

    #[tokio::test]
    async fn test_failed_load_after_task_switch_clears_previous_rows() {
        let mut repository = MockAttachmentRepository::new();
        repository
            .expect_list_attachments()
            .withf(|task| task.as_str() == "t1")
            .returning(|_| Ok(vec![attachment("f1", "t1-only.pdf", None)]));
        repository
            .expect_list_attachments()
            .withf(|task| task.as_str() == "t2")
            .returning(|_| Err(crate::ports::RepositoryError::Transport("down".to_string())));
        repository
            .expect_upload_attachment()
            .times(1)
            .returning(|_| Ok(json!({"fileID": "f2"})));
        repository.expect_delete_attachment().never();

        let mut app = app(repository);
        app.initialize().await.unwrap();
        assert_eq!(app.filtered_attachments.len(), 1);

        app.form.task_id = "t2".to_string();
        app.form.file_name = "a.txt".to_string();
        app.form.file_path = "a.txt".to_string();
        app.handle_event(AppEvent::Enter).await.unwrap();

        assert_eq!(app.current_task, Some("t2".into()));
        assert!(app.attachments.is_empty());
        assert!(app.filtered_attachments.is_empty());
        assert_eq!(app.list_state.selected(), None);
        assert_eq!(
            app.error_message.as_deref(),
            Some("Failed to load attachments: Network error: down")
        );
        assert!(!screen(&mut app).contains("t1-only.pdf"));

        app.handle_event(AppEvent::CloseModal).await.unwrap();
        app.handle_event(AppEvent::Character('d')).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_without_file_path_is_refused() {
        let mut repository = MockAttachmentRepository::new();
        repository.expect_list_attachments().returning(|_| {
            let mut file = attachment("f1", "orphan.pdf", None);
            file.file_path = None;
            Ok(vec![file])
        });
        repository.expect_delete_attachment().never();

        let mut app = app(repository);
        app.initialize().await.unwrap();
        app.handle_event(AppEvent::CloseModal).await.unwrap();
        app.handle_event(AppEvent::Character('d')).await.unwrap();

        assert_eq!(app.status_message, None);
        assert_eq!(
            app.error_message.as_deref(),
            Some("Cannot delete orphan.pdf: the service did not report its file path")
        );
        assert_eq!(app.filtered_attachments.len(), 1);
    }

    #[tokio::test]
    async fn test_form_shows_key_hint() {
        let mut repository = MockAttachmentRepository::new();
        repository.expect_list_attachments().returning(|_| Ok(Vec::new()));

        let mut app = app(repository);
        app.initialize().await.unwrap();

        let screen = screen(&mut app);
        assert!(screen.contains("Enter: upload"));
        assert!(!screen.contains("Uploading..."));
    }
}
