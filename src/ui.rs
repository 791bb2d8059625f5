//! Terminal UI for the estimation wizard
//!
//! `WizardApp` turns key events into wizard actions and renders whichever
//! stage the wizard is in. Errors are shown in the footer and leave the
//! stage unchanged.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::error::WizardError;
use crate::estimator::{EstimateResult, Severity};
use crate::format::{format_currency, format_months, format_workers};
use crate::wizard::{FloorPlan, Stage, Wizard, FLOOR_PLAN_EXTENSIONS};

const LOCATION_PLACEHOLDER: &str = "Select Location";

/// Application state for the wizard screen
pub struct WizardApp {
    pub wizard: Wizard,
    pub input: String,
    /// 0 is the placeholder row, locations start at 1
    pub selected: usize,
    pub error_message: Option<String>,
    pub estimated_at: Option<DateTime<Local>>,
    currency_symbol: String,
}

impl WizardApp {
    pub fn new(wizard: Wizard, currency_symbol: impl Into<String>) -> Self {
        Self {
            wizard,
            input: String::new(),
            selected: 0,
            error_message: None,
            estimated_at: None,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Handle keyboard input, returns true when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return true;
        }

        match self.wizard.stage() {
            Stage::Upload | Stage::Area => match key.code {
                KeyCode::Char(c) => self.input.push(c),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
            Stage::Location => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return true,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected < self.wizard.locations().len() {
                        self.selected += 1;
                    }
                }
                KeyCode::Enter => self.submit_location(),
                _ => {}
            },
            Stage::Results => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    return true;
                }
            }
        }

        false
    }

    fn submit_input(&mut self) {
        let input = self.input.trim().to_string();
        let result = match self.wizard.stage() {
            Stage::Upload => FloorPlan::from_path(input)
                .and_then(|floor_plan| self.wizard.select_floor_plan(floor_plan)),
            Stage::Area => self
                .wizard
                .enter_area(&input)
                .and_then(|_| self.wizard.advance()),
            Stage::Location | Stage::Results => Ok(()),
        };
        self.apply(result);
    }

    fn submit_location(&mut self) {
        let location = match self.selected {
            0 => String::new(),
            n => self
                .wizard
                .locations()
                .names()
                .nth(n - 1)
                .map(str::to_string)
                .unwrap_or_default(),
        };

        let result = self.wizard.select_location(&location).map(|_| ());
        if result.is_ok() {
            self.estimated_at = Some(Local::now());
        }
        self.apply(result);
    }

    fn apply(&mut self, result: Result<(), WizardError>) {
        match result {
            Ok(()) => {
                self.input.clear();
                self.error_message = None;
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(10),   // Stage body
                Constraint::Length(3), // Footer
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        match self.wizard.stage() {
            Stage::Upload => self.render_upload(f, chunks[1]),
            Stage::Area => self.render_area(f, chunks[1]),
            Stage::Location => self.render_location(f, chunks[1]),
            Stage::Results => self.render_results(f, chunks[1]),
        }
        self.render_footer(f, chunks[2]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let steps = [Stage::Upload, Stage::Area, Stage::Location, Stage::Results];
        let current = self.wizard.stage();

        let mut progress = Vec::new();
        for (i, step) in steps.iter().enumerate() {
            if i > 0 {
                progress.push(Span::styled(" → ", Style::default().fg(Color::DarkGray)));
            }
            let style = if *step == current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            progress.push(Span::styled(step.to_string(), style));
        }

        let title = vec![
            Line::from(vec![
                Span::styled(
                    "Construction Cost Predictor",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - Comprehensive Project Estimation"),
            ]),
            Line::from(progress),
        ];

        let paragraph = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_upload(&self, f: &mut Frame, area: Rect) {
        let content = vec![
            Line::from(format!(
                "Path to floor plan ({}):",
                FLOOR_PLAN_EXTENSIONS.join(", ")
            )),
            Line::from(""),
            input_line(&self.input),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Upload Floor Plan"),
        );
        f.render_widget(paragraph, area);
    }

    fn render_area(&self, f: &mut Frame, area: Rect) {
        let mut content = Vec::new();
        if let Some(plan) = &self.wizard.details().floor_plan {
            content.push(Line::from(vec![
                Span::raw("Floor plan: "),
                Span::styled(plan.display_name(), Style::default().fg(Color::Green)),
            ]));
            content.push(Line::from(""));
        }
        content.push(Line::from("Enter Project Area (sq ft):"));
        content.push(Line::from(""));
        content.push(input_line(&self.input));

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter Project Details"),
        );
        f.render_widget(paragraph, area);
    }

    fn render_location(&self, f: &mut Frame, area: Rect) {
        let names = std::iter::once(LOCATION_PLACEHOLDER).chain(self.wizard.locations().names());

        let items: Vec<ListItem> = names
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    ListItem::new(name).style(Style::default().fg(Color::DarkGray))
                } else {
                    ListItem::new(name)
                }
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Select Location"),
            )
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        // Selection drives the scroll offset for tables taller than the body
        let mut state = ListState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn render_results(&self, f: &mut Frame, area: Rect) {
        let Some(estimate) = self.wizard.estimate() else {
            let paragraph = Paragraph::new("No estimate available")
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(paragraph, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // Total + breakdown
                Constraint::Length(4), // Insights
                Constraint::Min(6),    // Risks
            ])
            .split(area);

        self.render_cost_breakdown(f, chunks[0], estimate);
        self.render_insights(f, chunks[1], estimate);
        render_risks(f, chunks[2], estimate);
    }

    fn render_cost_breakdown(&self, f: &mut Frame, area: Rect, estimate: &EstimateResult) {
        let symbol = self.currency_symbol.as_str();
        let breakdown = &estimate.cost_breakdown;

        let location = self.wizard.details().location.as_deref().unwrap_or("-");
        let project_area = self.wizard.details().area.unwrap_or_default();

        let rows = vec![
            Row::new(vec![
                Cell::from("Total Project Cost").style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(format_currency(symbol, estimate.total_cost))
                    .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            ]),
            Row::new(vec![Cell::from(""), Cell::from("")]),
            Row::new(vec![
                Cell::from("Material Cost"),
                Cell::from(format_currency(symbol, breakdown.material_cost)),
            ]),
            Row::new(vec![
                Cell::from("Labour Cost"),
                Cell::from(format_currency(symbol, breakdown.labour_cost)),
            ]),
            Row::new(vec![
                Cell::from("Transportation"),
                Cell::from(format_currency(symbol, breakdown.transportation_cost)),
            ]),
            Row::new(vec![
                Cell::from("Overhead"),
                Cell::from(format_currency(symbol, breakdown.overhead_cost)),
            ]),
        ];

        let mut title = format!("Total Cost Breakdown - {} sq ft in {}", project_area, location);
        if let Some(at) = self.estimated_at {
            title.push_str(&format!(" ({})", at.format("%H:%M:%S")));
        }

        let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)])
            .block(Block::default().borders(Borders::ALL).title(title))
            .column_spacing(1);
        f.render_widget(table, area);
    }

    fn render_insights(&self, f: &mut Frame, area: Rect, estimate: &EstimateResult) {
        let content = vec![
            Line::from(vec![
                Span::styled("Construction Time: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format_months(estimate.construction_time)),
            ]),
            Line::from(vec![
                Span::styled("Labour Required:   ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format_workers(estimate.labour_required)),
            ]),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Project Insights"),
        );
        f.render_widget(paragraph, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let content = if let Some(error) = &self.error_message {
            Line::from(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            ))
        } else {
            let hint = match self.wizard.stage() {
                Stage::Upload => "Type a path, Enter to upload | Esc to quit",
                Stage::Area => "Type the area, Enter for next | Esc to quit",
                Stage::Location => "↑/↓ to choose, Enter to estimate | 'q' to quit",
                Stage::Results => "Press 'q' to quit",
            };
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
        };

        let paragraph = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

fn render_risks(f: &mut Frame, area: Rect, estimate: &EstimateResult) {
    let header = Row::new(vec!["Risk", "Severity", "Description"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = estimate
        .risk_analysis
        .iter()
        .map(|risk| {
            Row::new(vec![
                Cell::from(risk.title),
                Cell::from(risk.severity.as_str()).style(Style::default().fg(severity_color(risk.severity))),
                Cell::from(risk.description),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(27),
            Constraint::Length(9),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Risk Analysis"))
    .column_spacing(1);

    f.render_widget(table, area);
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

fn input_line(input: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(input),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ])
}
