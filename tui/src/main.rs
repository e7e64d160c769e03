//! VIGIL ICU Patient Monitor — interactive Ratatui dashboard
//!
//! Overview layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  VIGIL — ICU Patient Monitor                     12:04:58  2024-02-25│
//!   ├─── patient cards (sorted by risk) ──────────────────────────────────┤
//!   │  A-101 | ICU-A  CRITICAL  John Doe …                                │
//!   │    HR 110.0 ↑   RR 22.0   BP 95/60   SpO2 92.0   T 38.5             │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! Detail layout: risk trend chart, risk analysis, and alert escalation on
//! the left; treatment simulator and SBAR report on the right.
//!
//! Two timers run inside the event loop: the vitals fluctuation tick (3 s by
//! default) and the wall-clock refresh (1 s). Both are owned by the loop and
//! die with it.

use std::{
    io,
    path::Path,
    time::{Duration, Instant},
};

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::ThreadRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use vigil_contracts::{Patient, RiskLevel, VigilResult};
use vigil_sim::history::{risk_history, RiskPoint, HISTORY_POINTS};
use vigil_store::{sorted_by_risk, MonitorConfig, PatientStore};

// ── Treatment simulator model ─────────────────────────────────────────────────

/// The four adjustable treatment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TreatmentField {
    Vasopressor,
    FluidBolus,
    Peep,
    Fio2,
}

impl TreatmentField {
    fn next(self) -> Self {
        match self {
            TreatmentField::Vasopressor => TreatmentField::FluidBolus,
            TreatmentField::FluidBolus => TreatmentField::Peep,
            TreatmentField::Peep => TreatmentField::Fio2,
            TreatmentField::Fio2 => TreatmentField::Vasopressor,
        }
    }

    fn label(self) -> &'static str {
        match self {
            TreatmentField::Vasopressor => "Vasopressor Dose (mcg/kg/min)",
            TreatmentField::FluidBolus => "Fluid Bolus (mL/kg)",
            TreatmentField::Peep => "PEEP (cmH2O)",
            TreatmentField::Fio2 => "FiO2 (%)",
        }
    }

    /// (min, max, step) — the slider's structural range constraint.
    fn bounds(self) -> (f64, f64, f64) {
        match self {
            TreatmentField::Vasopressor => (0.0, 1.0, 0.05),
            TreatmentField::FluidBolus => (0.0, 30.0, 1.0),
            TreatmentField::Peep => (5.0, 20.0, 1.0),
            TreatmentField::Fio2 => (21.0, 100.0, 1.0),
        }
    }
}

const TREATMENT_FIELDS: [TreatmentField; 4] = [
    TreatmentField::Vasopressor,
    TreatmentField::FluidBolus,
    TreatmentField::Peep,
    TreatmentField::Fio2,
];

/// Current slider positions. Range-constrained adjustment is the only
/// validation these values ever get.
#[derive(Debug, Clone, Copy)]
struct Treatment {
    vasopressor: f64,
    fluid_bolus: f64,
    peep: f64,
    fio2: f64,
}

impl Treatment {
    fn new() -> Self {
        Self {
            vasopressor: 0.15,
            fluid_bolus: 10.0,
            peep: 8.0,
            fio2: 60.0,
        }
    }

    fn value(&self, field: TreatmentField) -> f64 {
        match field {
            TreatmentField::Vasopressor => self.vasopressor,
            TreatmentField::FluidBolus => self.fluid_bolus,
            TreatmentField::Peep => self.peep,
            TreatmentField::Fio2 => self.fio2,
        }
    }

    /// Move `field` one step up or down, clamped to its range.
    fn adjust(&mut self, field: TreatmentField, direction: f64) {
        let (min, max, step) = field.bounds();
        let next = (self.value(field) + direction * step).clamp(min, max);
        match field {
            TreatmentField::Vasopressor => self.vasopressor = next,
            TreatmentField::FluidBolus => self.fluid_bolus = next,
            TreatmentField::Peep => self.peep = next,
            TreatmentField::Fio2 => self.fio2 = next,
        }
    }
}

// ── App state ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Overview,
    Detail,
}

struct App {
    store: PatientStore,
    config: MonitorConfig,
    screen: Screen,

    // Overview: cursor index into the risk-sorted list.
    cursor: usize,

    // Detail: frozen history series + simulator state, rebuilt on entry.
    history: Vec<RiskPoint>,
    treatment: Treatment,
    focus: TreatmentField,

    last_vitals_tick: Instant,
    rng: ThreadRng,
}

impl App {
    fn new(config: MonitorConfig) -> Self {
        Self {
            store: PatientStore::seeded(),
            config,
            screen: Screen::Overview,
            cursor: 0,
            history: Vec::new(),
            treatment: Treatment::new(),
            focus: TreatmentField::Vasopressor,
            last_vitals_tick: Instant::now(),
            rng: rand::thread_rng(),
        }
    }

    /// The roster in display order.
    fn sorted_roster(&self) -> Vec<Patient> {
        sorted_by_risk(&self.store.snapshot())
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        let len = self.sorted_roster().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// Open the detail view on the patient under the cursor.
    ///
    /// Generates a fresh 48-hour history series; the series stays frozen
    /// while the live vitals keep ticking underneath it.
    fn open_detail(&mut self) {
        let sorted = self.sorted_roster();
        let Some(patient) = sorted.get(self.cursor) else {
            return;
        };
        self.store.select_patient(&patient.id);
        self.history = risk_history(
            patient.risk_scores.mortality,
            chrono::Utc::now(),
            &mut self.rng,
        );
        self.treatment = Treatment::new();
        self.focus = TreatmentField::Vasopressor;
        self.screen = Screen::Detail;
    }

    /// Back to the overview, discarding the generated series.
    fn close_detail(&mut self) {
        self.store.clear_selection();
        self.history.clear();
        self.screen = Screen::Overview;
    }

    /// Acknowledge the patient under the cursor.
    ///
    /// Mirrors the overview's button rule: only a critical, unacknowledged
    /// patient has anything to acknowledge.
    fn acknowledge_under_cursor(&mut self) {
        let sorted = self.sorted_roster();
        let Some(patient) = sorted.get(self.cursor) else {
            return;
        };
        if patient.risk_level == RiskLevel::Critical && !patient.is_acknowledged {
            self.store.acknowledge(&patient.id);
        }
    }

    /// Apply the fluctuation tick if its interval has elapsed.
    fn tick_vitals_if_due(&mut self) {
        if self.last_vitals_tick.elapsed() >= self.config.vitals_interval() {
            self.store.advance_vitals(&mut self.rng);
            self.last_vitals_tick = Instant::now();
        }
    }
}

// ── Styling helpers ───────────────────────────────────────────────────────────

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Critical => Color::Red,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::Low => Color::Green,
    }
}

fn risk_badge(level: RiskLevel) -> Span<'static> {
    Span::styled(
        format!(" {} ", level.as_str().to_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(risk_color(level))
            .add_modifier(Modifier::BOLD),
    )
}

/// Trend marker next to the heart rate: ↑ above 100 bpm, ↓ below 60.
fn heart_rate_arrow(heart_rate: f64) -> Option<Span<'static>> {
    if heart_rate > 100.0 {
        Some(Span::styled(" ↑", Style::default().fg(Color::Red)))
    } else if heart_rate < 60.0 {
        Some(Span::styled(" ↓", Style::default().fg(Color::Blue)))
    } else {
        None
    }
}

// ── Rendering: shared chrome ──────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Overview => render_overview(f, app),
        Screen::Detail => render_detail(f, app),
    }
}

fn render_header(f: &mut Frame, area: Rect, subtitle: &str) {
    let now = Local::now();
    let clock = format!(
        "{}  {}",
        now.format("%H:%M:%S"),
        now.format("%Y-%m-%d")
    );

    // Pad the title region so the clock lands on the right edge.
    let title = format!("VIGIL — ICU Patient Monitor    {}", subtitle);
    let inner_width = area.width.saturating_sub(2) as usize;
    let pad = inner_width
        .saturating_sub(title.chars().count())
        .saturating_sub(clock.chars().count());

    let line = Line::from(vec![
        Span::styled(
            "VIGIL — ICU Patient Monitor    ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
        Span::raw(" ".repeat(pad)),
        Span::styled(clock, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, area: Rect, bindings: &[(&str, &str)]) {
    let mut spans: Vec<Span> = Vec::new();
    for (key, action) in bindings {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(format!("{}  ", action)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Rendering: overview ───────────────────────────────────────────────────────

fn render_overview(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // patient cards
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, chunks[0], "Real-time patient monitoring");
    render_patient_cards(f, chunks[1], app);
    render_footer(
        f,
        chunks[2],
        &[
            ("[↑/↓]", "Select"),
            ("[Enter]", "Details"),
            ("[a]", "Acknowledge"),
            ("[q]", "Quit"),
        ],
    );
}

fn render_patient_cards(f: &mut Frame, area: Rect, app: &App) {
    let sorted = app.sorted_roster();
    let mut items: Vec<ListItem> = Vec::new();

    for (i, patient) in sorted.iter().enumerate() {
        let selected = i == app.cursor;
        let alerting = patient.risk_level == RiskLevel::Critical && !patient.is_acknowledged;

        // ── Line 1: bed, room, badge, identity ───────────────────────────────
        let marker = if selected { "▸ " } else { "  " };
        let id_style = if alerting {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut line1 = vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{} | {}  ", patient.bed_number, patient.room),
                id_style,
            ),
            risk_badge(patient.risk_level),
            Span::styled(
                format!(
                    "  {}  {}y  {}kg  {}m²  {}",
                    patient.name,
                    patient.age,
                    patient.vital_signs.weight,
                    patient.vital_signs.bsa,
                    patient.doctor_name
                ),
                Style::default().fg(Color::Gray),
            ),
        ];
        if alerting {
            line1.push(Span::styled(
                "  ⚠ UNACKNOWLEDGED",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        items.push(ListItem::new(Line::from(line1)));

        // ── Line 2: vitals ───────────────────────────────────────────────────
        let v = &patient.vital_signs;
        let mut line2 = vec![
            Span::raw("    "),
            Span::styled("HR ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", v.heart_rate),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" bpm", Style::default().fg(Color::DarkGray)),
        ];
        if let Some(arrow) = heart_rate_arrow(v.heart_rate) {
            line2.push(arrow);
        }
        line2.extend([
            Span::styled("   RR ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:.1}", v.respiratory_rate), Style::default().fg(Color::White)),
            Span::styled("/min", Style::default().fg(Color::DarkGray)),
            Span::styled("   BP ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0}/{:.0}", v.blood_pressure.systolic, v.blood_pressure.diastolic),
                Style::default().fg(Color::White),
            ),
            Span::styled("   SpO2 ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:.1}%", v.spo2), Style::default().fg(Color::White)),
            Span::styled("   T ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:.1}°C", v.temperature), Style::default().fg(Color::White)),
        ]);
        items.push(ListItem::new(Line::from(line2)));

        // ── Line 3: risk + stay ──────────────────────────────────────────────
        items.push(ListItem::new(Line::from(vec![
            Span::raw("    "),
            Span::styled("Mortality ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0}%", patient.risk_scores.mortality),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   APACHE ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:.0}", patient.risk_scores.apache), Style::default().fg(Color::White)),
            Span::styled("   LOS ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}d", patient.length_of_stay),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("   {}", patient.diagnosis),
                Style::default().fg(Color::Gray),
            ),
        ])));

        items.push(ListItem::new(""));
    }

    let block = Block::default()
        .title(" Patients (by risk) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(List::new(items).block(block), area);
}

// ── Rendering: detail ─────────────────────────────────────────────────────────

fn render_detail(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(20),   // two-column body
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    let Some(patient) = app.store.selected_patient() else {
        // Selection vanished; nothing sensible to draw.
        render_header(f, chunks[0], "Patient detail");
        render_footer(f, chunks[2], &[("[Esc]", "Back"), ("[q]", "Quit")]);
        return;
    };

    let subtitle = format!(
        "{} — {} | {}  ({})",
        patient.name, patient.bed_number, patient.room, patient.diagnosis
    );
    render_header(f, chunks[0], &subtitle);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // risk trend chart
            Constraint::Percentage(27), // risk analysis
            Constraint::Percentage(28), // alert escalation
        ])
        .split(columns[0]);

    render_risk_chart(f, left[0], app);
    render_risk_analysis(f, left[1], &patient);
    render_alert_escalation(f, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // treatment simulator
            Constraint::Percentage(40), // SBAR
        ])
        .split(columns[1]);

    render_treatment_simulator(f, right[0], app, &patient);
    render_sbar(f, right[1], &patient);

    render_footer(
        f,
        chunks[2],
        &[
            ("[Tab]", "Slider"),
            ("[←/→]", "Adjust"),
            ("[Esc]", "Back"),
            ("[q]", "Quit"),
        ],
    );
}

fn render_risk_chart(f: &mut Frame, area: Rect, app: &App) {
    let points: Vec<(f64, f64)> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();

    let dataset = Dataset::default()
        .name("Risk Score")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(" Risk Score Trend (48h) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .title("Time")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (HISTORY_POINTS - 1) as f64])
                .labels(vec![
                    Span::raw("-48h"),
                    Span::raw("-24h"),
                    Span::raw("now"),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Risk %")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 100.0])
                .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
        );

    f.render_widget(chart, area);
}

fn render_risk_analysis(f: &mut Frame, area: Rect, patient: &Patient) {
    // MAP status follows the live systolic pressure; the other two factors
    // are narrative fixtures of the bedside display.
    let map_status = if patient.vital_signs.blood_pressure.systolic < 65.0 {
        ("Critical", Color::Red)
    } else {
        ("Normal", Color::Green)
    };

    let factors: [(&str, &str, Color, &str, u8); 3] = [
        (
            "MAP <65mmHg (45m)",
            map_status.0,
            map_status.1,
            "Sustained hypotension despite current interventions",
            32,
        ),
        (
            "Lactate Δ+1.7mmol/L",
            "Rising",
            Color::Yellow,
            "Rising lactate indicates worsening tissue perfusion",
            28,
        ),
        (
            "FiO2 ↑40% in 2h",
            "Increasing",
            Color::Yellow,
            "Increasing oxygen requirements suggest respiratory deterioration",
            22,
        ),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (metric, status, color, description, contribution) in factors {
        lines.push(Line::from(vec![
            Span::styled("  ↗ ", Style::default().fg(Color::Red)),
            Span::styled(metric, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(status, Style::default().fg(color)),
            Span::styled(
                format!("  ({}% contribution)", contribution),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", description),
            Style::default().fg(Color::Gray),
        )));
    }

    let title = format!(
        " Risk Analysis — {:.0}% Risk ",
        patient.risk_scores.mortality
    );
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_alert_escalation(f: &mut Frame, area: Rect) {
    struct EscalationLevel {
        level: u8,
        threshold: &'static str,
        in_progress: bool,
        actions: &'static [&'static str],
        timestamp: &'static str,
    }

    let levels = [
        EscalationLevel {
            level: 3,
            threshold: "≥50% Risk",
            in_progress: true,
            actions: &["Auto-Page Resident", "Attending Video Call", "Protocol Checklist"],
            timestamp: "Initiated 5 minutes ago",
        },
        EscalationLevel {
            level: 2,
            threshold: "≥26% Risk",
            in_progress: false,
            actions: &["Mobile Push Notification", "AI SBAR to Charge Nurse"],
            timestamp: "Completed 15 minutes ago",
        },
        EscalationLevel {
            level: 1,
            threshold: "≥25% Risk",
            in_progress: false,
            actions: &["In-Dashboard Flag", "Protocol Checklist"],
            timestamp: "Completed 30 minutes ago",
        },
    ];

    let mut lines: Vec<Line> = Vec::new();
    for level in &levels {
        let (status, color) = if level.in_progress {
            ("In-Progress", Color::Yellow)
        } else {
            ("Completed", Color::Green)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  Level {} ", level.level),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("• {}  ", level.threshold), Style::default().fg(Color::Gray)),
            Span::styled(status, Style::default().fg(color)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {} — {}", level.actions.join(", "), level.timestamp),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Alert Escalation ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_treatment_simulator(f: &mut Frame, area: Rect, app: &App, patient: &Patient) {
    let title = format!(
        " Treatment Simulator — {:.0}% Projected Risk ",
        patient.risk_scores.mortality
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // One label row + one gauge row per slider.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, field) in TREATMENT_FIELDS.iter().enumerate() {
        let focused = app.focus == *field;
        let (min, max, _) = field.bounds();
        let value = app.treatment.value(*field);

        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "▸ " } else { "  " };
        let label = Paragraph::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(field.label(), label_style),
            Span::styled(
                format!("   {} — {}", min, max),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        f.render_widget(label, rows[i * 2]);

        let ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }))
            .ratio(ratio)
            .label(format!("{}", value));
        f.render_widget(gauge, rows[i * 2 + 1]);
    }
}

fn render_sbar(f: &mut Frame, area: Rect, patient: &Patient) {
    let first_name = patient.name.split(' ').next().unwrap_or(patient.name.as_str());

    let sections = [
        (
            "Situation",
            format!("{}yo {} with {}", patient.age, first_name, patient.diagnosis),
        ),
        ("Background", "CRRT Day 3, P/F ratio 189".to_string()),
        (
            "Assessment",
            format!(
                "{:.0}% mortality risk - rising lactate",
                patient.risk_scores.mortality
            ),
        ),
        ("Recommendation", "Consider CVVHDF + broaden abx".to_string()),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (heading, body) in sections {
        lines.push(Line::from(Span::styled(
            format!("  {}", heading),
            Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", body),
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" SBAR Report ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightBlue)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Load `monitor.toml` from the working directory if present.
fn load_config() -> VigilResult<MonitorConfig> {
    let path = Path::new("monitor.toml");
    if path.exists() {
        MonitorConfig::from_file(path)
    } else {
        Ok(MonitorConfig::default())
    }
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best-effort terminal restore on panic.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        // Wake for whichever comes first: the next vitals tick or the next
        // clock refresh.  The redraw at the top of the loop is the clock tick.
        let until_vitals = app
            .config
            .vitals_interval()
            .saturating_sub(app.last_vitals_tick.elapsed());
        let timeout = until_vitals.min(app.config.clock_interval());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Ctrl-C quits from either screen.
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }

                match app.screen {
                    Screen::Overview => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
                        KeyCode::Enter => app.open_detail(),
                        KeyCode::Char('a') | KeyCode::Char('A') => {
                            app.acknowledge_under_cursor()
                        }
                        _ => {}
                    },
                    Screen::Detail => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
                        KeyCode::Tab => app.focus = app.focus.next(),
                        KeyCode::Left => app.treatment.adjust(app.focus, -1.0),
                        KeyCode::Right => app.treatment.adjust(app.focus, 1.0),
                        _ => {}
                    },
                }
            }
        }

        // Apply the fluctuation tick on schedule, on either screen.
        app.tick_vitals_if_due();
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treatment_sliders_clamp_to_their_ranges() {
        let mut treatment = Treatment::new();

        for _ in 0..100 {
            treatment.adjust(TreatmentField::Vasopressor, 1.0);
        }
        assert_eq!(treatment.vasopressor, 1.0);

        for _ in 0..100 {
            treatment.adjust(TreatmentField::Peep, -1.0);
        }
        assert_eq!(treatment.peep, 5.0);

        treatment.adjust(TreatmentField::Fio2, -1.0);
        assert!(treatment.fio2 >= 21.0);
    }

    #[test]
    fn treatment_defaults_match_the_simulator() {
        let treatment = Treatment::new();
        assert_eq!(treatment.vasopressor, 0.15);
        assert_eq!(treatment.fluid_bolus, 10.0);
        assert_eq!(treatment.peep, 8.0);
        assert_eq!(treatment.fio2, 60.0);
    }

    #[test]
    fn heart_rate_arrow_thresholds() {
        assert!(heart_rate_arrow(110.0).is_some());
        assert!(heart_rate_arrow(55.0).is_some());
        assert!(heart_rate_arrow(80.0).is_none());
    }

    #[test]
    fn tab_cycles_through_all_four_sliders() {
        let mut field = TreatmentField::Vasopressor;
        let mut seen = vec![field];
        for _ in 0..3 {
            field = field.next();
            seen.push(field);
        }
        assert_eq!(seen, TREATMENT_FIELDS.to_vec());
        assert_eq!(field.next(), TreatmentField::Vasopressor);
    }
}
