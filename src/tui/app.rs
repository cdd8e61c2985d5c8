//! Main application state and rendering

use crate::data::content::{campaign, path_info, PATHS};
use crate::data::{
    impact_energy, simulate_crater, AsteroidData, CraterData, EarthquakeData, Environment,
    NasaUsgsFeed, TsunamiData,
};
use crate::game::dialogue::DialogueReveal;
use crate::game::oracle::{self, Analysis, FinalReport};
use crate::game::{EngineSignal, PlayPhase, SoundCue};
use crate::tui::widgets::{DataReadout, ThreatBar};
use crate::tui::{
    create_content_layout, create_main_layout, create_story_layout, styled_block, Theme,
    HELP_TEXT, LOGO, SMALL_LOGO,
};
use crate::{Result, StoryEngine};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

/// Milliseconds between revealed characters
const TYPE_INTERVAL: Duration = Duration::from_millis(25);

/// How long the oracle pretends to think
const ANALYZING_DELAY: Duration = Duration::from_millis(1500);

/// Impact point used for the projection models, mid North Atlantic
const IMPACT_LAT: f64 = 31.0;
const IMPACT_LON: f64 = -42.0;

/// Application state
pub struct App {
    pub engine: StoryEngine,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    pub choice_state: ListState,
    pub mission_log: Vec<String>,

    reveal: DialogueReveal,
    rng: StdRng,
    analysis: Option<Analysis>,
    analyzing_since: Option<Instant>,
    report: Option<FinalReport>,
    started: bool,
    last_type_tick: Instant,

    // Environment readouts, fetched once at startup
    pub asteroid: AsteroidData,
    pub earthquake: EarthquakeData,
    pub tsunami: TsunamiData,
    pub crater: CraterData,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Playing,
    Report,
    Help,
}

impl App {
    pub fn new() -> Result<Self> {
        let engine = StoryEngine::new(campaign()?);

        // Live data unless the feed cannot be built or is opted out;
        // every readout degrades to the fixed fallback on its own.
        let environment = match NasaUsgsFeed::new() {
            Ok(feed) if std::env::var_os("ASTROLAB_OFFLINE").is_none() => {
                Environment::new(Box::new(feed))
            }
            _ => Environment::offline(),
        };
        let asteroid = environment.asteroid();
        let energy = impact_energy(asteroid.diameter_m, asteroid.velocity_kms);
        let earthquake = environment.equivalent_earthquake(energy);
        let tsunami = environment.tsunami(IMPACT_LAT, IMPACT_LON, asteroid.diameter_m);
        let crater = simulate_crater(asteroid.diameter_m, asteroid.velocity_kms);

        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Ok(Self {
            engine,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::MainMenu,
            menu_state,
            choice_state: ListState::default(),
            mission_log: vec!["[SYSTEM] AstroLab console online.".to_string()],
            reveal: DialogueReveal::new(&[]),
            rng: StdRng::from_entropy(),
            analysis: None,
            analyzing_since: None,
            report: None,
            started: false,
            last_type_tick: Instant::now(),
            asteroid,
            earthquake,
            tsunami,
            crater,
        })
    }

    /// Handle keyboard input and advance the typewriter
    pub fn handle_input(&mut self) -> Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                match key.code {
                    KeyCode::Char('q') if self.current_screen == Screen::MainMenu => {
                        self.running = false;
                        return Ok(false);
                    }
                    KeyCode::Char('?') => {
                        self.show_help = !self.show_help;
                    }
                    KeyCode::Esc => {
                        if self.show_help {
                            self.show_help = false;
                        } else {
                            self.current_screen = Screen::MainMenu;
                        }
                    }
                    KeyCode::Up => self.navigate_up(),
                    KeyCode::Down => self.navigate_down(),
                    KeyCode::Enter => self.handle_enter()?,
                    KeyCode::Char(' ') if self.current_screen == Screen::Playing => {
                        self.reveal.skip();
                    }
                    KeyCode::Char(c @ '1'..='9') if self.current_screen == Screen::Playing => {
                        let index = c as usize - '1' as usize;
                        self.pick_choice(index)?;
                    }
                    KeyCode::Char('o') if self.current_screen == Screen::Playing => {
                        self.analysis = None;
                        self.analyzing_since = Some(Instant::now());
                        self.mission_log.push("[ORACLE] ANALYZING...".to_string());
                    }
                    KeyCode::Char('r') if self.current_screen == Screen::Report => {
                        self.engine.replay()?;
                        self.process_signals();
                        self.report = None;
                        self.current_screen = Screen::Playing;
                    }
                    _ => {}
                }
            }
        }

        // Typewriter pacing
        if self.current_screen == Screen::Playing
            && self.last_type_tick.elapsed() >= TYPE_INTERVAL
        {
            self.reveal.tick();
            self.last_type_tick = Instant::now();
        }

        // Oracle delivers after its dramatic pause
        if let Some(since) = self.analyzing_since {
            if since.elapsed() >= ANALYZING_DELAY {
                self.analysis = Some(oracle::analyze(
                    self.engine.state().current_act,
                    &mut self.rng,
                ));
                self.analyzing_since = None;
            }
        }

        Ok(true)
    }

    fn navigate_up(&mut self) {
        match self.current_screen {
            Screen::MainMenu => {
                let i = self.menu_state.selected().unwrap_or(0);
                self.menu_state.select(Some(i.saturating_sub(1)));
            }
            Screen::Playing => {
                let i = self.choice_state.selected().unwrap_or(0);
                self.choice_state.select(Some(i.saturating_sub(1)));
            }
            _ => {}
        }
    }

    fn navigate_down(&mut self) {
        match self.current_screen {
            Screen::MainMenu => {
                let i = self.menu_state.selected().unwrap_or(0);
                self.menu_state.select(Some((i + 1).min(3)));
            }
            Screen::Playing => {
                let count = self
                    .engine
                    .current_node()
                    .map_or(0, |n| n.choices.len());
                let i = self.choice_state.selected().unwrap_or(0);
                self.choice_state
                    .select(Some((i + 1).min(count.saturating_sub(1))));
            }
            _ => {}
        }
    }

    fn handle_enter(&mut self) -> Result<()> {
        match self.current_screen {
            Screen::MainMenu => match self.menu_state.selected() {
                Some(0) => {
                    // Continue, or start if nothing is live
                    if self.started && self.engine.state().phase != PlayPhase::Ended {
                        self.current_screen = Screen::Playing;
                    } else {
                        self.start_playthrough()?;
                    }
                }
                Some(1) => self.start_playthrough()?,
                Some(2) => self.current_screen = Screen::Help,
                Some(3) => self.running = false,
                _ => {}
            },
            Screen::Playing => match self.engine.state().phase {
                PlayPhase::Dialogue => {
                    if self.reveal.advance() {
                        self.engine.dialogue_complete();
                        self.choice_state.select(Some(0));
                    }
                }
                PlayPhase::AwaitingChoice => {
                    let index = self.choice_state.selected().unwrap_or(0);
                    self.pick_choice(index)?;
                }
                PlayPhase::Ended => {
                    self.current_screen = Screen::Report;
                }
            },
            Screen::Report | Screen::Help => {
                self.current_screen = Screen::MainMenu;
            }
        }
        Ok(())
    }

    fn start_playthrough(&mut self) -> Result<()> {
        if self.started {
            self.engine.replay()?;
        } else {
            self.engine.start()?;
            self.started = true;
        }
        self.report = None;
        self.process_signals();
        self.current_screen = Screen::Playing;
        Ok(())
    }

    fn pick_choice(&mut self, index: usize) -> Result<()> {
        if self.engine.state().phase != PlayPhase::AwaitingChoice {
            return Ok(());
        }
        let count = self
            .engine
            .current_node()
            .map_or(0, |n| n.choices.len());
        if index >= count {
            return Ok(());
        }
        self.engine.apply_choice(index)?;
        self.process_signals();
        Ok(())
    }

    /// Drain engine signals into UI state and the mission log
    fn process_signals(&mut self) {
        for signal in self.engine.drain_signals() {
            match signal {
                EngineSignal::SceneChanged { act, scene } => {
                    if let Some(node) = self.engine.current_node() {
                        self.reveal = DialogueReveal::new(&node.dialogue);
                    }
                    self.analysis = None;
                    self.analyzing_since = None;
                    self.choice_state = ListState::default();
                    self.last_type_tick = Instant::now();
                    self.mission_log
                        .push(format!("[SCENE] ACT {} · SCENE {}", act, scene));
                }
                EngineSignal::ThreatChanged(threat) => {
                    self.mission_log
                        .push(format!("[ALERT] THREAT LEVEL {}", threat));
                }
                EngineSignal::Sound(cue) => {
                    let name = match cue {
                        SoundCue::NewAct => "ACT STING".to_string(),
                        SoundCue::Narration(act) => format!("NARRATION {}", act),
                        SoundCue::ImpactWarning => "IMPACT WARNING".to_string(),
                        SoundCue::ChoiceSelect => "CHOICE".to_string(),
                        SoundCue::BadgeUnlock => "BADGE".to_string(),
                    };
                    self.mission_log.push(format!("[AUDIO] {}", name));
                }
                EngineSignal::DataPointObserved(data_point) => {
                    self.mission_log
                        .push(format!("[DATA] {}: {}", data_point.kind, data_point.value));
                }
                // Seam for visualizer-style consumers; the TUI reads
                // the engine state directly instead
                EngineSignal::Snapshot(_) => {}
                EngineSignal::PathUnlocked(path) => {
                    let name = path_info(&path).map_or(path.clone(), |p| p.name.to_string());
                    self.mission_log.push(format!("[UNLOCKED] {}", name));
                }
                EngineSignal::PlaythroughEnded(_) => {
                    self.report =
                        Some(oracle::final_report(self.engine.state(), &mut self.rng));
                    self.current_screen = Screen::Report;
                    self.mission_log
                        .push("[MISSION] PLAYTHROUGH COMPLETE".to_string());
                }
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::MainMenu => self.render_main_menu(frame),
            Screen::Playing => self.render_game(frame),
            Screen::Report => self.render_report(frame),
            Screen::Help => self.render_help(frame),
        }

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_main_menu(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg)),
            area,
        );

        let menu_height: u16 = 8;

        if area.height < 28 {
            // Compact mode for small terminals
            let title = Paragraph::new("═══ ASTROLAB ═══")
                .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(title, Rect::new(0, 1, area.width, 1));

            let subtitle = Paragraph::new("A Planetary Defense Story")
                .style(Style::default().fg(self.theme.header))
                .alignment(Alignment::Center);
            frame.render_widget(subtitle, Rect::new(0, 2, area.width, 1));

            let menu_y = (area.height.saturating_sub(menu_height)) / 2;
            let menu_area = Rect::new(
                area.width / 4,
                menu_y.max(4),
                area.width / 2,
                menu_height.min(area.height.saturating_sub(menu_y).saturating_sub(2)),
            );
            self.render_menu_list(frame, menu_area);
            self.render_menu_footer(frame, area);
            return;
        }

        let logo_height = LOGO.lines().count() as u16;
        let total_height = logo_height + menu_height + 2;
        let start_y = area.height.saturating_sub(total_height) / 2;

        let logo_area = Rect::new(
            area.x,
            start_y,
            area.width,
            logo_height.min(area.height.saturating_sub(start_y)),
        );
        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent))
            .alignment(Alignment::Center);
        frame.render_widget(logo, logo_area);

        let menu_y = start_y + logo_height + 1;
        let menu_area = Rect::new(
            area.width / 4,
            menu_y.min(area.height.saturating_sub(menu_height).saturating_sub(1)),
            area.width / 2,
            menu_height.min(area.height.saturating_sub(menu_y).saturating_sub(1)),
        );
        self.render_menu_list(frame, menu_area);
        self.render_menu_footer(frame, area);
    }

    fn render_menu_list(&mut self, frame: &mut Frame, area: Rect) {
        let continue_label = if self.started && self.engine.state().phase != PlayPhase::Ended {
            "  ▶ Continue"
        } else {
            "  ▶ Begin"
        };
        let menu_items = vec![
            ListItem::new(continue_label),
            ListItem::new("  ▶ New Playthrough"),
            ListItem::new("  ▶ Help"),
            ListItem::new("  ▶ Quit"),
        ];

        let menu = List::new(menu_items)
            .block(styled_block("Mission Control", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("→ ");

        frame.render_stateful_widget(menu, area, &mut self.menu_state);
    }

    fn render_menu_footer(&self, frame: &mut Frame, area: Rect) {
        if area.height > 1 {
            let unlocked = self.engine.state().unlocked_paths.len();
            let footer = Paragraph::new(format!(
                "Paths unlocked: {}/{}  |  ? for help  |  q to quit",
                unlocked,
                PATHS.len()
            ))
            .style(Style::default().fg(self.theme.border))
            .alignment(Alignment::Center);
            frame.render_widget(
                footer,
                Rect::new(0, area.height.saturating_sub(1), area.width, 1),
            );
        }
    }

    fn render_game(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let chunks = create_main_layout(area);
        self.render_header(frame, chunks[0]);

        let content = create_content_layout(chunks[1]);
        self.render_side_panel(frame, content[0]);

        let story = create_story_layout(content[1]);
        self.render_dialogue(frame, story[0]);
        self.render_choices(frame, story[1]);

        self.render_mission_log(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let state = self.engine.state();
        let block = styled_block(SMALL_LOGO, &self.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        let position = Paragraph::new(format!(
            "ACT {} · SCENE {}",
            state.current_act, state.current_scene
        ))
        .style(Style::default().fg(self.theme.header).add_modifier(Modifier::BOLD));
        frame.render_widget(position, cols[0]);

        frame.render_widget(
            ThreatBar::new(state.threat())
                .eta_days(self.asteroid.eta_days)
                .blink(true),
            cols[1],
        );
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Oracle analysis
                Constraint::Min(6),    // Data readout
                Constraint::Length(5), // Unlocked paths
            ])
            .split(area);

        // Oracle analysis
        let analysis_block = styled_block("Oracle", &self.theme);
        let analysis_inner = analysis_block.inner(panels[0]);
        frame.render_widget(analysis_block, panels[0]);
        if self.analyzing_since.is_some() {
            let busy = Paragraph::new("ANALYZING...")
                .style(Style::default().fg(self.theme.warning).add_modifier(Modifier::SLOW_BLINK));
            frame.render_widget(busy, analysis_inner);
        } else if let Some(analysis) = &self.analysis {
            let lines = vec![
                Line::from(vec![
                    Span::styled("RISK: ", Style::default().fg(self.theme.border)),
                    Span::styled(
                        format!("{}%", analysis.risk_percent),
                        Style::default().fg(self.theme.alert).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("CONFIDENCE: ", Style::default().fg(self.theme.border)),
                    Span::styled(
                        analysis.confidence.to_string(),
                        Style::default().fg(self.theme.warning),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    analysis.suggestion.clone(),
                    Style::default().fg(self.theme.fg),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), analysis_inner);
        } else {
            let hint = Paragraph::new("press o to consult")
                .style(Style::default().fg(self.theme.border));
            frame.render_widget(hint, analysis_inner);
        }

        // Collected data
        let data_block = styled_block("Mission Data", &self.theme);
        let data_inner = data_block.inner(panels[1]);
        frame.render_widget(data_block, panels[1]);
        let mut entries: Vec<_> = self
            .engine
            .state()
            .data_collected
            .values()
            .cloned()
            .collect();
        entries.sort_by_key(|d| d.kind as u8);
        frame.render_widget(DataReadout::new(entries).accent(self.theme.accent), data_inner);

        // Unlocked paths
        let paths_block = styled_block("Paths", &self.theme);
        let paths_inner = paths_block.inner(panels[2]);
        frame.render_widget(paths_block, panels[2]);
        let lines: Vec<Line> = PATHS
            .iter()
            .map(|p| {
                if self.engine.state().unlocked_paths.contains(p.id) {
                    Line::from(Span::styled(
                        format!("{} {}", p.badge, p.name),
                        Style::default().fg(self.theme.success),
                    ))
                } else {
                    Line::from(Span::styled("· ???", Style::default().fg(self.theme.border)))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), paths_inner);
    }

    fn render_dialogue(&self, frame: &mut Frame, area: Rect) {
        let Some(node) = self.engine.current_node() else {
            return;
        };
        let info = node.character.info();

        let block = styled_block(info.name, &self.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                info.title,
                Style::default().fg(self.theme.header).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
        ];
        for text in self.reveal.visible_lines() {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(self.theme.fg),
            )));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    fn render_choices(&mut self, frame: &mut Frame, area: Rect) {
        let block = styled_block("Your Call", &self.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.engine.state().phase != PlayPhase::AwaitingChoice {
            let hint = Paragraph::new("▼ Enter to continue, Space to skip")
                .style(Style::default().fg(self.theme.border));
            frame.render_widget(hint, inner);
            return;
        }

        let Some(node) = self.engine.current_node() else {
            return;
        };
        let items: Vec<ListItem> = node
            .choices
            .iter()
            .enumerate()
            .map(|(i, c)| ListItem::new(format!("  {}. {}", i + 1, c.text)))
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("→ ");

        frame.render_stateful_widget(list, inner, &mut self.choice_state);
    }

    fn render_mission_log(&self, frame: &mut Frame, area: Rect) {
        let block = styled_block("Mission Log", &self.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let last = self
            .mission_log
            .last()
            .map(String::as_str)
            .unwrap_or("");
        let log = Paragraph::new(last).style(Style::default().fg(self.theme.border));
        frame.render_widget(log, inner);
    }

    fn render_report(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(6),  // Ending banner
                Constraint::Length(8),  // Debrief numbers
                Constraint::Min(8),     // Impact projection + paths
                Constraint::Length(2),  // Footer
            ])
            .split(area);

        let Some(report) = &self.report else {
            return;
        };

        let ending = self.engine.state().ending.as_deref().and_then(path_info);
        let banner_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                report.ending_name.clone(),
                Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                ending.map_or("", |p| p.description),
                Style::default().fg(self.theme.fg),
            )),
        ];
        let banner = Paragraph::new(banner_lines)
            .alignment(Alignment::Center)
            .block(styled_block("Mission Debrief", &self.theme));
        frame.render_widget(banner, chunks[0]);

        let numbers = vec![
            Line::from(report.verdict.clone()),
            Line::from(""),
            Line::from(format!("DECISIONS MADE ........ {}", report.decisions)),
            Line::from(format!("DATA POINTS ........... {}", report.data_points)),
            Line::from(format!(
                "PATHS UNLOCKED ........ {}/{}",
                report.paths_unlocked,
                PATHS.len()
            )),
            Line::from(format!(
                "FILED ................. {}",
                report.generated_at.format("%Y-%m-%d %H:%M UTC")
            )),
        ];
        let debrief = Paragraph::new(numbers)
            .style(Style::default().fg(self.theme.fg))
            .block(styled_block("Summary", &self.theme));
        frame.render_widget(debrief, chunks[1]);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);

        let projection = vec![
            Line::from(format!("OBJECT ........... {}", self.asteroid.name)),
            Line::from(format!("DIAMETER ......... {:.0} M", self.asteroid.diameter_m)),
            Line::from(format!("VELOCITY ......... {:.1} KM/S", self.asteroid.velocity_kms)),
            Line::from(format!(
                "GROUND SHOCK ..... M {:.1} ({})",
                self.earthquake.magnitude, self.earthquake.location
            )),
            Line::from(format!(
                "TSUNAMI .......... {:.0} M WAVE / {}",
                self.tsunami.wave_height_m, self.tsunami.casualties
            )),
            Line::from(format!(
                "CRATER ........... {:.1} KM / EJECTA {:.0} KM",
                self.crater.diameter_km, self.crater.ejecta_range_km
            )),
        ];
        let projection = Paragraph::new(projection)
            .style(Style::default().fg(self.theme.fg))
            .block(styled_block("Impact Projection", &self.theme));
        frame.render_widget(projection, cols[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(5)])
            .split(cols[1]);

        let timeline: Vec<Line> = self
            .engine
            .state()
            .choice_history
            .iter()
            .map(|r| {
                Line::from(format!(
                    "{}.{} {} {}",
                    r.act,
                    r.scene,
                    r.at.format("%H:%M:%S"),
                    r.outcome
                ))
            })
            .collect();
        let timeline = Paragraph::new(timeline)
            .style(Style::default().fg(self.theme.fg))
            .block(styled_block("Decision Timeline", &self.theme));
        frame.render_widget(timeline, right[0]);

        let path_lines: Vec<Line> = PATHS
            .iter()
            .map(|p| {
                if self.engine.state().unlocked_paths.contains(p.id) {
                    Line::from(Span::styled(
                        format!("{} {}", p.badge, p.name),
                        Style::default().fg(self.theme.success).add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        "· LOCKED",
                        Style::default().fg(self.theme.border),
                    ))
                }
            })
            .collect();
        let paths = Paragraph::new(path_lines).block(styled_block("Endings", &self.theme));
        frame.render_widget(paths, right[1]);

        let footer = Paragraph::new("r to replay (unlocked paths carry over) | Esc for menu")
            .style(Style::default().fg(self.theme.border))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let width = 67.min(area.width);
        let height = 20.min(area.height);
        let overlay = Rect::new(
            (area.width.saturating_sub(width)) / 2,
            (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );
        frame.render_widget(Clear, overlay);
        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(self.theme.fg));
        frame.render_widget(help, overlay);
    }
}
