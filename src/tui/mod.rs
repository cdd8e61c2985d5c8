//! Terminal User Interface
//!
//! Mission-control styled TUI for the game using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::ThreatLevel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a threat level
pub fn threat_color(threat: ThreatLevel) -> Color {
    match threat {
        ThreatLevel::Safe => Color::Green,
        ThreatLevel::Warning => Color::Yellow,
        ThreatLevel::Critical => Color::Red,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║    █████╗ ███████╗████████╗██████╗  ██████╗                  ║
║   ██╔══██╗██╔════╝╚══██╔══╝██╔══██╗██╔═══██╗                 ║
║   ███████║███████╗   ██║   ██████╔╝██║   ██║                 ║
║   ██╔══██║╚════██║   ██║   ██╔══██╗██║   ██║                 ║
║   ██║  ██║███████║   ██║   ██║  ██║╚██████╔╝                 ║
║   ╚═╝  ╚═╝╚══════╝   ╚═╝   ╚═╝  ╚═╝ ╚═════╝                  ║
║           ██╗      █████╗ ██████╗                            ║
║           ██║     ██╔══██╗██╔══██╗                           ║
║           ██║     ███████║██████╔╝                           ║
║           ██║     ██╔══██║██╔══██╗                           ║
║           ███████╗██║  ██║██████╔╝                           ║
║           ╚══════╝╚═╝  ╚═╝╚═════╝                            ║
║                                                              ║
║            A Planetary Defense Story                         ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " ASTROLAB ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                       CONTROLS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  ↑/↓    Navigate menus / choices                              ║
║  Enter  Advance dialogue / Confirm choice                     ║
║  Space  Skip the typewriter on the current line               ║
║  1-9    Pick a choice directly                                ║
║  o      Consult the oracle                                    ║
║  Esc    Back to the main menu                                 ║
║  ?      Toggle this help                                      ║
║  q      Quit (from the main menu)                             ║
╠═══════════════════════════════════════════════════════════════╣
║                       MISSION                                 ║
╠═══════════════════════════════════════════════════════════════╣
║  An asteroid is inbound. Read the data, make the calls,       ║
║  and live with them. Three endings can be unlocked;           ║
║  unlocked paths survive a replay.                             ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Mission log
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (side panel + story area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Side panel
            Constraint::Percentage(70), // Story
        ])
        .split(area)
        .to_vec()
}

/// Create the story area layout (dialogue + choices)
pub fn create_story_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Dialogue
            Constraint::Percentage(35), // Choices
        ])
        .split(area)
        .to_vec()
}
