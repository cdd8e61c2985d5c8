//! Custom widgets for the game UI

use crate::data::{DataPoint, ThreatLevel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// The planetary threat indicator shown in the header
pub struct ThreatBar {
    threat: ThreatLevel,
    eta_days: Option<i64>,
    blink: bool,
}

impl ThreatBar {
    pub fn new(threat: ThreatLevel) -> Self {
        Self {
            threat,
            eta_days: None,
            blink: false,
        }
    }

    pub fn eta_days(mut self, days: i64) -> Self {
        self.eta_days = Some(days);
        self
    }

    pub fn blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }
}

impl Widget for ThreatBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let color = crate::tui::threat_color(self.threat);
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if self.blink && self.threat == ThreatLevel::Critical {
            style = style.add_modifier(Modifier::RAPID_BLINK);
        }

        let mut text = format!("{} THREAT: {}", self.threat.symbol(), self.threat);
        if let Some(days) = self.eta_days {
            text.push_str(&format!("  │  IMPACT T-{} DAYS", days));
        }
        buf.set_string(area.x, area.y, &text, style);
    }
}

/// The collected mission data panel
pub struct DataReadout {
    entries: Vec<DataPoint>,
    accent: Color,
}

impl DataReadout {
    pub fn new(entries: Vec<DataPoint>) -> Self {
        Self {
            entries,
            accent: Color::Cyan,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }
}

impl Widget for DataReadout {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        if self.entries.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                "NO DATA COLLECTED",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            let y = area.y + i as u16;
            let label = format!("{}:", entry.kind);
            buf.set_string(area.x, y, &label, Style::default().fg(self.accent));
            let value_x = area.x + label.len() as u16 + 1;
            if value_x < area.x + area.width {
                buf.set_string(value_x, y, &entry.value, Style::default().fg(Color::White));
            }
        }
    }
}
