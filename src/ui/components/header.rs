use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

/// Top bar: app name, score, session progress, and an optional content note
/// (shown when the session runs on fallback content).
pub struct SessionHeader<'a> {
    pub score: u32,
    /// 0.0..=1.0, fraction of the stage sequence completed.
    pub progress: f64,
    pub note: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for SessionHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let bg = Paragraph::new("").style(Style::default().bg(colors.header_bg()));
        bg.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(26)])
            .split(area);

        let mut spans = vec![
            Span::styled(
                " kallkoll ",
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "| media-literacy trainer",
                Style::default().fg(colors.muted()).bg(colors.header_bg()),
            ),
        ];
        if let Some(note) = self.note {
            spans.push(Span::styled(
                format!("  [{note}]"),
                Style::default().fg(colors.warning()).bg(colors.header_bg()),
            ));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(colors.header_bg()))
            .render(layout[0], buf);

        // Score plus a small progress track
        let track_width = 12usize;
        let filled = ((self.progress.clamp(0.0, 1.0)) * track_width as f64).round() as usize;
        let track: String = "█".repeat(filled) + &"░".repeat(track_width - filled);
        let right = Line::from(vec![
            Span::styled(
                format!("Score {:>3} ", self.score),
                Style::default()
                    .fg(colors.accent())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                track,
                Style::default().fg(colors.bar_filled()).bg(colors.header_bg()),
            ),
            Span::styled(" ", Style::default().bg(colors.header_bg())),
        ]);
        Paragraph::new(right)
            .style(Style::default().bg(colors.header_bg()))
            .alignment(ratatui::layout::Alignment::Right)
            .render(layout[1], buf);
    }
}
