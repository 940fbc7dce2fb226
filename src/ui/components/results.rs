use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::certificate;
use crate::session::Progress;
use crate::session::progress::{ALL_CATEGORIES, CATEGORY_MAX};
use crate::ui::theme::Theme;

/// Final screen: per-category bars, the verdict, the name field for the
/// certificate, and the export/replay actions.
pub struct ResultsPanel<'a> {
    pub progress: &'a Progress,
    pub name: &'a str,
    /// Path note after a successful export.
    pub export_note: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Your Source-Check Index ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(ALL_CATEGORIES.len() as u16 * 2),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let subtitle = Paragraph::new(Line::from(Span::styled(
            format!(
                "Your cognitive profile after {} challenges — total score {}",
                self.progress.total_challenges, self.progress.score
            ),
            Style::default().fg(colors.muted()),
        )))
        .alignment(Alignment::Center);
        subtitle.render(layout[0], buf);

        let bar_area = layout[1];
        let track_width = (bar_area.width.saturating_sub(30)).clamp(10, 20) as usize;
        let mut lines: Vec<Line> = Vec::new();
        for category in ALL_CATEGORIES {
            let value = self.progress.category(category);
            let filled =
                (value.min(CATEGORY_MAX) as usize * track_width) / CATEGORY_MAX as usize;
            let track: String = "█".repeat(filled) + &"░".repeat(track_width - filled);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<22}", category.label()),
                    Style::default().fg(colors.fg()),
                ),
                Span::styled(track, Style::default().fg(colors.bar_filled())),
                Span::styled(
                    format!(" {value:>2}/{CATEGORY_MAX}"),
                    Style::default().fg(colors.muted()),
                ),
            ]));
            lines.push(Line::from(""));
        }
        Paragraph::new(lines).render(bar_area, buf);

        let verdict = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(
                    "  Conclusion: {}",
                    certificate::verdict_label(self.progress.score)
                ),
                Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  \"{}\"", certificate::verdict_text(self.progress.score)),
                Style::default().fg(colors.fg()),
            )),
        ])
        .wrap(Wrap { trim: false });
        verdict.render(layout[2], buf);

        let name_display = if self.name.is_empty() {
            Span::styled(
                "type your name for the diploma...",
                Style::default().fg(colors.muted()),
            )
        } else {
            Span::styled(
                self.name.to_string(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )
        };
        let name_field = Paragraph::new(Line::from(vec![
            Span::styled("  Name: ", Style::default().fg(colors.muted())),
            name_display,
            Span::styled("█", Style::default().fg(colors.accent())),
        ]))
        .block(Block::bordered().border_style(Style::default().fg(colors.border())));
        name_field.render(layout[3], buf);

        if let Some(note) = self.export_note {
            Paragraph::new(Line::from(Span::styled(
                format!("  Diploma written to {note}"),
                Style::default().fg(colors.success()),
            )))
            .render(layout[4], buf);
        }

        Paragraph::new(Line::from(Span::styled(
            " [Enter] Export diploma  [Ctrl+R] Play again  [Esc] Quit ",
            Style::default().fg(colors.muted()),
        )))
        .alignment(Alignment::Center)
        .render(layout[5], buf);
    }
}
