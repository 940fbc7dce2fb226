use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::Feedback;
use crate::ui::theme::Theme;

/// The post-answer panel: verdict symbol, explanation, and the prompt to
/// continue. Shown instead of the challenge card until acknowledged.
pub struct FeedbackPanel<'a> {
    pub feedback: &'a Feedback,
    /// True when the next stage is the results screen.
    pub is_last: bool,
    pub theme: &'a Theme,
}

impl Widget for FeedbackPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let verdict_color = if self.feedback.correct {
            colors.success()
        } else {
            colors.error()
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(verdict_color))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(2),
            ])
            .split(inner);

        let (symbol, headline) = if self.feedback.correct {
            ("✓", "Well reasoned!")
        } else {
            ("✗", "Oops, your brain took a shortcut...")
        };
        let title = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!(" {symbol} "),
                    Style::default().fg(verdict_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    headline,
                    Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
                ),
            ]),
        ]);
        title.render(layout[0], buf);

        Paragraph::new(self.feedback.message.as_str())
            .style(Style::default().fg(colors.fg()))
            .wrap(Wrap { trim: true })
            .render(layout[1], buf);

        let next_label = if self.is_last {
            "[Enter] See your results"
        } else {
            "[Enter] Next challenge"
        };
        Paragraph::new(Line::from(Span::styled(
            next_label,
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[2], buf);
    }
}
