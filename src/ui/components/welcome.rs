use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;

pub struct WelcomeScreen<'a> {
    pub theme: &'a Theme,
}

impl Widget for WelcomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let title = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Unhook your brain!",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "A trainer for spotting disinformation",
                Style::default().fg(colors.muted()),
            )),
        ])
        .alignment(Alignment::Center);
        title.render(layout[0], buf);

        let intro = Paragraph::new(
            "Your brain is lazy. It loves System 1: fast, emotional, sloppy. \
             This session trains System 2, the slow, critical thinker.",
        )
        .style(Style::default().fg(colors.fg()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        intro.render(layout[1], buf);

        let system1 = Paragraph::new(vec![
            Line::from(Span::styled(
                "  System 1",
                Style::default().fg(colors.warning()).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Gut feeling, quick clicks, confirmation bias.",
                Style::default().fg(colors.muted()),
            )),
        ]);
        system1.render(layout[2], buf);

        let system2 = Paragraph::new(vec![
            Line::from(Span::styled(
                "  System 2",
                Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Analysis, source checking, questioning.",
                Style::default().fg(colors.muted()),
            )),
        ]);
        system2.render(layout[3], buf);

        let cta = Paragraph::new(Line::from(Span::styled(
            "[Enter] Activate System 2",
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        cta.render(layout[5], buf);
    }
}
