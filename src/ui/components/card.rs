use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::challenge::ChallengeCard;
use crate::ui::theme::Theme;

/// Renders one challenge card: badge, title, prompt, optional excerpt and
/// clue panel, then the choice list with the current selection highlighted.
pub struct CardView<'a> {
    pub card: &'a ChallengeCard,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl CardView<'_> {
    fn excerpt_height(&self) -> u16 {
        match &self.card.excerpt {
            Some(excerpt) => {
                let lines = excerpt.text.lines().count() as u16 + 2;
                lines + excerpt.attribution.is_some() as u16
            }
            None => 0,
        }
    }

    fn clue_height(&self) -> u16 {
        match &self.card.clue_search {
            Some(search) => match &search.clues {
                Some(clues) => clues.len() as u16 + 2,
                None => 1,
            },
            None => 0,
        }
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let choice_rows: u16 = self
            .card
            .choices
            .iter()
            .map(|c| 2 + c.detail.is_some() as u16)
            .sum();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(self.excerpt_height()),
                Constraint::Length(self.clue_height()),
                Constraint::Length(choice_rows),
                Constraint::Min(0),
            ])
            .split(inner);

        let badge_line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.card.badge),
                Style::default()
                    .fg(colors.bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.card.title),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(badge_line).render(layout[0], buf);

        Paragraph::new(self.card.prompt.as_str())
            .style(Style::default().fg(colors.fg()))
            .wrap(Wrap { trim: true })
            .render(layout[1], buf);

        if let Some(excerpt) = &self.card.excerpt {
            let mut lines: Vec<Line> = excerpt
                .text
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(colors.fg()))))
                .collect();
            if let Some(attribution) = &excerpt.attribution {
                lines.push(Line::from(Span::styled(
                    format!("— {attribution}"),
                    Style::default().fg(colors.muted()),
                )));
            }
            Paragraph::new(lines)
                .block(
                    Block::bordered().border_style(Style::default().fg(colors.warning())),
                )
                .wrap(Wrap { trim: true })
                .render(layout[2], buf);
        }

        if let Some(search) = &self.card.clue_search {
            match &search.clues {
                Some(clues) => {
                    let lines: Vec<Line> = clues
                        .iter()
                        .map(|clue| {
                            Line::from(Span::styled(
                                format!("• {clue}"),
                                Style::default().fg(colors.warning()),
                            ))
                        })
                        .collect();
                    Paragraph::new(lines)
                        .block(
                            Block::bordered()
                                .title(format!(" Search results for \"{}\" ", search.source))
                                .border_style(Style::default().fg(colors.warning())),
                        )
                        .render(layout[3], buf);
                }
                None => {
                    Paragraph::new(Line::from(Span::styled(
                        "  [c] Check around (lateral reading)",
                        Style::default().fg(colors.accent()),
                    )))
                    .render(layout[3], buf);
                }
            }
        }

        let mut row = layout[4];
        for (i, choice) in self.card.choices.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };

            let label_style = if choice.locked {
                Style::default().fg(colors.muted())
            } else if is_selected {
                Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            let lock_note = if choice.locked { "  (wait...)" } else { "" };
            let label = format!(
                " {indicator} [{key}] {label}{lock_note}",
                key = i + 1,
                label = choice.label
            );

            let mut lines = vec![Line::from(Span::styled(label, label_style))];
            if let Some(detail) = &choice.detail {
                lines.push(Line::from(Span::styled(
                    format!("       {detail}"),
                    Style::default().fg(colors.muted()),
                )));
            }
            lines.push(Line::from(""));

            let height = lines.len() as u16;
            if row.height < height {
                break;
            }
            let (slot, rest) = split_rows(row, height);
            Paragraph::new(lines).render(slot, buf);
            row = rest;
        }
    }
}

fn split_rows(area: Rect, height: u16) -> (Rect, Rect) {
    let top = Rect::new(area.x, area.y, area.width, height);
    let rest = Rect::new(
        area.x,
        area.y + height,
        area.width,
        area.height.saturating_sub(height),
    );
    (top, rest)
}
