use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::name_entry::NameEntry;
use crate::round::RoundStats;
use crate::scores::{HighScoreTable, NAME_LEN};
use crate::screens::score::ScoreScreen;
use crate::ui::{centered, ACCENT, BACKGROUND, DIM, GOLD};

const PLAYER_COLORS: [Color; 2] = [Color::Rgb(80, 255, 80), Color::Rgb(100, 180, 255)];

pub fn render(frame: &mut Frame, area: Rect, screen: &ScoreScreen) {
    let record = screen.is_new_record();
    let panel = centered(area, 52, 34);
    frame.render_widget(Clear, panel);

    let title = if record { " 🏆 NEW RECORD! " } else { " GAME OVER " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(GOLD))
        .title(title)
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(BACKGROUND));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled("G A M E   O V E R", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    for (idx, stats) in screen.round().players().enumerate() {
        lines.extend(results_lines(idx, stats));
        lines.push(Line::from(""));
    }

    if let Some(entry) = screen.name_entry() {
        lines.extend(name_input_lines(entry));
        lines.push(Line::from(""));
    }

    lines.extend(leaderboard_lines(screen.high_scores()));
    lines.push(Line::from(""));
    lines.push(hint_line(screen.accepting_input()));

    let p = Paragraph::new(lines).style(Style::default().bg(BACKGROUND));
    frame.render_widget(p, inner);
}

fn results_lines(idx: usize, stats: &RoundStats) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Rgb(180, 180, 200));
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![Span::styled(
            format!("  Player {}", idx + 1),
            Style::default().fg(PLAYER_COLORS[idx % PLAYER_COLORS.len()]).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("    Score           ", label),
            Span::styled(format!("{:>8}", stats.score), Style::default().fg(Color::Rgb(255, 215, 0)).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("    Lives remaining ", label),
            Span::styled(format!("{:>8}", stats.lives_remaining), value),
        ]),
        Line::from(vec![
            Span::styled("    Enemies killed  ", label),
            Span::styled(format!("{:>8}", stats.ships_destroyed), value),
        ]),
        Line::from(vec![
            Span::styled("    Hit ratio       ", label),
            Span::styled(format!("{:>7.2}%", stats.accuracy() * 100.0), value),
        ]),
    ]
}

fn name_input_lines(entry: &NameEntry) -> Vec<Line<'static>> {
    let mut letters = vec![Span::styled("    [ ", Style::default().fg(DIM))];
    let name = entry.name();
    for slot in 0..NAME_LEN {
        let c = name.get(slot).map(char::from).unwrap_or(' ');
        let style = if slot == entry.selected() {
            Style::default().fg(BACKGROUND).bg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        letters.push(Span::styled(c.to_string(), style));
        letters.push(Span::raw(" "));
    }
    letters.push(Span::styled("]", Style::default().fg(DIM)));

    vec![
        Line::from(Span::styled("  Introduce name:", Style::default().fg(Color::Rgb(180, 180, 200)))),
        Line::from(letters),
        Line::from(Span::styled("    ←/→ pick letter  ↑/↓ change it", Style::default().fg(DIM))),
    ]
}

fn leaderboard_lines(table: &HighScoreTable) -> Vec<Line<'static>> {
    let medal_colors = [
        Color::Rgb(255, 215, 0),   // Gold
        Color::Rgb(192, 192, 192), // Silver
        Color::Rgb(205, 127, 50),  // Bronze
    ];

    let mut lines = vec![Line::from(Span::styled(
        "  High Scores",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    if table.is_empty() {
        lines.push(Line::from(Span::styled("    No scores yet", Style::default().fg(Color::Rgb(60, 60, 80)))));
        return lines;
    }
    for (rank, entry) in table.entries().iter().enumerate() {
        let color = medal_colors.get(rank).copied().unwrap_or(Color::Rgb(200, 200, 220));
        lines.push(Line::from(vec![
            Span::styled(format!("    {}. ", rank + 1), Style::default().fg(DIM)),
            Span::styled(format!("{} ", entry.name), Style::default().fg(Color::Rgb(200, 200, 220))),
            Span::styled(format!("{:>8}", entry.score), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]));
    }
    lines
}

fn hint_line(accepting_input: bool) -> Line<'static> {
    // Greyed out until the screen starts listening
    let (key, text) = if accepting_input {
        (Style::default().fg(ACCENT).add_modifier(Modifier::BOLD), Style::default().fg(DIM))
    } else {
        (Style::default().fg(Color::Rgb(60, 60, 80)), Style::default().fg(Color::Rgb(60, 60, 80)))
    };
    Line::from(vec![
        Span::styled("  Space", key),
        Span::styled(" play again  ", text),
        Span::styled("Esc", key),
        Span::styled(" menu", text),
    ])
}
