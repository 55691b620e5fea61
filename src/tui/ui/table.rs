use crate::cards::{Card, Suit};
use crate::game::PILE_COUNT;
use crate::pile::Pile;
use crate::tui::app::{AppState, StatusKind};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(8),    // piles
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let header_lines = vec![
        Line::from(format!("Moves: {}   Suit: {}", app.game.move_count(), app.game.suit())),
        Line::from(Span::styled(
            "Stack all nine cards on one pile, Nine at the bottom, Ace on top.",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("Hanoi Solitaire").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let pile_areas = columns(chunks[1], PILE_COUNT as u16);
    for (idx, pile) in app.game.piles().iter().enumerate() {
        render_pile(f, pile_areas[idx], app, idx, pile);
    }

    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info: Vec<Line> = Vec::with_capacity(2);
    match app.status() {
        Some((kind, text)) => left_info.push(Line::from(Span::styled(text, status_style(kind)))),
        None => left_info.push(Line::from("Pick a pile with 1-3, then a destination.")),
    }
    left_info.push(legal_moves_line(app));

    let right_keys = vec![
        Line::from("U undo • R redo • N new"),
        Line::from("? help • Q quit"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.won() {
        draw_win_banner(f, app);
    }
}

fn render_pile(f: &mut Frame, area: Rect, app: &AppState, idx: usize, pile: &Pile) {
    let selected = app.selected() == Some(idx);
    let mut title = format!("Pile {}", idx + 1);
    if selected {
        title.push_str(" [From]");
    } else if let Some(from) = app.selected() {
        if app.game.is_valid_move(from, idx) {
            title.push_str(" [Drop]");
        }
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if app.won() && !pile.is_empty() {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if selected {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if idx == app.cursor {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, area);

    let pile_inner = inner(area);
    let Some((top, buried)) = pile.cards().split_last() else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "[  ]",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        f.render_widget(empty, pile_inner);
        return;
    };

    // Buried cards fan downwards, one row each; the exposed card is drawn whole.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(buried.len() as u16),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(pile_inner);
    let buried_lines: Vec<Line> = buried.iter().map(|c| Line::from(card_span(*c))).collect();
    f.render_widget(Paragraph::new(buried_lines).alignment(Alignment::Center), rows[0]);
    let border = if selected { Some(Color::Yellow) } else { None };
    render_card_widget(f, rows[1], *top, border);
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Card, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let card_inner = inner(area);
    f.render_widget(block, area);
    let content = Line::from(card_span(card).add_modifier(Modifier::BOLD));
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), card_inner);
}

fn card_span(card: Card) -> Span<'static> {
    let (glyph, style) = suit_glyph_and_style(card.suit());
    Span::styled(format!("{}{}", card.rank().to_char(), glyph), style)
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn status_style(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => Style::default(),
        StatusKind::Error => Style::default().fg(Color::Red),
        StatusKind::Win => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

fn legal_moves_line(app: &AppState) -> Line<'static> {
    let moves = app.game.legal_moves();
    if moves.is_empty() {
        return Line::from(Span::styled("No legal moves", Style::default().fg(Color::DarkGray)));
    }
    let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    Line::from(Span::styled(
        format!("Legal: {}", listed.join(", ")),
        Style::default().add_modifier(Modifier::DIM),
    ))
}

fn draw_win_banner(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 20, f.area());
    let block = Block::default()
        .title("Congratulations!")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let lines = vec![
        Line::from(format!("You won in {} moves!", app.game.move_count())),
        Line::from(Span::styled(
            "N new game • U undo",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Rules:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Move the top card of one pile onto another pile"),
        Line::from("- A card may only go on an empty pile or a higher card"),
        Line::from("- Win with all nine cards on one pile, Nine to Ace"),
        Line::from(""),
        Line::from(Span::styled("Keys:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 1 / 2 / 3: pick source, then destination"),
        Line::from("- Left / Right: move cursor"),
        Line::from("- Enter / Space: pick pile under cursor"),
        Line::from("- Esc: drop selection"),
        Line::from("- U: undo • R: redo"),
        Line::from("- N: new game"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
