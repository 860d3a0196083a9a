use crate::cards::{Card, Rank, Suit};
use crate::deck::HAND_SIZE;
use crate::round::Outcome;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

pub fn draw(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(5), // dealer
            Constraint::Length(5), // player
            Constraint::Min(6),    // status bar
        ])
        .split(size);

    draw_header(f, chunks[0], app);
    draw_dealer_row(f, chunks[1], app);
    draw_player_row(f, chunks[2], app);
    draw_status(f, chunks[3], app);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let config = app.game.config();
    let session = if app.game.is_victory() {
        Span::styled("SESSION WON", Style::default().fg(Color::Green))
    } else if app.game.is_bust() {
        Span::styled("BUSTED", Style::default().fg(Color::Red))
    } else if app.game.round_active() {
        Span::raw("Round in progress")
    } else {
        Span::raw("Ready to deal")
    };
    let lines = vec![
        Line::from(format!(
            "Tokens: {}   Goal: {}   Bust: {}",
            app.game.tokens(),
            config.victory_threshold,
            config.bust_threshold
        )),
        Line::from(session),
    ];
    let header =
        Paragraph::new(lines).block(Block::default().title("showdown-rs").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_dealer_row(f: &mut Frame, area: Rect, app: &AppState) {
    // The dealer's cards stay face-down until the round is resolved.
    let face_up = !app.game.round_active() && app.last_outcome.is_some();
    let mut title = String::from("Dealer");
    if let Some(o) = &app.last_outcome {
        if o.outcome == Outcome::Lose {
            title.push_str(&format!(" — {}", o.category.label()));
        }
    }
    let cards = app.game.dealer().hand().map(|h| *h.cards());
    draw_hand_row(f, area, &title, cards, face_up);
}

fn draw_player_row(f: &mut Frame, area: Rect, app: &AppState) {
    let mut title = String::from("Player");
    if let Some(o) = &app.last_outcome {
        if o.outcome != Outcome::Lose {
            title.push_str(&format!(" — {}", o.category.label()));
        }
    }
    let cards = app.game.player().hand().map(|h| *h.cards());
    draw_hand_row(f, area, &title, cards, true);
}

fn draw_hand_row(
    f: &mut Frame,
    area: Rect,
    title: &str,
    cards: Option<[Card; HAND_SIZE]>,
    face_up: bool,
) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let row_inner = inner(area);
    f.render_widget(block, area);
    let card_width = row_inner.width.saturating_sub(2) / HAND_SIZE as u16;
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            (0..HAND_SIZE).map(|_| Constraint::Length(card_width)).collect::<Vec<_>>(),
        )
        .split(row_inner);
    for i in 0..HAND_SIZE {
        let slot = cards.map(|cs| cs[i]).filter(|_| face_up);
        let hidden = cards.is_some() && !face_up;
        render_card_widget(f, card_chunks[i], slot, hidden);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left: Vec<Line> = Vec::new();
    left.push(Line::from(format!("Bet: {}_", app.bet_entry())));
    if let Some(msg) = app.message() {
        left.push(Line::from(msg.to_string()));
    }
    if let Some(err) = app.error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    if !app.game.history().is_empty() {
        let recent: Vec<String> = app
            .game
            .history_recent(3)
            .iter()
            .rev()
            .map(|r| format!("{} {} ({})", r.outcome.label(), r.bet, r.category.label()))
            .collect();
        left.push(Line::from(Span::styled(
            format!("Recent: {}", recent.join(" • ")),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    let right = vec![
        Line::from(""),
        Line::from("Space deal • 0-9 bet • Enter reveal"),
        Line::from("N new game • ? help • Q quit"),
    ];
    let left_para = Paragraph::new(left).wrap(Wrap { trim: true });
    let right_para = Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Round:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal a fresh round"),
        Line::from("- 0-9: edit bet, Backspace deletes"),
        Line::from("- Enter: reveal the dealer and settle the bet"),
        Line::from(""),
        Line::from(Span::styled("Session:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Reach the goal to win, hit the bust line to lose"),
        Line::from("- N: start a new session"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn rank_label(r: Rank) -> &'static str {
    match r {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, hidden: bool) {
    let block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    let card_inner = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let text = format!("{}{}", rank_label(c.rank()), c.suit().glyph());
        Line::from(Span::styled(text, suit_style(c.suit())))
    } else if hidden {
        Line::from(Span::styled("▒▒", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from("[  ]")
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, card_inner);
}

fn inner(area: Rect) -> Rect {
    Rect { x: area.x + 1, y: area.y + 1, width: area.width - 2, height: area.height - 2 }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}
