use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Span, Spans};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use std::io;
use std::io::Stdout;

use crate::models::Pokemon;
use crate::screen::{App, LoadState, Screen};
use crate::utils::{
    format_dex_number, format_height, format_name, format_stat_name, format_weight, text_to_lines,
};

/// Canonical badge color for a Pokémon type.
fn type_color(type_name: &str) -> (u8, u8, u8) {
    match type_name {
        "normal" => (168, 167, 122),
        "fire" => (238, 129, 48),
        "water" => (99, 144, 240),
        "electric" => (247, 208, 44),
        "grass" => (122, 199, 76),
        "ice" => (150, 217, 214),
        "fighting" => (194, 46, 40),
        "poison" => (163, 62, 161),
        "ground" => (226, 191, 101),
        "flying" => (169, 143, 243),
        "psychic" => (249, 85, 135),
        "bug" => (166, 185, 26),
        "rock" => (182, 161, 54),
        "ghost" => (115, 87, 151),
        "dragon" => (111, 53, 252),
        "dark" => (112, 87, 70),
        "steel" => (183, 183, 206),
        "fairy" => (214, 133, 173),
        _ => (136, 136, 136),
    }
}

/// Padded badge span with a contrasting foreground.
fn type_badge(type_name: &str) -> Span<'static> {
    let (r, g, b) = type_color(type_name);
    let lum = 0.2126 * (r as f32) + 0.7152 * (g as f32) + 0.0722 * (b as f32);
    let fg = if lum > 160.0 { Color::Black } else { Color::White };
    Span::styled(
        format!(" {} ", format_name(type_name)),
        Style::default().fg(fg).bg(Color::Rgb(r, g, b)),
    )
}

fn type_badge_line<'a>(label: &'a str, types: &[String]) -> Spans<'a> {
    let mut spans: Vec<Span> = vec![Span::raw(label.to_string())];
    for (i, t) in types.iter().enumerate() {
        spans.push(type_badge(t));
        if i < types.len() - 1 {
            spans.push(Span::raw(" "));
        }
    }
    Spans::from(spans)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_w = r.width.saturating_mul(percent_x) / 100;
    let popup_h = r.height.saturating_mul(percent_y) / 100;
    let popup_x = r.x + (r.width.saturating_sub(popup_w) / 2);
    let popup_y = r.y + (r.height.saturating_sub(popup_h) / 2);
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

pub fn draw_ui(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App) -> io::Result<()> {
    terminal
        .draw(|f| {
            let size = f.size();
            match &app.screen {
                Screen::List => draw_list_screen(f, size, app),
                Screen::Detail { name } => draw_detail_screen(f, size, app, name),
            }
            if app.show_help {
                draw_help(f, size);
            }
        })
        .map(|_| ())
}

fn draw_list_screen<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    match &app.roster {
        LoadState::Idle | LoadState::Loading => {
            let para = Paragraph::new("Loading Pokémon...")
                .block(Block::default().borders(Borders::ALL).title("Pokédex"));
            f.render_widget(para, chunks[0]);
        }
        LoadState::Failed(err) => {
            let para = Paragraph::new(vec![
                Spans::from(Span::styled(
                    "Could not load the roster",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )),
                Spans::from(Span::raw(err.to_string())),
                Spans::from(Span::raw("Press 'r' to retry.")),
            ])
            .block(Block::default().borders(Borders::ALL).title("Pokédex"))
            .wrap(Wrap { trim: true });
            f.render_widget(para, chunks[0]);
        }
        LoadState::Loaded(rows) => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(chunks[0]);

            let items: Vec<ListItem> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| match row {
                    Ok(row) => ListItem::new(Spans::from(vec![
                        Span::styled(
                            format!("#{:03}  ", i + 1),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(format_name(&row.name)),
                    ])),
                    Err(_) => ListItem::new(Spans::from(Span::styled(
                        format!("#{:03}  (failed to load)", i + 1),
                        Style::default().fg(Color::Red),
                    ))),
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Pokédex"))
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );
            let mut state = ListState::default();
            if !rows.is_empty() {
                state.select(Some(app.selected));
            }
            f.render_stateful_widget(list, cols[0], &mut state);

            draw_row_preview(f, cols[1], app);
        }
    }

    let hints = Paragraph::new(Spans::from(Span::styled(
        " Up/Down move   Enter details   r reload   h help   q quit",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(hints, chunks[1]);
}

fn draw_row_preview<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Preview");
    let selected = app
        .roster
        .data()
        .and_then(|rows| rows.get(app.selected));

    let para = match selected {
        Some(Ok(row)) => {
            let mut lines: Vec<Spans> = Vec::new();
            lines.push(Spans::from(Span::styled(
                format_name(&row.name),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(type_badge_line("Types: ", &row.types));
            lines.push(Spans::from(Span::raw("")));
            match &row.front_sprite {
                Some(url) => {
                    lines.push(Spans::from(Span::raw("Front sprite:")));
                    for l in text_to_lines(url, area.width.saturating_sub(2) as usize) {
                        lines.push(Spans::from(Span::raw(l)));
                    }
                }
                None => lines.push(Spans::from(Span::raw("Front sprite: (none)"))),
            }
            match &row.back_sprite {
                Some(url) => {
                    lines.push(Spans::from(Span::raw("Back sprite:")));
                    for l in text_to_lines(url, area.width.saturating_sub(2) as usize) {
                        lines.push(Spans::from(Span::raw(l)));
                    }
                }
                None => lines.push(Spans::from(Span::raw("Back sprite: (none)"))),
            }
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true })
        }
        Some(Err(err)) => Paragraph::new(vec![
            Spans::from(Span::styled(
                "This entry failed to load",
                Style::default().fg(Color::Red),
            )),
            Spans::from(Span::raw(err.to_string())),
        ])
        .block(block)
        .wrap(Wrap { trim: true }),
        None => Paragraph::new("No entry selected").block(block),
    };
    f.render_widget(para, area);
}

fn draw_detail_screen<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App, name: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    match &app.detail {
        LoadState::Idle | LoadState::Loading => {
            let para = Paragraph::new(format!("Loading {}...", format_name(name))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format_name(name)),
            );
            f.render_widget(para, chunks[0]);
        }
        LoadState::Failed(err) => {
            let headline = if err.is_not_found() {
                format!("No Pokémon named {:?}", name)
            } else {
                format!("Could not load {}", format_name(name))
            };
            let para = Paragraph::new(vec![
                Spans::from(Span::styled(
                    headline,
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )),
                Spans::from(Span::raw(err.to_string())),
                Spans::from(Span::raw("Press Esc to go back.")),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format_name(name)),
            )
            .wrap(Wrap { trim: true });
            f.render_widget(para, chunks[0]);
        }
        LoadState::Loaded(pokemon) => draw_detail_body(f, chunks[0], pokemon),
    }

    let hints = Paragraph::new(Spans::from(Span::styled(
        " Esc back   h help   q quit",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(hints, chunks[1]);
}

fn draw_detail_body<B: Backend>(f: &mut Frame<B>, area: Rect, p: &Pokemon) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Min(5),
        ])
        .split(area);

    // Header: name, dex number, species, form flags, type badges.
    let mut header: Vec<Spans> = Vec::new();
    header.push(Spans::from(vec![
        Span::styled(
            format_name(&p.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format_dex_number(p.id), Style::default().fg(Color::DarkGray)),
    ]));
    let mut species_line = format!("Species: {}", format_name(&p.species.name));
    if !p.is_default {
        species_line.push_str("  (alternate form)");
    }
    if let Some(order) = p.order {
        species_line.push_str(&format!("  order {}", order));
    }
    header.push(Spans::from(Span::raw(species_line)));
    header.push(type_badge_line("Types: ", &p.type_names()));
    let header_para = Paragraph::new(header)
        .block(Block::default().borders(Borders::ALL).title("Pokémon"))
        .wrap(Wrap { trim: true });
    f.render_widget(header_para, rows[0]);

    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(10)])
        .split(rows[1]);
    draw_stat_bars(f, mid[0], p);
    draw_traits(f, mid[1], p);

    draw_extras(f, rows[2], p);
}

/// Per-stat horizontal bars: NAME (padded) | VALUE | [bar...].
fn draw_stat_bars<B: Backend>(f: &mut Frame<B>, area: Rect, p: &Pokemon) {
    let inner_w = if area.width > 2 {
        (area.width - 2) as usize
    } else {
        1usize
    };
    let name_w = 8usize;
    let val_w = 4usize;
    let bar_max_w = inner_w.saturating_sub(name_w + val_w + 2);
    // Base stats cap at 255, which keeps bars comparable across entries.
    let scale_max = 255.0f32;

    let mut lines: Vec<Spans> = Vec::new();
    for slot in p.stats.iter() {
        let bar_len =
            (((slot.base_stat as f32) / scale_max) * (bar_max_w as f32)).round() as usize;
        let bar = "█".repeat(bar_len);
        let line = format!(
            "{:<name_w$} {:>val_w$} {}",
            format_stat_name(&slot.stat.name),
            slot.base_stat,
            bar,
            name_w = name_w,
            val_w = val_w
        );
        lines.push(Spans::from(Span::raw(line)));
    }
    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Stats"));
    f.render_widget(para, area);
}

fn draw_traits<B: Backend>(f: &mut Frame<B>, area: Rect, p: &Pokemon) {
    let mut lines: Vec<Spans> = Vec::new();
    lines.push(Spans::from(Span::raw(format!(
        "Height: {}   Weight: {}",
        format_height(p.height),
        format_weight(p.weight)
    ))));
    if let Some(xp) = p.base_experience {
        lines.push(Spans::from(Span::raw(format!("Base EXP: {}", xp))));
    }
    if !p.abilities.is_empty() {
        lines.push(Spans::from(Span::raw("")));
        lines.push(Spans::from(Span::styled(
            "Abilities",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for slot in &p.abilities {
            if let Some(ability) = &slot.ability {
                let marker = if slot.is_hidden { "  (hidden)" } else { "" };
                lines.push(Spans::from(Span::raw(format!(
                    "  {}{}",
                    format_name(&ability.name),
                    marker
                ))));
            }
        }
    }
    if !p.held_items.is_empty() {
        lines.push(Spans::from(Span::raw("")));
        lines.push(Spans::from(Span::styled(
            "Held items",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for held in &p.held_items {
            let versions: Vec<String> = held
                .version_details
                .iter()
                .map(|v| format!("{} {}%", format_name(&v.version.name), v.rarity))
                .collect();
            let suffix = if versions.is_empty() {
                String::new()
            } else {
                format!("  ({})", versions.join(", "))
            };
            lines.push(Spans::from(Span::raw(format!(
                "  {}{}",
                format_name(&held.item.name),
                suffix
            ))));
        }
    }
    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Traits"))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

/// Sprites plus the historical sections, each rendered only when present.
fn draw_extras<B: Backend>(f: &mut Frame<B>, area: Rect, p: &Pokemon) {
    let wrap_w = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Spans> = Vec::new();
    lines.push(Spans::from(Span::styled(
        "Sprites",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let labeled = [
        ("front", p.sprites.front_default.as_deref()),
        ("back", p.sprites.back_default.as_deref()),
        ("front shiny", p.sprites.front_shiny.as_deref()),
        ("back shiny", p.sprites.back_shiny.as_deref()),
        ("artwork", p.artwork_url()),
    ];
    for (label, url) in labeled {
        if let Some(url) = url {
            for l in text_to_lines(&format!("{}: {}", label, url), wrap_w) {
                lines.push(Spans::from(Span::raw(l)));
            }
        }
    }

    if !p.past_types.is_empty() {
        lines.push(Spans::from(Span::raw("")));
        lines.push(Spans::from(Span::styled(
            "Past types",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for past in &p.past_types {
            let names: Vec<String> = past.types.iter().map(|t| t.type_info.name.clone()).collect();
            lines.push(type_badge_line_owned(
                format!("  {}: ", format_name(&past.generation.name)),
                &names,
            ));
        }
    }

    if !p.past_abilities.is_empty() {
        lines.push(Spans::from(Span::raw("")));
        lines.push(Spans::from(Span::styled(
            "Past abilities",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for past in &p.past_abilities {
            let names: Vec<String> = past
                .abilities
                .iter()
                .map(|slot| match &slot.ability {
                    Some(ability) => format_name(&ability.name),
                    None => "(removed)".to_string(),
                })
                .collect();
            lines.push(Spans::from(Span::raw(format!(
                "  {}: {}",
                format_name(&past.generation.name),
                names.join(", ")
            ))));
        }
    }

    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("More"))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn type_badge_line_owned(label: String, types: &[String]) -> Spans<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(label)];
    for (i, t) in types.iter().enumerate() {
        spans.push(type_badge(t));
        if i < types.len() - 1 {
            spans.push(Span::raw(" "));
        }
    }
    Spans::from(spans)
}

fn draw_help<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let popup = centered_rect(60, 40, area);
    let mut lines: Vec<Spans> = Vec::new();
    lines.push(Spans::from(Span::styled(
        "Keybindings",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Spans::from(Span::raw("")));
    lines.push(Spans::from(Span::raw("q        Quit")));
    lines.push(Spans::from(Span::raw("Up/Down  Navigate list")));
    lines.push(Spans::from(Span::raw("Enter    Open details")));
    lines.push(Spans::from(Span::raw("Esc      Back to the list")));
    lines.push(Spans::from(Span::raw("r        Reload the roster")));
    lines.push(Spans::from(Span::raw("h / F1   Toggle this help")));
    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
