use crate::content::SectionId;
use crate::ui::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);

    if app.active_section().is_some() {
        render_session(frame, app, main_chunks[1]);
    } else {
        render_navigation(frame, app, main_chunks[1]);
    }

    render_footer(frame, app, main_chunks[2]);

    if app.show_info {
        render_info_modal(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let hero = &app.catalog.hero;

    let header_text = vec![
        Line::from(Span::styled(
            hero.name.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            hero.tagline.clone(),
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );

    frame.render_widget(header, area);
}

/// The idle view: a row of section buttons plus the social links.
fn render_navigation(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut button_spans: Vec<Span> = Vec::new();
    for (i, id) in SectionId::ALL.iter().enumerate() {
        let style = if i == app.nav_index {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        button_spans.push(Span::styled(format!("  {}. {}  ", i + 1, id.label()), style));
        if i + 1 < SectionId::ALL.len() {
            button_spans.push(Span::raw("  "));
        }
    }

    let hero = &app.catalog.hero;
    let text = vec![
        Line::from(""),
        Line::from(button_spans),
        Line::from(""),
        Line::from(Span::styled(
            "Pick a section to run its tool call",
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(hero.github.clone(), Style::default().fg(theme.secondary)),
            Span::styled("  •  ", Style::default().fg(theme.fg_dim)),
            Span::styled(hero.linkedin.clone(), Style::default().fg(theme.secondary)),
        ]),
    ];

    let nav = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Portfolio ")
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(nav, area);
}

/// The active view: agent panel and terminal on top, response below.
fn render_session(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    render_agent_panel(frame, app, top[0]);
    render_terminal_panel(frame, app, top[1]);
    render_response_panel(frame, app, rows[1]);
}

fn render_agent_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let running = app.sequencer.is_running();
    let active = app.sequencer.active_section();

    let mut text = vec![
        Line::from(vec![
            Span::styled(
                if running { app.spinner() } else { "●" },
                Style::default().fg(if running { theme.secondary } else { theme.success }),
            ),
            Span::raw(" "),
            Span::styled(
                if running { "processing" } else { "idle" },
                Style::default().fg(theme.fg_dim),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            app.catalog.hero.system_prompt.clone(),
            Style::default().fg(theme.fg_dim).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    for id in SectionId::ALL {
        let is_active = active == Some(id);
        let marker = if is_active && running {
            // Pulse with the spinner cadence.
            if app.spinner_frame % 2 == 0 { "▸" } else { "▹" }
        } else if is_active {
            "▸"
        } else {
            " "
        };
        let style = if is_active {
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        text.push(Line::from(Span::styled(
            format!(" {} {}()", marker, id.tool()),
            style,
        )));
    }

    let panel = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Agent ")
            .border_style(Style::default().fg(theme.fg_dim)),
    );

    frame.render_widget(panel, area);
}

fn render_terminal_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut text: Vec<Line> = app
        .sequencer
        .log_lines()
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(theme.success))))
        .collect();

    if app.sequencer.output_visible() {
        text.push(Line::from(""));
        for line in app.sequencer.output_text().lines() {
            text.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(theme.fg),
            )));
        }
    }

    let border_color = if app.sequencer.is_running() {
        theme.secondary
    } else {
        theme.fg_dim
    };

    let panel = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" STDOUT ")
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(panel, area);
}

fn render_response_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut text: Vec<Line> = Vec::new();

    if app.sequencer.typing_visible() {
        let dot = if app.spinner_frame % 2 == 0 { "●" } else { "○" };
        text.push(Line::from(vec![
            Span::styled(dot, Style::default().fg(theme.success)),
            Span::styled(
                " Streaming response...",
                Style::default().fg(theme.fg_dim).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    if app.sequencer.content_visible() {
        for line in app.sequencer.displayed_content().lines() {
            text.push(tag_line(line, theme));
        }
        if !app.sequencer.stream_complete() {
            // Block cursor at the stream head.
            match text.last_mut() {
                Some(last) => last.push_span(Span::styled("▌", Style::default().fg(theme.fg))),
                None => text.push(Line::from(Span::styled("▌", Style::default().fg(theme.fg)))),
            }
        }
    }

    let panel = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Response ")
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.active_section().is_some() {
        "[1-4] Section  [Esc] Close  [t] Theme  [i] Info  [q] Quit"
    } else {
        "[1-4/Enter] Select  [←→/hl] Navigate  [t] Theme  [i] Info  [q] Quit"
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}

fn render_info_modal(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(50, 12, frame.area());

    let text = vec![
        Line::from(Span::styled(
            "Key Bindings",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1-4        select a section"),
        Line::from("←→ / h l   move the highlight"),
        Line::from("Enter      run the highlighted section"),
        Line::from("Esc        close the active section"),
        Line::from("t          cycle theme"),
        Line::from("q / Q      quit"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Theme: {}", theme.name),
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let modal = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Info ")
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

/// Style the `<tag>` spans of a content line with the theme's tag color.
fn tag_line<'a>(line: &'a str, theme: &Theme) -> Line<'a> {
    let tag_style = Style::default().fg(theme.tag);
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find('<') {
        if start > 0 {
            spans.push(Span::raw(&rest[..start]));
        }
        match rest[start..].find('>') {
            Some(end) => {
                spans.push(Span::styled(&rest[start..=start + end], tag_style));
                rest = &rest[start + end + 1..];
            }
            None => {
                // Unterminated (mid-stream) tag: show it plain for now.
                spans.push(Span::raw(&rest[start..]));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        spans.push(Span::raw(rest));
    }

    Line::from(spans)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
