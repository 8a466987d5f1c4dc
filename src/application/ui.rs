#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::AlertMessage;
use crate::domain::models::Event;
use crate::domain::models::Placeholder;
use crate::domain::models::ServiceBox;
use crate::domain::models::SessionContext;
use crate::domain::services::events::EventsService;
use crate::domain::services::HomeScreen;
use crate::domain::services::HomeState;

fn centered_rect(width: u16, height: u16, rect: Rect) -> Rect {
    let width = width.min(rect.width);
    let height = height.min(rect.height);

    return Rect::new(
        rect.x + (rect.width - width) / 2,
        rect.y + (rect.height - height) / 2,
        width,
        height,
    );
}

/// Rows needed to show `lines` wrapped at `width`, one at least per line.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows = lines
        .iter()
        .map(|line| return (line.width().max(1) + width - 1) / width)
        .sum::<usize>();

    return u16::try_from(rows).unwrap_or(u16::MAX);
}

fn render_alert<B: Backend>(frame: &mut Frame<B>, alert: &AlertMessage, queued: usize) {
    let mut footer = "[Enter] cerrar".to_string();
    if queued > 1 {
        footer = format!("{footer} · {} más", queued - 1);
    }

    let mut lines = alert
        .message
        .lines()
        .map(|line| return Line::from(line.to_string()))
        .collect::<Vec<Line>>();
    lines.push(Line::from(""));
    if let Some(timestamp) = &alert.timestamp {
        lines.push(Line::from(Span::styled(
            timestamp.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        footer,
        Style::default().fg(Color::DarkGray),
    )));

    // Borders take a row top and bottom, borders and padding two columns a side.
    let size = frame.size();
    let width = size.width.saturating_sub(4).min(50);
    let height = wrapped_height(&lines, width.saturating_sub(4)).saturating_add(2);
    let area = centered_rect(width, height, size);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(alert.title())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Yellow))
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render<B: Backend>(frame: &mut Frame<B>, home_state: &mut HomeState) {
    let rect = frame.size();
    if rect.width != home_state.last_known_width || rect.height != home_state.last_known_height {
        home_state.set_rect(rect);
    }

    if let Some(placeholder) = home_state.plants.placeholder() {
        Placeholder::new(placeholder).render(frame, centered_rect(rect.width, 3, rect));
    } else {
        let lines = home_state
            .card_lines
            .iter()
            .map(|line| return Line::from(line.to_string()))
            .collect::<Vec<Line>>();

        frame.render_widget(
            Paragraph::new(lines).scroll((home_state.scroll.position, 0)),
            rect,
        );
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            rect,
            &mut home_state.scroll.scrollbar_state,
        );
    }

    if let Some(alert) = home_state.current_alert() {
        render_alert(frame, alert, home_state.alerts.len());
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    home_state: &mut HomeState,
    events: &mut EventsService,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            render(frame, home_state);
        })?;

        match events.next().await? {
            Event::PlantsLoaded(plants) => {
                home_state.handle_plants_loaded(plants);
            }
            Event::AlertReceived(alert) => {
                home_state.handle_alert(alert);
            }
            Event::KeyboardDismiss() => {
                home_state.dismiss_alert();
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::UIScrollDown() => {
                home_state.scroll.down();
            }
            Event::UIScrollUp() => {
                home_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                home_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                home_state.scroll.up_page();
            }
            Event::UIResize() | Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    if disable_raw_mode().is_err() {
        return;
    }
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    service: ServiceBox,
    session: SessionContext,
    poll_interval: Duration,
) -> Result<()> {
    if let Err(err) = service.health_check().await {
        tracing::warn!(error = %err, "Plant server health check failed");
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let mut events = EventsService::new(event_rx);
    let mut home_state = HomeState::default();
    let mut screen = HomeScreen::new(service, poll_interval);

    home_state.activate();
    screen.activate(session, event_tx)?;

    let res = start_loop(&mut terminal, &mut home_state, &mut events).await;

    home_state.deactivate();
    screen.deactivate().await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return res;
}
