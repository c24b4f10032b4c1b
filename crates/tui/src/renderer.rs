use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flashblocks_core::views::comparison::render_comparison;
use flashblocks_core::{BuildingId, ConstructionEngine};
use flashblocks_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect as CellRect,
    style::Color,
};

/// Poll timeout while the race is running — roughly one display frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll timeout once both tracks have topped out.
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Sky => Color::Rgb(18, 32, 48),
        ThemeToken::Ground => Color::Rgb(60, 50, 40),
        ThemeToken::PanelBackground => Color::Rgb(25, 25, 30),
        ThemeToken::Border => Color::DarkGray,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::BurjPrimary => Color::Rgb(80, 160, 220),
        ThemeToken::BurjAccent => Color::Rgb(140, 200, 240),
        ThemeToken::BurjGlass => Color::Rgb(110, 180, 230),
        ThemeToken::EiffelPrimary => Color::Rgb(140, 140, 150),
        ThemeToken::EiffelAccent => Color::Rgb(180, 180, 190),
        ThemeToken::EmpirePrimary => Color::Rgb(200, 150, 60),
        ThemeToken::EmpireAccent => Color::Rgb(230, 190, 110),
        ThemeToken::Scaffold => Color::Rgb(120, 100, 60),
        ThemeToken::Crane => Color::Yellow,
        ThemeToken::ProgressBackground => Color::Rgb(40, 40, 45),
        ThemeToken::FastTrackFill => Color::Green,
        ThemeToken::SlowTrackFill => Color::Red,
        ThemeToken::SelectionHighlight => Color::Green,
        ThemeToken::FooterText => Color::Rgb(255, 95, 31),
    }
}

/// Run the demo until the user quits. Owns terminal setup and teardown; the
/// engine is disposed before the terminal is restored.
pub fn run(mut engine: ConstructionEngine) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut engine);

    engine.dispose();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    engine: &mut ConstructionEngine,
) -> Result<()> {
    loop {
        // One step per display frame; both tracks advance from the same
        // elapsed sample.
        engine.step();

        let term_size = terminal.size()?;
        let viewport = Viewport::new(f64::from(term_size.width), f64::from(term_size.height));
        let commands = render_comparison(engine, &viewport);

        terminal.draw(|frame| paint(frame, &commands))?;

        // The poll timeout is the frame scheduler: short while animating,
        // relaxed once both tracks have topped out.
        let timeout = if engine.is_animating() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('1') | KeyCode::Char('b') => {
                        engine.select(BuildingId::BurjKhalifa);
                    }
                    KeyCode::Char('2') | KeyCode::Char('e') => {
                        engine.select(BuildingId::EiffelTower);
                    }
                    KeyCode::Char('3') | KeyCode::Char('m') => {
                        engine.select(BuildingId::EmpireState);
                    }
                    KeyCode::Char('r') => engine.start(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Paint a command list into the frame buffer, mapping logical units 1:1
/// onto terminal cells.
fn paint(frame: &mut ratatui::Frame<'_>, commands: &[RenderCommand]) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
            } => {
                let cells = to_cells(*rect, area);
                let bg = theme_to_color(*color);
                for y in cells.top()..cells.bottom() {
                    for x in cells.left()..cells.right() {
                        buf[(x, y)].set_char(' ').set_bg(bg);
                    }
                }
                if let Some(border) = border_color {
                    draw_border(buf, cells, theme_to_color(*border), bg);
                }
                if let Some(label) = label {
                    let y = cells.top() + cells.height / 2;
                    put_text(
                        buf,
                        area,
                        Point::new(f64::from(rect.center_x() as u16), f64::from(y)),
                        label,
                        Color::White,
                        TextAlign::Center,
                    );
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
            } => {
                put_text(buf, area, *position, text, theme_to_color(*color), *align);
            }
            RenderCommand::DrawLine { from, to, color } => {
                draw_line(buf, area, *from, *to, theme_to_color(*color));
            }
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }
}

/// Clamp a logical rect to the cell grid.
fn to_cells(rect: Rect, area: CellRect) -> CellRect {
    let x = (rect.x.max(0.0) as u16).min(area.width);
    let y = (rect.y.max(0.0) as u16).min(area.height);
    let w = (rect.w.round().max(0.0) as u16).min(area.width.saturating_sub(x));
    let h = (rect.h.round().max(1.0) as u16).min(area.height.saturating_sub(y));
    CellRect::new(x, y, w, h)
}

fn draw_border(buf: &mut ratatui::buffer::Buffer, cells: CellRect, fg: Color, bg: Color) {
    if cells.width == 0 || cells.height == 0 {
        return;
    }
    let right = cells.right().saturating_sub(1);
    let bottom = cells.bottom().saturating_sub(1);
    for x in cells.left()..cells.right() {
        buf[(x, cells.top())].set_char('─').set_fg(fg).set_bg(bg);
        buf[(x, bottom)].set_char('─').set_fg(fg).set_bg(bg);
    }
    for y in cells.top()..cells.bottom() {
        buf[(cells.left(), y)].set_char('│').set_fg(fg).set_bg(bg);
        buf[(right, y)].set_char('│').set_fg(fg).set_bg(bg);
    }
    buf[(cells.left(), cells.top())].set_char('┌');
    buf[(right, cells.top())].set_char('┐');
    buf[(cells.left(), bottom)].set_char('└');
    buf[(right, bottom)].set_char('┘');
}

fn put_text(
    buf: &mut ratatui::buffer::Buffer,
    area: CellRect,
    position: Point,
    text: &str,
    fg: Color,
    align: TextAlign,
) {
    let len = text.chars().count() as i32;
    let anchor = position.x as i32;
    let start = match align {
        TextAlign::Left => anchor,
        TextAlign::Center => anchor - len / 2,
        TextAlign::Right => anchor - len,
    };
    let y = position.y as u16;
    if y >= area.height {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let x = start + i as i32;
        if x < 0 || x >= i32::from(area.width) {
            continue;
        }
        buf[(x as u16, y)].set_char(ch).set_fg(fg);
    }
}

/// Bresenham over cells; lines here are crane jibs, masts, and lattice
/// braces, all short.
fn draw_line(buf: &mut ratatui::buffer::Buffer, area: CellRect, from: Point, to: Point, fg: Color) {
    let (mut x0, mut y0) = (from.x.round() as i32, from.y.round() as i32);
    let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let glyph = if dx == 0 {
        '│'
    } else if dy == 0 {
        '─'
    } else {
        '╱'
    };

    loop {
        if x0 >= 0 && y0 >= 0 && x0 < i32::from(area.width) && y0 < i32::from(area.height) {
            buf[(x0 as u16, y0 as u16)].set_char(glyph).set_fg(fg);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
