use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::rect::Rect;
use crate::theme::TreeTheme;
use crate::view::{RowTemplate, TreeView};

/// What the gesture side of the backend can deliver. Drag reparenting needs
/// press/move/release reporting, which in turn needs mouse capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub drag: bool,
}

/// Terminal session owning raw mode, the alternate screen and mouse
/// capture. Everything is restored on drop.
pub struct Screen {
    stdout: io::Stdout,
    mouse: bool,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        // Mouse capture failing is not fatal here; it surfaces as a missing
        // capability, which a draggable widget then refuses at construction.
        let mouse = execute!(stdout, event::EnableMouseCapture).is_ok();

        Ok(Self { stdout, mouse })
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities { drag: self.mouse }
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn area(&self) -> io::Result<Rect> {
        let (width, height) = terminal::size()?;
        Ok(Rect::from_size(width, height))
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw the view into `area`, one row per line, clipping and filling the
    /// rest of the area with the background.
    pub fn draw(
        &mut self,
        view: &TreeView,
        template: &RowTemplate,
        theme: &TreeTheme,
        area: Rect,
    ) -> io::Result<()> {
        if area.is_empty() {
            return Ok(());
        }

        let bg = ct_color(theme.background.to_rgb());
        let width = area.width as usize;

        for line in 0..area.height {
            let y = area.y + line;
            queue!(self.stdout, cursor::MoveTo(area.x, y))?;

            match view.row(line as usize) {
                Some(row) => {
                    let (fg, row_bg) = if row.selected {
                        (
                            ct_color(theme.selected_fg.to_rgb()),
                            ct_color(theme.selected_bg.to_rgb()),
                        )
                    } else {
                        (ct_color(theme.foreground.to_rgb()), bg)
                    };

                    let text = pad_to_width(&truncate_to_width(&template.instantiate(row), width), width);

                    queue!(self.stdout, SetForegroundColor(fg), SetBackgroundColor(row_bg))?;
                    if row.dragging {
                        queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                    }
                    queue!(self.stdout, Print(text), SetAttribute(Attribute::Reset))?;
                }
                None => {
                    queue!(
                        self.stdout,
                        SetBackgroundColor(bg),
                        Print(" ".repeat(width)),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
            }
        }

        self.stdout.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(self.stdout, event::DisableMouseCapture);
        }
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn ct_color((r, g, b): (u8, u8, u8)) -> CtColor {
    CtColor::Rgb { r, g, b }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    let mut padded = s.to_string();
    padded.extend(std::iter::repeat(' ').take(padding));
    padded
}
