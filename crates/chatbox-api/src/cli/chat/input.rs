//! Raw-mode line editor for the chat loop.
//!
//! A readline crate would keep its own input history; the recall buffer
//! lives in the [`ConversationController`] so Up/Down are wired straight to
//! its cursor instead.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use chatbox_core::conversation::{ConversationController, TurnRelay};

/// What the user did with the line editor.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (untrimmed).
    Submitted(String),
    /// Ctrl+C, Ctrl+D, or Esc.
    Exit,
}

/// Restores cooked mode even when the editor returns early.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Read one line of input, letting Up/Down navigate the controller's
/// recall buffer.
///
/// Blocks the calling thread until Enter or an exit key. The prompt and the
/// current buffer are redrawn on every keystroke.
pub fn read_line<R: TurnRelay>(
    prompt: &str,
    chat: &mut ConversationController<R>,
) -> io::Result<InputEvent> {
    let _raw = RawMode::enable()?;
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    redraw(&mut stdout, prompt, &buffer)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Enter => {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                return Ok(InputEvent::Submitted(buffer));
            }
            KeyCode::Esc => {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                return Ok(InputEvent::Exit);
            }
            KeyCode::Char('c') | KeyCode::Char('d')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                return Ok(InputEvent::Exit);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(c);
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Up => {
                chat.recall_previous();
                buffer = chat.draft().to_string();
            }
            KeyCode::Down => {
                chat.recall_next();
                buffer = chat.draft().to_string();
            }
            _ => continue,
        }

        redraw(&mut stdout, prompt, &buffer)?;
    }
}

fn redraw(stdout: &mut io::Stdout, prompt: &str, buffer: &str) -> io::Result<()> {
    execute!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    write!(stdout, "{prompt}{buffer}")?;
    stdout.flush()
}
