use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    event::{read, Event, KeyCode, KeyEvent, KeyModifiers},
    style::{style, Attribute, Color, PrintStyledContent},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
    QueueableCommand,
};

use std::io::{stdout, Stdout, Write};

use tictactoe_ai::board::{Board, Cell, Mark};
use tictactoe_ai::SIZE;

fn cell_at(row: usize, column: usize) -> Cell {
    Cell::new(row, column).expect("cursor coordinates stay on the grid")
}

/// Raw input mode held for the guard's lifetime. Dropping restores the
/// terminal on every exit path, early error returns included.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn draw_board_at(
    stdout: &mut Stdout,
    board: &Board,
    cursor: Option<Cell>,
    origin_row: u16,
) -> Result<()> {
    for row in 0..SIZE {
        stdout
            .queue(MoveTo(0, origin_row + row as u16))?
            .queue(Clear(ClearType::CurrentLine))?;
        for column in 0..SIZE {
            if column > 0 {
                stdout.queue(PrintStyledContent(style(" | ")))?;
            }
            let cell = cell_at(row, column);
            let mark = board.mark_at(cell);
            let bracketed = cursor == Some(cell);

            stdout
                .queue(PrintStyledContent(style(if bracketed { "[" } else { " " })))?
                .queue(PrintStyledContent(
                    style(mark.to_string())
                        .attribute(Attribute::Bold)
                        .with(match mark {
                            Mark::X => Color::Red,
                            Mark::O => Color::Yellow,
                            Mark::Empty => Color::Grey,
                        }),
                ))?
                .queue(PrintStyledContent(style(if bracketed { "]" } else { " " })))?;
        }
    }
    Ok(())
}

/// Prints the board below the current cursor position and leaves the
/// terminal cursor underneath it.
pub fn print_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    for _ in 0..SIZE {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (_, below) = crossterm::cursor::position()?;
    draw_board_at(&mut stdout, board, None, below.saturating_sub(SIZE as u16))?;
    stdout.queue(MoveTo(0, below))?;
    stdout.flush()?;
    Ok(())
}

/// Interactive cell selection: arrow keys (or hjkl) move, enter picks.
/// Returns `None` when the player quits with q, escape or ctrl-c.
pub fn pick_cell(board: &Board, status: &str) -> Result<Option<Cell>> {
    let mut stdout = stdout();

    // reserve the board area plus a status line
    for _ in 0..SIZE + 1 {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    let (_, below) = crossterm::cursor::position()?;
    let origin = below.saturating_sub(SIZE as u16 + 1);

    let start = board
        .first_empty_cell()
        .expect("a finished board never reaches cell selection");
    let (mut row, mut column) = (start.row(), start.column());

    let raw = RawMode::enable()?;
    let picked = loop {
        draw_board_at(&mut stdout, board, Some(cell_at(row, column)), origin)?;
        stdout
            .queue(MoveTo(0, origin + SIZE as u16))?
            .queue(Clear(ClearType::CurrentLine))?
            .queue(PrintStyledContent(style(status)))?;
        stdout.flush()?;

        if let Event::Key(KeyEvent { code, modifiers }) = read()? {
            match code {
                KeyCode::Up | KeyCode::Char('k') => row = row.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => {
                    if row < SIZE - 1 {
                        row += 1;
                    }
                }
                KeyCode::Left | KeyCode::Char('h') => column = column.saturating_sub(1),
                KeyCode::Right | KeyCode::Char('l') => {
                    if column < SIZE - 1 {
                        column += 1;
                    }
                }
                KeyCode::Enter => break Some(cell_at(row, column)),
                KeyCode::Esc | KeyCode::Char('q') => break None,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break None,
                _ => {}
            }
        }
    };
    drop(raw);

    stdout.queue(MoveTo(0, below))?;
    stdout.flush()?;
    Ok(picked)
}

/// A "> [ ] option" selection menu. Returns the picked index, or `None`
/// when the player quits.
pub fn menu(title: &str, options: &[&str]) -> Result<Option<usize>> {
    let mut stdout = stdout();

    println!("{}", title);
    println!();
    for _ in 0..options.len() {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    let (_, below) = crossterm::cursor::position()?;
    let origin = below.saturating_sub(options.len() as u16);

    let mut selected = 0;
    let raw = RawMode::enable()?;
    let picked = loop {
        for (index, option) in options.iter().enumerate() {
            let line = format!(
                "{} [ ] {}",
                if index == selected { ">" } else { " " },
                option
            );
            let mut content = style(line);
            if index == selected {
                content = content.attribute(Attribute::Bold);
            }
            stdout
                .queue(MoveTo(0, origin + index as u16))?
                .queue(Clear(ClearType::CurrentLine))?
                .queue(PrintStyledContent(content))?;
        }
        stdout.flush()?;

        if let Event::Key(KeyEvent { code, modifiers }) = read()? {
            match code {
                KeyCode::Up | KeyCode::Char('k') => selected = selected.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => {
                    if selected < options.len() - 1 {
                        selected += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => break Some(selected),
                KeyCode::Esc | KeyCode::Char('q') => break None,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break None,
                _ => {}
            }
        }
    };
    drop(raw);

    stdout.queue(MoveTo(0, below))?;
    stdout.flush()?;
    Ok(picked)
}
