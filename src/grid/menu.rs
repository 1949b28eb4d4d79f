// Program A: the array manipulation menu. Commands are integers 0..=6; any
// other token prints "Unknown command." and the loop re-prompts with the
// board untouched.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::thread_rng;

use super::board::Board;
use super::{fill, mines};
use crate::console::{validate, Console};

const INT_ERROR: &str = "~{ ERROR! Enter a valid integer! }~\n";
const POSITIVE_ERROR: &str = "~{ ERROR! You must enter a positive integer! }~\n";
const NONNEG_ERROR: &str = "~{ ERROR! You must enter an integer of zero or more! }~\n";
const UNKNOWN_COMMAND: &str = "Unknown command.\n";

const HELP: &str = "\n~~[ LIST OF ACTIONS WITH ARRAY ]~~\n\
    [1] Clear the array and fill it with zeros.\n\
    [2] Fill the array so that it is symmetric with respect to the main diagonal.\n\
    [3] Fill the array so that it is symmetric with respect to the anti-diagonal.\n\
    [4] Fill the array so that it forms Pascal's triangle.\n\
    [5] Fill the array for playing minesweeper.\n\
    [6] Exit.\n";

/// Run the whole program: size input, board creation, command loop. Returns
/// the final board so callers can inspect where a session ended up.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Board> {
    let size = console.prompt_positive_int(
        "Enter the desired array size (positive integer):",
        POSITIVE_ERROR,
    )?;
    let mut board = Board::new(size);
    console.writeln(&format!(
        "OK! An array with dimension [{0}x{0}] is created!",
        size
    ))?;
    console.writeln("An initialized array:")?;
    console.write(&board.to_string())?;

    loop {
        console.writeln("\n==[Array Manipulation Menu]==")?;
        console.writeln("Enter the desired action (enter 0 for help):")?;
        let token = console.next_token()?;
        let command = match validate::parse_int(&token) {
            Ok(n) => n,
            Err(_) => {
                console.writeln(UNKNOWN_COMMAND)?;
                continue;
            }
        };
        if dispatch(command, &mut board, console)? {
            break;
        }
    }
    Ok(board)
}

/// Execute one menu command. Returns `true` when the session should end.
pub fn dispatch<R: BufRead, W: Write>(
    command: i32,
    board: &mut Board,
    console: &mut Console<R, W>,
) -> Result<bool> {
    match command {
        0 => console.writeln(HELP)?,
        1 => {
            console.writeln("\n{ You chose the 1st action! }")?;
            fill::zero_fill(board);
            console.writeln("{ DONE! The array was filled with zeros: }")?;
            console.write(&board.to_string())?;
        }
        2 => {
            console.writeln("\n{ You chose the 2nd action! }")?;
            console.writeln(
                "Enter the values for the upper triangle of the matrix (including the diagonal):",
            )?;
            fill::main_diagonal_fill(board, |i, j| {
                console.prompt_int(&format!("Value for element [{}][{}]:", i, j), INT_ERROR)
            })?;
            console.writeln("{ DONE! The array now looks like this: }")?;
            console.write(&board.to_string())?;
        }
        3 => {
            console.writeln("\n{ You chose the 3rd action! }")?;
            console.writeln(
                "Enter the values for the upper triangle of the matrix (including the diagonal):",
            )?;
            fill::anti_diagonal_fill(board, |i, j| {
                console.prompt_int(&format!("Value for element [{}][{}]:", i, j), INT_ERROR)
            })?;
            console.writeln("{ DONE! The array now looks like this: }")?;
            console.write(&board.to_string())?;
        }
        4 => match fill::pascal_fill(board) {
            Ok(()) => {
                console.writeln("\n{ You chose the 4th action! }")?;
                console.writeln("{ DONE! The array was filled as Pascal's triangle: }")?;
                console.write(&board.to_string())?;
            }
            Err(e) => console.writeln(&format!("\n{{ ERROR! {} }}\n", e))?,
        },
        5 => {
            console.writeln("\n{ You chose the 5th action! }")?;
            console.writeln(&format!(
                "The maximum number of mines: {}",
                mines::suggested_max_mines(board.size())
            ))?;
            let count =
                console.prompt_nonneg_int("Enter the desired number of mines:", NONNEG_ERROR)?;
            match mines::mine_fill(board, count, &mut thread_rng()) {
                Ok(()) => {
                    console.writeln("{ DONE! The array was filled for MineSweeper: }")?;
                    console.write(&board.to_string())?;
                }
                Err(e) => console.writeln(&format!("\n{{ ERROR! {} }}\n", e))?,
            }
        }
        6 => {
            console.writeln("\n{ You chose the 6th action! }")?;
            console.writeln("You exited from the menu.\n")?;
            return Ok(true);
        }
        _ => console.writeln(UNKNOWN_COMMAND)?,
    }
    Ok(false)
}
