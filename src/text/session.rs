// Program B: generate random strings and records, then answer the four
// analytics queries in one linear pass.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::thread_rng;

use super::records::{Banknote, Employee, Shape};
use super::{generate, stats};
use crate::console::Console;

const POSITIVE_ERROR: &str = "~{ ERROR! You must enter a positive integer! }~\n";
const CHAR_ERROR: &str = "~{ ERROR! Enter a single character! }~\n";

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let mut rng = thread_rng();

    let n = console.prompt_positive_int("Enter the number of lines N:", POSITIVE_ERROR)?;

    let strings: Vec<String> = (0..n)
        .map(|_| generate::random_string(&mut rng, generate::DEFAULT_STRING_LEN))
        .collect();
    console.writeln("\nGenerated strings:")?;
    for s in &strings {
        console.writeln(s)?;
    }

    console.writeln("\nGenerated records:")?;
    for _ in 0..n {
        let employee = Employee::random(&mut rng);
        let banknote = Banknote::random(&mut rng);
        let shape = Shape::random(&mut rng);
        console.writeln(&format!("{} | {} | {}", employee, banknote, shape))?;
    }
    console.writeln("")?;

    let symbol = console.prompt_char("Enter a character to count its repetitions:", CHAR_ERROR)?;
    console.writeln(&format!(
        "The number of repetitions of the symbol '{}' in the array: {}",
        symbol,
        stats::count_char_occurrences(&strings, symbol)
    ))?;

    console.writeln(&format!(
        "The longest sequence of repeated characters: {}",
        stats::find_longest_repetition(&strings)
    ))?;

    console.writeln(&format!(
        "Concatenation of all strings: {}",
        stats::concatenate_strings(&strings)
    ))?;

    let needle = console.prompt_token("Enter a substring to search for:")?;
    console.writeln(&format!(
        "The number of occurrences of the substring '{}' in the array: {}",
        needle,
        stats::count_substring_occurrences(&strings, &needle)
    ))?;

    Ok(())
}
