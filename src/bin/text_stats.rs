use std::io;

use anyhow::Result;

use arraylab::console::Console;
use arraylab::text::session;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    session::run(&mut console)
}
