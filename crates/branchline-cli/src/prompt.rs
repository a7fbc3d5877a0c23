//! Interactive temperature prompt. Re-prompts until a whole number arrives,
//! then prints the temperature band for it.

use std::io::{self, BufRead, Write};

use branchline_core::check_temperature;
use tracing::debug;

/// Read a temperature, re-prompting on anything that does not parse as a
/// whole number. Generic over the streams so tests can drive it with
/// buffers.
pub fn prompt_for_temperature<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<i32> {
    loop {
        write!(output, "Enter temperature: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a temperature was read",
            ));
        }

        match line.trim().parse::<i32>() {
            Ok(temp) => return Ok(temp),
            Err(_) => writeln!(output, "Please enter a valid number")?,
        }
    }
}

/// Wire the prompt to stdin and stdout, then print the verdict.
pub fn run() -> io::Result<()> {
    debug!("prompting for temperature");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let temp = prompt_for_temperature(&mut input, &mut output)?;
    writeln!(output, "{}", check_temperature(temp))?;
    Ok(())
}
