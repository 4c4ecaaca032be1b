//! Frameworks Layer: Demo Runner
//!
//! Drives the `demoprogram` facades through a fixed transcript: utility
//! functions, arithmetic functions, then the error cases. The binary in
//! `main.rs` parses [`DemoArgs`], installs logging and writes the
//! transcript to stdout.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line arguments
//! - **[`logging`](logging/index.html)**: `tracing` subscriber setup

pub mod args;
pub mod logging;

pub use args::{DemoArgs, InvalidLogFormat, LogFormat};
pub use logging::{init_logging, init_test_logging, LoggingError};

use std::io::{self, Write};

use demoprogram::{calc, utility, CalcResult, Number};
use tracing::{debug, info};

const SECTION_RULE_WIDTH: usize = 50;
const HEADING_RULE_WIDTH: usize = 30;
const PI: f64 = 3.14159;

/// Write the full demo transcript
///
/// Arithmetic failures on the supplied operands are written in place as
/// `error: <message>` and do not stop the transcript.
///
/// # Arguments
/// * `args` - Operands and options
/// * `out` - Destination of the transcript
///
/// # Returns
/// Only I/O errors from `out`
pub fn run_demo<W: Write>(args: &DemoArgs, out: &mut W) -> io::Result<()> {
    info!(a = args.a, b = args.b, "running demo");
    writeln!(out, "=== Demo Program Package Usage ===")?;
    writeln!(out)?;

    write_utility_section(args, out)?;
    write_section_break(out)?;
    write_arithmetic_section(args, out)?;
    write_section_break(out)?;
    write_error_section(out)?;

    out.flush()
}

fn write_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(HEADING_RULE_WIDTH))
}

fn write_section_break<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(SECTION_RULE_WIDTH))?;
    writeln!(out)
}

fn write_utility_section<W: Write>(args: &DemoArgs, out: &mut W) -> io::Result<()> {
    debug!(section = "utility", "writing section");
    write_heading(out, "1. Utility Functions:")?;

    let text = args.text.as_str();
    writeln!(out, "Original text: {}", text)?;
    writeln!(out, "Reversed: {}", utility::reverse_string(text))?;
    writeln!(out, "Word count: {}", utility::count_words(text))?;
    for word in ["racecar", "hello"] {
        writeln!(
            out,
            "Is '{}' a palindrome? {}",
            word,
            utility::is_palindrome(word)
        )?;
    }

    if let Some(path) = &args.file {
        let size = utility::get_file_size(path);
        if size == utility::FILE_SIZE_UNAVAILABLE {
            writeln!(out, "File size of {}: unavailable", path.display())?;
        } else {
            writeln!(
                out,
                "File size of {}: {} ({} bytes)",
                path.display(),
                utility::format_bytes(size),
                size
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "System info: {}", utility::get_system_info())
}

fn write_arithmetic_section<W: Write>(args: &DemoArgs, out: &mut W) -> io::Result<()> {
    debug!(section = "arithmetic", "writing section");
    write_heading(out, "2. Arithmetic Functions:")?;

    let (a, b) = (args.a, args.b);
    writeln!(out, "Addition: {} + {} = {}", a, b, shown(calc::add(a, b)))?;
    writeln!(out, "Subtraction: {} - {} = {}", a, b, shown(calc::subtract(a, b)))?;
    writeln!(out, "Multiplication: {} * {} = {}", a, b, shown(calc::multiply(a, b)))?;
    writeln!(
        out,
        "Division: {} / {} = {}",
        a,
        b,
        rendered(calc::divide(a, b), |q| format!("{:.2}", q))
    )?;
    writeln!(out, "Power: {} ^ {} = {}", a, b, shown(calc::power(a, b)))?;

    writeln!(
        out,
        "Square root of {}: {}",
        a,
        rendered(calc::square_root(a), |r| format!("{:.2}", r))
    )?;
    writeln!(out, "Factorial of {}: {}", b, shown(calc::factorial(b)))?;
    writeln!(out, "GCD of {} and {}: {}", a, b, calc::gcd(a, b))?;
    writeln!(out, "LCM of {} and {}: {}", a, b, calc::lcm(a, b))?;

    writeln!(
        out,
        "Average of {}: {}",
        list_repr(&args.numbers),
        rendered(calc::average(args.numbers.as_slice()), |m| format!("{:.2}", m))
    )?;

    let (part, total) = (&args.part, &args.total);
    match calc::percentage(part.clone(), total.clone()) {
        Ok(fraction) => writeln!(out, "{} is {:.1}% of {}", part, fraction * 100.0, total)?,
        Err(e) => writeln!(out, "{} of {}: error: {}", part, total, e)?,
    }

    writeln!(
        out,
        "Pi rounded to 2 decimal places: {:?}",
        calc::round_to_decimal(PI, 2)
    )?;
    writeln!(
        out,
        "Pi rounded to 4 decimal places: {:?}",
        calc::round_to_decimal(PI, 4)
    )
}

fn write_error_section<W: Write>(out: &mut W) -> io::Result<()> {
    debug!(section = "errors", "writing section");
    write_heading(out, "3. Error Handling Examples:")?;

    if let Err(e) = calc::divide(10, 0) {
        writeln!(out, "Division by zero error: {}", e)?;
    }
    if let Err(e) = calc::square_root(-4) {
        writeln!(out, "Square root error: {}", e)?;
    }
    if let Err(e) = calc::factorial(-1) {
        writeln!(out, "Factorial error: {}", e)?;
    }
    if let Err(e) = calc::average::<Number>(&[]) {
        writeln!(out, "Average error: {}", e)?;
    }
    Ok(())
}

fn shown<T: std::fmt::Display>(result: CalcResult<T>) -> String {
    rendered(result, |value| value.to_string())
}

fn rendered<T>(result: CalcResult<T>, render: impl FnOnce(T) -> String) -> String {
    match result {
        Ok(value) => render(value),
        Err(e) => {
            debug!(error = %e, "operation failed");
            format!("error: {}", e)
        }
    }
}

/// `[1, 2.5, 3]`
fn list_repr(numbers: &[Number]) -> String {
    let items: Vec<String> = numbers.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
