mod dump;
mod input;

use bytestack::{ByteStack, Mode};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::dump::StackDump;
use crate::input::{IO_DATA_MAX, MAX_HEX_CHARS, format_bytes, parse_count, parse_hex};

/// Largest memory block the tester will set up.
const MAX_CAPACITY: u64 = 4096;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Fifo,
    Ring,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Fifo => Mode::Fifo,
            ModeArg::Ring => Mode::Ring,
        }
    }
}

/// Interactive tester for a byte stack working as a FIFO queue or as a
/// ring buffer.
#[derive(Parser, Debug)]
struct Args {
    /// Operation mode. When missing, it is asked for interactively.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Size in bytes of the memory block managed by the stack.
    #[arg(
        long,
        default_value_t = 32,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_CAPACITY)
    )]
    capacity: usize,
}

/// Reads a line, mapping Ctrl-C and Ctrl-D to `None` so that they end the
/// session like `q` does.
fn prompt(rl: &mut DefaultEditor, text: &str) -> rustyline::Result<Option<String>> {
    match rl.readline(text) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e),
    }
}

fn ask_mode(rl: &mut DefaultEditor) -> rustyline::Result<Option<Mode>> {
    println!("Please choose the type of stack to test:");
    println!("1 - FIFO queue stack");
    println!("2 - Ring buffer stack");
    println!("q - QUIT");
    println!();

    loop {
        let Some(line) = prompt(rl, "Please enter command: ")? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match line.parse::<u8>().map(Mode::try_from) {
            Ok(Ok(mode)) => return Ok(Some(mode)),
            _ => println!("Please enter a valid command"),
        }
    }
}

/// Returns `false` when the user ended the session instead of entering data.
fn push_command(rl: &mut DefaultEditor, stack: &mut ByteStack) -> rustyline::Result<bool> {
    println!("Please input the data you want to PUSH into the stack and press ENTER...");
    println!("Use hex format (numbers [0,9] and letters [A,F])");
    println!(
        "Input a maximum of {} bytes ({} chars) in one go, first bytes written will be first bytes pushed",
        IO_DATA_MAX, MAX_HEX_CHARS
    );
    println!("----------------------");

    let bytes = loop {
        let Some(line) = prompt(rl, "Data: ")? else {
            return Ok(false);
        };
        match parse_hex(&line) {
            Ok(bytes) => break bytes,
            Err(e) => println!("{}", e),
        }
    };

    println!("The following {} bytes will be pushed: {}", bytes.len(), format_bytes(&bytes));
    match stack.push(&bytes) {
        Ok(()) => info!("Pushed {} bytes, {} bytes stored", bytes.len(), stack.used_space()),
        Err(e) => println!("Push failed: {} (code {})", e, e.code()),
    }

    Ok(true)
}

/// Returns `false` when the user ended the session instead of entering a
/// count.
fn pop_command(rl: &mut DefaultEditor, stack: &mut ByteStack) -> rustyline::Result<bool> {
    println!("Please input the amount of bytes you want to POP from the stack and press ENTER...");
    println!("A maximum of {} bytes can be popped in one go", IO_DATA_MAX);
    println!("----------------------");

    let Some(line) = prompt(rl, "Data: ")? else {
        return Ok(false);
    };
    let count = match parse_count(&line) {
        Ok(count) => count,
        Err(e) => {
            println!("{}", e);
            return Ok(true);
        }
    };

    let mut out = [0u8; IO_DATA_MAX];
    match stack.pop(&mut out, count) {
        Ok(()) => println!("Popped {} bytes: {}", count, format_bytes(&out[..count])),
        Err(e) => println!("Pop failed: {} (code {})", e, e.code()),
    }

    Ok(true)
}

fn main() -> rustyline::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let mut rl = DefaultEditor::new()?;

    let mode = match args.mode {
        Some(mode) => Mode::from(mode),
        None => match ask_mode(&mut rl)? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };

    // The tester owns the memory block; the stack only borrows it.
    let mut memory = vec![0u8; args.capacity];
    let mut stack = match ByteStack::new(&mut memory, mode) {
        Ok(stack) => stack,
        Err(e) => {
            error!("Cannot set up a stack of {} bytes: {} (code {})", args.capacity, e, e.code());
            std::process::exit(1);
        }
    };
    info!("Managing a {} byte memory block as a {}", stack.capacity(), stack.mode());

    loop {
        println!();
        println!("MENU STACK:");
        println!("1 - PUSH");
        println!("2 - POP");
        println!("3 - DEBUG STACK");
        println!("q - QUIT");
        println!();

        let Some(line) = prompt(&mut rl, "Please enter command: ")? else {
            break;
        };
        let keep_going = match line.trim() {
            "1" => push_command(&mut rl, &mut stack)?,
            "2" => pop_command(&mut rl, &mut stack)?,
            "3" => {
                println!("{}", StackDump(&stack));
                true
            }
            "q" | "Q" => false,
            _ => {
                println!("Please enter a valid command");
                true
            }
        };
        if !keep_going {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Args, MAX_CAPACITY};
    use clap::Parser;

    #[test]
    fn test_capacity_default() {
        let args = Args::try_parse_from(["bytestack-tester"]).unwrap();
        assert_eq!(args.capacity, 32);
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_capacity_bounds_accepted() {
        let args = Args::try_parse_from(["bytestack-tester", "--capacity", "1"]).unwrap();
        assert_eq!(args.capacity, 1);
        let max = MAX_CAPACITY.to_string();
        let args = Args::try_parse_from(["bytestack-tester", "--capacity", max.as_str()]).unwrap();
        assert_eq!(args.capacity, MAX_CAPACITY as usize);
    }

    #[test]
    fn test_capacity_out_of_range_rejected() {
        let too_big = (MAX_CAPACITY + 1).to_string();
        assert!(Args::try_parse_from(["bytestack-tester", "--capacity", "0"]).is_err());
        assert!(Args::try_parse_from(["bytestack-tester", "--capacity", too_big.as_str()]).is_err());
        assert!(Args::try_parse_from(["bytestack-tester", "--capacity", "18446744073709551615"]).is_err());
    }

    #[test]
    fn test_mode_flag() {
        let args = Args::try_parse_from(["bytestack-tester", "--mode", "ring"]).unwrap();
        assert!(matches!(args.mode, Some(super::ModeArg::Ring)));
    }
}
