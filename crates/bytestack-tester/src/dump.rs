use core::fmt;

use bytestack::ByteStack;

const RULE: &str = "----------------------";

/// Human readable dump of a stack: occupancy summary followed by every
/// byte of the managed region, with the write (`wp>>`) and read (`rp>>`)
/// cursors marked.
pub struct StackDump<'s, 'a>(pub &'s ByteStack<'a>);

impl fmt::Display for StackDump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack = self.0;

        writeln!(f, "STACK DEBUG DATA:")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "The stack memory block has a size of {} bytes", stack.capacity())?;
        if stack.is_empty() {
            writeln!(f, "The stack is empty")?;
        } else if stack.is_full() {
            writeln!(f, "The stack is full")?;
        } else {
            writeln!(
                f,
                "The stack has {} bytes used and {} bytes free",
                stack.used_space(),
                stack.free_space()
            )?;
        }
        writeln!(f, "The stack is configured as a {}", stack.mode())?;
        writeln!(f)?;
        writeln!(f, "Stack memory content is:")?;
        writeln!(f, "{}", RULE)?;

        for (offset, byte) in stack.region().iter().enumerate() {
            let wp = if offset == stack.write_cursor() { "wp>>" } else { "    " };
            let rp = if offset == stack.read_cursor() { "rp>>" } else { "" };
            writeln!(f, "\t{}\t{:04}:0x{:02X}\t{}", wp, offset, byte, rp)?;
        }

        write!(f, "{}", RULE)
    }
}
