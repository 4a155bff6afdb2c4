/*! Fixed-capacity byte stack over a caller supplied memory region.

The stack keeps a read and a write cursor inside the region and wraps
both of them at its end, so pushes and reads that cross the end of the
region are split into two copies. It never allocates and does no
locking: callers sharing a stack between contexts must serialize access
themselves.

```
use bytestack::{ByteStack, Mode, StackError};

let mut memory = [0u8; 4];
let mut stack = ByteStack::new(&mut memory, Mode::Ring).unwrap();
stack.push(&[1, 2, 3, 4]).unwrap();
stack.push(&[5, 6]).unwrap();

let mut out = [0u8; 4];
stack.pop(&mut out, 4).unwrap();
assert_eq!(out, [3, 4, 5, 6]);
assert_eq!(stack.pop(&mut out, 1), Err(StackError::InsufficientData));
```
*/

#![no_std]

mod cursor;
mod devlog;
mod error;
mod mode;
mod stack;

pub use cursor::Cursor;
pub use error::StackError;
pub use mode::Mode;
pub use stack::ByteStack;

#[doc(hidden)]
pub use log as __log;
