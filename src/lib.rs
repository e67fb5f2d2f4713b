//! Instruction-set emulator core for BatPU-2, an 8-bit Harvard-architecture
//! teaching CPU.
//!
//! This crate is the execution engine only: instruction decoding, ALU and
//! flag semantics, control transfer, memory access with port
//! demultiplexing, and the MMIO device model (framebuffer, character
//! output, numeric display, RNG, controller input). It does not assemble
//! textual mnemonics, provide a REPL/CLI, serve an HTTP front-end, read
//! `.mc`/`.as` files from disk, or render the framebuffer to pixels; those
//! are external collaborators built on top of the API in [`cpu`].

#[macro_use]
extern crate bitflags;

pub mod bus;
pub mod callstack;
pub mod cpu;
pub mod decode;
pub mod disasm;
pub mod error;
pub mod flags;
pub mod loader;
pub mod memory;
pub mod peripherals;
pub mod registers;

pub mod prelude {
    pub use crate::cpu::{Cpu, State};
    pub use crate::decode::{decode, Condition, Instruction, Opcode};
    pub use crate::disasm::disassemble;
    pub use crate::error::{Fault, RunOutcome};
}
