//! The fetch-decode-execute engine: owns every other component (registers,
//! flags, call stack, data memory, device bus) and drives them through
//! `step`/`run`.

use std::num::Wrapping;

use crate::bus::DeviceBus;
use crate::callstack::CallStack;
use crate::decode::{decode, Condition, Opcode};
use crate::error::RunOutcome;
use crate::flags::Flags;
use crate::memory::DataMemory;
use crate::peripherals::{CharOutput, Framebuffer, NumberDisplay, RandomByteSource, Rng};
use crate::registers::Registers;

/// Maximum instruction memory size (10-bit PC).
pub const PROGRAM_CAPACITY: usize = 1024;

/// Whether the core is ready to step, mid-run, or halted.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum State {
    Ready,
    Running,
    Halted,
}

/// The BatPU-2 emulator core.
///
/// `Cpu` is generic over its random byte source so tests can inject a fixed
/// seed; [`Cpu::new`] wires up the default [`Rng`] seeded deterministically.
pub struct Cpu<R: RandomByteSource = Rng> {
    registers: Registers,
    flags: Flags,
    call_stack: CallStack,
    memory: DataMemory,
    bus: DeviceBus<R>,
    program: Vec<u16>,
    pc: u16,
    state: State,
    instruction_count: u64,
}

impl Cpu<Rng> {
    /// A core with an empty program and the default deterministic RNG seed.
    pub fn new() -> Cpu<Rng> {
        Cpu::with_rng(Rng::new())
    }
}

impl Default for Cpu<Rng> {
    fn default() -> Cpu<Rng> {
        Cpu::new()
    }
}

impl<R: RandomByteSource> Cpu<R> {
    /// A core with an empty program, using the given random byte source.
    pub fn with_rng(rng: R) -> Cpu<R> {
        Cpu {
            registers: Registers::new(),
            flags: Flags::new(),
            call_stack: CallStack::new(),
            memory: DataMemory::new(),
            bus: DeviceBus::new(rng),
            program: Vec::new(),
            pc: 0,
            state: State::Ready,
            instruction_count: 0,
        }
    }

    /// Load a new program image. Truncates to [`PROGRAM_CAPACITY`] words if
    /// longer (instructions beyond the 1024th word are unaddressable by a
    /// 10-bit PC and are simply never fetched).
    pub fn load(&mut self, mut program: Vec<u16>) {
        program.truncate(PROGRAM_CAPACITY);
        self.program = program;
        self.reset();
    }

    /// Reset all state except the loaded program image.
    pub fn reset(&mut self) {
        self.registers.reset();
        self.flags.reset();
        self.call_stack.reset();
        self.memory.reset();
        self.bus.reset();
        self.pc = 0;
        self.state = State::Ready;
        self.instruction_count = 0;
    }

    //region Observer API

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn registers(&self) -> [u8; 16] {
        self.registers.snapshot()
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    pub fn memory_snapshot(&self) -> [u8; 256] {
        self.memory.snapshot()
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.bus.framebuffer
    }

    pub fn char_output(&self) -> &CharOutput {
        &self.bus.char_output
    }

    pub fn number_display(&self) -> &NumberDisplay {
        &self.bus.number_display
    }

    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    pub fn call_stack_depth(&self) -> usize {
        self.call_stack.depth()
    }

    //endregion

    /// Execute one instruction. Returns `false` (and transitions to
    /// `Halted`) if the core was already halted or the PC has run past the
    /// end of the program; returns `true` otherwise.
    pub fn step(&mut self) -> bool {
        if self.state == State::Halted || (self.pc as usize) >= self.program.len() {
            self.state = State::Halted;
            return false;
        }

        self.state = State::Running;
        let word = self.program[self.pc as usize];
        let instr = decode(word);

        let mut next_pc = self.pc.wrapping_add(1);
        self.dispatch(&instr, &mut next_pc);

        self.pc = next_pc;
        self.instruction_count += 1;
        // Register 0 never needed re-zeroing: every write above went through
        // `Registers::set`, which already discards writes to cell 0.
        true
    }

    /// Run until halted or `max_steps` instructions have been retired,
    /// whichever comes first.
    pub fn run(&mut self, max_steps: u64) -> RunOutcome {
        let mut retired = 0u64;
        while retired < max_steps {
            if !self.step() {
                return RunOutcome::Halted;
            }
            retired += 1;
        }
        RunOutcome::BudgetExhausted
    }

    fn dispatch(&mut self, instr: &crate::decode::Instruction, next_pc: &mut u16) {
        match instr.opcode {
            Opcode::Nop => {}

            Opcode::Hlt => {
                self.state = State::Halted;
                *next_pc = self.pc;
            }

            Opcode::Add => {
                let a = self.registers.get(instr.a) as u16;
                let b = self.registers.get(instr.b) as u16;
                let sum = a + b;
                self.flags.set_carry(sum > 255);
                let result = (sum & 0xFF) as u8;
                self.flags.set_zero(result == 0);
                self.registers.set(instr.c, result);
            }

            Opcode::Sub => {
                let a = self.registers.get(instr.a);
                let b = self.registers.get(instr.b);
                self.flags.set_carry(a >= b);
                let result = (Wrapping(a) - Wrapping(b)).0;
                self.flags.set_zero(result == 0);
                self.registers.set(instr.c, result);
            }

            Opcode::Nor => {
                let a = self.registers.get(instr.a);
                let b = self.registers.get(instr.b);
                let result = !(a | b);
                self.flags.set_zero(result == 0);
                self.registers.set(instr.c, result);
            }

            Opcode::And => {
                let a = self.registers.get(instr.a);
                let b = self.registers.get(instr.b);
                let result = a & b;
                self.flags.set_zero(result == 0);
                self.registers.set(instr.c, result);
            }

            Opcode::Xor => {
                let a = self.registers.get(instr.a);
                let b = self.registers.get(instr.b);
                let result = a ^ b;
                self.flags.set_zero(result == 0);
                self.registers.set(instr.c, result);
            }

            Opcode::Rsh => {
                let a = self.registers.get(instr.a);
                self.flags.set_carry(a & 1 != 0);
                let result = a >> 1;
                self.flags.set_zero(result == 0);
                self.registers.set(instr.c, result);
            }

            Opcode::Ldi => {
                // Flags are explicitly unchanged by LDI.
                self.registers.set(instr.a, instr.imm8);
            }

            Opcode::Adi => {
                let a = self.registers.get(instr.a) as i32;
                let sum = a + instr.imm8_signed as i32;
                self.flags.set_carry(sum > 255 || sum < 0);
                let result = (sum & 0xFF) as u8;
                self.flags.set_zero(result == 0);
                self.registers.set(instr.a, result);
            }

            Opcode::Jmp => {
                *next_pc = instr.imm10;
            }

            Opcode::Brh => {
                let taken = match instr.cond {
                    Condition::Eq => self.flags.zero(),
                    Condition::Ne => !self.flags.zero(),
                    Condition::Ge => self.flags.carry(),
                    Condition::Lt => !self.flags.carry(),
                };
                if taken {
                    *next_pc = instr.imm10;
                }
            }

            Opcode::Cal => match self.call_stack.push(self.pc.wrapping_add(1)) {
                Ok(()) => *next_pc = instr.imm10,
                Err(fault) => tracing::warn!(pc = self.pc, "{fault}"),
            },

            Opcode::Ret => match self.call_stack.pop() {
                Ok(addr) => *next_pc = addr,
                Err(fault) => tracing::warn!(pc = self.pc, "{fault}"),
            },

            Opcode::Lod => {
                let addr = self.registers.get(instr.b).wrapping_add(instr.offset as u8);
                let value = self.read_data(addr);
                self.registers.set(instr.a, value);
            }

            Opcode::Str => {
                let addr = self.registers.get(instr.a).wrapping_add(instr.offset as u8);
                let value = self.registers.get(instr.b);
                self.write_data(addr, value);
            }
        }
    }

    fn read_data(&mut self, addr: u8) -> u8 {
        if DataMemory::is_port(addr) {
            self.bus.read(addr)
        } else {
            self.memory.read(addr)
        }
    }

    fn write_data(&mut self, addr: u8, value: u8) {
        if DataMemory::is_port(addr) {
            self.bus.write(addr, value);
        } else {
            self.memory.write(addr, value);
        }
    }
}
