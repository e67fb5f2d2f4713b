//! Stable textual disassembly of a single instruction word.

use crate::decode::{decode, Opcode};

/// Render `word` in the disassembly format specified for debuggers and
/// tests: register operands as `r{N}`, immediates and addresses as decimal,
/// branch conditions as their uppercase mnemonic.
pub fn disassemble(word: u16) -> String {
    let d = decode(word);
    match d.opcode {
        Opcode::Nop => "NOP".to_string(),
        Opcode::Hlt => "HLT".to_string(),
        Opcode::Add => format!("ADD r{}, r{}, r{}", d.a, d.b, d.c),
        Opcode::Sub => format!("SUB r{}, r{}, r{}", d.a, d.b, d.c),
        Opcode::Nor => format!("NOR r{}, r{}, r{}", d.a, d.b, d.c),
        Opcode::And => format!("AND r{}, r{}, r{}", d.a, d.b, d.c),
        Opcode::Xor => format!("XOR r{}, r{}, r{}", d.a, d.b, d.c),
        Opcode::Rsh => format!("RSH r{}, r{}", d.a, d.c),
        Opcode::Ldi => format!("LDI r{}, {}", d.a, d.imm8),
        Opcode::Adi => format!("ADI r{}, {}", d.a, d.imm8_signed),
        Opcode::Jmp => format!("JMP {}", d.imm10),
        Opcode::Cal => format!("CAL {}", d.imm10),
        Opcode::Brh => format!("BRH {}, {}", d.cond.mnemonic(), d.imm10),
        Opcode::Ret => "RET".to_string(),
        Opcode::Lod => format!("LOD r{}, r{}, {}", d.a, d.b, d.offset),
        Opcode::Str => format!("STR r{}, r{}, {}", d.a, d.b, d.offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disassembles_nop_hlt_ret() {
        assert_eq!(disassemble(0x0000), "NOP");
        assert_eq!(disassemble(0x1000), "HLT");
        assert_eq!(disassemble(0xD000), "RET");
    }

    #[test]
    fn disassembles_alu_triples() {
        assert_eq!(disassemble(0x2123), "ADD r1, r2, r3");
        assert_eq!(disassemble(0x3456), "SUB r4, r5, r6");
    }

    #[test]
    fn disassembles_rsh_as_two_operand() {
        assert_eq!(disassemble(0x7105), "RSH r1, r5");
    }

    #[test]
    fn disassembles_ldi_and_adi_with_correct_signedness() {
        assert_eq!(disassemble(0x80FF), "LDI r0, 255");
        assert_eq!(disassemble(0x90FF), "ADI r0, -1");
    }

    #[test]
    fn disassembles_control_transfer() {
        assert_eq!(disassemble(0xA001), "JMP 1");
        assert_eq!(disassemble(0xC002), "CAL 2");
        assert_eq!(disassemble(0xB000 | (2 << 10) | 5), "BRH GE, 5");
    }

    #[test]
    fn disassembles_lod_str_with_signed_offset() {
        assert_eq!(disassemble(0xE12F), "LOD r1, r2, -1");
        assert_eq!(disassemble(0xF120 | 7), "STR r1, r2, 7");
    }
}
