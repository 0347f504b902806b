use super::InstructionDefinition;
use crate::cpu::Cpu;

// LR35902 opcode tables.
//
// Lengths include the opcode byte (and the 0xCB prefix for the prefixed
// table). Conditional branches list their not-taken cost; the effect
// reports the taken cost itself. Unused opcodes and the bare prefix byte
// have length 0 so decode rejects them.

macro_rules! op {
    ($mnemonic:expr, $length:expr, $cycles:expr, $execute:ident) => {
        InstructionDefinition::new($mnemonic, $length, $cycles, Cpu::$execute)
    };
}

pub(super) fn base_table() -> [InstructionDefinition; 256] {
    [
        /* 0x00 */ op!("NOP", 1, 4, exec_nop),
        /* 0x01 */ op!("LD BC,d16", 3, 12, exec_ld_rr_d16),
        /* 0x02 */ op!("LD (BC),A", 1, 8, exec_ld_indirect_a),
        /* 0x03 */ op!("INC BC", 1, 8, exec_inc16),
        /* 0x04 */ op!("INC B", 1, 4, exec_inc8),
        /* 0x05 */ op!("DEC B", 1, 4, exec_dec8),
        /* 0x06 */ op!("LD B,d8", 2, 8, exec_ld_r_d8),
        /* 0x07 */ op!("RLCA", 1, 4, exec_rotate_a),
        /* 0x08 */ op!("LD (a16),SP", 3, 20, exec_ld_a16_sp),
        /* 0x09 */ op!("ADD HL,BC", 1, 8, exec_add_hl_rr),
        /* 0x0A */ op!("LD A,(BC)", 1, 8, exec_ld_a_indirect),
        /* 0x0B */ op!("DEC BC", 1, 8, exec_dec16),
        /* 0x0C */ op!("INC C", 1, 4, exec_inc8),
        /* 0x0D */ op!("DEC C", 1, 4, exec_dec8),
        /* 0x0E */ op!("LD C,d8", 2, 8, exec_ld_r_d8),
        /* 0x0F */ op!("RRCA", 1, 4, exec_rotate_a),
        /* 0x10 */ op!("STOP", 2, 4, exec_stop),
        /* 0x11 */ op!("LD DE,d16", 3, 12, exec_ld_rr_d16),
        /* 0x12 */ op!("LD (DE),A", 1, 8, exec_ld_indirect_a),
        /* 0x13 */ op!("INC DE", 1, 8, exec_inc16),
        /* 0x14 */ op!("INC D", 1, 4, exec_inc8),
        /* 0x15 */ op!("DEC D", 1, 4, exec_dec8),
        /* 0x16 */ op!("LD D,d8", 2, 8, exec_ld_r_d8),
        /* 0x17 */ op!("RLA", 1, 4, exec_rotate_a),
        /* 0x18 */ op!("JR r8", 2, 12, exec_jr),
        /* 0x19 */ op!("ADD HL,DE", 1, 8, exec_add_hl_rr),
        /* 0x1A */ op!("LD A,(DE)", 1, 8, exec_ld_a_indirect),
        /* 0x1B */ op!("DEC DE", 1, 8, exec_dec16),
        /* 0x1C */ op!("INC E", 1, 4, exec_inc8),
        /* 0x1D */ op!("DEC E", 1, 4, exec_dec8),
        /* 0x1E */ op!("LD E,d8", 2, 8, exec_ld_r_d8),
        /* 0x1F */ op!("RRA", 1, 4, exec_rotate_a),
        /* 0x20 */ op!("JR NZ,r8", 2, 8, exec_jr_cc),
        /* 0x21 */ op!("LD HL,d16", 3, 12, exec_ld_rr_d16),
        /* 0x22 */ op!("LD (HL+),A", 1, 8, exec_ld_indirect_a),
        /* 0x23 */ op!("INC HL", 1, 8, exec_inc16),
        /* 0x24 */ op!("INC H", 1, 4, exec_inc8),
        /* 0x25 */ op!("DEC H", 1, 4, exec_dec8),
        /* 0x26 */ op!("LD H,d8", 2, 8, exec_ld_r_d8),
        /* 0x27 */ op!("DAA", 1, 4, exec_daa),
        /* 0x28 */ op!("JR Z,r8", 2, 8, exec_jr_cc),
        /* 0x29 */ op!("ADD HL,HL", 1, 8, exec_add_hl_rr),
        /* 0x2A */ op!("LD A,(HL+)", 1, 8, exec_ld_a_indirect),
        /* 0x2B */ op!("DEC HL", 1, 8, exec_dec16),
        /* 0x2C */ op!("INC L", 1, 4, exec_inc8),
        /* 0x2D */ op!("DEC L", 1, 4, exec_dec8),
        /* 0x2E */ op!("LD L,d8", 2, 8, exec_ld_r_d8),
        /* 0x2F */ op!("CPL", 1, 4, exec_cpl),
        /* 0x30 */ op!("JR NC,r8", 2, 8, exec_jr_cc),
        /* 0x31 */ op!("LD SP,d16", 3, 12, exec_ld_rr_d16),
        /* 0x32 */ op!("LD (HL-),A", 1, 8, exec_ld_indirect_a),
        /* 0x33 */ op!("INC SP", 1, 8, exec_inc16),
        /* 0x34 */ op!("INC (HL)", 1, 12, exec_inc8),
        /* 0x35 */ op!("DEC (HL)", 1, 12, exec_dec8),
        /* 0x36 */ op!("LD (HL),d8", 2, 12, exec_ld_r_d8),
        /* 0x37 */ op!("SCF", 1, 4, exec_scf),
        /* 0x38 */ op!("JR C,r8", 2, 8, exec_jr_cc),
        /* 0x39 */ op!("ADD HL,SP", 1, 8, exec_add_hl_rr),
        /* 0x3A */ op!("LD A,(HL-)", 1, 8, exec_ld_a_indirect),
        /* 0x3B */ op!("DEC SP", 1, 8, exec_dec16),
        /* 0x3C */ op!("INC A", 1, 4, exec_inc8),
        /* 0x3D */ op!("DEC A", 1, 4, exec_dec8),
        /* 0x3E */ op!("LD A,d8", 2, 8, exec_ld_r_d8),
        /* 0x3F */ op!("CCF", 1, 4, exec_ccf),
        /* 0x40 */ op!("LD B,B", 1, 4, exec_ld_r_r),
        /* 0x41 */ op!("LD B,C", 1, 4, exec_ld_r_r),
        /* 0x42 */ op!("LD B,D", 1, 4, exec_ld_r_r),
        /* 0x43 */ op!("LD B,E", 1, 4, exec_ld_r_r),
        /* 0x44 */ op!("LD B,H", 1, 4, exec_ld_r_r),
        /* 0x45 */ op!("LD B,L", 1, 4, exec_ld_r_r),
        /* 0x46 */ op!("LD B,(HL)", 1, 8, exec_ld_r_r),
        /* 0x47 */ op!("LD B,A", 1, 4, exec_ld_r_r),
        /* 0x48 */ op!("LD C,B", 1, 4, exec_ld_r_r),
        /* 0x49 */ op!("LD C,C", 1, 4, exec_ld_r_r),
        /* 0x4A */ op!("LD C,D", 1, 4, exec_ld_r_r),
        /* 0x4B */ op!("LD C,E", 1, 4, exec_ld_r_r),
        /* 0x4C */ op!("LD C,H", 1, 4, exec_ld_r_r),
        /* 0x4D */ op!("LD C,L", 1, 4, exec_ld_r_r),
        /* 0x4E */ op!("LD C,(HL)", 1, 8, exec_ld_r_r),
        /* 0x4F */ op!("LD C,A", 1, 4, exec_ld_r_r),
        /* 0x50 */ op!("LD D,B", 1, 4, exec_ld_r_r),
        /* 0x51 */ op!("LD D,C", 1, 4, exec_ld_r_r),
        /* 0x52 */ op!("LD D,D", 1, 4, exec_ld_r_r),
        /* 0x53 */ op!("LD D,E", 1, 4, exec_ld_r_r),
        /* 0x54 */ op!("LD D,H", 1, 4, exec_ld_r_r),
        /* 0x55 */ op!("LD D,L", 1, 4, exec_ld_r_r),
        /* 0x56 */ op!("LD D,(HL)", 1, 8, exec_ld_r_r),
        /* 0x57 */ op!("LD D,A", 1, 4, exec_ld_r_r),
        /* 0x58 */ op!("LD E,B", 1, 4, exec_ld_r_r),
        /* 0x59 */ op!("LD E,C", 1, 4, exec_ld_r_r),
        /* 0x5A */ op!("LD E,D", 1, 4, exec_ld_r_r),
        /* 0x5B */ op!("LD E,E", 1, 4, exec_ld_r_r),
        /* 0x5C */ op!("LD E,H", 1, 4, exec_ld_r_r),
        /* 0x5D */ op!("LD E,L", 1, 4, exec_ld_r_r),
        /* 0x5E */ op!("LD E,(HL)", 1, 8, exec_ld_r_r),
        /* 0x5F */ op!("LD E,A", 1, 4, exec_ld_r_r),
        /* 0x60 */ op!("LD H,B", 1, 4, exec_ld_r_r),
        /* 0x61 */ op!("LD H,C", 1, 4, exec_ld_r_r),
        /* 0x62 */ op!("LD H,D", 1, 4, exec_ld_r_r),
        /* 0x63 */ op!("LD H,E", 1, 4, exec_ld_r_r),
        /* 0x64 */ op!("LD H,H", 1, 4, exec_ld_r_r),
        /* 0x65 */ op!("LD H,L", 1, 4, exec_ld_r_r),
        /* 0x66 */ op!("LD H,(HL)", 1, 8, exec_ld_r_r),
        /* 0x67 */ op!("LD H,A", 1, 4, exec_ld_r_r),
        /* 0x68 */ op!("LD L,B", 1, 4, exec_ld_r_r),
        /* 0x69 */ op!("LD L,C", 1, 4, exec_ld_r_r),
        /* 0x6A */ op!("LD L,D", 1, 4, exec_ld_r_r),
        /* 0x6B */ op!("LD L,E", 1, 4, exec_ld_r_r),
        /* 0x6C */ op!("LD L,H", 1, 4, exec_ld_r_r),
        /* 0x6D */ op!("LD L,L", 1, 4, exec_ld_r_r),
        /* 0x6E */ op!("LD L,(HL)", 1, 8, exec_ld_r_r),
        /* 0x6F */ op!("LD L,A", 1, 4, exec_ld_r_r),
        /* 0x70 */ op!("LD (HL),B", 1, 8, exec_ld_r_r),
        /* 0x71 */ op!("LD (HL),C", 1, 8, exec_ld_r_r),
        /* 0x72 */ op!("LD (HL),D", 1, 8, exec_ld_r_r),
        /* 0x73 */ op!("LD (HL),E", 1, 8, exec_ld_r_r),
        /* 0x74 */ op!("LD (HL),H", 1, 8, exec_ld_r_r),
        /* 0x75 */ op!("LD (HL),L", 1, 8, exec_ld_r_r),
        /* 0x76 */ op!("HALT", 1, 4, exec_halt),
        /* 0x77 */ op!("LD (HL),A", 1, 8, exec_ld_r_r),
        /* 0x78 */ op!("LD A,B", 1, 4, exec_ld_r_r),
        /* 0x79 */ op!("LD A,C", 1, 4, exec_ld_r_r),
        /* 0x7A */ op!("LD A,D", 1, 4, exec_ld_r_r),
        /* 0x7B */ op!("LD A,E", 1, 4, exec_ld_r_r),
        /* 0x7C */ op!("LD A,H", 1, 4, exec_ld_r_r),
        /* 0x7D */ op!("LD A,L", 1, 4, exec_ld_r_r),
        /* 0x7E */ op!("LD A,(HL)", 1, 8, exec_ld_r_r),
        /* 0x7F */ op!("LD A,A", 1, 4, exec_ld_r_r),
        /* 0x80 */ op!("ADD A,B", 1, 4, exec_alu_r),
        /* 0x81 */ op!("ADD A,C", 1, 4, exec_alu_r),
        /* 0x82 */ op!("ADD A,D", 1, 4, exec_alu_r),
        /* 0x83 */ op!("ADD A,E", 1, 4, exec_alu_r),
        /* 0x84 */ op!("ADD A,H", 1, 4, exec_alu_r),
        /* 0x85 */ op!("ADD A,L", 1, 4, exec_alu_r),
        /* 0x86 */ op!("ADD A,(HL)", 1, 8, exec_alu_r),
        /* 0x87 */ op!("ADD A,A", 1, 4, exec_alu_r),
        /* 0x88 */ op!("ADC A,B", 1, 4, exec_alu_r),
        /* 0x89 */ op!("ADC A,C", 1, 4, exec_alu_r),
        /* 0x8A */ op!("ADC A,D", 1, 4, exec_alu_r),
        /* 0x8B */ op!("ADC A,E", 1, 4, exec_alu_r),
        /* 0x8C */ op!("ADC A,H", 1, 4, exec_alu_r),
        /* 0x8D */ op!("ADC A,L", 1, 4, exec_alu_r),
        /* 0x8E */ op!("ADC A,(HL)", 1, 8, exec_alu_r),
        /* 0x8F */ op!("ADC A,A", 1, 4, exec_alu_r),
        /* 0x90 */ op!("SUB B", 1, 4, exec_alu_r),
        /* 0x91 */ op!("SUB C", 1, 4, exec_alu_r),
        /* 0x92 */ op!("SUB D", 1, 4, exec_alu_r),
        /* 0x93 */ op!("SUB E", 1, 4, exec_alu_r),
        /* 0x94 */ op!("SUB H", 1, 4, exec_alu_r),
        /* 0x95 */ op!("SUB L", 1, 4, exec_alu_r),
        /* 0x96 */ op!("SUB (HL)", 1, 8, exec_alu_r),
        /* 0x97 */ op!("SUB A", 1, 4, exec_alu_r),
        /* 0x98 */ op!("SBC A,B", 1, 4, exec_alu_r),
        /* 0x99 */ op!("SBC A,C", 1, 4, exec_alu_r),
        /* 0x9A */ op!("SBC A,D", 1, 4, exec_alu_r),
        /* 0x9B */ op!("SBC A,E", 1, 4, exec_alu_r),
        /* 0x9C */ op!("SBC A,H", 1, 4, exec_alu_r),
        /* 0x9D */ op!("SBC A,L", 1, 4, exec_alu_r),
        /* 0x9E */ op!("SBC A,(HL)", 1, 8, exec_alu_r),
        /* 0x9F */ op!("SBC A,A", 1, 4, exec_alu_r),
        /* 0xA0 */ op!("AND B", 1, 4, exec_alu_r),
        /* 0xA1 */ op!("AND C", 1, 4, exec_alu_r),
        /* 0xA2 */ op!("AND D", 1, 4, exec_alu_r),
        /* 0xA3 */ op!("AND E", 1, 4, exec_alu_r),
        /* 0xA4 */ op!("AND H", 1, 4, exec_alu_r),
        /* 0xA5 */ op!("AND L", 1, 4, exec_alu_r),
        /* 0xA6 */ op!("AND (HL)", 1, 8, exec_alu_r),
        /* 0xA7 */ op!("AND A", 1, 4, exec_alu_r),
        /* 0xA8 */ op!("XOR B", 1, 4, exec_alu_r),
        /* 0xA9 */ op!("XOR C", 1, 4, exec_alu_r),
        /* 0xAA */ op!("XOR D", 1, 4, exec_alu_r),
        /* 0xAB */ op!("XOR E", 1, 4, exec_alu_r),
        /* 0xAC */ op!("XOR H", 1, 4, exec_alu_r),
        /* 0xAD */ op!("XOR L", 1, 4, exec_alu_r),
        /* 0xAE */ op!("XOR (HL)", 1, 8, exec_alu_r),
        /* 0xAF */ op!("XOR A", 1, 4, exec_alu_r),
        /* 0xB0 */ op!("OR B", 1, 4, exec_alu_r),
        /* 0xB1 */ op!("OR C", 1, 4, exec_alu_r),
        /* 0xB2 */ op!("OR D", 1, 4, exec_alu_r),
        /* 0xB3 */ op!("OR E", 1, 4, exec_alu_r),
        /* 0xB4 */ op!("OR H", 1, 4, exec_alu_r),
        /* 0xB5 */ op!("OR L", 1, 4, exec_alu_r),
        /* 0xB6 */ op!("OR (HL)", 1, 8, exec_alu_r),
        /* 0xB7 */ op!("OR A", 1, 4, exec_alu_r),
        /* 0xB8 */ op!("CP B", 1, 4, exec_alu_r),
        /* 0xB9 */ op!("CP C", 1, 4, exec_alu_r),
        /* 0xBA */ op!("CP D", 1, 4, exec_alu_r),
        /* 0xBB */ op!("CP E", 1, 4, exec_alu_r),
        /* 0xBC */ op!("CP H", 1, 4, exec_alu_r),
        /* 0xBD */ op!("CP L", 1, 4, exec_alu_r),
        /* 0xBE */ op!("CP (HL)", 1, 8, exec_alu_r),
        /* 0xBF */ op!("CP A", 1, 4, exec_alu_r),
        /* 0xC0 */ op!("RET NZ", 1, 8, exec_ret_cc),
        /* 0xC1 */ op!("POP BC", 1, 12, exec_pop),
        /* 0xC2 */ op!("JP NZ,a16", 3, 12, exec_jp_cc),
        /* 0xC3 */ op!("JP a16", 3, 16, exec_jp),
        /* 0xC4 */ op!("CALL NZ,a16", 3, 12, exec_call_cc),
        /* 0xC5 */ op!("PUSH BC", 1, 16, exec_push),
        /* 0xC6 */ op!("ADD A,d8", 2, 8, exec_alu_d8),
        /* 0xC7 */ op!("RST 00H", 1, 16, exec_rst),
        /* 0xC8 */ op!("RET Z", 1, 8, exec_ret_cc),
        /* 0xC9 */ op!("RET", 1, 16, exec_ret),
        /* 0xCA */ op!("JP Z,a16", 3, 12, exec_jp_cc),
        /* 0xCB */ op!("PREFIX CB", 0, 0, exec_illegal),
        /* 0xCC */ op!("CALL Z,a16", 3, 12, exec_call_cc),
        /* 0xCD */ op!("CALL a16", 3, 24, exec_call),
        /* 0xCE */ op!("ADC A,d8", 2, 8, exec_alu_d8),
        /* 0xCF */ op!("RST 08H", 1, 16, exec_rst),
        /* 0xD0 */ op!("RET NC", 1, 8, exec_ret_cc),
        /* 0xD1 */ op!("POP DE", 1, 12, exec_pop),
        /* 0xD2 */ op!("JP NC,a16", 3, 12, exec_jp_cc),
        /* 0xD3 */ InstructionDefinition::ILLEGAL,
        /* 0xD4 */ op!("CALL NC,a16", 3, 12, exec_call_cc),
        /* 0xD5 */ op!("PUSH DE", 1, 16, exec_push),
        /* 0xD6 */ op!("SUB d8", 2, 8, exec_alu_d8),
        /* 0xD7 */ op!("RST 10H", 1, 16, exec_rst),
        /* 0xD8 */ op!("RET C", 1, 8, exec_ret_cc),
        /* 0xD9 */ op!("RETI", 1, 16, exec_reti),
        /* 0xDA */ op!("JP C,a16", 3, 12, exec_jp_cc),
        /* 0xDB */ InstructionDefinition::ILLEGAL,
        /* 0xDC */ op!("CALL C,a16", 3, 12, exec_call_cc),
        /* 0xDD */ InstructionDefinition::ILLEGAL,
        /* 0xDE */ op!("SBC A,d8", 2, 8, exec_alu_d8),
        /* 0xDF */ op!("RST 18H", 1, 16, exec_rst),
        /* 0xE0 */ op!("LDH (a8),A", 2, 12, exec_ldh_a8_a),
        /* 0xE1 */ op!("POP HL", 1, 12, exec_pop),
        /* 0xE2 */ op!("LD (C),A", 1, 8, exec_ld_c_a),
        /* 0xE3 */ InstructionDefinition::ILLEGAL,
        /* 0xE4 */ InstructionDefinition::ILLEGAL,
        /* 0xE5 */ op!("PUSH HL", 1, 16, exec_push),
        /* 0xE6 */ op!("AND d8", 2, 8, exec_alu_d8),
        /* 0xE7 */ op!("RST 20H", 1, 16, exec_rst),
        /* 0xE8 */ op!("ADD SP,r8", 2, 16, exec_add_sp_r8),
        /* 0xE9 */ op!("JP (HL)", 1, 4, exec_jp_hl),
        /* 0xEA */ op!("LD (a16),A", 3, 16, exec_ld_a16_a),
        /* 0xEB */ InstructionDefinition::ILLEGAL,
        /* 0xEC */ InstructionDefinition::ILLEGAL,
        /* 0xED */ InstructionDefinition::ILLEGAL,
        /* 0xEE */ op!("XOR d8", 2, 8, exec_alu_d8),
        /* 0xEF */ op!("RST 28H", 1, 16, exec_rst),
        /* 0xF0 */ op!("LDH A,(a8)", 2, 12, exec_ldh_a_a8),
        /* 0xF1 */ op!("POP AF", 1, 12, exec_pop),
        /* 0xF2 */ op!("LD A,(C)", 1, 8, exec_ld_a_c),
        /* 0xF3 */ op!("DI", 1, 4, exec_di),
        /* 0xF4 */ InstructionDefinition::ILLEGAL,
        /* 0xF5 */ op!("PUSH AF", 1, 16, exec_push),
        /* 0xF6 */ op!("OR d8", 2, 8, exec_alu_d8),
        /* 0xF7 */ op!("RST 30H", 1, 16, exec_rst),
        /* 0xF8 */ op!("LD HL,SP+r8", 2, 12, exec_ld_hl_sp_r8),
        /* 0xF9 */ op!("LD SP,HL", 1, 8, exec_ld_sp_hl),
        /* 0xFA */ op!("LD A,(a16)", 3, 16, exec_ld_a_a16),
        /* 0xFB */ op!("EI", 1, 4, exec_ei),
        /* 0xFC */ InstructionDefinition::ILLEGAL,
        /* 0xFD */ InstructionDefinition::ILLEGAL,
        /* 0xFE */ op!("CP d8", 2, 8, exec_alu_d8),
        /* 0xFF */ op!("RST 38H", 1, 16, exec_rst),
    ]
}

const PREFIXED_MNEMONICS: [&str; 256] = [
    "RLC B", "RLC C", "RLC D", "RLC E", "RLC H", "RLC L", "RLC (HL)", "RLC A",
    "RRC B", "RRC C", "RRC D", "RRC E", "RRC H", "RRC L", "RRC (HL)", "RRC A",
    "RL B", "RL C", "RL D", "RL E", "RL H", "RL L", "RL (HL)", "RL A",
    "RR B", "RR C", "RR D", "RR E", "RR H", "RR L", "RR (HL)", "RR A",
    "SLA B", "SLA C", "SLA D", "SLA E", "SLA H", "SLA L", "SLA (HL)", "SLA A",
    "SRA B", "SRA C", "SRA D", "SRA E", "SRA H", "SRA L", "SRA (HL)", "SRA A",
    "SWAP B", "SWAP C", "SWAP D", "SWAP E", "SWAP H", "SWAP L", "SWAP (HL)", "SWAP A",
    "SRL B", "SRL C", "SRL D", "SRL E", "SRL H", "SRL L", "SRL (HL)", "SRL A",
    "BIT 0,B", "BIT 0,C", "BIT 0,D", "BIT 0,E", "BIT 0,H", "BIT 0,L", "BIT 0,(HL)", "BIT 0,A",
    "BIT 1,B", "BIT 1,C", "BIT 1,D", "BIT 1,E", "BIT 1,H", "BIT 1,L", "BIT 1,(HL)", "BIT 1,A",
    "BIT 2,B", "BIT 2,C", "BIT 2,D", "BIT 2,E", "BIT 2,H", "BIT 2,L", "BIT 2,(HL)", "BIT 2,A",
    "BIT 3,B", "BIT 3,C", "BIT 3,D", "BIT 3,E", "BIT 3,H", "BIT 3,L", "BIT 3,(HL)", "BIT 3,A",
    "BIT 4,B", "BIT 4,C", "BIT 4,D", "BIT 4,E", "BIT 4,H", "BIT 4,L", "BIT 4,(HL)", "BIT 4,A",
    "BIT 5,B", "BIT 5,C", "BIT 5,D", "BIT 5,E", "BIT 5,H", "BIT 5,L", "BIT 5,(HL)", "BIT 5,A",
    "BIT 6,B", "BIT 6,C", "BIT 6,D", "BIT 6,E", "BIT 6,H", "BIT 6,L", "BIT 6,(HL)", "BIT 6,A",
    "BIT 7,B", "BIT 7,C", "BIT 7,D", "BIT 7,E", "BIT 7,H", "BIT 7,L", "BIT 7,(HL)", "BIT 7,A",
    "RES 0,B", "RES 0,C", "RES 0,D", "RES 0,E", "RES 0,H", "RES 0,L", "RES 0,(HL)", "RES 0,A",
    "RES 1,B", "RES 1,C", "RES 1,D", "RES 1,E", "RES 1,H", "RES 1,L", "RES 1,(HL)", "RES 1,A",
    "RES 2,B", "RES 2,C", "RES 2,D", "RES 2,E", "RES 2,H", "RES 2,L", "RES 2,(HL)", "RES 2,A",
    "RES 3,B", "RES 3,C", "RES 3,D", "RES 3,E", "RES 3,H", "RES 3,L", "RES 3,(HL)", "RES 3,A",
    "RES 4,B", "RES 4,C", "RES 4,D", "RES 4,E", "RES 4,H", "RES 4,L", "RES 4,(HL)", "RES 4,A",
    "RES 5,B", "RES 5,C", "RES 5,D", "RES 5,E", "RES 5,H", "RES 5,L", "RES 5,(HL)", "RES 5,A",
    "RES 6,B", "RES 6,C", "RES 6,D", "RES 6,E", "RES 6,H", "RES 6,L", "RES 6,(HL)", "RES 6,A",
    "RES 7,B", "RES 7,C", "RES 7,D", "RES 7,E", "RES 7,H", "RES 7,L", "RES 7,(HL)", "RES 7,A",
    "SET 0,B", "SET 0,C", "SET 0,D", "SET 0,E", "SET 0,H", "SET 0,L", "SET 0,(HL)", "SET 0,A",
    "SET 1,B", "SET 1,C", "SET 1,D", "SET 1,E", "SET 1,H", "SET 1,L", "SET 1,(HL)", "SET 1,A",
    "SET 2,B", "SET 2,C", "SET 2,D", "SET 2,E", "SET 2,H", "SET 2,L", "SET 2,(HL)", "SET 2,A",
    "SET 3,B", "SET 3,C", "SET 3,D", "SET 3,E", "SET 3,H", "SET 3,L", "SET 3,(HL)", "SET 3,A",
    "SET 4,B", "SET 4,C", "SET 4,D", "SET 4,E", "SET 4,H", "SET 4,L", "SET 4,(HL)", "SET 4,A",
    "SET 5,B", "SET 5,C", "SET 5,D", "SET 5,E", "SET 5,H", "SET 5,L", "SET 5,(HL)", "SET 5,A",
    "SET 6,B", "SET 6,C", "SET 6,D", "SET 6,E", "SET 6,H", "SET 6,L", "SET 6,(HL)", "SET 6,A",
    "SET 7,B", "SET 7,C", "SET 7,D", "SET 7,E", "SET 7,H", "SET 7,L", "SET 7,(HL)", "SET 7,A",
];

pub(super) fn prefixed_table() -> [InstructionDefinition; 256] {
    std::array::from_fn(|code| {
        let mnemonic = PREFIXED_MNEMONICS[code];
        let hl = code & 0x07 == 6;
        match code >> 6 {
            0 => op!(mnemonic, 2, if hl { 16 } else { 8 }, exec_cb_shift),
            // BIT only reads (HL), so it is cheaper than the other (HL) forms.
            1 => op!(mnemonic, 2, if hl { 12 } else { 8 }, exec_cb_bit),
            2 => op!(mnemonic, 2, if hl { 16 } else { 8 }, exec_cb_res),
            _ => op!(mnemonic, 2, if hl { 16 } else { 8 }, exec_cb_set),
        }
    })
}
