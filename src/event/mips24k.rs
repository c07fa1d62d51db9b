use super::{CpuEventTable, EventDescriptor};
use crate::assign::Identity;

pub static MIPS_24K: CpuEventTable = CpuEventTable {
    cpu_type: "mips/24K",
    min_count: &[15000, 20000],
    default_event: "CYCLES",
    events: &EVENTS,
    rebalance: &Identity,
};

#[rustfmt::skip]
static EVENTS: [EventDescriptor; 39] = [
    super::event!(0x0, [0, 1], "CYCLES",
        "Cycles"),
    super::event!(0x1, [0, 1], "INSTRUCTIONS",
        "Instructions completed"),
    super::event!(0x11, [0, 1], "DCACHE_MISS",
        "Data cache misses"),
    super::event!(0x22, [0, 1], "L2_MISSES",
        "L2 cache misses"),
    super::event!(0x2, [0], "BRANCHES_LAUNCHED",
        "Branch instructions launched (whether completed or mispredicted)"),
    super::event!(0x3, [0], "JR_31_LAUNCHED",
        "jr r31 (return) instructions launched (whether completed or mispredicted)"),
    super::event!(0x4, [0], "JR_NON_31_LAUNCHED",
        "jr (not r31) issues, which cost the same as a mispredict."),
    super::event!(0x5, [0], "ITLB_ACCESSES",
        "Instruction micro-TLB accesses"),
    super::event!(0x6, [0], "DTLB_ACCESSES",
        "Data micro-TLB accesses"),
    super::event!(0x7, [0], "JTLB_DATA_ACCESSES",
        "Joint TLB instruction accesses"),
    super::event!(0x8, [0], "JTLB_INSTRUCTION_ACCESSES",
        "Joint TLB data (non-instruction) accesses"),
    super::event!(0x9, [0], "INSTRUCTION_CACHE_ACCESSES",
        "Instruction cache accesses"),
    super::event!(0xa, [0], "DCACHE_ACCESSES",
        "Data cache accesses"),
    super::event!(0xe, [0], "INTEGER_INSNS_COMPLETED",
        "Integer instructions completed"),
    super::event!(0xf, [0], "LOADS_COMPLETED",
        "Loads completed (including FP)"),
    super::event!(0x10, [0], "J_JAL_INSNS_COMPLETED",
        "j/jal instructions completed"),
    super::event!(0x11, [0], "NOPS_COMPLETED",
        "no-ops completed, ie instructions writing $0"),
    super::event!(0x12, [0], "STALLS",
        "Stalls"),
    super::event!(0x13, [0], "SC_COMPLETED",
        "sc instructions completed"),
    super::event!(0x14, [0], "PREFETCH_COMPLETED",
        "Prefetch instructions completed"),
    super::event!(0x15, [0], "SCACHE_WRITEBACKS",
        "L2 cache writebacks"),
    super::event!(0x17, [0], "EXCEPTIONS_TAKEN",
        "Exceptions taken"),
    super::event!(0x18, [0], "CACHE_FIXUPS",
        "\"cache fixup\" events (specific to the 24K family microarchitecture)."),
    super::event!(0x2, [1], "BRANCH_MISSPREDICTS",
        "Branch mispredictions"),
    super::event!(0x3, [1], "JR_31_MISSPREDICTS",
        "jr r31 (return) mispredictions"),
    super::event!(0x5, [1], "ITLB_MISSES",
        "Instruction micro-TLB misses"),
    super::event!(0x6, [1], "DTLB_MISSES",
        "Data micro-TLB misses"),
    super::event!(0x7, [1], "JTLB_INSN_MISSES",
        "Joint TLB instruction misses"),
    super::event!(0x8, [1], "JTLB_DATA_MISSES",
        "Joint TLB data (non-instruction) misses"),
    super::event!(0x9, [1], "ICACHE_MISSES",
        "Instruction cache misses"),
    super::event!(0xa, [1], "DCACHE_WRITEBACKS",
        "Data cache writebacks"),
    super::event!(0xe, [1], "FPU_INSNS_NON_LOAD_STORE_COMPLETED",
        "FPU instructions completed (not including loads/stores)"),
    super::event!(0xf, [1], "STORES_COMPLETED",
        "Stores completed (including FP)"),
    super::event!(0x10, [1], "MIPS16_INSTRUCTIONS_COMPLETED",
        "MIPS16 instructions completed"),
    super::event!(0x11, [1], "INTEGER_MUL_DIV_COMPLETED",
        "integer multiply/divide unit instructions completed"),
    super::event!(0x12, [1], "REPLAY_TRAPS_NOT_UTLB",
        "\"replay traps\" (other than micro-TLB related)"),
    super::event!(0x13, [1], "SC_COMPLETE_BUT_FAILED",
        "sc instructions completed, but store failed (because the link bit had been cleared)."),
    super::event!(0x14, [1], "SUPERFLUOUS_INSTRUCTIONS",
        "\"superfluous\" prefetch instructions (data was already in cache)."),
    super::event!(0x15, [1], "SCACHE_ACCESSES",
        "L2 cache accesses"),
];
