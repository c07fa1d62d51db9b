use super::{CpuEventTable, EventDescriptor};
use crate::assign::Identity;

pub static ARMV7: CpuEventTable = CpuEventTable {
    cpu_type: "arm/armv7",
    min_count: &[150000, 200000, 250000, 300000, 350000],
    default_event: "CPU_CYCLES",
    events: &EVENTS,
    rebalance: &Identity,
};

#[rustfmt::skip]
static EVENTS: [EventDescriptor; 49] = [
    super::event!(0x00, [1, 2, 3, 4], "PMNC_SW_INCR",
        "Software increment of PMNC registers"),
    super::event!(0x01, [1, 2, 3, 4], "IFETCH_MISS",
        "Instruction fetch misses from cache or normal cacheable memory"),
    super::event!(0x02, [1, 2, 3, 4], "ITLB_MISS",
        "Instruction fetch misses from TLB"),
    super::event!(0x03, [1, 2, 3, 4], "DCACHE_REFILL",
        "Data R/W operation that causes a refill from cache or normal cacheable memory"),
    super::event!(0x04, [1, 2, 3, 4], "DCACHE_ACCESS",
        "Data R/W from cache"),
    super::event!(0x05, [1, 2, 3, 4], "DTLB_REFILL",
        "Data R/W that causes a TLB refill"),
    super::event!(0x06, [1, 2, 3, 4], "DREAD",
        "Data read architecturally executed (note: architecturally executed = for instructions that are unconditional or that pass the condition code)"),
    super::event!(0x07, [1, 2, 3, 4], "DWRITE",
        "Data write architecturally executed"),
    super::event!(0x08, [1, 2, 3, 4], "INSTR_EXECUTED",
        "All executed instructions"),
    super::event!(0x09, [1, 2, 3, 4], "EXC_TAKEN",
        "Exception taken"),
    super::event!(0x0a, [1, 2, 3, 4], "EXC_EXECUTED",
        "Exception return architecturally executed"),
    super::event!(0x0b, [1, 2, 3, 4], "CID_WRITE",
        "Instruction that writes to the Context ID Register architecturally executed"),
    super::event!(0x0c, [1, 2, 3, 4], "PC_WRITE",
        "SW change of PC, architecturally executed (not by exceptions)"),
    super::event!(0x0d, [1, 2, 3, 4], "PC_IMM_BRANCH",
        "Immediate branch instruction executed (taken or not)"),
    super::event!(0x0e, [1, 2, 3, 4], "PC_PROC_RETURN",
        "Procedure return architecturally executed (not by exceptions)"),
    super::event!(0x0f, [1, 2, 3, 4], "UNALIGNED_ACCESS",
        "Unaligned access architecturally executed"),
    super::event!(0x10, [1, 2, 3, 4], "PC_BRANCH_MIS_PRED",
        "Branch mispredicted or not predicted. Counts pipeline flushes because of misprediction"),
    super::event!(0x12, [1, 2, 3, 4], "PC_BRANCH_MIS_USED",
        "Branch or change in program flow that could have been predicted"),
    super::event!(0x40, [1, 2, 3, 4], "WRITE_BUFFER_FULL",
        "Any write buffer full cycle"),
    super::event!(0x41, [1, 2, 3, 4], "L2_STORE_MERGED",
        "Any store that is merged in L2 cache"),
    super::event!(0x42, [1, 2, 3, 4], "L2_STORE_BUFF",
        "Any bufferable store from load/store to L2 cache"),
    super::event!(0x43, [1, 2, 3, 4], "L2_ACCESS",
        "Any access to L2 cache"),
    super::event!(0x44, [1, 2, 3, 4], "L2_CACH_MISS",
        "Any cacheable miss in L2 cache"),
    super::event!(0x45, [1, 2, 3, 4], "AXI_READ_CYCLES",
        "Number of cycles for an active AXI read"),
    super::event!(0x46, [1, 2, 3, 4], "AXI_WRITE_CYCLES",
        "Number of cycles for an active AXI write"),
    super::event!(0x47, [1, 2, 3, 4], "MEMORY_REPLAY",
        "Any replay event in the memory subsystem"),
    super::event!(0x48, [1, 2, 3, 4], "UNALIGNED_ACCESS_REPLAY",
        "Unaligned access that causes a replay"),
    super::event!(0x49, [1, 2, 3, 4], "L1_DATA_MISS",
        "L1 data cache miss as a result of the hashing algorithm"),
    super::event!(0x4a, [1, 2, 3, 4], "L1_INST_MISS",
        "L1 instruction cache miss as a result of the hashing algorithm"),
    super::event!(0x4b, [1, 2, 3, 4], "L1_DATA_COLORING",
        "L1 data access in which a page coloring alias occurs"),
    super::event!(0x4c, [1, 2, 3, 4], "L1_NEON_DATA",
        "NEON data access that hits L1 cache"),
    super::event!(0x4d, [1, 2, 3, 4], "L1_NEON_CACH_DATA",
        "NEON cacheable data access that hits L1 cache"),
    super::event!(0x4e, [1, 2, 3, 4], "L2_NEON",
        "L2 access as a result of NEON memory access"),
    super::event!(0x4f, [1, 2, 3, 4], "L2_NEON_HIT",
        "Any NEON hit in L2 cache"),
    super::event!(0x50, [1, 2, 3, 4], "L1_INST",
        "Any L1 instruction cache access, excluding CP15 cache accesses"),
    super::event!(0x51, [1, 2, 3, 4], "PC_RETURN_MIS_PRED",
        "Return stack misprediction at return stack pop (incorrect target address)"),
    super::event!(0x52, [1, 2, 3, 4], "PC_BRANCH_FAILED",
        "Branch prediction misprediction"),
    super::event!(0x53, [1, 2, 3, 4], "PC_BRANCH_TAKEN",
        "Any predicted branch that is taken"),
    super::event!(0x54, [1, 2, 3, 4], "PC_BRANCH_EXECUTED",
        "Any taken branch that is executed"),
    super::event!(0x55, [1, 2, 3, 4], "OP_EXECUTED",
        "Number of operations executed (in instruction or mutli-cycle instruction)"),
    super::event!(0x56, [1, 2, 3, 4], "CYCLES_INST_STALL",
        "Cycles where no instruction available"),
    super::event!(0x57, [1, 2, 3, 4], "CYCLES_INST",
        "Number of instructions issued in a cycle"),
    super::event!(0x58, [1, 2, 3, 4], "CYCLES_NEON_DATA_STALL",
        "Number of cycles the processor waits on MRC data from NEON"),
    super::event!(0x59, [1, 2, 3, 4], "CYCLES_NEON_INST_STALL",
        "Number of cycles the processor waits on NEON instruction queue or NEON load queue"),
    super::event!(0x5a, [1, 2, 3, 4], "NEON_CYCLES",
        "Number of cycles NEON and integer processors are not idle"),
    super::event!(0x70, [1, 2, 3, 4], "PMU0_EVENTS",
        "Number of events from external input source PMUEXTIN[0]"),
    super::event!(0x71, [1, 2, 3, 4], "PMU1_EVENTS",
        "Number of events from external input source PMUEXTIN[1]"),
    super::event!(0x72, [1, 2, 3, 4], "PMU_EVENTS",
        "Number of events from both external input sources PMUEXTIN[0] and PMUEXTIN[1]"),
    super::event!(0xff, [0], "CPU_CYCLES",
        "Number of CPU cycles"),
];
