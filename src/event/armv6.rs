// Small intervals may hang the device, and the more events are counted at
// once the longer the interval has to be.

use super::{CpuEventTable, EventDescriptor};
use crate::assign::CycleCounterLast;

pub static ARMV6: CpuEventTable = CpuEventTable {
    cpu_type: "arm/armv6",
    min_count: &[150000, 200000, 250000],
    default_event: "CPU_CYCLES",
    events: &EVENTS,
    rebalance: &CycleCounterLast { cycle_event: 0xff },
};

#[rustfmt::skip]
static EVENTS: [EventDescriptor; 21] = [
    super::event!(0x00, [0, 1], "IFU_IFETCH_MISS",
        "number of instruction fetch misses"),
    super::event!(0x01, [0, 1], "CYCLES_IFU_MEM_STALL",
        "cycles instruction fetch pipe is stalled"),
    super::event!(0x02, [0, 1], "CYCLES_DATA_STALL",
        "cycles stall occurs for due to data dependency"),
    super::event!(0x03, [0, 1], "ITLB_MISS",
        "number of Instruction MicroTLB misses"),
    super::event!(0x04, [0, 1], "DTLB_MISS",
        "number of Data MicroTLB misses"),
    super::event!(0x05, [0, 1], "BR_INST_EXECUTED",
        "branch instruction executed w/ or w/o program flow change"),
    super::event!(0x06, [0, 1], "BR_INST_MISS_PRED",
        "branch mispredicted"),
    super::event!(0x07, [0, 1], "INSN_EXECUTED",
        "instructions executed"),
    super::event!(0x09, [0, 1], "DCACHE_ACCESS",
        "data cache access, cacheable locations"),
    super::event!(0x0a, [0, 1], "DCACHE_ACCESS_ALL",
        "data cache access, all locations"),
    super::event!(0x0b, [0, 1], "DCACHE_MISS",
        "data cache miss"),
    super::event!(0x0c, [0, 1], "DCACHE_WB",
        "data cache writeback, 1 event for every half cacheline"),
    super::event!(0x0d, [0, 1], "PC_CHANGE",
        "number of times the program counter was changed without a mode switch"),
    super::event!(0x0f, [0, 1], "TLB_MISS",
        "Main TLB miss"),
    super::event!(0x10, [0, 1], "EXP_EXTERNAL",
        "Explict external data access"),
    super::event!(0x11, [0, 1], "LSU_STALL",
        "cycles stalled because Load Store request queque is full"),
    super::event!(0x12, [0, 1], "WRITE_DRAIN",
        "Times write buffer was drained"),
    super::event!(0x20, [0, 1], "ETMEXTOUT0",
        "nuber of cycles ETMEXTOUT[0] signal was asserted"),
    super::event!(0x21, [0, 1], "ETMEXTOUT1",
        "nuber of cycles ETMEXTOUT[1] signal was asserted"),
    super::event!(0x22, [0, 1], "ETMEXTOUT_BOTH",
        "nuber of cycles both ETMEXTOUT [0] and [1] were asserted * 2"),
    super::event!(0xff, [0, 1, 2], "CPU_CYCLES",
        "clock cycles counter"),
];
