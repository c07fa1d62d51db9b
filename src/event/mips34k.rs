use super::{CpuEventTable, EventDescriptor};
use crate::assign::Identity;

pub static MIPS_34K: CpuEventTable = CpuEventTable {
    cpu_type: "mips/34K",
    min_count: &[15000, 20000],
    default_event: "CYCLES",
    events: &EVENTS,
    rebalance: &Identity,
};

#[rustfmt::skip]
static EVENTS: [EventDescriptor; 99] = [
    super::event!(0x0, [0, 1], "CYCLES",
        "0-0 Cycles"),
    super::event!(0x1, [0, 1], "INSTRUCTIONS",
        "1-0 Instructions completed"),
    super::event!(0xb, [0, 1], "DCACHE_MISSES",
        "11-0 Data cache misses"),
    super::event!(0x2, [0], "BRANCH_INSNS",
        "2-0 Branch instructions (whether completed or mispredicted)"),
    super::event!(0x3, [0], "JR_31_INSNS",
        "3-0 JR $31 (return) instructions executed"),
    super::event!(0x4, [0], "JR_NON_31_INSNS",
        "4-0 JR $xx (not $31) instructions executed (at same cost as a mispredict)"),
    super::event!(0x5, [0], "ITLB_ACCESSES",
        "5-0 Instruction micro-TLB accesses"),
    super::event!(0x6, [0], "DTLB_ACCESSES",
        "6-0 Data micro-TLB accesses"),
    super::event!(0x7, [0], "JTLB_INSN_ACCESSES",
        "7-0 Joint TLB instruction accesses"),
    super::event!(0x8, [0], "JTLB_DATA_ACCESSES",
        "8-0 Joint TLB data (non-instruction) accesses"),
    super::event!(0x9, [0], "ICACHE_ACCESSES",
        "9-0 Instruction cache accesses"),
    super::event!(0xa, [0], "DCACHE_ACCESSES",
        "10-0 Data cache accesses"),
    super::event!(0xd, [0], "STORE_MISS_INSNS",
        "13-0 Cacheable stores that miss in the cache"),
    super::event!(0xe, [0], "INTEGER_INSNS",
        "14-0 Integer instructions completed"),
    super::event!(0xf, [0], "LOAD_INSNS",
        "15-0 Load instructions completed (including FP)"),
    super::event!(0x10, [0], "J_JAL_INSNS",
        "16-0 J/JAL instructions completed"),
    super::event!(0x11, [0], "NO_OPS_INSNS",
        "17-0 no-ops completed, ie instructions writing $0"),
    super::event!(0x12, [0], "ALL_STALLS",
        "18-0 Stall cycles, including ALU and IFU"),
    super::event!(0x13, [0], "SC_INSNS",
        "19-0 SC instructions completed"),
    super::event!(0x14, [0], "PREFETCH_INSNS",
        "20-0 PREFETCH instructions completed"),
    super::event!(0x15, [0], "L2_CACHE_WRITEBACKS",
        "21-0 L2 cache lines written back to memory"),
    super::event!(0x16, [0], "L2_CACHE_MISSES",
        "22-0 L2 cache accesses that missed in the cache"),
    super::event!(0x17, [0], "EXCEPTIONS_TAKEN",
        "23-0 Exceptions taken"),
    super::event!(0x18, [0], "CACHE_FIXUP_CYCLES",
        "24-0 Cache fixup cycles (specific to the 34K family microarchitecture)"),
    super::event!(0x19, [0], "IFU_STALLS",
        "25-0 IFU stall cycles"),
    super::event!(0x1a, [0], "DSP_INSNS",
        "26-0 DSP instructions completed"),
    super::event!(0x1c, [0], "POLICY_EVENTS",
        "28-0 Implementation specific policy manager events"),
    super::event!(0x1d, [0], "ISPRAM_EVENTS",
        "29-0 Implementation specific ISPRAM events"),
    super::event!(0x1e, [0], "COREEXTEND_EVENTS",
        "30-0 Implementation specific CorExtend events"),
    super::event!(0x1f, [0], "YIELD_EVENTS",
        "31-0 Implementation specific yield events"),
    super::event!(0x20, [0], "ITC_LOADS",
        "32-0 ITC Loads"),
    super::event!(0x21, [0], "UNCACHED_LOAD_INSNS",
        "33-0 Uncached load instructions"),
    super::event!(0x22, [0], "FORK_INSNS",
        "34-0 Fork instructions completed"),
    super::event!(0x23, [0], "CP2_ARITH_INSNS",
        "35-0 CP2 arithmetic instructions completed"),
    super::event!(0x25, [0], "ICACHE_MISS_STALLS",
        "37-0 Stall cycles due to an instruction cache miss"),
    super::event!(0x27, [0], "DCACHE_MISS_CYCLES",
        "39-0 Cycles a data cache miss is outstanding, but not necessarily stalling the pipeline"),
    super::event!(0x28, [0], "UNCACHED_STALLS",
        "40-0 Uncached stall cycles"),
    super::event!(0x29, [0], "MDU_STALLS",
        "41-0 MDU stall cycles"),
    super::event!(0x2a, [0], "CP2_STALLS",
        "42-0 CP2 stall cycles"),
    super::event!(0x2b, [0], "ISPRAM_STALLS",
        "43-0 ISPRAM stall cycles"),
    super::event!(0x2c, [0], "CACHE_INSN_STALLS",
        "44-0 Stall cycless due to CACHE instructions"),
    super::event!(0x2d, [0], "LOAD_USE_STALLS",
        "45-0 Load to use stall cycles"),
    super::event!(0x2e, [0], "INTERLOCK_STALLS",
        "46-0 Stall cycles due to return data from MFC0, RDHWR, and MFTR instructions"),
    super::event!(0x2f, [0], "RELAX_STALLS",
        "47-0 Low power stall cycles (operations) as requested by the policy manager"),
    super::event!(0x30, [0], "IFU_FB_FULL_REFETCHES",
        "48-0 Refetches due to cache misses while both fill buffers already allocated"),
    super::event!(0x31, [0], "EJTAG_INSN_TRIGGERS",
        "49-0 EJTAG instruction triggerpoints"),
    super::event!(0x32, [0], "FSB_LESS_25_FULL",
        "50-0 FSB < 25% full"),
    super::event!(0x33, [0], "FSB_OVER_50_FULL",
        "51-0 FSB > 50% full"),
    super::event!(0x34, [0], "LDQ_LESS_25_FULL",
        "52-0 LDQ < 25% full"),
    super::event!(0x35, [0], "LDQ_OVER_50_FULL",
        "53-0 LDQ > 50% full"),
    super::event!(0x36, [0], "WBB_LESS_25_FULL",
        "54-0 WBB < 25% full"),
    super::event!(0x37, [0], "WBB_OVER_50_FULL",
        "55-0 WBB > 50% full"),
    super::event!(0x3e, [0], "READ_RESPONSE_LATENCY",
        "62-0 Read latency from miss detection until critical dword of response is returned"),
    super::event!(0x402, [1], "MISPREDICTED_BRANCH_INSNS",
        "2-1 Branch mispredictions"),
    super::event!(0x403, [1], "JR_31_MISPREDICTIONS",
        "3-1 JR $31 mispredictions"),
    super::event!(0x404, [1], "JR_31_NO_PREDICTIONS",
        "4-1 JR $31 not predicted (stack mismatch)."),
    super::event!(0x405, [1], "ITLB_MISSES",
        "5-1 Instruction micro-TLB misses"),
    super::event!(0x406, [1], "DTLB_MISSES",
        "6-1 Data micro-TLB misses"),
    super::event!(0x407, [1], "JTLB_INSN_MISSES",
        "7-1 Joint TLB instruction misses"),
    super::event!(0x408, [1], "JTLB_DATA_MISSES",
        "8-1 Joint TLB data (non-instruction) misses"),
    super::event!(0x409, [1], "ICACHE_MISSES",
        "9-1 Instruction cache misses"),
    super::event!(0x40a, [1], "DCACHE_WRITEBACKS",
        "10-1 Data cache lines written back to memory"),
    super::event!(0x40d, [1], "LOAD_MISS_INSNS",
        "13-1 Cacheable load instructions that miss in the cache"),
    super::event!(0x40e, [1], "FPU_INSNS",
        "14-1 FPU instructions completed (not including loads/stores)"),
    super::event!(0x40f, [1], "STORE_INSNS",
        "15-1 Stores completed (including FP)"),
    super::event!(0x410, [1], "MIPS16_INSNS",
        "16-1 MIPS16 instructions completed"),
    super::event!(0x411, [1], "INT_MUL_DIV_INSNS",
        "17-1 Integer multiply/divide instructions completed"),
    super::event!(0x412, [1], "REPLAYED_INSNS",
        "18-1 Replayed instructions"),
    super::event!(0x413, [1], "SC_INSNS_FAILED",
        "19-1 SC instructions completed, but store failed (because the link bit had been cleared)"),
    super::event!(0x414, [1], "CACHE_HIT_PREFETCH_INSNS",
        "20-1 PREFETCH instructions completed with cache hit"),
    super::event!(0x415, [1], "L2_CACHE_ACCESSES",
        "21-1 Accesses to the L2 cache"),
    super::event!(0x416, [1], "L2_CACHE_SINGLE_BIT_ERRORS",
        "22-1 Single bit errors corrected in L2"),
    super::event!(0x417, [1], "SINGLE_THREADED_CYCLES",
        "23-1 Cycles while one and only one TC is eligible for scheduling"),
    super::event!(0x418, [1], "REFETCHED_INSNS",
        "24-1 Replayed instructions sent back to IFU to be refetched"),
    super::event!(0x419, [1], "ALU_STALLS",
        "25-1 ALU stall cycles"),
    super::event!(0x41a, [1], "ALU_DSP_SATURATION_INSNS",
        "26-1 ALU-DSP saturation instructions"),
    super::event!(0x41b, [1], "MDU_DSP_SATURATION_INSNS",
        "27-1 MDU-DSP saturation instructions"),
    super::event!(0x41c, [1], "CP2_EVENTS",
        "28-1 Implementation specific CP2 events"),
    super::event!(0x41d, [1], "DSPRAM_EVENTS",
        "29-1 Implementation specific DSPRAM events"),
    super::event!(0x41f, [1], "ITC_EVENT",
        "31-1 Implementation specific yield event"),
    super::event!(0x421, [1], "UNCACHED_STORE_INSNS",
        "33-1 Uncached store instructions"),
    super::event!(0x423, [1], "CP2_TO_FROM_INSNS",
        "35-1 CP2 to/from instructions (moves, control, loads, stores)"),
    super::event!(0x425, [1], "DCACHE_MISS_STALLS",
        "37-1 Stall cycles due to a data cache miss"),
    super::event!(0x427, [1], "L2_CACHE_MISS_CYCLES",
        "39-1 Cycles a L2 miss is outstanding, but not necessarily stalling the pipeline"),
    super::event!(0x428, [1], "ITC_STALLS",
        "40-1 ITC stall cycles"),
    super::event!(0x429, [1], "FPU_STALLS",
        "41-1 FPU stall cycles"),
    super::event!(0x42a, [1], "COREEXTEND_STALLS",
        "42-1 CorExtend stall cycles"),
    super::event!(0x42b, [1], "DSPRAM_STALLS",
        "43-1 DSPRAM stall cycles"),
    super::event!(0x42d, [1], "ALU_TO_AGEN_STALLS",
        "45-1 ALU to AGEN stall cycles"),
    super::event!(0x42e, [1], "MISPREDICTION_STALLS",
        "46-1 Branch mispredict stall cycles"),
    super::event!(0x430, [1], "FB_ENTRY_ALLOCATED_CYCLES",
        "48-1 Cycles while at least one IFU fill buffer is allocated"),
    super::event!(0x431, [1], "EJTAG_DATA_TRIGGERS",
        "49-1 EJTAG Data triggerpoints"),
    super::event!(0x432, [1], "FSB_25_50_FULL",
        "50-1 FSB 25-50% full"),
    super::event!(0x433, [1], "FSB_FULL_STALLS",
        "51-1 FSB full pipeline stall cycles"),
    super::event!(0x434, [1], "LDQ_25_50_FULL",
        "52-1 LDQ 25-50% full"),
    super::event!(0x435, [1], "LDQ_FULL_STALLS",
        "53-1 LDQ full pipeline stall cycles"),
    super::event!(0x436, [1], "WBB_25_50_FULL",
        "54-1 WBB 25-50% full"),
    super::event!(0x437, [1], "WBB_FULL_STALLS",
        "55-1 WBB full pipeline stall cycles"),
    super::event!(0x43e, [1], "READ_RESPONSE_COUNT",
        "62-1 Read requests on miss detection"),
];
