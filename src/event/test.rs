use super::{CounterMask, CpuEventTable, ARMV6, ARMV7, MIPS_24K, MIPS_34K, TABLES, UNDEFINED_EVENT};

#[test]
fn test_find_table() {
    for cpu_type in ["arm/armv6", "arm/armv7", "mips/24K", "mips/34K"] {
        let table = CpuEventTable::find(cpu_type).unwrap();
        assert_eq!(table.cpu_type, cpu_type);
    }
    assert!(CpuEventTable::find("i386/p4").is_none());
    assert!(CpuEventTable::find("").is_none());
}

#[test]
fn test_counters() {
    assert_eq!(ARMV6.counters(), 3);
    assert_eq!(ARMV7.counters(), 5);
    assert_eq!(MIPS_24K.counters(), 2);
    assert_eq!(MIPS_34K.counters(), 2);
}

#[test]
fn test_default_count_is_first_minimum() {
    assert_eq!(ARMV6.default_count(), 150000);
    assert_eq!(ARMV7.default_count(), 150000);
    assert_eq!(MIPS_24K.default_count(), 15000);
}

#[test]
fn test_tables_are_consistent() {
    for table in TABLES {
        let all = CounterMask((1 << table.counters()) - 1);
        assert!(table.lookup_by_name(table.default_event).is_some());

        for (i, event) in table.events.iter().enumerate() {
            assert_ne!(event.counters, CounterMask(0), "{}", event.name);
            assert_eq!(event.counters.0 & !all.0, 0, "{}", event.name);
            // Names are unique so lookup by name is unambiguous.
            let first = table.events.iter().position(|it| it.name == event.name);
            assert_eq!(first, Some(i), "{} in {}", event.name, table.cpu_type);
        }
    }
}

#[test]
fn test_lookup_by_name() {
    let event = MIPS_24K.lookup_by_name("DCACHE_MISS").unwrap();
    assert_eq!(event.id, 0x11);
    assert_eq!(event.counters, CounterMask::of(&[0, 1]));

    assert!(MIPS_24K.lookup_by_name("dcache_miss").is_none());
    assert!(MIPS_24K.lookup_by_name("CPU_CYCLES").is_none());
}

#[test]
fn test_lookup_by_id_is_scoped_to_counter() {
    // The 24K reuses event codes with different meanings on each counter.
    let event = MIPS_24K.lookup_by_id_for_counter(0x2, 0).unwrap();
    assert_eq!(event.name, "BRANCHES_LAUNCHED");
    let event = MIPS_24K.lookup_by_id_for_counter(0x2, 1).unwrap();
    assert_eq!(event.name, "BRANCH_MISSPREDICTS");

    // Shared by both counters, declared before the counter specific entry.
    let event = MIPS_24K.lookup_by_id_for_counter(0x11, 1).unwrap();
    assert_eq!(event.name, "DCACHE_MISS");
}

#[test]
fn test_lookup_by_id_absent_on_counter() {
    // armv7 can only count cycles on counter 0.
    assert!(ARMV7.lookup_by_id_for_counter(0xff, 0).is_some());
    assert!(ARMV7.lookup_by_id_for_counter(0xff, 1).is_none());
    assert_eq!(ARMV7.event_name(0xff, 1), UNDEFINED_EVENT);
    assert_eq!(ARMV7.event_name(0xff, 0), "CPU_CYCLES");

    assert!(ARMV7.lookup_by_id(0xff, CounterMask::of(&[1, 2])).is_none());
    assert!(ARMV7.lookup_by_id(0xff, CounterMask::of(&[0, 2])).is_some());
    assert!(MIPS_24K.lookup_by_id(0x7777, CounterMask::of(&[0, 1])).is_none());
}

#[test]
fn test_lookup_by_id_out_of_range_counter() {
    assert!(ARMV6.lookup_by_id_for_counter(0xff, 40).is_none());
}

#[test]
fn test_counter_mask() {
    let mask = CounterMask::of(&[0, 2]);
    assert_eq!(mask.0, 0b101);
    assert!(mask.contains(0));
    assert!(!mask.contains(1));
    assert!(mask.contains(2));
    assert!(!mask.contains(64));
    assert_eq!(mask.slots().collect::<Vec<_>>(), [0, 2]);
    assert_eq!(mask.to_string(), "0,2");
    assert_eq!(CounterMask::of(&[1, 2, 3, 4]).to_string(), "1,2,3,4");
    assert_eq!(CounterMask(0).to_string(), "");
}

#[test]
fn test_listing() {
    let listing = MIPS_24K.listing().to_string();
    let mut lines = listing.lines();

    let header = lines.next().unwrap();
    assert!(header.starts_with("counter"));
    assert!(header.ends_with(": meaning"));
    assert!(lines.next().unwrap().chars().all(|c| c == '-'));

    let first = lines.next().unwrap();
    assert!(first.starts_with("0,1          | CYCLES"));
    assert!(first.ends_with(": Cycles"));
    assert_eq!(listing.lines().count(), MIPS_24K.events.len() + 2);
}
