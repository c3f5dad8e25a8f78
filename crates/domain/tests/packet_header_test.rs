use mdns_wire_domain::{PacketHeader, Section};

#[test]
fn test_sections_are_ordered_as_on_the_wire() {
    assert!(Section::Query < Section::Answer);
    assert!(Section::Answer < Section::Authority);
    assert!(Section::Authority < Section::Additional);
}

#[test]
fn test_count_offsets() {
    let offsets: Vec<usize> = Section::ALL.iter().map(Section::count_offset).collect();
    assert_eq!(offsets, vec![4, 6, 8, 10]);
}

#[test]
fn test_record_count_sums_resource_sections() {
    let header = PacketHeader {
        query_count: 3,
        answer_count: 2,
        ns_count: 1,
        ar_count: 4,
        ..Default::default()
    };
    assert_eq!(header.record_count(), 7);
}

#[test]
fn test_later_populated_section() {
    let mut header = PacketHeader::default();
    assert_eq!(header.later_populated_section(Section::Query), None);

    *header.count_mut(Section::Authority) = 1;
    assert_eq!(
        header.later_populated_section(Section::Query),
        Some(Section::Authority)
    );
    assert_eq!(
        header.later_populated_section(Section::Answer),
        Some(Section::Authority)
    );
    assert_eq!(header.later_populated_section(Section::Authority), None);
    assert_eq!(header.later_populated_section(Section::Additional), None);
}

#[test]
fn test_header_display() {
    let header = PacketHeader {
        is_answer: true,
        truncated: true,
        answer_count: 2,
        ..Default::default()
    };
    assert_eq!(header.to_string(), "response qd=0 an=2 ns=0 ar=0 (truncated)");
}

