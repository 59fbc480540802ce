#![allow(missing_docs)]

use rotator::{
    from_jsonl, generate_rotations, sort_lexicographically, to_jsonl, RotationEntry,
    RotationOrder, Rotator, RotatorConfig,
};

const LEXICOGRAPHIC_CONFIG: &str = r#"
order = "lexicographic"
color = false
"#;

/// End to end: config -> rotate -> render and records.
#[test]
fn test_configured_rotation_end_to_end() {
    let config = RotatorConfig::parse(LEXICOGRAPHIC_CONFIG).unwrap();
    let rotator = Rotator::new(config);

    let rotations = rotator.rotate("banana");
    let table = rotator.render(&rotations);
    assert_eq!(
        table,
        "5  abanan\n3  anaban\n1  ananab\n0  banana\n4  nabana\n2  nanaba\n"
    );

    let jsonl = to_jsonl(&rotations).unwrap();
    let restored = from_jsonl(&jsonl).unwrap();
    assert_eq!(restored, rotations);

    // Records decoded from elsewhere can be put back in offset order.
    let by_offset = RotationOrder::Offset.apply(&restored);
    assert_eq!(by_offset, generate_rotations("banana"));
}

#[test]
fn test_library_functions_match_rotator() {
    let rotator = Rotator::new(RotatorConfig {
        order: RotationOrder::Lexicographic,
        color: false,
    });

    assert_eq!(
        rotator.rotate("mississippi"),
        sort_lexicographically(&generate_rotations("mississippi"))
    );
}

#[test]
fn test_every_entry_restores_base() {
    let base = "naïve café";
    for entry in generate_rotations(base) {
        assert_eq!(entry.original(), base);
    }
}

#[test]
fn test_caller_entries_are_left_untouched() {
    let entries = vec![
        RotationEntry::new(2, "cab"),
        RotationEntry::new(0, "abc"),
        RotationEntry::new(1, "bca"),
    ];
    let snapshot = entries.clone();

    let _ = rotator::sort_by_offset(&entries);
    let _ = sort_lexicographically(&entries);

    assert_eq!(entries, snapshot);
}
