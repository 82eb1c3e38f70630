use waveplan::dag::{Hazard, HazardKind, conflicting_pairs, detect_hazards};
use waveplan_test_utils::builders::TaskBuilder;
use waveplan_test_utils::init_tracing;

#[test]
fn test_raw_hazard_from_writer_to_reader() {
    init_tracing();
    let tasks = vec![
        TaskBuilder::new("T1").writes("auth").build(),
        TaskBuilder::new("T2").reads("auth").build(),
    ];

    let hazards = detect_hazards(&tasks);

    assert_eq!(hazards, vec![Hazard::new(HazardKind::Raw, "T1", "T2", "auth")]);
}

#[test]
fn test_war_hazard_from_reader_to_later_writer() {
    let tasks = vec![
        TaskBuilder::new("A").reads("db").build(),
        TaskBuilder::new("B").writes("db").build(),
    ];

    let hazards = detect_hazards(&tasks);

    assert_eq!(hazards, vec![Hazard::new(HazardKind::War, "A", "B", "db")]);
}

#[test]
fn test_waw_and_mutex_hazards() {
    let tasks = vec![
        TaskBuilder::new("A").writes("api").mutex("port:8080").build(),
        TaskBuilder::new("B").writes("api").mutex("port:8080").build(),
    ];

    let hazards = detect_hazards(&tasks);

    assert_eq!(
        hazards,
        vec![
            Hazard::new(HazardKind::Waw, "A", "B", "api"),
            Hazard::new(HazardKind::Mutex, "A", "B", "port:8080"),
        ]
    );
}

#[test]
fn test_read_write_of_same_component_yields_every_kind() {
    // Both tasks read and write `core`: RAW, WAR and WAW all apply.
    let tasks = vec![
        TaskBuilder::new("A").reads("core").writes("core").build(),
        TaskBuilder::new("B").reads("core").writes("core").build(),
    ];

    let kinds: Vec<HazardKind> = detect_hazards(&tasks).iter().map(|h| h.kind).collect();

    assert_eq!(kinds, vec![HazardKind::Raw, HazardKind::War, HazardKind::Waw]);
}

#[test]
fn test_multiple_components_reported_individually_in_sorted_order() {
    let tasks = vec![
        TaskBuilder::new("A").writes("ui").writes("auth").build(),
        TaskBuilder::new("B").reads("auth").reads("ui").build(),
    ];

    let hazards = detect_hazards(&tasks);

    assert_eq!(
        hazards,
        vec![
            Hazard::new(HazardKind::Raw, "A", "B", "auth"),
            Hazard::new(HazardKind::Raw, "A", "B", "ui"),
        ]
    );
    assert_eq!(
        conflicting_pairs(&hazards),
        vec![("A".to_string(), "B".to_string())]
    );
}

#[test]
fn test_task_never_conflicts_with_itself() {
    let tasks = vec![
        TaskBuilder::new("solo")
            .reads("core")
            .writes("core")
            .mutex("lock")
            .build(),
    ];

    assert!(detect_hazards(&tasks).is_empty());
}

#[test]
fn test_disjoint_tasks_have_no_hazards() {
    let tasks = vec![
        TaskBuilder::new("A").reads("x").writes("y").build(),
        TaskBuilder::new("B").reads("z").writes("w").mutex("m1").build(),
        TaskBuilder::new("C").mutex("m2").build(),
    ];

    assert!(detect_hazards(&tasks).is_empty());
}

#[test]
fn test_hazard_order_follows_input_order_of_pairs() {
    let tasks = vec![
        TaskBuilder::new("A").writes("c").build(),
        TaskBuilder::new("B").reads("c").build(),
        TaskBuilder::new("C").reads("c").build(),
    ];

    let hazards = detect_hazards(&tasks);

    assert_eq!(
        hazards,
        vec![
            Hazard::new(HazardKind::Raw, "A", "B", "c"),
            Hazard::new(HazardKind::Raw, "A", "C", "c"),
        ]
    );
    // Repeated calls are identical.
    assert_eq!(hazards, detect_hazards(&tasks));
}

#[test]
fn test_conflicting_pairs_dedupes_across_kinds() {
    let hazards = vec![
        Hazard::new(HazardKind::Waw, "A", "B", "api"),
        Hazard::new(HazardKind::Mutex, "A", "B", "port"),
        Hazard::new(HazardKind::Raw, "B", "C", "db"),
        Hazard::new(HazardKind::War, "C", "B", "db"),
    ];

    assert_eq!(
        conflicting_pairs(&hazards),
        vec![
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string()),
        ]
    );
}

#[test]
fn test_hazard_display() {
    let hazard = Hazard::new(HazardKind::Mutex, "A", "B", "port:8080");
    assert_eq!(hazard.to_string(), "MUTEX A -> B on 'port:8080'");
}
