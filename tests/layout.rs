use std::fs;

use settle_scout::{
    layout::{BoardLayout, LayoutLoader},
    scoring::NodeScorer,
    BoardError, Port, Resource,
};

fn fixture_loader() -> LayoutLoader {
    LayoutLoader::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn yaml_fixture_matches_builtin_sample() {
    let layout = fixture_loader()
        .load("boards/sample.yaml")
        .expect("fixture parses");
    assert_eq!(layout.name, "sample");
    assert_eq!(layout.tiles.len(), 19);
    assert_eq!(layout.tiles[1].roll, None);

    let from_file = layout.prepare().unwrap();
    let builtin = BoardLayout::sample().prepare().unwrap();
    assert_eq!(from_file.grid, builtin.grid);

    let scorer = NodeScorer::default();
    assert_eq!(
        scorer.score_board(&from_file.grid, None),
        scorer.score_board(&builtin.grid, None)
    );
}

#[test]
fn json_layout_with_ports_and_holdings() {
    let dir = tempfile::tempdir().unwrap();
    let mut layout = BoardLayout::sample();
    layout.name = "harbour_test".into();
    layout.holdings = Some(vec!["wheat".into()]);
    layout.ports = Some([(9, "wood".to_string())].into_iter().collect());
    fs::write(
        dir.path().join("board.json"),
        serde_json::to_string(&layout).unwrap(),
    )
    .unwrap();

    let loaded = LayoutLoader::new(dir.path()).load("board.json").unwrap();
    assert_eq!(loaded, layout);

    let prepared = loaded.prepare().unwrap();
    assert_eq!(
        prepared.topology.port(9),
        Some(Port::Resource(Resource::Wood))
    );
    let scores = NodeScorer::new(prepared.topology)
        .score_board(&prepared.grid, prepared.holdings.as_ref());
    // sample node 9 scores 13.8; wood harbour adds 2, three new resources add 7.5
    assert_eq!(scores[&9].score, 23.3);
    assert!(scores[&9].description.contains("PRO: Excellent Wood port synergy!"));
}

#[test]
fn short_board_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = "name: short\ntiles:\n  - { resource: wood, roll: 6 }\n  - { resource: ore }\n";
    fs::write(dir.path().join("short.yaml"), yaml).unwrap();

    let layout = LayoutLoader::new(dir.path()).load("short.yaml").unwrap();
    assert!(matches!(
        layout.prepare(),
        Err(BoardError::TileCount {
            expected: 19,
            found: 2
        })
    ));
}

#[test]
fn unknown_port_label_is_rejected() {
    let mut layout = BoardLayout::sample();
    layout.ports = Some([(3, "2:1 gold".to_string())].into_iter().collect());
    assert!(matches!(
        layout.prepare(),
        Err(BoardError::UnknownPort { .. })
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = fixture_loader().load("boards/nope.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("nope.yaml"));
}
