use std::fs;

use board_core::{
    BoardConfig, BoardDocument, GenerateError, Grid, HolePolicy, Position, RiverAlgorithm,
    SearchMode, WallStrategy, generate_board, verify_document,
};
use tempfile::tempdir;

fn rich_config() -> BoardConfig {
    BoardConfig {
        name: "Round Trip".to_string(),
        width: 8,
        height: 8,
        start_fields: 3,
        checkpoints: 3,
        holes: 3,
        resource_fields: 3,
        max_resource_amount: 4,
        exact_resource_amount: false,
        rivers: true,
        river_algorithm: RiverAlgorithm::Independent,
        walls: true,
        wall_strategy: WallStrategy::PerCell,
        ..BoardConfig::default()
    }
}

#[test]
fn test_document_survives_a_trip_through_a_json_file() {
    let board = generate_board(&rich_config(), 31_337).expect("board should generate");
    let dir = tempdir().expect("temp dir should be created");
    let path = dir.path().join("board.json");

    fs::write(&path, board.document.to_json_pretty().expect("document should serialize"))
        .expect("board file should be written");
    let source = fs::read_to_string(&path).expect("board file should be readable");
    let parsed = BoardDocument::from_json(&source).expect("board file should parse");

    assert_eq!(parsed, board.document);
    assert_eq!(parsed.fingerprint(), board.document.fingerprint());
}

#[test]
fn test_grid_rebuilt_from_document_matches_generated_grid() {
    for seed in [1_u64, 2, 3, 40, 999] {
        let board = generate_board(&rich_config(), seed).expect("board should generate");
        let rebuilt = Grid::from_document(&board.document).expect("generated documents are valid");
        assert_eq!(rebuilt, board.grid, "seed={seed}");
    }
}

#[test]
fn test_overlapping_features_are_rejected() {
    let board = generate_board(&rich_config(), 5).expect("board should generate");
    let mut document = board.document;
    document.checkpoints[0] = document.eye.position;

    assert!(matches!(Grid::from_document(&document), Err(GenerateError::InvalidConfig { .. })));
}

#[test]
fn test_off_board_wall_is_rejected() {
    let json = r#"{
        "name": "broken",
        "width": 2,
        "height": 2,
        "eye": { "position": [0, 0], "direction": "NORTH" },
        "startFields": [{ "position": [1, 1], "direction": "EAST" }],
        "checkPoints": [[1, 0]],
        "walls": [[[1, 1], [2, 1]]]
    }"#;
    let document = BoardDocument::from_json(json).expect("schema is satisfied");
    assert_eq!(document.checkpoints, vec![Position::new(1, 0)]);

    let result = verify_document(&document, HolePolicy::Passable, SearchMode::Heuristic);
    assert!(matches!(result, Err(GenerateError::InvalidConfig { .. })));
}

#[test]
fn test_oversized_dimensions_are_rejected_before_allocating() {
    let json = r#"{
        "name": "vast",
        "width": 4294967296,
        "height": 4294967296,
        "eye": { "position": [0, 0], "direction": "NORTH" },
        "startFields": [],
        "checkPoints": []
    }"#;
    let document = BoardDocument::from_json(json).expect("schema is satisfied");

    assert!(matches!(Grid::from_document(&document), Err(GenerateError::InvalidConfig { .. })));
    let result = verify_document(&document, HolePolicy::Passable, SearchMode::Heuristic);
    assert!(matches!(result, Err(GenerateError::InvalidConfig { .. })));
}

#[test]
fn test_handwritten_document_verifies() {
    let json = r#"{
        "name": "tiny",
        "width": 3,
        "height": 1,
        "eye": { "position": [1, 0], "direction": "SOUTH" },
        "startFields": [{ "position": [0, 0], "direction": "EAST" }],
        "checkPoints": [[2, 0]]
    }"#;
    let document = BoardDocument::from_json(json).expect("schema is satisfied");
    let feasibility = verify_document(&document, HolePolicy::Passable, SearchMode::Reachability)
        .expect("document is well formed");
    assert!(!feasibility.ok, "the eye splits a one-row board");
}
