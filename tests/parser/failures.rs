//! Failure diagnostics: message order and wording.

use thornwald::parser::{Interpreter, Outcome, default_commands};
use thornwald::world::{Entity, Grid, Role, Tile, TileId, Viewpoint, Vitals, World};

fn bare_scene() -> (World, Viewpoint) {
    let grid = Grid::new(1, vec![Tile::new("a clearing")]);
    let player = Entity::creature("player", Role::Player, Vitals::new(100, 10));
    let world = World::new(grid, player);
    (world, Viewpoint::Open(TileId::new(0, 0)))
}

fn failure_lines(input: &str) -> Vec<String> {
    let (world, viewpoint) = bare_scene();
    let interpreter = Interpreter::new(default_commands().unwrap());
    match interpreter.interpret(input, &world, viewpoint) {
        Outcome::Failure(lines) => lines,
        other => panic!("expected failure for {input:?}, got {other:?}"),
    }
}

#[test]
fn unknown_verbs_get_the_generic_pair() {
    assert_eq!(
        failure_lines("dance"),
        vec![
            "The system has trouble interpreting your command.",
            "The system does not know what you mean by that.",
        ]
    );
}

#[test]
fn missing_direction_is_named() {
    assert_eq!(
        failure_lines("go"),
        vec![
            "The system has trouble interpreting your command.",
            "The system does not know what you mean by that.",
            "The command 'go' is missing some details regarding direction.",
            "It could be simply missing but it could also be invalid.",
        ]
    );
}

#[test]
fn missing_target_entity_is_named() {
    let lines = failure_lines("hit");
    assert!(
        lines.contains(
            &"The command 'hit' is missing some details regarding target entity.".to_string()
        )
    );
}

#[test]
fn unresolved_references_read_as_missing() {
    // A named but absent target is indistinguishable from no target.
    let lines = failure_lines("hit dragon");
    assert_eq!(lines, failure_lines("hit"));
}

#[test]
fn each_matching_record_contributes_diagnostics() {
    // "loot" matches both the entity form and the item form; both report.
    let lines = failure_lines("loot");
    assert!(
        lines.contains(
            &"The command 'loot' is missing some details regarding target entity.".to_string()
        )
    );
    assert!(
        lines.contains(
            &"The command 'loot' is missing some details regarding target item (in world)."
                .to_string()
        )
    );
}
