#![allow(dead_code)]

/// Three hexes in a row with a city at each end.
pub const TWO_CITIES_TOML: &str = r#"
name = "two cities"
width = 3
height = 1

[[hexes]]
x = 0
y = 0
kind = "city"

[[hexes]]
x = 2
y = 0
kind = "city"
"#;

/// Four hexes in a row: a city in the west, a town in the east.
pub const CITY_AND_TOWN_JSON: &str = r#"{
    "name": "city and town",
    "width": 4,
    "height": 1,
    "hexes": [
        { "x": 0, "y": 0, "kind": "city" },
        { "x": 3, "y": 0, "kind": "town" }
    ]
}"#;

/// Game "g-1": players 0 and 1 with 10 cash each, no track, player 0 to build.
pub const EMPTY_SNAPSHOT: &str = r#"{
    "game_id": "g-1",
    "players": [0, 1],
    "cash": { "0": 10, "1": 10 },
    "active_player": 0
}"#;

/// A straight tile joining the two cities of [`TWO_CITIES_TOML`].
pub const STRAIGHT_ACTION: &str = r#"{
    "steps": [
        { "hex": { "x": 1, "y": 0 }, "type": "tile", "shape": "straight", "rotation": 1 }
    ]
}"#;

/// Town track on a city hex, which the engine refuses.
pub const TOWN_ON_CITY_ACTION: &str = r#"{
    "steps": [
        { "hex": { "x": 0, "y": 0 }, "type": "town", "direction": "EAST" }
    ]
}"#;

/// Complete track between the two cities of [`TWO_CITIES_TOML`].
pub const CONNECTED_SNAPSHOT: &str = r#"{
    "game_id": "g-1",
    "players": [0, 1],
    "cash": { "0": 8, "1": 10 },
    "active_player": 1,
    "links": [
        { "source": { "x": 0, "y": 0 }, "steps": ["EAST", "EAST"], "owner": 0, "complete": true }
    ]
}"#;

/// On [`CITY_AND_TOWN_JSON`]: player 0 builds out of the city, player 1 out
/// of the town, which reaches no city.
pub const STRANDED_SNAPSHOT: &str = r#"{
    "game_id": "g-2",
    "players": [0, 1],
    "cash": { "0": 10, "1": 10 },
    "active_player": 0,
    "links": [
        { "source": { "x": 0, "y": 0 }, "steps": ["EAST", "EAST"], "owner": 0, "complete": false },
        { "source": { "x": 3, "y": 0 }, "steps": ["WEST"], "owner": 1, "complete": false }
    ]
}"#;
