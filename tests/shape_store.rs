use shape_dnd::shape::{DEFAULT_CIRCLE_ID, DEFAULT_RECTANGLE_ID, Shape, ShapeId, default_shapes};
use shape_dnd::store::{FileStore, KeyValueStore, MemoryStore, SHAPES_KEY, ShapeStore};

fn placed_shapes() -> Vec<Shape> {
    vec![
        Shape::rectangle("a1", 300, 120, 40, 80, "#ff8800"),
        Shape::circle("b2", 520, 260, 45, "#0088ff"),
    ]
}

#[test]
fn test_save_then_load_round_trips_with_defaults() {
    let mut store = ShapeStore::in_memory();
    let mut shapes = placed_shapes();
    shapes.insert(1, Shape::rectangle(DEFAULT_RECTANGLE_ID, 30, 100, 60, 60, "#228533"));

    store.save(&shapes).unwrap();
    assert_eq!(store.load(), shapes);
}

#[test]
fn test_load_appends_both_defaults_when_missing() {
    let mut store = ShapeStore::in_memory();
    store.save(&placed_shapes()).unwrap();

    let mut expected = placed_shapes();
    expected.extend(default_shapes());
    assert_eq!(store.load(), expected);
}

#[test]
fn test_one_default_is_enough() {
    let mut store = ShapeStore::in_memory();
    let shapes = vec![Shape::circle(DEFAULT_CIRCLE_ID, 60, 200, 30, "#2f34d0")];
    store.save(&shapes).unwrap();
    assert_eq!(store.load(), shapes);
}

#[test]
fn test_remove_by_id() {
    let mut store = ShapeStore::in_memory();
    let mut shapes = default_shapes();
    shapes.extend(placed_shapes());
    store.save(&shapes).unwrap();

    store.remove(&ShapeId::new("a1")).unwrap();
    let remaining: Vec<_> = store.load().iter().map(|shape| shape.id().to_string()).collect();
    assert_eq!(remaining, [DEFAULT_RECTANGLE_ID, DEFAULT_CIRCLE_ID, "b2"]);

    // Unknown ids are a no-op
    store.remove(&ShapeId::new("missing")).unwrap();
    assert_eq!(store.load().len(), 3);
}

#[test]
fn test_stored_records_are_tagged() {
    let mut backend = MemoryStore::new();
    let json = serde_json::to_string(&placed_shapes()).unwrap();
    backend.write(SHAPES_KEY, &json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&backend.read(SHAPES_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(value[0]["type"], "rectangle");
    assert_eq!(value[0]["height"], 80);
    assert_eq!(value[1]["type"], "circle");
    assert_eq!(value[1]["r"], 45);
    assert_eq!(value[1]["fill"], "#0088ff");
}

#[test]
fn test_file_store_survives_restart() {
    let dir = std::env::temp_dir().join(format!("shape_dnd_restart_{}", uuid::Uuid::new_v4()));

    let mut shapes = default_shapes();
    shapes.extend(placed_shapes());
    {
        let mut store = ShapeStore::new(Box::new(FileStore::new(&dir)));
        store.save(&shapes).unwrap();
    }

    let mut reopened = ShapeStore::new(Box::new(FileStore::new(&dir)));
    assert_eq!(reopened.load(), shapes);

    std::fs::remove_dir_all(dir).ok();
}
