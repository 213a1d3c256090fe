use crate::shape::ShapeId;

// Random v4 ids so copies never collide with ids left by earlier sessions
pub fn generate_id() -> ShapeId {
    ShapeId::new(uuid::Uuid::new_v4().to_string())
}
