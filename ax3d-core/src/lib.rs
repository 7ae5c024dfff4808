/// AX3D Core Library - Axonometric projection and transformation logic
///
/// This library provides the stateless core for wireframe rendering:
/// axonometric projection bases, homogeneous transform matrices, figure
/// building and OBJ parsing.

pub mod geometry;
pub mod obj;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use geometry::{AxonPoint, Edge, Figure};
pub use obj::{parse_obj, ObjError};
pub use projection::Axonometry;
pub use transform::Transform;
