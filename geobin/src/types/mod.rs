mod bbox;
mod position;

pub use bbox::BBox;
pub use position::Position;
