pub mod circle;
pub mod frame;
pub mod line;
pub mod point_line;

pub use circle::Circle;
pub use frame::LocalFrame;
pub use line::Line;
pub use point_line::PointLine;
