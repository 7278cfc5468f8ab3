pub mod fragment;
pub mod line;
pub mod region;

pub use fragment::Fragment;
pub use line::Line;
pub use region::Region;
