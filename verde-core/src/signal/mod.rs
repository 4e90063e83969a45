mod fusion;
mod normalize;

pub use fusion::fuse;
pub use normalize::normalize;
