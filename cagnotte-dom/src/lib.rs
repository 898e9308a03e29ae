pub mod node;
pub mod normalize;
pub mod value;

pub use node::{Component, Node};
pub use normalize::normalize;
pub use value::Value;
