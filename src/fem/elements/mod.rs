//! Structural elements module

mod material;
mod member;
mod node;
mod section;
mod support;

pub use material::Material;
pub use member::Member;
pub(crate) use member::Segment;
pub use node::Node;
pub use section::Section;
pub use support::Support;
