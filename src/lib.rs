#[macro_use]
mod macros;
mod utils;

pub mod container;
pub mod error;
pub mod list;

pub use container::bst::TraversalOrder;
pub use container::bst::Tree;
pub use container::hash::HashTable;
pub use container::hash::LoadFactor;
pub use container::heap::PriorityQueue;
pub use container::Queue;
pub use container::Stack;
pub use error::Error;
pub use list::List;
