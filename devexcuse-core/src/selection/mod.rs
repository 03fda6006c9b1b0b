mod counter;
mod engine;
mod index_source;
mod search;


pub use counter::*;
pub use engine::*;
pub use index_source::*;
pub use search::*;
