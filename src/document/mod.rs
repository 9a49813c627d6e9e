pub mod node;
pub mod parse;
pub mod serialize;

pub use node::{DocumentTree, Element, Node};
pub use parse::parse_fragment;
pub use serialize::{escape_attr, escape_text};
