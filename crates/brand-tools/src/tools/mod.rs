//! The brand availability tools

pub mod channel;
pub mod lookup;
pub mod multi;

pub use channel::ChannelTool;
pub use lookup::LookupTool;
pub use multi::MultiBrandTool;
