pub mod constants;
pub mod plist;

pub use plist::{PlistDocument, PlistNode};
