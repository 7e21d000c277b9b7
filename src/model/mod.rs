//! Domain types shared between the pure core and the terminal shell.

pub mod error;
pub mod item;
pub mod key;

pub use error::InputError;
pub use item::{Item, ItemStore};
pub use key::{Key, Modifiers, Outcome};
