//! Test doubles and assertions for matdialogs

pub mod assertions;
pub mod doubles;

pub use assertions::*;
pub use doubles::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::doubles::*;
}
