pub mod carousel;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod pages;
pub mod particles;
pub mod reveal;

pub use carousel::*;
pub use error::*;
pub use gesture::*;
pub use layout::*;
pub use pages::*;
pub use particles::*;
pub use reveal::*;
