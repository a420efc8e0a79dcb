pub mod components;
pub mod kind;
pub mod renderer;
pub mod renders;
pub mod traits;

pub use components::*;
pub use kind::*;
pub use renderer::*;
pub use renders::*;
pub use traits::*;
