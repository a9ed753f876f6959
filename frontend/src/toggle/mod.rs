mod binding;
pub mod mode;
pub mod surface;
mod toggler;

pub use binding::{install, install_in};
pub use mode::FormMode;
pub use surface::{DomSurface, MemorySurface, ToggleSurface, Visibility};
pub use toggler::FormToggler;
