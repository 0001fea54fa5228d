pub mod contact;
pub mod menu;
pub mod particles;
pub mod tilt;
pub mod video;

pub use contact::{Begin, ContactFields, ContactForm, StatusMessage};
pub use menu::MenuState;
pub use particles::{FieldParams, ParticleField};
pub use tilt::{TiltOffset, TILT_RESET};
pub use video::{videos_to_pause, LazyTrigger};
