pub mod form;
pub mod menu;
pub mod pointer;

pub use form::wire_contact_form;
pub use menu::wire_menu_toggle;
pub use pointer::wire_tilt_cards;
