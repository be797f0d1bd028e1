//! UI Components
//!
//! Leptos components of the comparison site.

mod about_section;
mod drone_card_list;
mod drone_table;
mod filter_bar;
mod new_drone_form;
mod section_nav;

pub use about_section::AboutSection;
pub use drone_card_list::DroneCardList;
pub use drone_table::DroneTable;
pub use filter_bar::FilterBar;
pub use new_drone_form::NewDroneForm;
pub use section_nav::SectionNav;
