//! UI Components
//!
//! Reusable Leptos components.

mod admin_banner;
pub(crate) mod category_filter;
mod delete_confirm_button;
mod draggable_card;
mod featured_projects;
mod nav_bar;
mod password_modal;
pub(crate) mod project_card;
mod project_detail;
mod project_form;
mod service_card;
mod service_form;
mod status_line;
mod tech_list_editor;

pub use admin_banner::AdminBanner;
pub use category_filter::CategoryFilterBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use draggable_card::DraggableCard;
pub use featured_projects::FeaturedProjects;
pub use nav_bar::NavBar;
pub use password_modal::PasswordModal;
pub use project_card::ProjectCard;
pub use project_detail::ProjectDetail;
pub use project_form::ProjectForm;
pub use service_card::ServiceCard;
pub use service_form::ServiceForm;
pub use status_line::StatusLine;
pub use tech_list_editor::TechListEditor;
