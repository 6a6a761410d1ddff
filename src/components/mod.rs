//! UI Components
//!
//! One page component per route, plus shared pieces.

mod delete_confirm_button;
mod login;
mod main_menu;
mod markdown_view;
mod nav_bar;
mod profile;
mod project_details;
mod project_edit;
mod projects;
mod register;
mod tasks;
mod users;

pub use delete_confirm_button::DeleteConfirmButton;
pub use login::LoginPage;
pub use main_menu::MainMenu;
pub use markdown_view::MarkdownView;
pub use nav_bar::NavBar;
pub use profile::{Profile, ProfileEdit};
pub use project_details::ProjectDetails;
pub use project_edit::ProjectEdit;
pub use projects::{AllProjects, UserProjects};
pub use register::RegisterPage;
pub use tasks::{TaskDetails, TaskEdit};
pub use users::{AllUsers, UserDetails};
