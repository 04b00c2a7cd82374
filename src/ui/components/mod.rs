//! Reusable UI components

pub mod dialogs;

// Component architecture
pub mod all_projects;
pub mod contact_form;
pub mod dialog_component;
pub mod hidden_page;
pub mod home;
pub mod loading_overlay;
pub mod project_detail;
pub mod splash;
pub mod submissions_admin;

// Component exports
pub use all_projects::AllProjectsComponent;
pub use contact_form::ContactFormComponent;
pub use dialog_component::DialogComponent;
pub use hidden_page::HiddenPageComponent;
pub use home::HomeComponent;
pub use loading_overlay::LoadingOverlay;
pub use project_detail::ProjectDetailComponent;
pub use splash::SplashComponent;
pub use submissions_admin::SubmissionsAdminComponent;
