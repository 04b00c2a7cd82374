pub mod contact_submission;

pub use contact_submission::DeliveryStatus;
pub use contact_submission::Entity as ContactSubmission;
