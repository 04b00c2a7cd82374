#[path = "contact/form.rs"]
mod form;

#[path = "contact/reply.rs"]
mod reply;
