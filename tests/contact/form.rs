use folio::contact::{ContactForm, FormField, MessageKind, SubmitOutcome};

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.name = "Ann".to_string();
    form.email = "ann@example.com".to_string();
    form.message = "Hi".to_string();
    form
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut form = ContactForm::new();
    assert_eq!(form.focus, FormField::Name);

    for c in "Ann".chars() {
        form.insert_char(c);
    }
    form.focus_next();
    form.insert_char('a');
    form.insert_char('x');
    form.backspace();

    assert_eq!(form.field(FormField::Name), "Ann");
    assert_eq!(form.field(FormField::Email), "a");

    form.focus_next();
    form.focus_next();
    assert_eq!(form.focus, FormField::Name);
    form.focus_previous();
    assert_eq!(form.focus, FormField::Message);
}

#[test]
fn test_success_clears_form_and_schedules_clear() {
    let mut form = filled_form();

    let submission = form.begin_submit().unwrap();
    assert_eq!(submission.name, "Ann");
    assert_eq!(submission.email, "ann@example.com");
    assert!(form.is_submitting());

    let clear_id = form
        .finish_submit(SubmitOutcome::Success("Message sent successfully!".to_string()))
        .unwrap();

    assert!(!form.is_submitting());
    assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    let status = form.status().unwrap();
    assert_eq!(status.kind, MessageKind::Success);
    assert_eq!(status.text, "Message sent successfully!");

    assert!(form.clear_status(clear_id));
    assert!(form.status().is_none());
}

#[test]
fn test_failure_keeps_fields() {
    let mut form = filled_form();
    form.begin_submit();

    let clear_id = form.finish_submit(SubmitOutcome::Failure("Invalid email format".to_string()));
    assert!(clear_id.is_none());
    assert_eq!(form.name, "Ann");
    assert_eq!(form.message, "Hi");
    assert_eq!(form.status().unwrap().kind, MessageKind::Error);
}

#[test]
fn test_no_second_submit_while_in_flight() {
    let mut form = filled_form();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());

    // Input is frozen while the request is in flight
    form.insert_char('!');
    form.backspace();
    assert_eq!(form.name, "Ann");
}

#[test]
fn test_stale_clear_does_not_remove_newer_message() {
    let mut form = filled_form();
    form.begin_submit();
    let first = form.finish_submit(SubmitOutcome::Success("one".to_string())).unwrap();

    form.begin_submit();
    form.finish_submit(SubmitOutcome::Failure("two".to_string()));

    assert!(!form.clear_status(first));
    assert_eq!(form.status().unwrap().text, "two");
}
