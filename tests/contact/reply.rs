use folio::constants::MSG_SUBMIT_FAILED;
use folio::contact::{RelayReply, SubmitOutcome};

fn reply(json: &str) -> RelayReply {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_success_needs_ok_status_and_flag() {
    let outcome = reply(r#"{"success": true, "message": "Message sent successfully!"}"#).into_outcome(true);
    assert_eq!(outcome, SubmitOutcome::Success("Message sent successfully!".to_string()));

    let outcome = reply(r#"{"success": true, "message": "odd"}"#).into_outcome(false);
    assert_eq!(outcome, SubmitOutcome::Failure("odd".to_string()));
}

#[test]
fn test_failure_message_precedence() {
    let outcome = reply(r#"{"error": "Failed to process", "details": "disk full"}"#).into_outcome(false);
    assert_eq!(outcome, SubmitOutcome::Failure("disk full".to_string()));

    let outcome = reply(r#"{"error": "Invalid email format"}"#).into_outcome(false);
    assert_eq!(outcome, SubmitOutcome::Failure("Invalid email format".to_string()));

    let outcome = reply("{}").into_outcome(true);
    assert_eq!(outcome, SubmitOutcome::Failure(MSG_SUBMIT_FAILED.to_string()));
}
