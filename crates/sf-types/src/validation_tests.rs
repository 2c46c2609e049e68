//! Unit tests for form validation.

use super::*;

#[test]
fn test_comment_validation() {
    // Empty content -> Error
    let input = CommentValidationInput { content: "" };
    let errors = input.validate();
    assert_eq!(errors.get("content"), Some(&ValidationError::Required));

    // Whitespace-only content is rejected too, no call should be made
    let input = CommentValidationInput { content: "   \n\t  " };
    let errors = input.validate();
    assert_eq!(errors.get("content"), Some(&ValidationError::Required));

    // Real content -> OK
    let input = CommentValidationInput { content: "Thanks!" };
    assert!(input.validate().is_empty());
}

#[test]
fn test_post_validation() {
    // Blank title and content -> both flagged
    let input = PostValidationInput {
        title: " ",
        subject: "Math",
        content: "",
    };
    let errors = input.validate();
    assert_eq!(errors.get("title"), Some(&ValidationError::Required));
    assert_eq!(errors.get("content"), Some(&ValidationError::Required));
    assert!(!errors.contains_key("subject"));

    // Overlong title -> Error
    let long_title = "x".repeat(TITLE_MAX + 1);
    let input = PostValidationInput {
        title: &long_title,
        subject: "Math",
        content: "Study hard",
    };
    let errors = input.validate();
    assert_eq!(errors.get("title"), Some(&ValidationError::TooLong(TITLE_MAX)));

    // Valid post -> OK
    let input = PostValidationInput {
        title: "Midterm tips",
        subject: "Math",
        content: "Study hard",
    };
    assert!(input.validate().is_empty());
}

#[test]
fn test_registration_validation() {
    // Short username -> Error
    let input = RegistrationValidationInput {
        username: "ab",
        password: "long enough password",
    };
    let errors = input.validate();
    assert_eq!(errors.get("username"), Some(&ValidationError::TooShort(USERNAME_MIN)));

    // Short password -> Error
    let input = RegistrationValidationInput {
        username: "alice",
        password: "short",
    };
    let errors = input.validate();
    assert_eq!(errors.get("password"), Some(&ValidationError::TooShort(PASSWORD_MIN)));

    // Missing both -> both Required
    let input = RegistrationValidationInput {
        username: "",
        password: "",
    };
    let errors = input.validate();
    assert_eq!(errors.get("username"), Some(&ValidationError::Required));
    assert_eq!(errors.get("password"), Some(&ValidationError::Required));

    // Valid input -> OK
    let input = RegistrationValidationInput {
        username: "alice",
        password: "correct horse battery",
    };
    assert!(input.validate().is_empty());
}

#[test]
fn test_format_errors_is_readable() {
    let input = CommentValidationInput { content: "" };
    let formatted = format_errors(&input.validate());
    assert_eq!(formatted, "content: This field is required");
}
