use std::io;

use apex::error::{wrap_permission, Error};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let apex_err: Error = io_err.into();

    match apex_err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::TemplateRootNotFound { root: "files/hexagonal".to_string() };
    assert_eq!(err.to_string(), "Template root 'files/hexagonal' does not exist.");
}

#[test]
fn test_permission_errors_name_the_target() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let err = wrap_permission(io_err, "/srv/shop/cmd");

    match &err {
        Error::PermissionDenied { target, .. } => assert_eq!(target, "/srv/shop/cmd"),
        _ => panic!("Expected PermissionDenied variant"),
    }
    assert!(err.to_string().starts_with("Permission denied: /srv/shop/cmd:"));
}

#[test]
fn test_other_errors_pass_through() {
    let io_err = io::Error::new(io::ErrorKind::AlreadyExists, "exists");
    assert!(matches!(wrap_permission(io_err, "/srv/shop"), Error::IoError(_)));
}
