use std::io;

use raygen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::UsageError("option `-c, --css <engine>' argument missing".to_string());
    assert_eq!(err.to_string(), "option `-c, --css <engine>' argument missing");

    let err = Error::FilesystemError {
        path: "shop/public".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };
    assert_eq!(
        err.to_string(),
        "failed to create 'shop/public': permission denied"
    );

    let err = Error::TemplateReadError {
        path: "js/app.js.j2".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(err.to_string(), "template 'js/app.js.j2' could not be read: not found");

    assert_eq!(Error::Aborted.to_string(), "aborting");
}

#[test]
fn test_filesystem_error_source() {
    use std::error::Error as _;

    let err = Error::FilesystemError {
        path: "shop".to_string(),
        source: io::Error::new(io::ErrorKind::Other, "disk full"),
    };
    assert_eq!(err.source().unwrap().to_string(), "disk full");
}
