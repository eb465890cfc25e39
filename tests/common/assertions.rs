//! Custom assertion macros and utilities
//!
//! Provides assertion macros that print the response body on failure,
//! which is where the API puts its error message.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert the status of a `TestResponse`, showing its body if it differs
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status_code(),
            $status,
            "unexpected status, body: {}",
            $response.text()
        );
    };
}

/// Assert a `TestResponse` failed with `status` and exactly `message` as body
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $message:expr) => {
        $crate::assert_status!($response, $status);
        assert_eq!($response.text(), $message);
    };
}

/// Assert that a string is a 24-character hex id
#[macro_export]
macro_rules! assert_hex_id {
    ($value:expr) => {
        let value: &str = $value;
        assert!(
            value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit()),
            "Expected a 24-character hex id, got '{}'",
            value
        );
    };
}
