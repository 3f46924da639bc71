//! Tests for the exception values.

#[cfg(test)]
mod exception_tests {
    use std::error::Error as StdError;
    use std::io;
    use std::str::FromStr;
    use std::sync::Arc;

    use serde_json::{json, Value};

    use crate::exception::{
        CapturedContext, Error, ErrorObject, HttpException, HttpOptions, Links, Meta,
        PartialErrorObject, Source, StatusCode,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_every_status_uses_fixed_status_and_default_title() {
        for &status in StatusCode::ALL {
            let exception = HttpException::of(status, "Something failed", None, None);

            assert_eq!(exception.status(), status.as_str());
            assert_eq!(exception.title(), Some(status.default_title()));
            assert_eq!(exception.detail(), Some("Something failed"));
            assert_eq!(exception.message(), "Something failed");
            assert_eq!(exception.code(), None);
            assert_eq!(exception.kind(), Some(status));
        }
    }

    #[test]
    fn test_named_constructors_follow_the_table() {
        let cases = vec![
            (HttpException::bad_request("d", None, None), "400", "Bad Request"),
            (HttpException::unauthorized("d", None, None), "401", "Unauthorized"),
            (HttpException::forbidden("d", None, None), "403", "Forbidden"),
            (HttpException::not_found("d", None, None), "404", "Not Found"),
            (HttpException::method_not_allowed("d", None, None), "405", "Method Not Allowed"),
            (HttpException::not_acceptable("d", None, None), "406", "Not Acceptable"),
            (HttpException::request_timeout("d", None, None), "408", "Request Timeout"),
            (HttpException::conflict("d", None, None), "409", "Conflict"),
            (HttpException::unsupported_media_type("d", None, None), "415", "Unsupported Media Type"),
            (HttpException::im_a_teapot("d", None, None), "418", "I'm a teapot"),
            (HttpException::unprocessable_entity("d", None, None), "422", "Unprocessable Entity"),
            (HttpException::too_many_requests("d", None, None), "429", "Too Many Request"),
            (HttpException::internal_server_error("d", None, None), "500", "Internal Server Error"),
            (HttpException::not_implemented("d", None, None), "501", "Not Implemented"),
            (HttpException::service_unavailable("d", None, None), "503", "Service Unavailable"),
            (HttpException::gateway_timeout("d", None, None), "504", "Gateway Timeout"),
            (HttpException::http_version_not_supported("d", None, None), "505", "HTTP Version Not Supported"),
        ];

        assert_eq!(cases.len(), StatusCode::ALL.len());
        for (exception, status, title) in cases {
            assert_eq!(exception.status(), status);
            assert_eq!(exception.title(), Some(title));
        }
    }

    #[test]
    fn test_options_override_title_and_pass_through() {
        let options = HttpOptions::new()
            .with_title("Custom Not Found Title")
            .with_id("resource-123")
            .with_links(Links::about("http://example.com/not-found"))
            .with_source(Source::pointer("/data/resource"))
            .with_meta_entry("debug", "Resource does not exist");

        for &status in StatusCode::ALL {
            let exception = HttpException::of(
                status,
                "Resource not found",
                Some("RESOURCE_NOT_FOUND"),
                Some(options.clone()),
            );

            assert_eq!(
                serde_json::to_value(exception.to_json()).unwrap(),
                json!({
                    "id": "resource-123",
                    "links": { "about": "http://example.com/not-found" },
                    "status": status.as_str(),
                    "code": "RESOURCE_NOT_FOUND",
                    "title": "Custom Not Found Title",
                    "detail": "Resource not found",
                    "source": { "pointer": "/data/resource" },
                    "meta": { "debug": "Resource does not exist" }
                })
            );
        }
    }

    #[test]
    fn test_empty_options_keep_default_title() {
        let exception = HttpException::not_found("Resource not found", None, Some(HttpOptions::new()));
        assert_eq!(exception.title(), Some("Not Found"));
    }

    #[test]
    fn test_not_found_serializes_in_member_order() {
        let exception = HttpException::not_found(
            "Resource not found",
            Some("RESOURCE_NOT_FOUND"),
            Some(HttpOptions::new().with_meta_entry("debug", "x")),
        );

        assert_eq!(
            serde_json::to_string(&exception).unwrap(),
            r#"{"status":"404","code":"RESOURCE_NOT_FOUND","title":"Not Found","detail":"Resource not found","meta":{"debug":"x"}}"#
        );
        assert_eq!(
            exception.to_json(),
            ErrorObject {
                id: None,
                links: None,
                status: "404".to_string(),
                code: Some("RESOURCE_NOT_FOUND".to_string()),
                title: Some("Not Found".to_string()),
                detail: Some("Resource not found".to_string()),
                source: None,
                meta: Some(Meta::from_iter([("debug".to_string(), json!("x"))])),
            }
        );
    }

    #[test]
    fn test_default_exception() {
        let exception = HttpException::default();

        assert_eq!(exception.status(), "500");
        assert_eq!(exception.message(), "An error occurred");
        assert_eq!(exception.to_string(), "An error occurred");
        assert_eq!(exception.detail(), None);
        assert_eq!(serde_json::to_value(&exception).unwrap(), json!({ "status": "500" }));
    }

    #[test]
    fn test_missing_detail_uses_default_message() {
        let exception = HttpException::new(
            PartialErrorObject::new().with_status("400").with_title("Missing Detail"),
        );

        assert_eq!(exception.message(), "An error occurred");
        assert_eq!(exception.to_json().detail, None);
    }

    #[test]
    fn test_base_exception_round_trips_all_fields() {
        let parts = PartialErrorObject::new()
            .with_id("test-id")
            .with_links(Links::about("http://example.com/about"))
            .with_status("401")
            .with_code("AUTH_ERROR")
            .with_title("Unauthorized")
            .with_detail("You are not authorized to perform this action.")
            .with_source(Source::parameter("authToken"))
            .with_meta_entry("debug", "token_expired");

        let exception = HttpException::new(parts.clone());

        assert_eq!(PartialErrorObject::from(exception.to_json()), parts);
    }

    #[test]
    fn test_to_json_never_includes_cause() {
        let exception = HttpException::with_cause(
            PartialErrorObject::new().with_detail("A detailed message"),
            io::Error::new(io::ErrorKind::Other, "Underlying issue"),
        );

        let value = serde_json::to_value(exception.to_json()).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["detail", "status"]);
        assert!(!value.to_string().contains("Underlying issue"));
    }

    #[test]
    fn test_explicit_cause_is_returned() {
        let exception = HttpException::with_cause(
            PartialErrorObject::new().with_title("Test Error").with_detail("A detailed message"),
            io::Error::new(io::ErrorKind::Other, "Underlying issue"),
        );

        let cause = exception.original_error();
        assert_eq!(cause.to_string(), "Underlying issue");
        assert_eq!(
            cause.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::Other)
        );
        assert_eq!(
            StdError::source(&exception).map(|cause| cause.to_string()),
            Some("Underlying issue".to_string())
        );
    }

    #[test]
    fn test_shared_cause_is_kept() {
        let cause: crate::exception::Cause =
            Arc::new(io::Error::new(io::ErrorKind::TimedOut, "upstream timed out"));
        let exception = HttpException::from_parts(PartialErrorObject::new(), Some(cause.clone()));

        assert_eq!(Arc::strong_count(&cause), 2);
        assert_eq!(exception.original_error().to_string(), "upstream timed out");
    }

    #[test]
    fn test_missing_cause_captures_call_site() {
        let exception = HttpException::new(PartialErrorObject::new().with_title("Captured Error Test"));
        let expected_line = line!() - 1;

        let cause = exception.original_error();
        assert_eq!(cause.to_string(), "Captured raw error context");

        let context = cause.downcast_ref::<CapturedContext>().unwrap();
        assert_eq!(context.location().file(), file!());
        assert_eq!(context.location().line(), expected_line);
        assert_eq!(exception.location(), context.location());
    }

    #[test]
    fn test_named_constructor_records_caller_location() {
        let exception = HttpException::conflict("Version mismatch", None, None);
        let expected_line = line!() - 1;

        assert_eq!(exception.location().file(), file!());
        assert_eq!(exception.location().line(), expected_line);
    }

    #[test]
    fn test_caused_by_replaces_captured_context() {
        let exception = HttpException::service_unavailable("Database is down", Some("DB_DOWN"), None)
            .caused_by(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));

        assert!(exception.original_error().downcast_ref::<CapturedContext>().is_none());
        assert_eq!(exception.original_error().to_string(), "connection refused");
        assert_eq!(exception.code(), Some("DB_DOWN"));
    }

    #[test]
    fn test_is_valid() {
        assert!(HttpException::default().is_valid());
        assert!(HttpException::new(PartialErrorObject::new().with_title("Error without status")).is_valid());
        assert!(HttpException::bad_request("Bad input", None, None).is_valid());
    }

    #[test]
    fn test_identity_checks() {
        let not_found = HttpException::not_found("Missing", None, None);
        assert!(not_found.is(StatusCode::NotFound));
        assert!(!not_found.is(StatusCode::BadRequest));
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let base = HttpException::default();
        assert_eq!(base.kind(), Some(StatusCode::InternalServerError));
        assert!(base.is_server_error());

        let payment = HttpException::new(PartialErrorObject::new().with_status("402"));
        assert_eq!(payment.kind(), None);
        assert!(payment.is_client_error());

        let opaque = HttpException::new(PartialErrorObject::new().with_status("teapot"));
        assert_eq!(opaque.kind(), None);
        assert!(!opaque.is_client_error());
        assert!(!opaque.is_server_error());
    }

    #[test]
    fn test_propagates_through_question_mark() {
        fn find_user(id: u32) -> Result<String, HttpException> {
            Err(HttpException::not_found(
                format!("User {id} does not exist"),
                Some("USER_NOT_FOUND"),
                Some(HttpOptions::new().with_source(Source::parameter("id"))),
            ))
        }

        fn handler() -> Result<String, Box<dyn StdError + Send + Sync>> {
            let user = find_user(7)?;
            Ok(user)
        }

        let error = handler().unwrap_err();
        let exception = error.downcast_ref::<HttpException>().unwrap();
        assert_eq!(exception.status(), "404");
        assert_eq!(exception.message(), "User 7 does not exist");
        assert_eq!(exception.source(), Some(&Source::parameter("id")));
    }

    #[test]
    fn test_rebuild_from_error_object() {
        let object = ErrorObject {
            id: Some("abc".to_string()),
            links: None,
            status: "422".to_string(),
            code: None,
            title: Some("Invalid Attribute".to_string()),
            detail: Some("First name must contain at least two characters.".to_string()),
            source: Some(Source::pointer("/data/attributes/firstName")),
            meta: None,
        };

        let exception = HttpException::from(object.clone());
        assert_eq!(exception.to_json(), object);
        assert_eq!(exception.kind(), Some(StatusCode::UnprocessableEntity));
        assert_eq!(exception.message(), "First name must contain at least two characters.");
    }

    #[test]
    fn test_status_lookup() {
        assert_eq!(StatusCode::from_str("404").unwrap(), StatusCode::NotFound);
        assert_eq!(StatusCode::try_from(418).unwrap(), StatusCode::ImATeapot);
        assert!(matches!(StatusCode::from_str("402"), Err(Error::UnknownStatus(ref s)) if s == "402"));
        assert!(matches!(StatusCode::from_str("0404"), Err(Error::UnknownStatus(_))));
        assert!(matches!(StatusCode::try_from(200), Err(Error::UnknownStatus(ref s)) if s == "200"));

        assert_eq!(StatusCode::TooManyRequests.default_title(), "Too Many Request");
        assert_eq!(StatusCode::TooManyRequests.reason_phrase(), "Too Many Requests");
        assert_eq!(StatusCode::TooManyRequests.to_string(), "429 Too Many Requests");
        assert_eq!(StatusCode::HttpVersionNotSupported.as_u16(), 505);
        assert!(StatusCode::GatewayTimeout.is_server_error());
        assert!(StatusCode::Conflict.is_client_error());
    }

    #[test]
    fn test_status_table_is_consistent() {
        assert_eq!(StatusCode::ALL.len(), 17);
        assert_eq!(StatusCode::ALL.iter().filter(|s| s.is_client_error()).count(), 12);
        assert_eq!(StatusCode::ALL.iter().filter(|s| s.is_server_error()).count(), 5);

        for &status in StatusCode::ALL {
            assert_eq!(status.as_str(), status.as_u16().to_string());
            assert_eq!(StatusCode::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_options_from_json() {
        let options = HttpOptions::from_json(json!({
            "title": "Slow down",
            "meta": { "retryAfter": 30 }
        }))
        .unwrap();

        let exception = HttpException::too_many_requests("Rate limit exceeded", None, Some(options));
        assert_eq!(exception.title(), Some("Slow down"));
        assert_eq!(exception.meta().and_then(|m| m.get("retryAfter")), Some(&json!(30)));
    }

    #[test]
    fn test_options_from_json_reject_fixed_members() {
        for member in ["status", "detail", "code"] {
            let mut bag = serde_json::Map::new();
            bag.insert(member.to_string(), json!("200"));
            let result = HttpOptions::from_json(Value::Object(bag));
            assert!(matches!(result, Err(Error::InvalidOptions(_))), "{member} was accepted");
        }
    }

    #[test]
    fn test_partial_error_object_from_json() {
        let parts: PartialErrorObject = serde_json::from_value(json!({
            "detail": "Broken",
            "links": { "type": "https://example.com/errors/broken" }
        }))
        .unwrap();

        let exception = HttpException::new(parts);
        assert_eq!(exception.status(), "500");
        assert_eq!(
            serde_json::to_value(&exception).unwrap(),
            json!({
                "links": { "type": "https://example.com/errors/broken" },
                "status": "500",
                "detail": "Broken"
            })
        );
    }

    #[test]
    fn test_report_logs_without_panicking() {
        init_logger();

        HttpException::gateway_timeout("Upstream did not answer", None, None).report();
        HttpException::forbidden("Not yours", Some("OWNERSHIP"), None)
            .caused_by(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            .report();
    }

    #[test]
    fn test_error_chain_reports_message_and_cause() {
        let captured = HttpException::unauthorized("Token expired", Some("AUTH_EXPIRED"), None);
        assert_eq!(captured.to_string(), "Token expired");
        assert_eq!(
            StdError::source(&captured).map(|cause| cause.to_string()),
            Some("Captured raw error context".to_string())
        );

        let wrapped = captured.clone().caused_by(io::Error::new(io::ErrorKind::InvalidData, "bad signature"));
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(wrapped);
        assert_eq!(boxed.to_string(), "Token expired");
        assert_eq!(
            boxed.source().map(|cause| cause.to_string()),
            Some("bad signature".to_string())
        );
    }

    #[test]
    fn test_error_object_without_status_reads_as_500() {
        let object: ErrorObject = serde_json::from_value(json!({ "title": "Invalid Attribute" })).unwrap();

        assert_eq!(object.status, "500");
        assert_eq!(serde_json::to_value(&object).unwrap(), json!({ "status": "500", "title": "Invalid Attribute" }));
    }
}
