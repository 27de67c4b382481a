#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;
    use crate::models::{ApiResponse, Feature, FeatureStatus, VoteRequest, VoteStatus, WithdrawAck};
    use crate::validation::{parse_feature_id, parse_user_uuid, ValidationError};
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[test]
    fn test_user_uuid_parsing() {
        let valid = "b5f1c3a0-8f2e-4d4b-9a6d-2f1e8c7b6a50";
        assert_eq!(parse_user_uuid(valid).unwrap(), Uuid::parse_str(valid).unwrap());

        for bad in ["not-a-uuid", "", "b5f1c3a0-8f2e-4d4b-9a6d", "b5f1c3a0-8f2e-4d4b-9a6d-2f1e8c7b6a50x"] {
            assert!(matches!(
                parse_user_uuid(bad),
                Err(ValidationError::InvalidUserUuid(_))
            ));
        }
    }

    #[test]
    fn test_feature_id_parsing() {
        assert!(parse_feature_id("00000000-0000-0000-0000-000000000000").is_ok());
        assert!(matches!(
            parse_feature_id("F1"),
            Err(ValidationError::InvalidFeatureId(_))
        ));
    }

    #[test]
    fn test_error_code_wire_casing() {
        let cases = [
            (ErrorCode::ValidationError, "\"VALIDATION_ERROR\""),
            (ErrorCode::NotFound, "\"NOT_FOUND\""),
            (ErrorCode::AlreadyVoted, "\"ALREADY_VOTED\""),
            (ErrorCode::VoteNotFound, "\"VOTE_NOT_FOUND\""),
            (ErrorCode::Unauthorized, "\"UNAUTHORIZED\""),
            (ErrorCode::InternalError, "\"INTERNAL_ERROR\""),
        ];
        for (code, expected) in cases {
            assert_eq!(serde_json::to_string(&code).unwrap(), expected);
        }
    }

    #[test]
    fn test_feature_wire_shape() {
        let feature = Feature {
            id: Uuid::nil(),
            title: "Dark mode".into(),
            description: "Dark theme for the dashboard".into(),
            status: FeatureStatus::InProgress,
            app_version: None,
            vote_count: 3,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["voteCount"], 3);
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["appVersion"], serde_json::Value::Null);
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_feature_status_wire_casing() {
        assert_eq!(
            serde_json::to_string(&FeatureStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::from_str::<FeatureStatus>("\"planned\"").unwrap(),
            FeatureStatus::Planned
        );
    }

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ApiResponse::ok(WithdrawAck {
            message: "Vote withdrawn".into(),
        });
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["message"], "Vote withdrawn");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let envelope: ApiResponse<()> =
            ApiResponse::err(ErrorCode::AlreadyVoted, "User has already voted");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "ALREADY_VOTED");
        assert_eq!(json["error"]["message"], "User has already voted");
    }

    #[test]
    fn test_vote_request_field_casing() {
        let request: VoteRequest =
            serde_json::from_str(r#"{"userUuid":"b5f1c3a0-8f2e-4d4b-9a6d-2f1e8c7b6a50"}"#)
                .unwrap();
        assert_eq!(request.user_uuid, "b5f1c3a0-8f2e-4d4b-9a6d-2f1e8c7b6a50");
    }

    #[test]
    fn test_vote_status_serialization() {
        let absent = VoteStatus {
            has_voted: false,
            voted_at: None,
        };
        let json = serde_json::to_value(&absent).unwrap();
        assert_eq!(json["hasVoted"], false);
        assert!(json["votedAt"].is_null());

        let present = VoteStatus {
            has_voted: true,
            voted_at: Some(OffsetDateTime::UNIX_EPOCH),
        };
        let json = serde_json::to_value(&present).unwrap();
        assert_eq!(json["hasVoted"], true);
        assert_eq!(json["votedAt"], "1970-01-01T00:00:00Z");
    }
}
