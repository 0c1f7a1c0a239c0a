use evgate_types::{Envelope, NormalizedRecord, UploadRecord};
use serde_json::{Map, Value};

use crate::fields::{FieldReader, is_email};

/// Validate and normalize a FILE_UPLOAD event.
///
/// Requires `uploader_email` (valid syntax) and `size_bytes` (non-negative
/// integer). Normalization assigns a storage class from the size and
/// lowercases the uploader email.
pub fn handle(event: &Map<String, Value>) -> Envelope {
    let mut fields = FieldReader::new(event);

    let uploader_email = match fields.string("uploader_email") {
        Some(value) if is_email(value) => Some(value),
        Some(_) => {
            fields.reject("invalid uploader email");
            None
        }
        None => None,
    };

    let size_bytes = match fields.integer("size_bytes") {
        Some(value) if value >= 0 => Some(value as u64),
        Some(_) => {
            fields.reject("size_bytes must be non-negative");
            None
        }
        None => None,
    };

    let errors = fields.finish();
    match (uploader_email, size_bytes) {
        (Some(uploader_email), Some(size_bytes)) if errors.is_empty() => Envelope::ok(
            "file uploaded",
            NormalizedRecord::Upload(UploadRecord::new(uploader_email, size_bytes)),
        ),
        _ => Envelope::error("validation failed", errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evgate_types::{Status, StorageClass};
    use serde_json::json;

    fn upload(value: Value) -> Envelope {
        handle(value.as_object().unwrap())
    }

    fn upload_record(envelope: Envelope) -> UploadRecord {
        match envelope.data {
            NormalizedRecord::Upload(record) => record,
            other => panic!("expected upload record, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_upload() {
        let envelope = upload(json!({ "uploader_email": "Ops@Example.com", "size_bytes": 2048 }));
        assert_eq!(envelope.status, Status::Ok);
        assert_eq!(envelope.message, "file uploaded");
        let record = upload_record(envelope);
        assert_eq!(record.uploader_email, "ops@example.com");
        assert_eq!(record.size_bytes, 2048);
        assert_eq!(record.storage_class, StorageClass::Standard);
        assert_eq!(record.status, "uploaded");
    }

    #[test]
    fn test_storage_class_boundaries() {
        let cases = [
            (1_048_575_u64, StorageClass::Standard),
            (1_048_576, StorageClass::StandardIa),
            (52_428_799, StorageClass::StandardIa),
            (52_428_800, StorageClass::Glacier),
        ];
        for (size, expected) in cases {
            let record = upload_record(upload(
                json!({ "uploader_email": "a@b.co", "size_bytes": size }),
            ));
            assert_eq!(record.storage_class, expected, "size {size}");
        }
    }

    #[test]
    fn test_zero_bytes_is_a_valid_standard_upload() {
        let record = upload_record(upload(json!({ "uploader_email": "a@b.co", "size_bytes": 0 })));
        assert_eq!(record.storage_class, StorageClass::Standard);
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let envelope = upload(json!({ "uploader_email": "a@b.co", "size_bytes": -1 }));
        assert_eq!(envelope.status, Status::Error);
        assert_eq!(envelope.errors, vec!["size_bytes must be non-negative"]);
    }

    #[test]
    fn test_fractional_size_is_a_type_violation() {
        let envelope = upload(json!({ "uploader_email": "a@b.co", "size_bytes": 10.5 }));
        assert_eq!(envelope.errors, vec!["size_bytes must be an integer"]);
    }

    #[test]
    fn test_violations_accumulate() {
        let envelope = upload(json!({ "uploader_email": "not-an-email", "size_bytes": -7 }));
        assert_eq!(
            envelope.errors,
            vec!["invalid uploader email", "size_bytes must be non-negative"]
        );
    }
}
