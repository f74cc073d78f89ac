/// Kind of user-supplied material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Document,
    VideoReference,
    Website,
}

impl ContentType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "document" => Some(ContentType::Document),
            "video-reference" => Some(ContentType::VideoReference),
            "website" => Some(ContentType::Website),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Document => "document",
            ContentType::VideoReference => "video-reference",
            ContentType::Website => "website",
        }
    }
}

/// Processing state of a custom-content row. Ingestion is synchronous, so a
/// row is written as `completed`; `processing` is only the column default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    Processing,
    Completed,
    Error,
}

impl ContentStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "processing" => Some(ContentStatus::Processing),
            "completed" => Some(ContentStatus::Completed),
            "error" => Some(ContentStatus::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Processing => "processing",
            ContentStatus::Completed => "completed",
            ContentStatus::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_roundtrips() {
        for kind in [
            ContentType::Document,
            ContentType::VideoReference,
            ContentType::Website,
        ] {
            assert_eq!(ContentType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ContentType::parse("podcast"), None);
    }

    #[test]
    fn content_status_roundtrips() {
        for status in [
            ContentStatus::Processing,
            ContentStatus::Completed,
            ContentStatus::Error,
        ] {
            assert_eq!(ContentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ContentStatus::parse("done"), None);
    }
}
