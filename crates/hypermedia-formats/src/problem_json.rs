//! Problem Details error documents
//! ([RFC 9457](https://www.rfc-editor.org/rfc/rfc9457), `application/problem+json`).

use hypermedia_framework::{ErrorMessageMapper, JsonObjectBuilder};

pub const MEDIA_TYPE: &str = "application/problem+json";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemJsonErrorMapper;

impl ErrorMessageMapper for ProblemJsonErrorMapper {
    fn media_type(&self) -> &str {
        MEDIA_TYPE
    }

    fn map_title(&self, builder: &mut JsonObjectBuilder, title: &str) {
        builder.field("title").value(title);
    }

    fn map_description(&self, builder: &mut JsonObjectBuilder, description: &str) {
        builder.field("detail").value(description);
    }

    fn map_type(&self, builder: &mut JsonObjectBuilder, error_type: &str) {
        builder.field("type").value(error_type);
    }

    fn map_status_code(&self, builder: &mut JsonObjectBuilder, status_code: u16) {
        builder.field("status").value(status_code);
    }
}
