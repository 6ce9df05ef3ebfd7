//! Save form extraction.
//!
//! The `body` field is read from the posted form first and from the query
//! string second:
//!
//! - `application/x-www-form-urlencoded` bodies are parsed; a body that can't
//!   be read rejects the request.
//! - `multipart/form-data` bodies are scanned for a `body` part; malformed
//!   multipart input counts as an empty form.
//! - Any other or missing content type counts as an empty form.
//!
//! When a field repeats, its first value wins.

use axum::Form;
use axum::extract::{FromRequest, Multipart, Query, Request};
use axum::http::{HeaderMap, header};

use crate::error::ServerError;

/// Name of the form field holding the page body.
const BODY_FIELD: &str = "body";

/// Raw key/value pairs in submission order.
type Fields = Vec<(String, String)>;

/// Page body submitted to POST /save/{title}; empty when no value was sent.
#[derive(Debug)]
pub(crate) struct SaveBody(pub(crate) String);

/// How the request body is encoded.
#[derive(Debug, PartialEq, Eq)]
enum FormEncoding {
    UrlEncoded,
    Multipart,
    None,
}

fn form_encoding(headers: &HeaderMap) -> FormEncoding {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return FormEncoding::None;
    };

    let mime = content_type.split(';').next().unwrap_or_default().trim();

    match mime {
        "application/x-www-form-urlencoded" => FormEncoding::UrlEncoded,
        "multipart/form-data" => FormEncoding::Multipart,
        _ => FormEncoding::None,
    }
}

/// First value of the `body` field.
fn body_field(fields: Fields) -> Option<String> {
    fields
        .into_iter()
        .find(|(name, _)| name == BODY_FIELD)
        .map(|(_, value)| value)
}

/// First `body` part of a multipart form.
async fn multipart_body(mut multipart: Multipart) -> Option<String> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(BODY_FIELD) => {
                return field
                    .text()
                    .await
                    .inspect_err(|err| tracing::debug!(error = %err, "Unreadable multipart body"))
                    .ok();
            }
            Ok(Some(_)) => {}
            Ok(None) => return None,
            Err(err) => {
                tracing::debug!(error = %err, "Malformed multipart form, treating as empty");
                return None;
            }
        }
    }
}

impl<S> FromRequest<S> for SaveBody
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query_body = Query::<Fields>::try_from_uri(req.uri())
            .ok()
            .and_then(|Query(fields)| body_field(fields));

        let encoding = form_encoding(req.headers());
        let posted_body = match encoding {
            FormEncoding::UrlEncoded => {
                let Form(fields) = Form::<Fields>::from_request(req, state).await?;
                body_field(fields)
            }
            FormEncoding::Multipart => match Multipart::from_request(req, state).await {
                Ok(multipart) => multipart_body(multipart).await,
                Err(err) => {
                    tracing::debug!(error = %err, "Rejected multipart form, treating as empty");
                    None
                }
            },
            FormEncoding::None => None,
        };

        Ok(Self(posted_body.or(query_body).unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    use super::*;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_form_encoding() {
        assert_eq!(
            form_encoding(&headers_with("application/x-www-form-urlencoded")),
            FormEncoding::UrlEncoded
        );
        assert_eq!(
            form_encoding(&headers_with("application/x-www-form-urlencoded; charset=utf-8")),
            FormEncoding::UrlEncoded
        );
        assert_eq!(
            form_encoding(&headers_with("multipart/form-data; boundary=abc")),
            FormEncoding::Multipart
        );
        assert_eq!(form_encoding(&headers_with("text/plain")), FormEncoding::None);
        assert_eq!(form_encoding(&HeaderMap::new()), FormEncoding::None);
    }

    #[test]
    fn test_body_field_first_value_wins() {
        let fields = vec![
            ("other".to_owned(), "x".to_owned()),
            ("body".to_owned(), "first".to_owned()),
            ("body".to_owned(), "second".to_owned()),
        ];

        assert_eq!(body_field(fields), Some("first".to_owned()));
    }

    #[test]
    fn test_body_field_missing() {
        assert_eq!(body_field(vec![("other".to_owned(), "x".to_owned())]), None);
    }
}
