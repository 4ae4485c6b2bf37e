//! The generic endpoint executor.
//!
//! One code path serves every catalog row: substitute path parameters,
//! append declared query parameters and credentials, encode the body
//! through the endpoint's codec, perform the HTTP call and decode the
//! response. Query values are appended as-is, without percent-encoding,
//! matching what the upstream API accepts for these parameters.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use dirtool_core::{ApiConfig, Endpoint, Method};

use crate::error::DispatchError;

pub struct Dispatcher {
    client: Client,
    config: ApiConfig,
}

impl Dispatcher {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: Client::new(), config }
    }

    /// Execute one endpoint against the configured API.
    ///
    /// On HTTP success the response is decoded through the endpoint's typed
    /// decoder and re-rendered as pretty JSON; a body that does not decode
    /// is returned verbatim. A 4xx/5xx response is an error carrying the
    /// body verbatim.
    pub async fn dispatch(
        &self,
        endpoint: &Endpoint,
        args: &Map<String, Value>,
    ) -> Result<String, DispatchError> {
        let url = self.build_url(endpoint, args)?;
        debug!(method = endpoint.method.as_str(), %url, "dispatching request");

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut request = match endpoint.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(codec) = endpoint.body {
            let body = (codec.encode)(&Value::Object(args.clone()))?;
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            request = request.body(body.to_string());
        }

        let response = request.headers(headers).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_client_error() || status.is_server_error() {
            debug!(status = status.as_u16(), "remote API error");
            return Err(DispatchError::RemoteApi { status: status.as_u16(), body: text });
        }

        Ok((endpoint.decode)(&text).unwrap_or(text))
    }

    /// Build the full request URL: path substitution, declared query
    /// parameters in order, then credentials.
    fn build_url(
        &self,
        endpoint: &Endpoint,
        args: &Map<String, Value>,
    ) -> Result<String, DispatchError> {
        let mut path = endpoint.path.to_string();
        for param in endpoint.path_params {
            let value = args
                .get(param.name)
                .ok_or_else(|| DispatchError::MissingParameter(param.name.to_string()))?;
            let text = value
                .as_str()
                .ok_or_else(|| DispatchError::InvalidParameterType(param.name.to_string()))?;
            path = path.replace(&format!("{{{}}}", param.name), text);
        }

        let mut pairs: Vec<String> = Vec::new();
        for param in endpoint.query_params {
            if let Some(value) = args.get(param.name) {
                pairs.push(format!("{}={}", param.name, display_value(value)));
            }
        }
        // Bearer token is sent under both accepted parameter names.
        if let Some(token) = &self.config.bearer_token {
            pairs.push(format!("access_token={token}"));
        }
        if let Some(key) = &self.config.api_key {
            pairs.push(format!("key={key}"));
        }
        if let Some(token) = &self.config.bearer_token {
            pairs.push(format!("oauth_token={token}"));
        }

        let mut url = format!("{}{}", self.config.base_url, path);
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        Ok(url)
    }
}

/// Render a JSON value the way it appears in a query string: scalars
/// unquoted, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn endpoint(name: &str) -> &'static Endpoint {
        dirtool_catalog::catalog().get(name).unwrap()
    }

    #[test]
    fn test_build_url_substitutes_path_params() {
        let dispatcher = Dispatcher::new(ApiConfig::default());
        let url = dispatcher
            .build_url(
                endpoint("get_admin_directory_v1_users_userKey"),
                &args(json!({"userKey": "ada@example.com"})),
            )
            .unwrap();
        assert_eq!(url, "https://admin.googleapis.com/admin/directory/v1/users/ada@example.com");
    }

    #[test]
    fn test_build_url_missing_path_param() {
        let dispatcher = Dispatcher::new(ApiConfig::default());
        let err = dispatcher
            .build_url(endpoint("get_admin_directory_v1_users_userKey"), &args(json!({})))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required path parameter: userKey");
    }

    #[test]
    fn test_build_url_non_string_path_param() {
        let dispatcher = Dispatcher::new(ApiConfig::default());
        let err = dispatcher
            .build_url(
                endpoint("get_admin_directory_v1_users_userKey"),
                &args(json!({"userKey": 42})),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid path parameter: userKey");
    }

    #[test]
    fn test_build_url_query_params_in_declaration_order() {
        let dispatcher = Dispatcher::new(ApiConfig::default());
        let url = dispatcher
            .build_url(
                endpoint("get_admin_directory_v1_users"),
                &args(json!({"maxResults": 10, "customer": "my_customer", "query": "orgName:Eng"})),
            )
            .unwrap();
        // customer is declared before maxResults, which is declared before
        // query; values are not percent-encoded
        assert_eq!(
            url,
            "https://admin.googleapis.com/admin/directory/v1/users\
             ?customer=my_customer&maxResults=10&query=orgName:Eng"
        );
    }

    #[test]
    fn test_build_url_ignores_undeclared_args() {
        let dispatcher = Dispatcher::new(ApiConfig::default());
        let url = dispatcher
            .build_url(
                endpoint("get_admin_directory_v1_users"),
                &args(json!({"primaryEmail": "ada@example.com"})),
            )
            .unwrap();
        assert_eq!(url, "https://admin.googleapis.com/admin/directory/v1/users");
    }

    #[test]
    fn test_build_url_appends_credentials_after_params() {
        let config = ApiConfig::new(
            "https://admin.googleapis.com",
            Some("tok".to_string()),
            Some("apikey".to_string()),
        );
        let dispatcher = Dispatcher::new(config);
        let url = dispatcher
            .build_url(endpoint("get_admin_directory_v1_users"), &args(json!({"domain": "x.test"})))
            .unwrap();
        assert_eq!(
            url,
            "https://admin.googleapis.com/admin/directory/v1/users\
             ?domain=x.test&access_token=tok&key=apikey&oauth_token=tok"
        );
    }

    #[test]
    fn test_display_value_scalars() {
        assert_eq!(display_value(&json!("a b")), "a b");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(25)), "25");
        assert_eq!(display_value(&json!(1.5)), "1.5");
        assert_eq!(display_value(&json!(null)), "null");
        assert_eq!(display_value(&json!(["a", "b"])), r#"["a","b"]"#);
    }
}
