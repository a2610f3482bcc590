//! HTTP API Client
//!
//! One function per backend operation. Every operation is a POST with a
//! JSON body; authenticated operations attach the stored bearer token or
//! short-circuit locally when it is absent. Responses are normalized into
//! `Result<T, ApiError>` here — the envelope shape varies per endpoint and
//! each call decodes its own.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::config;
use crate::api::error::ApiError;
use crate::auth::session;
use crate::model::Product;

/// Whether an operation requires the bearer token.
#[derive(Clone, Copy)]
enum Auth {
    Public,
    Bearer,
}

// ============ Response Types ============

/// Decoded `/api/login` success envelope.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginOutcome {
    pub access_token: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
struct MessageEnvelope {
    #[serde(default)]
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    list: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ProductEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    product: Vec<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct OutcomeEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Error envelope: most endpoints report `detail`, the product endpoints
/// report `message`.
#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ============ API Functions ============

/// Register a new account. `password_digest` is the pre-hashed credential;
/// the plaintext never reaches this function.
pub async fn create_user(
    username: &str,
    email: &str,
    password_digest: &str,
    name: &str,
) -> Result<String, ApiError> {
    #[derive(Serialize)]
    struct CreateUserRequest<'a> {
        username: &'a str,
        email: &'a str,
        password: &'a str,
        name: &'a str,
    }

    let envelope: MessageEnvelope = post_json(
        "/api/create_user",
        &CreateUserRequest {
            username,
            email,
            password: password_digest,
            name,
        },
        Auth::Public,
    )
    .await?;

    Ok(envelope.message)
}

/// Exchange credentials for a bearer token. The caller stores the token.
pub async fn login(username_or_email: &str, password_digest: &str) -> Result<LoginOutcome, ApiError> {
    #[derive(Serialize)]
    struct LoginRequest<'a> {
        username_or_email: &'a str,
        password_hash: &'a str,
    }

    post_json(
        "/api/login",
        &LoginRequest {
            username_or_email,
            password_hash: password_digest,
        },
        Auth::Public,
    )
    .await
}

/// Fetch the names of the user's lists.
pub async fn fetch_lists() -> Result<Vec<String>, ApiError> {
    let envelope: ListEnvelope =
        post_json("/api/list", &serde_json::json!({}), Auth::Bearer).await?;
    Ok(envelope.list)
}

/// Create a new named list.
pub async fn add_list(list_name: &str) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct ListNameRequest<'a> {
        list_name: &'a str,
    }

    post_for_status("/api/addlist", &ListNameRequest { list_name }, Auth::Bearer).await
}

/// Delete a list by name. The doubled path segment is what the deployed
/// backend routes.
pub async fn delete_list(list_name: &str) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct ListNameRequest<'a> {
        list_name: &'a str,
    }

    post_for_status(
        "/api/api/deletelist",
        &ListNameRequest { list_name },
        Auth::Bearer,
    )
    .await
}

/// Add a product to the named list.
pub async fn create_product(
    list_name: &str,
    product_name: &str,
    product_barcode: &str,
    expiry_date: &str,
    description: &str,
) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct CreateProductRequest<'a> {
        list_name: &'a str,
        product_name: &'a str,
        product_barcode: &'a str,
        expiry_date: &'a str,
        description: &'a str,
    }

    post_for_status(
        "/api/create_product",
        &CreateProductRequest {
            list_name,
            product_name,
            product_barcode,
            expiry_date,
            description,
        },
        Auth::Bearer,
    )
    .await
}

/// Fetch the products of the named list, decoded from positional rows.
pub async fn fetch_products(list_name: &str) -> Result<Vec<Product>, ApiError> {
    #[derive(Serialize)]
    struct ListNameRequest<'a> {
        list_name: &'a str,
    }

    let envelope: ProductEnvelope =
        post_json("/api/get_product", &ListNameRequest { list_name }, Auth::Bearer).await?;

    if !envelope.success {
        return Err(ApiError::Backend(
            envelope
                .message
                .unwrap_or_else(|| "Failed to fetch products.".to_string()),
        ));
    }

    Ok(Product::from_rows(&envelope.product))
}

/// Delete a product by id.
pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct DeleteProductRequest {
        id: i64,
    }

    let envelope: OutcomeEnvelope =
        post_json("/api/delete_product", &DeleteProductRequest { id }, Auth::Bearer).await?;

    if !envelope.success {
        return Err(ApiError::Backend(
            envelope
                .message
                .unwrap_or_else(|| "Failed to delete product.".to_string()),
        ));
    }

    Ok(())
}

// ============ Request Template ============

/// Issue one POST and run the shared status handling. Never retries, never
/// times out, never cancels the request itself.
async fn send<B: Serialize>(path: &str, body: &B, auth: Auth) -> Result<Response, ApiError> {
    let mut request = Request::post(&config::api_url(path));

    if let Auth::Bearer = auth {
        // Short-circuit locally; an unauthenticated call sends nothing.
        let token = session::token().ok_or(ApiError::NotAuthenticated)?;
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .json(body)
        .map_err(|e| network_error(path, e))?
        .send()
        .await
        .map_err(|e| network_error(path, e))?;

    if response.status() == 401 || response.status() == 403 {
        // Rejected token: revoke the session client-side so it cannot go
        // stale-but-present.
        session::clear_token();
        return Err(ApiError::AuthRejected(error_detail(&response).await));
    }

    if !response.ok() {
        return Err(ApiError::Backend(error_detail(&response).await));
    }

    Ok(response)
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    auth: Auth,
) -> Result<T, ApiError> {
    let response = send(path, body, auth).await?;
    response.json().await.map_err(|e| {
        web_sys::console::error_1(&format!("Failed to decode {} response: {}", path, e).into());
        ApiError::Decode(e.to_string())
    })
}

/// For endpoints whose success is the ok status alone; the body is ignored.
async fn post_for_status<B: Serialize>(path: &str, body: &B, auth: Auth) -> Result<(), ApiError> {
    send(path, body, auth).await.map(|_| ())
}

fn network_error(path: &str, source: gloo_net::Error) -> ApiError {
    web_sys::console::error_1(&format!("Request to {} failed: {}", path, source).into());
    ApiError::Network(source.to_string())
}

/// Parse the failure envelope, falling back to a generic status message.
async fn error_detail(response: &Response) -> String {
    let fallback = format!("Request failed with status {}", response.status());
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => envelope.detail.or(envelope.message).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_envelope_decodes_token_and_message() {
        let envelope: LoginOutcome = serde_json::from_str(
            r#"{"success": true, "message": "login successfully", "access_token": "T"}"#,
        )
        .unwrap();
        assert_eq!(envelope.access_token, "T");
        assert_eq!(envelope.message, "login successfully");
    }

    #[test]
    fn list_envelope_defaults_to_empty() {
        let envelope: ListEnvelope = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(envelope.list.is_empty());

        let envelope: ListEnvelope =
            serde_json::from_str(r#"{"list": ["pantry", "牛奶清單"]}"#).unwrap();
        assert_eq!(envelope.list, vec!["pantry", "牛奶清單"]);
    }

    #[test]
    fn product_envelope_decodes_rows() {
        let envelope: ProductEnvelope = serde_json::from_str(
            r#"{"success": true, "product": [[1, "a", null], [5, "b", "note"]]}"#,
        )
        .unwrap();
        assert!(envelope.success);
        let products = Product::from_rows(&envelope.product);
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, 5);
    }

    #[test]
    fn failure_envelopes_expose_detail_or_message() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"detail": "User not found"}"#).unwrap();
        assert_eq!(envelope.detail.as_deref(), Some("User not found"));

        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"success": false, "message": "no such list"}"#).unwrap();
        assert_eq!(envelope.message.as_deref(), Some("no such list"));
    }

    #[test]
    fn request_bodies_use_the_wire_field_names() {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username_or_email: &'a str,
            password_hash: &'a str,
        }

        let body = serde_json::to_value(LoginRequest {
            username_or_email: "alice",
            password_hash: "0b14d501a594442a01c6859541bcb3e8164d183d32937b851835442f69d5c94e",
        })
        .unwrap();

        assert_eq!(body["username_or_email"], "alice");
        assert_eq!(
            body["password_hash"],
            "0b14d501a594442a01c6859541bcb3e8164d183d32937b851835442f69d5c94e"
        );
        assert!(body.get("password").is_none());
    }

    // The registration body carries the digest under `password`; the
    // plaintext never appears anywhere in the payload.
    #[test]
    fn registration_body_carries_the_digest() {
        #[derive(Serialize)]
        struct CreateUserRequest<'a> {
            username: &'a str,
            email: &'a str,
            password: &'a str,
            name: &'a str,
        }

        let digest = crate::auth::password_digest("password1");
        let body = serde_json::to_string(&CreateUserRequest {
            username: "alice",
            email: "alice@example.com",
            password: &digest,
            name: "Alice",
        })
        .unwrap();

        assert!(body.contains("0b14d501a594442a01c6859541bcb3e8164d183d32937b851835442f69d5c94e"));
        assert!(!body.contains("password1"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // With no stored token, authenticated calls short-circuit before any
    // request is built.
    #[wasm_bindgen_test]
    async fn authenticated_calls_require_a_token() {
        session::clear_token();
        assert_eq!(fetch_lists().await, Err(ApiError::NotAuthenticated));
        assert_eq!(add_list("pantry").await, Err(ApiError::NotAuthenticated));
        assert_eq!(delete_product(1).await, Err(ApiError::NotAuthenticated));
    }
}
