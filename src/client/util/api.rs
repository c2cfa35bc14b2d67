//! HTTP calls against the storefront API.
//!
//! Requests go through `reqwasm` when built for the web. Other renderers get a client whose
//! calls fail with [`ClientError::Unsupported`].

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{config::Config, error::ClientError},
    model::{
        order::{OrderDto, OrderRequest},
        product::{CategoryDto, ProductDto, ALL_CATEGORY},
        user::UserDto,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base.clone())
    }

    /// Joins an API path onto the configured base
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Address of the sign-in flow, navigated to as a full page load
    pub fn login_url(&self) -> String {
        self.url("auth/login")
    }

    /// Path listing products, optionally narrowed to a category
    pub fn products_path(category: Option<&str>) -> String {
        match category {
            Some(name) if name != ALL_CATEGORY => {
                format!("products?category={}", urlencoding::encode(name))
            }
            _ => "products".to_string(),
        }
    }

    /// Retrieves the signed-in user, `None` when the session is anonymous
    pub async fn get_session_user(&self) -> Result<Option<UserDto>, ClientError> {
        match transport::get_json::<UserDto>(&self.url("auth/user")).await {
            Ok(user) => Ok(Some(user)),
            Err(ClientError::Status {
                status: 401 | 404, ..
            }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn list_products(&self, category: Option<&str>) -> Result<Vec<ProductDto>, ClientError> {
        transport::get_json(&self.url(&Self::products_path(category))).await
    }

    pub async fn get_product(&self, id: i64) -> Result<ProductDto, ClientError> {
        transport::get_json(&self.url(&format!("products/{}", id))).await
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryDto>, ClientError> {
        transport::get_json(&self.url("categories")).await
    }

    pub async fn place_order(&self, order: &OrderRequest) -> Result<OrderDto, ClientError> {
        transport::post_json(&self.url("orders"), order).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ClientError> {
        transport::delete(&self.url(&format!("products/{}", id))).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        transport::post_empty(&self.url("auth/logout")).await
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ClientError> {
    serde_json::to_string(body).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(feature = "web")]
mod transport {
    use reqwasm::http::{Request, RequestCredentials, Response};

    use super::*;
    use crate::model::api::ErrorDto;

    pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ClientError> {
        let response = send(Request::get(url)).await?;
        parse(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .body(encode_body(body)?);

        let response = send(request).await?;
        parse(response).await
    }

    pub async fn post_empty(url: &str) -> Result<(), ClientError> {
        send(Request::post(url)).await?;
        Ok(())
    }

    pub async fn delete(url: &str) -> Result<(), ClientError> {
        send(Request::delete(url)).await?;
        Ok(())
    }

    /// Sends the request with credentials, turning any non-2xx status into an error
    async fn send(request: Request) -> Result<Response, ClientError> {
        let response = request
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        if (200..300).contains(&response.status()) {
            return Ok(response);
        }

        let status = response.status();
        let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
            error_dto.error
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };

        Err(ClientError::Status { status, message })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[cfg(not(feature = "web"))]
mod transport {
    use super::*;

    pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, ClientError> {
        Err(ClientError::Unsupported)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        _url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        encode_body(body)?;
        Err(ClientError::Unsupported)
    }

    pub async fn post_empty(_url: &str) -> Result<(), ClientError> {
        Err(ClientError::Unsupported)
    }

    pub async fn delete(_url: &str) -> Result<(), ClientError> {
        Err(ClientError::Unsupported)
    }
}
