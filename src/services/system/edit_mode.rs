use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;
use tracing::info;

use crate::models::ApiResponse;

const EDIT_MODE_COOKIE: &str = "edit_mode";

#[derive(Debug, Serialize)]
pub struct EditModeState {
    pub edit_mode: bool,
}

/// 当前请求是否处于编辑模式
pub fn edit_mode_enabled(request: &HttpRequest) -> bool {
    request
        .cookie(EDIT_MODE_COOKIE)
        .map(|cookie| cookie.value() == "1")
        .unwrap_or(false)
}

/// 翻转编辑模式，状态保存在客户端 Cookie 中
///
/// 每个客户端独立，互不影响，服务端不保留任何开关状态。
pub async fn toggle_edit_mode(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let enabled = !edit_mode_enabled(request);
    info!("Edit mode toggled to {}", enabled);

    let cookie = Cookie::build(EDIT_MODE_COOKIE, if enabled { "1" } else { "0" })
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    let mut response = ApiResponse::success(EditModeState { edit_mode: enabled }).json();
    response
        .add_cookie(&cookie)
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(response)
}
