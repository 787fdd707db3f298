//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::{AuthMode, AuthenticatedUser};
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;
use crate::services::identity::identity_service::IdentityService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            let auth_result = authenticate_request(&req).await;

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                // 인증 성공 (Required/Optional 공통)
                (_, Ok(user)) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 Bearer 토큰을 추출하고 인증 제공자에 검증
///
/// 토큰이 유효하면 인증 제공자 UID로 내부 프로필을 조회하여
/// [`AuthenticatedUser`]를 구성합니다.
async fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string())
    })?;

    if token.is_empty() {
        return Err(AppError::AuthenticationError("빈 토큰입니다".to_string()));
    }

    // 외부 인증 제공자에 토큰 검증
    let identity = IdentityService::instance();
    let info = identity.verify_id_token(token).await?;

    // 인증 제공자 UID로 내부 프로필 연결
    let user_repo = UserRepository::instance();
    let user = user_repo
        .find_by_provider_uid(&info.local_id)
        .await?
        .ok_or_else(|| {
            AppError::AuthenticationError("연결된 사용자 프로필이 없습니다".to_string())
        })?;

    Ok(AuthenticatedUser::new(
        user.id_string().unwrap_or_default(),
        info.local_id,
        user.email,
    ))
}
