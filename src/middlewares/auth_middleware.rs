//! Bearer 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 외부 인증 제공자에 검증하고
//! 연결된 사용자 프로필을 Request Extensions에 저장합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// Bearer 토큰 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    ///
    /// 토큰이 없거나 유효하지 않으면 401로 요청을 차단합니다.
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    ///
    /// 토큰이 유효하면 사용자 정보를 주입하고, 없어도 요청을 통과시킵니다.
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_mode_selection() {
        let required = AuthMiddleware::required();
        assert_eq!(required.mode, AuthMode::Required);

        let optional = AuthMiddleware::optional();
        assert_eq!(optional.mode, AuthMode::Optional);
    }
}
