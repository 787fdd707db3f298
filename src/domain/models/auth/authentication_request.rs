//! 인증 요구 수준 모델
//!
//! 미들웨어가 라우트별로 어떤 수준의 인증을 요구할지 표현합니다.

/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 인증 필수 - 토큰이 없거나 유효하지 않으면 401 반환
    Required,
    /// 인증 선택 - 토큰이 유효하면 사용자 정보를 추가하고, 없어도 통과
    Optional,
}

impl AuthMode {
    /// 인증 실패 시 요청을 거부해야 하는지 여부
    pub fn rejects_on_failure(&self) -> bool {
        matches!(self, AuthMode::Required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_mode_rejection() {
        assert!(AuthMode::Required.rejects_on_failure());
        assert!(!AuthMode::Optional.rejects_on_failure());
    }
}
