//! 메일 발송 설정 관리 모듈
//!
//! 외부 메일 HTTP API(트랜잭션 메일 서비스) 연동에 필요한 설정을 관리합니다.
//! 비밀번호 재설정 메일 발송에 사용됩니다.

use std::env;

/// 외부 메일 API 설정
///
/// 메일 발송은 외부 HTTP API에 위임되며, 이 구조체는
/// 엔드포인트와 인증 키, 발신자 정보를 제공합니다.
pub struct MailConfig;

impl MailConfig {
    /// 메일 API 엔드포인트 URI를 반환합니다.
    ///
    /// # Panics
    ///
    /// `MAIL_API_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    ///
    /// # 환경 변수
    ///
    /// ```bash
    /// export MAIL_API_URI="https://api.mailservice.com/v3/mail/send"
    /// ```
    pub fn api_uri() -> String {
        env::var("MAIL_API_URI")
            .expect("MAIL_API_URI must be set")
    }

    /// 메일 API 인증 키를 반환합니다.
    ///
    /// Bearer 토큰으로 전달되는 민감한 정보입니다. 로그에 출력하지 마세요.
    ///
    /// # Panics
    ///
    /// `MAIL_API_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn api_key() -> String {
        env::var("MAIL_API_KEY")
            .expect("MAIL_API_KEY must be set")
    }

    /// 발신자 이메일 주소를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `no-reply@moida.app`
    pub fn sender_address() -> String {
        env::var("MAIL_SENDER_ADDRESS")
            .unwrap_or_else(|_| "no-reply@moida.app".to_string())
    }

    /// 발신자 표시 이름을 반환합니다.
    ///
    /// # 기본값
    ///
    /// `모이다`
    pub fn sender_name() -> String {
        env::var("MAIL_SENDER_NAME")
            .unwrap_or_else(|_| "모이다".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_sender_defaults() {
        if env::var("MAIL_SENDER_ADDRESS").is_err() {
            assert_eq!(MailConfig::sender_address(), "no-reply@moida.app");
        }

        if env::var("MAIL_SENDER_NAME").is_err() {
            assert_eq!(MailConfig::sender_name(), "모이다");
        }
    }
}
