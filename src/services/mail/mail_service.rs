//! # 메일 발송 서비스
//!
//! 외부 메일 발송 API를 통한 트랜잭션 메일 발송을 담당합니다.
//! 현재는 비밀번호 재설정 메일만 발송하며, HTML 템플릿에
//! 수신자 이름과 재설정 링크를 치환하여 전송합니다.

use serde_json::json;
use singleton_macro::service;

use crate::{config::mail_config::MailConfig, errors::errors::AppError};

/// 비밀번호 재설정 메일 HTML 템플릿
///
/// `{{name}}`과 `{{reset_link}}` 플레이스홀더가 발송 시 치환됩니다.
const PASSWORD_RESET_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="margin:0; padding:0; background-color:#f4f5f7; font-family:'Apple SD Gothic Neo', 'Noto Sans KR', sans-serif;">
  <table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="background-color:#f4f5f7; padding:40px 0;">
    <tr>
      <td align="center">
        <table role="presentation" width="480" cellpadding="0" cellspacing="0" style="background-color:#ffffff; border-radius:12px; padding:40px;">
          <tr>
            <td align="center" style="padding-bottom:24px;">
              <h1 style="margin:0; font-size:22px; color:#1a1a2e;">모이다</h1>
            </td>
          </tr>
          <tr>
            <td style="font-size:15px; color:#333333; line-height:1.7;">
              <p style="margin:0 0 16px;">안녕하세요, {{name}}님.</p>
              <p style="margin:0 0 16px;">비밀번호 재설정 요청을 받았습니다. 아래 버튼을 눌러 새 비밀번호를 설정해주세요.</p>
            </td>
          </tr>
          <tr>
            <td align="center" style="padding:24px 0;">
              <a href="{{reset_link}}" style="display:inline-block; background-color:#4f46e5; color:#ffffff; text-decoration:none; padding:14px 36px; border-radius:8px; font-size:15px; font-weight:bold;">비밀번호 재설정</a>
            </td>
          </tr>
          <tr>
            <td style="font-size:13px; color:#888888; line-height:1.6;">
              <p style="margin:0 0 8px;">이 링크는 1시간 동안만 유효합니다.</p>
              <p style="margin:0;">본인이 요청하지 않았다면 이 메일을 무시하셔도 됩니다. 계정은 안전하게 보호되고 있습니다.</p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>"#;

/// 외부 메일 API 클라이언트
#[service(name = "mail")]
pub struct MailService {}

impl MailService {
    /// 비밀번호 재설정 메일 발송
    ///
    /// # 인자
    ///
    /// * `to` - 수신자 이메일 주소
    /// * `name` - 수신자 표시 이름 (템플릿 인사말에 사용)
    /// * `reset_link` - 인증 제공자가 발급한 재설정 링크
    pub async fn send_password_reset(
        &self,
        to: &str,
        name: &str,
        reset_link: &str,
    ) -> Result<(), AppError> {
        let html = Self::render_password_reset(name, reset_link);

        self.send(to, "비밀번호 재설정 안내", &html).await
    }

    fn render_password_reset(name: &str, reset_link: &str) -> String {
        PASSWORD_RESET_TEMPLATE
            .replace("{{name}}", name)
            .replace("{{reset_link}}", reset_link)
    }

    /// HTML 메일 발송
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        let client = reqwest::Client::new();

        let payload = json!({
            "from": {
                "email": MailConfig::sender_address(),
                "name": MailConfig::sender_name(),
            },
            "to": [{ "email": to }],
            "subject": subject,
            "html": html,
        });

        let response = client
            .post(MailConfig::api_uri())
            .bearer_auth(MailConfig::api_key())
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 발송 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "메일 발송 실패: {}",
                error_text
            )));
        }

        log::info!("📧 메일 발송 완료: {} ({})", to, subject);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_placeholders() {
        let html = MailService::render_password_reset("홍길동", "https://example.com/reset?oob=abc");

        assert!(html.contains("홍길동님"));
        assert!(html.contains("https://example.com/reset?oob=abc"));
        assert!(!html.contains("{{name}}"));
        assert!(!html.contains("{{reset_link}}"));
    }
}
