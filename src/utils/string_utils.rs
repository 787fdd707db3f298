//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use crate::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 반환값
/// * `Ok(String)` - 정리된 유효한 문자열
/// * `Err(AppError)` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  회의 제목  ", "title").unwrap(), "회의 제목");
/// assert!(validate_required_string("   ", "title").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열 정리 (trim 후 반환)
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// serde의 `#[serde(deserialize_with = "deserialize_optional_string")]` 속성과 함께 사용됩니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct UpdateUserRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     photo_url: Option<String>,
/// }
///
/// // JSON: {"photo_url": "  https://...  "} → Some("https://...")
/// // JSON: {"photo_url": ""} → None
/// // JSON: {"photo_url": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("주간 회의", "title").unwrap(), "주간 회의");
        assert_eq!(validate_required_string("  Standup  ", "title").unwrap(), "Standup");

        // 실패 케이스
        assert!(validate_required_string("", "title").is_err());
        assert!(validate_required_string("   ", "title").is_err());
        assert!(validate_required_string("\t\n", "title").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  안녕하세요  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_deserialize_optional_string() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let json = r#"{"optional_field": "  Hello World  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        // 빈 문자열 - None 반환
        let json = r#"{"optional_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 공백만 있는 문자열 - None 반환
        let json = r#"{"optional_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 한글 문자열
        let json = r#"{"optional_field": "  안녕하세요  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("안녕하세요".to_string()));
    }
}
