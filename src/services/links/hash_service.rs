//! # Base62 해시 변환 서비스
//!
//! 순차적인 링크 ID를 짧은 Base62 문자열로 변환하는 서비스입니다.
//! 해시 테이블 없이 산술 변환만으로 양방향 매핑을 보장하므로
//! 충돌이 원천적으로 발생하지 않습니다.
//!
//! ## 변환 방식
//!
//! ```text
//! link_id  →  link_id + OFFSET  →  Base62 인코딩  →  해시
//!    0             62^5              "100000"
//!    1           62^5 + 1            "100001"
//! ```
//!
//! OFFSET(62^5)을 더하면 모든 해시가 최소 6자리가 되어
//! ID가 작은 초기 링크도 추측하기 어려운 형태를 유지합니다.

use singleton_macro::service;
use crate::errors::errors::AppError;

/// Base62 인코딩에 사용하는 문자 집합 (사전순)
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// 최소 6자리 해시를 보장하기 위한 오프셋 (62^5)
const HASH_OFFSET: u64 = 916_132_832;

/// Base62 해시 변환 서비스
///
/// 링크 ID와 단축 해시 간의 양방향 변환을 담당합니다.
/// 상태가 없는 순수 연산 서비스이며 외부 의존성이 없습니다.
#[service(name = "hash")]
pub struct HashService {
    // 외부 의존성 없음
}

impl HashService {
    /// 링크 ID를 Base62 해시로 인코딩합니다.
    ///
    /// # 인자
    ///
    /// * `link_id` - 카운터에서 발급받은 순차 링크 ID (0 이상)
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 최소 6자리의 Base62 해시
    /// * `Err(AppError::ValidationError)` - 음수 ID
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let hash_service = HashService::instance();
    /// assert_eq!(hash_service.encode(0)?, "100000");
    /// ```
    pub fn encode(&self, link_id: i64) -> Result<String, AppError> {
        if link_id < 0 {
            return Err(AppError::ValidationError(
                "링크 ID는 음수일 수 없습니다".to_string(),
            ));
        }

        let mut value = link_id as u64 + HASH_OFFSET;
        let mut encoded = Vec::new();

        while value > 0 {
            encoded.push(BASE62_ALPHABET[(value % 62) as usize]);
            value /= 62;
        }

        encoded.reverse();
        // BASE62_ALPHABET은 ASCII이므로 UTF-8 변환이 실패하지 않음
        Ok(String::from_utf8_lossy(&encoded).into_owned())
    }

    /// Base62 해시를 링크 ID로 디코딩합니다.
    ///
    /// 인코딩의 역연산입니다. 허용되지 않은 문자가 포함되거나
    /// 오프셋보다 작은 값(이 서비스가 생성할 수 없는 해시)은 거부합니다.
    ///
    /// # 인자
    ///
    /// * `hash` - 디코딩할 Base62 해시 문자열
    ///
    /// # 반환값
    ///
    /// * `Ok(i64)` - 복원된 링크 ID
    /// * `Err(AppError::ValidationError)` - 잘못된 형식의 해시
    pub fn decode(&self, hash: &str) -> Result<i64, AppError> {
        if hash.is_empty() {
            return Err(AppError::ValidationError(
                "해시가 비어 있습니다".to_string(),
            ));
        }

        let mut value: u64 = 0;
        for byte in hash.bytes() {
            let digit = BASE62_ALPHABET
                .iter()
                .position(|&c| c == byte)
                .ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "해시에 허용되지 않은 문자가 있습니다: {}",
                        hash
                    ))
                })?;

            value = value
                .checked_mul(62)
                .and_then(|v| v.checked_add(digit as u64))
                .ok_or_else(|| {
                    AppError::ValidationError(format!("해시가 너무 깁니다: {}", hash))
                })?;
        }

        if value < HASH_OFFSET {
            return Err(AppError::ValidationError(format!(
                "유효하지 않은 해시입니다: {}",
                hash
            )));
        }

        i64::try_from(value - HASH_OFFSET).map_err(|_| {
            AppError::ValidationError(format!("유효하지 않은 해시입니다: {}", hash))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> HashService {
        HashService {}
    }

    #[test]
    fn test_encode_first_id_is_six_chars() {
        let hash = service().encode(0).unwrap();
        assert_eq!(hash, "100000");
    }

    #[test]
    fn test_encode_sequential_ids() {
        let svc = service();
        assert_eq!(svc.encode(1).unwrap(), "100001");
        assert_eq!(svc.encode(61).unwrap(), "10000z");
        assert_eq!(svc.encode(62).unwrap(), "100010");
    }

    #[test]
    fn test_roundtrip() {
        let svc = service();
        for id in [0_i64, 1, 61, 62, 12345, 916_132_831, 9_999_999_999] {
            let hash = svc.encode(id).unwrap();
            assert!(hash.len() >= 6);
            assert_eq!(svc.decode(&hash).unwrap(), id);
        }
    }

    #[test]
    fn test_decode_rejects_invalid_char() {
        let result = service().decode("10000-");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_decode_rejects_empty() {
        let result = service().decode("");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_decode_rejects_below_offset() {
        // "zzzzz"(5자리)는 62^5 미만이므로 인코딩 결과로 나올 수 없음
        let result = service().decode("zzzzz");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_decode_rejects_above_i64_range() {
        // u64::MAX의 Base62 표현: 오프셋을 빼도 i64 범위를 벗어난다
        let result = service().decode("LygHa16AHYF");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_encode_rejects_negative() {
        let result = service().encode(-1);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
