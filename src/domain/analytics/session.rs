//! 세션 식별자 발급
//!
//! 세션 식별자는 원칙적으로 페이지가 탭 저장소(`biz_matrix_session_id`)에서
//! 생성/유지하여 보내옵니다. 식별자 없이 들어온 이벤트를 위해 서버 측 발급을
//! 추상화해 두고, 테스트에서는 고정 식별자를 주입합니다.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// 세션 식별자 제공자 인터페이스
pub trait SessionProvider: Send + Sync {
    /// 새 세션 식별자 발급
    fn mint(&self) -> String;
}

/// 운영용 제공자: `session_<millis>_<random>` 형식의 불투명 토큰 발급
pub struct RandomSessionProvider;

impl SessionProvider for RandomSessionProvider {
    fn mint(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let random = Uuid::new_v4().simple().to_string();
        format!("session_{}_{}", millis, &random[..9])
    }
}

/// 테스트용 고정 식별자 제공자
pub struct FixedSessionProvider(pub String);

impl SessionProvider for FixedSessionProvider {
    fn mint(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_provider_should_use_session_prefix() {
        let id = RandomSessionProvider.mint();

        assert!(id.starts_with("session_"));
        assert_eq!(id.split('_').count(), 3);
    }

    #[test]
    fn random_provider_should_mint_distinct_ids() {
        let first = RandomSessionProvider.mint();
        let second = RandomSessionProvider.mint();

        assert_ne!(first, second);
    }

    #[test]
    fn fixed_provider_should_return_injected_id() {
        let provider = FixedSessionProvider("session_0_fixed".to_string());

        assert_eq!(provider.mint(), "session_0_fixed");
        assert_eq!(provider.mint(), "session_0_fixed");
    }
}
