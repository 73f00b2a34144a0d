//! 애플리케이션 셸 상태 머신
//!
//! 단일 페이지의 입력/로딩/결과/에러 상태 전이를 정의하는 표준 모델입니다.
//! 페이지에 내장된 스크립트는 이 모듈과 동일한 전이 규칙을 따릅니다.
//!
//! 회전(placeholder 순환)은 포커스/로딩/결과 동안 멈추고 조건이 풀리면
//! 재개되지만, 사용자가 한 번이라도 입력하거나 지우기를 누르면
//! `interacted` 래치가 걸려 세션이 끝날 때까지 재개되지 않습니다.

use crate::domain::analysis::dto::AnalysisResult;
use crate::error::GENERATION_ERROR_MESSAGE;

/// 데모 문구 목록 (순환 순서 고정)
pub const EXAMPLES: [&str; 8] = [
    "1인창업가 카페운영 구독모델",
    "프리랜서 디자이너 뉴스레터 유료회원",
    "직장인 사이드프로젝트 노션템플릿 판매",
    "자영업자 리뷰관리 자동화 SaaS",
    "콘텐츠 크리에이터 숏폼 제작 대행",
    "스마트스토어 셀러 해외구매대행 자동화",
    "강사 커뮤니티 빌딩 멤버십",
    "스타트업 마케팅 툴 사용료 기반",
];

/// 회전 주기 (밀리초)
pub const ROTATION_INTERVAL_MS: u64 = 4500;

#[derive(Debug, Clone, Default)]
pub struct ShellState {
    field: String,
    focused: bool,
    interacted: bool,
    loading: bool,
    result: Option<AnalysisResult>,
    error: Option<&'static str>,
    last_analyzed: String,
    shuffle_index: usize,
}

impl ShellState {
    /// 첫 데모 문구가 채워진 초기 상태
    pub fn new() -> Self {
        Self {
            field: EXAMPLES[0].to_string(),
            ..Self::default()
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn last_analyzed(&self) -> &str {
        &self.last_analyzed
    }

    /// 회전 동작 조건: 상호작용 래치/포커스/로딩/결과가 모두 없는 경우에만
    pub fn rotation_active(&self) -> bool {
        !self.interacted && !self.focused && !self.loading && self.result.is_none()
    }

    /// 타이머 틱: 회전 중이면 다음 데모 문구로 순환
    pub fn tick(&mut self) {
        if !self.rotation_active() {
            return;
        }
        self.shuffle_index = (self.shuffle_index + 1) % EXAMPLES.len();
        self.field = EXAMPLES[self.shuffle_index].to_string();
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// 사용자 입력: 필드 값을 바꾸고 상호작용 래치를 건다
    pub fn input(&mut self, value: &str) {
        self.field = value.to_string();
        self.interacted = true;
    }

    /// 지우기: 필드를 비우고 상호작용 래치를 건다 (래치는 해제되지 않음)
    pub fn clear(&mut self) {
        self.field.clear();
        self.interacted = true;
    }

    /// 제출 시도
    ///
    /// 공백 입력이거나 이미 로딩 중이면 상태 변화 없이 `None`을 반환합니다.
    /// 유효한 제출이면 이전 결과/에러를 지우고 로딩 상태로 전이한 뒤
    /// 분석할 문구를 반환합니다.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.field.trim();
        if trimmed.is_empty() || self.loading {
            return None;
        }

        let phrase = trimmed.to_string();
        self.error = None;
        self.result = None;
        self.last_analyzed = phrase.clone();
        self.loading = true;
        Some(phrase)
    }

    /// 분석 성공: 결과를 저장하고 로딩 종료
    pub fn finish_success(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.loading = false;
    }

    /// 분석 실패: 고정 에러 메시지를 표시하고 로딩 종료 (결과는 비어 있음)
    pub fn finish_error(&mut self) {
        self.error = Some(GENERATION_ERROR_MESSAGE);
        self.loading = false;
    }
}
