// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 현재 실패할 수 있는 경로는 로그 필터 지시자 해석뿐이다.
// - 이 오류는 코어 내부에서 처리되며 Python 계층으로 전달되지 않는다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/logging.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
