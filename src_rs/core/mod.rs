// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 인사 로직, 공통 오류 모델, 로깅 설정을 Python 바인딩과 분리한다.
//
// 참조:
// - src_rs/core/greeting.rs
// - src_rs/core/errors.rs
// - src_rs/core/logging.rs

pub mod errors;
pub mod greeting;
pub mod logging;
