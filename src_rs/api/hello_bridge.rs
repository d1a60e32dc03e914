// 목적:
// - Python에서 호출 가능한 hello_world 함수를 제공한다.
//
// 설명:
// - 인자를 받지 않으므로 인자가 전달되면 PyO3 바인딩 계층이 TypeError로 거부한다.
// - 본문은 코어 인사 함수에 위임한다.
//
// 디자인 패턴:
// - 파사드(Facade).
//
// 참조:
// - src_rs/core/greeting.rs

use pyo3::prelude::*;

use crate::core::greeting;

/// 고정 문자열 "hello world"를 반환한다.
#[pyfunction(name = "hello_world")]
pub fn py_hello_world() -> String {
    tracing::trace!("hello_world 호출");
    greeting::hello_world()
}
