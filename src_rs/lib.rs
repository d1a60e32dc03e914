// 목적:
// - project_with_c 확장 모듈의 진입점을 제공한다.
//
// 설명:
// - hello_world 함수와 __version__ 속성을 모듈에 등록한다.
// - PROJECT_WITH_C_LOG는 진단용 스위치일 뿐이며, 값이 잘못되어도 import는 실패하지 않는다.
// - 공유 가변 상태가 없으므로 GIL 없이 로드될 수 있음을 선언한다.
//
// 테스트:
// - cargo test                          (순수 Rust 테스트)
// - cargo test --features python-tests  (임베디드 인터프리터로 import/인자 거부/환경 변수 검증)
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core).
//
// 참조:
// - src_rs/api/hello_bridge.rs
// - src_rs/core/logging.rs

use pyo3::prelude::*;
use pyo3::types::PyModule;

pub mod api;
pub mod core;

use crate::api::hello_bridge::py_hello_world;
use crate::core::logging::{init_tracing, LogConfig};

/// 모듈 이름이다. 아래 `#[pymodule]` 함수 이름, pyproject.toml의
/// `tool.maturin.module-name`과 항상 같아야 한다.
pub const MODULE_NAME: &str = "project_with_c";

#[pymodule(gil_used = false)]
pub fn project_with_c(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let subscriber_installed = init_tracing(&LogConfig::from_env());

    m.add_function(wrap_pyfunction!(py_hello_world, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    tracing::debug!(
        module = MODULE_NAME,
        subscriber_installed,
        "확장 모듈 초기화 완료"
    );
    Ok(())
}
