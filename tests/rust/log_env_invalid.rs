// PROJECT_WITH_C_LOG를 해석할 수 없어도 import와 hello_world가 동작하는지 검증한다.

mod support;

use std::env;

use project_with_c::core::logging::LOG_ENV_VAR;
use pyo3::prelude::*;

use crate::support::call_hello_world;

#[test]
fn import_with_invalid_directive_still_succeeds() {
    env::set_var(LOG_ENV_VAR, "project_with_c=loud");

    Python::attach(|py| {
        assert_eq!(call_hello_world(py).unwrap(), "hello world");
    });
    assert!(tracing::dispatcher::has_been_set());
}
