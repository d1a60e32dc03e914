use project_with_c::MODULE_NAME;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use pyo3::wrap_pymodule;

/// 모듈을 한 번만 초기화해 sys.modules에 등록한 뒤 이름으로 import한다.
pub fn import_fixture(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let modules = py.import("sys")?.getattr("modules")?;
    if !modules.contains(MODULE_NAME)? {
        let module = wrap_pymodule!(project_with_c::project_with_c)(py);
        modules.set_item(MODULE_NAME, module)?;
    }
    py.import(MODULE_NAME)
}

pub fn call_hello_world(py: Python<'_>) -> PyResult<String> {
    Ok(import_fixture(py)?
        .getattr("hello_world")?
        .call0()?
        .extract::<String>()?)
}
