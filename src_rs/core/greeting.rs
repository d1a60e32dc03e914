// 목적:
// - 확장 모듈이 반환하는 고정 인사 문자열을 제공한다.
//
// 설명:
// - Python 인터프리터 없이도 검증할 수 있도록 순수 Rust 함수로 분리한다.
// - 호출마다 독립된 String을 새로 할당하며 공유 상태를 갖지 않는다.
//
// 참조:
// - src_rs/api/hello_bridge.rs

/// `hello_world()`가 항상 반환하는 리터럴이다.
pub const HELLO_WORLD: &str = "hello world";

/// 인사 문자열의 새 복사본을 반환한다.
pub fn hello_world() -> String {
    HELLO_WORLD.to_string()
}
