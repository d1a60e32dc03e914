// 목적:
// - 환경 변수 기반의 선택적 tracing 구독자 설치를 담당한다.
//
// 설명:
// - PROJECT_WITH_C_LOG가 설정된 경우에만 stderr용 fmt 구독자를 설치한다.
// - 해석할 수 없는 지시자는 기본 필터로 대체하고 경고만 남긴다. 모듈 동작은 바뀌지 않는다.
// - 호스트가 이미 전역 구독자를 설치했다면 그대로 둔다.
//
// 디자인 패턴:
// - 설정 객체(Config Object) + 기본값 대체(Fallback).
//
// 참조:
// - src_rs/lib.rs

use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::errors::{CoreError, CoreResult};

/// 로그 필터 지시자를 읽는 환경 변수 이름이다.
pub const LOG_ENV_VAR: &str = "PROJECT_WITH_C_LOG";

/// 지시자를 해석할 수 없을 때 사용하는 필터다.
pub const FALLBACK_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: Option<String>,
}

impl LogConfig {
    /// 프로세스 환경 변수에서 로그 설정을 읽는다.
    pub fn from_env() -> Self {
        Self::from_value(env::var(LOG_ENV_VAR).ok())
    }

    /// 원시 값에서 로그 설정을 만든다. 공백뿐인 값은 미설정으로 취급한다.
    pub fn from_value(value: Option<String>) -> Self {
        let filter = value
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty());
        Self { filter }
    }

    /// 필터 지시자를 EnvFilter로 해석한다.
    pub fn env_filter(&self) -> CoreResult<Option<EnvFilter>> {
        let Some(directives) = &self.filter else {
            return Ok(None);
        };

        EnvFilter::try_new(directives).map(Some).map_err(|error| {
            CoreError::InvalidConfig(format!(
                "{} 값을 해석할 수 없습니다 ({}): {}",
                LOG_ENV_VAR, directives, error
            ))
        })
    }
}

/// 설정에 필터가 있으면 전역 구독자를 설치하고, 실제로 설치했는지 반환한다.
/// 실패하지 않는다.
pub fn init_tracing(config: &LogConfig) -> bool {
    let (filter, rejected) = match config.env_filter() {
        Ok(None) => return false,
        Ok(Some(filter)) => (filter, None),
        Err(error) => (EnvFilter::new(FALLBACK_FILTER), Some(error)),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .is_ok();

    if let Some(error) = rejected {
        tracing::warn!(%error, fallback = FALLBACK_FILTER, "로그 필터 지시자를 무시합니다");
    }

    installed
}
