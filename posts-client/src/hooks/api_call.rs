use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{ApiResult, describe_error};

/// Подписчик на изменения состояния.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Состояние асинхронного вызова: идёт ли запрос и чем закончился последний.
pub struct CallState {
    /// Запрос выполняется.
    pub loading: bool,
    /// Сообщение об ошибке последнего вызова.
    pub error: Option<String>,
    /// Последняя ошибка была сетевой.
    pub is_network_error: bool,
}

#[derive(Default)]
struct Inner {
    state: CallState,
    generation: u64,
}

/// Учёт `loading`/`error` вокруг произвольной асинхронной операции.
///
/// Состояние меняет только самый свежий вызов: если до завершения вызова
/// начался новый, результат старого возвращается вызывающему, но на
/// состояние не влияет.
#[derive(Clone, Default)]
pub struct ApiCall {
    inner: Arc<Mutex<Inner>>,
    listener: Option<Listener<CallState>>,
}

impl fmt::Debug for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCall")
            .field("state", &self.state())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl ApiCall {
    /// Создаёт учёт без подписчика.
    pub fn new() -> Self {
        Self::default()
    }

    /// Создаёт учёт, который сообщает подписчику о каждом переходе.
    pub fn with_listener(listener: impl Fn(&CallState) + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::default(),
            listener: Some(Arc::new(listener)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, state: &CallState) {
        if let Some(listener) = &self.listener {
            listener(state);
        }
    }

    /// Текущее состояние.
    pub fn state(&self) -> CallState {
        self.lock().state.clone()
    }

    /// Идёт ли сейчас запрос.
    pub fn is_loading(&self) -> bool {
        self.lock().state.loading
    }

    /// Выполняет операцию, отмечая начало и завершение.
    ///
    /// Ошибка записывается в состояние в виде сообщения для пользователя и
    /// возвращается вызывающему без изменений.
    pub async fn execute<T, F>(&self, operation: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        let (generation, started) = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.state = CallState {
                loading: true,
                error: None,
                is_network_error: false,
            };
            (inner.generation, inner.state.clone())
        };
        self.notify(&started);

        let result = operation.await;

        let settled = {
            let mut inner = self.lock();
            if inner.generation != generation {
                debug!(generation, latest = inner.generation, "ignoring superseded call result");
                return result;
            }
            inner.state.loading = false;
            if let Err(err) = &result {
                let report = describe_error(err);
                inner.state.error = Some(report.message);
                inner.state.is_network_error = report.is_network_error;
            }
            inner.state.clone()
        };
        self.notify(&settled);

        result
    }

    /// Сбрасывает ошибку, не трогая `loading`.
    pub fn clear_error(&self) {
        let state = {
            let mut inner = self.lock();
            inner.state.error = None;
            inner.state.is_network_error = false;
            inner.state.clone()
        };
        self.notify(&state);
    }
}
