//! IdGenerator port - ID 生成の抽象化
//!
//! Add の際に新しい TaskId を払い出します。テスト容易性のために、
//! trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（本番用）
//! - **SequentialIdGenerator**: カウンタ + namespace（テスト・決定的な出力用）

use std::sync::atomic::{AtomicU64, Ordering};

use ulid::Ulid;

use crate::domain::TaskId;
use crate::ports::Clock;

/// IdGenerator は衝突しない TaskId を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（`&self` で生成できる）
pub trait IdGenerator: Send + Sync {
    fn generate_task_id(&self) -> TaskId;
}

/// UlidGenerator は `todo-<ULID>` を生成
///
/// Clock を使って現在時刻ベースの ULID を生成します。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TaskId::from_ulid(ulid)
    }
}

/// SequentialIdGenerator は `{namespace}1`, `{namespace}2`, ... を生成
pub struct SequentialIdGenerator {
    namespace: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("todo-seq-")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_task_id(&self) -> TaskId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        TaskId::new(format!("{}{}", self.namespace, n))
    }
}
