//! 对象缓存
//!
//! 认证中间件用它缓存 token 对应的用户，值以 JSON 字符串保存。

pub mod object_cache;

use std::sync::Arc;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 按配置创建对象缓存
pub fn create_object_cache() -> Arc<dyn ObjectCache> {
    Arc::new(object_cache::moka::MokaCacheWrapper::new())
}
