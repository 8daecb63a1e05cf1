//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Collection Context: 购物车 / 收藏夹聚合（按 CollectionKind 参数化）
//! - Catalog Context: 课程目录与分类
//! - Review Context: 课程评价

/// 以 SQLite 自增主键为值的标识类型
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod catalog;
pub mod collection;
pub mod review;
