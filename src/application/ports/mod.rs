//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod catalog;
mod repositories;

pub use catalog::CatalogPort;
pub use repositories::{
    CategoryRepositoryPort, CollectionRepositoryPort, CourseFilter, CourseRepositoryPort,
    PriceOrder, RepositoryError, ReviewRepositoryPort,
};
