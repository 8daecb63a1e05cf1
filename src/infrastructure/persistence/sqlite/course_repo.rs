//! SQLite Course Repository
//!
//! 同时实现 CourseRepositoryPort（课程管理）与 CatalogPort（集合聚合的只读查询）

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, QueryBuilder, Sqlite};
use std::collections::HashMap;

use super::{map_read_error, map_write_error, parse_timestamp, DbPool};
use crate::application::ports::{
    CatalogPort, CourseFilter, CourseRepositoryPort, RepositoryError,
};
use crate::domain::catalog::{CategoryId, Course, CourseLevel, CourseName, NewCourse};
use crate::domain::collection::{CourseId, Money, OwnerId};

const COURSE_COLUMNS: &str = "id, course_name, course_image, description, category_id, level, price_cents, created_by, created_at, updated_at";

/// SQLite Course Repository
pub struct SqliteCourseRepository {
    pool: DbPool,
}

impl SqliteCourseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CourseRow {
    id: i64,
    course_name: String,
    course_image: Option<String>,
    description: String,
    category_id: Option<i64>,
    level: String,
    price_cents: i64,
    created_by: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<CourseRow> for Course {
    type Error = RepositoryError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let course_name = CourseName::new(row.course_name)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let level = CourseLevel::parse(&row.level)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Course::restore(
            CourseId::new(row.id),
            course_name,
            row.course_image,
            row.description,
            row.category_id.map(CategoryId::new),
            level,
            Money::from_cents(row.price_cents),
            OwnerId::new(row.created_by),
            parse_timestamp(&row.created_at)?,
            parse_timestamp(&row.updated_at)?,
        ))
    }
}

#[async_trait]
impl CourseRepositoryPort for SqliteCourseRepository {
    async fn insert(&self, course: NewCourse) -> Result<Course, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO courses (course_name, course_image, description, category_id, level, price_cents, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(course.course_name.as_str())
        .bind(&course.course_image)
        .bind(&course.description)
        .bind(course.category_id.map(|id| id.as_i64()))
        .bind(course.level.as_str())
        .bind(course.price.cents())
        .bind(course.created_by.as_i64())
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || format!("course {}", course.course_name)))?;

        Ok(Course::from_new(
            CourseId::new(result.last_insert_rowid()),
            course,
            now,
        ))
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError> {
        let row: Option<CourseRow> =
            sqlx::query_as(&format!("SELECT {} FROM courses WHERE id = ?", COURSE_COLUMNS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_read_error)?;

        row.map(Course::try_from).transpose()
    }

    async fn search(&self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM courses WHERE 1 = 1", COURSE_COLUMNS));

        if let Some(min_price) = filter.min_price {
            builder.push(" AND price_cents >= ").push_bind(min_price.cents());
        }
        if let Some(max_price) = filter.max_price {
            builder.push(" AND price_cents <= ").push_bind(max_price.cents());
        }
        if let Some(level) = filter.level {
            builder.push(" AND level = ").push_bind(level.as_str());
        }
        if let Some(category_id) = filter.category_id {
            builder
                .push(" AND category_id = ")
                .push_bind(category_id.as_i64());
        }
        if let Some(name) = filter.name.as_deref() {
            builder
                .push(" AND instr(lower(course_name), lower(")
                .push_bind(name.to_string())
                .push(")) > 0");
        }
        builder.push(format!(
            " ORDER BY price_cents {}, id ASC",
            filter.order.as_sql()
        ));

        let rows: Vec<CourseRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn update(&self, course: &Course) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE courses SET
                course_name = ?,
                course_image = ?,
                description = ?,
                category_id = ?,
                level = ?,
                price_cents = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(course.course_name().as_str())
        .bind(course.course_image())
        .bind(course.description())
        .bind(course.category_id().map(|id| id.as_i64()))
        .bind(course.level().as_str())
        .bind(course.price().cents())
        .bind(course.updated_at().to_rfc3339())
        .bind(course.id().as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || format!("course {}", course.id())))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("course {}", course.id())));
        }
        Ok(())
    }

    async fn delete(&self, id: CourseId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CatalogPort for SqliteCourseRepository {
    async fn exists(&self, course_id: CourseId) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE id = ?")
            .bind(course_id.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(count > 0)
    }

    async fn price_of(&self, course_id: CourseId) -> Result<Option<Money>, RepositoryError> {
        let price: Option<i64> = sqlx::query_scalar("SELECT price_cents FROM courses WHERE id = ?")
            .bind(course_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(price.map(Money::from_cents))
    }

    async fn prices_of(
        &self,
        course_ids: &[CourseId],
    ) -> Result<HashMap<CourseId, Money>, RepositoryError> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // 单次查询代替逐个 price_of
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, price_cents FROM courses WHERE id IN (");
        let mut separated = builder.separated(", ");
        for course_id in course_ids {
            separated.push_bind(course_id.as_i64());
        }
        separated.push_unseparated(")");

        let rows: Vec<(i64, i64)> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, cents)| (CourseId::new(id), Money::from_cents(cents)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PriceOrder;
    use crate::domain::catalog::CourseUpdate;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteCourseRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteCourseRepository::new(pool)
    }

    fn new_course(name: &str, price: &str, level: CourseLevel) -> NewCourse {
        NewCourse {
            course_name: CourseName::new(name).unwrap(),
            course_image: None,
            description: format!("{} description", name),
            category_id: None,
            level,
            price: Money::parse(price).unwrap(),
            created_by: OwnerId::new(1),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = repo().await;
        let created = repo
            .insert(new_course("Rust Basics", "49.99", CourseLevel::Beginner))
            .await
            .unwrap();

        let found = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(found.course_name().as_str(), "Rust Basics");
        assert_eq!(found.price(), Money::from_cents(4999));
        assert!(repo.find_by_id(CourseId::new(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_filters_and_order() {
        let repo = repo().await;
        repo.insert(new_course("Rust Basics", "49.99", CourseLevel::Beginner))
            .await
            .unwrap();
        repo.insert(new_course("Advanced Rust", "120", CourseLevel::Advanced))
            .await
            .unwrap();
        repo.insert(new_course("Go Basics", "19.50", CourseLevel::Beginner))
            .await
            .unwrap();

        let all = repo.search(&CourseFilter::default()).await.unwrap();
        let prices: Vec<i64> = all.iter().map(|c| c.price().cents()).collect();
        assert_eq!(prices, vec![1950, 4999, 12000]);

        let rust_desc = repo
            .search(&CourseFilter {
                name: Some("rust".to_string()),
                order: PriceOrder::Desc,
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<&str> = rust_desc.iter().map(|c| c.course_name().as_str()).collect();
        assert_eq!(names, vec!["Advanced Rust", "Rust Basics"]);

        let cheap_beginner = repo
            .search(&CourseFilter {
                max_price: Some(Money::parse("20").unwrap()),
                level: Some(CourseLevel::Beginner),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(cheap_beginner.len(), 1);
        assert_eq!(cheap_beginner[0].course_name().as_str(), "Go Basics");

        let mid_range = repo
            .search(&CourseFilter {
                min_price: Some(Money::parse("20").unwrap()),
                max_price: Some(Money::parse("100").unwrap()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(mid_range.len(), 1);
    }

    #[tokio::test]
    async fn test_search_by_category() {
        let repo = repo().await;
        sqlx::query("INSERT INTO categories (category_name) VALUES ('编程'), ('设计')")
            .execute(&repo.pool)
            .await
            .unwrap();

        let mut rust = new_course("Rust Basics", "49.99", CourseLevel::Beginner);
        rust.category_id = Some(CategoryId::new(1));
        repo.insert(rust).await.unwrap();
        let mut figma = new_course("Figma", "30", CourseLevel::Beginner);
        figma.category_id = Some(CategoryId::new(2));
        repo.insert(figma).await.unwrap();
        repo.insert(new_course("Go Basics", "19.50", CourseLevel::Beginner))
            .await
            .unwrap();

        let programming = repo
            .search(&CourseFilter {
                category_id: Some(CategoryId::new(1)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(programming.len(), 1);
        assert_eq!(programming[0].category_id(), Some(CategoryId::new(1)));

        // 不存在的分类被外键拒绝
        let mut orphan = new_course("Orphan", "1", CourseLevel::Beginner);
        orphan.category_id = Some(CategoryId::new(404));
        let err = repo.insert(orphan).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_persists_changes() {
        let repo = repo().await;
        let mut course = repo
            .insert(new_course("Rust Basics", "49.99", CourseLevel::Beginner))
            .await
            .unwrap();

        course
            .apply(CourseUpdate {
                level: Some(CourseLevel::Intermediate),
                ..Default::default()
            })
            .unwrap();
        repo.update(&course).await.unwrap();

        let found = repo.find_by_id(course.id()).await.unwrap().unwrap();
        assert_eq!(found.level(), CourseLevel::Intermediate);
        assert_eq!(found.price(), Money::from_cents(4999));
    }

    #[tokio::test]
    async fn test_catalog_lookups() {
        let repo = repo().await;
        let a = repo
            .insert(new_course("A", "10", CourseLevel::Beginner))
            .await
            .unwrap();
        let b = repo
            .insert(new_course("B", "2.50", CourseLevel::Beginner))
            .await
            .unwrap();

        assert!(repo.exists(a.id()).await.unwrap());
        assert!(!repo.exists(CourseId::new(404)).await.unwrap());
        assert_eq!(
            repo.price_of(b.id()).await.unwrap(),
            Some(Money::from_cents(250))
        );

        let prices = repo
            .prices_of(&[a.id(), b.id(), CourseId::new(404)])
            .await
            .unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[&a.id()], Money::from_cents(1000));

        assert!(repo.delete(a.id()).await.unwrap());
        assert!(!repo.delete(a.id()).await.unwrap());
        assert!(!repo.exists(a.id()).await.unwrap());
    }
}
