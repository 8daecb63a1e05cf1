//! Course Queries

use crate::application::ports::CourseFilter;
use crate::domain::collection::CourseId;

/// 获取课程详情查询
#[derive(Debug, Clone)]
pub struct GetCourse {
    pub course_id: CourseId,
}

/// 按条件列出课程查询
#[derive(Debug, Clone, Default)]
pub struct ListCourses {
    pub filter: CourseFilter,
}

/// 按名称搜索课程查询，没有结果时报错
#[derive(Debug, Clone)]
pub struct SearchCourses {
    pub course_name: String,
}
