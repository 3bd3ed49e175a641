//! 预置查询目录
//!
//! 封闭的 SQL 目录，按整数编号执行。所有语句在编译期固定，
//! 运行时只做查找和执行，不接受任何用户输入拼接。
//! 语句面向 SQLite 方言（时间列为秒级时间戳，编号 15 使用 strftime）。

/// 单条预置查询
#[derive(Debug, Clone, Copy)]
pub struct CannedQuery {
    pub id: u32,
    pub title: &'static str,
    /// 结果列名，与 SQL 的选择列一一对应
    pub columns: &'static [&'static str],
    pub sql: &'static str,
}

/// 全部预置查询，编号 1 至 15
pub const CANNED_QUERIES: &[CannedQuery] = &[
    CannedQuery {
        id: 1,
        title: "Average score across all submissions",
        columns: &["avg_score"],
        sql: "SELECT AVG(score) AS avg_score FROM submissions",
    },
    CannedQuery {
        id: 2,
        title: "Average score per course",
        columns: &["course_name", "avg_score"],
        sql: "SELECT c.course_name, AVG(s.score) AS avg_score \
              FROM submissions s \
              JOIN assignments a ON s.assignment_id = a.id \
              JOIN courses c ON a.course_id = c.id \
              GROUP BY c.course_name",
    },
    CannedQuery {
        id: 3,
        title: "Submission count per student",
        columns: &["name", "total_submit"],
        sql: "SELECT st.name, COUNT(s.id) AS total_submit \
              FROM students st \
              LEFT JOIN submissions s ON st.id = s.student_id \
              GROUP BY st.name",
    },
    CannedQuery {
        id: 4,
        title: "Assignment count per course",
        columns: &["course_name", "total_assignments"],
        sql: "SELECT c.course_name, COUNT(a.id) AS total_assignments \
              FROM courses c \
              LEFT JOIN assignments a ON c.id = a.course_id \
              GROUP BY c.course_name",
    },
    CannedQuery {
        id: 5,
        title: "Assignment with the most submissions",
        columns: &["title", "submission_count"],
        sql: "SELECT a.title, COUNT(s.id) AS submission_count \
              FROM assignments a \
              LEFT JOIN submissions s ON a.id = s.assignment_id \
              GROUP BY a.title \
              ORDER BY submission_count DESC \
              LIMIT 1",
    },
    CannedQuery {
        id: 6,
        title: "Students holding the highest score",
        columns: &["name", "score"],
        sql: "SELECT st.name, s.score \
              FROM students st \
              JOIN submissions s ON st.id = s.student_id \
              WHERE s.score = (SELECT MAX(score) FROM submissions)",
    },
    CannedQuery {
        id: 7,
        title: "Assignments without any submission",
        columns: &["title"],
        sql: "SELECT title \
              FROM assignments \
              WHERE id NOT IN (SELECT assignment_id FROM submissions)",
    },
    CannedQuery {
        id: 8,
        title: "Lecturers teaching more than one course",
        columns: &["name"],
        sql: "SELECT name \
              FROM lecturers \
              WHERE id IN (\
                  SELECT lecturer_id \
                  FROM courses \
                  GROUP BY lecturer_id \
                  HAVING COUNT(*) > 1\
              )",
    },
    CannedQuery {
        id: 9,
        title: "Students with no submission in course 1",
        columns: &["name"],
        sql: "SELECT name \
              FROM students \
              WHERE id NOT IN (\
                  SELECT s.student_id \
                  FROM submissions s \
                  JOIN assignments a ON s.assignment_id = a.id \
                  WHERE a.course_id = 1\
              )",
    },
    CannedQuery {
        id: 10,
        title: "Students scoring above the overall average",
        columns: &["name", "avg_student"],
        sql: "SELECT st.name, AVG(s.score) AS avg_student \
              FROM students st \
              JOIN submissions s ON st.id = s.student_id \
              GROUP BY st.id \
              HAVING AVG(s.score) > (SELECT AVG(score) FROM submissions)",
    },
    CannedQuery {
        id: 11,
        title: "Late submissions",
        columns: &["name", "title", "submitted_at", "due_at"],
        sql: "SELECT st.name, a.title, s.submitted_at, a.due_at \
              FROM submissions s \
              JOIN assignments a ON s.assignment_id = a.id \
              JOIN students st ON s.student_id = st.id \
              WHERE s.submitted_at > a.due_at",
    },
    CannedQuery {
        id: 12,
        title: "On-time submissions",
        columns: &["name", "title", "submitted_at"],
        sql: "SELECT st.name, a.title, s.submitted_at \
              FROM submissions s \
              JOIN assignments a ON s.assignment_id = a.id \
              JOIN students st ON s.student_id = st.id \
              WHERE s.submitted_at <= a.due_at",
    },
    CannedQuery {
        id: 13,
        title: "Courses with their lecturers",
        columns: &["course_code", "course_name", "lecturer_name"],
        sql: "SELECT c.course_code, c.course_name, l.name AS lecturer_name \
              FROM courses c \
              JOIN lecturers l ON c.lecturer_id = l.id",
    },
    CannedQuery {
        id: 14,
        title: "Full score sheet",
        columns: &["student", "course_name", "title", "score"],
        sql: "SELECT st.name AS student, c.course_name, a.title, s.score \
              FROM submissions s \
              JOIN assignments a ON s.assignment_id = a.id \
              JOIN courses c ON a.course_id = c.id \
              JOIN students st ON s.student_id = st.id",
    },
    CannedQuery {
        id: 15,
        title: "Assignments already past due",
        columns: &["title", "due_at"],
        sql: "SELECT title, due_at \
              FROM assignments \
              WHERE due_at < strftime('%s', 'now')",
    },
];

/// 按编号查找预置查询
pub fn find_canned_query(id: u32) -> Option<&'static CannedQuery> {
    CANNED_QUERIES.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_one_to_fifteen() {
        let ids: Vec<u32> = CANNED_QUERIES.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<u32>>());
    }

    #[test]
    fn every_query_declares_columns() {
        for query in CANNED_QUERIES {
            assert!(!query.columns.is_empty(), "query {} has no columns", query.id);
            assert!(!query.sql.is_empty());
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(find_canned_query(1).unwrap().columns, &["avg_score"]);
        assert!(find_canned_query(0).is_none());
        assert!(find_canned_query(999).is_none());
    }
}
