/// Literal description of the schema to draw. Declaration order is
/// preserved everywhere downstream (node order, label lines, edge order).
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub tables: Vec<Table>,
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    /// Display labels only. A "(PK)"/"(FK)" suffix is cosmetic text,
    /// not a validated constraint.
    pub columns: Vec<String>,
}

/// Directed pair, child -> parent by convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub from: String,
    pub to: String,
}

impl Table {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Relationship {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl Schema {
    pub fn empty() -> Self {
        Self {
            tables: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// The embedded three-table sketch the tool ships with: a student
    /// enrollment schema with two foreign-key edges out of the join table.
    pub fn example() -> Self {
        Self {
            tables: vec![
                Table::new(
                    "Students",
                    &["StudentID (PK)", "FirstName", "LastName", "Email"],
                ),
                Table::new("Courses", &["CourseID (PK)", "CourseName", "Credits"]),
                Table::new(
                    "Enrollments",
                    &[
                        "EnrollmentID (PK)",
                        "StudentID (FK)",
                        "CourseID (FK)",
                        "Grade",
                    ],
                ),
            ],
            relationships: vec![
                Relationship::new("Enrollments", "Students"),
                Relationship::new("Enrollments", "Courses"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_shape() {
        let schema = Schema::example();
        assert_eq!(schema.tables.len(), 3);
        assert_eq!(schema.relationships.len(), 2);
        assert_eq!(schema.tables[0].name, "Students");
        assert_eq!(schema.relationships[0].from, "Enrollments");
        assert_eq!(schema.relationships[0].to, "Students");
    }

    #[test]
    fn test_example_column_order() {
        let schema = Schema::example();
        let enrollments = &schema.tables[2];
        assert_eq!(enrollments.columns[0], "EnrollmentID (PK)");
        assert_eq!(enrollments.columns[3], "Grade");
    }

    #[test]
    fn test_empty() {
        let schema = Schema::empty();
        assert!(schema.tables.is_empty());
        assert!(schema.relationships.is_empty());
    }
}
