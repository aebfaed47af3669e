use crate::schema::Schema;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Relationship {from} -> {to} references unknown table: {table}")]
    UnknownTable {
        from: String,
        to: String,
        table: String,
    },
    #[error("Duplicate table name: {0}")]
    DuplicateTable(String),
}

#[derive(Debug, Clone)]
pub struct DiagramGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    /// Table name followed by each column label, newline-joined.
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl DiagramGraph {
    /// One node per table, one directed edge per relationship.
    ///
    /// Relationship endpoints must name declared tables; a dangling
    /// reference is a hard error rather than a silently inserted
    /// unlabeled node.
    pub fn from_schema(schema: &Schema) -> Result<Self, GraphError> {
        let mut names: Vec<&str> = Vec::with_capacity(schema.tables.len());
        for table in &schema.tables {
            if names.contains(&table.name.as_str()) {
                return Err(GraphError::DuplicateTable(table.name.clone()));
            }
            names.push(table.name.as_str());
        }

        let nodes: Vec<Node> = schema
            .tables
            .iter()
            .map(|t| {
                let mut label = t.name.clone();
                for col in &t.columns {
                    label.push('\n');
                    label.push_str(col);
                }
                Node {
                    id: t.name.clone(),
                    label,
                }
            })
            .collect();

        let mut edges = Vec::with_capacity(schema.relationships.len());
        for rel in &schema.relationships {
            for endpoint in [&rel.from, &rel.to] {
                if !names.contains(&endpoint.as_str()) {
                    return Err(GraphError::UnknownTable {
                        from: rel.from.clone(),
                        to: rel.to.clone(),
                        table: endpoint.clone(),
                    });
                }
            }
            edges.push(Edge {
                from: rel.from.clone(),
                to: rel.to.clone(),
            });
        }

        Ok(DiagramGraph { nodes, edges })
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.from == id).count()
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.to == id).count()
    }
}
