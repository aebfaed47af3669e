pub mod graph;
pub mod layout;
pub mod measure;
pub mod schema;
pub mod svg;

use graph::{DiagramGraph, GraphError};
use layout::LayoutEngine;
use schema::Schema;
use svg::SvgRenderer;

/// Render a schema sketch to SVG: build the graph, place the nodes,
/// draw. One linear pass, no intermediate state survives the call.
pub fn render_schema(schema: &Schema, seed: u64) -> Result<String, GraphError> {
    let graph = DiagramGraph::from_schema(schema)?;
    let layout = LayoutEngine::with_seed(seed).layout(&graph);
    Ok(SvgRenderer::default().render(&graph, &layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_example() {
        let svg = render_schema(&Schema::example(), 42).unwrap();
        assert!(svg.contains("Enrollments"));
        assert!(svg.contains("Courses"));
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let a = render_schema(&Schema::example(), 42).unwrap();
        let b = render_schema(&Schema::example(), 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pipeline_rejects_dangling_reference() {
        let schema = Schema {
            tables: vec![schema::Table::new("Students", &[])],
            relationships: vec![schema::Relationship::new("Enrollments", "Students")],
        };
        assert!(render_schema(&schema, 42).is_err());
    }
}
