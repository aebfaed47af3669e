use crate::graph::DiagramGraph;
use crate::layout::{Layout, LayoutNode};
use crate::measure::TextMetrics;
use std::fmt::Write;

const TITLE: &str = "Entity-Relationship Diagram";

pub struct SvgRenderer {
    metrics: TextMetrics,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            metrics: TextMetrics::default(),
        }
    }
}

impl SvgRenderer {
    pub fn render(&self, graph: &DiagramGraph, layout: &Layout) -> String {
        let mut svg = String::new();

        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            layout.width, layout.height, layout.width, layout.height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r##"<style>
  .title {{ font-family: monospace; font-size: 20px; font-weight: bold; }}
  .node {{ fill: #9ecae8; stroke: #000; stroke-width: 1.5; }}
  .node-label {{ font-family: monospace; font-size: 12px; text-anchor: middle; }}
  .table-name {{ font-weight: bold; }}
  .edge {{ stroke: #555; stroke-width: 1.5; }}
</style>
<defs>
  <marker id="arrow" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="8" markerHeight="8" orient="auto-start-reverse">
    <path d="M 0 0 L 10 5 L 0 10 z" fill="#555" />
  </marker>
</defs>"##
        )
        .unwrap();

        writeln!(
            &mut svg,
            r#"<text class="title" x="{}" y="30" text-anchor="middle">{}</text>"#,
            layout.width / 2.0,
            TITLE
        )
        .unwrap();

        // Edges first so circles cover the line ends.
        for edge in &graph.edges {
            let from = layout.position(&edge.from);
            let to = layout.position(&edge.to);
            if let (Some(from), Some(to)) = (from, to) {
                self.render_edge(&mut svg, from, to, layout.node_radius);
            }
        }

        for node in &layout.nodes {
            if let Some(ir_node) = graph.node(&node.id) {
                self.render_node(&mut svg, node, &ir_node.label, layout.node_radius);
            }
        }

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    fn render_node(&self, svg: &mut String, node: &LayoutNode, label: &str, radius: f64) {
        writeln!(
            svg,
            r#"<circle class="node" cx="{}" cy="{}" r="{}" />"#,
            node.x, node.y, radius
        )
        .unwrap();

        let lines: Vec<&str> = label.lines().collect();
        let line_h = self.metrics.line_height;
        // First baseline so the block of lines is vertically centered.
        let start_y = node.y - (lines.len() as f64 - 1.0) / 2.0 * line_h + line_h * 0.3;

        writeln!(svg, r#"<text class="node-label" x="{}" y="{}">"#, node.x, start_y).unwrap();
        for (i, line) in lines.iter().enumerate() {
            let class = if i == 0 { r#" class="table-name""# } else { "" };
            writeln!(
                svg,
                r#"<tspan{} x="{}" dy="{}">{}</tspan>"#,
                class,
                node.x,
                if i == 0 { 0.0 } else { line_h },
                escape_xml(line)
            )
            .unwrap();
        }
        writeln!(svg, "</text>").unwrap();
    }

    /// Directed edge clipped to the circle rims so the arrowhead sits on
    /// the target's boundary instead of under it.
    fn render_edge(&self, svg: &mut String, from: (f64, f64), to: (f64, f64), radius: f64) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= radius * 2.0 {
            // Overlapping circles, nothing visible to draw.
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        let x1 = from.0 + ux * radius;
        let y1 = from.1 + uy * radius;
        let x2 = to.0 - ux * radius;
        let y2 = to.1 - uy * radius;

        writeln!(
            svg,
            r#"<line class="edge" x1="{}" y1="{}" x2="{}" y2="{}" marker-end="url(#arrow)" />"#,
            x1, y1, x2, y2
        )
        .unwrap();
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
