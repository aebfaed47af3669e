use crate::graph::DiagramGraph;
use crate::measure::TextMetrics;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub nodes: Vec<LayoutNode>,
    /// Shared radius for every node circle.
    pub node_radius: f64,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn position(&self, id: &str) -> Option<(f64, f64)> {
        self.nodes.iter().find(|n| n.id == id).map(|n| (n.x, n.y))
    }
}

pub struct LayoutEngine {
    metrics: TextMetrics,
    pub seed: u64,
    iterations: usize,
    margin: f64,
    title_band: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            metrics: TextMetrics::default(),
            seed: 42,
            iterations: 300,
            margin: 40.0,
            title_band: 50.0,
        }
    }
}

impl LayoutEngine {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Force-directed placement in the Fruchterman-Reingold style:
    /// all node pairs repel, edge endpoints attract, displacement is
    /// capped by a linearly cooling temperature. Initial positions come
    /// from a seeded RNG, so identical input and seed reproduce the
    /// same coordinates.
    pub fn layout(&self, graph: &DiagramGraph) -> Layout {
        let radius = self
            .metrics
            .node_radius(graph.nodes.iter().map(|n| n.label.as_str()));

        let n = graph.nodes.len();
        if n == 0 {
            return Layout {
                nodes: Vec::new(),
                node_radius: radius,
                width: self.margin * 2.0 + 240.0,
                height: self.title_band + self.margin * 2.0 + 120.0,
            };
        }

        // Simulation square sized so circles have room to separate.
        let side = (n as f64).sqrt() * radius * 4.0;
        let k = (side * side / n as f64).sqrt();

        let index: HashMap<&str, usize> = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), i))
            .collect();

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut pos: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.gen_range(0.0..side), rng.gen_range(0.0..side)))
            .collect();

        for step in 0..self.iterations {
            let mut disp = vec![(0.0f64, 0.0f64); n];

            // Repulsion between every pair.
            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i].0 - pos[j].0;
                    let dy = pos[i].1 - pos[j].1;
                    let dist = (dx * dx + dy * dy).sqrt().max(0.01);
                    let force = k * k / dist;
                    let (ux, uy) = (dx / dist, dy / dist);
                    disp[i].0 += ux * force;
                    disp[i].1 += uy * force;
                    disp[j].0 -= ux * force;
                    disp[j].1 -= uy * force;
                }
            }

            // Attraction along edges. Endpoints are validated at graph
            // construction, so the index lookups cannot miss.
            for edge in &graph.edges {
                let i = index[edge.from.as_str()];
                let j = index[edge.to.as_str()];
                if i == j {
                    continue;
                }
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(0.01);
                let force = dist * dist / k;
                let (ux, uy) = (dx / dist, dy / dist);
                disp[i].0 -= ux * force;
                disp[i].1 -= uy * force;
                disp[j].0 += ux * force;
                disp[j].1 += uy * force;
            }

            let temp = side / 10.0 * (1.0 - step as f64 / self.iterations as f64);
            for i in 0..n {
                let (dx, dy) = disp[i];
                let len = (dx * dx + dy * dy).sqrt().max(0.01);
                let capped = len.min(temp);
                pos[i].0 += dx / len * capped;
                pos[i].1 += dy / len * capped;
            }
        }

        // Shift into a canvas with a margin and a band for the title.
        let min_x = pos.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let min_y = pos.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_x = pos.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let max_y = pos.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        let offset_x = self.margin + radius - min_x;
        let offset_y = self.title_band + self.margin + radius - min_y;

        let nodes = graph
            .nodes
            .iter()
            .zip(&pos)
            .map(|(node, &(x, y))| LayoutNode {
                id: node.id.clone(),
                x: x + offset_x,
                y: y + offset_y,
            })
            .collect();

        Layout {
            nodes,
            node_radius: radius,
            width: (max_x - min_x) + (self.margin + radius) * 2.0,
            height: (max_y - min_y) + (self.margin + radius) * 2.0 + self.title_band,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiagramGraph;
    use crate::schema::Schema;

    fn example_graph() -> DiagramGraph {
        DiagramGraph::from_schema(&Schema::example()).unwrap()
    }

    #[test]
    fn test_same_seed_reproduces_coordinates() {
        let graph = example_graph();
        let engine = LayoutEngine::with_seed(7);

        let a = engine.layout(&graph);
        let b = engine.layout(&graph);

        assert_eq!(a.nodes.len(), b.nodes.len());
        for (na, nb) in a.nodes.iter().zip(&b.nodes) {
            assert_eq!(na.id, nb.id);
            assert_eq!(na.x, nb.x);
            assert_eq!(na.y, nb.y);
        }
    }

    #[test]
    fn test_one_position_per_node() {
        let graph = example_graph();
        let layout = LayoutEngine::default().layout(&graph);

        assert_eq!(layout.nodes.len(), 3);
        for node in &graph.nodes {
            assert!(layout.position(&node.id).is_some());
        }
    }

    #[test]
    fn test_nodes_inside_canvas() {
        let graph = example_graph();
        let layout = LayoutEngine::default().layout(&graph);

        let r = layout.node_radius;
        for node in &layout.nodes {
            assert!(node.x - r >= 0.0 && node.x + r <= layout.width);
            assert!(node.y - r >= 0.0 && node.y + r <= layout.height);
        }
    }

    #[test]
    fn test_nodes_separate() {
        let graph = example_graph();
        let layout = LayoutEngine::default().layout(&graph);

        for (i, a) in layout.nodes.iter().enumerate() {
            for b in &layout.nodes[i + 1..] {
                let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(d > layout.node_radius, "{} and {} overlap badly", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_empty_graph_gets_empty_layout() {
        let graph = DiagramGraph::from_schema(&Schema::empty()).unwrap();
        let layout = LayoutEngine::default().layout(&graph);

        assert!(layout.nodes.is_empty());
        assert!(layout.width > 0.0);
        assert!(layout.height > 0.0);
    }

    #[test]
    fn test_single_node() {
        let schema = Schema {
            tables: vec![crate::schema::Table::new("Students", &["StudentID (PK)"])],
            relationships: vec![],
        };
        let graph = DiagramGraph::from_schema(&schema).unwrap();
        let layout = LayoutEngine::default().layout(&graph);

        assert_eq!(layout.nodes.len(), 1);
        let (x, y) = layout.position("Students").unwrap();
        assert!(x.is_finite() && y.is_finite());
    }
}
