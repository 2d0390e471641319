use glam::Vec3;

/// The mutable cursor walked over a symbol string by the geometry builder.
///
/// A push-state symbol copies the whole cursor onto the branch stack; the
/// matching pop-state symbol restores it. All four fields participate in
/// that save/restore.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleState {
    pub pos: Vec3,
    pub dir: Vec3,
    pub thickness: f32,
    pub depth: u32,
}

/// One drawable segment record, emitted per draw-forward symbol.
///
/// Records the cursor as it was at the moment of drawing: `pos` is the
/// segment start (before the forward move) and `dir` the heading the
/// cursor advanced along. The ordered node sequence, in processing order,
/// fully determines the rendered shape; downstream consumers turn
/// consecutive same-branch nodes into renderable segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StructureNode {
    pub pos: Vec3,
    pub dir: Vec3,
    pub thickness: f32,
    pub depth: u32,
}

/// Axis-aligned extents over a set of emitted node positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Componentwise min/max over all node positions, computed in one
    /// scan. Degenerate (`min == max == origin`) when `nodes` is empty.
    pub fn of_nodes(nodes: &[StructureNode]) -> Self {
        let mut iter = nodes.iter();
        let Some(first) = iter.next() else {
            return Self {
                min: Vec3::ZERO,
                max: Vec3::ZERO,
            };
        };

        let mut min = first.pos;
        let mut max = first.pos;
        for node in iter {
            min = min.min(node.pos);
            max = max.max(node.pos);
        }
        Self { min, max }
    }

    /// Whether `p` lies inside the extents, componentwise inclusive.
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_at(pos: Vec3) -> StructureNode {
        StructureNode {
            pos,
            dir: Vec3::Y,
            thickness: 0.5,
            depth: 0,
        }
    }

    #[test]
    fn bounds_of_no_nodes_is_degenerate_at_origin() {
        let bounds = Bounds::of_nodes(&[]);
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::ZERO);
        assert_eq!(bounds.size(), Vec3::ZERO);
    }

    #[test]
    fn bounds_cover_all_positions_componentwise() {
        let nodes = [
            node_at(Vec3::new(1.0, -2.0, 0.0)),
            node_at(Vec3::new(-3.0, 4.0, 1.0)),
            node_at(Vec3::new(0.5, 0.0, -1.5)),
        ];

        let bounds = Bounds::of_nodes(&nodes);
        assert_eq!(bounds.min, Vec3::new(-3.0, -2.0, -1.5));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 1.0));

        for node in &nodes {
            assert!(bounds.contains(node.pos));
        }
    }

    #[test]
    fn contains_rejects_points_outside_extents() {
        let bounds = Bounds::of_nodes(&[node_at(Vec3::ZERO), node_at(Vec3::ONE)]);
        assert!(bounds.contains(Vec3::splat(0.5)));
        assert!(!bounds.contains(Vec3::new(1.1, 0.5, 0.5)));
        assert!(!bounds.contains(Vec3::new(0.5, -0.1, 0.5)));
    }
}
